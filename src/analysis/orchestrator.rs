//! Review orchestration.
//!
//! Runs the five specialists one after another, then hands their reports
//! and the submitted code to the aggregator.

use crate::agent::{call_agent, specialist_message, Agent, AgentSettings};
use crate::llm::GenerativeModel;
use crate::models::{AgentKind, AgentReport};
use anyhow::Result;
use tracing::{debug, info};

/// Observer notified around each agent call.
pub trait ProgressHook: Send + Sync {
    fn agent_started(&self, kind: AgentKind);
    fn agent_finished(&self, kind: AgentKind, response_len: usize);
}

/// Hook that ignores every notification.
pub struct NoProgress;

impl ProgressHook for NoProgress {
    fn agent_started(&self, _kind: AgentKind) {}
    fn agent_finished(&self, _kind: AgentKind, _response_len: usize) {}
}

/// Result of a complete review.
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    /// Specialist reports, in run order.
    pub agent_reports: Vec<AgentReport>,
    /// Final text from the aggregator.
    pub review: String,
}

impl ReviewOutcome {
    /// Number of model calls that produced this outcome.
    pub fn agent_calls(&self) -> usize {
        self.agent_reports.len() + 1
    }
}

/// Sequential fan-out / fan-in over the review agents.
pub struct Orchestrator<'a> {
    model: &'a dyn GenerativeModel,
    settings: AgentSettings,
    progress: &'a dyn ProgressHook,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        model: &'a dyn GenerativeModel,
        settings: AgentSettings,
        progress: &'a dyn ProgressHook,
    ) -> Self {
        Self {
            model,
            settings,
            progress,
        }
    }

    /// Review `code`. The first failing call aborts the review.
    pub async fn review(&self, code: &str) -> Result<ReviewOutcome> {
        let message = specialist_message(code);
        let mut agent_reports = Vec::with_capacity(AgentKind::SPECIALISTS.len());

        for kind in AgentKind::SPECIALISTS {
            let text = self.run_agent(kind, &message).await?;
            agent_reports.push(AgentReport { agent: kind, text });
        }

        let aggregator_input = aggregator_message(code, &agent_reports);
        debug!("Aggregator input is {} bytes", aggregator_input.len());

        let review = self
            .run_agent(AgentKind::CodeReviewer, &aggregator_input)
            .await?;

        info!("Review complete");
        Ok(ReviewOutcome {
            agent_reports,
            review,
        })
    }

    async fn run_agent(&self, kind: AgentKind, message: &str) -> Result<String> {
        let agent = Agent::for_kind(kind, &self.settings);
        info!("Calling {} ({})", kind, agent.description());

        self.progress.agent_started(kind);
        let text = call_agent(self.model, &agent, message).await?;
        self.progress.agent_finished(kind, text.len());

        Ok(text)
    }
}

/// Compose the aggregator input: the code followed by each specialist report.
pub fn aggregator_message(code: &str, reports: &[AgentReport]) -> String {
    let mut message = specialist_message(code);

    message.push_str("\n\nBelow are the reports from the specialist agents.\n");
    for report in reports {
        message.push_str(&format!(
            "\n=== {} ({}) ===\n",
            report.agent.section_title(),
            report.agent
        ));
        message.push_str(report.text.trim_end());
        message.push('\n');
    }
    message.push_str("\n=== END OF REPORTS ===\n");

    message
}
