//! Data models for the code review pipeline.
//!
//! This module contains the core data structures passed between the
//! orchestrator, the agents and the report generator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six agents taking part in a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Syntax, runtime and obvious logic errors.
    ErrorDetector,
    /// Algorithmic and resource efficiency.
    PerfOptimizer,
    /// Readability, naming and maintainability.
    CodeStylist,
    /// WCAG accessibility of front-end code.
    AccessibilityAuditor,
    /// Basic security red flags.
    SecurityScanner,
    /// Aggregator that merges the specialist reports.
    CodeReviewer,
}

impl AgentKind {
    /// Specialists in the order the orchestrator runs them.
    pub const SPECIALISTS: [AgentKind; 5] = [
        AgentKind::ErrorDetector,
        AgentKind::CodeStylist,
        AgentKind::SecurityScanner,
        AgentKind::AccessibilityAuditor,
        AgentKind::PerfOptimizer,
    ];

    /// Stable machine name, also used as the session app name.
    pub fn name(&self) -> &'static str {
        match self {
            AgentKind::ErrorDetector => "errordetector",
            AgentKind::PerfOptimizer => "perfoptimizer",
            AgentKind::CodeStylist => "codestylist",
            AgentKind::AccessibilityAuditor => "accessibilityauditor",
            AgentKind::SecurityScanner => "securityscanner",
            AgentKind::CodeReviewer => "codereviewer",
        }
    }

    /// Short description of what the agent does.
    pub fn description(&self) -> &'static str {
        match self {
            AgentKind::ErrorDetector => "Error detection agent",
            AgentKind::PerfOptimizer => "Performance and data structure optimization agent",
            AgentKind::CodeStylist => "Readability and code style agent",
            AgentKind::AccessibilityAuditor => "Accessibility auditing agent",
            AgentKind::SecurityScanner => "Security verification agent",
            AgentKind::CodeReviewer => "Main orchestrating agent",
        }
    }

    /// Heading used when the agent's output appears in a report.
    pub fn section_title(&self) -> &'static str {
        match self {
            AgentKind::ErrorDetector => "Errors",
            AgentKind::PerfOptimizer => "Performance",
            AgentKind::CodeStylist => "Style and Readability",
            AgentKind::AccessibilityAuditor => "Accessibility",
            AgentKind::SecurityScanner => "Security",
            AgentKind::CodeReviewer => "Code Review",
        }
    }

    /// Returns an emoji used in progress output.
    pub fn emoji(&self) -> &'static str {
        match self {
            AgentKind::ErrorDetector => "🐞",
            AgentKind::PerfOptimizer => "⚡",
            AgentKind::CodeStylist => "🎨",
            AgentKind::AccessibilityAuditor => "♿",
            AgentKind::SecurityScanner => "🔒",
            AgentKind::CodeReviewer => "🧭",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentKind::ErrorDetector => write!(f, "ErrorDetector"),
            AgentKind::PerfOptimizer => write!(f, "PerfOptimizer"),
            AgentKind::CodeStylist => write!(f, "CodeStylist"),
            AgentKind::AccessibilityAuditor => write!(f, "AccessibilityAuditor"),
            AgentKind::SecurityScanner => write!(f, "SecurityScanner"),
            AgentKind::CodeReviewer => write!(f, "CodeReviewerAI-Core"),
        }
    }
}

/// Prose produced by one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReport {
    /// The agent that produced the text.
    pub agent: AgentKind,
    /// Raw text returned by the model (never parsed).
    pub text: String,
}

/// Metadata about the review report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Where the code came from (file path or `stdin`).
    pub source: String,
    /// Date and time of the review.
    pub review_date: DateTime<Utc>,
    /// Name of the model used by every agent.
    pub model_used: String,
    /// Number of model calls made.
    pub agent_calls: usize,
    /// Number of lines in the submitted code.
    pub input_lines: usize,
    /// Size of the submitted code in bytes.
    pub input_bytes: usize,
    /// Duration of the review in seconds.
    pub duration_seconds: f64,
}

/// The complete review report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewReport {
    /// Metadata about the report.
    pub metadata: ReportMetadata,
    /// Specialist outputs, in run order.
    pub agent_reports: Vec<AgentReport>,
    /// Final merged review from the aggregator.
    pub review: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialist_order() {
        assert_eq!(
            AgentKind::SPECIALISTS,
            [
                AgentKind::ErrorDetector,
                AgentKind::CodeStylist,
                AgentKind::SecurityScanner,
                AgentKind::AccessibilityAuditor,
                AgentKind::PerfOptimizer,
            ]
        );
        assert!(!AgentKind::SPECIALISTS.contains(&AgentKind::CodeReviewer));
    }

    #[test]
    fn test_agent_names_are_unique() {
        let mut names: Vec<_> = AgentKind::SPECIALISTS.iter().map(|k| k.name()).collect();
        names.push(AgentKind::CodeReviewer.name());
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_agent_kind_serialization() {
        let json = serde_json::to_string(&AgentKind::SecurityScanner).unwrap();
        assert_eq!(json, "\"securityscanner\"");
        assert_eq!(AgentKind::CodeReviewer.to_string(), "CodeReviewerAI-Core");
    }
}
