//! Agent definitions.
//!
//! An agent pairs a fixed instruction with a hosted model. Every agent in a
//! run shares the same [`AgentSettings`].

use super::prompts;
use crate::models::AgentKind;

/// Model settings shared by all agents.
#[derive(Debug, Clone)]
pub struct AgentSettings {
    pub model_name: String,
    pub temperature: f32,
    /// Attach the Google Search grounding tool to every request.
    pub google_search: bool,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            model_name: "gemini-2.0-flash".to_string(),
            temperature: 0.2,
            google_search: true,
        }
    }
}

/// A configured agent.
#[derive(Debug, Clone)]
pub struct Agent {
    pub kind: AgentKind,
    pub model: String,
    pub instruction: &'static str,
    pub temperature: f32,
    pub google_search: bool,
}

impl Agent {
    /// Build the agent of the given kind.
    pub fn for_kind(kind: AgentKind, settings: &AgentSettings) -> Self {
        Self {
            kind,
            model: settings.model_name.clone(),
            instruction: instruction_for(kind),
            temperature: settings.temperature,
            google_search: settings.google_search,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }
}

/// Instruction text for an agent kind.
pub fn instruction_for(kind: AgentKind) -> &'static str {
    match kind {
        AgentKind::ErrorDetector => prompts::ERROR_DETECTOR,
        AgentKind::PerfOptimizer => prompts::PERF_OPTIMIZER,
        AgentKind::CodeStylist => prompts::CODE_STYLIST,
        AgentKind::AccessibilityAuditor => prompts::ACCESSIBILITY_AUDITOR,
        AgentKind::SecurityScanner => prompts::SECURITY_SCANNER,
        AgentKind::CodeReviewer => prompts::CODE_REVIEWER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_kind_uses_settings() {
        let settings = AgentSettings {
            model_name: "gemini-1.5-pro".to_string(),
            temperature: 0.7,
            google_search: false,
        };
        let agent = Agent::for_kind(AgentKind::SecurityScanner, &settings);

        assert_eq!(agent.name(), "securityscanner");
        assert_eq!(agent.model, "gemini-1.5-pro");
        assert_eq!(agent.temperature, 0.7);
        assert!(!agent.google_search);
        assert!(agent.instruction.starts_with("You are SecurityScanner"));
    }

    #[test]
    fn test_instructions_are_distinct() {
        let mut kinds = AgentKind::SPECIALISTS.to_vec();
        kinds.push(AgentKind::CodeReviewer);

        for kind in &kinds {
            let text = instruction_for(*kind);
            assert!(text.contains(&kind.to_string()), "{kind} missing its own name");
        }

        let mut texts: Vec<_> = kinds.iter().map(|k| instruction_for(*k)).collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), 6);
    }

    #[test]
    fn test_specialists_mention_orchestrator() {
        for kind in AgentKind::SPECIALISTS {
            assert!(instruction_for(kind).contains("CodeReviewerAI-Core"));
        }
    }
}
