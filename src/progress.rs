//! Terminal spinners for agent calls.

use crate::analysis::ProgressHook;
use crate::models::AgentKind;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows one spinner per running agent.
pub struct SpinnerProgress {
    visible: bool,
    current: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    /// Spinners are drawn only when `visible` is set.
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            current: Mutex::new(None),
        }
    }

    fn spinner(&self) -> ProgressBar {
        let pb = if self.visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden())
        };

        let style = ProgressStyle::default_spinner()
            .template("   {spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        self.current
            .lock()
            .map(|current| current.is_some())
            .unwrap_or(false)
    }
}

impl ProgressHook for SpinnerProgress {
    fn agent_started(&self, kind: AgentKind) {
        let pb = self.spinner();
        pb.set_message(format!("{} {} is reviewing...", kind.emoji(), kind));
        if self.visible {
            pb.enable_steady_tick(Duration::from_millis(120));
        }

        if let Ok(mut current) = self.current.lock() {
            if let Some(previous) = current.replace(pb) {
                previous.abandon();
            }
        }
    }

    fn agent_finished(&self, kind: AgentKind, response_len: usize) {
        if let Ok(mut current) = self.current.lock() {
            if let Some(pb) = current.take() {
                pb.finish_with_message(format!(
                    "{} {} done ({} bytes)",
                    kind.emoji(),
                    kind,
                    response_len
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let progress = SpinnerProgress::new(false);
        assert!(!progress.is_running());

        progress.agent_started(AgentKind::ErrorDetector);
        assert!(progress.is_running());

        progress.agent_finished(AgentKind::ErrorDetector, 120);
        assert!(!progress.is_running());
    }

    #[test]
    fn test_finish_without_start_is_harmless() {
        let progress = SpinnerProgress::new(false);
        progress.agent_finished(AgentKind::CodeReviewer, 0);
        assert!(!progress.is_running());
    }
}
