//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.codefeedback.toml` files.

use crate::agent::AgentSettings;
use crate::llm::DEFAULT_API_BASE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".codefeedback.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Model settings.
    #[serde(default)]
    pub model: ModelConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Generative model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model used by every agent.
    #[serde(default = "default_model")]
    pub name: String,

    /// Base URL of the Gemini API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Temperature for generation.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Use the streaming endpoint.
    #[serde(default)]
    pub stream: bool,

    /// Attach Google Search grounding to agent requests.
    #[serde(default = "default_true")]
    pub google_search: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model(),
            api_base: default_api_base(),
            temperature: default_temperature(),
            timeout_seconds: default_timeout(),
            stream: false,
            google_search: true,
        }
    }
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_timeout() -> u64 {
    300
}

fn default_true() -> bool {
    true
}

/// Report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Append each specialist's raw output to report files.
    #[serde(default = "default_true")]
    pub include_agent_reports: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_agent_reports: true,
        }
    }
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load `.codefeedback.toml` from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were actually given.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref model) = args.model {
            self.model.name = model.clone();
        }
        if let Some(ref api_base) = args.api_base {
            self.model.api_base = api_base.clone();
        }
        if let Some(temperature) = args.temperature {
            self.model.temperature = temperature;
        }
        if let Some(timeout) = args.timeout {
            self.model.timeout_seconds = timeout;
        }

        // Flags only ever switch their setting one way
        if args.stream {
            self.model.stream = true;
        }
        if args.no_google_search {
            self.model.google_search = false;
        }
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Agent settings derived from the model section.
    pub fn agent_settings(&self) -> AgentSettings {
        AgentSettings {
            model_name: self.model.name.clone(),
            temperature: self.model.temperature,
            google_search: self.model.google_search,
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model.name, "gemini-2.0-flash");
        assert_eq!(config.model.api_base, "https://generativelanguage.googleapis.com");
        assert_eq!(config.model.timeout_seconds, 300);
        assert!(config.model.google_search);
        assert!(!config.model.stream);
        assert!(config.report.include_agent_reports);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
verbose = true

[model]
name = "gemini-1.5-pro"
temperature = 0.4
stream = true

[report]
include_agent_reports = false
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(config.general.verbose);
        assert_eq!(config.model.name, "gemini-1.5-pro");
        assert_eq!(config.model.temperature, 0.4);
        assert!(config.model.stream);
        assert!(config.model.google_search);
        assert_eq!(config.model.timeout_seconds, 300);
        assert!(!config.report.include_agent_reports);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[model]"));
        assert!(toml_str.contains("[report]"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.model.name, "gemini-2.0-flash");
    }

    #[test]
    fn test_merge_only_overrides_given_args() {
        let mut config: Config = toml::from_str("[model]\nname = \"from-file\"\ntemperature = 0.9\n").unwrap();

        let args = Args::parse_from(["codefeedback", "--timeout", "60", "--no-google-search"]);
        config.merge_with_args(&args);
        assert_eq!(config.model.name, "from-file");
        assert_eq!(config.model.temperature, 0.9);
        assert_eq!(config.model.timeout_seconds, 60);
        assert!(!config.model.google_search);

        let args = Args::parse_from(["codefeedback", "--model", "gemini-2.5-pro", "--stream"]);
        config.merge_with_args(&args);
        assert_eq!(config.model.name, "gemini-2.5-pro");
        assert!(config.model.stream);

        let settings = config.agent_settings();
        assert_eq!(settings.model_name, "gemini-2.5-pro");
        assert!(!settings.google_search);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from_dir(dir.path()).unwrap().is_none());

        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[model]\ntimeout_seconds = 15\n").unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap().unwrap();
        assert_eq!(config.model.timeout_seconds, 15);

        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[model\n").unwrap();
        assert!(Config::load_from_dir(dir.path()).is_err());
    }
}
