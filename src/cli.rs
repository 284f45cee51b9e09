//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// codefeedback - multi-agent LLM code review
///
/// Sends your code to five specialist agents (errors, style, security,
/// accessibility, performance) and merges their findings into one report.
/// Requires GEMINI_API_KEY in the environment or in a .env file.
///
/// Examples:
///   codefeedback < app.py
///   codefeedback --file src/index.html --output review.md
///   codefeedback --file main.go --format json --output review.json
///   codefeedback --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// File containing the code to review
    ///
    /// If not specified, code is read from standard input until EOF.
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Gemini model used by every agent
    ///
    /// Can also be set via CODEFEEDBACK_MODEL env var or .codefeedback.toml config.
    #[arg(short, long, env = "CODEFEEDBACK_MODEL")]
    pub model: Option<String>,

    /// Gemini API base URL
    #[arg(long, value_name = "URL", env = "GEMINI_API_BASE")]
    pub api_base: Option<String>,

    /// Also write the report to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Format of the report file (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Temperature for model responses (0.0 - 2.0)
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Request timeout in seconds, per agent call
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Use the streaming endpoint
    #[arg(long)]
    pub stream: bool,

    /// Do not attach Google Search grounding to agent requests
    #[arg(long)]
    pub no_google_search: bool,

    /// Path to configuration file
    ///
    /// If not specified, looks for .codefeedback.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Read the code and list the agents without calling the model
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .codefeedback.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if let Some(ref api_base) = self.api_base {
            if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
                return Err("API base URL must start with 'http://' or 'https://'".to_string());
            }
        }

        if let Some(ref model) = self.model {
            if model.trim().is_empty() {
                return Err("Model name cannot be empty".to_string());
            }
        }

        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err("Temperature must be between 0.0 and 2.0".to_string());
            }
        }

        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err("Timeout must be at least 1 second".to_string());
            }
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref file) = self.file {
            if !file.is_file() {
                return Err(format!("Code file does not exist: {}", file.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    ///
    /// `verbose_default` comes from the config file; `--quiet` overrides it.
    pub fn log_level(&self, verbose_default: bool) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose || verbose_default {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            file: None,
            model: None,
            api_base: None,
            output: None,
            format: OutputFormat::Markdown,
            temperature: None,
            timeout: None,
            stream: false,
            no_google_search: false,
            config: None,
            verbose: false,
            quiet: false,
            dry_run: false,
            init_config: false,
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(make_args().validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_api_base() {
        let mut args = make_args();
        args.api_base = Some("generativelanguage.googleapis.com".to_string());
        assert!(args.validate().is_err());

        args.api_base = Some("http://localhost:8080".to_string());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_temperature_and_timeout() {
        let mut args = make_args();
        args.temperature = Some(2.5);
        assert!(args.validate().is_err());

        args.temperature = Some(1.5);
        args.timeout = Some(0);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_missing_file() {
        let mut args = make_args();
        args.file = Some(PathBuf::from("/no/such/file.rs"));
        assert!(args.validate().unwrap_err().contains("does not exist"));
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_init_config_skips_validation() {
        let mut args = make_args();
        args.init_config = true;
        args.timeout = Some(0);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(false), tracing::Level::INFO);
        assert_eq!(args.log_level(true), tracing::Level::DEBUG);

        args.verbose = true;
        assert_eq!(args.log_level(false), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(false), tracing::Level::ERROR);
        assert_eq!(args.log_level(true), tracing::Level::ERROR);
    }

    #[test]
    fn test_parse_format_flag() {
        let args = Args::parse_from(["codefeedback", "--format", "json", "-o", "out.json"]);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
    }
}
