//! codefeedback - multi-agent LLM code review
//!
//! A CLI tool that sends code to five specialist Gemini agents and merges
//! their findings into a single review.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Missing credential, invalid arguments, or a failed model call

mod agent;
mod analysis;
mod cli;
mod config;
mod input;
mod llm;
mod models;
mod progress;
mod report;

use analysis::{NoProgress, Orchestrator, ProgressHook};
use anyhow::{Context, Result};
use chrono::Utc;
use cli::{Args, OutputFormat};
use config::{Config, CONFIG_FILE_NAME};
use input::SubmittedCode;
use llm::{ClientConfig, GeminiClient};
use models::{AgentKind, ReportMetadata, ReviewReport};
use progress::SpinnerProgress;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Environment variable holding the Gemini credential.
const API_KEY_VAR: &str = "GEMINI_API_KEY";

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Load configuration first: it can turn on verbose logging
    let (mut config, source) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);

    // Initialize logging
    init_logging(&args, &config);

    info!("codefeedback v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);
    log_config_source(&source);
    debug!("Effective config: {:?}", config);

    load_dotenv();

    let api_key = match api_key_from(std::env::var(API_KEY_VAR).ok()) {
        Some(key) => key,
        None => {
            eprintln!(
                "Error: Gemini API key not found. Set {} in your .env file",
                API_KEY_VAR
            );
            std::process::exit(1);
        }
    };
    println!("Gemini API key configured.");

    // Run the review
    match run_review(args, config, api_key).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Review failed: {:#}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .codefeedback.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "⚠️  {} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("✅ Created {} with default settings.", CONFIG_FILE_NAME);
    println!("   Edit it to customize the model, timeout, and report contents.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args, config: &Config) {
    let level = args.log_level(config.general.verbose);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Load variables from a `.env` file, if there is one.
fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Failed to load .env file: {}", e),
    }
}

/// The credential, if set to something other than whitespace.
fn api_key_from(value: Option<String>) -> Option<String> {
    value.filter(|key| !key.trim().is_empty())
}

/// Run the complete review workflow.
async fn run_review(args: Args, config: Config, api_key: String) -> Result<()> {
    let start_time = Instant::now();

    println!("🚀 Starting the Code Feedback System 🚀");

    // Step 1: Get the code
    let submitted = input::read_code(args.file.as_deref())?;
    if submitted.is_blank() {
        warn!("No code submitted; the agents will receive an empty snippet");
    }
    println!("{}", submitted.acknowledgement());
    info!(
        "Read {} lines ({} bytes) from {}",
        submitted.line_count(),
        submitted.code.len(),
        submitted.source
    );

    // Handle --dry-run: list the agents and exit
    if args.dry_run {
        handle_dry_run(&config, &submitted);
        return Ok(());
    }

    // Step 2: Initialize the model client
    let mode_str = if config.model.stream {
        "Streaming (SSE)"
    } else {
        "Single response"
    };

    println!("\n🤖 Initializing agents...");
    println!("   Model: {}", config.model.name);
    println!("   API: {}", config.model.api_base);
    println!("   Mode: {}", mode_str);
    println!("   Timeout: {}s", config.model.timeout_seconds);

    let client = GeminiClient::new(ClientConfig {
        api_key,
        base_url: config.model.api_base.clone(),
        timeout_seconds: config.model.timeout_seconds,
        stream: config.model.stream,
    })
    .context("Failed to create Gemini client")?;

    // Step 3: Run the specialists and the aggregator
    println!("\n🔬 Running code review...\n");

    let progress: Box<dyn ProgressHook> = if args.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(SpinnerProgress::new(true))
    };
    let orchestrator = Orchestrator::new(&client, config.agent_settings(), progress.as_ref());
    let outcome = orchestrator.review(&submitted.code).await?;

    // Step 4: Build the report
    let duration = start_time.elapsed().as_secs_f64();

    let metadata = ReportMetadata {
        source: submitted.source.clone(),
        review_date: Utc::now(),
        model_used: config.model.name.clone(),
        agent_calls: outcome.agent_calls(),
        input_lines: submitted.line_count(),
        input_bytes: submitted.code.len(),
        duration_seconds: duration,
    };

    let report = ReviewReport {
        metadata,
        agent_reports: outcome.agent_reports,
        review: outcome.review,
    };

    println!("\n📝 Code Review\n");
    println!("{}", report::to_console_markdown(&report.review));

    // Step 5: Save the report if asked to
    if let Some(ref path) = args.output {
        let content = match args.format {
            OutputFormat::Json => report::generate_json_report(&report)?,
            OutputFormat::Markdown => {
                report::generate_markdown_report(&report, config.report.include_agent_reports)
            }
        };

        report::write_report(&content, path)?;
        println!("\n✅ Report saved to: {}", path.display());
    }

    println!("   Agent calls: {}", report.metadata.agent_calls);
    println!("   Duration: {:.1}s", duration);

    Ok(())
}

/// Handle --dry-run: print what would run, exit without calling the model.
fn handle_dry_run(config: &Config, submitted: &SubmittedCode) {
    println!("\n🔍 Dry run: no model calls will be made.\n");
    println!("   Model: {}", config.model.name);
    println!(
        "   Input: {} lines, {} bytes from {}",
        submitted.line_count(),
        submitted.code.len(),
        submitted.source
    );
    println!("\n   Agents, in order:\n");

    for kind in AgentKind::SPECIALISTS
        .into_iter()
        .chain(std::iter::once(AgentKind::CodeReviewer))
    {
        println!("     {} {} - {}", kind.emoji(), kind, kind.description());
    }

    println!("\n✅ Dry run complete. No model calls were made.");
}

/// Where the configuration came from.
///
/// Config is loaded before logging starts, so this is logged afterwards.
#[derive(Debug)]
enum ConfigSource {
    Explicit(PathBuf),
    DefaultFile,
    BuiltIn,
    /// The default file exists but could not be loaded.
    Broken(String),
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<(Config, ConfigSource)> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        let config = Config::load(config_path)?;
        return Ok((config, ConfigSource::Explicit(config_path.clone())));
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => Ok((config, ConfigSource::DefaultFile)),
        Ok(None) => Ok((Config::default(), ConfigSource::BuiltIn)),
        Err(e) => Ok((Config::default(), ConfigSource::Broken(format!("{:#}", e)))),
    }
}

fn log_config_source(source: &ConfigSource) {
    match source {
        ConfigSource::Explicit(path) => info!("Loaded config from: {}", path.display()),
        ConfigSource::DefaultFile => info!("Loaded default config from {}", CONFIG_FILE_NAME),
        ConfigSource::BuiltIn => debug!("No config file found, using defaults"),
        ConfigSource::Broken(e) => warn!("Failed to load config: {}", e),
    }
}
