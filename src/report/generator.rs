//! Report generation.
//!
//! Renders the final review for the console and produces Markdown or JSON
//! report files.

use crate::models::{AgentReport, ReportMetadata, ReviewReport};
use anyhow::{Context, Result};
use std::path::Path;

/// Render text as a Markdown blockquote for the terminal.
///
/// `•` bullets become Markdown list items and every line, blank ones
/// included, is prefixed with `> `.
pub fn to_console_markdown(text: &str) -> String {
    let text = text.replace('•', "  *");
    let mut output = String::with_capacity(text.len() + text.len() / 8);

    for line in text.split_inclusive('\n') {
        output.push_str("> ");
        output.push_str(line);
    }

    output
}

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &ReviewReport, include_agent_reports: bool) -> String {
    let mut output = String::new();

    output.push_str("# Code Feedback Report\n\n");
    output.push_str(&generate_metadata_section(&report.metadata));

    output.push_str("## Review\n\n");
    if report.review.trim().is_empty() {
        output.push_str("*The reviewer returned no text.*\n\n");
    } else {
        output.push_str(report.review.trim_end());
        output.push_str("\n\n");
    }

    if include_agent_reports {
        output.push_str(&generate_agent_reports_section(&report.agent_reports));
    }

    output.push_str(&generate_footer());

    output
}

fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Source:** {}\n", metadata.source));
    section.push_str(&format!(
        "- **Review Date:** {}\n",
        metadata.review_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!("- **Model Used:** `{}`\n", metadata.model_used));
    section.push_str(&format!("- **Agent Calls:** {}\n", metadata.agent_calls));
    section.push_str(&format!(
        "- **Input:** {} lines, {} bytes\n",
        metadata.input_lines, metadata.input_bytes
    ));
    section.push_str(&format!(
        "- **Review Duration:** {:.1}s\n",
        metadata.duration_seconds
    ));
    section.push('\n');

    section
}

fn generate_agent_reports_section(reports: &[AgentReport]) -> String {
    if reports.is_empty() {
        return String::new();
    }

    let mut section = String::new();
    section.push_str("## Specialist Reports\n\n");

    for report in reports {
        section.push_str(&format!(
            "### {} {} ({})\n\n",
            report.agent.emoji(),
            report.agent.section_title(),
            report.agent
        ));
        if report.text.trim().is_empty() {
            section.push_str("*No output.*\n\n");
        } else {
            section.push_str(report.text.trim_end());
            section.push_str("\n\n");
        }
    }

    section
}

fn generate_footer() -> String {
    let mut footer = String::new();

    footer.push_str("---\n\n");
    footer.push_str("*Report generated by codefeedback. Findings are produced by a language model and may be incomplete or wrong.*\n");

    footer
}

/// Generate a JSON report.
pub fn generate_json_report(report: &ReviewReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Write rendered report content to `path`.
pub fn write_report(content: &str, path: &Path) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report to {}", path.display()))
}
