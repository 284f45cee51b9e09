//! LLM agents for code review.
//!
//! This module provides the agent definitions and the runner that sends a
//! single message to an agent and collects its answer.

pub mod definition;
pub mod prompts;
pub mod runner;

pub use definition::{Agent, AgentSettings};
pub use runner::{call_agent, specialist_message};
