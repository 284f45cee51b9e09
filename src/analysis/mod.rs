//! Review orchestration.
//!
//! This module runs the specialist agents and the aggregator in sequence.

pub mod orchestrator;

pub use orchestrator::{NoProgress, Orchestrator, ProgressHook};
