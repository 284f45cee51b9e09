//! Generative model access.
//!
//! This module wraps the hosted Gemini API behind the [`GenerativeModel`] trait.

pub mod client;
pub mod types;

pub use client::{ClientConfig, GeminiClient, GenerativeModel, LlmError, DEFAULT_API_BASE};
pub use types::{Content, GenerateRequest, ModelEvent};
