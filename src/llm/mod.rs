//! LLM annotation: the OpenRouter client and the sequential enrichment
//! loop that drives it.

pub mod client;
pub mod processor;

pub use client::OpenRouterClient;

use serde::Deserialize;

use crate::errors::AppResult;

/// Structured reply from the language model, before priority mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmReply {
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub recommendation: String,
}

/// Seam between the enrichment loop and the transport. Tests drive the loop
/// with a scripted implementation instead of a network.
pub trait AnalysisBackend {
    fn analyze(&self, description: &str, category: &str) -> AppResult<LlmReply>;
}
