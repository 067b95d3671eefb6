// AI rebuttal generation — trait-based abstraction for swappable providers.
//
// The TextGenerator trait defines the interface; OpenAiGenerator implements
// it against a chat-completions API. Failures are surfaced to the caller as
// GenerationUnavailable, never retried here — masking them would
// misrepresent where an analysis came from.

pub mod openai;
pub mod prompts;

use anyhow::Result;
use async_trait::async_trait;

/// Trait for generating a fact-checked response to caller-supplied content.
/// Implementations are async because providers sit behind HTTP APIs.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a response for the given content. Returns the raw generated
    /// text; any failure (network, quota, malformed response) is an error
    /// with a human-readable reason.
    async fn generate(&self, content: &str) -> Result<String>;
}

/// Generator used when no API key is configured. Always fails with a setup
/// hint, which the orchestrator surfaces as GenerationUnavailable.
pub struct UnconfiguredGenerator;

#[async_trait]
impl TextGenerator for UnconfiguredGenerator {
    async fn generate(&self, _content: &str) -> Result<String> {
        anyhow::bail!(
            "Generation service not configured — set OPENAI_API_KEY to enable ai_generation"
        )
    }
}
