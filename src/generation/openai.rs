// OpenAI-compatible chat-completions implementation.
//
// Sends the fixed two-message prompt with a bounded output budget. The
// request timeout lives on the reqwest client, so one slow generation call
// cannot hold up anything beyond its own request.
//
// API shape: POST {base}/chat/completions with a bearer token.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompts;
use super::TextGenerator;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Output-length budget per generation, in tokens.
const MAX_OUTPUT_TOKENS: u32 = 300;

/// Per-request timeout for the generation service.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat-completions generator.
pub struct OpenAiGenerator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(base_url: &str, api_key: String, model: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, content: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompts::system().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompts::user(content),
                },
            ],
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to call generation service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Generation service returned {}: {}", status, body);
        }

        let result: ChatResponse = response
            .json()
            .await
            .context("Failed to parse generation service response")?;

        let text = result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .context("Generation service returned no choices")?;

        debug!(
            response_chars = text.len(),
            model = %self.model,
            "Generated response"
        );

        Ok(text)
    }
}

// --- Chat-completions request/response types ---

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
