use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    pub db_path: String,
    /// API key for the external generation service (OPENAI_API_KEY).
    /// Empty means the ai_generation mode reports GenerationUnavailable.
    pub generation_api_key: String,
    /// Base URL of the generation service (defaults to the OpenAI API).
    pub generation_api_url: String,
    /// Model name sent to the generation service.
    pub generation_model: String,
    /// Base URL of the geocoding service (defaults to Nominatim).
    pub geocoder_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the generation API key, which is
    /// only required when ai_generation requests should succeed.
    pub fn load() -> Result<Self> {
        Ok(Self {
            db_path: env::var("LANTERN_DB_PATH").unwrap_or_else(|_| "./lantern.db".to_string()),
            generation_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            generation_api_url: env::var("LANTERN_GENERATION_URL")
                .unwrap_or_else(|_| crate::generation::openai::DEFAULT_API_URL.to_string()),
            generation_model: env::var("LANTERN_GENERATION_MODEL")
                .unwrap_or_else(|_| crate::generation::openai::DEFAULT_MODEL.to_string()),
            geocoder_url: env::var("LANTERN_GEOCODER_URL")
                .unwrap_or_else(|_| crate::geo::DEFAULT_GEOCODER_URL.to_string()),
        })
    }

    /// Check that the generation API key is configured.
    /// Call this before any operation that must produce generated text.
    pub fn require_generation(&self) -> Result<()> {
        if self.generation_api_key.is_empty() {
            anyhow::bail!(
                "OPENAI_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
