// Data models — Rust structs that map to database rows.
//
// These are the types that flow through the application. They're separate
// from the database queries so other modules can use them without depending
// on rusqlite directly.

use serde::{Deserialize, Serialize};

use crate::analysis::corpus::Topic;
use crate::analysis::risk::RiskLabel;

/// Which scorer(s) an analysis request runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    Classification,
    Sentiment,
    FactCheck,
    AiGeneration,
    /// Classification + sentiment + risk in one pass. Never runs generation.
    Comprehensive,
}

impl AnalysisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Classification => "classification",
            AnalysisMode::Sentiment => "sentiment",
            AnalysisMode::FactCheck => "fact_check",
            AnalysisMode::AiGeneration => "ai_generation",
            AnalysisMode::Comprehensive => "comprehensive",
        }
    }
}

impl std::str::FromStr for AnalysisMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classification" => Ok(AnalysisMode::Classification),
            "sentiment" => Ok(AnalysisMode::Sentiment),
            "fact_check" => Ok(AnalysisMode::FactCheck),
            "ai_generation" => Ok(AnalysisMode::AiGeneration),
            "comprehensive" => Ok(AnalysisMode::Comprehensive),
            other => anyhow::bail!(
                "Unknown analysis mode '{other}' (expected classification, \
                 sentiment, fact_check, ai_generation, or comprehensive)"
            ),
        }
    }
}

impl std::fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Typed pipeline errors that can appear on an AnalysisResult.
///
/// Only InvalidRequest and GenerationUnavailable ever reach a result:
/// degenerate extraction absorbs into the `unknown` topic sentinel, and
/// persistence failures are logged without touching the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorKind {
    /// Required input missing or empty — rejected before any scoring.
    InvalidRequest,
    /// Text produced no usable features.
    ExtractionDegenerate,
    /// External generation service failed — surfaced, never retried here.
    GenerationUnavailable { reason: String },
    /// Storage append failed.
    PersistenceFailed,
}

/// One analysis outcome, created once per request by the orchestrator and
/// immutable after creation. Persisted append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub mode: AnalysisMode,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Topic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_label: Option<RiskLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
    pub created_at: String,
}

impl AnalysisResult {
    /// A result with no axes populated yet, stamped with the current time.
    pub fn empty(mode: AnalysisMode, content: &str) -> Self {
        Self {
            mode,
            content: content.to_string(),
            topic: None,
            topic_confidence: None,
            sentiment: None,
            risk_label: None,
            risk_confidence: None,
            generated_text: None,
            error: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// A service center in the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Center {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub services: Option<String>,
    /// Risk-scorer confidence for the services description, recorded when
    /// the center is added.
    pub fact_check_score: Option<f64>,
    pub created_at: String,
}

/// A center about to be inserted (no id/created_at yet).
#[derive(Debug, Clone)]
pub struct NewCenter {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub services: Option<String>,
    pub fact_check_score: Option<f64>,
}
