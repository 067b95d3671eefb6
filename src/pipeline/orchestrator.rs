// Analysis orchestrator — dispatches one request to the relevant scorer(s)
// and assembles a uniform result record.
//
// Per-request flow: Received -> Dispatched -> Scored -> Persisted ->
// Responded. Only the generation path can fail terminally; classification,
// sentiment, and risk absorb their own failures into sentinel values.
// Persistence is fire-and-forget: a storage failure is logged and the
// already-computed result is returned untouched.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::analysis::classifier::TopicModel;
use crate::analysis::{risk, sentiment};
use crate::db::models::{AnalysisMode, AnalysisResult, ErrorKind};
use crate::db::Storage;
use crate::generation::TextGenerator;

/// Orchestrates the four scorers over a shared, read-only model.
///
/// Holds no mutable state: the TopicModel is built once at startup and the
/// collaborators manage their own synchronization, so one Orchestrator is
/// shared across all concurrent requests.
pub struct Orchestrator {
    model: Arc<TopicModel>,
    generator: Arc<dyn TextGenerator>,
    storage: Arc<dyn Storage>,
}

impl Orchestrator {
    pub fn new(
        model: Arc<TopicModel>,
        generator: Arc<dyn TextGenerator>,
        storage: Arc<dyn Storage>,
    ) -> Self {
        Self {
            model,
            generator,
            storage,
        }
    }

    /// Analyze content in the requested mode.
    ///
    /// Empty content short-circuits to an InvalidRequest result with no
    /// scorer invoked and no persistence attempted. Everything else is
    /// scored, persisted (best effort), and returned.
    pub async fn analyze(&self, content: &str, mode: AnalysisMode) -> AnalysisResult {
        let mut result = AnalysisResult::empty(mode, content);

        if content.trim().is_empty() {
            result.error = Some(ErrorKind::InvalidRequest);
            return result;
        }

        match mode {
            AnalysisMode::Classification => self.score_classification(&mut result),
            AnalysisMode::Sentiment => self.score_sentiment(&mut result),
            AnalysisMode::FactCheck => self.score_risk(&mut result),
            AnalysisMode::AiGeneration => self.score_generation(&mut result).await,
            AnalysisMode::Comprehensive => {
                // The programmatic path: all local scorers, never generation.
                self.score_classification(&mut result);
                self.score_sentiment(&mut result);
                self.score_risk(&mut result);
            }
        }

        self.persist(&result).await;
        result
    }

    fn score_classification(&self, result: &mut AnalysisResult) {
        let (topic, confidence) = self.model.classify(&result.content);
        debug!(topic = %topic, confidence, "Classified content");
        result.topic = Some(topic);
        result.topic_confidence = Some(confidence);
    }

    fn score_sentiment(&self, result: &mut AnalysisResult) {
        result.sentiment = Some(sentiment::score(&result.content));
    }

    fn score_risk(&self, result: &mut AnalysisResult) {
        let (label, confidence) = risk::assess(&result.content);
        result.risk_label = Some(label);
        result.risk_confidence = Some(confidence);
    }

    async fn score_generation(&self, result: &mut AnalysisResult) {
        match self.generator.generate(&result.content).await {
            Ok(text) => result.generated_text = Some(text),
            Err(e) => {
                warn!(error = %e, "Generation failed");
                result.error = Some(ErrorKind::GenerationUnavailable {
                    reason: e.to_string(),
                });
            }
        }
    }

    /// Fire-and-forget persistence: failure is logged, never propagated.
    async fn persist(&self, result: &AnalysisResult) {
        if let Err(e) = self.storage.append_analysis(result).await {
            warn!(error = %e, mode = %result.mode, "Failed to persist analysis result");
        }
    }
}
