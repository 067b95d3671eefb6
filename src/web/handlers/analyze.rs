// Analysis endpoints.
//
// POST /api/analyze  — programmatic surface: always comprehensive scoring,
//                      never generation, flat response fields.
// POST /api/analysis — single-mode surface: one scorer per request, full
//                      AnalysisResult response.
//
// Missing or empty content is rejected with 400 before any scorer runs.
// A generation failure is NOT a 4xx/5xx: the result is a faithful record of
// the analysis, so it comes back 200 with the error field populated.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::db::models::AnalysisMode;
use crate::web::{api_error, AppState};

#[derive(Deserialize, Default)]
pub struct AnalyzeRequest {
    pub content: Option<String>,
}

/// POST /api/analyze — comprehensive scoring for external clients.
pub async fn analyze_comprehensive(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let Some(content) = request.content.filter(|c| !c.trim().is_empty()) else {
        return api_error(StatusCode::BAD_REQUEST, "Content is required");
    };

    let result = state
        .orchestrator
        .analyze(&content, AnalysisMode::Comprehensive)
        .await;

    Json(serde_json::json!({
        "classification": result.topic,
        "confidence": result.topic_confidence,
        "sentiment_score": result.sentiment,
        "fact_check_result": result.risk_label.map(|l| l.description()),
        "fact_score": result.risk_confidence,
    }))
    .into_response()
}

#[derive(Deserialize)]
pub struct AnalysisRequest {
    pub content: Option<String>,
    pub mode: AnalysisMode,
}

/// POST /api/analysis — one scorer, chosen by `mode`.
pub async fn analyze_single(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Response {
    let Some(content) = request.content.filter(|c| !c.trim().is_empty()) else {
        return api_error(StatusCode::BAD_REQUEST, "Content is required");
    };

    let result = state.orchestrator.analyze(&content, request.mode).await;

    Json(result).into_response()
}
