// Analysis history endpoint.
//
// GET /api/history?limit=N — recent analysis results, newest first.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::web::{api_error, AppState};

#[derive(Deserialize, Default)]
pub struct HistoryQuery {
    /// Max results (default 50, capped at 200)
    pub limit: Option<u32>,
}

/// GET /api/history — recent analyses.
pub async fn list_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Response {
    let limit = params.limit.unwrap_or(50).min(200);

    match state.storage.recent_analyses(limit).await {
        Ok(results) => {
            let count = results.len();
            Json(serde_json::json!({
                "analyses": results,
                "count": count,
            }))
            .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "DB error listing history");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}
