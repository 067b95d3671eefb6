// Center directory endpoints.
//
// GET  /api/centers — all centers.
// POST /api/centers — geocode the address, screen the services description
//                     through the risk scorer, insert. Un-geocodable
//                     addresses are rejected with 422.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::analysis::risk;
use crate::db::models::NewCenter;
use crate::web::{api_error, AppState};

/// GET /api/centers — list all centers.
pub async fn list_centers(State(state): State<AppState>) -> Response {
    match state.storage.list_centers().await {
        Ok(centers) => Json(centers).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "DB error listing centers");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}

#[derive(Deserialize)]
pub struct AddCenterRequest {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub services: Option<String>,
}

/// POST /api/centers — geocode and insert a new center.
pub async fn add_center(
    State(state): State<AppState>,
    Json(request): Json<AddCenterRequest>,
) -> Response {
    if request.name.trim().is_empty() || request.address.trim().is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "Name and address are required");
    }

    let point = match state.geocoder.geocode(&request.address).await {
        Ok(Some(point)) => point,
        Ok(None) => {
            return api_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Could not geocode address. Please check the address.",
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Geocoder error");
            return api_error(StatusCode::BAD_GATEWAY, "Geocoding service unavailable");
        }
    };

    // Record how trustworthy the center's own services copy looks.
    let fact_check_score = request.services.as_deref().map(|s| risk::assess(s).1);

    let center = NewCenter {
        name: request.name,
        address: request.address,
        latitude: point.latitude,
        longitude: point.longitude,
        phone: request.phone,
        website: request.website,
        services: request.services,
        fact_check_score,
    };

    match state.storage.insert_center(&center).await {
        Ok(id) => (StatusCode::CREATED, Json(serde_json::json!({ "id": id }))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "DB error inserting center");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}
