use axum::Json;
use axum::extract::State;
use tracing::info;

use crate::api::AppState;
use crate::api::types::{MoodsResponse, RootResponse};

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Mood Tracker API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/moods
///
/// Never fails: a missing or corrupt file reads as an empty document.
pub async fn get_moods(State(state): State<AppState>) -> Json<MoodsResponse> {
    let moods = state.store.load();
    info!("Returning {} moods", moods.len());
    Json(MoodsResponse { moods })
}
