use axum::Json;
use axum::extract::State;
use tracing::info;

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::api::types::MessageResponse;

/// DELETE /api/moods
pub async fn clear_moods(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.clear().map_err(ApiError::ClearFailed)?;
    info!("Cleared all moods");

    Ok(Json(MessageResponse {
        message: "All moods cleared successfully",
    }))
}
