use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::info;

use crate::api::error::ApiError;
use crate::api::types::{MoodData, SavedMoodResponse, SavedMoodsResponse, SingleMood};
use crate::api::AppState;
use crate::util::is_valid_date;

/// POST /api/moods
///
/// Replaces the whole document. Every key is checked before anything is
/// written, so one bad date rejects the entire request.
pub async fn set_moods(
    State(state): State<AppState>,
    payload: Result<Json<MoodData>, JsonRejection>,
) -> Result<Json<SavedMoodsResponse>, ApiError> {
    let Json(MoodData { moods }) = payload?;

    if let Some(bad) = moods.keys().find(|key| !is_valid_date(key)) {
        return Err(ApiError::InvalidDate(bad.clone()));
    }

    state.store.save(&moods).map_err(ApiError::SaveFailed)?;
    info!("Replaced mood document with {} entries", moods.len());

    Ok(Json(SavedMoodsResponse {
        message: "Moods saved successfully",
        count: moods.len(),
    }))
}

/// POST /api/mood
///
/// Inserts or overwrites a single date.
pub async fn set_mood(
    State(state): State<AppState>,
    payload: Result<Json<SingleMood>, JsonRejection>,
) -> Result<Json<SavedMoodResponse>, ApiError> {
    let Json(SingleMood { date, mood }) = payload?;

    if !is_valid_date(&date) {
        return Err(ApiError::InvalidDate(date));
    }

    // load, mutate, save; a concurrent writer in between is overwritten
    let mut moods = state.store.load();
    moods.insert(date.clone(), mood.clone());
    state.store.save(&moods).map_err(ApiError::SaveFailed)?;
    info!("Saved mood for {}", date);

    Ok(Json(SavedMoodResponse {
        message: "Mood saved successfully",
        date,
        mood,
    }))
}
