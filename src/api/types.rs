//! Request and response bodies

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::MoodDocument;

/// Body of `POST /api/moods`, the full replacement document
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoodData {
    pub moods: MoodDocument,
}

/// Body of `POST /api/mood`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SingleMood {
    /// `YYYY-MM-DD`
    pub date: String,
    pub mood: Value,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MoodsResponse {
    pub moods: MoodDocument,
}

#[derive(Debug, Serialize)]
pub struct SavedMoodsResponse {
    pub message: &'static str,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct SavedMoodResponse {
    pub message: &'static str,
    pub date: String,
    pub mood: Value,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
