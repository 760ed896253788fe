//! HTTP API
//!
//! Each request loads the mood document from disk, applies its change and
//! writes the whole document back. Handlers are grouped by what they do to
//! the document: `get` reads it, `set` replaces or upserts into it and
//! `clear` removes it.

pub mod clear;
pub mod error;
pub mod get;
pub mod set;
pub mod types;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::store::MoodStore;

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: MoodStore,
}

/// Build the router with all routes and the CORS layer
pub fn router(state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
    // credentials rule out wildcards, so methods and headers are mirrored
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/", get(get::root))
        .route(
            "/api/moods",
            get(get::get_moods)
                .post(set::set_moods)
                .delete(clear::clear_moods),
        )
        .route("/api/mood", post(set::set_mood))
        .layer(cors)
        .with_state(state)
}
