//! API routes module

pub mod events;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Event prediction and free-slot suggestion routes
        .nest("/events", events::router())
}
