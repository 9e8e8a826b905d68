pub mod handlers;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::interviews;
use crate::store::RecordStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

/// Builds the router over any store implementation. CORS and other outer
/// layers are attached by the entry point.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/interviews",
            get(interviews::list_interviews).post(interviews::create_interview),
        )
        .route(
            "/interviews/:id",
            get(interviews::get_interview)
                .put(interviews::update_interview)
                .delete(interviews::delete_interview),
        )
        .with_state(state)
}
