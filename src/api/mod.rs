mod handlers;
mod models;

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::AppState;

pub use handlers::{not_found, process_image, IMAGE_FIELD};
pub use models::{ErrorResponse, ProcessResponse};

pub const PROCESS_IMAGE_PATH: &str = "/api/ImageProcessor/process";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            PROCESS_IMAGE_PATH,
            post(process_image).layer(DefaultBodyLimit::disable()),
        )
        .fallback(not_found)
        .with_state(state)
}
