use std::{sync::Arc, time::Instant};

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{error::ApiError, AppState};

use super::models::{ErrorResponse, ProcessResponse};

/// Multipart field carrying the uploaded image.
pub const IMAGE_FIELD: &str = "image";

pub async fn process_image(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    // A body that is not multipart at all carries no image either.
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!(%rejection, "request is not multipart");
        ApiError::NoImage
    })?;

    let image = read_image(multipart).await?;
    tracing::debug!(bytes = image.len(), "image received");

    let started = Instant::now();
    let raw = state.provider.analyze_image(&image).await?;
    tracing::debug!(elapsed = ?started.elapsed(), "model provider responded");

    Ok(Json(ProcessResponse { raw }))
}

/// Buffers the first `image` file part. Text parts and other fields are skipped.
async fn read_image(mut multipart: Multipart) -> Result<Vec<u8>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Multipart(e.body_text()))?
    {
        let is_image = field
            .name()
            .is_some_and(|name| name.eq_ignore_ascii_case(IMAGE_FIELD));
        if !is_image || field.file_name().is_none() {
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Multipart(e.body_text()))?;
        if bytes.is_empty() {
            return Err(ApiError::NoImage);
        }
        return Ok(bytes.to_vec());
    }

    Err(ApiError::NoImage)
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
