use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::provider::ProviderError;

pub const NO_IMAGE_MESSAGE: &str = "No image uploaded.";

/// Every failure the image endpoint can surface to a caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No image uploaded.")]
    NoImage,
    #[error("invalid multipart body: {0}")]
    Multipart(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoImage | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Provider(err) => {
                tracing::error!(error = %err, "model provider call failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            other => {
                tracing::debug!(error = %other, "rejected upload");
                (other.status(), other.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    #[tokio::test]
    async fn no_image_is_plain_text_400() {
        let response = ApiError::NoImage.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_of(response).await, b"No image uploaded.");
    }

    #[tokio::test]
    async fn provider_fault_is_bare_500() {
        let response = ApiError::from(ProviderError::NoChoices).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_of(response).await.is_empty());
    }

    #[test]
    fn multipart_errors_are_client_errors() {
        let err = ApiError::Multipart("stream ended early".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "invalid multipart body: stream ended early");
    }
}
