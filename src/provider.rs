//! Chat-completion client for the hosted vision model.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompt::EXTRACTION_PROMPT;

pub const VISION_MODEL: &str = "gpt-4o-mini";
pub const IMAGE_MEDIA_TYPE: &str = "image/jpeg";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to reach model provider: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model provider returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to decode model provider response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("model provider returned no choices")]
    NoChoices,
    #[error("model provider returned a message without text content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub(crate) enum ChatMessage<'a> {
    System { content: &'a str },
    User { content: Vec<ContentPart> },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ContentPart {
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
pub(crate) struct ImageUrl {
    pub url: String,
    pub detail: ImageDetail,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ImageDetail {
    High,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResponseContent {
    Text(String),
    Parts(Vec<ResponsePart>),
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Builds the two-message conversation for one uploaded image.
pub(crate) fn build_request(image: &[u8]) -> ChatCompletionRequest<'static> {
    let url = format!("data:{IMAGE_MEDIA_TYPE};base64,{}", STANDARD.encode(image));

    ChatCompletionRequest {
        model: VISION_MODEL,
        messages: vec![
            ChatMessage::System {
                content: EXTRACTION_PROMPT,
            },
            ChatMessage::User {
                content: vec![ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url,
                        detail: ImageDetail::High,
                    },
                }],
            },
        ],
    }
}

/// Pulls the first content item's text out of the first choice.
fn first_text(body: &str) -> Result<String, ProviderError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(ProviderError::NoChoices)?;

    match choice.message.content {
        Some(ResponseContent::Text(text)) => Ok(text),
        Some(ResponseContent::Parts(parts)) => parts
            .into_iter()
            .next()
            .and_then(|part| part.text)
            .ok_or(ProviderError::EmptyContent),
        None => Err(ProviderError::EmptyContent),
    }
}

#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends the image with the extraction prompt and returns the model's text verbatim.
    pub async fn analyze_image(&self, image: &[u8]) -> Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let payload = build_request(image);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Status { status, body });
        }

        first_text(&body)
    }
}
