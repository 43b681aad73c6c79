use serde::Serialize;

/// Successful extraction: the model's reply, untouched.
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub raw: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
