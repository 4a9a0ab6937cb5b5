use thiserror::Error;

/// Fallback message when an error response arrives with an empty body
const GENERIC_FAILURE_MESSAGE: &str = "API request failed";

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-success HTTP status. The message is the raw response body
    /// text, or a generic fallback when that body is empty.
    #[error("{message}")]
    RequestFailed { message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid JSON in response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl ApiError {
    /// Truncate a response body to avoid carrying excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..end],
                body.len()
            )
        }
    }

    /// Build the error for a non-success HTTP status from its body text.
    pub fn request_failed(body: &str) -> Self {
        let message = if body.is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            Self::truncate_body(body)
        };
        ApiError::RequestFailed { message }
    }
}
