use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde_json::json;

/// Every way a chat turn can fail. Each variant renders to the JSON error
/// body the caller sees; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("No message provided")]
    MissingMessage,

    /// Connection, DNS or timeout failure talking to the completion endpoint.
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OpenAI API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    /// Catch-all for anything else: malformed bodies, unexpected response shapes.
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingMessage => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        match self {
            RelayError::MissingMessage => {
                HttpResponse::build(self.status_code()).json(json!({ "error": message }))
            }
            _ => {
                error!("Chat request failed: {}", message);
                HttpResponse::build(self.status_code()).json(json!({
                    "error": message,
                    "success": false
                }))
            }
        }
    }
}
