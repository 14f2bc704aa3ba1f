use actix_web::{web, HttpResponse, Responder};
use log::{debug, info};

use crate::config::RUNNING_STATUS;
use crate::error::RelayError;
use crate::model::ChatModel;
use crate::web::models::{ChatRequest, ChatResponse};

// Liveness text
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(RUNNING_STATUS)
}

// Chat API endpoint
pub async fn chat(
    model: web::Data<ChatModel>,
    req: web::Json<ChatRequest>,
) -> Result<HttpResponse, RelayError> {
    let ChatRequest { message, history } = req.into_inner();

    // Rejected before any outbound work
    let message = match message {
        Some(message) if !message.is_empty() => message,
        _ => return Err(RelayError::MissingMessage),
    };

    info!(
        "Chat request with {} history turns ({} characters)",
        history.len(),
        message.len()
    );
    debug!("Message: {}", message);

    let response = model.generate_response(history, &message).await?;

    Ok(HttpResponse::Ok().json(ChatResponse {
        response,
        success: true,
    }))
}
