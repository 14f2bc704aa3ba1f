use anyhow::anyhow;
use log::{debug, info};
use reqwest::Client;

use crate::config::{RelayConfig, MAX_TOKENS, MODEL, PERSONA_PROMPT, TEMPERATURE};
use crate::error::RelayError;
use crate::web::models::{CompletionRequest, CompletionResponse, Message};

/// Builds the outbound message sequence: the persona first, then the caller's
/// history untouched, then the new user turn.
pub fn build_messages(history: Vec<Message>, message: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(Message::system(PERSONA_PROMPT));
    messages.extend(history);
    messages.push(Message::user(message));
    messages
}

// A wrapper for the OpenAI chat completions API
pub struct ChatModel {
    api_url: String,
    api_key: Option<String>,
    client: Client,
}

impl ChatModel {
    pub fn new(config: &RelayConfig) -> anyhow::Result<Self> {
        info!("Using completion endpoint at: {}", config.api_url);

        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    pub async fn generate_response(
        &self,
        history: Vec<Message>,
        message: &str,
    ) -> Result<Option<String>, RelayError> {
        let payload = CompletionRequest {
            model: MODEL,
            messages: build_messages(history, message),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        info!(
            "Sending {} messages to completion endpoint",
            payload.messages.len()
        );
        debug!("Payload: {:?}", payload);

        let mut request = self.client.post(&self.api_url).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: CompletionResponse =
            serde_json::from_slice(&bytes).map_err(|e| RelayError::Internal(e.into()))?;
        debug!("Response JSON: {}", String::from_utf8_lossy(&bytes));

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow!("Upstream response contained no choices"))?;

        info!(
            "Response length: {} characters",
            content.as_deref().map_or(0, str::len)
        );
        Ok(content)
    }
}
