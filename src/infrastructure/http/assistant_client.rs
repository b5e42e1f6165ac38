use gloo::net::http::Request;
use serde::Serialize;

use crate::application::AssistantGateway;
use crate::domain::chat::AssistantReply;
use crate::domain::errors::{GatewayError, GatewayResult};
use crate::domain::logging::{LogComponent, LogLevel, get_logger};

use super::error_message_from_body;

#[derive(Debug, Serialize)]
struct AssistantRequest<'a> {
    message: &'a str,
}

/// POSTs free text to the configuration endpoint.
#[derive(Debug, Clone)]
pub struct HttpAssistantClient {
    url: String,
}

impl HttpAssistantClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl AssistantGateway for HttpAssistantClient {
    async fn send_message(&self, message: &str) -> GatewayResult<AssistantReply> {
        get_logger().log_with_metadata(
            LogLevel::Debug,
            LogComponent::Infrastructure("AssistantClient"),
            &format!("POST {}", self.url),
            &format!("{} chars", message.len()),
        );

        let response = Request::post(&self.url)
            .json(&AssistantRequest { message })
            .map_err(|e| GatewayError::Request(format!("Failed to encode request: {e:?}")))?
            .send()
            .await
            .map_err(|e| GatewayError::Request(format!("Failed to reach assistant: {e:?}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Request(format!("Failed to read body: {e:?}")))?;

        if !response.ok() {
            return Err(GatewayError::Status {
                code: status,
                message: error_message_from_body(&body),
            });
        }

        AssistantReply::from_json(&body)
    }
}
