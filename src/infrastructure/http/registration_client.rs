use gloo::net::http::Request;

use crate::application::RegistrationGateway;
use crate::domain::errors::{GatewayError, GatewayResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::signup::RegistrationRequest;

use super::error_message_from_body;

#[derive(Debug, Clone)]
pub struct HttpRegistrationClient {
    url: String,
}

impl HttpRegistrationClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl RegistrationGateway for HttpRegistrationClient {
    async fn register(&self, request: &RegistrationRequest) -> GatewayResult<()> {
        get_logger().info(
            LogComponent::Infrastructure("RegistrationClient"),
            &format!("POST {} for {}", self.url, request.email),
        );

        let response = Request::post(&self.url)
            .json(request)
            .map_err(|e| GatewayError::Request(format!("Failed to encode request: {e:?}")))?
            .send()
            .await
            .map_err(|e| GatewayError::Request(format!("Failed to reach registration service: {e:?}")))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(GatewayError::Status {
            code: status,
            message: error_message_from_body(&body),
        })
    }
}
