use crate::domain::chat::{AssistantReply, ChatOutcome, ChatSession};
use crate::domain::errors::GatewayResult;
use crate::domain::logging::LogComponent;
use crate::{log_error, log_info};

use super::navigation::{Navigator, Route};

/// The single configuration endpoint.
#[allow(async_fn_in_trait)]
pub trait AssistantGateway {
    async fn send_message(&self, message: &str) -> GatewayResult<AssistantReply>;
}

#[derive(Debug, Clone)]
pub struct ChatService<G> {
    gateway: G,
}

impl<G: AssistantGateway> ChatService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// One request/response exchange. No retry: a failure ends the turn.
    pub async fn exchange(&self, text: &str) -> GatewayResult<AssistantReply> {
        log_info!(LogComponent::Application("ChatService"), "sending {} chars to assistant", text.len());
        let result = self.gateway.send_message(text).await;
        match &result {
            Ok(reply) => {
                log_info!(
                    LogComponent::Application("ChatService"),
                    "assistant replied ({})",
                    reply.kind().map(|k| k.to_string()).unwrap_or_else(|| "untyped".to_string())
                );
            }
            Err(e) => {
                log_error!(LogComponent::Application("ChatService"), "assistant call failed: {}", e);
            }
        }
        result
    }

    /// Full turn against a session the caller owns exclusively. Returns
    /// `None` when the submission was suppressed.
    pub async fn send(&self, session: &mut ChatSession, navigator: &impl Navigator) -> Option<ChatOutcome> {
        let text = session.submit()?;
        let result = self.exchange(&text).await;
        let outcome = session.resolve(result);
        follow_outcome(&outcome, navigator);
        Some(outcome)
    }
}

/// A hand-off closes the panel and opens the wizard exactly once.
pub fn follow_outcome(outcome: &ChatOutcome, navigator: &impl Navigator) {
    if let ChatOutcome::Handoff(configuration) = outcome {
        navigator.set_chat_open(false);
        navigator.navigate(Route::setup_with(configuration.clone(), false));
    }
}
