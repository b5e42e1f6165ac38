//! Conversation state for the assistant panel.
//!
//! `Idle -> Sending -> (Handoff | Replied | Failed) -> Idle`. The transcript is
//! append-only for the life of the session; a remount creates a new session.

use super::message::{AssistantReply, ChatMessage, MessageKind};
use crate::domain::configuration::BotConfiguration;
use crate::domain::errors::GatewayError;
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_info, log_warn};

pub const GREETING_TEXT: &str =
    "Hi! Tell me what kind of bot you want, e.g. \"Buy $50 of ETH every week\", and I'll set it up for you.";

pub const CONNECTION_ERROR_TEXT: &str =
    "Sorry, I couldn't reach the configuration service. Please make sure it is running and reachable, then try again.";

pub const UNEXPECTED_REPLY_TEXT: &str =
    "Sorry, the configuration service sent a reply I couldn't understand. Please try rephrasing your request.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatPhase {
    #[default]
    Idle,
    /// A request is outstanding; submission is disabled.
    Sending,
}

/// What the panel should do after a turn resolves.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutcome {
    /// Close the panel and open the setup wizard with this configuration.
    Handoff(BotConfiguration),
    /// An assistant message was appended.
    Replied,
    /// The connectivity or unexpected-reply message was appended.
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    input: String,
    phase: ChatPhase,
    next_id: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// A fresh session opens with the assistant's greeting.
    pub fn new() -> Self {
        let mut session = Self::empty();
        session.push_assistant(GREETING_TEXT.to_string(), Some(MessageKind::Greeting), None);
        session
    }

    pub fn empty() -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            phase: ChatPhase::Idle,
            next_id: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn is_sending(&self) -> bool {
        self.phase == ChatPhase::Sending
    }

    pub fn can_submit(&self) -> bool {
        !self.is_sending() && !self.input.trim().is_empty()
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Starts a turn from the current input. Returns the text to send, or
    /// `None` when the input is blank or a turn is already outstanding.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            log_debug!(
                LogComponent::Domain("ChatSession"),
                "submit suppressed (phase {:?})",
                self.phase
            );
            return None;
        }
        let text = self.input.trim().to_string();
        self.input.clear();
        self.push(text.clone(), true, None, None);
        self.phase = ChatPhase::Sending;
        Some(text)
    }

    /// Completes the outstanding turn.
    pub fn resolve(&mut self, result: Result<AssistantReply, GatewayError>) -> ChatOutcome {
        self.phase = ChatPhase::Idle;
        match result {
            Ok(AssistantReply::Config { configuration: Some(configuration), .. }) => {
                log_info!(
                    LogComponent::Domain("ChatSession"),
                    "configuration received for {}, handing off",
                    configuration.asset()
                );
                ChatOutcome::Handoff(configuration)
            }
            Ok(reply) => {
                // Payload-less config replies land here too and show as text.
                let configuration = reply.configuration().cloned();
                self.push_assistant(reply.text().to_string(), reply.kind(), configuration);
                ChatOutcome::Replied
            }
            Err(GatewayError::Decode(reason)) => {
                log_warn!(LogComponent::Domain("ChatSession"), "unusable assistant reply: {}", reason);
                self.push_assistant(UNEXPECTED_REPLY_TEXT.to_string(), Some(MessageKind::Refusal), None);
                ChatOutcome::Failed
            }
            Err(error) => {
                log_warn!(LogComponent::Domain("ChatSession"), "assistant call failed: {}", error);
                self.push_assistant(CONNECTION_ERROR_TEXT.to_string(), Some(MessageKind::Refusal), None);
                ChatOutcome::Failed
            }
        }
    }

    /// Explicit launch of a configuration the caller already holds. Outside
    /// edit mode a confirmation naming the asset is appended.
    pub fn launch(&mut self, configuration: BotConfiguration, edit_mode: bool) {
        if edit_mode {
            log_debug!(LogComponent::Domain("ChatSession"), "launch in edit mode, no confirmation");
            return;
        }
        let text = format!(
            "Your {} bot is configured and ready to launch. Review it below or edit the setup any time.",
            configuration.asset()
        );
        self.push_assistant(text, Some(MessageKind::Config), Some(configuration));
    }

    fn push_assistant(&mut self, text: String, kind: Option<MessageKind>, configuration: Option<BotConfiguration>) {
        self.push(text, false, kind, configuration);
    }

    fn push(&mut self, text: String, is_user: bool, kind: Option<MessageKind>, configuration: Option<BotConfiguration>) {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: format!("msg-{}", self.next_id),
            text,
            is_user,
            kind,
            configuration,
        });
    }
}
