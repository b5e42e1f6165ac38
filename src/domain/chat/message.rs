use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

use crate::domain::configuration::BotConfiguration;
use crate::domain::errors::GatewayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Greeting,
    Refusal,
    Insight,
    Config,
}

/// One transcript entry. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub is_user: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MessageKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<BotConfiguration>,
}

impl ChatMessage {
    pub fn is_refusal(&self) -> bool {
        self.kind == Some(MessageKind::Refusal)
    }

    /// Rendered as a configuration card rather than a text bubble.
    pub fn is_config_card(&self) -> bool {
        self.kind == Some(MessageKind::Config) && self.configuration.is_some()
    }
}

/// Assistant response after boundary validation, keyed by `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum AssistantReply {
    /// Greeting, refusal, insight, or untyped when `type` is missing or not
    /// one we know. A well-formed `configuration` sent alongside is kept.
    Text {
        kind: Option<MessageKind>,
        reply: String,
        configuration: Option<BotConfiguration>,
    },
    /// `configuration` is `None` when the service tagged the reply `config`
    /// but sent no usable payload.
    Config { reply: String, configuration: Option<BotConfiguration> },
}

/// The wire body exactly as sent.
#[derive(Debug, Deserialize)]
struct RawReply {
    reply: Option<Value>,
    #[serde(rename = "type")]
    kind: Option<String>,
    configuration: Option<Value>,
}

impl AssistantReply {
    pub fn from_json(body: &str) -> Result<Self, GatewayError> {
        let value: Value = serde_json::from_str(body).map_err(|e| GatewayError::Decode(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, GatewayError> {
        let raw: RawReply =
            serde_json::from_value(value).map_err(|e| GatewayError::Decode(e.to_string()))?;

        let reply = match raw.reply {
            Some(Value::String(text)) => text,
            // A bare config hand-off needs no text.
            None | Some(Value::Null) if raw.kind.as_deref() == Some("config") => String::new(),
            _ => return Err(GatewayError::Decode("reply is not a string".to_string())),
        };

        let kind = raw.kind.as_deref().and_then(|k| k.parse::<MessageKind>().ok());
        Ok(match kind {
            Some(MessageKind::Config) => {
                let configuration = match raw.configuration {
                    None | Some(Value::Null) => None,
                    Some(value) => Some(BotConfiguration::from_value(value).map_err(GatewayError::Decode)?),
                };
                AssistantReply::Config { reply, configuration }
            }
            kind => AssistantReply::Text {
                kind,
                reply,
                configuration: raw.configuration.and_then(|value| BotConfiguration::from_value(value).ok()),
            },
        })
    }

    /// A text reply with no configuration attached.
    pub fn text_reply(kind: Option<MessageKind>, reply: impl Into<String>) -> Self {
        AssistantReply::Text { kind, reply: reply.into(), configuration: None }
    }

    pub fn text(&self) -> &str {
        match self {
            AssistantReply::Text { reply, .. } | AssistantReply::Config { reply, .. } => reply,
        }
    }

    pub fn kind(&self) -> Option<MessageKind> {
        match self {
            AssistantReply::Text { kind, .. } => *kind,
            AssistantReply::Config { .. } => Some(MessageKind::Config),
        }
    }

    pub fn configuration(&self) -> Option<&BotConfiguration> {
        match self {
            AssistantReply::Text { configuration, .. } | AssistantReply::Config { configuration, .. } => {
                configuration.as_ref()
            }
        }
    }
}
