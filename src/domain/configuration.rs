//! The structured configuration payload returned by the assistant.
//!
//! The object is stored exactly as received and serializes back unchanged.
//! `asset`, `strategy`, `action` and `amount` are read through accessors that
//! interpret the raw keys without rewriting them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::action_card::TradeType;

pub const DEFAULT_STRATEGY: &str = "DCA";

pub mod keys {
    pub const ASSET: &str = "asset";
    pub const STRATEGY: &str = "strategy";
    pub const ACTION: &str = "action";
    pub const AMOUNT: &str = "amount";
    pub const TIME_FRAME: &str = "timeFrame";
    pub const FREQUENCY: &str = "frequency";
    pub const LOOP: &str = "loop";
    pub const AMOUNT_OF_TIMES: &str = "amountOfTimes";
    pub const ACTION_CARDS: &str = "actionCards";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BotConfiguration {
    fields: Map<String, Value>,
}

impl BotConfiguration {
    pub fn new(asset: impl Into<String>, strategy: impl Into<String>, action: impl Into<String>) -> Self {
        Self::default()
            .with(keys::ASSET, Value::String(asset.into()))
            .with(keys::STRATEGY, Value::String(strategy.into()))
            .with(keys::ACTION, Value::String(action.into()))
    }

    /// Boundary check for an untrusted payload.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let Value::Object(fields) = value else {
            return Err("malformed configuration: expected an object".to_string());
        };
        let config = Self { fields };
        match config.fields.get(keys::ASSET) {
            Some(Value::String(asset)) if !asset.trim().is_empty() => Ok(config),
            Some(Value::String(_)) | None => Err("configuration has no asset".to_string()),
            Some(_) => Err("malformed configuration: asset is not a string".to_string()),
        }
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn asset(&self) -> &str {
        self.text(keys::ASSET).unwrap_or_default()
    }

    /// Falls back to DCA when the payload names none.
    pub fn strategy(&self) -> &str {
        self.text(keys::STRATEGY).unwrap_or(DEFAULT_STRATEGY)
    }

    pub fn action(&self) -> &str {
        self.text(keys::ACTION).unwrap_or_default()
    }

    /// Reads `50`, `50.0`, `"50"` or `"$50"`; anything else reads as absent.
    /// Range checks belong to the setup form.
    pub fn amount(&self) -> Option<f64> {
        match self.fields.get(keys::AMOUNT)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().trim_start_matches('$').parse::<f64>().ok(),
            _ => None,
        }
        .filter(|amount| amount.is_finite())
    }

    /// `buy`/`sell` in any case; anything else is unknown.
    pub fn trade_type(&self) -> Option<TradeType> {
        match self.action().trim().to_ascii_lowercase().as_str() {
            "buy" => Some(TradeType::Buy),
            "sell" => Some(TradeType::Sell),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }
}
