use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use validator::Validate;

use super::value_objects::{LoopPolicy, TimeFrame};
use crate::domain::configuration::{BotConfiguration, keys};
use crate::domain::forms::FieldErrors;
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Error keys used by the bot setup form.
pub mod fields {
    pub const ASSET_NAME: &str = "asset_name";
    pub const AMOUNT_PER_BUY: &str = "amount_per_buy";
    pub const TIME_FRAME: &str = "time_frame";
    pub const FREQUENCY: &str = "frequency";
    pub const AMOUNT_OF_TIMES: &str = "amount_of_times";
}

pub const DEFAULT_AMOUNT_PER_BUY: f64 = 10.0;

const NOT_A_NUMBER: &str = "Enter a number";

/// Typed values behind the setup wizard's inputs.
///
/// Fields are private: `apply` is the only writer, which is what keeps
/// `amount_of_times` present exactly when the loop policy is `Custom`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BotSetupFormState {
    asset_name: String,
    amount_per_buy: f64,
    time_frame: TimeFrame,
    frequency: u32,
    #[serde(rename = "loop")]
    loop_policy: LoopPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount_of_times: Option<u32>,
    /// Text typed into a numeric input that did not parse, by field key.
    #[serde(skip)]
    unparsed: BTreeMap<&'static str, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BotSetupAction {
    SetAsset(String),
    SetAmountPerBuy(f64),
    SetTimeFrame(TimeFrame),
    SetFrequency(u32),
    SetLoop(LoopPolicy),
    /// Ignored unless the loop policy is `Custom`.
    SetAmountOfTimes(u32),
    /// A numeric input holds text that is not a number. The last good value
    /// is kept and the field reports an error until it parses again.
    SetUnparsed { field: &'static str, text: String },
}

impl BotSetupAction {
    /// Maps raw text from one of the numeric inputs to an action.
    pub fn from_input(field: &'static str, text: &str) -> Option<BotSetupAction> {
        let trimmed = text.trim();
        let unparsed = || BotSetupAction::SetUnparsed { field, text: text.to_string() };
        Some(match field {
            fields::AMOUNT_PER_BUY => match trimmed.parse::<f64>() {
                Ok(amount) if amount.is_finite() => BotSetupAction::SetAmountPerBuy(amount),
                _ => unparsed(),
            },
            fields::FREQUENCY => trimmed.parse().map(BotSetupAction::SetFrequency).unwrap_or_else(|_| unparsed()),
            fields::AMOUNT_OF_TIMES => {
                trimmed.parse().map(BotSetupAction::SetAmountOfTimes).unwrap_or_else(|_| unparsed())
            }
            _ => return None,
        })
    }
}

impl BotSetupFormState {
    pub fn new(asset_name: impl Into<String>) -> Self {
        Self {
            asset_name: asset_name.into(),
            amount_per_buy: DEFAULT_AMOUNT_PER_BUY,
            time_frame: TimeFrame::default(),
            frequency: 1,
            loop_policy: LoopPolicy::default(),
            amount_of_times: None,
            unparsed: BTreeMap::new(),
        }
    }

    /// Pre-fill from a configuration, either an assistant hand-off or one the
    /// wizard launched earlier. Keys that are missing or unreadable keep their
    /// defaults. Unknown assets are kept so the validator can point at them.
    pub fn from_configuration(config: &BotConfiguration) -> Self {
        let mut state = Self::new(config.asset().trim());
        if let Some(amount) = config.amount() {
            state.apply(BotSetupAction::SetAmountPerBuy(amount));
        }
        if let Some(time_frame) = config.get(keys::TIME_FRAME).and_then(Value::as_str) {
            if let Ok(time_frame) = TimeFrame::from_str(time_frame) {
                state.apply(BotSetupAction::SetTimeFrame(time_frame));
            }
        }
        if let Some(frequency) = read_u32(config, keys::FREQUENCY) {
            state.apply(BotSetupAction::SetFrequency(frequency));
        }
        if let Some(policy) = config.get(keys::LOOP).and_then(Value::as_str) {
            if let Ok(policy) = LoopPolicy::from_str(policy) {
                state.apply(BotSetupAction::SetLoop(policy));
            }
        }
        if let Some(times) = read_u32(config, keys::AMOUNT_OF_TIMES) {
            state.apply(BotSetupAction::SetAmountOfTimes(times));
        }
        state
    }

    pub fn apply(&mut self, action: BotSetupAction) {
        log_debug!(LogComponent::Domain("BotSetupForm"), "apply {:?}", action);
        match action {
            BotSetupAction::SetAsset(asset) => self.asset_name = asset,
            BotSetupAction::SetAmountPerBuy(amount) => {
                self.unparsed.remove(fields::AMOUNT_PER_BUY);
                self.amount_per_buy = amount;
            }
            BotSetupAction::SetTimeFrame(time_frame) => self.time_frame = time_frame,
            BotSetupAction::SetFrequency(frequency) => {
                self.unparsed.remove(fields::FREQUENCY);
                self.frequency = frequency;
            }
            BotSetupAction::SetLoop(policy) => {
                self.amount_of_times = match policy {
                    LoopPolicy::Custom => Some(self.amount_of_times.unwrap_or(1)),
                    LoopPolicy::Once | LoopPolicy::Infinite => {
                        self.unparsed.remove(fields::AMOUNT_OF_TIMES);
                        None
                    }
                };
                self.loop_policy = policy;
            }
            BotSetupAction::SetAmountOfTimes(times) => {
                if self.loop_policy == LoopPolicy::Custom {
                    self.unparsed.remove(fields::AMOUNT_OF_TIMES);
                    self.amount_of_times = Some(times);
                }
            }
            BotSetupAction::SetUnparsed { field, text } => {
                let accepted = match field {
                    fields::AMOUNT_PER_BUY | fields::FREQUENCY => true,
                    fields::AMOUNT_OF_TIMES => self.loop_policy == LoopPolicy::Custom,
                    _ => false,
                };
                if accepted {
                    self.unparsed.insert(field, text);
                }
            }
        }
    }

    /// What a numeric input should display: the unparsed text while there is
    /// one, the stored value otherwise.
    pub fn input_text(&self, field: &str) -> String {
        if let Some(text) = self.unparsed.get(field) {
            return text.clone();
        }
        match field {
            fields::AMOUNT_PER_BUY => self.amount_per_buy.to_string(),
            fields::FREQUENCY => self.frequency.to_string(),
            fields::AMOUNT_OF_TIMES => self.amount_of_times.map(|n| n.to_string()).unwrap_or_default(),
            _ => String::new(),
        }
    }

    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }

    pub fn amount_per_buy(&self) -> f64 {
        self.amount_per_buy
    }

    pub fn time_frame(&self) -> TimeFrame {
        self.time_frame
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    pub fn loop_policy(&self) -> LoopPolicy {
        self.loop_policy
    }

    pub fn amount_of_times(&self) -> Option<u32> {
        self.amount_of_times
    }

    /// Whether the "amount of times" input is rendered.
    pub fn show_amount_of_times(&self) -> bool {
        self.loop_policy == LoopPolicy::Custom
    }

    /// Runs the form schema. `assets` is the externally supplied asset list.
    pub fn validate(&self, assets: &[String]) -> FieldErrors {
        let schema = BotSetupSchema {
            asset_name: self.asset_name.trim().to_string(),
            frequency: self.frequency,
            amount_of_times: self.amount_of_times,
        };
        let mut errors = FieldErrors::new();
        for field in self.unparsed.keys() {
            errors.insert(*field, NOT_A_NUMBER);
        }
        if let Err(e) = schema.validate() {
            errors.merge(FieldErrors::from(e));
        }

        if !self.asset_name.trim().is_empty() && !assets.iter().any(|a| a == self.asset_name.trim()) {
            errors.insert(fields::ASSET_NAME, format!("{} is not a supported asset", self.asset_name.trim()));
        }
        if !(self.amount_per_buy.is_finite() && self.amount_per_buy > 0.0) {
            errors.insert(fields::AMOUNT_PER_BUY, "Amount must be greater than 0");
        }
        errors
    }
}

fn read_u32(config: &BotConfiguration, key: &str) -> Option<u32> {
    config.get(key).and_then(Value::as_u64).and_then(|n| u32::try_from(n).ok())
}

#[derive(Debug, Validate)]
struct BotSetupSchema {
    #[validate(length(min = 1, message = "Pick an asset"))]
    asset_name: String,
    #[validate(range(min = 1, message = "Frequency must be at least 1"))]
    frequency: u32,
    #[validate(range(min = 1, message = "Repeat at least once"))]
    amount_of_times: Option<u32>,
}
