//! Multi-step setup wizard built on top of the form state and action cards.

use serde_json::Value;

use super::form::{BotSetupAction, BotSetupFormState, fields};
use crate::domain::action_card::{self, ActionCardData, ActionCardUpdate, TradeType, validate_card};
use crate::domain::configuration::{BotConfiguration, DEFAULT_STRATEGY, keys};
use crate::domain::forms::FieldErrors;
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_info, log_warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Asset,
    Amount,
    Schedule,
    Loop,
    Actions,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 6] = [
        WizardStep::Asset,
        WizardStep::Amount,
        WizardStep::Schedule,
        WizardStep::Loop,
        WizardStep::Actions,
        WizardStep::Review,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Asset => "Choose an asset",
            WizardStep::Amount => "Amount per buy",
            WizardStep::Schedule => "Timeframe & frequency",
            WizardStep::Loop => "Repeat",
            WizardStep::Actions => "Trade rules",
            WizardStep::Review => "Review",
        }
    }

    /// 1-based position and total, for the progress header.
    pub fn position(&self) -> (usize, usize) {
        let index = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        (index + 1, Self::ALL.len())
    }

    pub fn next(&self) -> Option<WizardStep> {
        let (pos, _) = self.position();
        Self::ALL.get(pos).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        let (pos, _) = self.position();
        pos.checked_sub(2).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Form fields gating this step.
    fn form_fields(&self) -> &'static [&'static str] {
        match self {
            WizardStep::Asset => &[fields::ASSET_NAME],
            WizardStep::Amount => &[fields::AMOUNT_PER_BUY],
            WizardStep::Schedule => &[fields::TIME_FRAME, fields::FREQUENCY],
            WizardStep::Loop => &[fields::AMOUNT_OF_TIMES],
            WizardStep::Actions | WizardStep::Review => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    Next,
    Back,
    Form(BotSetupAction),
    AddCard(TradeType),
    RemoveCard(usize),
    UpdateCard { index: usize, update: ActionCardUpdate },
    /// Whole-card replacement coming from the controlled editor.
    ReplaceCard { index: usize, card: ActionCardData },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BotSetupWizard {
    step: WizardStep,
    form: BotSetupFormState,
    cards: Vec<ActionCardData>,
    errors: FieldErrors,
    origin: Option<BotConfiguration>,
    edit_mode: bool,
}

impl BotSetupWizard {
    pub fn new(default_asset: impl Into<String>) -> Self {
        Self {
            step: WizardStep::Asset,
            form: BotSetupFormState::new(default_asset),
            cards: Vec::new(),
            errors: FieldErrors::new(),
            origin: None,
            edit_mode: false,
        }
    }

    /// Start from a configuration. A launched setup carries its cards under
    /// `actionCards`; an assistant hand-off without them gets one card whose
    /// type follows the configuration's `action`.
    pub fn from_configuration(config: &BotConfiguration, edit_mode: bool) -> Self {
        log_info!(
            LogComponent::Domain("SetupWizard"),
            "pre-filling wizard for {} ({}, {})",
            config.asset(),
            config.strategy(),
            config.action()
        );
        let cards = match config.get(keys::ACTION_CARDS) {
            Some(Value::Array(items)) => restore_cards(items),
            _ => vec![ActionCardData::new(config.trade_type().unwrap_or_default())],
        };
        Self {
            step: WizardStep::Asset,
            form: BotSetupFormState::from_configuration(config),
            cards,
            errors: FieldErrors::new(),
            origin: Some(config.clone()),
            edit_mode,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &BotSetupFormState {
        &self.form
    }

    pub fn cards(&self) -> &[ActionCardData] {
        &self.cards
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn origin(&self) -> Option<&BotConfiguration> {
        self.origin.as_ref()
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn apply(&mut self, action: WizardAction, assets: &[String]) {
        match action {
            WizardAction::Next => {
                let errors = self.step_errors(assets);
                if errors.is_empty() {
                    if let Some(next) = self.step.next() {
                        log_debug!(LogComponent::Domain("SetupWizard"), "{:?} -> {:?}", self.step, next);
                        self.step = next;
                    }
                }
                self.errors = errors;
            }
            WizardAction::Back => {
                if let Some(previous) = self.step.previous() {
                    self.step = previous;
                }
                self.errors = FieldErrors::new();
            }
            WizardAction::Form(form_action) => self.form.apply(form_action),
            WizardAction::AddCard(trade_type) => self.cards.push(ActionCardData::new(trade_type)),
            WizardAction::RemoveCard(index) => {
                if index < self.cards.len() {
                    self.cards.remove(index);
                }
            }
            WizardAction::UpdateCard { index, update } => {
                if let Some(card) = self.cards.get(index) {
                    self.cards[index] = action_card::apply(card, update);
                }
            }
            WizardAction::ReplaceCard { index, card } => {
                let same_type = self.cards.get(index).is_some_and(|current| current.trade_type == card.trade_type);
                match card.check_shape() {
                    Ok(()) if same_type => self.cards[index] = card,
                    Ok(()) => {}
                    Err(reason) => {
                        log_warn!(LogComponent::Domain("SetupWizard"), "card {} rejected: {}", index, reason);
                    }
                }
            }
        }
    }

    /// Errors that block leaving the current step.
    pub fn step_errors(&self, assets: &[String]) -> FieldErrors {
        match self.step {
            WizardStep::Actions => self.card_errors(),
            WizardStep::Review => {
                let mut all = self.form.validate(assets);
                all.merge(self.card_errors());
                all
            }
            step => self.form.validate(assets).only(step.form_fields()),
        }
    }

    fn card_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for (index, card) in self.cards.iter().enumerate() {
            errors.merge_prefixed(&format!("cards.{}", index), validate_card(card));
        }
        errors
    }

    /// The configuration to launch from the review step.
    pub fn to_configuration(&self) -> BotConfiguration {
        let action = self
            .cards
            .first()
            .map(|card| card.trade_type)
            .or_else(|| self.origin.as_ref().and_then(BotConfiguration::trade_type))
            .unwrap_or_default();

        let config = match &self.origin {
            Some(origin) => origin.clone(),
            None => BotConfiguration::new("", DEFAULT_STRATEGY, ""),
        };
        let config = config
            .with(keys::ASSET, self.form.asset_name().trim())
            .with(keys::ACTION, action.to_string().to_ascii_lowercase())
            .with(keys::AMOUNT, self.form.amount_per_buy())
            .with(keys::TIME_FRAME, self.form.time_frame().code())
            .with(keys::FREQUENCY, self.form.frequency())
            .with(keys::LOOP, self.form.loop_policy().to_string());
        let config = match self.form.amount_of_times() {
            Some(times) => config.with(keys::AMOUNT_OF_TIMES, times),
            None => config.without(keys::AMOUNT_OF_TIMES),
        };
        let cards = serde_json::to_value(&self.cards).unwrap_or(Value::Array(Vec::new()));
        config.with(keys::ACTION_CARDS, cards)
    }
}

/// Cards saved by an earlier launch. Entries that do not deserialize or
/// break the card invariants are dropped.
fn restore_cards(items: &[Value]) -> Vec<ActionCardData> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<ActionCardData>(item.clone()) {
            Ok(card) => Some(card),
            Err(e) => {
                log_warn!(LogComponent::Domain("SetupWizard"), "dropping saved card {}: {}", index, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_of_first_step_is_none() {
        assert_eq!(WizardStep::Asset.previous(), None);
        assert_eq!(WizardStep::Amount.previous(), Some(WizardStep::Asset));
        assert_eq!(WizardStep::Review.next(), None);
        assert_eq!(WizardStep::Schedule.position(), (3, 6));
    }
}
