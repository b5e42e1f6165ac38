//! Typed updates for a single action card.
//!
//! `apply` never mutates its input: the editor component hands the returned
//! card to its `on_change` callback as a whole replacement. The level bound
//! and the condition/value shape are enforced here and nowhere else.

use super::entities::{ActionCardData, Condition, ConditionValue, MAX_LEVELS, TradeField, TradeManagement};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionCardUpdate {
    SetCondition(Condition),
    /// Threshold for single-value conditions.
    SetValue(String),
    SetMinValue(String),
    SetMaxValue(String),
    SetTradeField { field: TradeField, value: String },
    AddLevel,
    DeleteLevel(usize),
    SetLevelField { index: usize, field: TradeField, value: String },
}

pub fn apply(card: &ActionCardData, update: ActionCardUpdate) -> ActionCardData {
    let mut next = card.clone();
    match update {
        ActionCardUpdate::SetCondition(condition) => {
            next.value = reshape_value(&card.value, condition);
            next.condition = condition;
        }
        ActionCardUpdate::SetValue(value) => {
            if let ConditionValue::Single(_) = next.value {
                next.value = ConditionValue::Single(value);
            }
        }
        ActionCardUpdate::SetMinValue(value) => {
            if let ConditionValue::Range { min_value, .. } = &mut next.value {
                *min_value = value;
            }
        }
        ActionCardUpdate::SetMaxValue(value) => {
            if let ConditionValue::Range { max_value, .. } = &mut next.value {
                *max_value = value;
            }
        }
        ActionCardUpdate::SetTradeField { field, value } => {
            if let Some(tm) = card.trade_management.with(field, value) {
                next.trade_management = tm;
            }
        }
        ActionCardUpdate::AddLevel => {
            if card.levels.len() < MAX_LEVELS {
                next.levels.push(TradeManagement::empty(card.trade_type));
            }
        }
        ActionCardUpdate::DeleteLevel(index) => {
            if index < next.levels.len() {
                next.levels.remove(index);
            }
        }
        ActionCardUpdate::SetLevelField { index, field, value } => {
            if let Some(level) = card.levels.get(index).and_then(|level| level.with(field, value)) {
                next.levels[index] = level;
            }
        }
    }
    next
}

fn reshape_value(value: &ConditionValue, condition: Condition) -> ConditionValue {
    match (value, condition.is_range()) {
        (ConditionValue::Single(v), true) => ConditionValue::Range {
            min_value: v.clone(),
            max_value: String::new(),
        },
        (ConditionValue::Range { min_value, .. }, false) => ConditionValue::Single(min_value.clone()),
        (unchanged, _) => unchanged.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action_card::TradeType;

    #[test]
    fn switching_to_in_between_keeps_the_typed_value_as_minimum() {
        let card = apply(&ActionCardData::new(TradeType::Buy), ActionCardUpdate::SetValue("1800".into()));
        let ranged = apply(&card, ActionCardUpdate::SetCondition(Condition::InBetween));
        assert_eq!(
            ranged.value,
            ConditionValue::Range { min_value: "1800".into(), max_value: String::new() }
        );

        let back = apply(&ranged, ActionCardUpdate::SetCondition(Condition::GreaterThan));
        assert_eq!(back.value, ConditionValue::Single("1800".into()));
    }

    #[test]
    fn input_card_is_left_untouched() {
        let card = ActionCardData::new(TradeType::Sell);
        let _ = apply(&card, ActionCardUpdate::AddLevel);
        assert!(card.levels.is_empty());
    }

    #[test]
    fn fields_of_the_other_type_are_ignored() {
        let card = ActionCardData::new(TradeType::Sell);
        let next = apply(
            &card,
            ActionCardUpdate::SetTradeField { field: TradeField::AmountPerBuyDollars, value: "50".into() },
        );
        assert_eq!(next, card);
    }
}
