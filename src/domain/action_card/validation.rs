use super::entities::{ActionCardData, ConditionValue, TradeField, TradeManagement};
use crate::domain::forms::FieldErrors;

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Errors keyed `value`, `minValue`, `maxValue`, `<tradeField>` and
/// `levels.<n>.<tradeField>`.
pub fn validate_card(card: &ActionCardData) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match &card.value {
        ConditionValue::Single(value) => {
            if parse_number(value).is_none() {
                errors.insert("value", "Enter a price");
            }
        }
        ConditionValue::Range { min_value, max_value } => {
            let min = parse_number(min_value);
            let max = parse_number(max_value);
            if min.is_none() {
                errors.insert("minValue", "Enter a minimum price");
            }
            if max.is_none() {
                errors.insert("maxValue", "Enter a maximum price");
            }
            if let (Some(min), Some(max)) = (min, max) {
                if min > max {
                    errors.insert("maxValue", "Maximum must not be below minimum");
                }
            }
        }
    }

    errors.merge(validate_trade_management(&card.trade_management));
    for (index, level) in card.levels.iter().enumerate() {
        errors.merge_prefixed(&format!("levels.{}", index), validate_trade_management(level));
    }
    errors
}

/// Blank amounts are allowed; typed ones must be non-negative numbers.
fn validate_trade_management(tm: &TradeManagement) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in TradeField::for_type(tm.trade_type()) {
        let Some(raw) = tm.get(field) else { continue };
        if raw.trim().is_empty() {
            continue;
        }
        match parse_number(raw) {
            Some(v) if v >= 0.0 => {}
            _ => errors.insert(field.to_string(), "Must be a non-negative number"),
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action_card::{ActionCardUpdate, Condition, TradeType, apply};

    #[test]
    fn inverted_range_is_flagged_on_max() {
        let mut card = ActionCardData::new(TradeType::Buy);
        card = apply(&card, ActionCardUpdate::SetCondition(Condition::InBetween));
        card = apply(&card, ActionCardUpdate::SetMinValue("2000".into()));
        card = apply(&card, ActionCardUpdate::SetMaxValue("1500".into()));
        let errors = validate_card(&card);
        assert_eq!(errors.get("maxValue"), Some("Maximum must not be below minimum"));
        assert!(!errors.contains("minValue"));
    }

    #[test]
    fn level_errors_are_prefixed_with_their_index() {
        let mut card = ActionCardData::new(TradeType::Sell);
        card = apply(&card, ActionCardUpdate::SetValue("3000".into()));
        card = apply(&card, ActionCardUpdate::AddLevel);
        card = apply(&card, ActionCardUpdate::AddLevel);
        card = apply(
            &card,
            ActionCardUpdate::SetLevelField { index: 1, field: TradeField::SellLevel, value: "-4".into() },
        );
        let errors = validate_card(&card);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["levels.1.sellLevel"]);
    }
}
