use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Upper bound on additional trade-management levels per card.
pub const MAX_LEVELS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum Condition {
    #[default]
    #[strum(serialize = "Less than")]
    #[serde(rename = "Less than")]
    LessThan,

    #[strum(serialize = "Greater than")]
    #[serde(rename = "Greater than")]
    GreaterThan,

    #[strum(serialize = "Equal to")]
    #[serde(rename = "Equal to")]
    EqualTo,

    #[strum(serialize = "In between")]
    #[serde(rename = "In between")]
    InBetween,
}

impl Condition {
    pub fn is_range(&self) -> bool {
        matches!(self, Condition::InBetween)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum TradeType {
    #[default]
    #[strum(serialize = "BUY")]
    #[serde(rename = "BUY")]
    Buy,

    #[strum(serialize = "SELL")]
    #[serde(rename = "SELL")]
    Sell,
}

/// Threshold a condition compares the price against. Inputs stay as typed
/// text until validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Range {
        #[serde(rename = "minValue")]
        min_value: String,
        #[serde(rename = "maxValue")]
        max_value: String,
    },
    Single(String),
}

impl Default for ConditionValue {
    fn default() -> Self {
        ConditionValue::Single(String::new())
    }
}

/// Amount fields governing how a triggered action executes. The variant is
/// fixed by the card's `TradeType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TradeManagement {
    Buy {
        #[serde(rename = "amountPerBuyDollars")]
        amount_per_buy_dollars: String,
        #[serde(rename = "amountPerBuyPercentage")]
        amount_per_buy_percentage: String,
    },
    Sell {
        #[serde(rename = "sellProfitPercentage")]
        sell_profit_percentage: String,
        #[serde(rename = "sellLevel")]
        sell_level: String,
    },
}

impl TradeManagement {
    pub fn empty(trade_type: TradeType) -> Self {
        match trade_type {
            TradeType::Buy => TradeManagement::Buy {
                amount_per_buy_dollars: String::new(),
                amount_per_buy_percentage: String::new(),
            },
            TradeType::Sell => TradeManagement::Sell {
                sell_profit_percentage: String::new(),
                sell_level: String::new(),
            },
        }
    }

    pub fn trade_type(&self) -> TradeType {
        match self {
            TradeManagement::Buy { .. } => TradeType::Buy,
            TradeManagement::Sell { .. } => TradeType::Sell,
        }
    }

    pub fn get(&self, field: TradeField) -> Option<&str> {
        match (self, field) {
            (TradeManagement::Buy { amount_per_buy_dollars, .. }, TradeField::AmountPerBuyDollars) => {
                Some(amount_per_buy_dollars.as_str())
            }
            (TradeManagement::Buy { amount_per_buy_percentage, .. }, TradeField::AmountPerBuyPercentage) => {
                Some(amount_per_buy_percentage.as_str())
            }
            (TradeManagement::Sell { sell_profit_percentage, .. }, TradeField::SellProfitPercentage) => {
                Some(sell_profit_percentage.as_str())
            }
            (TradeManagement::Sell { sell_level, .. }, TradeField::SellLevel) => Some(sell_level.as_str()),
            _ => None,
        }
    }

    /// Returns a copy with `field` replaced, or `None` when the field does not
    /// belong to this shape.
    pub fn with(&self, field: TradeField, value: String) -> Option<Self> {
        let mut next = self.clone();
        let slot = match (&mut next, field) {
            (TradeManagement::Buy { amount_per_buy_dollars, .. }, TradeField::AmountPerBuyDollars) => {
                amount_per_buy_dollars
            }
            (TradeManagement::Buy { amount_per_buy_percentage, .. }, TradeField::AmountPerBuyPercentage) => {
                amount_per_buy_percentage
            }
            (TradeManagement::Sell { sell_profit_percentage, .. }, TradeField::SellProfitPercentage) => {
                sell_profit_percentage
            }
            (TradeManagement::Sell { sell_level, .. }, TradeField::SellLevel) => sell_level,
            _ => return None,
        };
        *slot = value;
        Some(next)
    }
}

/// Addressable trade-management input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, AsRefStr)]
pub enum TradeField {
    #[strum(serialize = "amountPerBuyDollars")]
    AmountPerBuyDollars,
    #[strum(serialize = "amountPerBuyPercentage")]
    AmountPerBuyPercentage,
    #[strum(serialize = "sellProfitPercentage")]
    SellProfitPercentage,
    #[strum(serialize = "sellLevel")]
    SellLevel,
}

impl TradeField {
    /// The pair of inputs the editor exposes for a card type.
    pub fn for_type(trade_type: TradeType) -> [TradeField; 2] {
        match trade_type {
            TradeType::Buy => [TradeField::AmountPerBuyDollars, TradeField::AmountPerBuyPercentage],
            TradeType::Sell => [TradeField::SellProfitPercentage, TradeField::SellLevel],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TradeField::AmountPerBuyDollars => "Amount per buy ($)",
            TradeField::AmountPerBuyPercentage => "Amount per buy (%)",
            TradeField::SellProfitPercentage => "Sell at profit (%)",
            TradeField::SellLevel => "Sell level",
        }
    }
}

/// One conditional trade rule.
///
/// Deserialization runs `check_shape`, so a card read from a saved
/// configuration holds the same invariants as one built by the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WireActionCard")]
pub struct ActionCardData {
    pub condition: Condition,
    pub value: ConditionValue,
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    pub trade_management: TradeManagement,
    pub levels: Vec<TradeManagement>,
}

impl ActionCardData {
    pub fn new(trade_type: TradeType) -> Self {
        Self {
            condition: Condition::default(),
            value: ConditionValue::default(),
            trade_type,
            trade_management: TradeManagement::empty(trade_type),
            levels: Vec::new(),
        }
    }

    pub fn can_add_level(&self) -> bool {
        self.levels.len() < MAX_LEVELS
    }

    /// Level cap, trade-management shapes matching `trade_type`, and a value
    /// shape matching the condition.
    pub fn check_shape(&self) -> Result<(), String> {
        if self.levels.len() > MAX_LEVELS {
            return Err(format!("{} levels, at most {} allowed", self.levels.len(), MAX_LEVELS));
        }
        if self.trade_management.trade_type() != self.trade_type {
            return Err(format!("trade management does not match a {} card", self.trade_type));
        }
        if let Some(index) = self.levels.iter().position(|level| level.trade_type() != self.trade_type) {
            return Err(format!("level {} does not match a {} card", index, self.trade_type));
        }
        let range_value = matches!(self.value, ConditionValue::Range { .. });
        if range_value != self.condition.is_range() {
            return Err(format!("value shape does not fit \"{}\"", self.condition));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireActionCard {
    condition: Condition,
    value: ConditionValue,
    #[serde(rename = "type")]
    trade_type: TradeType,
    trade_management: TradeManagement,
    #[serde(default)]
    levels: Vec<TradeManagement>,
}

impl TryFrom<WireActionCard> for ActionCardData {
    type Error = String;

    fn try_from(wire: WireActionCard) -> Result<Self, Self::Error> {
        let card = ActionCardData {
            condition: wire.condition,
            value: wire.value,
            trade_type: wire.trade_type,
            trade_management: wire.trade_management,
            levels: wire.levels,
        };
        card.check_shape()?;
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn saved_card_with_too_many_levels_is_rejected() {
        let level = json!({"amountPerBuyDollars": "1", "amountPerBuyPercentage": ""});
        let levels = vec![level; MAX_LEVELS + 1];
        let card = json!({
            "condition": "Less than",
            "value": "100",
            "type": "BUY",
            "tradeManagement": {"amountPerBuyDollars": "", "amountPerBuyPercentage": ""},
            "levels": levels
        });
        assert!(serde_json::from_value::<ActionCardData>(card).is_err());
    }

    #[test]
    fn saved_card_with_a_foreign_level_shape_is_rejected() {
        let card = json!({
            "condition": "Less than",
            "value": "100",
            "type": "BUY",
            "tradeManagement": {"amountPerBuyDollars": "", "amountPerBuyPercentage": ""},
            "levels": [{"sellProfitPercentage": "5", "sellLevel": "1"}]
        });
        assert!(serde_json::from_value::<ActionCardData>(card).is_err());
    }

    #[test]
    fn range_condition_needs_a_range_value() {
        let mut card = ActionCardData::new(TradeType::Sell);
        card.condition = Condition::InBetween;
        assert!(card.check_shape().is_err());

        card.value = ConditionValue::Range { min_value: "1".into(), max_value: "2".into() };
        assert_eq!(card.check_shape(), Ok(()));
        let restored: ActionCardData = serde_json::from_value(serde_json::to_value(&card).unwrap()).unwrap();
        assert_eq!(restored, card);
    }
}
