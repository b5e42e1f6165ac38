use bot_setup_web::domain::bot_setup::{BotSetupAction, BotSetupFormState, LoopPolicy, TimeFrame, fields};
use bot_setup_web::domain::configuration::BotConfiguration;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use serde_json::json;
use wasm_bindgen_test::*;

fn assets() -> Vec<String> {
    ["BTC", "ETH", "SOL"].iter().map(|a| a.to_string()).collect()
}

#[wasm_bindgen_test]
fn custom_loop_reveals_amount_of_times_with_a_default() {
    let mut form = BotSetupFormState::new("BTC");
    assert!(!form.show_amount_of_times());
    assert_eq!(form.amount_of_times(), None);

    form.apply(BotSetupAction::SetLoop(LoopPolicy::Custom));
    assert!(form.show_amount_of_times());
    assert_eq!(form.amount_of_times(), Some(1));

    form.apply(BotSetupAction::SetAmountOfTimes(7));
    assert_eq!(form.amount_of_times(), Some(7));
}

#[wasm_bindgen_test]
fn leaving_custom_drops_amount_of_times() {
    let mut form = BotSetupFormState::new("BTC");
    form.apply(BotSetupAction::SetLoop(LoopPolicy::Custom));
    form.apply(BotSetupAction::SetAmountOfTimes(3));
    form.apply(BotSetupAction::SetLoop(LoopPolicy::Infinite));

    assert_eq!(form.amount_of_times(), None);
    assert!(form.validate(&assets()).is_empty());
    assert!(serde_json::to_value(&form).unwrap().get("amountOfTimes").is_none());
}

#[wasm_bindgen_test]
fn amount_of_times_is_ignored_outside_custom() {
    let mut form = BotSetupFormState::new("BTC");
    form.apply(BotSetupAction::SetAmountOfTimes(4));
    assert_eq!(form.amount_of_times(), None);
}

#[wasm_bindgen_test]
fn custom_loop_requires_at_least_one_repetition() {
    let mut form = BotSetupFormState::new("ETH");
    form.apply(BotSetupAction::SetLoop(LoopPolicy::Custom));
    form.apply(BotSetupAction::SetAmountOfTimes(0));

    let errors = form.validate(&assets());
    assert_eq!(errors.get(fields::AMOUNT_OF_TIMES), Some("Repeat at least once"));
    assert_eq!(errors.len(), 1);
}

#[wasm_bindgen_test]
fn prefill_from_configuration_keeps_asset_and_amount() {
    let config = BotConfiguration::from_value(json!({"asset": " SOL ", "action": "buy", "amount": "25"})).unwrap();
    let form = BotSetupFormState::from_configuration(&config);

    assert_eq!(form.asset_name(), "SOL");
    assert_eq!(form.amount_per_buy(), 25.0);
    assert_eq!(form.time_frame(), TimeFrame::OneHour);
    assert!(form.validate(&assets()).is_empty());
}

#[derive(Debug, Clone)]
struct LoopSequence(Vec<BotSetupAction>);

impl Arbitrary for LoopSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 16;
        let actions = (0..len)
            .map(|_| match u8::arbitrary(g) % 3 {
                0 => BotSetupAction::SetLoop(*g.choose(&[LoopPolicy::Once, LoopPolicy::Infinite, LoopPolicy::Custom]).unwrap()),
                1 => BotSetupAction::SetAmountOfTimes(u32::arbitrary(g) % 100),
                _ => BotSetupAction::SetFrequency(u32::arbitrary(g) % 10),
            })
            .collect();
        LoopSequence(actions)
    }
}

#[quickcheck]
fn amount_of_times_present_exactly_when_custom(sequence: LoopSequence) -> bool {
    let mut form = BotSetupFormState::new("BTC");
    for action in sequence.0 {
        form.apply(action);
    }
    form.amount_of_times().is_some() == (form.loop_policy() == LoopPolicy::Custom)
}
