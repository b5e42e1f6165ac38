use bot_setup_web::domain::chat::{AssistantReply, MessageKind};
use bot_setup_web::domain::errors::GatewayError;
use serde_json::{Value, json};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn typed_text_replies_keep_their_kind() {
    for (raw, kind) in [
        ("greeting", MessageKind::Greeting),
        ("refusal", MessageKind::Refusal),
        ("insight", MessageKind::Insight),
    ] {
        let body = format!(r#"{{"reply": "hello", "type": "{raw}"}}"#);
        let reply = AssistantReply::from_json(&body).unwrap();
        assert_eq!(reply.kind(), Some(kind));
        assert_eq!(reply.text(), "hello");
    }
}

#[wasm_bindgen_test]
fn config_reply_carries_the_configuration_verbatim() {
    let body = r#"{
        "reply": "Done",
        "type": "config",
        "configuration": {"asset": "ETH", "strategy": "DCA", "action": "buy", "interval": "weekly"}
    }"#;
    let AssistantReply::Config { configuration: Some(config), .. } = AssistantReply::from_json(body).unwrap() else {
        panic!("expected a config reply with a payload");
    };
    assert_eq!(config.asset(), "ETH");
    assert_eq!(config.action(), "buy");
    assert_eq!(config.get("interval").and_then(Value::as_str), Some("weekly"));
}

#[wasm_bindgen_test]
fn handed_off_configuration_serializes_back_to_the_received_object() {
    for payload in [
        json!({"asset": "ETH", "action": "buy", "amount": "$50"}),
        json!({"asset": "ETH", "action": "buy", "amount": "fifty"}),
        json!({"asset": "ETH", "amount": -3}),
        json!({"asset": "ETH"}),
        json!({"asset": "SOL", "strategy": "grid", "levels": [1, 2], "note": null}),
    ] {
        let body = json!({"type": "config", "configuration": payload.clone()}).to_string();
        let Some(config) = AssistantReply::from_json(&body).unwrap().configuration().cloned() else {
            panic!("expected a configuration in {body}");
        };
        assert_eq!(serde_json::to_value(&config).unwrap(), payload);
    }
}

#[wasm_bindgen_test]
fn missing_fields_are_read_with_defaults_without_being_added() {
    let body = r#"{"type": "config", "configuration": {"asset": "ETH", "amount": "$50"}}"#;
    let config = AssistantReply::from_json(body).unwrap().configuration().cloned().unwrap();

    assert_eq!(config.strategy(), "DCA");
    assert_eq!(config.action(), "");
    assert_eq!(config.amount(), Some(50.0));
    assert_eq!(config.get("strategy"), None);
    assert_eq!(config.get("action"), None);
}

#[wasm_bindgen_test]
fn text_replies_keep_an_attached_configuration() {
    let body = r#"{"reply": "Here is a start", "type": "insight", "configuration": {"asset": "BTC"}}"#;
    let reply = AssistantReply::from_json(body).unwrap();
    assert_eq!(reply.kind(), Some(MessageKind::Insight));
    assert_eq!(reply.configuration().map(|c| c.asset()), Some("BTC"));

    let unusable = r#"{"reply": "hm", "type": "insight", "configuration": {"strategy": "DCA"}}"#;
    assert_eq!(AssistantReply::from_json(unusable).unwrap().configuration(), None);
}

#[wasm_bindgen_test]
fn config_reply_may_omit_the_text() {
    let body = r#"{"type": "config", "configuration": {"asset": "BTC", "action": "sell"}}"#;
    let reply = AssistantReply::from_json(body).unwrap();
    assert_eq!(reply.text(), "");
    assert_eq!(reply.kind(), Some(MessageKind::Config));
}

#[wasm_bindgen_test]
fn unknown_or_missing_type_is_plain_text() {
    let unknown = AssistantReply::from_json(r#"{"reply": "hm", "type": "poem"}"#).unwrap();
    assert_eq!(unknown, AssistantReply::text_reply(None, "hm"));

    let missing = AssistantReply::from_json(r#"{"reply": "hm"}"#).unwrap();
    assert_eq!(missing.kind(), None);
}

#[wasm_bindgen_test]
fn malformed_bodies_are_decode_errors() {
    for body in [
        "not json",
        r#"{"reply": 42, "type": "insight"}"#,
        r#"{"type": "insight"}"#,
        r#"{"reply": "x", "type": "config", "configuration": {"strategy": "DCA"}}"#,
        r#"{"reply": "x", "type": "config", "configuration": {"asset": "  "}}"#,
    ] {
        assert!(
            matches!(AssistantReply::from_json(body), Err(GatewayError::Decode(_))),
            "expected a decode error for {body}"
        );
    }
}
