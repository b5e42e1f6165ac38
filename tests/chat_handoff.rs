use std::cell::RefCell;
use std::collections::VecDeque;

use bot_setup_web::application::{AssistantGateway, ChatService, Navigator, Route};
use bot_setup_web::domain::chat::{
    AssistantReply, CONNECTION_ERROR_TEXT, ChatOutcome, ChatPhase, ChatSession, MessageKind, UNEXPECTED_REPLY_TEXT,
};
use bot_setup_web::domain::configuration::BotConfiguration;
use bot_setup_web::domain::errors::{GatewayError, GatewayResult};
use futures::executor::block_on;
use serde_json::json;
use wasm_bindgen_test::*;

/// Replays canned replies and records what was sent.
#[derive(Default)]
struct ScriptedAssistant {
    replies: RefCell<VecDeque<GatewayResult<AssistantReply>>>,
    sent: RefCell<Vec<String>>,
}

impl ScriptedAssistant {
    fn replying(reply: GatewayResult<AssistantReply>) -> Self {
        let assistant = Self::default();
        assistant.replies.borrow_mut().push_back(reply);
        assistant
    }
}

impl AssistantGateway for &ScriptedAssistant {
    async fn send_message(&self, message: &str) -> GatewayResult<AssistantReply> {
        self.sent.borrow_mut().push(message.to_string());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Request("no scripted reply".into())))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum NavEvent {
    Navigate(Route),
    ChatOpen(bool),
}

#[derive(Default)]
struct RecordingNavigator {
    events: RefCell<Vec<NavEvent>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.events.borrow_mut().push(NavEvent::Navigate(route));
    }

    fn set_chat_open(&self, open: bool) {
        self.events.borrow_mut().push(NavEvent::ChatOpen(open));
    }
}

fn eth_config() -> BotConfiguration {
    BotConfiguration::from_value(json!({
        "asset": "ETH",
        "strategy": "DCA",
        "action": "buy"
    }))
    .unwrap()
}

#[wasm_bindgen_test]
fn config_reply_hands_off_without_a_transcript_entry() {
    let assistant = ScriptedAssistant::replying(Ok(AssistantReply::Config {
        reply: "Here is your bot".into(),
        configuration: Some(eth_config()),
    }));
    let service = ChatService::new(&assistant);
    let navigator = RecordingNavigator::default();
    let mut session = ChatSession::new();
    session.set_input("Buy $50 ETH");

    let outcome = block_on(service.send(&mut session, &navigator));

    assert_eq!(outcome, Some(ChatOutcome::Handoff(eth_config())));
    // greeting + the user's message, nothing from the assistant
    assert_eq!(session.messages().len(), 2);
    assert!(session.messages()[1].is_user);
    assert_eq!(session.messages()[1].text, "Buy $50 ETH");
    assert_eq!(session.phase(), ChatPhase::Idle);
    assert_eq!(assistant.sent.borrow().as_slice(), ["Buy $50 ETH"]);
    assert_eq!(
        navigator.events.borrow().as_slice(),
        [
            NavEvent::ChatOpen(false),
            NavEvent::Navigate(Route::setup_with(eth_config(), false)),
        ]
    );
}

#[wasm_bindgen_test]
fn refusal_appends_one_assistant_message() {
    let assistant = ScriptedAssistant::replying(Ok(AssistantReply::text_reply(
        Some(MessageKind::Refusal),
        "I cannot do that.",
    )));
    let service = ChatService::new(&assistant);
    let navigator = RecordingNavigator::default();
    let mut session = ChatSession::new();
    session.set_input("What's the weather?");

    let outcome = block_on(service.send(&mut session, &navigator));

    assert_eq!(outcome, Some(ChatOutcome::Replied));
    assert_eq!(session.messages().len(), 3);
    let last = session.messages().last().unwrap();
    assert!(!last.is_user);
    assert!(last.is_refusal());
    assert_eq!(last.text, "I cannot do that.");
    assert!(navigator.events.borrow().is_empty());
}

#[wasm_bindgen_test]
fn transport_failure_appends_the_connection_message() {
    let assistant = ScriptedAssistant::replying(Err(GatewayError::Status { code: 502, message: None }));
    let service = ChatService::new(&assistant);
    let navigator = RecordingNavigator::default();
    let mut session = ChatSession::new();
    session.set_input("hello");
    session.submit();
    session.resolve(Ok(AssistantReply::text_reply(Some(MessageKind::Insight), "ETH is up 3% today.")));
    let before = session.messages().len();
    session.set_input("Buy BTC daily");

    let outcome = block_on(service.send(&mut session, &navigator));

    assert_eq!(outcome, Some(ChatOutcome::Failed));
    assert_eq!(session.messages().len(), before + 2);
    let last = session.messages().last().unwrap();
    assert_eq!(last.text, CONNECTION_ERROR_TEXT);
    assert_eq!(last.kind, Some(MessageKind::Refusal));
    assert!(!session.is_sending());
}

#[wasm_bindgen_test]
fn unusable_reply_is_not_reported_as_unreachable() {
    let body = r#"{"type": "refusal"}"#;
    let assistant = ScriptedAssistant::replying(AssistantReply::from_json(body));
    let service = ChatService::new(&assistant);
    let navigator = RecordingNavigator::default();
    let mut session = ChatSession::new();
    session.set_input("Buy ETH");

    let outcome = block_on(service.send(&mut session, &navigator));

    assert_eq!(outcome, Some(ChatOutcome::Failed));
    let last = session.messages().last().unwrap();
    assert_eq!(last.text, UNEXPECTED_REPLY_TEXT);
    assert_ne!(last.text, CONNECTION_ERROR_TEXT);
    assert!(navigator.events.borrow().is_empty());
}

#[wasm_bindgen_test]
fn text_reply_message_carries_its_configuration() {
    let mut session = ChatSession::empty();
    session.set_input("what would you suggest?");
    session.submit();

    let outcome = session.resolve(Ok(AssistantReply::Text {
        kind: Some(MessageKind::Insight),
        reply: "A weekly ETH buy is a common start.".into(),
        configuration: Some(eth_config()),
    }));

    assert_eq!(outcome, ChatOutcome::Replied);
    let last = session.messages().last().unwrap();
    assert_eq!(last.configuration.as_ref(), Some(&eth_config()));
    assert!(!last.is_config_card());
}

#[wasm_bindgen_test]
fn second_submit_while_sending_is_suppressed() {
    let mut session = ChatSession::new();
    session.set_input("first");
    assert_eq!(session.submit().as_deref(), Some("first"));
    assert!(session.is_sending());

    session.set_input("second");
    assert!(!session.can_submit());
    assert_eq!(session.submit(), None);
    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.input(), "second");
}

#[wasm_bindgen_test]
fn blank_input_makes_no_call() {
    let assistant = ScriptedAssistant::default();
    let service = ChatService::new(&assistant);
    let navigator = RecordingNavigator::default();
    let mut session = ChatSession::new();
    session.set_input("   ");

    assert_eq!(block_on(service.send(&mut session, &navigator)), None);
    assert!(assistant.sent.borrow().is_empty());
    assert_eq!(session.messages().len(), 1);
}

#[wasm_bindgen_test]
fn config_without_payload_is_shown_as_text() {
    let mut session = ChatSession::empty();
    session.set_input("configure something");
    session.submit();

    let outcome = session.resolve(Ok(AssistantReply::Config {
        reply: "I need a bit more detail.".into(),
        configuration: None,
    }));

    assert_eq!(outcome, ChatOutcome::Replied);
    let last = session.messages().last().unwrap();
    assert_eq!(last.text, "I need a bit more detail.");
    assert!(!last.is_config_card());
}

#[wasm_bindgen_test]
fn launch_confirms_only_outside_edit_mode() {
    let mut session = ChatSession::new();
    session.launch(eth_config(), true);
    assert_eq!(session.messages().len(), 1);

    session.launch(eth_config(), false);
    assert_eq!(session.messages().len(), 2);
    let card = session.messages().last().unwrap();
    assert!(card.is_config_card());
    assert!(card.text.contains("ETH"));
    assert_eq!(card.configuration.as_ref(), Some(&eth_config()));
}

#[wasm_bindgen_test]
fn message_ids_are_unique() {
    let mut session = ChatSession::new();
    for text in ["one", "two", "three"] {
        session.set_input(text);
        session.submit();
        session.resolve(Ok(AssistantReply::text_reply(Some(MessageKind::Insight), format!("re: {text}"))));
    }
    let mut ids: Vec<_> = session.messages().iter().map(|m| m.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), session.messages().len());
}
