use leptos::*;

use crate::application::{ChatService, Route, follow_outcome};
use crate::domain::chat::{ChatMessage, ChatSession};
use crate::domain::configuration::BotConfiguration;
use crate::domain::logging::LogComponent;
use crate::global_state::{SignalNavigator, chat_open, current_route, pending_launch};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http::HttpAssistantClient;
use crate::{log_debug, log_info};

/// Floating assistant: a toggle button plus the conversation panel.
///
/// The session lives as long as this component; it is mounted once by the
/// app shell so the transcript survives navigation.
#[component]
pub fn ChatAssistant() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let service = store_value(ChatService::new(HttpAssistantClient::new(config.assistant_url())));
    let session = create_rw_signal(ChatSession::new());

    let messages = create_memo(move |_| session.with(|s| s.messages().to_vec()));
    let sending = create_memo(move |_| session.with(ChatSession::is_sending));
    let can_submit = create_memo(move |_| session.with(ChatSession::can_submit));

    // Launches from the wizard arrive through the global signal.
    create_effect(move |_| {
        if let Some(request) = pending_launch().get() {
            pending_launch().set(None);
            log_info!(
                LogComponent::Presentation("ChatAssistant"),
                "confirming launch of {} bot",
                request.configuration.asset()
            );
            session.update(|s| s.launch(request.configuration, request.edit_mode));
        }
    });

    let send = move || {
        let Some(text) = session.try_update(|s| s.submit()).flatten() else {
            return;
        };
        let service = service.get_value();
        spawn_local(async move {
            let result = service.exchange(&text).await;
            // The panel may have been unmounted while the request was in flight.
            if let Some(outcome) = session.try_update(|s| s.resolve(result)) {
                log_debug!(LogComponent::Presentation("ChatAssistant"), "turn resolved: {:?}", outcome);
                follow_outcome(&outcome, &SignalNavigator);
            }
        });
    };

    view! {
        <div class="chat-widget">
            <Show when=move || chat_open().get()>
                <div class="chat-panel">
                    <div class="chat-header">
                        <span>"Bot assistant"</span>
                        <button class="btn link" on:click=move |_| chat_open().set(false)>"×"</button>
                    </div>

                    <div class="chat-messages">
                        <For
                            each=move || messages.get()
                            key=|message| message.id.clone()
                            children=move |message| view! { <MessageBubble message=message/> }
                        />
                        <Show when=move || sending.get()>
                            <div class="bubble assistant typing">"…"</div>
                        </Show>
                    </div>

                    <form
                        class="chat-input"
                        on:submit=move |ev: ev::SubmitEvent| {
                            ev.prevent_default();
                            send();
                        }
                    >
                        <input
                            type="text"
                            placeholder="e.g. Buy $50 of ETH every week"
                            prop:value=move || session.with(|s| s.input().to_string())
                            prop:disabled=move || sending.get()
                            on:input=move |ev| session.update(|s| s.set_input(event_target_value(&ev)))
                        />
                        <button class="btn primary" type="submit" disabled=move || !can_submit.get()>
                            "Send"
                        </button>
                    </form>
                </div>
            </Show>

            <button class="chat-toggle" on:click=move |_| chat_open().update(|open| *open = !*open)>
                {move || if chat_open().get() { "Close assistant" } else { "Ask the assistant" }}
            </button>
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let side = if message.is_user { "user" } else { "assistant" };

    if message.is_config_card() {
        if let Some(configuration) = message.configuration.clone() {
            return view! {
                <div class=format!("bubble {} config", side)>
                    <p>{message.text.clone()}</p>
                    <ConfigCard configuration=configuration/>
                </div>
            }
            .into_view();
        }
    }

    let refusal = message.is_refusal();
    view! {
        <div class=format!("bubble {}", side) class:refusal=refusal>
            {refusal.then(|| view! { <span class="refusal-icon">"⚠️ "</span> })}
            {message.text}
        </div>
    }
    .into_view()
}

#[component]
fn ConfigCard(configuration: BotConfiguration) -> impl IntoView {
    let amount = configuration.amount().map(|a| format!("${}", a));
    let asset = configuration.asset().to_string();
    let strategy = configuration.strategy().to_string();
    let action = configuration.action().to_string();
    let edit_target = configuration.clone();
    let edit = move |_| {
        chat_open().set(false);
        current_route().set(Route::setup_with(edit_target.clone(), true));
    };

    view! {
        <dl class="config-card">
            <dt>"Asset"</dt>
            <dd>{asset}</dd>
            <dt>"Strategy"</dt>
            <dd>{strategy}</dd>
            <dt>"Action"</dt>
            <dd>{action}</dd>
            {amount.map(|amount| view! { <dt>"Amount"</dt><dd>{amount}</dd> })}
        </dl>
        <button class="btn ghost" on:click=edit>"Edit setup"</button>
    }
}
