use leptos::*;
use strum::IntoEnumIterator;

use crate::application::{LaunchRequest, Route};
use crate::components::ActionCardEditor;
use crate::domain::action_card::{ActionCardData, TradeType};
use crate::domain::bot_setup::{BotSetupAction, BotSetupWizard, LoopPolicy, TimeFrame, WizardAction, WizardStep, fields};
use crate::domain::configuration::BotConfiguration;
use crate::domain::logging::{LogComponent, LogLevel, get_logger};
use crate::global_state::{chat_open, current_route, pending_launch};
use crate::infrastructure::config::AppConfig;
use crate::log_info;

#[component]
fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <p class="field-error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}

/// Step-by-step bot setup. `initial` pre-fills the wizard after an assistant
/// hand-off; `edit_mode` suppresses the launch confirmation in the chat.
#[component]
pub fn BotSetupWizardView(
    initial: Option<BotConfiguration>,
    #[prop(optional)] edit_mode: bool,
) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let wizard = create_rw_signal(match &initial {
        Some(configuration) => BotSetupWizard::from_configuration(configuration, edit_mode),
        None => BotSetupWizard::new(config.default_asset()),
    });
    let assets = store_value(config.assets);

    let dispatch = move |action: WizardAction| {
        assets.with_value(|assets| wizard.update(|w| w.apply(action, assets)));
    };
    let form = move |action: BotSetupAction| dispatch(WizardAction::Form(action));
    let numeric = move |field: &'static str, text: String| {
        if let Some(action) = BotSetupAction::from_input(field, &text) {
            form(action);
        }
    };

    let step = create_memo(move |_| wizard.with(|w| w.step()));
    let error_for = move |key: &'static str| {
        Signal::derive(move || wizard.with(|w| w.errors().get(key).map(str::to_string)))
    };

    let launch = move |_| {
        dispatch(WizardAction::Next);
        if !wizard.with_untracked(|w| w.errors().is_empty()) {
            log_info!(LogComponent::Presentation("SetupWizard"), "launch blocked by validation");
            return;
        }
        let (configuration, edit_mode) = wizard.with_untracked(|w| (w.to_configuration(), w.edit_mode()));
        get_logger().log_with_metadata(
            LogLevel::Info,
            LogComponent::Presentation("SetupWizard"),
            &format!("launching {} bot", configuration.asset()),
            &serde_json::to_string(&configuration).unwrap_or_default(),
        );
        pending_launch().set(Some(LaunchRequest { configuration, edit_mode }));
        chat_open().set(true);
        current_route().set(Route::Home);
    };

    let asset_step = move || {
        view! {
            <label for="asset">"Asset"</label>
            <select
                id="asset"
                on:change=move |ev| form(BotSetupAction::SetAsset(event_target_value(&ev)))
            >
                {assets
                    .get_value()
                    .into_iter()
                    .map(|asset| {
                        let selected = asset.clone();
                        view! {
                            <option
                                value=asset.clone()
                                selected=move || wizard.with(|w| w.form().asset_name() == selected)
                            >
                                {asset.clone()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <FieldError message=error_for(fields::ASSET_NAME)/>
        }
    };

    let amount_step = move || {
        view! {
            <label for="amount">"Amount per buy ($)"</label>
            <input
                id="amount"
                type="number"
                min="0"
                step="any"
                prop:value=move || wizard.with(|w| w.form().input_text(fields::AMOUNT_PER_BUY))
                on:input=move |ev| numeric(fields::AMOUNT_PER_BUY, event_target_value(&ev))
            />
            <FieldError message=error_for(fields::AMOUNT_PER_BUY)/>
        }
    };

    let schedule_step = move || {
        view! {
            <label for="time-frame">"Timeframe"</label>
            <select
                id="time-frame"
                on:change=move |ev| {
                    if let Ok(time_frame) = event_target_value(&ev).parse::<TimeFrame>() {
                        form(BotSetupAction::SetTimeFrame(time_frame));
                    }
                }
            >
                {TimeFrame::iter()
                    .map(|tf| {
                        view! {
                            <option
                                value=tf.code().to_string()
                                selected=move || wizard.with(|w| w.form().time_frame() == tf)
                            >
                                {tf.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <FieldError message=error_for(fields::TIME_FRAME)/>

            <label for="frequency">"Buys per timeframe"</label>
            <input
                id="frequency"
                type="number"
                min="1"
                prop:value=move || wizard.with(|w| w.form().input_text(fields::FREQUENCY))
                on:input=move |ev| numeric(fields::FREQUENCY, event_target_value(&ev))
            />
            <FieldError message=error_for(fields::FREQUENCY)/>
        }
    };

    let loop_step = move || {
        view! {
            <div class="loop-options">
                {LoopPolicy::iter()
                    .map(|policy| {
                        view! {
                            <label class="radio">
                                <input
                                    type="radio"
                                    name="loop"
                                    value=policy.to_string()
                                    prop:checked=move || wizard.with(|w| w.form().loop_policy() == policy)
                                    on:change=move |_| form(BotSetupAction::SetLoop(policy))
                                />
                                {policy.to_string()}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || wizard.with(|w| w.form().show_amount_of_times())>
                <label for="amount-of-times">"Amount of times"</label>
                <input
                    id="amount-of-times"
                    type="number"
                    min="1"
                    prop:value=move || wizard.with(|w| w.form().input_text(fields::AMOUNT_OF_TIMES))
                    on:input=move |ev| numeric(fields::AMOUNT_OF_TIMES, event_target_value(&ev))
                />
                <FieldError message=error_for(fields::AMOUNT_OF_TIMES)/>
            </Show>
        }
    };

    let actions_step = move || {
        view! {
            <p class="hint">"Optional price rules. Each rule can scale in or out over up to five levels."</p>
            <For
                each=move || {
                    wizard.with(|w| {
                        w.cards().iter().enumerate().map(|(i, card)| (i, card.trade_type)).collect::<Vec<_>>()
                    })
                }
                key=|entry| *entry
                children=move |(index, trade_type)| {
                    let data = Signal::derive(move || {
                        wizard.with(|w| {
                            w.cards().get(index).cloned().unwrap_or_else(|| ActionCardData::new(trade_type))
                        })
                    });
                    let card_errors = move || {
                        let prefix = format!("cards.{}.", index);
                        wizard.with(|w| {
                            w.errors()
                                .fields()
                                .filter(|key| key.starts_with(&prefix))
                                .filter_map(|key| w.errors().get(key).map(str::to_string))
                                .collect::<Vec<_>>()
                        })
                    };
                    view! {
                        <ActionCardEditor
                            data=data
                            on_change=Callback::new(move |card: ActionCardData| dispatch(WizardAction::ReplaceCard { index, card }))
                            on_remove=Callback::new(move |_: ()| dispatch(WizardAction::RemoveCard(index)))
                        />
                        <ul class="card-errors">
                            {move || card_errors().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                        </ul>
                    }
                }
            />
            <div class="card-actions">
                <button class="btn ghost" on:click=move |_| dispatch(WizardAction::AddCard(TradeType::Buy))>
                    "Add buy rule"
                </button>
                <button class="btn ghost" on:click=move |_| dispatch(WizardAction::AddCard(TradeType::Sell))>
                    "Add sell rule"
                </button>
            </div>
        }
    };

    let review_step = move || {
        let summary = move || {
            wizard.with(|w| {
                let f = w.form();
                let repeat = match f.amount_of_times() {
                    Some(times) => format!("{} ({} times)", f.loop_policy(), times),
                    None => f.loop_policy().to_string(),
                };
                vec![
                    ("Asset", f.asset_name().to_string()),
                    ("Amount per buy", format!("${}", f.amount_per_buy())),
                    ("Timeframe", f.time_frame().label().to_string()),
                    ("Frequency", f.frequency().to_string()),
                    ("Repeat", repeat),
                    ("Trade rules", w.cards().len().to_string()),
                ]
            })
        };
        let all_errors = move || {
            wizard.with(|w| {
                w.errors()
                    .fields()
                    .filter_map(|key| w.errors().get(key).map(str::to_string))
                    .collect::<Vec<_>>()
            })
        };
        view! {
            <dl class="review">
                {move || {
                    summary()
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect_view()
                }}
            </dl>
            <ul class="card-errors">
                {move || all_errors().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
            </ul>
            <button class="btn primary" on:click=launch>
                {move || if wizard.with(|w| w.edit_mode()) { "Save changes" } else { "Launch bot" }}
            </button>
        }
    };

    view! {
        <section class="setup-wizard">
            <header class="wizard-header">
                <span class="wizard-progress">
                    {move || {
                        let (position, total) = step.get().position();
                        format!("Step {} of {}", position, total)
                    }}
                </span>
                <h2>{move || step.get().title()}</h2>
            </header>

            <div class="wizard-body">
                {move || match step.get() {
                    WizardStep::Asset => asset_step().into_view(),
                    WizardStep::Amount => amount_step().into_view(),
                    WizardStep::Schedule => schedule_step().into_view(),
                    WizardStep::Loop => loop_step().into_view(),
                    WizardStep::Actions => actions_step().into_view(),
                    WizardStep::Review => review_step().into_view(),
                }}
            </div>

            <footer class="wizard-nav">
                <button
                    class="btn ghost"
                    disabled=move || step.get().previous().is_none()
                    on:click=move |_| dispatch(WizardAction::Back)
                >
                    "Back"
                </button>
                <Show when=move || step.get().next().is_some()>
                    <button class="btn primary" on:click=move |_| dispatch(WizardAction::Next)>
                        "Next"
                    </button>
                </Show>
            </footer>
        </section>
    }
}
