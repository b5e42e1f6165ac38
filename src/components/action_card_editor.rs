use leptos::*;
use strum::IntoEnumIterator;

use crate::domain::action_card::{
    ActionCardData, ActionCardUpdate, Condition, ConditionValue, MAX_LEVELS, TradeField, TradeType, apply,
};

/// Controlled editor: reads `data`, reports every edit as a whole new card
/// through `on_change`.
#[component]
pub fn ActionCardEditor(
    #[prop(into)] data: Signal<ActionCardData>,
    #[prop(into)] on_change: Callback<ActionCardData>,
    #[prop(optional, into)] on_remove: Option<Callback<()>>,
) -> impl IntoView {
    let update = move |u: ActionCardUpdate| on_change.call(apply(&data.get_untracked(), u));

    // Fixed per card instance.
    let trade_type = data.with_untracked(|d| d.trade_type);
    let [first_field, second_field] = TradeField::for_type(trade_type);

    let is_range = create_memo(move |_| data.with(|d| d.condition.is_range()));
    let level_count = create_memo(move |_| data.with(|d| d.levels.len()));

    let single_value = move || match data.with(|d| d.value.clone()) {
        ConditionValue::Single(v) => v,
        ConditionValue::Range { .. } => String::new(),
    };
    let range_bound = move |max: bool| match data.with(|d| d.value.clone()) {
        ConditionValue::Range { min_value, max_value } => if max { max_value } else { min_value },
        ConditionValue::Single(_) => String::new(),
    };
    let trade_value = move |field: TradeField| {
        data.with(|d| d.trade_management.get(field).unwrap_or_default().to_string())
    };
    let level_value = move |index: usize, field: TradeField| {
        data.with(|d| {
            d.levels
                .get(index)
                .and_then(|level| level.get(field))
                .unwrap_or_default()
                .to_string()
        })
    };

    view! {
        <div class="action-card" class:sell=move || trade_type == TradeType::Sell>
            <div class="card-header">
                <span class="trade-type">{trade_type.to_string()}</span>
                {on_remove.map(|remove| view! {
                    <button class="btn link" on:click=move |_| remove.call(())>"Remove rule"</button>
                })}
            </div>

            <label>"When price is"</label>
            <select on:change=move |ev| {
                if let Ok(condition) = event_target_value(&ev).parse::<Condition>() {
                    update(ActionCardUpdate::SetCondition(condition));
                }
            }>
                {Condition::iter()
                    .map(|c| {
                        view! {
                            <option value=c.to_string() selected=move || data.with(|d| d.condition == c)>
                                {c.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            {move || if is_range.get() {
                view! {
                    <div class="range-inputs">
                        <input
                            type="number"
                            placeholder="Min price"
                            prop:value=move || range_bound(false)
                            on:input=move |ev| update(ActionCardUpdate::SetMinValue(event_target_value(&ev)))
                        />
                        <span>"and"</span>
                        <input
                            type="number"
                            placeholder="Max price"
                            prop:value=move || range_bound(true)
                            on:input=move |ev| update(ActionCardUpdate::SetMaxValue(event_target_value(&ev)))
                        />
                    </div>
                }
                .into_view()
            } else {
                view! {
                    <input
                        type="number"
                        placeholder="Price"
                        prop:value=single_value
                        on:input=move |ev| update(ActionCardUpdate::SetValue(event_target_value(&ev)))
                    />
                }
                .into_view()
            }}

            <div class="trade-management">
                {[first_field, second_field]
                    .into_iter()
                    .map(|field| {
                        view! {
                            <label>
                                {field.label()}
                                <input
                                    type="number"
                                    prop:value=move || trade_value(field)
                                    on:input=move |ev| {
                                        update(ActionCardUpdate::SetTradeField { field, value: event_target_value(&ev) })
                                    }
                                />
                            </label>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="levels">
                <For
                    each=move || 0..level_count.get()
                    key=|index| *index
                    children=move |index| {
                        view! {
                            <div class="level-row">
                                <span class="level-label">{format!("Level {}", index + 1)}</span>
                                {[first_field, second_field]
                                    .into_iter()
                                    .map(|field| {
                                        view! {
                                            <input
                                                type="number"
                                                placeholder=field.label()
                                                prop:value=move || level_value(index, field)
                                                on:input=move |ev| {
                                                    update(ActionCardUpdate::SetLevelField {
                                                        index,
                                                        field,
                                                        value: event_target_value(&ev),
                                                    })
                                                }
                                            />
                                        }
                                    })
                                    .collect_view()}
                                <button class="btn link" on:click=move |_| update(ActionCardUpdate::DeleteLevel(index))>
                                    "Delete"
                                </button>
                            </div>
                        }
                    }
                />
                <button
                    class="btn ghost"
                    disabled=move || !data.with(|d| d.can_add_level())
                    on:click=move |_| update(ActionCardUpdate::AddLevel)
                >
                    {move || format!("Add level ({}/{})", level_count.get(), MAX_LEVELS)}
                </button>
            </div>
        </div>
    }
}
