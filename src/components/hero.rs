use leptos::*;

use crate::application::Route;
use crate::global_state::{chat_open, current_route};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Automate your crypto strategy"</h1>
            <p class="hero-sub">
                "Set up dollar-cost averaging and rule-based trading bots in minutes. "
                "Pick an asset, choose how much and how often, and let the bot do the rest."
            </p>
            <div class="hero-actions">
                <button class="btn primary" on:click=move |_| current_route().set(Route::blank_setup())>
                    "Create a bot"
                </button>
                <button class="btn ghost" on:click=move |_| chat_open().set(true)>
                    "Describe it to the assistant"
                </button>
                <button class="btn ghost" on:click=move |_| current_route().set(Route::Signup)>
                    "Sign up"
                </button>
            </div>
            <div class="hero-features">
                <div class="feature">
                    <h3>"Recurring buys"</h3>
                    <p>"Buy a fixed amount on a schedule, once, forever or a set number of times."</p>
                </div>
                <div class="feature">
                    <h3>"Price rules"</h3>
                    <p>"Trigger buys and sells when the price crosses a level or enters a range."</p>
                </div>
                <div class="feature">
                    <h3>"Scale in and out"</h3>
                    <p>"Add up to five extra levels per rule to spread entries and exits."</p>
                </div>
            </div>
        </section>
    }
}
