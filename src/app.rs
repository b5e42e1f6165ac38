use leptos::*;

use crate::application::Route;
use crate::components::{BotSetupWizardView, ChatAssistant, Footer, Hero, SignupForm};
use crate::domain::logging::LogComponent;
use crate::global_state::current_route;
use crate::infrastructure::config::AppConfig;
use crate::log_info;

/// Root component: switches views on the global route and keeps the
/// assistant mounted across all of them.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::default());

    create_effect(move |_| {
        current_route().with(|route| {
            log_info!(LogComponent::Presentation("App"), "route -> {:?}", route);
        });
    });

    view! {
        <style>
            {r#"
            .bot-setup-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
                min-height: 100vh;
                color: white;
                display: flex;
                flex-direction: column;
            }

            .top-bar {
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 16px 32px;
                background: rgba(255, 255, 255, 0.1);
                backdrop-filter: blur(10px);
                border-bottom: 1px solid rgba(255, 255, 255, 0.2);
            }

            .brand { font-weight: 700; font-size: 20px; cursor: pointer; }

            main { flex: 1; padding: 32px; max-width: 960px; width: 100%; margin: 0 auto; box-sizing: border-box; }

            .btn {
                border: none;
                border-radius: 8px;
                padding: 10px 18px;
                font-size: 14px;
                cursor: pointer;
                color: white;
            }
            .btn.primary { background: #4ade80; color: #0f2a1a; font-weight: 600; }
            .btn.ghost { background: rgba(255, 255, 255, 0.12); border: 1px solid rgba(255, 255, 255, 0.3); }
            .btn.link { background: none; padding: 4px 8px; text-decoration: underline; }
            .btn:disabled { opacity: 0.5; cursor: not-allowed; }

            .hero { text-align: center; padding: 48px 0; }
            .hero h1 { font-size: 40px; margin-bottom: 12px; }
            .hero-sub { opacity: 0.85; max-width: 640px; margin: 0 auto 24px; }
            .hero-actions { display: flex; gap: 12px; justify-content: center; flex-wrap: wrap; }
            .hero-features { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; margin-top: 40px; }
            .feature { background: rgba(255, 255, 255, 0.08); border-radius: 12px; padding: 16px; text-align: left; }

            .setup-wizard, .signup, .login-notice {
                background: rgba(255, 255, 255, 0.1);
                border: 1px solid rgba(255, 255, 255, 0.2);
                border-radius: 15px;
                padding: 24px;
            }
            .wizard-progress { opacity: 0.7; font-size: 13px; }
            .wizard-body, .signup form { display: flex; flex-direction: column; gap: 8px; margin: 16px 0; }
            .wizard-nav { display: flex; justify-content: space-between; }
            .loop-options { display: flex; gap: 16px; }

            input, select {
                padding: 8px 10px;
                border-radius: 6px;
                border: 1px solid rgba(255, 255, 255, 0.3);
                background: rgba(0, 0, 0, 0.2);
                color: white;
            }

            .field-error, .card-errors li { color: #fca5a5; font-size: 13px; margin: 0; }
            .form-banner.error { background: rgba(239, 68, 68, 0.2); border: 1px solid #ef4444; border-radius: 8px; padding: 10px; }

            .action-card {
                border-left: 4px solid #4ade80;
                background: rgba(0, 0, 0, 0.15);
                border-radius: 10px;
                padding: 16px;
                display: flex;
                flex-direction: column;
                gap: 8px;
            }
            .action-card.sell { border-left-color: #f87171; }
            .card-header { display: flex; justify-content: space-between; font-weight: 600; }
            .range-inputs, .level-row, .trade-management, .card-actions { display: flex; gap: 8px; align-items: center; }

            .review dt { opacity: 0.7; font-size: 13px; }
            .review dd { margin: 0 0 8px 0; }

            .chat-widget { position: fixed; right: 24px; bottom: 24px; display: flex; flex-direction: column; align-items: flex-end; gap: 12px; z-index: 10; }
            .chat-toggle { background: #4ade80; color: #0f2a1a; border: none; border-radius: 24px; padding: 12px 20px; font-weight: 600; cursor: pointer; }
            .chat-panel {
                width: 360px;
                max-height: 520px;
                display: flex;
                flex-direction: column;
                background: #1f2f46;
                border: 1px solid rgba(255, 255, 255, 0.2);
                border-radius: 15px;
                overflow: hidden;
            }
            .chat-header { display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; background: rgba(255, 255, 255, 0.08); }
            .chat-messages { flex: 1; overflow-y: auto; padding: 12px; display: flex; flex-direction: column; gap: 8px; }
            .bubble { padding: 8px 12px; border-radius: 12px; max-width: 85%; font-size: 14px; }
            .bubble.user { align-self: flex-end; background: #2563eb; }
            .bubble.assistant { align-self: flex-start; background: rgba(255, 255, 255, 0.12); }
            .bubble.refusal { background: rgba(239, 68, 68, 0.25); }
            .bubble.typing { opacity: 0.6; }
            .config-card dt { opacity: 0.7; font-size: 12px; }
            .config-card dd { margin: 0 0 6px 0; }
            .chat-input { display: flex; gap: 8px; padding: 12px; border-top: 1px solid rgba(255, 255, 255, 0.15); }
            .chat-input input { flex: 1; }

            .footer { padding: 24px 32px; background: rgba(0, 0, 0, 0.2); font-size: 13px; }
            .footer-columns { display: flex; gap: 48px; }
            .footer-note { opacity: 0.6; margin-top: 16px; }
            "#}
        </style>

        <div class="bot-setup-app">
            <header class="top-bar">
                <span class="brand" on:click=move |_| current_route().set(Route::Home)>"BotForge"</span>
                <nav>
                    <button class="btn link" on:click=move |_| current_route().set(Route::Signup)>"Sign up"</button>
                    <button class="btn link" on:click=move |_| current_route().set(Route::login())>"Log in"</button>
                </nav>
            </header>

            <main>
                {move || match current_route().get() {
                    Route::Home => view! { <Hero/> }.into_view(),
                    Route::Setup { initial, edit_mode } => {
                        view! { <BotSetupWizardView initial=initial edit_mode=edit_mode/> }.into_view()
                    }
                    Route::Signup => view! { <SignupForm/> }.into_view(),
                    Route::Login { just_registered } => {
                        view! { <LoginNotice just_registered=just_registered/> }.into_view()
                    }
                }}
            </main>

            <Footer/>
        </div>

        <ChatAssistant/>
    }
}

/// Heading and hint for the login placeholder.
fn login_copy(just_registered: bool) -> (&'static str, &'static str) {
    if just_registered {
        ("Account created", "You can now log in with your email and password.")
    } else {
        ("Log in", "Signing in is handled by your account provider. Create an account first if you don't have one.")
    }
}

/// Login placeholder. Authentication itself lives elsewhere.
#[component]
fn LoginNotice(just_registered: bool) -> impl IntoView {
    let (heading, hint) = login_copy(just_registered);
    view! {
        <section class="login-notice">
            <h2>{heading}</h2>
            <p>{hint}</p>
            <button class="btn primary" on:click=move |_| current_route().set(Route::Home)>"Back to home"</button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_signup_redirect_announces_a_new_account() {
        assert_eq!(login_copy(true).0, "Account created");
        assert_eq!(login_copy(false).0, "Log in");
        assert!(!login_copy(false).1.contains("created"));
    }
}
