use leptos::*;

use crate::application::{Route, SignupOutcome, SignupService};
use crate::domain::forms::FieldErrors;
use crate::domain::signup::{SignupField, SignupFormData};
use crate::global_state::{SignalNavigator, current_route};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http::HttpRegistrationClient;

#[component]
pub fn SignupForm() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let service = store_value(SignupService::new(HttpRegistrationClient::new(config.register_url())));

    let form = create_rw_signal(SignupFormData::default());
    let errors = create_rw_signal(FieldErrors::new());
    let banner = create_rw_signal(None::<String>);
    let submitting = create_rw_signal(false);

    let error_for = move |key: &'static str| move || errors.with(|e| e.get(key).map(str::to_string));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let data = form.get_untracked();
        let service = service.get_value();
        submitting.set(true);
        banner.set(None);
        spawn_local(async move {
            let outcome = service.submit(&data, &SignalNavigator).await;
            // The form is gone after a successful redirect.
            submitting.try_set(false);
            match outcome {
                SignupOutcome::Invalid(field_errors) => {
                    errors.try_set(field_errors);
                }
                SignupOutcome::Registered => {
                    errors.try_set(FieldErrors::new());
                }
                SignupOutcome::Rejected(message) => {
                    errors.try_set(FieldErrors::new());
                    banner.try_set(Some(message));
                }
            }
        });
    };

    let input = move |field: SignupField, id: &'static str, label: &'static str, kind: &'static str| {
        let current = move || {
            form.with(|f| match field {
                SignupField::Email => f.email.clone(),
                SignupField::Password => f.password.clone(),
                SignupField::Password2 => f.password2.clone(),
            })
        };
        let error = error_for(id);
        view! {
            <label for=id>{label}</label>
            <input
                id=id
                type=kind
                prop:value=current
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
            {move || error().map(|message| view! { <p class="field-error">{message}</p> })}
        }
    };

    view! {
        <section class="signup">
            <h2>"Create your account"</h2>
            <form on:submit=on_submit>
                {input(SignupField::Email, "email", "Email", "email")}
                {input(SignupField::Password, "password", "Password", "password")}
                {input(SignupField::Password2, "password2", "Confirm password", "password")}

                {move || banner.get().map(|message| view! { <div class="form-banner error">{message}</div> })}

                <button class="btn primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account…" } else { "Sign up" }}
                </button>
            </form>
            <p class="form-footer">
                "Already have an account? "
                <button class="btn link" on:click=move |_| current_route().set(Route::login())>"Log in"</button>
            </p>
        </section>
    }
}
