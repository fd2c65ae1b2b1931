//! Sign-up page: registers a writer, then sends them to sign in.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::net::types::SignUpRequest;
use crate::util::validation::{FieldErrors, validate_sign_up};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let conf_password = RwSignal::new(String::new());
    let passkey = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let signup_error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let request = SignUpRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            conf_password: conf_password.get_untracked(),
            passkey: passkey.get_untracked(),
        };
        if let Err(field_errors) = validate_sign_up(&request) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        signup_error.set(None);
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_up(&request).await {
                    Ok(id) => {
                        log::info!("writer {id} registered");
                        navigate(crate::util::auth::SIGN_IN_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("sign up failed: {e}");
                        signup_error.set(Some(e.to_string()));
                        pending.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate);
        }
    };

    let error_for = move |field: &'static str| move || errors.get().get(field).unwrap_or_default();
    let text_input = move |id: &'static str, kind: &'static str, autocomplete: &'static str, value: RwSignal<String>| {
        view! {
            <input
                id=id
                class="auth-form__input"
                type=kind
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit novalidate>
            <Show when=move || signup_error.get().is_some()>
                <p class="auth-form__error">{move || signup_error.get().unwrap_or_default()}</p>
            </Show>
            <div class="auth-form__row">
                <div class="auth-form__field">
                    <label class="auth-form__label" for="username">"Username"</label>
                    {text_input("username", "text", "username", username)}
                    <p class="field-error">{error_for("username")}</p>
                </div>
                <div class="auth-form__field">
                    <label class="auth-form__label" for="email">"Email"</label>
                    {text_input("email", "email", "email", email)}
                    <p class="field-error">{error_for("email")}</p>
                </div>
            </div>
            <div class="auth-form__row">
                <div class="auth-form__field">
                    <label class="auth-form__label" for="password">"Password"</label>
                    {text_input("password", "password", "new-password", password)}
                    <p class="field-error">{error_for("password")}</p>
                </div>
                <div class="auth-form__field">
                    <label class="auth-form__label" for="confPassword">"Confirm Password"</label>
                    {text_input("confPassword", "password", "new-password", conf_password)}
                    <p class="field-error">{error_for("confPassword")}</p>
                </div>
            </div>
            <div class="auth-form__field">
                <label class="auth-form__label" for="passkey">"Writer Pass Key"</label>
                {text_input("passkey", "password", "off", passkey)}
                <p class="field-error">{error_for("passkey")}</p>
            </div>
            <Show
                when=move || !pending.get()
                fallback=|| view! { <div class="auth-form__pending"><Spinner/></div> }
            >
                <button class="btn btn--accent auth-form__submit" type="submit">"Sign Up"</button>
            </Show>
        </form>
        <p class="auth-form__switch">
            "Already a member? "
            <a href="/users/sign-in">"Login"</a>
        </p>
    }
}
