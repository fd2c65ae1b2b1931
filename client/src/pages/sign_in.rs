//! Sign-in page: email + password exchanged for a session token.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::net::types::SignInRequest;
use crate::state::auth::AuthState;
use crate::util::validation::{FieldErrors, validate_sign_in};

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let login_error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let request = SignInRequest { email: email.get_untracked(), password: password.get_untracked() };
        if let Err(field_errors) = validate_sign_in(&request) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        login_error.set(None);
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&request).await {
                    Ok(token) => {
                        crate::util::session::store_token(&token);
                        auth.set(AuthState { status: crate::state::auth::SessionStatus::Authenticated });
                        navigate(crate::util::auth::ARTICLES_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("sign in failed: {e}");
                        login_error.set(Some(e.to_string()));
                        pending.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate, auth);
        }
    };

    let error_for = move |field: &'static str| move || errors.get().get(field).unwrap_or_default();

    view! {
        <form class="auth-form" on:submit=on_submit novalidate>
            <Show when=move || login_error.get().is_some()>
                <p class="auth-form__error">{move || login_error.get().unwrap_or_default()}</p>
            </Show>
            <div class="auth-form__field">
                <label class="auth-form__label" for="email">"Email"</label>
                <input
                    id="email"
                    class="auth-form__input"
                    type="email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <p class="field-error">{error_for("email")}</p>
            </div>
            <div class="auth-form__field">
                <label class="auth-form__label" for="password">"Password"</label>
                <input
                    id="password"
                    class="auth-form__input"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <p class="field-error">{error_for("password")}</p>
            </div>
            <Show
                when=move || !pending.get()
                fallback=|| view! { <div class="auth-form__pending"><Spinner/></div> }
            >
                <button class="btn btn--accent auth-form__submit" type="submit">"Sign In"</button>
            </Show>
        </form>
        <p class="auth-form__switch">
            "Not a member? "
            <a href="/users/sign-up">"Sign Up"</a>
        </p>
    }
}
