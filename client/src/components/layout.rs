//! Route shells: the auth ("users") frame and the dashboard frame.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each shell installs the session gate for its area and renders child routes
//! through `Outlet`. Both shells withhold their children behind a status line
//! until the session status matches the area, so no authenticated request
//! fires for a stale token and a signed-in writer never sees the auth forms.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::{ARTICLES_PATH, RouteArea, gate_placeholder, install_session_gate, log_out};

/// Product mark linking home.
#[component]
fn Brand() -> impl IntoView {
    view! {
        <a class="brand" href=ARTICLES_PATH>
            <span class="brand__subtitle">"Singapore"</span>
            <span class="brand__title">"on-Thames"</span>
            <span class="brand__tag">"Writers"</span>
        </a>
    }
}

/// Frame around the sign-in and sign-up screens.
#[component]
pub fn UsersLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_session_gate(auth, RouteArea::Users, use_navigate());

    view! {
        <div class="users-page">
            <div class="users-card">
                <Brand/>
                <div class="users-card__body">
                    <Show
                        when=move || auth.with(|a| gate_placeholder(a, RouteArea::Users).is_none())
                        fallback=move || {
                            view! {
                                <p class="users-card__status">
                                    {move || auth.with(|a| gate_placeholder(a, RouteArea::Users)).unwrap_or_default()}
                                </p>
                            }
                        }
                    >
                        <Outlet/>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Frame around every dashboard route: header, content, footer.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    install_session_gate(auth, RouteArea::Dashboard, navigate.clone());

    let on_logout = move |_| log_out(auth, navigate.clone());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <Brand/>
                <nav class="dashboard-page__nav">
                    <a href=ARTICLES_PATH>"Home"</a>
                    <button
                        class="btn dashboard-page__dark-toggle"
                        on:click=move |_| {
                            let next = crate::util::dark_mode::toggle(ui.get().dark_mode);
                            ui.update(|u| u.dark_mode = next);
                        }
                        title="Toggle dark mode"
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>
                    <button class="btn dashboard-page__logout" on:click=on_logout>
                        "Log Out"
                    </button>
                </nav>
            </header>
            <main class="dashboard-page__content">
                <Show
                    when=move || auth.with(|a| gate_placeholder(a, RouteArea::Dashboard).is_none())
                    fallback=move || {
                        view! {
                            <p class="dashboard-page__status">
                                {move || auth.with(|a| gate_placeholder(a, RouteArea::Dashboard)).unwrap_or_default()}
                            </p>
                        }
                    }
                >
                    <Outlet/>
                </Show>
            </main>
            <footer class="dashboard-page__footer">
                <a href="https://github.com/louispallett/odin-blog-api">"© 2024 LowPal, The Odin Project"</a>
            </footer>
        </div>
    }
}
