//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::layout::{DashboardLayout, UsersLayout};
use crate::pages::{
    articles::ArticlesPage, new_article::NewArticlePage, sign_in::SignInPage, sign_up::SignUpPage,
    update_article::UpdateArticlePage,
};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::auth::ARTICLES_PATH;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts, starts the one-shot token check, and
/// sets up client-side routing. Layouts read the session status to gate
/// their routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    Effect::new(move || {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let status = crate::net::api::verify_session().await;
            log::info!("session check: {status:?}");
            auth.update(|a| a.status = status);
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/writers-dashboard.css"/>
        <Title text="Writers Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=ARTICLES_PATH/> }/>
                <ParentRoute path=StaticSegment("users") view=UsersLayout>
                    <Route path=StaticSegment("sign-in") view=SignInPage/>
                    <Route path=StaticSegment("sign-up") view=SignUpPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("articles") view=ArticlesPage/>
                    <Route path=StaticSegment("new") view=NewArticlePage/>
                    <Route path=(ParamSegment("id"), StaticSegment("update")) view=UpdateArticlePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
