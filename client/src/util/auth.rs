//! Shared session-gate helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both layout shells apply the same redirect rules: the dashboard is closed
//! to anonymous writers and the sign-in/sign-up screens are skipped once a
//! session is live. Nothing redirects while verification is still running.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, SessionStatus};

pub const SIGN_IN_PATH: &str = "/users/sign-in";
pub const ARTICLES_PATH: &str = "/dashboard/articles";

/// Which shell a route lives under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteArea {
    Dashboard,
    Users,
}

/// Where to send the writer, if anywhere, for the current session status.
pub fn gate_redirect(state: &AuthState, area: RouteArea) -> Option<&'static str> {
    match (state.status, area) {
        (SessionStatus::Anonymous, RouteArea::Dashboard) => Some(SIGN_IN_PATH),
        (SessionStatus::Authenticated, RouteArea::Users) => Some(ARTICLES_PATH),
        _ => None,
    }
}

/// Text shown in place of an area's routes while they are withheld, or
/// `None` once they may render.
pub fn gate_placeholder(state: &AuthState, area: RouteArea) -> Option<&'static str> {
    match (state.status, area) {
        (SessionStatus::Checking, _) => Some("Checking session..."),
        (SessionStatus::Anonymous, RouteArea::Dashboard) => Some("Redirecting to sign in..."),
        (SessionStatus::Authenticated, RouteArea::Users) => Some("Redirecting to your articles..."),
        _ => None,
    }
}

/// Redirect whenever the session status disagrees with the route area.
pub fn install_session_gate<F>(auth: RwSignal<AuthState>, area: RouteArea, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if let Some(target) = gate_redirect(&state, area) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Drop the session and return to the sign-in screen.
pub fn log_out<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    super::session::clear_token();
    auth.set(AuthState { status: SessionStatus::Anonymous });
    navigate(SIGN_IN_PATH, NavigateOptions::default());
}
