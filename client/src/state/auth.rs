//! Session state for the current browser writer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by `App`. Layout gates read it to
//! decide redirects and placeholders; the startup token check, sign-in, and
//! log-out write it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Outcome of checking the stored token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Verification has not answered yet.
    #[default]
    Checking,
    Authenticated,
    Anonymous,
}

/// Authentication state shared across routes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: SessionStatus,
}

