//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into the relay handler via the `State` extractor.
//! It holds one pooled HTTP client and the backend origin; both are cheap to
//! clone.

use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend origin without a trailing slash.
    pub api_base_url: Arc<str>,
}

impl AppState {
    /// Build state with a client whose whole-request timeout is `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, api_base_url: Arc::from(api_base_url) })
    }
}
