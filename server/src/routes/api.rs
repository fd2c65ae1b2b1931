//! `/api/*` relay handler.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use axum::extract::{Request, State};
use axum::response::{IntoResponse, Response};

use crate::services::relay::{self, RelayError};
use crate::state::AppState;

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, status = status.as_u16(), "relay failed");
        (status, self.to_string()).into_response()
    }
}

/// Forward any method on `/api/*` to the backend.
pub async fn relay(State(state): State<AppState>, req: Request) -> Result<Response, RelayError> {
    relay::forward(&state.http, &state.api_base_url, req).await
}
