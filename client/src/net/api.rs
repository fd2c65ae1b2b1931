//! REST API helpers for the articles backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser, where the session token lives.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; the error's `Display` text is
//! what pages show to the writer. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Article, ArticleDraft, SignInRequest, SignUpRequest};
use crate::state::auth::SessionStatus;

#[cfg(feature = "hydrate")]
use super::types::{ArticleResponse, CreateArticleResponse, SignInResponse, SignUpResponse, WriterArticlesResponse};

/// Banner image picked in the article form.
#[cfg(feature = "hydrate")]
pub type Banner = web_sys::File;

/// No file can be picked outside the browser.
#[cfg(not(feature = "hydrate"))]
pub type Banner = std::convert::Infallible;

/// Failure talking to the backend, phrased for the writer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{}", status_message(*.0))]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("{0}")]
    Rejected(String),
    #[error("You are signed out.")]
    SignedOut,
    #[error("not available on server")]
    Unavailable,
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

fn status_message(status: u16) -> String {
    format!("request failed with status {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_status_message(status: u16) -> String {
    format!("Sorry, a HTTP error has occured. Please try again later. Status: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn article_endpoint(id: &str) -> String {
    format!("/api/articles/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn article_action_endpoint(id: &str, action: &str) -> String {
    format!("/api/articles/{id}/{action}")
}

/// The verify endpoint treats anything below 400 as a live session.
#[cfg(any(test, feature = "hydrate"))]
fn session_status_for(status: u16) -> SessionStatus {
    if status < 400 { SessionStatus::Authenticated } else { SessionStatus::Anonymous }
}

#[cfg(feature = "hydrate")]
fn require_token() -> Result<String, ApiError> {
    crate::util::session::load_token().ok_or(ApiError::SignedOut)
}

#[cfg(feature = "hydrate")]
fn ensure_ok(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() { Ok(()) } else { Err(ApiError::Status(resp.status())) }
}

#[cfg(feature = "hydrate")]
fn article_form(draft: &ArticleDraft, banner: Option<&Banner>) -> Result<web_sys::FormData, ApiError> {
    let js_err = |_| ApiError::Network("could not build form data".to_owned());
    let form = web_sys::FormData::new().map_err(js_err)?;
    for (name, value) in draft.form_fields() {
        form.append_with_str(name, value).map_err(js_err)?;
    }
    if let Some(file) = banner {
        form.append_with_blob_and_filename("banner", file, &file.name())
            .map_err(js_err)?;
    }
    Ok(form)
}

/// Check the stored token against `GET /api/writers/verify`.
///
/// No token means `Anonymous` without a request. Transport failures are
/// treated as `Anonymous` too.
pub async fn verify_session() -> SessionStatus {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = crate::util::session::load_token() else {
            return SessionStatus::Anonymous;
        };
        match gloo_net::http::Request::get("/api/writers/verify")
            .header("Authorization", &token)
            .send()
            .await
        {
            Ok(resp) => session_status_for(resp.status()),
            Err(e) => {
                log::warn!("session verify failed: {e}");
                SessionStatus::Anonymous
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SessionStatus::Anonymous
    }
}

/// Exchange credentials for a session token via `POST /api/writers/sign-in`.
///
/// # Errors
///
/// Returns `Rejected` with the backend's message when no token is issued.
pub async fn sign_in(request: &SignInRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/writers/sign-in")
            .json(request)?
            .send()
            .await?;
        // Bad credentials come back as JSON with an `error` field, sometimes
        // with a 4xx status, so decode before checking the status.
        let body: SignInResponse = match resp.json().await {
            Ok(body) => body,
            Err(_) if !resp.ok() => return Err(ApiError::Status(resp.status())),
            Err(e) => return Err(e.into()),
        };
        match body.token.filter(|t| !t.trim().is_empty()) {
            Some(token) => Ok(token),
            None => Err(ApiError::Rejected(
                body.error.unwrap_or_else(|| "Sign in failed.".to_owned()),
            )),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Register a writer via `POST /api/writers/sign-up`. Returns the new id.
///
/// # Errors
///
/// Non-2xx statuses become a `Rejected` apology carrying the status; a 2xx
/// body without `id` becomes `Rejected` with the flattened validation errors.
pub async fn sign_up(request: &SignUpRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/writers/sign-up")
            .json(request)?
            .send()
            .await?;
        if !resp.ok() {
            return Err(ApiError::Rejected(sign_up_status_message(resp.status())));
        }
        let body: SignUpResponse = resp.json().await?;
        match body.id.clone() {
            Some(id) => Ok(id),
            None => Err(ApiError::Rejected(body.error_message())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch every article owned by the signed-in writer.
///
/// # Errors
///
/// `SignedOut` without a token; `Status` on a non-2xx response.
pub async fn fetch_writer_articles() -> Result<Vec<Article>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = require_token()?;
        let resp = gloo_net::http::Request::get("/api/articles/writers_articles")
            .header("Authorization", &token)
            .send()
            .await?;
        ensure_ok(&resp)?;
        let body: WriterArticlesResponse = resp.json().await?;
        Ok(body.articles)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single article by id.
///
/// # Errors
///
/// `Status` on a non-2xx response, `Decode` on a malformed body.
pub async fn fetch_article(id: &str) -> Result<Article, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&article_endpoint(id)).send().await?;
        ensure_ok(&resp)?;
        let body: ArticleResponse = resp.json().await?;
        Ok(body.article)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Create an article via multipart `POST /api/articles/create_article`.
/// Returns the created article (its id drives the redirect to the editor).
///
/// # Errors
///
/// `SignedOut` without a token; `Status`/`Decode` on a bad response.
pub async fn create_article(draft: &ArticleDraft, banner: Option<&Banner>) -> Result<Article, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = require_token()?;
        let form = article_form(draft, banner)?;
        let resp = gloo_net::http::Request::post("/api/articles/create_article")
            .header("Authorization", &token)
            .body(form)?
            .send()
            .await?;
        ensure_ok(&resp)?;
        let body: CreateArticleResponse = resp.json().await?;
        Ok(body.new_article)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (draft, banner);
        Err(ApiError::Unavailable)
    }
}

/// Save edits via multipart `POST /api/articles/{id}/update`.
///
/// # Errors
///
/// `SignedOut` without a token; `Status` on a non-2xx response.
pub async fn update_article(id: &str, draft: &ArticleDraft, banner: Option<&Banner>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = require_token()?;
        let form = article_form(draft, banner)?;
        let resp = gloo_net::http::Request::post(&article_action_endpoint(id, "update"))
            .header("Authorization", &token)
            .body(form)?
            .send()
            .await?;
        ensure_ok(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft, banner);
        Err(ApiError::Unavailable)
    }
}

/// Flip the article's published flag via `POST /api/articles/{id}/publish`.
///
/// # Errors
///
/// `SignedOut` without a token; `Status` on a non-2xx response.
pub async fn toggle_publish(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = require_token()?;
        let resp = gloo_net::http::Request::post(&article_action_endpoint(id, "publish"))
            .header("Authorization", &token)
            .send()
            .await?;
        ensure_ok(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Delete the article via `POST /api/articles/{id}/delete`.
///
/// # Errors
///
/// `SignedOut` without a token; `Status` on a non-2xx response.
pub async fn delete_article(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = require_token()?;
        let resp = gloo_net::http::Request::post(&article_action_endpoint(id, "delete"))
            .header("Authorization", &token)
            .send()
            .await?;
        ensure_ok(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
