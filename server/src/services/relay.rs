//! Relay of `/api/*` requests to the articles backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle calls same-origin `/api/...` paths. This service
//! replays each request against `API_BASE_URL` with the same method, path,
//! query, body, and end-to-end headers, then hands the backend's status,
//! end-to-end headers, and body back unchanged.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become [`RelayError`]; backend error statuses are not
//! errors here and are relayed as-is. Nothing is retried.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::header::{CONTENT_LENGTH, HOST};
use axum::http::{HeaderMap, HeaderName, StatusCode, Uri, header};
use axum::response::Response;

/// Largest request body accepted for relaying (banner uploads included).
pub const MAX_REQUEST_BYTES: usize = 20 * 1024 * 1024;

/// Headers scoped to a single connection (RFC 9110 §7.6.1).
const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("could not read request body: {0}")]
    RequestBody(String),
    #[error("backend did not respond in time")]
    Timeout,
    #[error("backend unavailable: {0}")]
    Upstream(String),
}

impl RelayError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Upstream(err.to_string()) }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::RequestBody(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Backend URL for an incoming request URI: origin + path + query.
pub fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{base}{path_and_query}")
}

/// Copy `headers` minus hop-by-hop ones, including any named by `Connection`.
pub fn end_to_end_headers(headers: &HeaderMap) -> HeaderMap {
    let listed: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|token| token.trim().to_ascii_lowercase())
        .filter(|token| !token.is_empty())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if HOP_BY_HOP.contains(name) || listed.iter().any(|l| l == name.as_str()) {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Headers sent to the backend. `Host` and `Content-Length` are set by the client.
pub fn outbound_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = end_to_end_headers(headers);
    out.remove(HOST);
    out.remove(CONTENT_LENGTH);
    out
}

/// Headers returned to the browser. `Content-Length` follows the relayed body.
pub fn inbound_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = end_to_end_headers(headers);
    out.remove(CONTENT_LENGTH);
    out
}

/// Replay `req` against the backend at `base` and return its response.
///
/// # Errors
///
/// `RequestBody` when the incoming body cannot be read, `Timeout` when the
/// client timeout elapses, `Upstream` for any other transport failure.
pub async fn forward(http: &reqwest::Client, base: &str, req: Request) -> Result<Response, RelayError> {
    let (parts, body) = req.into_parts();
    let url = upstream_url(base, &parts.uri);
    let body = to_bytes(body, MAX_REQUEST_BYTES)
        .await
        .map_err(|e| RelayError::RequestBody(e.to_string()))?;

    let upstream = http
        .request(parts.method.clone(), &url)
        .headers(outbound_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(RelayError::from_reqwest)?;

    let status = upstream.status();
    let headers = inbound_headers(upstream.headers());
    let bytes = upstream.bytes().await.map_err(RelayError::from_reqwest)?;
    tracing::debug!(method = %parts.method, %url, status = status.as_u16(), bytes = bytes.len(), "relayed");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
