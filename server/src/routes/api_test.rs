use std::net::SocketAddr;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::routing::get;

use crate::routes::api_routes;
use crate::state::AppState;

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Backend stand-in that reports what it received.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> impl axum::response::IntoResponse {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    (
        StatusCode::CREATED,
        [("x-backend", "echo")],
        Json(serde_json::json!({
            "method": method.as_str(),
            "uri": uri.to_string(),
            "authorization": header("authorization"),
            "proxy_authorization": header("proxy-authorization"),
            "body": String::from_utf8_lossy(&body),
        })),
    )
}

async fn relay_in_front_of(upstream: Router, timeout: Duration) -> SocketAddr {
    let backend = serve(upstream).await;
    let state = AppState::new(&format!("http://{backend}"), timeout).unwrap();
    serve(api_routes(state)).await
}

#[tokio::test]
async fn relay_forwards_request_and_returns_backend_response() {
    let relay = relay_in_front_of(Router::new().fallback(echo), Duration::from_secs(5)).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{relay}/api/articles/66a1/update?draft=1"))
        .header("Authorization", "token-abc")
        .header("Proxy-Authorization", "Basic c2VjcmV0")
        .body("title=Thames")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    assert_eq!(resp.headers()["x-backend"], "echo");
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["method"], "POST");
    assert_eq!(body["uri"], "/api/articles/66a1/update?draft=1");
    assert_eq!(body["authorization"], "token-abc");
    assert!(body["proxy_authorization"].is_null());
    assert_eq!(body["body"], "title=Thames");
}

#[tokio::test]
async fn relay_passes_backend_error_status_through() {
    let upstream = Router::new().route("/api/writers/verify", get(|| async { (StatusCode::UNAUTHORIZED, "no") }));
    let relay = relay_in_front_of(upstream, Duration::from_secs(5)).await;

    let resp = reqwest::get(format!("http://{relay}/api/writers/verify")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);
    assert_eq!(resp.text().await.unwrap(), "no");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    // Bind then drop to get a port with nothing listening.
    let closed = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let state = AppState::new(&format!("http://{closed}"), Duration::from_secs(5)).unwrap();
    let relay = serve(api_routes(state)).await;

    let resp = reqwest::get(format!("http://{relay}/api/articles/writers_articles")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_GATEWAY);
    assert!(resp.text().await.unwrap().starts_with("backend unavailable"));
}

#[tokio::test]
async fn slow_backend_is_gateway_timeout() {
    let upstream = Router::new().fallback(|| async {
        tokio::time::sleep(Duration::from_secs(2)).await;
        "late"
    });
    let relay = relay_in_front_of(upstream, Duration::from_millis(200)).await;

    let resp = reqwest::get(format!("http://{relay}/api/articles/1")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn healthz_is_ok() {
    let state = AppState::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
    let relay = serve(api_routes(state)).await;

    let resp = reqwest::get(format!("http://{relay}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}
