#![allow(dead_code)]

use axum::http::{StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use url::Url;

/// Observed traffic on the stub `/shorten` endpoint, shared with test
/// assertions.
#[derive(Clone, Default)]
pub struct StubState {
    hits: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl StubState {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn bodies(&self) -> Vec<serde_json::Value> {
        self.bodies.lock().unwrap().clone()
    }
}

/// Spawns an in-process stub shortener on an ephemeral port.
///
/// Every `POST /shorten` is recorded and answered with `status` and the
/// given raw body. Returns the server's base URL plus the recorded state.
pub async fn spawn_stub(status: StatusCode, body: &str) -> (Url, StubState) {
    let state = StubState::default();
    let handler_state = state.clone();
    let body = body.to_string();

    let app = Router::new().route(
        "/shorten",
        post(move |Json(request): Json<serde_json::Value>| {
            let state = handler_state.clone();
            let body = body.clone();
            async move {
                state.hits.fetch_add(1, Ordering::SeqCst);
                state.bodies.lock().unwrap().push(request);
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let base = Url::parse(&format!("http://{addr}/")).unwrap();
    (base, state)
}

/// Stub that answers success with `{"short_url": short_url}`.
pub async fn spawn_success_stub(short_url: &str) -> (Url, StubState) {
    let body = serde_json::json!({ "short_url": short_url }).to_string();
    spawn_stub(StatusCode::OK, &body).await
}

/// Base URL pointing at a port with no listener behind it, so every request
/// fails at the transport level.
pub async fn unreachable_base() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    Url::parse(&format!("http://{addr}/")).unwrap()
}
