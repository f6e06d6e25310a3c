// Fake entries backend served over real HTTP on an ephemeral port.
//
// Responsibilities
// - Serve /add, /all and /whoami the way the real backend does.
// - Hand out a session cookie from /whoami and attribute entries to it.
// - Record request bodies, content types and cookies for assertions.
// - Let tests force a status or a raw body per endpoint.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "uid";

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub path: &'static str,
    pub session: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug)]
struct Inner {
    entries: Vec<Value>,
    seen: Vec<SeenRequest>,
    add_status: StatusCode,
    all_status: StatusCode,
    whoami_status: StatusCode,
    all_raw_body: Option<String>,
}

#[derive(Clone)]
pub struct FakeBackend {
    inner: Arc<Mutex<Inner>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: Vec::new(),
                seen: Vec::new(),
                add_status: StatusCode::CREATED,
                all_status: StatusCode::OK,
                whoami_status: StatusCode::OK,
                all_raw_body: None,
            })),
        }
    }

    pub async fn seed(&self, entry: Value) {
        self.inner.lock().await.entries.push(entry);
    }

    pub async fn set_add_status(&self, status: StatusCode) {
        self.inner.lock().await.add_status = status;
    }

    pub async fn set_all_status(&self, status: StatusCode) {
        self.inner.lock().await.all_status = status;
    }

    pub async fn set_whoami_status(&self, status: StatusCode) {
        self.inner.lock().await.whoami_status = status;
    }

    pub async fn set_all_raw_body(&self, body: impl Into<String>) {
        self.inner.lock().await.all_raw_body = Some(body.into());
    }

    pub async fn seen(&self) -> Vec<SeenRequest> {
        self.inner.lock().await.seen.clone()
    }

    pub async fn seen_on(&self, path: &str) -> Vec<SeenRequest> {
        self.seen()
            .await
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/add", post(add))
            .route("/all", get(all))
            .route("/whoami", get(whoami))
            .with_state(self.clone())
    }

    /// Binds to 127.0.0.1 on a free port and returns the origin to point the client at.
    pub async fn spawn(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = self.router();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }
}

fn session(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}

fn content_type(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

async fn add(State(backend): State<FakeBackend>, headers: HeaderMap, body: String) -> StatusCode {
    let body: Option<Value> = serde_json::from_str(&body).ok();
    let session = session(&headers);
    let mut inner = backend.inner.lock().await;
    inner.seen.push(SeenRequest {
        path: "/add",
        session: session.clone(),
        content_type: content_type(&headers),
        body: body.clone(),
    });
    if !inner.add_status.is_success() {
        return inner.add_status;
    }
    let text = body
        .as_ref()
        .and_then(|body| body.get("text"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    inner.entries.push(json!({
        "text": text,
        "createdAt": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "userId": session,
    }));
    inner.add_status
}

async fn all(State(backend): State<FakeBackend>, headers: HeaderMap) -> Response {
    let mut inner = backend.inner.lock().await;
    inner.seen.push(SeenRequest {
        path: "/all",
        session: session(&headers),
        content_type: None,
        body: None,
    });
    if !inner.all_status.is_success() {
        return inner.all_status.into_response();
    }
    if let Some(raw) = &inner.all_raw_body {
        return ([(header::CONTENT_TYPE, "application/json")], raw.clone()).into_response();
    }
    Json(Value::Array(inner.entries.clone())).into_response()
}

async fn whoami(State(backend): State<FakeBackend>, headers: HeaderMap) -> Response {
    let existing = session(&headers);
    let mut inner = backend.inner.lock().await;
    inner.seen.push(SeenRequest {
        path: "/whoami",
        session: existing.clone(),
        content_type: None,
        body: None,
    });
    if !inner.whoami_status.is_success() {
        return inner.whoami_status.into_response();
    }
    match existing {
        Some(user_id) => Json(json!({ "userId": user_id })).into_response(),
        None => {
            let user_id = Uuid::now_v7().to_string();
            let cookie = format!("{SESSION_COOKIE}={user_id}; Path=/; HttpOnly");
            (
                [(header::SET_COOKIE, cookie)],
                Json(json!({ "userId": user_id })),
            )
                .into_response()
        }
    }
}
