//! Mock trading backend for integration tests.
//!
//! Serves the REST surface the dashboard consumes with:
//! - Per-endpoint canned JSON responses
//! - Request recording (method, path, body) in arrival order
//! - A switch that turns every endpoint into a 500

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// One request as the backend saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Value,
}

#[derive(Clone)]
struct BackendState {
    balance: Arc<Mutex<Value>>,
    orders: Arc<Mutex<Value>>,
    validate: Arc<Mutex<Value>>,
    connect: Arc<Mutex<Value>>,
    list: Arc<Mutex<Value>>,
    settings: Arc<Mutex<Value>>,
    unavailable: Arc<AtomicBool>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl BackendState {
    fn new() -> Self {
        Self {
            balance: Arc::new(Mutex::new(json!({"total_usd": 0}))),
            orders: Arc::new(Mutex::new(json!([]))),
            validate: Arc::new(Mutex::new(json!({"status": "success"}))),
            connect: Arc::new(Mutex::new(json!({"status": "success"}))),
            list: Arc::new(Mutex::new(json!([]))),
            settings: Arc::new(Mutex::new(json!({
                "secret": "",
                "max_lag": "",
                "bot_uuid": "",
                "currency_type": "base"
            }))),
            unavailable: Arc::new(AtomicBool::new(false)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    async fn record(&self, method: &str, path: &str, body: Value) {
        self.requests.lock().await.push(RecordedRequest {
            method: method.to_string(),
            path: path.to_string(),
            body,
        });
    }

    fn down_response(&self) -> Option<Response> {
        if self.unavailable.load(Ordering::Relaxed) {
            Some(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"detail": "backend unavailable"})),
                )
                    .into_response(),
            )
        } else {
            None
        }
    }
}

/// A mock trading backend bound to an ephemeral port.
pub struct MockBackend {
    addr: SocketAddr,
    state: BackendState,
    handle: JoinHandle<()>,
}

impl MockBackend {
    /// Start the backend on an available port.
    pub async fn start() -> Self {
        let state = BackendState::new();

        let app = Router::new()
            .route("/api/account/balance", get(get_balance))
            .route("/api/trading/active-orders", get(get_orders))
            .route("/api/exchange/validate", post(post_validate))
            .route("/api/exchange/connect", post(post_connect))
            .route("/api/exchange/list", get(get_list))
            .route("/api/settings", get(get_settings).post(post_settings))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// The backend's base URL.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn set_balance(&self, balance: Value) {
        *self.state.balance.lock().await = balance;
    }

    pub async fn set_orders(&self, orders: Value) {
        *self.state.orders.lock().await = orders;
    }

    pub async fn set_validate_response(&self, response: Value) {
        *self.state.validate.lock().await = response;
    }

    pub async fn set_connect_response(&self, response: Value) {
        *self.state.connect.lock().await = response;
    }

    pub async fn set_list(&self, list: Value) {
        *self.state.list.lock().await = list;
    }

    pub async fn set_settings(&self, settings: Value) {
        *self.state.settings.lock().await = settings;
    }

    /// Make every endpoint answer 500 until flipped back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.unavailable.store(unavailable, Ordering::Relaxed);
    }

    /// All requests received so far, in arrival order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().await.clone()
    }

    /// Shut the server down.
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

async fn get_balance(State(state): State<BackendState>) -> Response {
    state.record("GET", "/api/account/balance", Value::Null).await;
    if let Some(down) = state.down_response() {
        return down;
    }
    Json(state.balance.lock().await.clone()).into_response()
}

async fn get_orders(State(state): State<BackendState>) -> Response {
    state
        .record("GET", "/api/trading/active-orders", Value::Null)
        .await;
    if let Some(down) = state.down_response() {
        return down;
    }
    Json(state.orders.lock().await.clone()).into_response()
}

async fn post_validate(State(state): State<BackendState>, Json(body): Json<Value>) -> Response {
    state.record("POST", "/api/exchange/validate", body).await;
    if let Some(down) = state.down_response() {
        return down;
    }
    Json(state.validate.lock().await.clone()).into_response()
}

async fn post_connect(State(state): State<BackendState>, Json(body): Json<Value>) -> Response {
    state.record("POST", "/api/exchange/connect", body).await;
    if let Some(down) = state.down_response() {
        return down;
    }
    Json(state.connect.lock().await.clone()).into_response()
}

async fn get_list(State(state): State<BackendState>) -> Response {
    state.record("GET", "/api/exchange/list", Value::Null).await;
    if let Some(down) = state.down_response() {
        return down;
    }
    Json(state.list.lock().await.clone()).into_response()
}

async fn get_settings(State(state): State<BackendState>) -> Response {
    state.record("GET", "/api/settings", Value::Null).await;
    if let Some(down) = state.down_response() {
        return down;
    }
    Json(state.settings.lock().await.clone()).into_response()
}

/// Stores and echoes the posted settings, like the real backend.
async fn post_settings(State(state): State<BackendState>, Json(body): Json<Value>) -> Response {
    state.record("POST", "/api/settings", body.clone()).await;
    if let Some(down) = state.down_response() {
        return down;
    }
    *state.settings.lock().await = body.clone();
    Json(body).into_response()
}
