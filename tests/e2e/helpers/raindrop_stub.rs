use axum::extract::{Path, RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

/// Canned reply for one stub endpoint.
#[derive(Clone)]
pub enum StubReply {
    /// 200 with `{"result": true, "items": ...}`.
    Items(Value),
    /// 200 with `{"result": false}` plus an optional `errorMessage`.
    Failure(Option<&'static str>),
    /// Arbitrary status; the body carries `errorMessage` when given.
    Status(u16, Option<&'static str>),
    /// 200 with the body returned verbatim.
    Raw(&'static str),
    /// Hold the request open until the caller gives up waiting.
    Stall,
}

#[derive(Default)]
struct StubState {
    collections: Option<StubReply>,
    raindrops: Option<StubReply>,
    collections_calls: usize,
    raindrop_calls: Vec<i64>,
    raindrop_queries: Vec<String>,
}

/// In-process stand-in for the Raindrop.io API, scripted per test.
#[derive(Clone)]
pub struct RaindropStub {
    state: Arc<Mutex<StubState>>,
    base_url: String,
}

impl RaindropStub {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(StubState::default()));

        let app = Router::new()
            .route("/collections", get(collections_handler))
            .route("/raindrops/:collection_id", get(raindrops_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub listener");
        let addr = listener.local_addr().expect("Failed to get stub addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            state,
            base_url: format!("http://{}", addr),
        }
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn with_collections(self, items: Value) -> Self {
        self.state.lock().collections = Some(StubReply::Items(items));
        self
    }

    pub fn with_collections_reply(self, reply: StubReply) -> Self {
        self.state.lock().collections = Some(reply);
        self
    }

    pub fn with_raindrops(self, items: Value) -> Self {
        self.state.lock().raindrops = Some(StubReply::Items(items));
        self
    }

    pub fn with_raindrops_reply(self, reply: StubReply) -> Self {
        self.state.lock().raindrops = Some(reply);
        self
    }

    pub fn collections_calls(&self) -> usize {
        self.state.lock().collections_calls
    }

    pub fn raindrop_calls(&self) -> Vec<i64> {
        self.state.lock().raindrop_calls.clone()
    }

    pub fn raindrop_queries(&self) -> Vec<String> {
        self.state.lock().raindrop_queries.clone()
    }
}

async fn collections_handler(State(state): State<Arc<Mutex<StubState>>>) -> Response {
    let reply = {
        let mut state = state.lock();
        state.collections_calls += 1;
        state.collections.clone()
    };
    render(reply).await
}

async fn raindrops_handler(
    State(state): State<Arc<Mutex<StubState>>>,
    Path(collection_id): Path<i64>,
    RawQuery(query): RawQuery,
) -> Response {
    let reply = {
        let mut state = state.lock();
        state.raindrop_calls.push(collection_id);
        state.raindrop_queries.push(query.unwrap_or_default());
        state.raindrops.clone()
    };
    render(reply).await
}

async fn render(reply: Option<StubReply>) -> Response {
    match reply {
        Some(StubReply::Items(items)) => {
            Json(json!({ "result": true, "items": items })).into_response()
        }
        Some(StubReply::Failure(message)) => {
            let mut body = json!({ "result": false });
            if let Some(message) = message {
                body["errorMessage"] = json!(message);
            }
            Json(body).into_response()
        }
        Some(StubReply::Status(code, message)) => {
            let status =
                StatusCode::from_u16(code).expect("stub configured with an invalid status code");
            let body = match message {
                Some(message) => json!({ "result": false, "errorMessage": message }),
                None => json!({ "result": false }),
            };
            (status, Json(body)).into_response()
        }
        Some(StubReply::Raw(body)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Some(StubReply::Stall) => {
            // Far longer than the app's request timeout; the test runtime
            // tears this task down on exit
            tokio::time::sleep(Duration::from_secs(60)).await;
            StatusCode::OK.into_response()
        }
        None => (StatusCode::NOT_FOUND, "no stub reply configured").into_response(),
    }
}
