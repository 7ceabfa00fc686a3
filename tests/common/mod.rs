//! In-process restaurants backend used by the integration tests.
//!
//! Mirrors the REST surface the client talks to: `GET/POST/PUT(?id=) /restaurants`
//! and `PUT/DELETE /restaurants/:id`. Ids are handed out as JSON integers.

#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::{Method, StatusCode, Uri};
use axum::routing::{get, put};
use axum::{Json, Router};
use restaurant_desk::domain::restaurant::scalar_to_string;
use serde_json::{json, Value as JsonValue};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Reply = (StatusCode, Json<JsonValue>);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplyShape {
    /// The record itself.
    #[default]
    Bare,
    /// `{ "success": true, "data": record }`
    Wrapped,
    /// `{ "message": "..." }` without the record.
    Ack,
}

#[derive(Default)]
struct BackendState {
    records: Vec<JsonValue>,
    next_id: u64,
    requests: Vec<String>,
    failing: bool,
    create_shape: ReplyShape,
    update_shape: ReplyShape,
}

#[derive(Clone, Default)]
pub struct Backend {
    inner: Arc<Mutex<BackendState>>,
}

impl Backend {
    pub fn seeded(rows: &[(&str, &str, &str)]) -> Self {
        let backend = Backend::default();
        {
            let mut st = backend.inner.lock().unwrap();
            for (name, address, contact) in rows {
                st.next_id += 1;
                let id = st.next_id;
                st.records.push(json!({
                    "id": id, "name": name, "address": address, "contact": contact
                }));
            }
        }
        backend
    }

    pub fn requests(&self) -> Vec<String> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn records(&self) -> Vec<JsonValue> {
        self.inner.lock().unwrap().records.clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().unwrap().failing = failing;
    }

    pub fn set_create_shape(&self, shape: ReplyShape) {
        self.inner.lock().unwrap().create_shape = shape;
    }

    pub fn set_update_shape(&self, shape: ReplyShape) {
        self.inner.lock().unwrap().update_shape = shape;
    }

    /// Serves on an ephemeral port and returns the base URL.
    pub async fn spawn(&self) -> String {
        let router = Router::new()
            .route("/restaurants", get(list).post(create).put(update_by_query))
            .route("/restaurants/:id", put(update_by_path).delete(remove))
            .with_state(self.clone());

        // Bind to an ephemeral port to avoid conflicts between tests.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://127.0.0.1:{}", port)
    }

    /// Logs the request; returns an error reply when the backend is failing.
    fn enter(&self, method: &Method, uri: &Uri) -> Result<std::sync::MutexGuard<'_, BackendState>, Reply> {
        let mut st = self.inner.lock().unwrap();
        st.requests.push(format!("{} {}", method, uri));
        if st.failing {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "backend unavailable" })),
            ));
        }
        Ok(st)
    }
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn shaped(shape: ReplyShape, record: JsonValue, message: &str) -> JsonValue {
    match shape {
        ReplyShape::Bare => record,
        ReplyShape::Wrapped => json!({ "success": true, "data": record }),
        ReplyShape::Ack => json!({ "message": message }),
    }
}

fn not_found(id: &str) -> Reply {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("restaurant {} not found", id) })),
    )
}

async fn list(State(backend): State<Backend>, method: Method, uri: Uri) -> Reply {
    let st = match backend.enter(&method, &uri) {
        Ok(st) => st,
        Err(reply) => return reply,
    };
    (StatusCode::OK, Json(JsonValue::Array(st.records.clone())))
}

async fn create(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    Json(body): Json<JsonValue>,
) -> Reply {
    let mut st = match backend.enter(&method, &uri) {
        Ok(st) => st,
        Err(reply) => return reply,
    };
    st.next_id += 1;
    let mut record = body;
    record["id"] = json!(st.next_id);
    st.records.push(record.clone());
    let shape = st.create_shape;
    (StatusCode::CREATED, Json(shaped(shape, record, "Restaurant created")))
}

fn apply_update(backend: &Backend, method: &Method, uri: &Uri, id: &str, body: JsonValue) -> Reply {
    let mut st = match backend.enter(method, uri) {
        Ok(st) => st,
        Err(reply) => return reply,
    };
    let shape = st.update_shape;
    let Some(record) = st
        .records
        .iter_mut()
        .find(|r| scalar_to_string(&r["id"]).as_deref() == Some(id))
    else {
        return not_found(id);
    };
    for field in ["name", "address", "contact"] {
        if let Some(v) = body.get(field) {
            record[field] = v.clone();
        }
    }
    let record = record.clone();
    (StatusCode::OK, Json(shaped(shape, record, "Restaurant updated")))
}

async fn update_by_query(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<JsonValue>,
) -> Reply {
    match params.get("id") {
        Some(id) => apply_update(&backend, &method, &uri, id, body),
        None => (StatusCode::BAD_REQUEST, Json(json!({ "error": "missing id" }))),
    }
}

async fn update_by_path(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    Path(id): Path<String>,
    Json(body): Json<JsonValue>,
) -> Reply {
    apply_update(&backend, &method, &uri, &id, body)
}

async fn remove(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    Path(id): Path<String>,
) -> Reply {
    let mut st = match backend.enter(&method, &uri) {
        Ok(st) => st,
        Err(reply) => return reply,
    };
    let before = st.records.len();
    st.records
        .retain(|r| scalar_to_string(&r["id"]).as_deref() != Some(id.as_str()));
    if st.records.len() == before {
        return not_found(&id);
    }
    (StatusCode::OK, Json(json!({ "message": "Restaurant deleted" })))
}
