//! HTTP surface: a thin axum layer over the agent and the session store.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::agent::{ChatTurn, SessionStore, WeatherAgent};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<WeatherAgent>,
    pub sessions: Arc<SessionStore>,
}

/// Request body for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Sessions without an explicit id share the "default" history.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Response body for `POST /chat`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub tools_used: Vec<String>,
}

/// Build the router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat))
        .route("/chat/history/{session_id}", delete(clear_history))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Json<ChatResponse> {
    let session_id = req.session_id.as_deref().unwrap_or("default");
    info!(session_id, "chat request");

    state.sessions.append(session_id, ChatTurn::user(&req.message));
    let history = state.sessions.recent(session_id);

    let result = state.agent.get_response(&req.message, &history).await;

    state
        .sessions
        .append(session_id, ChatTurn::assistant(&result.response));

    Json(ChatResponse {
        response: result.response,
        tools_used: result.tools_used.iter().map(|t| t.to_string()).collect(),
    })
}

async fn clear_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<serde_json::Value> {
    info!(%session_id, "clearing session history");
    state.sessions.clear(&session_id);
    Json(serde_json::json!({ "status": "cleared" }))
}

async fn health() -> &'static str {
    "ok"
}
