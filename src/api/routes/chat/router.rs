//! Router for the chat API

use std::sync::{Arc, RwLock};

use anyhow::anyhow;
use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use uuid::Uuid;

use super::public;
use crate::api::state::{AppState, SessionEntry};
use crate::chat::ChatSession;

type SharedState = Arc<RwLock<AppState>>;

/// Run one chat submission and reply with the bot's answer
async fn chat_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    // Reject before touching any state so a bad request leaves no session
    // behind
    if payload.message.trim().is_empty() {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, "Message must not be empty").into_response());
    }

    let session_id = payload
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut shared_state = state
        .write()
        .map_err(|_| anyhow!("App state lock poisoned"))?;
    let AppState {
        sessions,
        tasks,
        config,
    } = &mut *shared_state;

    let entry = sessions
        .entry(session_id.clone())
        .or_insert_with(|| SessionEntry {
            session: ChatSession::new(&config.greeting),
            created_at: Utc::now(),
        });

    // The whole submission runs under the single write lock so the
    // transcript appends and the task mutation land together
    let reply = entry
        .session
        .send(&payload.message, tasks)
        .ok_or_else(|| anyhow!("Submission produced no reply"))?;

    Ok(axum::Json(public::ChatResponse { session_id, reply }).into_response())
}

/// Get a single chat session transcript by ID
async fn chat_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let shared_state = state
        .read()
        .map_err(|_| anyhow!("App state lock poisoned"))?;

    let Some(entry) = shared_state.sessions.get(&id) else {
        return Ok((
            StatusCode::NOT_FOUND,
            format!("Chat session {} not found", id),
        )
            .into_response());
    };

    Ok(axum::Json(public::ChatTranscriptResponse {
        transcript: entry.session.transcript().messages(),
    })
    .into_response())
}

/// Get a list of all chat sessions, newest first
async fn chat_list(
    State(state): State<SharedState>,
    Query(params): Query<public::ChatSessionsQuery>,
) -> Result<axum::Json<public::ChatSessionsResponse>, crate::api::public::ApiError> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(20).max(1);
    // Saturate so an absurd page number yields an empty page, not an
    // overflow panic
    let offset = (page - 1).saturating_mul(limit);

    let shared_state = state
        .read()
        .map_err(|_| anyhow!("App state lock poisoned"))?;

    let mut sessions = shared_state
        .sessions
        .iter()
        .map(|(id, entry)| public::ChatSessionSummary {
            id: id.clone(),
            created_at: entry.created_at,
            message_count: entry.session.transcript().len(),
        })
        .collect::<Vec<_>>();
    // Ids break creation-time ties so pagination stays stable
    sessions.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });

    let total_sessions = sessions.len();
    let total_pages = (total_sessions as f64 / limit as f64).ceil() as usize;
    let paged_sessions = sessions.into_iter().skip(offset).take(limit).collect();

    Ok(axum::Json(public::ChatSessionsResponse {
        sessions: paged_sessions,
        page,
        limit,
        total_sessions,
        total_pages,
    }))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(chat_handler))
        .route("/{id}", get(chat_session))
        .route("/sessions", get(chat_list))
}
