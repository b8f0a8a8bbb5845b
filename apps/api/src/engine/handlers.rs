//! Axum route handlers for sessions, questions and recommendations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::governor::{self, Phase, CAP_WARNING, FAQ_QUESTIONS, QUESTION_CAP};
use crate::engine::query::{ask, recommend, RecommendationOutcome, Reply};
use crate::engine::recommendation::{PlaceKind, PlaceQuery};
use crate::errors::AppError;
use crate::models::session::{ConversationExchange, SessionState};
use crate::sessions::SessionHandle;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub location: String,
    pub kind: PlaceKind,
    pub count: Option<u32>,
}

/// What the view layer needs to render the interactive panel.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub phase: Phase,
    pub question_count: u32,
    pub cap: u32,
    pub remaining: u32,
    pub input_enabled: bool,
    pub draft: String,
    pub history: Vec<ConversationExchange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl SessionView {
    pub fn new(session_id: Uuid, state: &SessionState) -> Self {
        let phase = governor::phase(state);
        Self {
            session_id,
            phase,
            question_count: state.question_count,
            cap: QUESTION_CAP,
            remaining: governor::remaining(state),
            input_enabled: phase != Phase::Capped,
            draft: state.draft.clone(),
            history: state.history.clone(),
            notice: (phase == Phase::Capped).then(|| CAP_WARNING.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub reply: Reply,
    pub session: SessionView,
}

#[derive(Debug, Serialize)]
pub struct FaqResponse {
    pub questions: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

async fn session_handle(state: &AppState, id: Uuid) -> Result<SessionHandle, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionView>) {
    let (id, handle) = state.sessions.create().await;
    let session = handle.lock().await;
    (StatusCode::CREATED, Json(SessionView::new(id, &session)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let handle = session_handle(&state, id).await?;
    let session = handle.lock().await;
    Ok(Json(SessionView::new(id, &session)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

/// PUT /api/v1/sessions/:id/draft
pub async fn handle_update_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<DraftRequest>,
) -> Result<Json<SessionView>, AppError> {
    let handle = session_handle(&state, id).await?;
    let mut session = handle.lock().await;
    *session = governor::update_draft(session.clone(), &req.text);
    Ok(Json(SessionView::new(id, &session)))
}

/// POST /api/v1/sessions/:id/quick-picks/:index
///
/// Fills the draft with a FAQ question. Does not submit and does not count.
pub async fn handle_quick_pick(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<SessionView>, AppError> {
    let question = governor::faq_question(index).ok_or_else(|| {
        AppError::Validation(format!(
            "quick-pick index must be below {}",
            FAQ_QUESTIONS.len()
        ))
    })?;
    let handle = session_handle(&state, id).await?;
    let mut session = handle.lock().await;
    *session = governor::quick_pick(session.clone(), question);
    Ok(Json(SessionView::new(id, &session)))
}

/// POST /api/v1/sessions/:id/questions
///
/// The session lock is held across generation: one call in flight per session. The question
/// is spent on the locked state before generation, so a dropped request still counts.
pub async fn handle_submit_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<QuestionRequest>,
) -> Result<Json<QuestionResponse>, AppError> {
    let records = state.records.get().await?;
    let handle = session_handle(&state, id).await?;
    let mut session = handle.lock().await;

    let reply = ask(
        &mut session,
        &req.question,
        &records,
        state.generator.as_ref(),
    )
    .await;

    Ok(Json(QuestionResponse {
        reply,
        session: SessionView::new(id, &session),
    }))
}

/// POST /api/v1/sessions/:id/reset
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let handle = session_handle(&state, id).await?;
    let mut session = handle.lock().await;
    *session = governor::reset(session.clone());
    Ok(Json(SessionView::new(id, &session)))
}

/// GET /api/v1/faq
pub async fn handle_list_faq() -> Json<FaqResponse> {
    Json(FaqResponse {
        questions: FAQ_QUESTIONS.to_vec(),
    })
}

/// POST /api/v1/recommendations
///
/// Separate entry point from the question panel; does not consume the question cap.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendationOutcome>, AppError> {
    let query = PlaceQuery::new(&req.location, req.kind, req.count)
        .ok_or_else(|| AppError::Validation("location cannot be empty".to_string()))?;

    Ok(Json(recommend(&query, state.generator.as_ref()).await))
}
