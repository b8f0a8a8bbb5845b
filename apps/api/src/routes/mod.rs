pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::engine::handlers;
use crate::profile::handlers::handle_get_profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile card
        .route("/api/v1/profile", get(handle_get_profile))
        .route("/api/v1/faq", get(handlers::handle_list_faq))
        // Question panel
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_end_session),
        )
        .route(
            "/api/v1/sessions/:id/draft",
            put(handlers::handle_update_draft),
        )
        .route(
            "/api/v1/sessions/:id/quick-picks/:index",
            post(handlers::handle_quick_pick),
        )
        .route(
            "/api/v1/sessions/:id/questions",
            post(handlers::handle_submit_question),
        )
        .route(
            "/api/v1/sessions/:id/reset",
            post(handlers::handle_reset_session),
        )
        // Recommendations
        .route("/api/v1/recommendations", post(handlers::handle_recommend))
        .with_state(state)
}
