use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/charts", get(handlers::get_charts))
        .route("/api/overall", post(handlers::calculate_overall))
        .route("/api/overall/reset", post(handlers::reset_overall))
        .route("/api/subjects", post(handlers::add_subject))
        .route("/api/subjects/reset", post(handlers::reset_subjects))
        .route("/api/subjects/:id", delete(handlers::delete_subject))
        .route("/api/theme/toggle", post(handlers::toggle_theme))
        .with_state(state)
}
