use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/tabs/:key", post(handlers::open_tab))
        .route("/sub-tabs/:key", post(handlers::open_sub_tab))
        .route("/api/ui", get(handlers::get_ui))
        .route("/api/clock", get(handlers::get_clock))
        .route("/api/dashboard", post(handlers::student_dashboard))
        .route("/api/graduation", post(handlers::graduation_eligibility))
        .route("/api/students/:id/loans", get(handlers::student_loans))
        .route("/api/students/:id/grades", get(handlers::student_grades))
        .with_state(state)
}
