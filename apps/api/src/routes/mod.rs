pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::progression::handlers as progression;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/grades", get(skills::handle_list_grades))
        .route("/api/v1/skills", get(skills::handle_list_skills))
        .route(
            "/api/v1/requirements/:grade",
            get(skills::handle_get_requirements),
        )
        .route(
            "/api/v1/assessments/empty",
            get(skills::handle_empty_assessment),
        )
        // Progression API
        .route(
            "/api/v1/progression/analyze",
            post(progression::handle_analyze),
        )
        .route(
            "/api/v1/progression/learning-path",
            post(progression::handle_learning_path),
        )
        .route(
            "/api/v1/team/readiness",
            post(progression::handle_team_readiness),
        )
        .with_state(state)
}
