pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendation::handlers as recommendation;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation API
        .route(
            "/api/v1/recommendations",
            post(recommendation::handle_recommend),
        )
        .route(
            "/api/v1/courses/:id",
            get(recommendation::handle_get_course),
        )
        // Roadmap API
        .route("/api/v1/roadmap", post(roadmap::handle_roadmap))
        .route(
            "/api/v1/learning-plan",
            post(roadmap::handle_learning_plan),
        )
        .with_state(state)
}
