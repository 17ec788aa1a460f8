//! Axum route handlers for the Recommendation and Course APIs.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::CourseDetails;
use crate::errors::AppError;
use crate::recommendation::ranker::{RecommendationQuery, ScoredCourse};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub topic: Option<String>,
    pub skill_level: Option<String>,
    pub top_n: Option<i64>,
    #[serde(default)]
    pub personalized: bool,
    pub user_goals: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub courses: Vec<ScoredCourse>,
    pub total: usize,
    pub personalized: bool,
}

impl RecommendRequest {
    pub fn into_query(self, default_top_n: i64) -> RecommendationQuery {
        RecommendationQuery {
            topic: non_empty(self.topic),
            skill_level: non_empty(self.skill_level),
            top_n: self.top_n.unwrap_or(default_top_n),
            personalized: self.personalized,
            user_goals: non_empty(self.user_goals),
        }
    }
}

/// Form fields arrive as empty strings when left blank; treat those as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Ranks catalog courses for a topic / skill level. Never fails on AI problems:
/// personalization silently degrades to deterministic ranking.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Json<RecommendResponse> {
    let query = request.into_query(state.config.default_top_n);
    let personalized = state.recommender.will_personalize(&query);
    let courses = state.recommender.recommend(&query).await;

    Json(RecommendResponse {
        total: courses.len(),
        courses,
        personalized,
    })
}

/// GET /api/v1/courses/:id
pub async fn handle_get_course(
    State(state): State<AppState>,
    Path(course_id): Path<u32>,
) -> Result<Json<CourseDetails>, AppError> {
    state
        .catalog
        .get(course_id)
        .map(|course| Json(CourseDetails::from(course)))
        .ok_or_else(|| AppError::NotFound(format!("Course {course_id} not found")))
}
