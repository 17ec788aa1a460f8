//! Axum route handlers for the Roadmap and Learning Plan APIs.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::recommendation::handlers::non_empty;
use crate::recommendation::ranker::{RecommendationQuery, ScoredCourse};
use crate::roadmap::generator::RoadmapRequest;
use crate::roadmap::models::{Roadmap, RoadmapOutcome, RoadmapSource};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RoadmapBody {
    pub topic: String,
    pub skill_level: Option<String>,
    pub user_goals: Option<String>,
    #[serde(default)]
    pub use_ai: bool,
}

#[derive(Debug, Deserialize)]
pub struct LearningPlanBody {
    #[serde(flatten)]
    pub roadmap: RoadmapBody,
    pub top_n: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct LearningPlanResponse {
    pub roadmap: Roadmap,
    pub source: RoadmapSource,
    pub courses: Vec<ScoredCourse>,
}

impl RoadmapBody {
    fn into_request(self) -> Result<RoadmapRequest, AppError> {
        if self.topic.trim().is_empty() {
            return Err(AppError::Validation("topic cannot be empty".to_string()));
        }
        Ok(RoadmapRequest {
            topic: self.topic,
            skill_level: non_empty(self.skill_level),
            user_goals: non_empty(self.user_goals),
            use_ai: self.use_ai,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/roadmap
///
/// Returns an AI-drafted roadmap when requested and available, otherwise the
/// static template. AI failures are never surfaced as errors.
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(body): Json<RoadmapBody>,
) -> Result<Json<RoadmapOutcome>, AppError> {
    let request = body.into_request()?;
    Ok(Json(state.roadmaps.generate(&request).await))
}

/// POST /api/v1/learning-plan
///
/// Roadmap plus course recommendations for the same topic in one call.
/// AI personalization of the courses follows `use_ai`.
pub async fn handle_learning_plan(
    State(state): State<AppState>,
    Json(body): Json<LearningPlanBody>,
) -> Result<Json<LearningPlanResponse>, AppError> {
    let top_n = body.top_n.unwrap_or(state.config.default_top_n);
    let request = body.roadmap.into_request()?;

    let outcome = state.roadmaps.generate(&request).await;
    let courses = state
        .recommender
        .recommend(&RecommendationQuery {
            topic: Some(request.topic.clone()),
            skill_level: request.skill_level.clone(),
            top_n,
            personalized: request.use_ai,
            user_goals: request.user_goals.clone(),
        })
        .await;

    Ok(Json(LearningPlanResponse {
        roadmap: outcome.roadmap,
        source: outcome.source,
        courses,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_topic_is_rejected() {
        let body: RoadmapBody =
            serde_json::from_value(serde_json::json!({ "topic": "   " })).unwrap();
        assert!(matches!(body.into_request(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_blank_goals_become_absent() {
        let body: RoadmapBody = serde_json::from_value(serde_json::json!({
            "topic": "Rust",
            "user_goals": "",
            "use_ai": true
        }))
        .unwrap();
        let request = body.into_request().unwrap();
        assert!(request.user_goals.is_none());
        assert!(request.use_ai);
    }

    #[test]
    fn test_learning_plan_body_flattens_roadmap_fields() {
        let body: LearningPlanBody = serde_json::from_value(serde_json::json!({
            "topic": "Python",
            "skill_level": "beginner",
            "top_n": 3
        }))
        .unwrap();
        assert_eq!(body.top_n, Some(3));
        assert_eq!(body.roadmap.topic, "Python");
        assert!(!body.roadmap.use_ai);
    }
}
