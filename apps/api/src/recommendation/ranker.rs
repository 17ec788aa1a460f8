//! Recommendation Ranker — filters the catalog, optionally asks the AI scorer,
//! blends everything into one composite score and returns the top N.
//!
//! Flow: keyword filter → difficulty filter → (opt-in) AI relevance →
//!       composite score with jitter → sort descending → truncate.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{Catalog, Course};
use crate::recommendation::difficulty::difficulty_matches;
use crate::recommendation::jitter::{JitterSource, ThreadRngJitter};
use crate::recommendation::keyword::keyword_score;
use crate::recommendation::relevance::{RelevanceScorer, UNSCORED_RELEVANCE};

pub const RATING_WEIGHT: f64 = 0.4;
pub const KEYWORD_WEIGHT: f64 = 0.3;
/// Stays in the formula even when AI scoring is skipped; it is not redistributed.
pub const AI_WEIGHT: f64 = 0.2;
pub const JITTER_WEIGHT: f64 = 0.1;

/// Inputs for one recommendation request. Empty strings should already be
/// mapped to `None` by the caller-facing layer.
#[derive(Debug, Clone, Default)]
pub struct RecommendationQuery {
    pub topic: Option<String>,
    pub skill_level: Option<String>,
    pub top_n: i64,
    pub personalized: bool,
    pub user_goals: Option<String>,
}

/// A course plus the per-request scores. Built fresh for every request.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCourse {
    #[serde(flatten)]
    pub course: Course,
    pub keyword_match_score: u32,
    pub ai_relevance_score: f64,
    pub recommendation_score: f64,
}

impl ScoredCourse {
    fn new(course: &Course, keyword_match_score: u32) -> Self {
        Self {
            course: course.clone(),
            keyword_match_score,
            ai_relevance_score: UNSCORED_RELEVANCE,
            recommendation_score: 0.0,
        }
    }
}

/// `rating*0.4 + keyword*0.3 + ai*0.2 + jitter*0.1`
pub fn composite_score(rating: f64, keyword_match_score: u32, ai_relevance: f64, jitter: f64) -> f64 {
    rating * RATING_WEIGHT
        + f64::from(keyword_match_score) * KEYWORD_WEIGHT
        + ai_relevance * AI_WEIGHT
        + jitter * JITTER_WEIGHT
}

#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    relevance: Arc<dyn RelevanceScorer>,
    jitter: Arc<dyn JitterSource>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, relevance: Arc<dyn RelevanceScorer>) -> Self {
        Self {
            catalog,
            relevance,
            jitter: Arc::new(ThreadRngJitter),
        }
    }

    pub fn with_jitter(mut self, jitter: Arc<dyn JitterSource>) -> Self {
        self.jitter = jitter;
        self
    }

    /// Personalization is opt-in and needs goals plus a configured collaborator.
    pub fn will_personalize(&self, query: &RecommendationQuery) -> bool {
        query.personalized && query.user_goals.is_some() && self.relevance.is_enabled()
    }

    /// Returns at most `top_n` courses ordered by non-increasing
    /// `recommendation_score`. Never fails: AI problems degrade inside the scorer.
    pub async fn recommend(&self, query: &RecommendationQuery) -> Vec<ScoredCourse> {
        let Ok(limit) = usize::try_from(query.top_n) else {
            debug!("top_n={} requested, returning no courses", query.top_n);
            return Vec::new();
        };
        if limit == 0 {
            return Vec::new();
        }

        let topic = query.topic.as_deref().map(str::to_lowercase);
        let skill_level = query.skill_level.as_deref();

        let mut candidates: Vec<ScoredCourse> = self
            .catalog
            .courses()
            .iter()
            .filter_map(|course| match topic.as_deref() {
                Some(t) => {
                    let score = keyword_score(course, t);
                    (score > 0).then(|| ScoredCourse::new(course, score))
                }
                None => Some(ScoredCourse::new(course, 0)),
            })
            .filter(|c| difficulty_matches(&c.course.difficulty_level, skill_level))
            .collect();

        if self.will_personalize(query) {
            let goals = query.user_goals.as_deref().unwrap_or_default();
            info!(
                "Scoring {} candidates for relevance to learner goals",
                candidates.len()
            );
            for candidate in &mut candidates {
                candidate.ai_relevance_score = self
                    .relevance
                    .score(&candidate.course, topic.as_deref(), goals)
                    .await;
            }
        }

        for candidate in &mut candidates {
            candidate.recommendation_score = composite_score(
                candidate.course.rating,
                candidate.keyword_match_score,
                candidate.ai_relevance_score,
                self.jitter.next(),
            );
        }

        candidates.sort_by(|a, b| b.recommendation_score.total_cmp(&a.recommendation_score));
        candidates.truncate(limit);

        info!(
            "Recommended {} courses (topic={:?}, skill_level={:?})",
            candidates.len(),
            topic,
            skill_level
        );

        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{row, CourseRow};
    use crate::recommendation::jitter::{FixedJitter, SequenceJitter};
    use crate::llm_client::stubs::CannedGenerator;
    use crate::recommendation::relevance::{
        DisabledRelevanceScorer, LlmRelevanceScorer, NEUTRAL_RELEVANCE,
    };

    fn rows() -> Vec<CourseRow> {
        vec![
            row("Python for Everybody", "programming basics", "python", "Beginner", "4.8"),
            row("Data Analysis", "analysis with python and pandas", "pandas", "Intermediate", "4.5"),
            row("Rust in Action", "systems programming", "rust", "Advanced", "4.7"),
            row("Intro to SQL", "relational databases", "sql", "Beginner", "4.2"),
            row("Machine Learning", "models and training", "statistics", "Advanced", "4.9"),
            row("Web Basics", "html and css", "web", "Mixed", "3.9"),
            row("Unrated Course", "nothing special", "misc", "Beginner", "n/a"),
        ]
    }

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::from_rows(rows()))
    }

    fn zero_jitter(recommender: Recommender) -> Recommender {
        recommender.with_jitter(Arc::new(FixedJitter(0.0)))
    }

    fn disabled(catalog: Arc<Catalog>) -> Recommender {
        zero_jitter(Recommender::new(catalog, Arc::new(DisabledRelevanceScorer)))
    }

    fn query(topic: Option<&str>, skill_level: Option<&str>, top_n: i64) -> RecommendationQuery {
        RecommendationQuery {
            topic: topic.map(str::to_string),
            skill_level: skill_level.map(str::to_string),
            top_n,
            personalized: false,
            user_goals: None,
        }
    }

    fn ids(courses: &[ScoredCourse]) -> Vec<u32> {
        courses.iter().map(|c| c.course.id).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_composite_score_weights() {
        assert!(approx(composite_score(4.0, 6, 0.0, 0.0), 3.4));
        assert!(approx(composite_score(0.0, 0, 1.0, 0.0), 0.2));
        assert!(approx(composite_score(0.0, 0, 0.0, 1.0), 0.1));
        assert!(approx(composite_score(5.0, 3, 0.5, 0.5), 2.0 + 0.9 + 0.1 + 0.05));
    }

    #[tokio::test]
    async fn test_unfiltered_returns_at_most_top_n_sorted() {
        let recommender = Recommender::new(catalog(), Arc::new(DisabledRelevanceScorer));
        let results = recommender.recommend(&query(None, None, 5)).await;
        assert_eq!(results.len(), 5);
        assert!(results
            .windows(2)
            .all(|w| w[0].recommendation_score >= w[1].recommendation_score));
        assert!(results.iter().all(|c| c.keyword_match_score == 0));
    }

    #[tokio::test]
    async fn test_topic_filter_returns_only_matches() {
        let results = disabled(catalog()).recommend(&query(Some("python"), None, 3)).await;
        assert_eq!(results.len(), 2);
        let mut found = ids(&results);
        found.sort_unstable();
        assert_eq!(found, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_topic_is_lowercased_before_matching() {
        let results = disabled(catalog()).recommend(&query(Some("PYTHON"), None, 10)).await;
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_topic_excludes_courses_without_substring() {
        let results = disabled(catalog()).recommend(&query(Some("rust"), None, 10)).await;
        assert_eq!(ids(&results), vec![3]);
        assert_eq!(results[0].keyword_match_score, 4);
    }

    #[tokio::test]
    async fn test_skill_level_filter() {
        let results = disabled(catalog()).recommend(&query(None, Some("beginner"), 10)).await;
        let mut found = ids(&results);
        found.sort_unstable();
        assert_eq!(found, vec![1, 4, 7]);
    }

    #[tokio::test]
    async fn test_unknown_skill_level_matches_literal() {
        let results = disabled(catalog()).recommend(&query(None, Some("mixed"), 10)).await;
        assert_eq!(ids(&results), vec![6]);
    }

    #[tokio::test]
    async fn test_topic_and_skill_level_combine() {
        let results = disabled(catalog())
            .recommend(&query(Some("python"), Some("intermediate"), 10))
            .await;
        assert_eq!(ids(&results), vec![2]);
    }

    #[tokio::test]
    async fn test_zero_or_negative_top_n_is_empty() {
        let recommender = disabled(catalog());
        assert!(recommender.recommend(&query(None, None, 0)).await.is_empty());
        assert!(recommender.recommend(&query(Some("python"), None, -3)).await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_catalog_is_empty() {
        let recommender = disabled(Arc::new(Catalog::default()));
        assert!(recommender.recommend(&query(Some("python"), None, 5)).await.is_empty());
    }

    #[tokio::test]
    async fn test_filter_eliminating_everything_is_empty() {
        let results = disabled(catalog()).recommend(&query(Some("cobol"), None, 5)).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_ranking_by_rating_and_keyword() {
        // python for everybody: 4.8*0.4 + (3+1)*0.3 = 3.12
        // data analysis:        4.5*0.4 + 2*0.3     = 2.40
        let results = disabled(catalog()).recommend(&query(Some("python"), None, 5)).await;
        assert_eq!(ids(&results), vec![1, 2]);
        assert!(approx(results[0].recommendation_score, 3.12));
        assert!(approx(results[1].recommendation_score, 2.4));
    }

    #[tokio::test]
    async fn test_unparseable_rating_scores_as_zero() {
        let results = disabled(catalog()).recommend(&query(Some("nothing special"), None, 5)).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].course.rating, 0.0);
        assert!(approx(results[0].recommendation_score, 0.6));
    }

    #[tokio::test]
    async fn test_jitter_breaks_ties() {
        let tied = Arc::new(Catalog::from_rows(vec![
            row("Course A", "", "", "", "4.0"),
            row("Course B", "", "", "", "4.0"),
        ]));
        let recommender = Recommender::new(tied, Arc::new(DisabledRelevanceScorer))
            .with_jitter(Arc::new(SequenceJitter::new([0.1, 0.9])));
        let results = recommender.recommend(&query(None, None, 2)).await;
        assert_eq!(ids(&results), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_not_personalized_never_calls_ai() {
        let llm = Arc::new(CannedGenerator::replying("10"));
        let recommender = zero_jitter(Recommender::new(
            catalog(),
            Arc::new(LlmRelevanceScorer::new(llm.clone())),
        ));

        let results = recommender.recommend(&query(Some("python"), None, 5)).await;
        assert_eq!(llm.call_count(), 0);
        assert!(results.iter().all(|c| c.ai_relevance_score == 0.0));
    }

    #[tokio::test]
    async fn test_personalized_without_goals_never_calls_ai() {
        let llm = Arc::new(CannedGenerator::replying("10"));
        let recommender = zero_jitter(Recommender::new(
            catalog(),
            Arc::new(LlmRelevanceScorer::new(llm.clone())),
        ));
        let mut q = query(Some("python"), None, 5);
        q.personalized = true;

        assert!(!recommender.will_personalize(&q));
        recommender.recommend(&q).await;
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_personalized_with_disabled_collaborator_scores_zero() {
        let recommender = disabled(catalog());
        let mut q = query(Some("python"), None, 5);
        q.personalized = true;
        q.user_goals = Some("become a data analyst".to_string());

        assert!(!recommender.will_personalize(&q));
        let results = recommender.recommend(&q).await;
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|c| c.ai_relevance_score == 0.0));
    }

    #[tokio::test]
    async fn test_personalized_scores_each_candidate_once() {
        let llm = Arc::new(CannedGenerator::replying("8"));
        let recommender = zero_jitter(Recommender::new(
            catalog(),
            Arc::new(LlmRelevanceScorer::new(llm.clone())),
        ));
        let mut q = query(Some("python"), None, 1);
        q.personalized = true;
        q.user_goals = Some("analytics career".to_string());

        let results = recommender.recommend(&q).await;
        // both surviving candidates are scored before truncation
        assert_eq!(llm.call_count(), 2);
        assert_eq!(results.len(), 1);
        assert!(approx(results[0].ai_relevance_score, 0.8));
        assert!(approx(results[0].recommendation_score, 3.12 + 0.16));
    }

    #[tokio::test]
    async fn test_ai_failure_degrades_to_neutral_score() {
        let llm = Arc::new(CannedGenerator::failing(503));
        let recommender = zero_jitter(Recommender::new(
            catalog(),
            Arc::new(LlmRelevanceScorer::new(llm)),
        ));
        let mut q = query(None, None, 10);
        q.personalized = true;
        q.user_goals = Some("x".to_string());

        let results = recommender.recommend(&q).await;
        assert_eq!(results.len(), 7);
        assert!(results.iter().all(|c| c.ai_relevance_score == NEUTRAL_RELEVANCE));
        assert!(results
            .windows(2)
            .all(|w| w[0].recommendation_score >= w[1].recommendation_score));
    }

    #[tokio::test]
    async fn test_repeated_queries_are_stable_with_fixed_jitter() {
        let llm = Arc::new(CannedGenerator::replying("5"));
        let recommender = zero_jitter(Recommender::new(
            catalog(),
            Arc::new(LlmRelevanceScorer::new(llm)),
        ));
        let mut q = query(None, None, 7);
        q.personalized = true;
        q.user_goals = Some("career change".to_string());

        let first = recommender.recommend(&q).await;
        let second = recommender.recommend(&q).await;
        assert_eq!(ids(&first), ids(&second));
        let first_scores: Vec<f64> = first.iter().map(|c| c.recommendation_score).collect();
        let second_scores: Vec<f64> = second.iter().map(|c| c.recommendation_score).collect();
        assert_eq!(first_scores, second_scores);
    }

    #[test]
    fn test_scored_course_serializes_flat() {
        let catalog = catalog();
        let scored = ScoredCourse::new(&catalog.courses()[0], 4);
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "python for everybody");
        assert_eq!(value["keyword_match_score"], 4);
        assert_eq!(value["ai_relevance_score"], 0.0);
    }
}
