//! AI Relevance Scorer — optional, remote, fail-closed.
//!
//! Two variants, chosen once at startup:
//! - `LlmRelevanceScorer`: asks the text generator for a 0–10 rating and
//!   normalizes it to [0, 1]. Any failure yields `NEUTRAL_RELEVANCE`.
//! - `DisabledRelevanceScorer`: no credential configured. Never enabled.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::catalog::Course;
use crate::llm_client::prompts::NUMBER_ONLY_SYSTEM;
use crate::llm_client::{CallOptions, TextGenerator};
use crate::recommendation::prompts::{RELEVANCE_PROMPT_TEMPLATE, RELEVANCE_SYSTEM};

/// Score returned when the remote call fails or its answer is not a number.
pub const NEUTRAL_RELEVANCE: f64 = 0.5;
/// Score used for every candidate when personalization does not run.
pub const UNSCORED_RELEVANCE: f64 = 0.0;

const RELEVANCE_CALL: CallOptions = CallOptions {
    max_tokens: 10,
    temperature: 0.3,
};

#[async_trait]
pub trait RelevanceScorer: Send + Sync {
    /// Whether the scorer is backed by a configured collaborator.
    fn is_enabled(&self) -> bool;

    /// Relevance of `course` to the learner, in [0, 1]. Never fails.
    async fn score(&self, course: &Course, topic: Option<&str>, user_goals: &str) -> f64;
}

pub struct DisabledRelevanceScorer;

#[async_trait]
impl RelevanceScorer for DisabledRelevanceScorer {
    fn is_enabled(&self) -> bool {
        false
    }

    async fn score(&self, _course: &Course, _topic: Option<&str>, _user_goals: &str) -> f64 {
        UNSCORED_RELEVANCE
    }
}

pub struct LlmRelevanceScorer {
    llm: Arc<dyn TextGenerator>,
}

impl LlmRelevanceScorer {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl RelevanceScorer for LlmRelevanceScorer {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn score(&self, course: &Course, topic: Option<&str>, user_goals: &str) -> f64 {
        let prompt = build_relevance_prompt(course, topic, user_goals);
        let system = format!("{RELEVANCE_SYSTEM} {NUMBER_ONLY_SYSTEM}");

        match self.llm.complete(&prompt, &system, RELEVANCE_CALL).await {
            Ok(text) => parse_relevance(&text).unwrap_or_else(|| {
                warn!(
                    "Relevance response for course {} was not a number: {:?}",
                    course.id,
                    text.chars().take(40).collect::<String>()
                );
                NEUTRAL_RELEVANCE
            }),
            Err(e) => {
                warn!("Relevance scoring failed for course {}: {e}", course.id);
                NEUTRAL_RELEVANCE
            }
        }
    }
}

/// Parses a 0–10 rating, clamps it and divides by 10.
/// Returns `None` for anything that is not a finite number.
pub fn parse_relevance(text: &str) -> Option<f64> {
    let value = text.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.clamp(0.0, 10.0) / 10.0)
}

fn build_relevance_prompt(course: &Course, topic: Option<&str>, user_goals: &str) -> String {
    RELEVANCE_PROMPT_TEMPLATE
        .replace("{topic}", topic.unwrap_or("not specified"))
        .replace("{user_goals}", user_goals)
        .replace("{course_name}", &course.name)
        .replace("{course_description}", &course.description)
        .replace("{course_skills}", &course.skills)
        .replace("{course_difficulty}", &course.difficulty_level)
}
