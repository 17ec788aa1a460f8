//! Roadmap drafting via the LLM.
//!
//! `LlmRoadmapDrafter` asks for a JSON roadmap, deserializes it and runs
//! `validate_roadmap`. `DisabledRoadmapDrafter` stands in when no credential
//! is configured. Fallback policy lives in `generator`, not here.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{strip_json_fences, CallOptions, LlmError, TextGenerator};
use crate::roadmap::models::Roadmap;
use crate::roadmap::prompts::{ROADMAP_PROMPT_TEMPLATE, ROADMAP_SYSTEM};
use crate::roadmap::validation::validate_roadmap;

const ROADMAP_CALL: CallOptions = CallOptions {
    max_tokens: 2500,
    temperature: 0.5,
};

#[derive(Debug, Error)]
pub enum RoadmapDraftError {
    #[error("AI collaborator is not configured")]
    Unavailable,

    #[error("Roadmap LLM call failed: {0}")]
    Call(#[from] LlmError),

    #[error("Roadmap response is not valid roadmap JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Roadmap response violates schema: {}", .0.join("; "))]
    Schema(Vec<String>),
}

#[async_trait]
pub trait RoadmapDrafter: Send + Sync {
    fn is_enabled(&self) -> bool;

    async fn draft(
        &self,
        topic: &str,
        skill_level: Option<&str>,
        user_goals: &str,
    ) -> Result<Roadmap, RoadmapDraftError>;
}

pub struct DisabledRoadmapDrafter;

#[async_trait]
impl RoadmapDrafter for DisabledRoadmapDrafter {
    fn is_enabled(&self) -> bool {
        false
    }

    async fn draft(
        &self,
        _topic: &str,
        _skill_level: Option<&str>,
        _user_goals: &str,
    ) -> Result<Roadmap, RoadmapDraftError> {
        Err(RoadmapDraftError::Unavailable)
    }
}

pub struct LlmRoadmapDrafter {
    llm: Arc<dyn TextGenerator>,
}

impl LlmRoadmapDrafter {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl RoadmapDrafter for LlmRoadmapDrafter {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn draft(
        &self,
        topic: &str,
        skill_level: Option<&str>,
        user_goals: &str,
    ) -> Result<Roadmap, RoadmapDraftError> {
        let prompt = build_roadmap_prompt(topic, skill_level, user_goals);
        let system = format!("{ROADMAP_SYSTEM} {JSON_ONLY_SYSTEM}");
        let text = self.llm.complete(&prompt, &system, ROADMAP_CALL).await?;
        parse_roadmap(&text)
    }
}

/// Deserializes and validates a roadmap document returned by the model.
pub fn parse_roadmap(text: &str) -> Result<Roadmap, RoadmapDraftError> {
    let roadmap: Roadmap = serde_json::from_str(strip_json_fences(text))?;
    validate_roadmap(&roadmap).map_err(RoadmapDraftError::Schema)?;
    Ok(roadmap)
}

fn build_roadmap_prompt(topic: &str, skill_level: Option<&str>, user_goals: &str) -> String {
    ROADMAP_PROMPT_TEMPLATE
        .replace("{topic}", topic)
        .replace("{skill_level}", skill_level.unwrap_or("unspecified"))
        .replace("{user_goals}", user_goals)
}
