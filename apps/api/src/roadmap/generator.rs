//! Roadmap Generator — chooses between the AI drafter and the static template.
//!
//! The caller always receives a valid `Roadmap`. Any AI failure (transport,
//! malformed JSON, schema violation) is logged and replaced by the template.

use std::sync::Arc;

use tracing::{info, warn};

use crate::roadmap::drafter::RoadmapDrafter;
use crate::roadmap::models::{RoadmapOutcome, RoadmapSource};
use crate::roadmap::template::template_roadmap;

#[derive(Debug, Clone)]
pub struct RoadmapRequest {
    pub topic: String,
    pub skill_level: Option<String>,
    pub user_goals: Option<String>,
    pub use_ai: bool,
}

#[derive(Clone)]
pub struct RoadmapGenerator {
    drafter: Arc<dyn RoadmapDrafter>,
}

impl RoadmapGenerator {
    pub fn new(drafter: Arc<dyn RoadmapDrafter>) -> Self {
        Self { drafter }
    }

    pub async fn generate(&self, request: &RoadmapRequest) -> RoadmapOutcome {
        let goals = match request.user_goals.as_deref() {
            Some(goals) if request.use_ai && self.drafter.is_enabled() => goals,
            _ => return template_outcome(&request.topic),
        };

        info!("Drafting AI roadmap for topic '{}'", request.topic);
        match self
            .drafter
            .draft(&request.topic, request.skill_level.as_deref(), goals)
            .await
        {
            Ok(roadmap) => RoadmapOutcome {
                roadmap,
                source: RoadmapSource::Ai,
            },
            Err(e) => {
                warn!("{e}. Using template roadmap for '{}'", request.topic);
                template_outcome(&request.topic)
            }
        }
    }
}

fn template_outcome(topic: &str) -> RoadmapOutcome {
    RoadmapOutcome {
        roadmap: template_roadmap(topic),
        source: RoadmapSource::Template,
    }
}
