use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::llm_client::{LlmClient, TextGenerator, MODEL};
use crate::recommendation::ranker::Recommender;
use crate::recommendation::relevance::{
    DisabledRelevanceScorer, LlmRelevanceScorer, RelevanceScorer,
};
use crate::roadmap::drafter::{DisabledRoadmapDrafter, LlmRoadmapDrafter, RoadmapDrafter};
use crate::roadmap::generator::RoadmapGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Recommender,
    pub roadmaps: RoadmapGenerator,
    pub config: Config,
}

/// The AI-backed capabilities, remote or disabled.
pub struct AiServices {
    pub relevance: Arc<dyn RelevanceScorer>,
    pub drafter: Arc<dyn RoadmapDrafter>,
}

impl AiServices {
    /// Picks the variants once, from credential presence.
    pub fn from_config(config: &Config) -> Self {
        match config.anthropic_api_key.as_deref() {
            Some(api_key) => {
                let llm: Arc<dyn TextGenerator> = Arc::new(
                    LlmClient::new(
                        api_key.to_string(),
                        Duration::from_secs(config.llm_timeout_secs),
                    )
                    .with_base_url(config.anthropic_base_url.as_str())
                    .with_max_retries(config.llm_max_retries),
                );
                info!("LLM client initialized (model: {MODEL})");
                Self::remote(llm)
            }
            None => {
                warn!("ANTHROPIC_API_KEY not set. AI-enhanced features are disabled");
                Self::disabled()
            }
        }
    }

    pub fn remote(llm: Arc<dyn TextGenerator>) -> Self {
        Self {
            relevance: Arc::new(LlmRelevanceScorer::new(llm.clone())),
            drafter: Arc::new(LlmRoadmapDrafter::new(llm)),
        }
    }

    pub fn disabled() -> Self {
        Self {
            relevance: Arc::new(DisabledRelevanceScorer),
            drafter: Arc::new(DisabledRoadmapDrafter),
        }
    }
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<Catalog>, ai: AiServices) -> Self {
        Self {
            recommender: Recommender::new(catalog.clone(), ai.relevance),
            roadmaps: RoadmapGenerator::new(ai.drafter),
            catalog,
            config,
        }
    }
}
