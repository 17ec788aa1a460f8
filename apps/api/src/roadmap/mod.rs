// Learning roadmap generation.
// Static template by default; AI-drafted roadmap when requested, configured and valid.
// All LLM calls go through llm_client via the RoadmapDrafter capability.

pub mod drafter;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod template;
pub mod validation;
