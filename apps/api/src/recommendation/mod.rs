// Course recommendation pipeline.
// Deterministic keyword + difficulty filtering, optional AI relevance, weighted ranking.
// All LLM calls go through llm_client via the RelevanceScorer capability.

pub mod difficulty;
pub mod handlers;
pub mod jitter;
pub mod keyword;
pub mod prompts;
pub mod ranker;
pub mod relevance;
