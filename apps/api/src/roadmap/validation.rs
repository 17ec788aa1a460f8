//! Structural checks for AI-drafted roadmaps.
//!
//! Field presence is enforced by deserialization; this layer checks the
//! counts and non-empty labels a usable roadmap needs.

use crate::roadmap::models::Roadmap;

pub const MIN_STAGES: usize = 3;
pub const MAX_STAGES: usize = 5;
pub const MIN_PROJECTS: usize = 3;
pub const MAX_PROJECTS: usize = 4;

/// Returns every violation found, or `Ok(())` when the roadmap is usable.
pub fn validate_roadmap(roadmap: &Roadmap) -> Result<(), Vec<String>> {
    let mut violations = Vec::new();

    let stages = roadmap.learning_path.len();
    if !(MIN_STAGES..=MAX_STAGES).contains(&stages) {
        violations.push(format!(
            "learningPath must have {MIN_STAGES}-{MAX_STAGES} stages, found {stages}"
        ));
    }

    let projects = roadmap.project_suggestions.len();
    if !(MIN_PROJECTS..=MAX_PROJECTS).contains(&projects) {
        violations.push(format!(
            "projectSuggestions must have {MIN_PROJECTS}-{MAX_PROJECTS} projects, found {projects}"
        ));
    }

    for (idx, stage) in roadmap.learning_path.iter().enumerate() {
        if stage.step.trim().is_empty() {
            violations.push(format!("learningPath[{idx}].step is empty"));
        }
        if stage.key_concepts.is_empty() {
            violations.push(format!("learningPath[{idx}].key_concepts is empty"));
        }
    }

    for (idx, project) in roadmap.project_suggestions.iter().enumerate() {
        if project.name.trim().is_empty() {
            violations.push(format!("projectSuggestions[{idx}].name is empty"));
        }
    }

    if roadmap.career_insights.is_empty() {
        violations.push("career_insights is empty".to_string());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
