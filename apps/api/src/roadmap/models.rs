use serde::{Deserialize, Serialize};

/// A structured learning plan. Either fully AI-drafted or fully templated,
/// never merged field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    #[serde(rename = "learningPath")]
    pub learning_path: Vec<Stage>,
    #[serde(rename = "projectSuggestions")]
    pub project_suggestions: Vec<Project>,
    pub resources: Resources,
    pub career_insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub step: String,
    pub difficulty: String,
    pub description: String,
    pub time_estimate: String,
    pub key_concepts: Vec<String>,
    #[serde(default)]
    pub milestones: Vec<String>,
    #[serde(default)]
    pub practice_activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub complexity: String,
    #[serde(default)]
    pub skills_practiced: Vec<String>,
    pub resources: Vec<String>,
    #[serde(default)]
    pub estimated_time: String,
}

/// The five fixed resource categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    pub books: Vec<String>,
    pub online_courses: Vec<String>,
    pub communities: Vec<String>,
    pub tools: Vec<String>,
    pub practice_platforms: Vec<String>,
}

/// Which path produced a roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapSource {
    Ai,
    Template,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoadmapOutcome {
    pub roadmap: Roadmap,
    pub source: RoadmapSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_stage_and_project_fields_default() {
        let stage: Stage = serde_json::from_value(serde_json::json!({
            "step": "Basics",
            "difficulty": "Beginner",
            "description": "Start here",
            "time_estimate": "2 weeks",
            "key_concepts": ["syntax"]
        }))
        .unwrap();
        assert!(stage.milestones.is_empty());
        assert!(stage.practice_activities.is_empty());

        let project: Project = serde_json::from_value(serde_json::json!({
            "name": "CLI todo app",
            "description": "Build it",
            "complexity": "Low",
            "resources": []
        }))
        .unwrap();
        assert!(project.skills_practiced.is_empty());
        assert_eq!(project.estimated_time, "");
    }

    #[test]
    fn test_resources_require_every_category() {
        let result: Result<Resources, _> = serde_json::from_value(serde_json::json!({
            "books": [],
            "online_courses": [],
            "communities": [],
            "tools": []
        }));
        assert!(result.is_err(), "practice_platforms is mandatory");
    }

    #[test]
    fn test_source_serializes_snake_case() {
        assert_eq!(serde_json::to_value(RoadmapSource::Ai).unwrap(), "ai");
        assert_eq!(serde_json::to_value(RoadmapSource::Template).unwrap(), "template");
    }
}
