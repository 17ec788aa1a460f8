// LLM prompt constants for roadmap drafting.

/// System prompt for roadmap drafting. Combined with `JSON_ONLY_SYSTEM` at call time.
pub const ROADMAP_SYSTEM: &str =
    "You are an expert educational curriculum designer with deep knowledge across technical \
    and non-technical subjects. You create detailed, actionable learning plans that are \
    practical and tailored to individual needs.";

/// Roadmap prompt template. Replace `{topic}`, `{skill_level}` and `{user_goals}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a comprehensive learning roadmap for someone wanting to master {topic}.

Learner information:
- Current skill level: {skill_level}
- Learning goals: {user_goals}

The roadmap must be detailed, actionable and tailored to the learner's skill level and goals.
Break the journey into logical stages with specific concepts to learn at each stage.

Return a JSON object with this EXACT schema:
{
  "learningPath": [
    {
      "step": "Specific stage name",
      "difficulty": "Beginner | Intermediate | Advanced",
      "description": "What this stage covers (2-3 sentences)",
      "time_estimate": "Estimated completion time (weeks/months)",
      "key_concepts": ["Concept 1", "Concept 2", "Concept 3"],
      "milestones": ["Practical milestone 1", "Practical milestone 2"],
      "practice_activities": ["Activity 1", "Activity 2"]
    }
  ],
  "projectSuggestions": [
    {
      "name": "Project name specific to {topic}",
      "description": "Project description (2-3 sentences)",
      "complexity": "Low | Medium | High",
      "skills_practiced": ["Skill 1", "Skill 2", "Skill 3"],
      "resources": ["Resource 1", "Resource 2"],
      "estimated_time": "Project completion time estimate"
    }
  ],
  "resources": {
    "books": ["Book title 1", "Book title 2", "Book title 3"],
    "online_courses": ["Course 1", "Course 2"],
    "communities": ["Community 1", "Community 2"],
    "tools": ["Tool 1", "Tool 2", "Tool 3"],
    "practice_platforms": ["Platform 1", "Platform 2"]
  },
  "career_insights": [
    "Career opportunities for {topic}",
    "Skill demand information",
    "Industry application of {topic} skills"
  ]
}

Rules:
- learningPath: 3-5 stages, progressing from fundamentals to mastery.
- projectSuggestions: 3-4 projects of increasing complexity.
- resources: all five categories are required.
- Every item must be specific to {topic}, not generic."#;
