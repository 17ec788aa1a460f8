// LLM prompt constants for relevance scoring.

/// System prompt for per-course relevance rating.
/// Combined with `NUMBER_ONLY_SYSTEM` at call time.
pub const RELEVANCE_SYSTEM: &str =
    "You are an educational advisor helping match courses to learner goals.";

/// Relevance prompt template. Replace `{topic}`, `{user_goals}`, `{course_name}`,
/// `{course_description}`, `{course_skills}` and `{course_difficulty}` before sending.
pub const RELEVANCE_PROMPT_TEMPLATE: &str = r#"Rate how relevant this course is to a learner with these goals on a scale of 0-10.

Topic of interest: {topic}
Learner's goals: {user_goals}

Course details:
- Name: {course_name}
- Description: {course_description}
- Skills taught: {course_skills}
- Difficulty: {course_difficulty}

Return only a number from 0-10."#;
