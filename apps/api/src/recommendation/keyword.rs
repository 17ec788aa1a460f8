//! Keyword Matcher — literal substring relevance of a course to a topic.

use crate::catalog::Course;

pub const NAME_WEIGHT: u32 = 3;
pub const DESCRIPTION_WEIGHT: u32 = 2;
pub const SKILLS_WEIGHT: u32 = 1;

/// Scores `course` against an already-lowercased `topic`.
///
/// `3*name + 2*description + 1*skills`, each term 1 when the topic is a
/// substring of that field. Range 0..=6. No tokenization or stemming.
pub fn keyword_score(course: &Course, topic: &str) -> u32 {
    let hit = |field: &str, weight: u32| if field.contains(topic) { weight } else { 0 };

    hit(&course.name, NAME_WEIGHT)
        + hit(&course.description, DESCRIPTION_WEIGHT)
        + hit(&course.skills, SKILLS_WEIGHT)
}
