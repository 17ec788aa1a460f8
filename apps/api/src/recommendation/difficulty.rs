//! Difficulty Classifier — maps a free-text skill level to alias substrings and
//! tests a course's difficulty text against them.

const BEGINNER_ALIASES: &[&str] = &["beginner", "intro", "basic", "level 1", "fundamentals"];
const INTERMEDIATE_ALIASES: &[&str] = &["intermediate", "mid-level", "level 2", "advanced beginner"];
const ADVANCED_ALIASES: &[&str] = &["advanced", "expert", "professional", "level 3", "master"];

/// Alias set for a skill level. Unknown levels fall back to the raw
/// (lowercased) level as the single alias.
pub fn aliases_for(skill_level: &str) -> Vec<String> {
    let level = skill_level.to_lowercase();
    let known = match level.as_str() {
        "beginner" => BEGINNER_ALIASES,
        "intermediate" => INTERMEDIATE_ALIASES,
        "advanced" => ADVANCED_ALIASES,
        _ => return vec![level],
    };
    known.iter().map(|a| a.to_string()).collect()
}

/// True when any alias is a substring of the course's difficulty text.
/// `None` means no filtering.
pub fn difficulty_matches(difficulty_level: &str, skill_level: Option<&str>) -> bool {
    match skill_level {
        None => true,
        Some(level) => {
            let difficulty = difficulty_level.to_lowercase();
            aliases_for(level)
                .iter()
                .any(|alias| difficulty.contains(alias.as_str()))
        }
    }
}
