//! Catalog Store — the normalized, read-only course catalog for a session.
//!
//! Loaded once at startup and shared behind an `Arc`. Nothing mutates it afterwards.

pub mod loader;

use serde::{Deserialize, Serialize};

pub use loader::load_catalog;

/// Placeholder stored when a course has no URL.
pub const URL_PLACEHOLDER: &str = "#";

/// A normalized course record. Text fields are lowercased at load time and
/// `rating` is never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub skills: String,
    pub difficulty_level: String,
    pub rating: f64,
    pub url: String,
}

/// One raw catalog row before normalization.
#[derive(Debug, Clone, Default)]
pub struct CourseRow {
    pub name: String,
    pub description: String,
    pub skills: String,
    pub difficulty_level: String,
    pub rating: String,
    pub url: Option<String>,
}

/// Display-ready view of a single course.
#[derive(Debug, Clone, Serialize)]
pub struct CourseDetails {
    pub id: String,
    pub name: String,
    pub difficulty: String,
    pub rating: String,
    pub url: String,
    pub skills: String,
    pub description: String,
}

impl From<&Course> for CourseDetails {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.to_string(),
            name: course.name.clone(),
            difficulty: course.difficulty_level.clone(),
            rating: format!("{:.1}", course.rating),
            url: course.url.clone(),
            skills: course.skills.clone(),
            description: course.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Normalizes raw rows and assigns dense ids 1..=N in row order.
    pub fn from_rows(rows: impl IntoIterator<Item = CourseRow>) -> Self {
        let courses = rows
            .into_iter()
            .enumerate()
            .map(|(idx, row)| Course {
                id: idx as u32 + 1,
                name: row.name.to_lowercase(),
                description: row.description.to_lowercase(),
                skills: row.skills.to_lowercase(),
                difficulty_level: row.difficulty_level.to_lowercase(),
                rating: normalize_rating(&row.rating),
                url: row
                    .url
                    .map(|u| u.trim().to_string())
                    .filter(|u| !u.is_empty())
                    .unwrap_or_else(|| URL_PLACEHOLDER.to_string()),
            })
            .collect();
        Self { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Ids are dense, so lookup is positional.
    pub fn get(&self, id: u32) -> Option<&Course> {
        let idx = usize::try_from(id).ok()?.checked_sub(1)?;
        self.courses.get(idx)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Unparseable, non-finite and negative ratings all become 0.0.
pub fn normalize_rating(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

#[cfg(test)]
pub(crate) fn row(name: &str, description: &str, skills: &str, difficulty: &str, rating: &str) -> CourseRow {
    CourseRow {
        name: name.to_string(),
        description: description.to_string(),
        skills: skills.to_string(),
        difficulty_level: difficulty.to_string(),
        rating: rating.to_string(),
        url: Some(format!("https://example.com/{}", name.to_lowercase().replace(' ', "-"))),
    }
}
