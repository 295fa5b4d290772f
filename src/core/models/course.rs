//! Course model
//!
//! A course record as supplied by the static catalog JSON. Display-oriented
//! numeric fields are optional in the data and fall back to documented
//! defaults through the accessor methods; the raw fields stay untouched.

use serde::{Deserialize, Serialize};

/// Default rating shown when the data omits one
pub const DEFAULT_RATING: f64 = 4.8;

/// Default liked-percent shown when the data omits one
pub const DEFAULT_LIKED_PERCENT: f64 = 97.0;

/// Default instructor label
pub const DEFAULT_INSTRUCTOR: &str = "NIFASE Faculty";

/// Default schedule label
pub const DEFAULT_SCHEDULE: &str = "Flexible schedule";

/// Default start-date label
pub const DEFAULT_START_DATE: &str = "Starts soon";

/// A named unit within a course holding an ordered list of topic strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Module title (e.g., "Module 1: Risk & Money")
    #[serde(default)]
    pub title: String,

    /// Ordered topic/item strings taught in this module
    #[serde(default)]
    pub items: Vec<String>,
}

/// A single educational program record from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Stable identifier
    pub id: String,

    /// URL-safe identifier, unique across the catalog
    pub slug: String,

    /// Display title
    pub title: String,

    /// One-paragraph teaser description
    #[serde(default)]
    pub short_description: String,

    /// Category label used for filtering (exact string match)
    #[serde(default)]
    pub category: String,

    /// Level label used for filtering (e.g., "Beginner")
    #[serde(default)]
    pub level: String,

    /// Free-text duration (e.g., "6 months", "8-12 weeks")
    #[serde(default)]
    pub duration: String,

    /// Card/hero image path
    #[serde(default)]
    pub image: String,

    /// Instructor name; `None` falls back to [`DEFAULT_INSTRUCTOR`]
    #[serde(default)]
    pub instructor: Option<String>,

    /// Schedule label; `None` falls back to [`DEFAULT_SCHEDULE`]
    #[serde(default)]
    pub schedule: Option<String>,

    /// Start-date label; `None` falls back to [`DEFAULT_START_DATE`]
    #[serde(default)]
    pub start_date_label: Option<String>,

    /// Average rating; missing or non-finite values default to 4.8
    #[serde(default)]
    pub rating: Option<f64>,

    /// Number of reviews; missing values default to 0
    #[serde(default)]
    pub review_count: Option<f64>,

    /// Percentage of learners who liked the course; defaults to 97
    #[serde(default)]
    pub liked_percent: Option<f64>,

    /// Number of enrolled learners; missing values default to 0
    #[serde(default)]
    pub enrolled_count: Option<f64>,

    /// Explicit skill tags; when non-empty these win over derivation
    #[serde(default)]
    pub skills: Vec<String>,

    /// Ordered module list (may be empty)
    #[serde(default)]
    pub modules: Vec<Module>,

    /// Whether the course carries the "Popular" badge
    #[serde(default)]
    pub popular: bool,
}

impl Course {
    /// Get the rating, defaulting when absent or non-finite
    #[must_use]
    pub fn rating(&self) -> f64 {
        self.rating
            .filter(|r| r.is_finite())
            .unwrap_or(DEFAULT_RATING)
    }

    /// Get the review count, defaulting to 0
    #[must_use]
    pub fn review_count(&self) -> u64 {
        count_or_zero(self.review_count)
    }

    /// Get the liked-percent, defaulting when absent or non-finite
    #[must_use]
    pub fn liked_percent(&self) -> f64 {
        self.liked_percent
            .filter(|p| p.is_finite())
            .unwrap_or(DEFAULT_LIKED_PERCENT)
    }

    /// Get the enrolled count, defaulting to 0
    #[must_use]
    pub fn enrolled_count(&self) -> u64 {
        count_or_zero(self.enrolled_count)
    }

    /// Get the instructor name or the faculty default
    #[must_use]
    pub fn instructor(&self) -> &str {
        self.instructor.as_deref().unwrap_or(DEFAULT_INSTRUCTOR)
    }

    /// Get the schedule label or its default
    #[must_use]
    pub fn schedule(&self) -> &str {
        self.schedule.as_deref().unwrap_or(DEFAULT_SCHEDULE)
    }

    /// Get the start-date label or its default
    #[must_use]
    pub fn start_date_label(&self) -> &str {
        self.start_date_label.as_deref().unwrap_or(DEFAULT_START_DATE)
    }

    /// Number of modules in the course
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Collect up to `limit` module items in module order, item order.
    ///
    /// Used for the teaser bullet list on catalog cards and the "explore"
    /// cards on the detail page.
    #[must_use]
    pub fn highlights(&self, limit: usize) -> Vec<&str> {
        let mut highlights = Vec::new();
        for module in &self.modules {
            for item in &module.items {
                highlights.push(item.as_str());
                if highlights.len() >= limit {
                    return highlights;
                }
            }
        }
        highlights
    }

    /// Initials for the instructor avatar (first letter of the first two
    /// name words, uppercased). Empty when the name has no letters.
    #[must_use]
    pub fn instructor_initials(&self) -> String {
        self.instructor()
            .split_whitespace()
            .take(2)
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Rating formatted with one decimal (e.g., "4.8")
    #[must_use]
    pub fn formatted_rating(&self) -> String {
        format!("{:.1}", self.rating())
    }

    /// Review count formatted as "(1,234 reviews)", or empty when zero
    #[must_use]
    pub fn formatted_reviews(&self) -> String {
        let count = self.review_count();
        if count == 0 {
            String::new()
        } else {
            format!("({} reviews)", group_thousands(count))
        }
    }

    /// Enrolled count formatted as "12,847 already enrolled", or empty when zero
    #[must_use]
    pub fn formatted_enrolled(&self) -> String {
        let count = self.enrolled_count();
        if count == 0 {
            String::new()
        } else {
            format!("{} already enrolled", group_thousands(count))
        }
    }
}

/// Coerce an optional count to `u64`, treating missing, non-finite, and
/// negative values as zero
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_or_zero(value: Option<f64>) -> u64 {
    value
        .filter(|v| v.is_finite())
        .map_or(0, |v| v.max(0.0) as u64)
}

/// Format an integer with comma thousands separators
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_with_modules(modules: Vec<Module>) -> Course {
        Course {
            id: "c1".to_string(),
            slug: "test-course".to_string(),
            title: "Test Course".to_string(),
            short_description: String::new(),
            category: String::new(),
            level: String::new(),
            duration: String::new(),
            image: String::new(),
            instructor: None,
            schedule: None,
            start_date_label: None,
            rating: None,
            review_count: None,
            liked_percent: None,
            enrolled_count: None,
            skills: Vec::new(),
            modules,
            popular: false,
        }
    }

    #[test]
    fn test_numeric_defaults() {
        let course = course_with_modules(Vec::new());

        assert!((course.rating() - DEFAULT_RATING).abs() < f64::EPSILON);
        assert_eq!(course.review_count(), 0);
        assert!((course.liked_percent() - DEFAULT_LIKED_PERCENT).abs() < f64::EPSILON);
        assert_eq!(course.enrolled_count(), 0);
    }

    #[test]
    fn test_non_finite_rating_falls_back() {
        let mut course = course_with_modules(Vec::new());
        course.rating = Some(f64::NAN);
        assert!((course.rating() - DEFAULT_RATING).abs() < f64::EPSILON);

        course.rating = Some(f64::INFINITY);
        assert!((course.rating() - DEFAULT_RATING).abs() < f64::EPSILON);

        course.rating = Some(3.5);
        assert!((course.rating() - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_counts_clamp_to_zero() {
        let mut course = course_with_modules(Vec::new());
        course.enrolled_count = Some(-12.0);
        assert_eq!(course.enrolled_count(), 0);
    }

    #[test]
    fn test_display_string_defaults() {
        let course = course_with_modules(Vec::new());

        assert_eq!(course.instructor(), DEFAULT_INSTRUCTOR);
        assert_eq!(course.schedule(), DEFAULT_SCHEDULE);
        assert_eq!(course.start_date_label(), DEFAULT_START_DATE);
    }

    #[test]
    fn test_highlights_truncate_across_modules() {
        let course = course_with_modules(vec![
            Module {
                title: "Module 1".to_string(),
                items: vec!["A".to_string(), "B".to_string()],
            },
            Module {
                title: "Module 2".to_string(),
                items: vec!["C".to_string(), "D".to_string()],
            },
        ]);

        assert_eq!(course.highlights(3), vec!["A", "B", "C"]);
        assert_eq!(course.highlights(10), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_highlights_skip_empty_modules() {
        let course = course_with_modules(vec![
            Module::default(),
            Module {
                title: "Module 2".to_string(),
                items: vec!["Only".to_string()],
            },
        ]);

        assert_eq!(course.highlights(3), vec!["Only"]);
    }

    #[test]
    fn test_instructor_initials() {
        let mut course = course_with_modules(Vec::new());
        course.instructor = Some("jane doe smith".to_string());
        assert_eq!(course.instructor_initials(), "JD");

        course.instructor = Some("Prince".to_string());
        assert_eq!(course.instructor_initials(), "P");
    }

    #[test]
    fn test_formatted_reviews() {
        let mut course = course_with_modules(Vec::new());
        assert_eq!(course.formatted_reviews(), "");

        course.review_count = Some(1234.0);
        assert_eq!(course.formatted_reviews(), "(1,234 reviews)");
    }

    #[test]
    fn test_formatted_enrolled() {
        let mut course = course_with_modules(Vec::new());
        assert_eq!(course.formatted_enrolled(), "");

        course.enrolled_count = Some(12847.0);
        assert_eq!(course.formatted_enrolled(), "12,847 already enrolled");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
