//! Catalog model

use super::Course;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The full, immutable course list loaded from the static data source.
///
/// Courses keep their input order; every derived view (filtering, related
/// courses, rendering) preserves or deterministically reorders that sequence,
/// so the catalog is never mutated after load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Courses in catalog order
    courses: Vec<Course>,
}

impl Catalog {
    /// Create a catalog from an ordered course list
    #[must_use]
    pub const fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// All courses in catalog order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses in the catalog
    #[must_use]
    pub const fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog holds no courses
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Look up a course by its slug
    ///
    /// # Returns
    /// A reference to the course, or `None` when the slug is unknown
    /// (the caller maps this to a not-found condition)
    #[must_use]
    pub fn get_by_slug(&self, slug: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.slug == slug)
    }

    /// Distinct category labels, sorted alphabetically
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        Self::distinct_sorted(self.courses.iter().map(|c| c.category.as_str()))
    }

    /// Distinct level labels, sorted alphabetically
    #[must_use]
    pub fn levels(&self) -> Vec<String> {
        Self::distinct_sorted(self.courses.iter().map(|c| c.level.as_str()))
    }

    /// Validate that slugs are unique across the catalog
    ///
    /// # Errors
    /// Returns `Err` with the list of duplicated slugs
    pub fn validate_slugs(&self) -> Result<(), Vec<String>> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();

        for course in &self.courses {
            if !seen.insert(course.slug.as_str()) && !duplicates.contains(&course.slug) {
                duplicates.push(course.slug.clone());
            }
        }

        if duplicates.is_empty() {
            Ok(())
        } else {
            Err(duplicates)
        }
    }

    fn distinct_sorted<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut distinct: Vec<String> = labels
            .filter(|label| !label.is_empty())
            .collect::<HashSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();
        distinct.sort();
        distinct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Module;

    fn course(slug: &str, category: &str, level: &str) -> Course {
        Course {
            id: slug.to_string(),
            slug: slug.to_string(),
            title: slug.to_string(),
            short_description: String::new(),
            category: category.to_string(),
            level: level.to_string(),
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
            modules: vec![Module::default()],
            popular: false,
        }
    }

    #[test]
    fn test_get_by_slug() {
        let catalog = Catalog::new(vec![
            course("a", "Finance", "Beginner"),
            course("b", "Safety", "Advanced"),
        ]);

        assert_eq!(catalog.get_by_slug("b").map(|c| c.slug.as_str()), Some("b"));
        assert!(catalog.get_by_slug("missing").is_none());
    }

    #[test]
    fn test_categories_distinct_and_sorted() {
        let catalog = Catalog::new(vec![
            course("a", "Safety", "Beginner"),
            course("b", "Finance", "Beginner"),
            course("c", "Finance", "Advanced"),
            course("d", "", "Advanced"),
        ]);

        assert_eq!(catalog.categories(), vec!["Finance", "Safety"]);
        assert_eq!(catalog.levels(), vec!["Advanced", "Beginner"]);
    }

    #[test]
    fn test_validate_slugs_detects_duplicates() {
        let catalog = Catalog::new(vec![
            course("a", "Finance", "Beginner"),
            course("a", "Safety", "Advanced"),
            course("b", "Safety", "Advanced"),
        ]);

        let duplicates = catalog.validate_slugs().unwrap_err();
        assert_eq!(duplicates, vec!["a".to_string()]);
    }

    #[test]
    fn test_validate_slugs_ok_when_unique() {
        let catalog = Catalog::new(vec![
            course("a", "Finance", "Beginner"),
            course("b", "Safety", "Advanced"),
        ]);

        assert!(catalog.validate_slugs().is_ok());
    }
}
