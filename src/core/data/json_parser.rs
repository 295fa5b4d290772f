//! JSON parser for catalog data
//!
//! The catalog is a JSON array of course records with camelCase keys, the
//! same shape the original static site ships. Missing optional fields fall
//! back to serde defaults; numeric display fields are defaulted lazily by
//! the [`Course`](crate::core::models::Course) accessors instead of at parse
//! time, so the raw data survives a round-trip.

use crate::core::models::{Catalog, Course};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a catalog JSON file and return the validated course list
///
/// # Arguments
/// * `path` - Path to the JSON file (an array of course objects)
///
/// # Returns
/// A [`Catalog`] preserving the input order of the courses
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid JSON for the
/// expected schema, or contains duplicate slugs
pub fn parse_catalog_json<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let content = fs::read_to_string(&path)?;
    parse_catalog_str(&content)
}

/// Parse catalog JSON from an in-memory string
///
/// # Errors
/// Returns an error if the JSON does not match the course schema or
/// contains duplicate slugs
pub fn parse_catalog_str(content: &str) -> Result<Catalog, Box<dyn Error>> {
    let courses: Vec<Course> = serde_json::from_str(content)?;
    let catalog = Catalog::new(courses);

    catalog
        .validate_slugs()
        .map_err(|duplicates| format!("Duplicate course slugs: {}", duplicates.join(", ")))?;

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_course() {
        let json = r#"[
            { "id": "1", "slug": "intro", "title": "Intro Course" }
        ]"#;

        let catalog = parse_catalog_str(json).expect("minimal course should parse");
        assert_eq!(catalog.len(), 1);

        let course = catalog.get_by_slug("intro").unwrap();
        assert_eq!(course.title, "Intro Course");
        assert!(course.modules.is_empty());
        assert!(course.skills.is_empty());
        assert!(!course.popular);
        assert_eq!(course.review_count(), 0);
    }

    #[test]
    fn test_parse_camel_case_fields() {
        let json = r#"[
            {
                "id": "1",
                "slug": "full",
                "title": "Full Course",
                "shortDescription": "All fields set",
                "startDateLabel": "Starts March 1",
                "reviewCount": 120,
                "likedPercent": 93,
                "enrolledCount": 4500,
                "modules": [
                    { "title": "Module 1: Basics", "items": ["One", "Two"] }
                ],
                "popular": true
            }
        ]"#;

        let catalog = parse_catalog_str(json).expect("full course should parse");
        let course = catalog.get_by_slug("full").unwrap();

        assert_eq!(course.short_description, "All fields set");
        assert_eq!(course.start_date_label(), "Starts March 1");
        assert_eq!(course.review_count(), 120);
        assert_eq!(course.enrolled_count(), 4500);
        assert_eq!(course.module_count(), 1);
        assert!(course.popular);
    }

    #[test]
    fn test_duplicate_slugs_rejected() {
        let json = r#"[
            { "id": "1", "slug": "same", "title": "A" },
            { "id": "2", "slug": "same", "title": "B" }
        ]"#;

        let err = parse_catalog_str(json).unwrap_err();
        assert!(err.to_string().contains("same"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(parse_catalog_str("not json").is_err());
        assert!(parse_catalog_str(r#"{ "id": "1" }"#).is_err());
    }

    #[test]
    fn test_nonexistent_file_is_an_error() {
        assert!(parse_catalog_json("samples/catalog/nonexistent.json").is_err());
    }
}
