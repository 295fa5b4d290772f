//! Integration tests for catalog loading and derivation over the sample data

use course_catalog::core::data::parse_catalog_json;
use course_catalog::core::duration::{parse_duration_months, related_courses, RELATED_LIMIT};
use course_catalog::core::models::Catalog;
use course_catalog::core::search::{filter_courses, FilterEvent, FilterState};
use course_catalog::core::skills::{derive_skills, MAX_SKILLS};
use std::fs;
use tempfile::TempDir;

/// Path to the bundled sample catalog (relative to the crate root)
const SAMPLE_DATA: &str = "samples/catalog/courses.json";

fn load_sample() -> Catalog {
    parse_catalog_json(SAMPLE_DATA).expect("Failed to load sample catalog")
}

#[test]
fn test_sample_catalog_loads() {
    let catalog = load_sample();
    assert_eq!(catalog.len(), 6);
}

#[test]
fn test_lookup_by_slug() {
    let catalog = load_sample();

    let course = catalog
        .get_by_slug("fire-and-industrial-safety")
        .expect("Known slug should resolve");
    assert_eq!(course.title, "Fire and Industrial Safety Management");
    assert!(course.popular);

    assert!(catalog.get_by_slug("no-such-course").is_none());
}

#[test]
fn test_categories_and_levels_are_sorted_and_distinct() {
    let catalog = load_sample();

    assert_eq!(
        catalog.categories(),
        vec!["Engineering", "Management", "Safety"]
    );
    assert_eq!(
        catalog.levels(),
        vec!["Advanced", "Beginner", "Intermediate"]
    );
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let catalog = load_sample();
    let course = catalog
        .get_by_slug("construction-safety")
        .expect("Known slug should resolve");

    // No rating, instructor, or counts in the data file
    assert!((course.rating() - 4.8).abs() < f64::EPSILON);
    assert!((course.liked_percent() - 97.0).abs() < f64::EPSILON);
    assert_eq!(course.instructor(), "NIFASE Faculty");
    assert_eq!(course.schedule(), "Flexible schedule");
    assert_eq!(course.start_date_label(), "Starts soon");
    assert_eq!(course.review_count(), 0);
    assert_eq!(course.enrolled_count(), 0);
}

#[test]
fn test_explicit_fields_win_over_defaults() {
    let catalog = load_sample();
    let course = catalog
        .get_by_slug("safety-officer-diploma")
        .expect("Known slug should resolve");

    assert_eq!(course.start_date_label(), "Starts 1 Oct");
}

#[test]
fn test_duplicate_slugs_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("dupes.json");

    let json = r#"[
        {"id": "1", "slug": "same", "title": "First"},
        {"id": "2", "slug": "same", "title": "Second"}
    ]"#;
    fs::write(&path, json).expect("Failed to write test data");

    let err = parse_catalog_json(&path).expect_err("Duplicate slugs should fail");
    assert!(err.to_string().contains("same"));
}

#[test]
fn test_nonexistent_file_is_an_error() {
    assert!(parse_catalog_json("no/such/file.json").is_err());
}

#[test]
fn test_search_over_sample_data() {
    let catalog = load_sample();

    let state = FilterState::default()
        .apply_event(FilterEvent::SetQuery("scaffolding".to_string()));
    let results = filter_courses(catalog.courses(), &state);

    let slugs: Vec<&str> = results.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["construction-safety"]);
}

#[test]
fn test_filters_compose_over_sample_data() {
    let catalog = load_sample();

    let state = FilterState::default()
        .apply_event(FilterEvent::ToggleCategory("Safety".to_string()))
        .apply_event(FilterEvent::ToggleLevel("Beginner".to_string()));
    let results = filter_courses(catalog.courses(), &state);

    let slugs: Vec<&str> = results.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec!["fire-and-industrial-safety", "safety-officer-diploma"]
    );
}

#[test]
fn test_skills_derived_from_module_titles() {
    let catalog = load_sample();
    let course = catalog
        .get_by_slug("occupational-health-and-safety")
        .expect("Known slug should resolve");

    let skills = derive_skills(course);
    assert!(skills.len() <= MAX_SKILLS);
    assert!(skills.contains(&"Hazard Identification".to_string()));
    assert!(skills.contains(&"Risk Assessment".to_string()));
    // "Module N:" prefixes never survive into tags
    assert!(skills.iter().all(|s| !s.starts_with("Module")));
}

#[test]
fn test_explicit_skills_bypass_derivation() {
    let catalog = load_sample();
    let course = catalog
        .get_by_slug("disaster-management")
        .expect("Known slug should resolve");

    let skills = derive_skills(course);
    assert_eq!(
        skills,
        vec![
            "Disaster Mitigation",
            "Community Preparedness",
            "Crisis Communication"
        ]
    );
}

#[test]
fn test_duration_parsing_over_sample_data() {
    let catalog = load_sample();

    let months: Vec<f64> = catalog
        .courses()
        .iter()
        .map(|c| parse_duration_months(&c.duration))
        .collect();

    // 6 months, 8-12 weeks, 10 weeks, 12 months, 16 weeks, Flexible
    assert_eq!(months, vec![6.0, 3.0, 2.5, 12.0, 4.0, 0.0]);
}

#[test]
fn test_related_courses_are_duration_ranked() {
    let catalog = load_sample();

    let related = related_courses(catalog.courses(), "disaster-management", RELATED_LIMIT);
    let slugs: Vec<&str> = related.iter().map(|c| c.slug.as_str()).collect();

    // Longest first, excluding the course itself
    assert_eq!(
        slugs,
        vec![
            "environmental-safety-engineering",
            "fire-and-industrial-safety",
            "construction-safety"
        ]
    );
}
