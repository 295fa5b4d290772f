//! Duration parsing and related-course ranking
//!
//! Course durations are free text ("6 months", "8-12 weeks", "Flexible").
//! For ranking related courses they are normalized to months through an
//! ordered rule table evaluated first-match-wins. The normalization is lossy
//! and only ever used as a sort key, never shown to the user.

use crate::core::models::Course;
use regex::{Captures, Regex};
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Default number of related courses shown on a detail page
pub const RELATED_LIMIT: usize = 3;

/// Extractor applied to a matched duration pattern
type Extract = fn(&Captures) -> f64;

/// Ordered (pattern, extractor) rules; the first matching pattern decides
static RULES: LazyLock<Vec<(Regex, Extract)>> = LazyLock::new(|| {
    vec![
        // "<number> month(s)", integer or decimal
        (
            Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*months?").expect("valid months pattern"),
            months,
        ),
        // "<int>-<int> week(s)", hyphen or en-dash; ranked by the upper bound
        (
            Regex::new(r"(?i)(\d+)\s*[–-]\s*(\d+)\s*weeks?").expect("valid week range pattern"),
            week_range,
        ),
        // "<int> week(s)"
        (
            Regex::new(r"(?i)(\d+)\s*weeks?").expect("valid weeks pattern"),
            weeks,
        ),
    ]
});

fn months(caps: &Captures) -> f64 {
    finite_or_zero(caps[1].parse().unwrap_or(0.0))
}

fn week_range(caps: &Captures) -> f64 {
    let low: f64 = caps[1].parse().unwrap_or(0.0);
    let high: f64 = caps[2].parse().unwrap_or(0.0);
    finite_or_zero(low.max(high) / 4.0)
}

fn weeks(caps: &Captures) -> f64 {
    let count: f64 = caps[1].parse().unwrap_or(0.0);
    finite_or_zero(count / 4.0)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Parse a free-text duration into an estimated number of months.
///
/// Returns 0 when no rule matches (e.g., "Flexible").
#[must_use]
pub fn parse_duration_months(text: &str) -> f64 {
    for (pattern, extract) in RULES.iter() {
        if let Some(caps) = pattern.captures(text) {
            return extract(&caps);
        }
    }
    0.0
}

/// Pick the related courses for a detail page: every course except the one
/// being viewed, sorted descending by estimated duration, truncated to
/// `limit`. The sort is stable, so equal durations keep catalog order.
#[must_use]
pub fn related_courses<'a>(
    courses: &'a [Course],
    exclude_slug: &str,
    limit: usize,
) -> Vec<&'a Course> {
    let mut ranked: Vec<(f64, &Course)> = courses
        .iter()
        .filter(|c| c.slug != exclude_slug)
        .map(|c| (parse_duration_months(&c.duration), c))
        .collect();

    ranked.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    ranked.truncate(limit);
    ranked.into_iter().map(|(_, course)| course).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_pattern() {
        assert!((parse_duration_months("6 months") - 6.0).abs() < f64::EPSILON);
        assert!((parse_duration_months("1 month") - 1.0).abs() < f64::EPSILON);
        assert!((parse_duration_months("4.5 months") - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_week_range_uses_upper_bound() {
        assert!((parse_duration_months("8-12 weeks") - 3.0).abs() < f64::EPSILON);
        // en-dash form
        assert!((parse_duration_months("8–12 weeks") - 3.0).abs() < f64::EPSILON);
        // reversed bounds still take the max
        assert!((parse_duration_months("12-8 weeks") - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_weeks_pattern() {
        assert!((parse_duration_months("10 weeks") - 2.5).abs() < f64::EPSILON);
        assert!((parse_duration_months("1 week") - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_months_rule_wins_over_weeks() {
        // first-match-wins: the months rule has priority
        assert!((parse_duration_months("2 months or 10 weeks") - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unparseable_duration_is_zero() {
        assert!(parse_duration_months("flexible").abs() < f64::EPSILON);
        assert!(parse_duration_months("").abs() < f64::EPSILON);
    }

    fn course(slug: &str, duration: &str) -> Course {
        Course {
            id: slug.to_string(),
            slug: slug.to_string(),
            title: slug.to_string(),
            short_description: String::new(),
            category: String::new(),
            level: String::new(),
            duration: duration.to_string(),
            image: String::new(),
            instructor: None,
            schedule: None,
            start_date_label: None,
            rating: None,
            review_count: None,
            liked_percent: None,
            enrolled_count: None,
            skills: Vec::new(),
            modules: Vec::new(),
            popular: false,
        }
    }

    #[test]
    fn test_related_excludes_viewed_course_and_ranks_by_duration() {
        let courses = vec![
            course("short", "4 weeks"),
            course("viewed", "12 months"),
            course("long", "9 months"),
            course("medium", "8-12 weeks"),
        ];

        let related = related_courses(&courses, "viewed", RELATED_LIMIT);
        let slugs: Vec<&str> = related.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["long", "medium", "short"]);
    }

    #[test]
    fn test_related_respects_limit() {
        let courses = vec![
            course("a", "1 month"),
            course("b", "2 months"),
            course("c", "3 months"),
            course("d", "4 months"),
        ];

        assert_eq!(related_courses(&courses, "none", 2).len(), 2);
    }

    #[test]
    fn test_related_ties_keep_catalog_order() {
        let courses = vec![
            course("first", "flexible"),
            course("second", "self paced"),
            course("third", "open enrollment"),
        ];

        let related = related_courses(&courses, "none", RELATED_LIMIT);
        let slugs: Vec<&str> = related.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["first", "second", "third"]);
    }
}
