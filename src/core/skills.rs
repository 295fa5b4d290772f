//! Skill tag derivation
//!
//! Courses without an explicit skills list get their tags derived from module
//! titles: the "Module N:" prefix and any parenthesized asides are stripped,
//! the remainder is split on common connectives, and the pieces are
//! deduplicated case-insensitively while preserving the original casing.
//! Output order is fully determined by module order, so rendering is
//! reproducible.

use crate::core::models::Course;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Maximum number of derived skill tags per course
pub const MAX_SKILLS: usize = 10;

/// Leading "Module <number>:" prefix on module titles
static MODULE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Module\s*\d+\s*:\s*").expect("valid module prefix pattern")
});

/// Parenthesized asides, removed before splitting
static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("valid parenthesized pattern"));

/// Connectives that separate individual skills within a title
static CONNECTIVES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)&|,|\band\b|\bvs\b|\bfor\b|\bto\b").expect("valid connective pattern")
});

/// Derive up to [`MAX_SKILLS`] skill tags for a course.
///
/// An explicit, non-empty `skills` list always wins and is returned
/// unchanged. Otherwise module titles are processed in order and the result
/// is capped at [`MAX_SKILLS`] across all modules, not per module. Modules
/// with empty or unusable titles contribute nothing and are skipped silently.
#[must_use]
pub fn derive_skills(course: &Course) -> Vec<String> {
    if !course.skills.is_empty() {
        return course.skills.clone();
    }

    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for module in &course.modules {
        let stripped = MODULE_PREFIX.replace(&module.title, "");
        let cleaned = PARENTHESIZED.replace_all(&stripped, "");

        for piece in CONNECTIVES.split(&cleaned) {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }

            // Dedup key is lowercased; the stored tag keeps its casing.
            if !seen.insert(piece.to_lowercase()) {
                continue;
            }

            result.push(piece.to_string());
            if result.len() >= MAX_SKILLS {
                return result;
            }
        }
    }

    result
}
