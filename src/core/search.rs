//! Free-text search and filter composition
//!
//! The catalog view is driven by a small piece of pure state: a query string
//! plus category and level selections. State transitions go through an
//! explicit reducer ([`FilterState::apply_event`]) and the visible subset is
//! recomputed from scratch on every change, so there is no hidden mutable
//! state between queries.

use crate::core::models::Course;

/// Search/filter state for the catalog view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query (matched as a normalized substring)
    pub query: String,
    /// Selected category labels (empty = no category restriction)
    pub categories: Vec<String>,
    /// Selected level labels (empty = no level restriction)
    pub levels: Vec<String>,
}

/// A single user interaction with the catalog view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// Replace the free-text query
    SetQuery(String),
    /// Toggle a category selection (add if absent, remove if present)
    ToggleCategory(String),
    /// Toggle a level selection (add if absent, remove if present)
    ToggleLevel(String),
    /// Reset the query and both selection sets
    Clear,
}

impl FilterState {
    /// Pure reducer: fold one event into the state, returning the new state
    #[must_use]
    pub fn apply_event(mut self, event: FilterEvent) -> Self {
        match event {
            FilterEvent::SetQuery(query) => self.query = query,
            FilterEvent::ToggleCategory(category) => toggle(&mut self.categories, category),
            FilterEvent::ToggleLevel(level) => toggle(&mut self.levels, level),
            FilterEvent::Clear => {
                self.query.clear();
                self.categories.clear();
                self.levels.clear();
            }
        }
        self
    }

    /// Whether no query or selection is active (the identity filter)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.categories.is_empty() && self.levels.is_empty()
    }
}

/// Idempotent toggle: remove the value when present, append it otherwise
fn toggle(list: &mut Vec<String>, value: String) {
    if let Some(position) = list.iter().position(|v| *v == value) {
        list.remove(position);
    } else {
        list.push(value);
    }
}

/// Case-fold and trim a text fragment for matching
#[must_use]
pub fn normalize(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}

/// Build the normalized haystack for a course: title, description, category,
/// level, duration, skills, then module titles and items, space-joined with
/// empty fragments omitted
#[must_use]
pub fn search_text(course: &Course) -> String {
    let mut parts: Vec<&str> = vec![
        &course.title,
        &course.short_description,
        &course.category,
        &course.level,
        &course.duration,
    ];

    parts.extend(course.skills.iter().map(String::as_str));

    for module in &course.modules {
        parts.push(&module.title);
        parts.extend(module.items.iter().map(String::as_str));
    }

    parts.retain(|part| !part.is_empty());
    normalize(&parts.join(" "))
}

/// Whether a course matches a free-text query.
///
/// An empty (or whitespace-only) query matches everything; otherwise the
/// normalized query must be a substring of [`search_text`]. Substring match
/// only — no tokenization or ranking.
#[must_use]
pub fn matches_query(course: &Course, query: &str) -> bool {
    let query = normalize(query);
    query.is_empty() || search_text(course).contains(&query)
}

/// Filter the catalog against the current state, preserving input order.
///
/// A course passes when every active restriction passes: selected categories
/// (OR within the set), selected levels (OR within the set), and the query.
#[must_use]
pub fn filter_courses<'a>(courses: &'a [Course], state: &FilterState) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|course| {
            if !state.categories.is_empty() && !state.categories.contains(&course.category) {
                return false;
            }
            if !state.levels.is_empty() && !state.levels.contains(&course.level) {
                return false;
            }
            matches_query(course, &state.query)
        })
        .collect()
}
