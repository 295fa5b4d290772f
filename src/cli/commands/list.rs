//! List command handler
//!
//! Loads the catalog, folds the CLI filter flags into a filter state, and
//! prints one line per matching course.

use course_catalog::config::Config;
use course_catalog::core::search::{filter_courses, FilterEvent, FilterState};
use course_catalog::info;
use std::path::Path;

/// Run the list command.
///
/// # Arguments
/// * `query` - Optional free-text query
/// * `categories` - Category selections (OR within the set)
/// * `levels` - Level selections (OR within the set)
/// * `data` - Optional catalog file override
/// * `config` - Configuration containing the default data file
/// * `verbose` - Print available filter labels and per-course module counts
pub fn run(
    query: Option<String>,
    categories: Vec<String>,
    levels: Vec<String>,
    data: Option<&Path>,
    config: &Config,
    verbose: bool,
) {
    let catalog = super::load_catalog(data, config);
    info!("Catalog loaded: {} courses", catalog.len());

    if verbose {
        println!("Categories: {}", catalog.categories().join(", "));
        println!("Levels: {}", catalog.levels().join(", "));
    }

    let mut state = FilterState::default();
    if let Some(query) = query {
        state = state.apply_event(FilterEvent::SetQuery(query));
    }
    for category in categories {
        state = state.apply_event(FilterEvent::ToggleCategory(category));
    }
    for level in levels {
        state = state.apply_event(FilterEvent::ToggleLevel(level));
    }

    let results = filter_courses(catalog.courses(), &state);
    println!("{} of {} courses", results.len(), catalog.len());

    for course in results {
        println!(
            "  {:<28} {:<14} {:<12} {}",
            course.slug, course.category, course.level, course.duration
        );
        if verbose {
            println!(
                "    {} modules · {}",
                course.module_count(),
                course.title
            );
        }
    }
}
