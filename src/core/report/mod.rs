//! Static page rendering for the catalog
//!
//! Renders the two site views (catalog grid and course detail) to Markdown or
//! HTML files from embedded templates. All view data is derived up front into
//! context structs so the format generators stay purely about markup.

pub mod formats;

use crate::core::duration::{related_courses, RELATED_LIMIT};
use crate::core::models::{Catalog, Course};
use crate::core::search::{filter_courses, FilterState};
use crate::core::skills::derive_skills;
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{HtmlPages, MarkdownPages, PageFormat};

/// Number of highlight bullets per course card
pub const CARD_HIGHLIGHTS: usize = 3;

/// Data context for the catalog (grid) view
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    /// The full catalog backing the view
    pub catalog: &'a Catalog,
    /// Search/filter state the view was computed from
    pub state: FilterState,
    /// Filtered courses in catalog order
    pub results: Vec<&'a Course>,
}

impl<'a> CatalogView<'a> {
    /// Compute the catalog view for a filter state
    #[must_use]
    pub fn new(catalog: &'a Catalog, state: FilterState) -> Self {
        let results = filter_courses(catalog.courses(), &state);
        Self {
            catalog,
            state,
            results,
        }
    }

    /// Number of courses passing the current filters
    #[must_use]
    pub const fn result_count(&self) -> usize {
        self.results.len()
    }
}

/// Data context for a single course detail view
#[derive(Debug, Clone)]
pub struct CourseView<'a> {
    /// The course being viewed
    pub course: &'a Course,
    /// Skill tags (explicit or derived)
    pub skills: Vec<String>,
    /// Cross-promoted courses, duration-ranked, excluding this course
    pub related: Vec<&'a Course>,
}

impl<'a> CourseView<'a> {
    /// Build the detail view for a course
    #[must_use]
    pub fn new(catalog: &'a Catalog, course: &'a Course) -> Self {
        let skills = derive_skills(course);
        let related = related_courses(catalog.courses(), &course.slug, RELATED_LIMIT);
        Self {
            course,
            skills,
            related,
        }
    }

    /// Build the detail view for a slug, or `None` when the slug is unknown
    #[must_use]
    pub fn for_slug(catalog: &'a Catalog, slug: &str) -> Option<Self> {
        catalog
            .get_by_slug(slug)
            .map(|course| Self::new(catalog, course))
    }
}

/// Trait for page generators
pub trait PageGenerator {
    /// Render the catalog view as page content
    fn render_catalog(&self, view: &CatalogView) -> String;

    /// Render a course detail view as page content
    fn render_course(&self, view: &CourseView) -> String;

    /// Render the catalog view and write it to a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    fn generate_catalog(&self, view: &CatalogView, output_path: &Path) -> Result<(), Box<dyn Error>> {
        fs::write(output_path, self.render_catalog(view))?;
        Ok(())
    }

    /// Render a course detail view and write it to a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    fn generate_course(&self, view: &CourseView, output_path: &Path) -> Result<(), Box<dyn Error>> {
        fs::write(output_path, self.render_course(view))?;
        Ok(())
    }
}
