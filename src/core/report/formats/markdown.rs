//! Markdown page generator
//!
//! Generates catalog and course detail pages in Markdown format. These pages
//! render well in GitHub, GitLab, and VS Code.

use crate::core::report::{CatalogView, CourseView, PageGenerator, CARD_HIGHLIGHTS};
use crate::core::models::Course;
use crate::core::search::FilterState;
use std::fmt::Write;

/// Embedded Markdown catalog template
const CATALOG_TEMPLATE: &str = include_str!("../templates/catalog.md");

/// Embedded Markdown course detail template
const COURSE_TEMPLATE: &str = include_str!("../templates/course.md");

/// Markdown page generator
pub struct MarkdownPages;

impl MarkdownPages {
    /// Create a new Markdown page generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render a single course card
    fn generate_card(course: &Course) -> String {
        let mut card = String::new();

        let _ = writeln!(card, "## {}", course.title);
        card.push('\n');

        let mut badges = format!("`{}` · `{}` · {}", course.level, course.duration, course.category);
        if course.popular {
            badges.push_str(" · **Popular**");
        }
        let _ = writeln!(card, "{badges}");
        card.push('\n');

        let _ = writeln!(card, "{}", course.short_description);

        let highlights = course.highlights(CARD_HIGHLIGHTS);
        if !highlights.is_empty() {
            card.push('\n');
            for highlight in highlights {
                let _ = writeln!(card, "- {highlight}");
            }
        }

        card.push('\n');
        let _ = writeln!(
            card,
            "_{} modules_ · [View details]({}.md)",
            course.module_count(),
            course.slug
        );

        card
    }

    /// Summarize active filters for the catalog header, empty when none
    fn filter_summary(state: &FilterState) -> String {
        if state.is_empty() {
            return String::new();
        }

        let mut parts = Vec::new();
        if !state.query.trim().is_empty() {
            parts.push(format!("query \"{}\"", state.query.trim()));
        }
        if !state.categories.is_empty() {
            parts.push(format!("categories: {}", state.categories.join(", ")));
        }
        if !state.levels.is_empty() {
            parts.push(format!("levels: {}", state.levels.join(", ")));
        }

        format!(" — filtered by {}", parts.join("; "))
    }

    /// Render the "Skills you'll gain" section, empty when no skills exist
    fn skills_section(skills: &[String]) -> String {
        if skills.is_empty() {
            return String::new();
        }

        let mut section = String::from("\n## Skills you'll gain\n\n");
        for skill in skills {
            let _ = writeln!(section, "- {skill}");
        }
        section
    }

    /// Render the module accordion as nested lists
    fn module_list(course: &Course) -> String {
        let mut list = String::new();

        for module in &course.modules {
            let _ = writeln!(list, "### {}", module.title);
            if !module.items.is_empty() {
                list.push('\n');
                for item in &module.items {
                    let _ = writeln!(list, "- {item}");
                }
            }
            list.push('\n');
        }

        list
    }

    /// Render the related-courses strip, empty when there is nothing to show
    fn related_section(related: &[&Course]) -> String {
        if related.is_empty() {
            return String::new();
        }

        let mut section = String::from("\n## Explore Courses\n\n");
        section.push_str("Top programs with the longest duration.\n\n");
        for course in related {
            section.push_str(&Self::generate_card(course));
            section.push('\n');
        }
        section
    }
}

impl Default for MarkdownPages {
    fn default() -> Self {
        Self::new()
    }
}

impl PageGenerator for MarkdownPages {
    fn render_catalog(&self, view: &CatalogView) -> String {
        let mut cards = String::new();
        for course in &view.results {
            cards.push_str(&Self::generate_card(course));
            cards.push('\n');
        }

        CATALOG_TEMPLATE
            .replace("{{result_count}}", &view.result_count().to_string())
            .replace("{{filter_summary}}", &Self::filter_summary(&view.state))
            .replace("{{course_cards}}", cards.trim_end())
    }

    fn render_course(&self, view: &CourseView) -> String {
        let course = view.course;

        let enrolled = course.formatted_enrolled();
        let enrolled_line = if enrolled.is_empty() {
            String::new()
        } else {
            format!("\n\n_{enrolled}_")
        };

        COURSE_TEMPLATE
            .replace("{{title}}", &course.title)
            .replace("{{category}}", &course.category)
            .replace("{{instructor}}", course.instructor())
            .replace("{{start_date_label}}", course.start_date_label())
            .replace("{{enrolled_line}}", &enrolled_line)
            .replace("{{module_count}}", &course.module_count().to_string())
            .replace("{{rating}}", &course.formatted_rating())
            .replace("{{reviews}}", &course.formatted_reviews())
            .replace("{{level}}", &course.level)
            .replace("{{schedule}}", course.schedule())
            .replace("{{liked_percent}}", &format!("{:.0}", course.liked_percent()))
            .replace("{{short_description}}", &course.short_description)
            .replace("{{skills_section}}", &Self::skills_section(&view.skills))
            .replace("{{module_list}}", &Self::module_list(course))
            .replace("{{related_section}}", &Self::related_section(&view.related))
    }
}
