//! HTML page generator
//!
//! Generates self-contained HTML pages with embedded CSS for the catalog grid
//! and the course detail view.

use crate::core::models::Course;
use crate::core::report::{CatalogView, CourseView, PageGenerator, CARD_HIGHLIGHTS};
use crate::core::search::FilterState;
use std::fmt::Write;

/// Embedded HTML catalog template
const CATALOG_TEMPLATE: &str = include_str!("../templates/catalog.html");

/// Embedded HTML course detail template
const COURSE_TEMPLATE: &str = include_str!("../templates/course.html");

/// HTML page generator
pub struct HtmlPages;

impl HtmlPages {
    /// Create a new HTML page generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render a single course card as an `<article>`
    fn generate_card(course: &Course) -> String {
        let mut card = String::new();

        let _ = writeln!(card, "    <article class=\"card\">");
        if course.popular {
            let _ = writeln!(card, "      <span class=\"badge popular\">Popular</span>");
        }
        let _ = writeln!(
            card,
            "      <div><span class=\"badge\">{}</span><span class=\"badge\">{}</span></div>",
            escape(&course.level),
            escape(&course.duration)
        );
        let _ = writeln!(card, "      <div class=\"meta\">{}</div>", escape(&course.category));
        let _ = writeln!(card, "      <h2>{}</h2>", escape(&course.title));
        let _ = writeln!(
            card,
            "      <p class=\"desc\">{}</p>",
            escape(&course.short_description)
        );

        let highlights = course.highlights(CARD_HIGHLIGHTS);
        if !highlights.is_empty() {
            let _ = writeln!(card, "      <ul class=\"highlights\">");
            for highlight in highlights {
                let _ = writeln!(card, "        <li>{}</li>", escape(highlight));
            }
            let _ = writeln!(card, "      </ul>");
        }

        let _ = writeln!(
            card,
            "      <div class=\"actions\"><span>{} modules</span> <a class=\"button\" href=\"{}.html\">View Details</a></div>",
            course.module_count(),
            course.slug
        );
        let _ = writeln!(card, "    </article>");

        card
    }

    /// Summarize active filters for the catalog header, empty when none
    fn filter_summary(state: &FilterState) -> String {
        if state.is_empty() {
            return String::new();
        }

        let mut parts = Vec::new();
        if !state.query.trim().is_empty() {
            parts.push(format!("query \"{}\"", escape(state.query.trim())));
        }
        if !state.categories.is_empty() {
            parts.push(format!("categories: {}", escape(&state.categories.join(", "))));
        }
        if !state.levels.is_empty() {
            parts.push(format!("levels: {}", escape(&state.levels.join(", "))));
        }

        format!(" — filtered by {}", parts.join("; "))
    }

    /// Render the skill chips block, empty when no skills exist
    fn skills_section(skills: &[String]) -> String {
        if skills.is_empty() {
            return String::new();
        }

        let mut section = String::from("    <h2>Skills you'll gain</h2>\n    <div class=\"skills\">\n");
        for skill in skills {
            let _ = writeln!(section, "      <span>{}</span>", escape(skill));
        }
        section.push_str("    </div>");
        section
    }

    /// Render the module accordion as `<details>` elements
    fn module_list(course: &Course) -> String {
        let mut list = String::new();

        for module in &course.modules {
            let _ = writeln!(list, "    <details>");
            let _ = writeln!(list, "      <summary>{}</summary>", escape(&module.title));
            if !module.items.is_empty() {
                let _ = writeln!(list, "      <ul>");
                for item in &module.items {
                    let _ = writeln!(list, "        <li>{}</li>", escape(item));
                }
                let _ = writeln!(list, "      </ul>");
            }
            let _ = writeln!(list, "    </details>");
        }

        list
    }

    /// Render the related-courses strip, empty when there is nothing to show
    fn related_section(related: &[&Course]) -> String {
        if related.is_empty() {
            return String::new();
        }

        let mut section = String::from(
            "  <section aria-label=\"Explore courses\">\n    <h2>Explore Courses</h2>\n    <p class=\"meta\">Top programs with the longest duration.</p>\n    <div class=\"grid\">\n",
        );
        for course in related {
            section.push_str(&Self::generate_card(course));
        }
        section.push_str("    </div>\n  </section>");
        section
    }
}

/// Minimal HTML escaping for text nodes and attribute values
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl Default for HtmlPages {
    fn default() -> Self {
        Self::new()
    }
}

impl PageGenerator for HtmlPages {
    fn render_catalog(&self, view: &CatalogView) -> String {
        let mut cards = String::new();
        for course in &view.results {
            cards.push_str(&Self::generate_card(course));
        }

        CATALOG_TEMPLATE
            .replace("{{result_count}}", &view.result_count().to_string())
            .replace("{{filter_summary}}", &Self::filter_summary(&view.state))
            .replace("{{course_cards}}", cards.trim_end())
    }

    fn render_course(&self, view: &CourseView) -> String {
        let course = view.course;

        let initials = course.instructor_initials();
        let initials = if initials.is_empty() {
            "NF".to_string()
        } else {
            initials
        };

        let reviews = course.formatted_reviews();
        let reviews = if reviews.is_empty() {
            "Rating".to_string()
        } else {
            escape(&reviews)
        };

        COURSE_TEMPLATE
            .replace("{{title}}", &escape(&course.title))
            .replace("{{category}}", &escape(&course.category))
            .replace("{{initials}}", &escape(&initials))
            .replace("{{instructor}}", &escape(course.instructor()))
            .replace("{{start_date_label}}", &escape(course.start_date_label()))
            .replace("{{enrolled}}", &escape(&course.formatted_enrolled()))
            .replace("{{module_count}}", &course.module_count().to_string())
            .replace("{{rating}}", &course.formatted_rating())
            .replace("{{reviews}}", &reviews)
            .replace("{{level}}", &escape(&course.level))
            .replace("{{schedule}}", &escape(course.schedule()))
            .replace("{{liked_percent}}", &format!("{:.0}", course.liked_percent()))
            .replace("{{short_description}}", &escape(&course.short_description))
            .replace("{{skills_section}}", &Self::skills_section(&view.skills))
            .replace("{{module_list}}", &Self::module_list(course))
            .replace("{{related_section}}", &Self::related_section(&view.related))
    }
}
