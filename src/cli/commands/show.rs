//! Show command handler
//!
//! Prints the full detail view for one course: header, stats, skill tags,
//! module syllabus, and related courses.

use course_catalog::config::Config;
use course_catalog::core::report::CourseView;
use course_catalog::error;
use std::path::Path;

/// Run the show command.
///
/// # Arguments
/// * `slug` - Course slug to look up
/// * `data` - Optional catalog file override
/// * `config` - Configuration containing the default data file
pub fn run(slug: &str, data: Option<&Path>, config: &Config) {
    let catalog = super::load_catalog(data, config);

    let Some(view) = CourseView::for_slug(&catalog, slug) else {
        error!("Course not found: {slug}");
        eprintln!("✗ Course not found: {slug}");
        std::process::exit(1);
    };

    let course = view.course;

    println!("{}", course.title);
    println!("{} · {} · {}", course.category, course.level, course.duration);
    if course.popular {
        println!("Popular");
    }
    println!();
    println!("Instructor: {}", course.instructor());
    println!("Enroll now — {}", course.start_date_label());
    let enrolled = course.formatted_enrolled();
    if !enrolled.is_empty() {
        println!("{enrolled}");
    }
    println!();
    println!(
        "{} modules · {} ★ {} · {} · {}% liked",
        course.module_count(),
        course.formatted_rating(),
        course.formatted_reviews(),
        course.schedule(),
        course.liked_percent()
    );
    println!();
    println!("{}", course.short_description);

    if !view.skills.is_empty() {
        println!("\nSkills you'll gain:");
        for skill in &view.skills {
            println!("  - {skill}");
        }
    }

    if !course.modules.is_empty() {
        println!("\nModules:");
        for module in &course.modules {
            println!("  {}", module.title);
            for item in &module.items {
                println!("    - {item}");
            }
        }
    }

    if !view.related.is_empty() {
        println!("\nExplore Courses:");
        for related in &view.related {
            println!("  {:<28} {}", related.slug, related.duration);
        }
    }
}
