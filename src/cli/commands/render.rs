//! Render command handler
//!
//! Writes the catalog index page plus per-course detail pages to an output
//! directory in the requested format.

use course_catalog::config::Config;
use course_catalog::core::report::{
    CatalogView, CourseView, HtmlPages, MarkdownPages, PageFormat, PageGenerator,
};
use course_catalog::core::search::FilterState;
use course_catalog::core::models::Catalog;
use course_catalog::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the render command.
///
/// # Arguments
/// * `slugs` - Course slugs to render (all courses when empty)
/// * `format_str` - Page format (markdown, html)
/// * `output_dir` - Optional output directory override
/// * `data` - Optional catalog file override
/// * `config` - Configuration containing default paths
pub fn run(
    slugs: &[String],
    format_str: &str,
    output_dir: Option<&Path>,
    data: Option<&Path>,
    config: &Config,
) {
    if let Err(err) = generate_pages(slugs, format_str, output_dir, data, config) {
        error!("Page rendering failed: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Render and write all requested pages
fn generate_pages(
    slugs: &[String],
    format_str: &str,
    output_dir: Option<&Path>,
    data: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let format = PageFormat::from_str(format_str)
        .map_err(|_| format!("✗ Unknown page format: '{format_str}' (expected markdown or html)"))?;

    let catalog = super::load_catalog(data, config);
    info!("Catalog loaded: {} courses", catalog.len());

    // Validate requested slugs before writing anything
    for slug in slugs {
        if catalog.get_by_slug(slug).is_none() {
            return Err(format!("✗ Course not found: {slug}"));
        }
    }

    let pages_dir = output_dir.map_or_else(
        || PathBuf::from(&config.paths.pages_dir),
        Path::to_path_buf,
    );
    std::fs::create_dir_all(&pages_dir)
        .map_err(|e| format!("✗ Failed to create pages directory {}: {e}", pages_dir.display()))?;

    let generator: Box<dyn PageGenerator> = match format {
        PageFormat::Markdown => Box::new(MarkdownPages::new()),
        PageFormat::Html => Box::new(HtmlPages::new()),
    };

    write_catalog_page(&catalog, generator.as_ref(), &pages_dir, format)?;

    let targets: Vec<&str> = if slugs.is_empty() {
        catalog.courses().iter().map(|c| c.slug.as_str()).collect()
    } else {
        slugs.iter().map(String::as_str).collect()
    };

    for slug in targets {
        write_course_page(&catalog, generator.as_ref(), &pages_dir, format, slug)?;
    }

    Ok(())
}

/// Write the catalog index page
fn write_catalog_page(
    catalog: &Catalog,
    generator: &dyn PageGenerator,
    pages_dir: &Path,
    format: PageFormat,
) -> Result<(), String> {
    let view = CatalogView::new(catalog, FilterState::default());
    let path = pages_dir.join(format!("catalog.{}", format.extension()));

    generator
        .generate_catalog(&view, &path)
        .map_err(|e| format!("✗ Failed to write {}: {e}", path.display()))?;

    println!("✓ Page generated: {}", path.display());
    Ok(())
}

/// Write one course detail page
fn write_course_page(
    catalog: &Catalog,
    generator: &dyn PageGenerator,
    pages_dir: &Path,
    format: PageFormat,
    slug: &str,
) -> Result<(), String> {
    // Slugs were validated up front
    let Some(view) = CourseView::for_slug(catalog, slug) else {
        return Err(format!("✗ Course not found: {slug}"));
    };
    let path = pages_dir.join(format!("{slug}.{}", format.extension()));

    generator
        .generate_course(&view, &path)
        .map_err(|e| format!("✗ Failed to write {}: {e}", path.display()))?;

    println!("✓ Page generated: {}", path.display());
    Ok(())
}
