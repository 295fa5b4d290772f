//! CLI command handlers

pub mod config;
pub mod list;
pub mod render;
pub mod show;

use course_catalog::config::Config;
use course_catalog::core::data::parse_catalog_json;
use course_catalog::core::models::Catalog;
use course_catalog::error;
use std::path::{Path, PathBuf};

/// Resolve the catalog data file: CLI flag wins, otherwise config `data_file`
pub fn resolve_data_file(data: Option<&Path>, config: &Config) -> PathBuf {
    data.map_or_else(
        || PathBuf::from(&config.catalog.data_file),
        Path::to_path_buf,
    )
}

/// Load the catalog from the resolved data file, exiting on failure
pub fn load_catalog(data: Option<&Path>, config: &Config) -> Catalog {
    let data_file = resolve_data_file(data, config);
    match parse_catalog_json(&data_file) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog {}: {e}", data_file.display());
            eprintln!("✗ Failed to load {}: {e}", data_file.display());
            std::process::exit(1);
        }
    }
}
