//! Static data loading for the catalog

pub mod json_parser;

pub use json_parser::parse_catalog_json;
