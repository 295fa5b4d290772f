//! Shared library for the course catalog
//! Contains the catalog data model, derivation pipeline, and page rendering
//! used by the CLI.

pub mod core;
pub mod logger;

pub use self::core::config;
