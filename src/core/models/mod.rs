//! Data models for the course catalog

pub mod catalog;
pub mod course;

pub use catalog::Catalog;
pub use course::{Course, Module};
