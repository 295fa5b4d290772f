//! Core module for the catalog: data model, derivations, and rendering

pub mod config;
pub mod data;
pub mod duration;
pub mod models;
pub mod report;
pub mod search;
pub mod skills;
