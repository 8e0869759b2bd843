//! DigiUrban service-catalog seeder.
//!
//! Loads a candidate catalog of municipal service templates (bundled
//! per-department JSON files, falling back to an embedded list), reconciles it
//! into a tenant-scoped store with idempotent upserts, and reports the run.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod log;
pub mod prelude;
pub mod reconcile;
pub mod report;

pub use crate::log::setup_logging;

pub static DEFAULT_CONFIG_FILE: &str = "digiurban.json";
