//! Configuration loading and management.
//!
//! This module loads the application configuration from YAML files: the
//! server address, the navigable year range, and the seed data for the
//! in-memory store.
//!
//! # Example
//!
//! ```no_run
//! use employee_admin::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Navigable from {}", config.period_bounds().min_year);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, AppFile, AppMetadata, SeedConfig, ServerConfig};
