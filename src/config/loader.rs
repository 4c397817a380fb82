//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! application configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::calculation::PeriodBounds;
use crate::error::{AppError, AppResult};

use super::types::{AppConfig, AppFile, SeedConfig};

/// Loads and provides access to the application configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── app.yaml    # Metadata, server address, navigable years (required)
/// └── seed.yaml   # Admins, positions and employees for the store (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_admin::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded: {}", loader.config().metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `app.yaml` is missing
    /// - any file contains invalid YAML
    /// - the navigable year range is empty
    pub fn load<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();

        let app_path = path.join("app.yaml");
        let app = Self::load_yaml::<AppFile>(&app_path)?;

        // Re-check through the constructor; serde alone accepts min > max.
        let period = PeriodBounds::new(app.period.min_year, app.period.max_year)?;

        let seed_path = path.join("seed.yaml");
        let seed = if seed_path.exists() {
            Self::load_yaml::<SeedConfig>(&seed_path)?
        } else {
            debug!(path = %seed_path.display(), "No seed file, starting with an empty store");
            SeedConfig::default()
        };

        info!(
            name = %app.app.name,
            min_year = period.min_year,
            max_year = period.max_year,
            admins = seed.admins.len(),
            positions = seed.positions.len(),
            employees = seed.employees.len(),
            "Configuration loaded"
        );

        Ok(Self {
            config: AppConfig::new(app.app, app.server, period, seed),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> AppResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AppError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the navigable year range.
    pub fn period_bounds(&self) -> PeriodBounds {
        self.config.period()
    }
}
