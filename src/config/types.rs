//! Configuration types for the employee administration backend.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::calculation::PeriodBounds;
use crate::models::{AdminAccount, NewEmployee, Position};

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

/// Metadata about the deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct AppMetadata {
    /// Display name of the application.
    pub name: String,
    /// Organisation the records belong to.
    #[serde(default)]
    pub organisation: Option<String>,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the API listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Structure of `app.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppFile {
    /// Deployment metadata.
    pub app: AppMetadata,
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Navigable year range.
    #[serde(default)]
    pub period: PeriodBounds,
}

/// Structure of `seed.yaml`: initial contents of the in-memory store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// Admin accounts allowed to sign in.
    #[serde(default)]
    pub admins: Vec<AdminAccount>,
    /// Position master table.
    #[serde(default)]
    pub positions: Vec<Position>,
    /// Employees, inserted in order.
    #[serde(default)]
    pub employees: Vec<NewEmployee>,
}

/// The complete application configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment metadata.
    metadata: AppMetadata,
    /// Server settings.
    server: ServerConfig,
    /// Navigable year range.
    period: PeriodBounds,
    /// Initial store contents.
    seed: SeedConfig,
}

impl AppConfig {
    /// Creates a new AppConfig from its component parts.
    pub fn new(
        metadata: AppMetadata,
        server: ServerConfig,
        period: PeriodBounds,
        seed: SeedConfig,
    ) -> Self {
        Self {
            metadata,
            server,
            period,
            seed,
        }
    }

    /// Returns the deployment metadata.
    pub fn metadata(&self) -> &AppMetadata {
        &self.metadata
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns the navigable year range.
    pub fn period(&self) -> PeriodBounds {
        self.period
    }

    /// Returns the initial store contents.
    pub fn seed(&self) -> &SeedConfig {
        &self.seed
    }
}
