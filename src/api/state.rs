//! Application state for the employee administration API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;

use crate::calculation::PeriodNavigator;
use crate::config::ConfigLoader;
use crate::error::AppResult;
use crate::session::Session;
use crate::store::{DataStore, InMemoryStore};

/// Shared application state.
///
/// Holds the loaded configuration and the single admin session. The session
/// sits behind a mutex so actions run one at a time.
#[derive(Clone)]
pub struct AppState {
    /// The loaded configuration.
    config: Arc<ConfigLoader>,
    /// The admin session.
    session: Arc<Mutex<Session>>,
}

impl AppState {
    /// Creates state over `store`, with the period cursor on the month of
    /// `today`.
    pub fn new(config: ConfigLoader, store: Arc<dyn DataStore>, today: NaiveDate) -> Self {
        let navigator = PeriodNavigator::starting_at(today, config.period_bounds());
        Self {
            config: Arc::new(config),
            session: Arc::new(Mutex::new(Session::new(store, navigator))),
        }
    }

    /// Creates state over an in-memory store seeded from the configuration.
    pub fn seeded(config: ConfigLoader, today: NaiveDate) -> AppResult<Self> {
        let store = InMemoryStore::seeded(config.config().seed())?;
        Ok(Self::new(config, Arc::new(store), today))
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the admin session.
    pub fn session(&self) -> &Mutex<Session> {
        &self.session
    }
}
