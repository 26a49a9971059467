//! Persistence bridge over the shared key-value store
//!
//! The store is an ordinary async local key-value surface in the shipped
//! extension; here it is a trait so tests and the CLI run against an
//! in-memory map. Writes are wholesale overwrites: last write wins, no
//! transactions.

use crate::error::Error;
use crate::models::{Environment, InstallMarker, StoredState};
use chrono::Utc;
use std::collections::HashMap;

/// Well-known storage keys.
pub mod keys {
    pub const CURRENT_ENVIRONMENT: &str = "currentEnvironment";
    pub const CURRENT_URL: &str = "currentUrl";
    pub const DETECTED_AT: &str = "detectedAt";
    pub const VERSION: &str = "version";
    pub const INSTALLED_AT: &str = "installedAt";
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
    fn remove(&mut self, key: &str) -> Result<(), Error>;
}

/// HashMap-backed store for tests and the CLI.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Writes the latest verdict to the store after each reconciliation pass
/// and reads it back for the popup.
pub struct PersistenceBridge<'a, S: KeyValueStore> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore> PersistenceBridge<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Overwrite the single stored slot with the outcome of a detection
    /// pass. An absent verdict clears the environment key so a later read
    /// observes production, not a stale badge.
    pub fn write_state(
        &mut self,
        environment: &Option<Environment>,
        url: &str,
    ) -> Result<StoredState, Error> {
        let state = StoredState {
            current_environment: environment.clone(),
            current_url: url.to_string(),
            detected_at: Utc::now(),
        };

        match &state.current_environment {
            Some(env) => {
                let json = serde_json::to_string(env)?;
                self.store.set(keys::CURRENT_ENVIRONMENT, &json)?;
            }
            None => self.store.remove(keys::CURRENT_ENVIRONMENT)?,
        }
        self.store.set(keys::CURRENT_URL, url)?;
        self.store
            .set(keys::DETECTED_AT, &state.detected_at.to_rfc3339())?;

        Ok(state)
    }

    /// Read the stored slot back. Returns `Ok(None)` when no detection has
    /// been persisted yet or the record does not parse; a half-written
    /// record is treated as absent, not as an error.
    pub fn load_state(&self) -> Result<Option<StoredState>, Error> {
        let Some(url) = self.store.get(keys::CURRENT_URL)? else {
            return Ok(None);
        };
        let Some(raw_ts) = self.store.get(keys::DETECTED_AT)? else {
            return Ok(None);
        };
        let detected_at = match raw_ts.parse() {
            Ok(ts) => ts,
            Err(err) => {
                log::warn!("discarding stored state with bad timestamp {raw_ts:?}: {err}");
                return Ok(None);
            }
        };

        let current_environment = match self.store.get(keys::CURRENT_ENVIRONMENT)? {
            Some(json) => match serde_json::from_str(&json) {
                Ok(env) => Some(env),
                Err(err) => {
                    log::warn!("discarding unreadable stored environment: {err}");
                    None
                }
            },
            None => None,
        };

        Ok(Some(StoredState {
            current_environment,
            current_url: url,
            detected_at,
        }))
    }

    /// Write the install marker. Overwritten only when the recorded version
    /// differs, so the installation timestamp survives ordinary restarts.
    pub fn record_install(&mut self, version: &str) -> Result<InstallMarker, Error> {
        if let (Ok(Some(stored)), Ok(Some(at))) = (
            self.store.get(keys::VERSION),
            self.store.get(keys::INSTALLED_AT),
        ) {
            if stored == version {
                if let Ok(installed_at) = at.parse() {
                    return Ok(InstallMarker {
                        version: stored,
                        installed_at,
                    });
                }
            }
        }

        let marker = InstallMarker {
            version: version.to_string(),
            installed_at: Utc::now(),
        };
        self.store.set(keys::VERSION, &marker.version)?;
        self.store
            .set(keys::INSTALLED_AT, &marker.installed_at.to_rfc3339())?;
        Ok(marker)
    }
}
