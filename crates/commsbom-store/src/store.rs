use serde_json::Value;
use uuid::Uuid;

use crate::blob::BlobStore;
use crate::error::StoreError;
use crate::legacy::LegacyConfig;
use crate::types::{SavedConfiguration, StoredConfigs, SCHEMA_VERSION};

/// Key under which the saved-configuration list lives.
pub const STORE_KEY: &str = "commsbom.saved-configs";

/// Maximum number of configurations kept; older ones fall off the end.
pub const MAX_SAVED: usize = 10;

/// Outcome of a successful [`ConfigStore::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub id: Uuid,
    /// Entries dropped to respect the count cap or the storage quota.
    pub evicted: usize,
}

/// The saved-configuration list on top of a [`BlobStore`].
#[derive(Debug)]
pub struct ConfigStore<B> {
    backend: B,
}

impl<B: BlobStore> ConfigStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_inner(self) -> B {
        self.backend
    }

    /// All saved configurations, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] or [`StoreError::UnsupportedSchema`]
    /// if the stored blob cannot be read; it is never silently discarded.
    pub fn list(&self) -> Result<Vec<SavedConfiguration>, StoreError> {
        let Some(raw) = self.backend.get(STORE_KEY)? else {
            return Ok(Vec::new());
        };
        decode(&raw)
    }

    /// # Errors
    ///
    /// See [`ConfigStore::list`].
    pub fn get(&self, id: Uuid) -> Result<Option<SavedConfiguration>, StoreError> {
        Ok(self.list()?.into_iter().find(|c| c.id == id))
    }

    /// Saves `config` as the newest entry.
    ///
    /// When the backend reports [`StoreError::QuotaExceeded`] the oldest
    /// entry is evicted and the write retried once.
    ///
    /// # Errors
    ///
    /// Returns the load error, or the write error if the retry also fails
    /// or nothing older than `config` is left to evict.
    pub fn save(&mut self, config: SavedConfiguration) -> Result<SaveReport, StoreError> {
        let id = config.id;
        let mut configs = self.list()?;
        configs.insert(0, config);

        let mut evicted = configs.len().saturating_sub(MAX_SAVED);
        configs.truncate(MAX_SAVED);

        match self.persist(&configs) {
            Err(StoreError::QuotaExceeded { size, quota }) => {
                if configs.len() <= 1 {
                    return Err(StoreError::QuotaExceeded { size, quota });
                }
                if let Some(dropped) = configs.pop() {
                    tracing::warn!(
                        dropped = %dropped.name,
                        size,
                        quota,
                        "storage quota exceeded; evicting oldest saved configuration"
                    );
                }
                evicted += 1;
                self.persist(&configs)?;
            }
            other => other?,
        }

        tracing::info!(%id, evicted, total = configs.len(), "configuration saved");
        Ok(SaveReport { id, evicted })
    }

    /// Removes one configuration; returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns a load or write error from the backend.
    pub fn delete(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let mut configs = self.list()?;
        let before = configs.len();
        configs.retain(|c| c.id != id);
        if configs.len() == before {
            return Ok(false);
        }
        self.persist(&configs)?;
        Ok(true)
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backend cannot remove the blob.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.backend.remove(STORE_KEY)
    }

    fn persist(&mut self, configs: &[SavedConfiguration]) -> Result<(), StoreError> {
        let blob = StoredConfigs {
            schema_version: SCHEMA_VERSION,
            configs: configs.to_vec(),
        };
        let raw = serde_json::to_string(&blob).map_err(StoreError::Serialize)?;
        self.backend.put(STORE_KEY, &raw)
    }
}

fn decode(raw: &str) -> Result<Vec<SavedConfiguration>, StoreError> {
    let corrupt = |source: serde_json::Error| {
        tracing::error!(key = STORE_KEY, error = %source, "saved configurations are unreadable; leaving blob untouched");
        StoreError::Corrupt {
            context: STORE_KEY.to_string(),
            source,
        }
    };
    let value: Value = serde_json::from_str(raw).map_err(corrupt)?;

    if value.is_array() {
        let legacy: Vec<LegacyConfig> = serde_json::from_value(value).map_err(corrupt)?;
        tracing::info!(count = legacy.len(), "migrating schema 1 saved configurations");
        return Ok(legacy.into_iter().map(LegacyConfig::migrate).collect());
    }

    match value.get("schema_version").and_then(Value::as_u64) {
        Some(version) if version != SCHEMA_VERSION => Err(StoreError::UnsupportedSchema(version)),
        _ => {
            let stored: StoredConfigs = serde_json::from_value(value).map_err(corrupt)?;
            Ok(stored.configs)
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
