//! JSON seed files for populating a registry.
//!
//! A seed lists the roots a registry starts with and, optionally, which one
//! is the preferred default:
//!
//! ```json
//! {
//!   "preferred_default": { "authority": "downloads-authority", "root_id": "downloads" },
//!   "roots": [
//!     { "authority": "downloads-authority", "root_id": "downloads", "flags": "SUPPORTS_CREATE" },
//!     { "authority": "yummies", "root_id": "pickles", "derived_type": "usb" }
//!   ]
//! }
//! ```
//!
//! Roots without a `derived_type` are classified from their authority. A
//! `derived_type` of `recents` is rejected: that type belongs to the synthetic
//! pseudo-root alone.

use super::registry::RootRegistry;
use super::types::{DerivedType, RootFlags, RootRecord};
use crate::config::RegistryConfig;
use crate::error::{Result, RootsError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Identifies a root by authority and root id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootKey {
    pub authority: String,
    pub root_id: String,
}

/// One root as written in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRoot {
    pub authority: String,
    pub root_id: String,
    #[serde(default)]
    pub flags: RootFlags,
    #[serde(default)]
    pub derived_type: Option<DerivedType>,
    #[serde(default)]
    pub available_bytes: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub mime_types: Vec<String>,
}

impl From<SeedRoot> for RootRecord {
    fn from(seed: SeedRoot) -> Self {
        let mut record = RootRecord::new(seed.authority, seed.root_id)
            .with_flags(seed.flags)
            .with_mime_types(seed.mime_types);
        if let Some(derived_type) = seed.derived_type {
            record.derived_type = derived_type;
        }
        if let Some(available_bytes) = seed.available_bytes {
            record.available_bytes = available_bytes;
        }
        record.title = seed.title;
        record.summary = seed.summary;
        record.document_id = seed.document_id;
        record
    }
}

/// Initial contents of a registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RootSeed {
    #[serde(default)]
    pub preferred_default: Option<RootKey>,
    #[serde(default)]
    pub roots: Vec<SeedRoot>,
}

impl RootSeed {
    /// Parse and validate a seed from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let seed: RootSeed = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Load a seed file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| RootsError::io_with_path(e, path))?;

        let seed: RootSeed = serde_json::from_str(&content).map_err(|e| RootsError::Json {
            message: format!("Failed to parse root seed from {}: {}", path.display(), e),
            source: Some(e),
        })?;
        seed.validate()?;

        debug!("Loaded {} roots from {}", seed.roots.len(), path.display());
        Ok(seed)
    }

    /// Load the seed file stored under `dir`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::load(dir.as_ref().join(RegistryConfig::SEED_FILE_NAME))
    }

    fn validate(&self) -> Result<()> {
        for (index, root) in self.roots.iter().enumerate() {
            if root.authority.is_empty() {
                return Err(RootsError::Validation {
                    field: format!("roots[{}].authority", index),
                    message: "must not be empty".to_string(),
                });
            }
            if root.root_id.is_empty() {
                return Err(RootsError::Validation {
                    field: format!("roots[{}].root_id", index),
                    message: "must not be empty".to_string(),
                });
            }
            // Recents is synthetic and never lives in the authority map.
            if root.derived_type == Some(DerivedType::Recents) {
                return Err(RootsError::Validation {
                    field: format!("roots[{}].derived_type", index),
                    message: "recents is reserved for the synthetic pseudo-root".to_string(),
                });
            }
        }

        if let Some(key) = &self.preferred_default {
            let seeded = self
                .roots
                .iter()
                .any(|root| root.authority == key.authority && root.root_id == key.root_id);
            if !seeded {
                warn!(
                    "Preferred default {}/{} is not among the seeded roots",
                    key.authority, key.root_id
                );
            }
        }

        Ok(())
    }

    /// Build a registry from this seed.
    pub fn into_registry(self) -> RootRegistry {
        let registry = RootRegistry::with_roots(self.roots.into_iter().map(RootRecord::from));
        match self.preferred_default {
            Some(key) => registry.with_preferred_default(key.authority, key.root_id),
            None => registry,
        }
    }
}

impl RootRegistry {
    /// Build a registry from a seed.
    pub fn from_seed(seed: RootSeed) -> Self {
        seed.into_registry()
    }

    /// Load a seed file and build a registry from it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        RootSeed::load(path).map(RootSeed::into_registry)
    }
}
