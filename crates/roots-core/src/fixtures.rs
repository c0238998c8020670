//! Fixed sample roots for tests that need a registry without a real provider.

use crate::config::Providers;
use crate::error::Result;
use crate::roots::{ProviderRegistrar, RootFlags, RootRecord, RootRegistry};

/// Authority shared by `hammy` and `pickles`.
pub const SAMPLE_AUTHORITY: &str = "yummies";

/// Downloads root; the only sample root that supports create.
pub fn downloads() -> RootRecord {
    RootRecord::new(Providers::AUTHORITY_DOWNLOADS, Providers::ROOT_ID_DOWNLOADS)
        .with_flags(RootFlags::SUPPORTS_CREATE)
}

/// Home directory on the storage authority.
pub fn home() -> RootRecord {
    RootRecord::new(Providers::AUTHORITY_STORAGE, Providers::ROOT_ID_HOME)
}

pub fn hammy() -> RootRecord {
    RootRecord::new(SAMPLE_AUTHORITY, "hamsandwich")
}

pub fn pickles() -> RootRecord {
    RootRecord::new(SAMPLE_AUTHORITY, "pickles")
}

/// The recents pseudo-root every registry exposes.
pub fn recents() -> RootRecord {
    RootRecord::recents()
}

/// Registry holding downloads, home, hammy and pickles, with downloads as the
/// preferred default.
pub fn sample_registry() -> RootRegistry {
    RootRegistry::with_roots([downloads(), home(), hammy(), pickles()])
        .with_preferred_default(Providers::AUTHORITY_DOWNLOADS, Providers::ROOT_ID_DOWNLOADS)
}

/// Registrar that records every authority it is handed.
#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    pub registered: Vec<(String, Vec<RootRecord>)>,
}

impl RecordingRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered authorities, in call order.
    pub fn authorities(&self) -> Vec<&str> {
        self.registered
            .iter()
            .map(|(authority, _)| authority.as_str())
            .collect()
    }

    /// Whether `authority` was registered at least once.
    pub fn is_registered(&self, authority: &str) -> bool {
        self.registered.iter().any(|(a, _)| a == authority)
    }
}

impl ProviderRegistrar for RecordingRegistrar {
    fn register_authority(&mut self, authority: &str, roots: &[RootRecord]) -> Result<()> {
        self.registered.push((authority.to_string(), roots.to_vec()));
        Ok(())
    }
}
