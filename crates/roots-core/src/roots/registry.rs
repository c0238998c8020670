//! In-memory root registry keyed by authority.

use super::criteria::RootMatcher;
use super::traits::{ProviderRegistrar, RootsAccess};
use super::types::RootRecord;
use crate::error::{Result, RootsError};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Catalog of storage roots grouped by authority.
///
/// Roots keep their insertion order within an authority, and authorities are
/// listed in the order they were first seen. The registry is filled during
/// setup and only read afterwards, so it needs no interior locking.
#[derive(Debug, Clone)]
pub struct RootRegistry {
    roots: IndexMap<String, Vec<RootRecord>>,
    /// `(authority, root_id)` returned by `get_default` when it matches.
    preferred_default: Option<(String, String)>,
    recents: RootRecord,
}

impl Default for RootRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RootRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            roots: IndexMap::new(),
            preferred_default: None,
            recents: RootRecord::recents(),
        }
    }

    /// Create a registry seeded with `roots`, in order.
    pub fn with_roots(roots: impl IntoIterator<Item = RootRecord>) -> Self {
        let mut registry = Self::new();
        registry.extend(roots);
        registry
    }

    /// Prefer this root whenever it satisfies the default-selection matcher.
    pub fn with_preferred_default(
        mut self,
        authority: impl Into<String>,
        root_id: impl Into<String>,
    ) -> Self {
        self.preferred_default = Some((authority.into(), root_id.into()));
        self
    }

    /// The configured preferred default, if any.
    pub fn preferred_default(&self) -> Option<(&str, &str)> {
        self.preferred_default
            .as_ref()
            .map(|(authority, root_id)| (authority.as_str(), root_id.as_str()))
    }

    /// Append a root to its authority's collection.
    ///
    /// Duplicates are kept; point lookups return the first one inserted.
    pub fn add(&mut self, root: RootRecord) {
        let roots = self.roots.entry(root.authority.clone()).or_default();

        if roots.iter().any(|existing| existing.root_id == root.root_id) {
            warn!(
                "Duplicate root {} for authority {}; lookups keep the first",
                root.root_id, root.authority
            );
        }

        debug!("Added root {} for authority {}", root.root_id, root.authority);
        roots.push(root);
    }

    /// Total number of stored roots.
    pub fn len(&self) -> usize {
        self.roots.values().map(Vec::len).sum()
    }

    /// Whether no roots are stored.
    pub fn is_empty(&self) -> bool {
        self.roots.values().all(Vec::is_empty)
    }

    /// Authorities in first-seen order.
    pub fn authorities(&self) -> impl Iterator<Item = &str> {
        self.roots.keys().map(String::as_str)
    }

    /// Hand every authority and its roots to `registrar`, once each.
    ///
    /// Stops at the first registrar error.
    pub fn export_to(&self, registrar: &mut dyn ProviderRegistrar) -> Result<()> {
        for (authority, roots) in &self.roots {
            registrar.register_authority(authority, roots)?;
            debug!(
                "Exported authority {} with {} roots",
                authority,
                roots.len()
            );
        }
        Ok(())
    }
}

impl RootsAccess for RootRegistry {
    fn get_one(&self, authority: &str, root_id: &str) -> Option<&RootRecord> {
        self.roots
            .get(authority)?
            .iter()
            .find(|root| root.root_id == root_id)
    }

    fn get_for_authority(&self, authority: &str) -> Option<&[RootRecord]> {
        self.roots.get(authority).map(Vec::as_slice)
    }

    fn get_all(&self) -> Vec<&RootRecord> {
        self.roots.values().flatten().collect()
    }

    fn get_default(&self, matcher: &dyn RootMatcher) -> Result<&RootRecord> {
        let all = self.get_all();
        let Some(first) = all.first().copied() else {
            return Err(RootsError::NoDefaultAvailable);
        };

        if let Some((authority, root_id)) = self.preferred_default() {
            if let Some(root) = self.get_one(authority, root_id) {
                if matcher.matches(root) {
                    return Ok(root);
                }
            }
        }

        // min_by_key keeps the first of equal priorities, i.e. insertion order.
        let best = all
            .iter()
            .copied()
            .filter(|root| matcher.matches(root))
            .min_by_key(|root| root.derived_type.priority());

        match best {
            Some(root) => Ok(root),
            None => {
                warn!(
                    "No root matches the default criteria, falling back to {}/{}",
                    first.authority, first.root_id
                );
                Ok(first)
            }
        }
    }

    fn get_recents(&self) -> &RootRecord {
        &self.recents
    }
}

impl Extend<RootRecord> for RootRegistry {
    fn extend<I: IntoIterator<Item = RootRecord>>(&mut self, iter: I) {
        for root in iter {
            self.add(root);
        }
    }
}

impl FromIterator<RootRecord> for RootRegistry {
    fn from_iter<I: IntoIterator<Item = RootRecord>>(iter: I) -> Self {
        Self::with_roots(iter)
    }
}
