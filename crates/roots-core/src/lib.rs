//! Roots Core - In-memory catalog of storage roots.
//!
//! A root is a storage location exposed by a provider, identified by the
//! provider's authority and a root id. This crate keeps a set of roots,
//! answers point and authority lookups, filters them against caller state,
//! picks a default root and exposes a synthetic "recents" pseudo-root.
//!
//! # Example
//!
//! ```rust
//! use roots_core::{MatchCriteria, Action, RootFlags, RootRecord, RootRegistry, RootsAccess};
//!
//! let registry = RootRegistry::with_roots([
//!     RootRecord::new("downloads-authority", "downloads").with_flags(RootFlags::SUPPORTS_CREATE),
//!     RootRecord::new("storage-authority", "home"),
//! ]);
//!
//! assert!(registry.get_one("storage-authority", "missing").is_none());
//!
//! let writable = registry.get_matching(&MatchCriteria::for_action(Action::Create));
//! assert_eq!(writable.len(), 1);
//! assert_eq!(writable[0].root_id, "downloads");
//! ```

pub mod config;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;
pub mod roots;

pub use config::{Providers, RegistryConfig};
pub use error::{Result, RootsError};
pub use roots::{
    mime_matches, Action, DerivedType, MatchCriteria, ProviderRegistrar, RootFlags, RootKey,
    RootMatcher, RootRecord, RootRegistry, RootSeed, RootsAccess, SeedRoot,
};
