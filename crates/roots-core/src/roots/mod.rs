//! Storage root catalog.
//!
//! This module provides:
//! - **Records**: [`RootRecord`] with its [`RootFlags`] and [`DerivedType`]
//! - **Lookup**: the [`RootsAccess`] trait and its in-memory [`RootRegistry`]
//! - **Matching**: [`MatchCriteria`] and arbitrary [`RootMatcher`] predicates
//! - **Seeding**: JSON [`RootSeed`] files that populate a registry
//!
//! Roots are grouped by authority. The recents pseudo-root is never stored
//! with the others; every registry exposes it through
//! [`RootsAccess::get_recents`].

pub mod criteria;
pub mod registry;
pub mod seed;
pub mod traits;
pub mod types;

pub use criteria::{mime_matches, Action, MatchCriteria, RootMatcher};
pub use registry::RootRegistry;
pub use seed::{RootKey, RootSeed, SeedRoot};
pub use traits::{ProviderRegistrar, RootsAccess};
pub use types::{DerivedType, RootFlags, RootRecord};
