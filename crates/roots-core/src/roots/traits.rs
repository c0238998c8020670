//! Capability traits at the registry boundary.

use super::criteria::RootMatcher;
use super::types::RootRecord;
use crate::error::Result;

/// Read access to a catalog of storage roots.
///
/// All lookups are synchronous and never fail for ordinary absence: unknown
/// authorities and root ids yield `None`.
pub trait RootsAccess: Send + Sync {
    /// Get the first root with this authority and root id.
    fn get_one(&self, authority: &str, root_id: &str) -> Option<&RootRecord>;

    /// Get all roots for an authority, in insertion order.
    ///
    /// Returns `None` if the authority was never added.
    fn get_for_authority(&self, authority: &str) -> Option<&[RootRecord]>;

    /// Get every root across all authorities.
    fn get_all(&self) -> Vec<&RootRecord>;

    /// Get the roots accepted by `matcher`, preserving `get_all` order.
    fn get_matching(&self, matcher: &dyn RootMatcher) -> Vec<&RootRecord> {
        self.get_all()
            .into_iter()
            .filter(|root| matcher.matches(root))
            .collect()
    }

    /// Get the root to use when the caller did not pick one.
    ///
    /// Prefers roots accepted by `matcher`. When none is accepted, a root is
    /// still returned, so the result may not satisfy `matcher`; callers that
    /// need a matching root must check it themselves.
    ///
    /// Fails with `NoDefaultAvailable` only when there are no roots at all.
    fn get_default(&self, matcher: &dyn RootMatcher) -> Result<&RootRecord>;

    /// Get the synthetic recents pseudo-root.
    fn get_recents(&self) -> &RootRecord;
}

/// Receives the authorities of a registry so they can be reached elsewhere.
pub trait ProviderRegistrar {
    /// Register one authority together with its roots.
    fn register_authority(&mut self, authority: &str, roots: &[RootRecord]) -> Result<()>;
}
