//! Matching criteria for filtering roots against caller state.
//!
//! The registry only supplies candidates and applies a [`RootMatcher`]. What
//! "matching" means belongs to the caller: either a plain closure or a
//! [`MatchCriteria`] describing the current picking session.

use super::types::{RootFlags, RootRecord};
use crate::config::RegistryConfig;

/// Predicate deciding whether a root is acceptable.
pub trait RootMatcher {
    /// Whether `root` is acceptable.
    fn matches(&self, root: &RootRecord) -> bool;
}

impl<F> RootMatcher for F
where
    F: Fn(&RootRecord) -> bool,
{
    fn matches(&self, root: &RootRecord) -> bool {
        self(root)
    }
}

/// What the caller is trying to do with the chosen root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Browse,
    Open,
    GetContent,
    Create,
    OpenTree,
    PickCopyDestination,
}

/// Application state used to filter roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCriteria {
    pub action: Action,
    /// Accepted MIME types; wildcards like `image/*` and `*/*` are allowed.
    pub accept_mimes: Vec<String>,
    pub local_only: bool,
    pub show_advanced: bool,
    /// Picking a destination for a directory copy.
    pub directory_copy: bool,
    /// Flags every matching root must carry.
    pub required_flags: RootFlags,
    pub excluded_authorities: Vec<String>,
}

impl Default for MatchCriteria {
    fn default() -> Self {
        Self {
            action: Action::default(),
            accept_mimes: vec![RegistryConfig::WILDCARD_MIME.to_string()],
            local_only: false,
            show_advanced: false,
            directory_copy: false,
            required_flags: RootFlags::empty(),
            excluded_authorities: Vec::new(),
        }
    }
}

impl MatchCriteria {
    /// Default criteria for `action`.
    pub fn for_action(action: Action) -> Self {
        Self {
            action,
            ..Self::default()
        }
    }

    /// Replace the accepted MIME types.
    pub fn with_accept_mimes<I, S>(mut self, mimes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accept_mimes = mimes.into_iter().map(Into::into).collect();
        self
    }

    /// Require every matching root to carry `flags`.
    pub fn with_required_flags(mut self, flags: RootFlags) -> Self {
        self.required_flags = flags;
        self
    }

    /// Only accept roots stored on the local device.
    pub fn local_only(mut self, local_only: bool) -> Self {
        self.local_only = local_only;
        self
    }

    /// Also accept roots flagged `ADVANCED`.
    pub fn show_advanced(mut self, show_advanced: bool) -> Self {
        self.show_advanced = show_advanced;
        self
    }

    /// Picking a destination for a directory copy; downloads roots are refused.
    pub fn directory_copy(mut self, directory_copy: bool) -> Self {
        self.directory_copy = directory_copy;
        self
    }

    /// Refuse every root of `authority`.
    pub fn exclude_authority(mut self, authority: impl Into<String>) -> Self {
        self.excluded_authorities.push(authority.into());
        self
    }
}

impl RootMatcher for MatchCriteria {
    fn matches(&self, root: &RootRecord) -> bool {
        let needs_create = matches!(self.action, Action::Create | Action::PickCopyDestination);
        if needs_create && !root.supports_create() {
            return false;
        }

        if self.action == Action::OpenTree && !root.supports_children() {
            return false;
        }

        if !self.show_advanced && root.is_advanced() {
            return false;
        }

        if self.local_only && !root.is_local_only() {
            return false;
        }

        // Downloads cannot hold directories.
        if self.directory_copy && root.is_downloads() {
            return false;
        }

        // Empty roots are still useful as creation targets and when browsing.
        if root.is_empty() && matches!(self.action, Action::Open | Action::GetContent) {
            return false;
        }

        let accepted: Vec<&str> = self.accept_mimes.iter().map(String::as_str).collect();
        let served = root.served_mime_types();
        if !mime_matches_any(&served, &accepted) && !mime_matches_any(&accepted, &served) {
            return false;
        }

        if self
            .excluded_authorities
            .iter()
            .any(|authority| *authority == root.authority)
        {
            return false;
        }

        root.flags.contains(self.required_flags)
    }
}

/// Whether any of `tests` is matched by any of `filters`.
pub fn mime_matches_any(filters: &[&str], tests: &[&str]) -> bool {
    tests
        .iter()
        .any(|test| filters.iter().any(|filter| mime_matches(filter, test)))
}

/// Whether a single MIME `filter` (possibly a wildcard) matches `test`.
pub fn mime_matches(filter: &str, test: &str) -> bool {
    if filter == RegistryConfig::WILDCARD_MIME || filter.eq_ignore_ascii_case(test) {
        return true;
    }

    match filter.strip_suffix("/*") {
        Some(filter_type) => test
            .split_once('/')
            .map(|(test_type, _)| test_type.eq_ignore_ascii_case(filter_type))
            .unwrap_or(false),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roots::types::DerivedType;

    fn root(flags: RootFlags) -> RootRecord {
        RootRecord::new("yummies", "pickles").with_flags(flags)
    }

    #[test]
    fn test_mime_matches_wildcards() {
        assert!(mime_matches("*/*", "image/png"));
        assert!(mime_matches("image/*", "image/png"));
        assert!(mime_matches("image/png", "IMAGE/PNG"));
        assert!(!mime_matches("image/*", "video/mp4"));
        assert!(!mime_matches("image/png", "image/*"));
        assert!(!mime_matches("image/*", "garbage"));
    }

    #[test]
    fn test_mime_overlap_is_checked_both_ways() {
        let criteria = MatchCriteria::default().with_accept_mimes(["image/png"]);

        // Root serving image/* accepts image/png requests.
        assert!(criteria.matches(&root(RootFlags::empty()).with_mime_types(["image/*"])));
        // Root serving only video does not.
        assert!(!criteria.matches(&root(RootFlags::empty()).with_mime_types(["video/*"])));

        // A wildcard request still matches a narrow root.
        let criteria = MatchCriteria::default().with_accept_mimes(["image/*"]);
        assert!(criteria.matches(&root(RootFlags::empty()).with_mime_types(["image/jpeg"])));
    }

    #[test]
    fn test_default_criteria_match_plain_roots() {
        let criteria = MatchCriteria::default();
        assert!(criteria.matches(&root(RootFlags::empty())));
        assert!(criteria.matches(&root(RootFlags::EMPTY)));
    }

    #[test]
    fn test_create_requires_supports_create() {
        for action in [Action::Create, Action::PickCopyDestination] {
            let criteria = MatchCriteria::for_action(action);
            assert!(!criteria.matches(&root(RootFlags::empty())));
            assert!(criteria.matches(&root(RootFlags::SUPPORTS_CREATE)));
        }
    }

    #[test]
    fn test_open_tree_requires_is_child() {
        let criteria = MatchCriteria::for_action(Action::OpenTree);
        assert!(!criteria.matches(&root(RootFlags::SUPPORTS_CREATE)));
        assert!(criteria.matches(&root(RootFlags::SUPPORTS_IS_CHILD)));
    }

    #[test]
    fn test_advanced_roots_hidden_unless_requested() {
        let advanced = root(RootFlags::ADVANCED);
        assert!(!MatchCriteria::default().matches(&advanced));
        assert!(MatchCriteria::default().show_advanced(true).matches(&advanced));
    }

    #[test]
    fn test_local_only_excludes_remote_roots() {
        let criteria = MatchCriteria::default().local_only(true);
        assert!(!criteria.matches(&root(RootFlags::empty())));
        assert!(criteria.matches(&root(RootFlags::LOCAL_ONLY)));
    }

    #[test]
    fn test_directory_copy_excludes_downloads() {
        let criteria = MatchCriteria::default().directory_copy(true);
        let downloads = root(RootFlags::SUPPORTS_CREATE).with_derived_type(DerivedType::Downloads);
        assert!(!criteria.matches(&downloads));
        assert!(criteria.matches(&root(RootFlags::SUPPORTS_CREATE)));
    }

    #[test]
    fn test_empty_roots_hidden_when_opening() {
        for action in [Action::Open, Action::GetContent] {
            assert!(!MatchCriteria::for_action(action).matches(&root(RootFlags::EMPTY)));
        }
        let create = MatchCriteria::for_action(Action::Create);
        assert!(create.matches(&root(RootFlags::EMPTY | RootFlags::SUPPORTS_CREATE)));
    }

    #[test]
    fn test_excluded_authorities() {
        let criteria = MatchCriteria::default().exclude_authority("yummies");
        assert!(!criteria.matches(&root(RootFlags::empty())));
        assert!(criteria.matches(&RootRecord::new("other", "pickles")));
    }

    #[test]
    fn test_required_flags() {
        let criteria = MatchCriteria::default()
            .with_required_flags(RootFlags::SUPPORTS_SEARCH | RootFlags::LOCAL_ONLY);
        assert!(!criteria.matches(&root(RootFlags::SUPPORTS_SEARCH)));
        assert!(criteria.matches(&root(
            RootFlags::SUPPORTS_SEARCH | RootFlags::LOCAL_ONLY | RootFlags::SUPPORTS_CREATE
        )));
    }

    #[test]
    fn test_closures_are_matchers() {
        let only_pickles = |root: &RootRecord| root.root_id == "pickles";
        assert!(only_pickles.matches(&root(RootFlags::empty())));
        assert!(!only_pickles.matches(&RootRecord::new("yummies", "hamsandwich")));
    }
}
