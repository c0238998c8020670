//! Root record types.

use super::seed::SeedRoot;
use crate::config::{Providers, RegistryConfig};
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Capability flags reported by a storage root.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct RootFlags: u32 {
        /// New documents can be created under the root.
        const SUPPORTS_CREATE = 1 << 0;
        /// Contents are stored on the local device.
        const LOCAL_ONLY = 1 << 1;
        /// The root can answer recent-documents queries.
        const SUPPORTS_RECENTS = 1 << 2;
        /// The root can answer search queries.
        const SUPPORTS_SEARCH = 1 << 3;
        /// The root can tell whether one document is a descendant of another.
        const SUPPORTS_IS_CHILD = 1 << 4;
        /// The root can be ejected.
        const SUPPORTS_EJECT = 1 << 5;
        /// The root currently holds no documents.
        const EMPTY = 1 << 16;
        /// Only shown when advanced roots are requested.
        const ADVANCED = 1 << 17;
    }
}

/// Classification of a root, used for display grouping and default selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedType {
    Images,
    Videos,
    Audio,
    /// Synthetic pseudo-root for recently used items. Not backed by a provider.
    Recents,
    Downloads,
    Local,
    Mtp,
    Sd,
    Usb,
    #[default]
    Other,
}

impl DerivedType {
    /// Sort priority; lower values are preferred.
    pub fn priority(&self) -> u8 {
        match self {
            DerivedType::Recents => 0,
            DerivedType::Images => 1,
            DerivedType::Videos => 2,
            DerivedType::Audio => 3,
            DerivedType::Downloads => 4,
            DerivedType::Local => 5,
            DerivedType::Mtp => 6,
            DerivedType::Sd => 7,
            DerivedType::Usb => 8,
            DerivedType::Other => 9,
        }
    }

    /// Classify a root from its well-known authority and root id.
    pub fn derive(authority: &str, root_id: &str) -> Self {
        match authority {
            Providers::AUTHORITY_DOWNLOADS => DerivedType::Downloads,
            Providers::AUTHORITY_STORAGE => DerivedType::Local,
            Providers::AUTHORITY_MEDIA => match root_id {
                Providers::ROOT_ID_IMAGES => DerivedType::Images,
                Providers::ROOT_ID_VIDEOS => DerivedType::Videos,
                Providers::ROOT_ID_AUDIO => DerivedType::Audio,
                _ => DerivedType::Other,
            },
            _ => DerivedType::Other,
        }
    }
}

/// A single storage root.
///
/// Deserialization goes through [`SeedRoot`], so a record without an explicit
/// `derived_type` is classified from its authority, as [`RootRecord::new`] does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SeedRoot")]
pub struct RootRecord {
    pub authority: String,
    pub root_id: String,
    pub flags: RootFlags,
    pub derived_type: DerivedType,
    /// Free space in bytes, or `-1` when unknown.
    pub available_bytes: i64,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub document_id: Option<String>,
    /// MIME types served by the root. Empty means everything.
    pub mime_types: Vec<String>,
}

impl RootRecord {
    /// Create a record with no flags, a type derived from the authority and
    /// unknown free space.
    pub fn new(authority: impl Into<String>, root_id: impl Into<String>) -> Self {
        let authority = authority.into();
        let root_id = root_id.into();
        let derived_type = DerivedType::derive(&authority, &root_id);
        Self {
            authority,
            root_id,
            flags: RootFlags::empty(),
            derived_type,
            available_bytes: RegistryConfig::UNKNOWN_AVAILABLE_BYTES,
            title: None,
            summary: None,
            document_id: None,
            mime_types: Vec::new(),
        }
    }

    /// The synthetic recents pseudo-root.
    pub fn recents() -> Self {
        Self {
            authority: String::new(),
            root_id: String::new(),
            flags: RootFlags::LOCAL_ONLY | RootFlags::SUPPORTS_IS_CHILD,
            derived_type: DerivedType::Recents,
            available_bytes: RegistryConfig::UNKNOWN_AVAILABLE_BYTES,
            title: Some("Recent".to_string()),
            summary: None,
            document_id: None,
            mime_types: Vec::new(),
        }
    }

    /// Replace the capability flags.
    pub fn with_flags(mut self, flags: RootFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Override the classification derived from the authority.
    pub fn with_derived_type(mut self, derived_type: DerivedType) -> Self {
        self.derived_type = derived_type;
        self
    }

    /// Set the reported free space; `-1` means unknown.
    pub fn with_available_bytes(mut self, available_bytes: i64) -> Self {
        self.available_bytes = available_bytes;
        self
    }

    /// Set the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the display summary shown under the title.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the id of the document at the top of the root.
    pub fn with_document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    /// Set the MIME types served; an empty list means everything.
    pub fn with_mime_types<I, S>(mut self, mime_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mime_types = mime_types.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this record has the given authority and root id.
    pub fn is(&self, authority: &str, root_id: &str) -> bool {
        self.authority == authority && self.root_id == root_id
    }

    /// Whether documents can be created under the root.
    pub fn supports_create(&self) -> bool {
        self.flags.contains(RootFlags::SUPPORTS_CREATE)
    }

    /// Whether the root answers search queries.
    pub fn supports_search(&self) -> bool {
        self.flags.contains(RootFlags::SUPPORTS_SEARCH)
    }

    /// Whether the root can tell if a document descends from another.
    pub fn supports_children(&self) -> bool {
        self.flags.contains(RootFlags::SUPPORTS_IS_CHILD)
    }

    /// Whether contents live on the local device.
    pub fn is_local_only(&self) -> bool {
        self.flags.contains(RootFlags::LOCAL_ONLY)
    }

    /// Whether the root is only shown when advanced roots are requested.
    pub fn is_advanced(&self) -> bool {
        self.flags.contains(RootFlags::ADVANCED)
    }

    /// Whether the root reported that it holds no documents.
    pub fn is_empty(&self) -> bool {
        self.flags.contains(RootFlags::EMPTY)
    }

    /// Whether this is the recents pseudo-root.
    pub fn is_recents(&self) -> bool {
        self.derived_type == DerivedType::Recents
    }

    /// Whether this is a downloads root.
    pub fn is_downloads(&self) -> bool {
        self.derived_type == DerivedType::Downloads
    }

    /// MIME types served, with an empty list widened to the wildcard.
    pub fn served_mime_types(&self) -> Vec<&str> {
        if self.mime_types.is_empty() {
            vec![RegistryConfig::WILDCARD_MIME]
        } else {
            self.mime_types.iter().map(String::as_str).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_type_from_authority() {
        let downloads =
            RootRecord::new(Providers::AUTHORITY_DOWNLOADS, Providers::ROOT_ID_DOWNLOADS);
        assert_eq!(downloads.derived_type, DerivedType::Downloads);
        assert!(downloads.is_downloads());

        let home = RootRecord::new(Providers::AUTHORITY_STORAGE, Providers::ROOT_ID_HOME);
        assert_eq!(home.derived_type, DerivedType::Local);

        let images = RootRecord::new(Providers::AUTHORITY_MEDIA, Providers::ROOT_ID_IMAGES);
        assert_eq!(images.derived_type, DerivedType::Images);

        let other = RootRecord::new("yummies", "pickles");
        assert_eq!(other.derived_type, DerivedType::Other);
        assert_eq!(other.available_bytes, -1);
        assert!(other.flags.is_empty());
    }

    #[test]
    fn test_recents_record() {
        let recents = RootRecord::recents();
        assert!(recents.is_recents());
        assert_eq!(recents.available_bytes, -1);
        assert!(recents.is_local_only());
        assert!(recents.supports_children());
        assert!(!recents.supports_create());
    }

    #[test]
    fn test_priority_orders_recents_first_other_last() {
        assert!(DerivedType::Recents.priority() < DerivedType::Downloads.priority());
        assert!(DerivedType::Downloads.priority() < DerivedType::Local.priority());
        assert!(DerivedType::Usb.priority() < DerivedType::Other.priority());
    }

    #[test]
    fn test_default_derived_type_is_other() {
        assert_eq!(DerivedType::default(), DerivedType::Other);
    }

    #[test]
    fn test_served_mime_types_defaults_to_wildcard() {
        let root = RootRecord::new("yummies", "hamsandwich");
        assert_eq!(root.served_mime_types(), vec!["*/*"]);

        let root = root.with_mime_types(["image/*", "video/mp4"]);
        assert_eq!(root.served_mime_types(), vec!["image/*", "video/mp4"]);
    }

    #[test]
    fn test_deserialize_derives_type_from_authority() {
        let json = r#"{ "authority": "downloads-authority", "root_id": "downloads" }"#;
        let root: RootRecord = serde_json::from_str(json).unwrap();

        assert_eq!(root.derived_type, DerivedType::Downloads);
        assert_eq!(
            root,
            RootRecord::new(Providers::AUTHORITY_DOWNLOADS, Providers::ROOT_ID_DOWNLOADS)
        );

        let criteria = crate::roots::MatchCriteria::default().directory_copy(true);
        assert!(!crate::roots::RootMatcher::matches(&criteria, &root));
    }

    #[test]
    fn test_deserialize_keeps_explicit_type() {
        let json = r#"{
            "authority": "downloads-authority",
            "root_id": "downloads",
            "derived_type": "usb"
        }"#;
        let root: RootRecord = serde_json::from_str(json).unwrap();
        assert_eq!(root.derived_type, DerivedType::Usb);
    }

    #[test]
    fn test_serialize_round_trips_through_seed_form() {
        let root = RootRecord::new("yummies", "pickles")
            .with_flags(RootFlags::SUPPORTS_SEARCH)
            .with_available_bytes(2048)
            .with_title("Pickles");

        let json = serde_json::to_string(&root).unwrap();
        let back: RootRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, root);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let json = r#"{ "authority": "yummies", "root_id": "pickles", "flags": "SUPPORTS_CREATE | LOCAL_ONLY" }"#;
        let root: RootRecord = serde_json::from_str(json).unwrap();

        assert!(root.is("yummies", "pickles"));
        assert_eq!(root.flags, RootFlags::SUPPORTS_CREATE | RootFlags::LOCAL_ONLY);
        assert_eq!(root.derived_type, DerivedType::Other);
        assert_eq!(root.available_bytes, -1);
        assert!(root.mime_types.is_empty());
    }
}
