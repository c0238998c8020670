//! Centralized configuration constants for the roots catalog.

/// Registry-level configuration.
pub struct RegistryConfig;

impl RegistryConfig {
    /// Reported free space for roots that have no meaningful capacity.
    pub const UNKNOWN_AVAILABLE_BYTES: i64 = -1;
    /// File name used when a seed lives inside a data directory.
    pub const SEED_FILE_NAME: &'static str = "roots.json";
    /// MIME filter that accepts everything.
    pub const WILDCARD_MIME: &'static str = "*/*";
}

/// Well-known provider authorities and root ids.
pub struct Providers;

impl Providers {
    pub const AUTHORITY_DOWNLOADS: &'static str = "downloads-authority";
    pub const AUTHORITY_STORAGE: &'static str = "storage-authority";
    pub const AUTHORITY_MEDIA: &'static str = "media-authority";

    pub const ROOT_ID_DOWNLOADS: &'static str = "downloads";
    pub const ROOT_ID_HOME: &'static str = "home";
    pub const ROOT_ID_IMAGES: &'static str = "images_root";
    pub const ROOT_ID_VIDEOS: &'static str = "videos_root";
    pub const ROOT_ID_AUDIO: &'static str = "audio_root";
}
