//! Entry classification types
//!
//! Categories and platforms are closed sets, each backed by a single token
//! table used for both decoding keys and labelling UI groups.

use serde::{Deserialize, Serialize};

/// Top-level grouping of entries, taken from the first key segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// `PROJECT_` entries
    Project,
    /// `BUILD_` entries
    Build,
    /// `PLATFORM_` entries, scoped to a target
    Platform,
    /// `DEPLOY_` entries
    Deploy,
    /// `IMAGERY_` entries
    Imagery,
    /// `RAYLIB_` entries
    Raylib,
    /// Key prefix did not match any known category
    Unknown,
}

impl Category {
    /// Recognized categories, in file/tab order
    pub const ALL: [Category; 6] = [
        Category::Project,
        Category::Build,
        Category::Platform,
        Category::Deploy,
        Category::Imagery,
        Category::Raylib,
    ];

    /// Key prefix token for this category
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Category::Project => Some("PROJECT"),
            Category::Build => Some("BUILD"),
            Category::Platform => Some("PLATFORM"),
            Category::Deploy => Some("DEPLOY"),
            Category::Imagery => Some("IMAGERY"),
            Category::Raylib => Some("RAYLIB"),
            Category::Unknown => None,
        }
    }

    /// Map a key prefix token (case-sensitive) to its category
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.token() == Some(token))
    }

    /// Section title used when grouping entries
    pub fn label(&self) -> &'static str {
        match self {
            Category::Project => "Project settings",
            Category::Build => "Build settings",
            Category::Platform => "Platform settings",
            Category::Deploy => "Deploy options",
            Category::Imagery => "Imagery edition",
            Category::Raylib => "raylib config",
            Category::Unknown => "Other settings",
        }
    }
}

/// Target platform an entry applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    /// Windows
    Windows,
    /// Linux
    Linux,
    /// macOS
    MacOs,
    /// HTML5 (web)
    Html5,
    /// Android
    Android,
    /// Linux on the DRM/KMS backend, no desktop
    Drm,
    /// Nintendo Switch
    Switch,
    /// Sega Dreamcast
    Dreamcast,
    /// FreeBSD
    FreeBsd,
    /// Applies regardless of the selected target
    Any,
}

impl Platform {
    /// Concrete target platforms, in selector order
    pub const TARGETS: [Platform; 9] = [
        Platform::Windows,
        Platform::Linux,
        Platform::MacOs,
        Platform::Html5,
        Platform::Android,
        Platform::Drm,
        Platform::Switch,
        Platform::Dreamcast,
        Platform::FreeBsd,
    ];

    /// Key token for this platform (`PLATFORM_<TOKEN>_...`)
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Platform::Windows => Some("WINDOWS"),
            Platform::Linux => Some("LINUX"),
            Platform::MacOs => Some("MACOS"),
            Platform::Html5 => Some("HTML5"),
            Platform::Android => Some("ANDROID"),
            Platform::Drm => Some("DRM"),
            Platform::Switch => Some("SWITCH"),
            Platform::Dreamcast => Some("DREAMCAST"),
            Platform::FreeBsd => Some("FREEBSD"),
            Platform::Any => None,
        }
    }

    /// Map a platform token (case-sensitive) to its platform
    pub fn from_token(token: &str) -> Option<Self> {
        Self::TARGETS.into_iter().find(|p| p.token() == Some(token))
    }

    /// Display name for the platform
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
            Platform::MacOs => "macOS",
            Platform::Html5 => "HTML5",
            Platform::Android => "Android",
            Platform::Drm => "DRM",
            Platform::Switch => "Switch",
            Platform::Dreamcast => "Dreamcast",
            Platform::FreeBsd => "FreeBSD",
            Platform::Any => "Any",
        }
    }
}

/// Kind of data an entry holds, which also decides how it is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntryType {
    /// 0/1 value, edited with a checkbox
    Boolean,
    /// Integer value
    Integer,
    /// Free text
    Text,
    /// File path (or `;`-separated list of files)
    TextFile,
    /// Directory path
    TextPath,
}

impl EntryType {
    /// Whether the entry payload lives in `value` rather than `text`
    pub fn is_numeric(&self) -> bool {
        matches!(self, EntryType::Boolean | EntryType::Integer)
    }
}
