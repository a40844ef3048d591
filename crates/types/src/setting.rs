//! Recognized settings and their environment aliases

use serde::Serialize;
use std::fmt;

/// A named setting with the environment variables that may supply it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Setting {
    /// Canonical name, as used in the property store
    pub name: &'static str,
    /// Environment variables queried in declared order
    pub env_aliases: &'static [&'static str],
    /// Value applied when neither the store nor the environment has one
    pub default: Option<&'static str>,
    /// Whether the value must be masked when displayed
    #[serde(skip)]
    pub secret: bool,
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Base URL of the Nexus repository manager
pub const NEXUS_URL: Setting = Setting {
    name: "nexus_url",
    env_aliases: &["NEXUS_HOST", "NEXUS_URL"],
    default: None,
    secret: false,
};

pub const NEXUS_USER: Setting = Setting {
    name: "nexus_user",
    env_aliases: &["NEXUS_USERNAME"],
    default: None,
    secret: false,
};

pub const NEXUS_PASSWORD: Setting = Setting {
    name: "nexus_pw",
    env_aliases: &["NEXUS_PASSWORD"],
    default: None,
    secret: true,
};

pub const NEXUS_FOLDER_RELEASES: Setting = Setting {
    name: "nexus_folder_releases",
    env_aliases: &["NEXUS_FOLDER_RELEASES"],
    default: None,
    secret: false,
};

pub const NEXUS_FOLDER_SNAPSHOTS: Setting = Setting {
    name: "nexus_folder_snapshots",
    env_aliases: &["NEXUS_FOLDER_SNAPSHOTS"],
    default: None,
    secret: false,
};

/// Disables the proxy repositories and falls back to Maven Central
pub const NO_NEXUS: Setting = Setting {
    name: "no_nexus",
    env_aliases: &["NO_NEXUS"],
    default: Some("false"),
    secret: false,
};

/// All recognized settings, in resolution order
pub const ALL_SETTINGS: [Setting; 6] = [
    NEXUS_URL,
    NEXUS_USER,
    NEXUS_PASSWORD,
    NEXUS_FOLDER_RELEASES,
    NEXUS_FOLDER_SNAPSHOTS,
    NO_NEXUS,
];

/// Settings that must be present while the proxy is enabled, in check order
pub const PROXY_SETTINGS: [Setting; 3] = [NEXUS_URL, NEXUS_USER, NEXUS_PASSWORD];
