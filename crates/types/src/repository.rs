//! Repository registration types

use crate::utils::mask_secret;
use serde::{Serialize, Serializer};
use std::fmt;

/// Username/password pair shared by all proxy repositories
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    #[serde(serialize_with = "serialize_masked")]
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &mask_secret(&self.password))
            .finish()
    }
}

fn serialize_masked<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&mask_secret(value))
}

/// A named Maven repository handed to the host's dependency resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryEntry {
    /// Unique name; for proxy repositories this is the path suffix
    pub name: String,
    /// Full repository URL
    pub url: String,
    /// Credentials, absent for public repositories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
}

impl RepositoryEntry {
    /// Create a repository entry without credentials
    pub fn public(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            credentials: None,
        }
    }

    /// Create a repository entry with credentials
    pub fn authenticated(
        name: impl Into<String>,
        url: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            credentials: Some(credentials),
        }
    }
}
