//! Repository handler seam and an in-memory registry

use crate::configurator::{MAVEN_CENTRAL_NAME, MAVEN_CENTRAL_URL};
use tracing::debug;
use types::RepositoryEntry;

/// The host's dependency resolution subsystem, as seen by the configurator
pub trait RepositoryHandler {
    /// Register a named Maven repository
    fn maven(&mut self, entry: RepositoryEntry);

    /// Register the public default repository
    fn maven_central(&mut self);
}

/// Repositories kept in registration order, unique by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryRegistry {
    repositories: Vec<RepositoryEntry>,
}

impl RepositoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a repository by name
    pub fn find_by_name(&self, name: &str) -> Option<&RepositoryEntry> {
        self.repositories.iter().find(|r| r.name == name)
    }

    /// Get all repository names
    pub fn names(&self) -> Vec<&str> {
        self.repositories.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RepositoryEntry> {
        self.repositories.iter()
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }
}

impl RepositoryHandler for RepositoryRegistry {
    fn maven(&mut self, entry: RepositoryEntry) {
        debug!(name = %entry.name, url = %entry.url, "registering maven repository");
        match self.repositories.iter_mut().find(|r| r.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.repositories.push(entry),
        }
    }

    fn maven_central(&mut self) {
        self.maven(RepositoryEntry::public(MAVEN_CENTRAL_NAME, MAVEN_CENTRAL_URL));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Credentials;

    #[test]
    fn test_registration_order_is_kept() {
        let mut registry = RepositoryRegistry::new();
        registry.maven(RepositoryEntry::public("b", "https://b.org/"));
        registry.maven(RepositoryEntry::public("a", "https://a.org/"));

        assert_eq!(registry.names(), vec!["b", "a"]);
    }

    #[test]
    fn test_same_name_replaces_entry() {
        let mut registry = RepositoryRegistry::new();
        registry.maven(RepositoryEntry::public("/repository/jcenter/", "https://old.org/"));
        registry.maven(RepositoryEntry::authenticated(
            "/repository/jcenter/",
            "https://new.org/",
            Credentials::new("u", "p"),
        ));

        assert_eq!(registry.len(), 1);
        let repo = registry.find_by_name("/repository/jcenter/").unwrap();
        assert_eq!(repo.url, "https://new.org/");
        assert!(repo.credentials.is_some());
    }

    #[test]
    fn test_maven_central() {
        let mut registry = RepositoryRegistry::new();
        registry.maven_central();

        let repo = registry.find_by_name(MAVEN_CENTRAL_NAME).unwrap();
        assert_eq!(repo.url, MAVEN_CENTRAL_URL);
        assert!(repo.credentials.is_none());
    }
}
