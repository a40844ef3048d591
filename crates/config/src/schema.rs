//! Property store and resolved settings definitions

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use types::{utils::parse_flag, Setting, NO_NEXUS};

/// The host's per-invocation property set, keyed by property name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertyStore {
    properties: BTreeMap<String, String>,
}

impl PropertyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a property value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Set a property, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate properties in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for PropertyStore {
    fn from(properties: BTreeMap<String, String>) -> Self {
        Self { properties }
    }
}

/// Where a resolved value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    /// The property store, by canonical name
    Store,
    /// An environment variable, by alias
    Environment(String),
    /// The setting's default value
    Default,
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingSource::Store => f.write_str("property"),
            SettingSource::Environment(var) => write!(f, "env:{}", var),
            SettingSource::Default => f.write_str("default"),
        }
    }
}

impl Serialize for SettingSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A resolved value together with its origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub value: String,
    pub source: SettingSource,
}

/// Unified view of the property store after settings resolution
///
/// Contains every property of the input store, with each resolved
/// setting written under its canonical name. Settings that resolved to
/// nothing have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    values: PropertyStore,
    sources: BTreeMap<&'static str, SettingSource>,
}

impl ResolvedConfig {
    pub(crate) fn from_store(store: &PropertyStore) -> Self {
        Self {
            values: store.clone(),
            sources: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, setting: &Setting, resolved: Resolved) {
        self.values.set(setting.name, resolved.value);
        self.sources.insert(setting.name, resolved.source);
    }

    /// Value stored under a name, resolved or carried over from the store
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name)
    }

    /// Value of a recognized setting
    pub fn setting(&self, setting: &Setting) -> Option<&str> {
        self.get(setting.name)
    }

    pub fn is_set(&self, setting: &Setting) -> bool {
        self.values.contains(setting.name)
    }

    /// Origin of a resolved setting
    pub fn source(&self, setting: &Setting) -> Option<&SettingSource> {
        self.sources.get(setting.name)
    }

    /// Whether the proxy repositories are disabled
    pub fn no_nexus(&self) -> bool {
        parse_flag(self.setting(&NO_NEXUS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::NEXUS_URL;

    #[test]
    fn test_store_basic_operations() {
        let mut store = PropertyStore::new();
        assert!(store.is_empty());

        store.set("nexus_url", "url");
        store.set("nexus_url", "other");
        assert_eq!(store.get("nexus_url"), Some("other"));
        assert_eq!(store.len(), 1);
        assert!(store.get("nexus_user").is_none());
    }

    #[test]
    fn test_store_from_iter() {
        let store: PropertyStore = [("b", "2"), ("a", "1")].into_iter().collect();
        let keys: Vec<_> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_resolved_config_keeps_store_properties() {
        let store: PropertyStore = [("version", "1.0")].into_iter().collect();
        let mut resolved = ResolvedConfig::from_store(&store);
        resolved.insert(
            &NEXUS_URL,
            Resolved {
                value: "url".to_string(),
                source: SettingSource::Environment("NEXUS_HOST".to_string()),
            },
        );

        assert_eq!(resolved.get("version"), Some("1.0"));
        assert_eq!(resolved.setting(&NEXUS_URL), Some("url"));
        assert_eq!(resolved.source(&NEXUS_URL).unwrap().to_string(), "env:NEXUS_HOST");
    }

    #[test]
    fn test_no_nexus_defaults_to_false() {
        let resolved = ResolvedConfig::default();
        assert!(!resolved.no_nexus());
    }
}
