//! Property store loader implementation

use crate::schema::PropertyStore;
use anyhow::{Context, Result};
use figment::{providers::Serialized, Figment};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use types::{ConfigError, ALL_SETTINGS};

/// Environment prefix the host uses to pass project properties
pub const PROJECT_ENV_PREFIX: &str = "ORG_GRADLE_PROJECT_";

/// Builds the per-invocation property store.
///
/// Sources are merged in order, later ones overriding earlier ones: the
/// properties file, `ORG_GRADLE_PROJECT_`-prefixed environment variables,
/// then explicit `key=value` overrides.
#[derive(Debug, Clone, Default)]
pub struct PropertyStoreLoader {
    file: Option<PathBuf>,
    project_env: bool,
    overrides: BTreeMap<String, String>,
}

impl PropertyStoreLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read properties from a YAML file
    pub fn file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read `ORG_GRADLE_PROJECT_<name>` environment variables
    pub fn project_env(mut self, enabled: bool) -> Self {
        self.project_env = enabled;
        self
    }

    /// Add a single override
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(name.into(), value.into());
        self
    }

    /// Add overrides given as `key=value` strings
    pub fn overrides<I, S>(mut self, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pair in pairs {
            let (name, value) = parse_override(pair.as_ref())?;
            self.overrides.insert(name, value);
        }
        Ok(self)
    }

    /// Load the property store
    pub fn load(&self) -> Result<PropertyStore> {
        let mut figment = Figment::new();

        if let Some(path) = &self.file {
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                }
                .into());
            }
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read properties file {}", path.display()))?;
            let properties = parse_properties(&content)
                .with_context(|| format!("Failed to parse properties file {}", path.display()))?;
            figment = figment.merge(Serialized::defaults(properties));
        }

        if self.project_env {
            figment = figment.merge(Serialized::defaults(project_env_properties()));
        }

        figment = figment.merge(Serialized::defaults(&self.overrides));

        let properties: BTreeMap<String, String> = figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
            .context("Failed to load project properties")?;

        let store = PropertyStore::from(properties);
        debug!("Loaded {} project properties", store.len());

        Ok(store)
    }

    /// Load a property store from a YAML string (for testing)
    pub fn load_from_str(yaml_content: &str) -> Result<PropertyStore> {
        let properties =
            parse_properties(yaml_content).context("Failed to parse properties from string")?;
        Ok(PropertyStore::from(properties))
    }

    /// Create an example properties file listing every recognized setting
    pub fn create_example<P: AsRef<Path>>(path: P) -> Result<()> {
        let example: BTreeMap<&str, &str> = ALL_SETTINGS
            .iter()
            .map(|s| (s.name, s.default.unwrap_or("")))
            .collect();
        let yaml_content = serde_yaml::to_string(&example)
            .context("Failed to serialize example properties")?;

        std::fs::write(path.as_ref(), yaml_content)
            .context("Failed to write example properties file")?;

        Ok(())
    }
}

/// Parse a flat YAML mapping of properties.
///
/// Scalars keep the text they were written with, so `1.10` stays `1.10` and
/// `007` stays `007`. Keys with an empty or null value are left out, the
/// same as a property that was never set.
fn parse_properties(yaml: &str) -> std::result::Result<BTreeMap<String, String>, ConfigError> {
    let raw: BTreeMap<String, Option<String>> = serde_yaml::from_str(yaml).map_err(|e| {
        ConfigError::ParseError(format!(
            "{} (property values must be scalars; quote anything else)",
            e
        ))
    })?;

    Ok(raw
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect())
}

/// Collect `ORG_GRADLE_PROJECT_<name>` variables, keeping values as raw strings
fn project_env_properties() -> BTreeMap<String, String> {
    std::env::vars()
        .filter_map(|(key, value)| {
            key.strip_prefix(PROJECT_ENV_PREFIX)
                .filter(|name| !name.is_empty())
                .map(|name| (name.to_string(), value))
        })
        .collect()
}

/// Split a `key=value` override; the value may itself contain `=`
pub fn parse_override(pair: &str) -> std::result::Result<(String, String), ConfigError> {
    match pair.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(ConfigError::InvalidOverride {
            value: pair.to_string(),
        }),
    }
}
