//! Settings resolution against the property store and the environment

use crate::schema::{PropertyStore, Resolved, ResolvedConfig, SettingSource};
use tracing::{debug, info};
use types::{utils::mask_secret, Setting, ALL_SETTINGS};

/// Read-only lookup of environment variables by name
pub trait EnvLookup {
    fn lookup(&self, name: &str) -> Option<String>;
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// The environment of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Resolve a single setting.
///
/// The store is consulted by canonical name first, then each environment
/// alias in declared order, then the default. Returns `None` only when all
/// three come up empty.
pub fn resolve<E: EnvLookup + ?Sized>(
    store: &PropertyStore,
    env: &E,
    name: &str,
    env_aliases: &[&str],
    default: Option<&str>,
) -> Option<Resolved> {
    if let Some(value) = store.get(name) {
        return Some(Resolved {
            value: value.to_string(),
            source: SettingSource::Store,
        });
    }

    let from_env = env_aliases.iter().find_map(|alias| {
        env.lookup(alias).map(|value| Resolved {
            value,
            source: SettingSource::Environment((*alias).to_string()),
        })
    });
    if from_env.is_some() {
        return from_env;
    }

    default.map(|value| Resolved {
        value: value.to_string(),
        source: SettingSource::Default,
    })
}

/// Resolves the recognized settings for one invocation
pub struct SettingsResolver<'a, E> {
    store: &'a PropertyStore,
    env: E,
}

impl<'a, E: EnvLookup> SettingsResolver<'a, E> {
    /// Create a resolver over a property store and an environment
    pub fn new(store: &'a PropertyStore, env: E) -> Self {
        Self { store, env }
    }

    /// Resolve one recognized setting
    pub fn resolve_setting(&self, setting: &Setting) -> Option<Resolved> {
        let resolved = resolve(
            self.store,
            &self.env,
            setting.name,
            setting.env_aliases,
            setting.default,
        );

        match &resolved {
            Some(r) if r.source == SettingSource::Default => {
                info!("property '{}' was not set", setting.name);
                info!("setting property '{}' to default {}", setting.name, r.value);
            }
            Some(r) => {
                let shown = if setting.secret {
                    mask_secret(&r.value)
                } else {
                    r.value.clone()
                };
                debug!(setting = setting.name, source = %r.source, "resolved property to {}", shown);
            }
            None => info!("property '{}' was not set", setting.name),
        }

        resolved
    }

    /// Resolve all recognized settings into a new unified configuration
    pub fn resolve_all(&self) -> ResolvedConfig {
        self.resolve_settings(&ALL_SETTINGS)
    }

    /// Resolve the given settings into a new unified configuration
    pub fn resolve_settings(&self, settings: &[Setting]) -> ResolvedConfig {
        let mut config = ResolvedConfig::from_store(self.store);
        for setting in settings {
            if let Some(resolved) = self.resolve_setting(setting) {
                config.insert(setting, resolved);
            }
        }
        config
    }
}
