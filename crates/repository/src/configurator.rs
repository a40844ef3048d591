//! Repository configurator implementation

use crate::registry::RepositoryHandler;
use config::ResolvedConfig;
use serde::Serialize;
use tracing::{info, warn};
use types::{
    utils::join_url, ConfigError, Credentials, RepositoryEntry, Setting, NEXUS_PASSWORD,
    NEXUS_URL, NEXUS_USER, NO_NEXUS,
};

/// Path suffixes of the Nexus proxy repositories, in registration order
pub const DEFAULT_REPO_PATHS: [&str; 3] = [
    "/repository/jcenter/",
    "/repository/maven-public/",
    "/repository/atlassian_public/",
];

/// Name the host gives the Maven Central repository
pub const MAVEN_CENTRAL_NAME: &str = "MavenRepo";

/// Maven Central URL
pub const MAVEN_CENTRAL_URL: &str = "https://repo.maven.apache.org/maven2/";

/// How dependencies are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositoryMode {
    /// Through the Nexus proxy repositories
    Proxy,
    /// Directly from the public default repository
    PublicDefault,
}

/// Repositories to register with the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryPlan {
    pub mode: RepositoryMode,
    pub entries: Vec<RepositoryEntry>,
}

impl RepositoryPlan {
    /// Register every planned repository with a handler
    pub fn apply_to(&self, handler: &mut dyn RepositoryHandler) {
        match self.mode {
            RepositoryMode::PublicDefault => handler.maven_central(),
            RepositoryMode::Proxy => {
                for entry in &self.entries {
                    handler.maven(entry.clone());
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decides between the proxy repositories and the public default
pub struct RepositoryConfigurator;

impl RepositoryConfigurator {
    /// Build the repository plan from resolved settings.
    ///
    /// With `no_nexus` true the plan holds only Maven Central. Otherwise the
    /// base URL, username and password must all be set; the first missing one
    /// fails the whole operation and nothing is planned.
    pub fn configure(config: &ResolvedConfig) -> Result<RepositoryPlan, ConfigError> {
        if config.no_nexus() {
            warn!("{} is set to true, only setting mavenCentral() as repository", NO_NEXUS);
            return Ok(RepositoryPlan {
                mode: RepositoryMode::PublicDefault,
                entries: vec![Self::maven_central()],
            });
        }

        let base_url = Self::required(config, &NEXUS_URL)?;
        let username = Self::required(config, &NEXUS_USER)?;
        let password = Self::required(config, &NEXUS_PASSWORD)?;

        info!("repo manager is active, setting default repos ... {:?}", DEFAULT_REPO_PATHS);
        let credentials = Credentials::new(username, password);
        let entries = DEFAULT_REPO_PATHS
            .iter()
            .map(|path| {
                RepositoryEntry::authenticated(*path, join_url(base_url, path), credentials.clone())
            })
            .collect();

        Ok(RepositoryPlan {
            mode: RepositoryMode::Proxy,
            entries,
        })
    }

    /// Build the plan and register it with a handler.
    ///
    /// Nothing is registered when configuration fails.
    pub fn configure_into(
        config: &ResolvedConfig,
        handler: &mut dyn RepositoryHandler,
    ) -> Result<RepositoryPlan, ConfigError> {
        let plan = Self::configure(config)?;
        plan.apply_to(handler);
        Ok(plan)
    }

    fn required<'a>(config: &'a ResolvedConfig, setting: &Setting) -> Result<&'a str, ConfigError> {
        config
            .setting(setting)
            .ok_or_else(|| ConfigError::MissingRequiredSetting {
                setting: setting.name.to_string(),
                no_nexus: false,
            })
    }

    fn maven_central() -> RepositoryEntry {
        RepositoryEntry::public(MAVEN_CENTRAL_NAME, MAVEN_CENTRAL_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RepositoryRegistry;
    use config::{PropertyStore, SettingsResolver};
    use std::collections::HashMap;

    fn resolve(props: &[(&str, &str)], env: &[(&str, &str)]) -> ResolvedConfig {
        let store: PropertyStore = props.iter().copied().collect();
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SettingsResolver::new(&store, move |name: &str| env.get(name).cloned()).resolve_all()
    }

    fn missing_setting(result: Result<RepositoryPlan, ConfigError>) -> String {
        match result {
            Err(ConfigError::MissingRequiredSetting { setting, no_nexus }) => {
                assert!(!no_nexus);
                setting
            }
            other => panic!("expected MissingRequiredSetting, got {:?}", other),
        }
    }

    #[test]
    fn test_proxy_settings_from_properties() {
        let config = resolve(
            &[("nexus_url", "url"), ("nexus_user", "user"), ("nexus_pw", "pwd")],
            &[],
        );
        let plan = RepositoryConfigurator::configure(&config).unwrap();

        assert_eq!(plan.mode, RepositoryMode::Proxy);
        assert_eq!(plan.len(), 3);
        for entry in &plan.entries {
            assert!(entry.url.starts_with("url/repository/"), "{}", entry.url);
        }
    }

    #[test]
    fn test_proxy_settings_from_env_nexus_host() {
        let config = resolve(
            &[],
            &[("NEXUS_HOST", "url"), ("NEXUS_USERNAME", "user"), ("NEXUS_PASSWORD", "pwd")],
        );
        let plan = RepositoryConfigurator::configure(&config).unwrap();
        assert_eq!(plan.len(), 3);
        assert!(plan.entries.iter().all(|e| e.url.starts_with("url/repository/")));
    }

    #[test]
    fn test_proxy_settings_from_env_nexus_url() {
        let config = resolve(
            &[],
            &[("NEXUS_URL", "url"), ("NEXUS_USERNAME", "user"), ("NEXUS_PASSWORD", "pwd")],
        );
        let plan = RepositoryConfigurator::configure(&config).unwrap();
        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn test_insufficient_env_settings() {
        let cases: [(&[(&str, &str)], &str); 3] = [
            (&[], "nexus_url"),
            (&[("NEXUS_URL", "url")], "nexus_user"),
            (&[("NEXUS_URL", "url"), ("NEXUS_USERNAME", "user")], "nexus_pw"),
        ];

        for (env, expected) in cases {
            let config = resolve(&[], env);
            assert_eq!(missing_setting(RepositoryConfigurator::configure(&config)), expected);
        }
    }

    #[test]
    fn test_insufficient_property_settings() {
        let cases: [(&[(&str, &str)], &str); 3] = [
            (&[], "nexus_url"),
            (&[("nexus_url", "url")], "nexus_user"),
            (&[("nexus_url", "url"), ("nexus_user", "user")], "nexus_pw"),
        ];

        for (props, expected) in cases {
            let config = resolve(props, &[]);
            assert_eq!(missing_setting(RepositoryConfigurator::configure(&config)), expected);
        }
    }

    #[test]
    fn test_failure_registers_nothing() {
        let config = resolve(&[("nexus_url", "url"), ("nexus_user", "user")], &[]);
        let mut registry = RepositoryRegistry::new();

        let result = RepositoryConfigurator::configure_into(&config, &mut registry);

        assert!(result.is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_default_repos_with_credentials() {
        let config = resolve(
            &[
                ("nexus_url", "https://nexus.org/"),
                ("nexus_user", "nuser"),
                ("nexus_pw", "npwd"),
            ],
            &[],
        );
        let mut registry = RepositoryRegistry::new();
        RepositoryConfigurator::configure_into(&config, &mut registry).unwrap();

        assert_eq!(registry.len(), DEFAULT_REPO_PATHS.len());
        for path in DEFAULT_REPO_PATHS {
            let repo = registry
                .find_by_name(path)
                .unwrap_or_else(|| panic!("repo '{}' does not exist!", path));
            assert_eq!(repo.name, path);
            assert_eq!(repo.url, format!("https://nexus.org{}", path));
            let credentials = repo.credentials.as_ref().unwrap();
            assert_eq!(credentials.username, "nuser");
            assert_eq!(credentials.password, "npwd");
        }
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let config = resolve(
            &[
                ("nexus_url", "https://nexus.org"),
                ("nexus_user", "nuser"),
                ("nexus_pw", "npwd"),
            ],
            &[],
        );
        let plan = RepositoryConfigurator::configure(&config).unwrap();
        assert_eq!(plan.entries[0].url, "https://nexus.org/repository/jcenter/");
    }

    #[test]
    fn test_no_nexus_registers_only_maven_central() {
        for flag in ["true", "TRUE", "True"] {
            let config = resolve(&[("no_nexus", flag)], &[]);
            let mut registry = RepositoryRegistry::new();
            let plan = RepositoryConfigurator::configure_into(&config, &mut registry).unwrap();

            assert_eq!(plan.mode, RepositoryMode::PublicDefault);
            assert_eq!(registry.len(), 1);
            let repo = registry.iter().next().unwrap();
            assert_eq!(repo.url, MAVEN_CENTRAL_URL);
            assert!(repo.credentials.is_none());
        }
    }

    #[test]
    fn test_no_nexus_from_env() {
        let config = resolve(&[], &[("NO_NEXUS", "true")]);
        let plan = RepositoryConfigurator::configure(&config).unwrap();
        assert_eq!(plan.mode, RepositoryMode::PublicDefault);
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_non_true_flag_keeps_proxy_enabled() {
        for flag in ["false", "yes", "1", ""] {
            let config = resolve(&[("no_nexus", flag)], &[]);
            assert_eq!(
                missing_setting(RepositoryConfigurator::configure(&config)),
                "nexus_url"
            );
        }
    }

    #[test]
    fn test_plan_serialization() {
        let config = resolve(&[("no_nexus", "true")], &[]);
        let plan = RepositoryConfigurator::configure(&config).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["mode"], "public_default");
        assert_eq!(json["entries"][0]["name"], MAVEN_CENTRAL_NAME);
    }
}
