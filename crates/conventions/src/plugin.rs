//! The conventions plugin

use crate::coverage::TaskWiring;
use crate::host::ProjectHost;
use config::{EnvLookup, ProcessEnv, ResolvedConfig, SettingsResolver};
use repository::{RepositoryConfigurator, RepositoryPlan};
use serde::Serialize;
use tracing::info;
use types::Result;

/// Id the plugin is registered under
pub const PLUGIN_ID: &str = "org.opendevstack.gradle.conventions";

/// Built-in plugins applied before anything else, in order
pub const BASE_PLUGINS: [&str; 2] = ["java", "jacoco"];

/// Everything the plugin did to a project
#[derive(Debug, Clone, Serialize)]
pub struct AppliedConventions {
    pub plugins: Vec<String>,
    pub repositories: RepositoryPlan,
    pub coverage: TaskWiring,
    #[serde(skip)]
    pub settings: ResolvedConfig,
}

/// Applies the OpenDevStack build conventions to a project
#[derive(Debug, Clone)]
pub struct ConventionsPlugin<E = ProcessEnv> {
    env: E,
}

impl ConventionsPlugin<ProcessEnv> {
    /// Plugin reading settings from the process environment
    pub fn new() -> Self {
        Self { env: ProcessEnv }
    }
}

impl Default for ConventionsPlugin<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvLookup> ConventionsPlugin<E> {
    /// Plugin reading settings from the given environment
    pub fn with_env(env: E) -> Self {
        Self { env }
    }

    /// Apply the conventions to a project.
    ///
    /// A missing proxy setting aborts before any repository is registered
    /// and before the coverage report is wired.
    pub fn apply<H: ProjectHost + ?Sized>(&self, project: &mut H) -> Result<AppliedConventions> {
        for id in BASE_PLUGINS {
            project.apply_plugin(id)?;
        }

        let env = |name: &str| self.env.lookup(name);
        let settings = SettingsResolver::new(project.properties(), env).resolve_all();
        let repositories = RepositoryConfigurator::configure(&settings)?;
        repositories.apply_to(project.repositories());

        let coverage = TaskWiring::coverage_report();
        project.wire_task(&coverage)?;

        info!(
            repositories = repositories.len(),
            "Applied {} to project", PLUGIN_ID
        );

        Ok(AppliedConventions {
            plugins: BASE_PLUGINS.iter().map(|p| p.to_string()).collect(),
            repositories,
            coverage,
            settings,
        })
    }
}
