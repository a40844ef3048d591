//! In-memory project host

use crate::coverage::{TaskWiring, COVERAGE_REPORT_TASK, TEST_TASK};
use crate::host::ProjectHost;
use config::PropertyStore;
use repository::{RepositoryHandler, RepositoryRegistry};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;
use types::{ConventionsError, Result};

/// State of a task known to the project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskState {
    pub description: Option<String>,
    pub depends_on: Vec<String>,
    pub finalized_by: Vec<String>,
    pub xml_report_required: bool,
}

/// A project that records everything applied to it.
///
/// Mirrors the host behaviour the conventions depend on: the `java` plugin
/// adds the `test` task and the `jacoco` plugin adds the coverage report
/// task when `test` exists.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProject {
    properties: PropertyStore,
    plugins: Vec<String>,
    repositories: RepositoryRegistry,
    tasks: BTreeMap<String, TaskState>,
}

impl InMemoryProject {
    pub fn new(properties: PropertyStore) -> Self {
        Self {
            properties,
            ..Self::default()
        }
    }

    /// Whether a plugin has been applied
    pub fn has_plugin(&self, id: &str) -> bool {
        self.plugins.iter().any(|p| p == id)
    }

    /// Applied plugins, in application order
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    pub fn registry(&self) -> &RepositoryRegistry {
        &self.repositories
    }

    pub fn task(&self, name: &str) -> Option<&TaskState> {
        self.tasks.get(name)
    }

    fn task_mut(&mut self, name: &str) -> Result<&mut TaskState> {
        self.tasks.get_mut(name).ok_or_else(|| ConventionsError::Host {
            operation: "wire_task".to_string(),
            message: format!("Task with name '{}' not found", name),
        })
    }
}

impl ProjectHost for InMemoryProject {
    fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    fn apply_plugin(&mut self, id: &str) -> Result<()> {
        if self.has_plugin(id) {
            return Ok(());
        }
        debug!(plugin = id, "applying plugin");
        self.plugins.push(id.to_string());

        match id {
            "java" => {
                self.tasks.entry(TEST_TASK.to_string()).or_default();
            }
            "jacoco" if self.tasks.contains_key(TEST_TASK) => {
                self.tasks.entry(COVERAGE_REPORT_TASK.to_string()).or_default();
            }
            _ => {}
        }

        Ok(())
    }

    fn repositories(&mut self) -> &mut dyn RepositoryHandler {
        &mut self.repositories
    }

    fn wire_task(&mut self, wiring: &TaskWiring) -> Result<()> {
        let report = &wiring.finalized_by;
        // Both tasks must exist before either is touched
        self.task_mut(&report.name)?;

        let task = self.task_mut(&wiring.task)?;
        if !task.finalized_by.contains(&report.name) {
            task.finalized_by.push(report.name.clone());
        }

        let report_state = self.task_mut(&report.name)?;
        report_state.description = Some(report.description.clone());
        for dependency in &report.depends_on {
            if !report_state.depends_on.contains(dependency) {
                report_state.depends_on.push(dependency.clone());
            }
        }
        report_state.xml_report_required = report.xml_required;

        Ok(())
    }
}
