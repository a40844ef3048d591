//! Coverage report task wiring

use serde::Serialize;

/// Task added by the `java` plugin
pub const TEST_TASK: &str = "test";

/// Report task added by the `jacoco` plugin
pub const COVERAGE_REPORT_TASK: &str = "jacocoTestReport";

/// Configuration of a report task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTask {
    pub name: String,
    pub description: String,
    pub depends_on: Vec<String>,
    /// Machine-readable XML output must be produced
    pub xml_required: bool,
}

/// Instruction for the host scheduler: run `finalized_by` after `task`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskWiring {
    pub task: String,
    pub finalized_by: ReportTask,
}

impl TaskWiring {
    /// The test task finalized by the XML coverage report
    pub fn coverage_report() -> Self {
        Self {
            task: TEST_TASK.to_string(),
            finalized_by: ReportTask {
                name: COVERAGE_REPORT_TASK.to_string(),
                description: "tests are required to run before generating the report".to_string(),
                depends_on: vec![TEST_TASK.to_string()],
                xml_required: true,
            },
        }
    }
}
