//! OpenDevStack conventions plugin
//!
//! Applies the build conventions to a host project: the `java` and `jacoco`
//! plugins, the Nexus proxy (or Maven Central) repositories, and a coverage
//! report that runs after the tests.

pub mod coverage;
pub mod host;
pub mod plugin;
pub mod project;

pub use coverage::{ReportTask, TaskWiring};
pub use host::ProjectHost;
pub use plugin::{AppliedConventions, ConventionsPlugin, PLUGIN_ID};
pub use project::InMemoryProject;
