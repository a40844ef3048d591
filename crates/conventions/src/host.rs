//! Host build framework interface

use crate::coverage::TaskWiring;
use config::PropertyStore;
use repository::RepositoryHandler;
use types::Result;

/// The project the conventions are applied to.
///
/// Implemented by whatever build framework hosts the plugin. The plugin only
/// reads properties through it and hands it plugins, repositories and task
/// wiring to apply.
pub trait ProjectHost {
    /// The project's property set for this invocation
    fn properties(&self) -> &PropertyStore;

    /// Apply a built-in plugin by id
    fn apply_plugin(&mut self, id: &str) -> Result<()>;

    /// The project's repository handler
    fn repositories(&mut self) -> &mut dyn RepositoryHandler;

    /// Configure task ordering
    fn wire_task(&mut self, wiring: &TaskWiring) -> Result<()>;
}
