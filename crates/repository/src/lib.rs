//! Repository configuration for the ODS conventions
//!
//! Turns resolved settings into the list of Maven repositories the host
//! should resolve dependencies from: the Nexus proxy mirrors with shared
//! credentials, or Maven Central when the proxy is disabled.

pub mod configurator;
pub mod registry;

pub use configurator::*;
pub use registry::{RepositoryHandler, RepositoryRegistry};
