//! Shared types for the ODS conventions workspace
//!
//! This crate contains the setting definitions, repository types and errors
//! used by the resolver, the repository configurator and the plugin itself.

pub mod error;
pub mod repository;
pub mod setting;
pub mod utils;

// Re-export commonly used types
pub use error::{ConfigError, ConventionsError, Result};
pub use repository::{Credentials, RepositoryEntry};
pub use setting::*;
