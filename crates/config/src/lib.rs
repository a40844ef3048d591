//! Settings resolution for the ODS conventions
//!
//! This crate builds the host's property store from YAML files, prefixed
//! environment variables and explicit overrides, resolves the recognized
//! settings against the store and the process environment, and validates
//! the result.

pub mod loader;
pub mod resolver;
pub mod schema;
pub mod validation;

pub use loader::PropertyStoreLoader;
pub use resolver::*;
pub use schema::*;
pub use validation::*;
