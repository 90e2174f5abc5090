//! Configuration module for fieldmap
//!
//! Configuration hierarchy:
//! 1. Values set in code or CLI flags (highest priority)
//! 2. Environment variables (FIELDMAP_*)
//! 3. TOML config file
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use types::{CacheConfig, CompilerConfig, EmptyPlanPolicy, MapperConfig};
