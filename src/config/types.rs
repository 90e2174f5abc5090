//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::CompileOptions;
use crate::error::{MapError, MapResult};

use super::loader::{self, ConfigWarning};

// Re-export EmptyPlanPolicy from domain layer
pub use crate::domain::value_objects::EmptyPlanPolicy;

/// Plan compiler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    #[serde(default)]
    pub empty_plan: EmptyPlanPolicy,

    #[serde(default = "default_true")]
    pub report_skipped: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            empty_plan: EmptyPlanPolicy::default(),
            report_skipped: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Plan cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CacheConfig {
    /// Plans to reserve room for up front
    #[serde(default)]
    pub initial_capacity: usize,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MapperConfig {
    #[serde(default)]
    pub compiler: CompilerConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

impl MapperConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MapResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MapResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> MapResult<Self> {
        toml::from_str(content).map_err(|e| MapError::InvalidConfig {
            file: "<inline>".into(),
            message: e.to_string(),
        })
    }

    /// Load from a file if given, otherwise defaults, then apply env overrides
    pub fn load_or_default(path: Option<&Path>) -> MapResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(path)
    }

    /// Apply environment variable overrides (FIELDMAP_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Options handed to the plan compiler
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            empty_plan: self.compiler.empty_plan,
            report_skipped: self.compiler.report_skipped,
        }
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> MapResult<String> {
        toml::to_string(self).map_err(|e| MapError::InvalidConfig {
            file: "<inline>".into(),
            message: e.to_string(),
        })
    }
}
