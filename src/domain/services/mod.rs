//! Domain Services
//!
//! Stateless logic that operates on descriptors and plans.

pub mod plan_compiler;

pub use plan_compiler::{CompileOptions, PlanCompiler};
