//! Application Layer
//!
//! Stateful pieces built on the domain layer: the plan cache and the mapper
//! that hosts hold on to.

pub mod mapper;
pub mod plan_cache;

pub use mapper::Mapper;
pub use plan_cache::{CacheStats, PlanCache};
