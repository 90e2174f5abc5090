//! Mapper - the long-lived conversion entry point
//!
//! Owns a plan compiler and a plan cache. Hosts are expected to create one
//! `Mapper` and reuse it; a fresh mapper per call recompiles every plan.

use std::any::Any;
use std::sync::Arc;

use crate::application::plan_cache::{CacheStats, PlanCache};
use crate::config::MapperConfig;
use crate::domain::entities::{Instance, MappingPlan, TypeDescriptor};
use crate::domain::ports::Mappable;
use crate::domain::services::PlanCompiler;
use crate::domain::value_objects::TypePair;
use crate::error::{MapError, MapResult};

/// Converts values between mappable types using cached plans
///
/// `Mapper` is `Send + Sync`; share it by reference or `Arc`.
#[derive(Debug, Default)]
pub struct Mapper {
    compiler: PlanCompiler,
    cache: PlanCache,
}

impl Mapper {
    /// Create a mapper with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper from a loaded configuration
    pub fn with_config(config: &MapperConfig) -> Self {
        Self {
            compiler: PlanCompiler::new(config.compile_options()),
            cache: PlanCache::with_capacity(config.cache.initial_capacity),
        }
    }

    /// Convert `source` into a new `D`
    ///
    /// The plan for `(S, D)` is compiled on first use and served from the
    /// cache afterwards.
    pub fn map<S: Mappable, D: Mappable>(&self, source: &S) -> MapResult<D> {
        let plan = self.plan::<S, D>()?;
        let instance = plan.apply(source)?;
        instance
            .downcast::<D>()
            .map(|destination| *destination)
            .map_err(|_| MapError::MissingPlan {
                pair: TypePair::of::<S, D>(),
            })
    }

    /// Fetch or compile the plan for mapping `S` into `D` without converting anything
    pub fn plan<S: Mappable, D: Mappable>(&self) -> MapResult<Arc<MappingPlan>> {
        let pair = TypePair::of::<S, D>();
        self.cache
            .get_or_compile(pair, || self.compiler.compile(&S::describe(), &D::describe()))
    }

    /// Convert a type-erased `source` using explicit descriptors as type tags
    ///
    /// The descriptors are only consulted when the pair is not cached yet.
    pub fn map_with(
        &self,
        source: &dyn Any,
        source_type: &TypeDescriptor,
        destination_type: &TypeDescriptor,
    ) -> MapResult<Instance> {
        let pair = TypePair::new(source_type.key(), destination_type.key());
        let plan = self
            .cache
            .get_or_compile(pair, || self.compiler.compile(source_type, destination_type))?;
        plan.apply(source)
    }

    pub fn cache(&self) -> &PlanCache {
        &self.cache
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
