//! Plan cache keyed by type pair
//!
//! Backed by a sharded `DashMap`, so reading an installed plan never waits on
//! a write for a different key. Compilation runs outside any shard lock.
//! Two callers racing on the same new key may both compile; the first insert
//! wins and the loser's plan is dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::Serialize;

use crate::domain::entities::MappingPlan;
use crate::domain::value_objects::TypePair;
use crate::error::MapResult;

/// Counters describing cache activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Installed plans
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    /// Successful compilations, including ones that lost an install race
    pub compilations: u64,
    /// Compiled plans dropped because another caller installed first
    pub discarded: u64,
}

/// Concurrent store of compiled plans
///
/// Grows monotonically; an installed plan is never replaced or removed.
#[derive(Debug, Default)]
pub struct PlanCache {
    plans: DashMap<TypePair, Arc<MappingPlan>>,
    hits: AtomicU64,
    misses: AtomicU64,
    compilations: AtomicU64,
    discarded: AtomicU64,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upper bound on the capacity reserved up front
    pub const MAX_INITIAL_CAPACITY: usize = 1 << 16;

    /// Create a cache with room for `capacity` plans before reallocating
    ///
    /// Requests above `MAX_INITIAL_CAPACITY` are clamped.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            plans: DashMap::with_capacity(capacity.min(Self::MAX_INITIAL_CAPACITY)),
            ..Self::default()
        }
    }

    /// Return the installed plan for `pair`, compiling and installing it on a miss
    ///
    /// Compile errors are returned to the caller and nothing is cached, so the
    /// next request for the same pair compiles again.
    pub fn get_or_compile<F>(&self, pair: TypePair, compile: F) -> MapResult<Arc<MappingPlan>>
    where
        F: FnOnce() -> MapResult<MappingPlan>,
    {
        if let Some(plan) = self.get(&pair) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(%pair, "plan cache hit");
            return Ok(plan);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(%pair, "plan cache miss");

        let compiled = Arc::new(compile()?);
        self.compilations.fetch_add(1, Ordering::Relaxed);

        match self.plans.entry(pair) {
            Entry::Occupied(entry) => {
                self.discarded.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(%pair, "discarding plan compiled by a losing racer");
                Ok(Arc::clone(entry.get()))
            }
            Entry::Vacant(entry) => {
                entry.insert(Arc::clone(&compiled));
                tracing::debug!(%pair, "installed mapping plan");
                Ok(compiled)
            }
        }
    }

    /// Installed plan for `pair`, if any
    pub fn get(&self, pair: &TypePair) -> Option<Arc<MappingPlan>> {
        self.plans.get(pair).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, pair: &TypePair) -> bool {
        self.plans.contains_key(pair)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Installed pairs, in no particular order
    pub fn pairs(&self) -> Vec<TypePair> {
        self.plans.iter().map(|entry| *entry.key()).collect()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.plans.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            compilations: self.compilations.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
        }
    }
}
