//! Plan Compiler Service
//!
//! Turns a pair of type descriptors into a `MappingPlan`.
//!
//! ## Matching rules
//!
//! - Readable source fields are joined to writable destination fields by
//!   exact, case-sensitive name.
//! - A joined pair is kept only if the source value type is assignable to
//!   the destination value type.
//! - Everything else is dropped without error and recorded as a skipped
//!   field on the plan.

use std::sync::Arc;

use crate::domain::entities::{FieldBinding, MappingPlan, SkipReason, SkippedField, TypeDescriptor};
use crate::domain::value_objects::{EmptyPlanPolicy, TypePair};
use crate::error::{MapError, MapResult};

/// Options that shape how plans are compiled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// What to do when no fields match
    pub empty_plan: EmptyPlanPolicy,
    /// Emit a debug event for every skipped field
    pub report_skipped: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            empty_plan: EmptyPlanPolicy::default(),
            report_skipped: true,
        }
    }
}

/// Plan Compiler
///
/// Stateless apart from its options; compiling the same pair of
/// descriptors always yields the same plan.
#[derive(Debug, Clone, Default)]
pub struct PlanCompiler {
    options: CompileOptions,
}

impl PlanCompiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compile a plan that maps `source` instances into `destination` instances
    ///
    /// Fails with `UnconstructibleTarget` when the destination has no
    /// parameterless constructor, and with `EmptyPlan` only when the policy
    /// is `Reject` and no field matched.
    pub fn compile(
        &self,
        source: &TypeDescriptor,
        destination: &TypeDescriptor,
    ) -> MapResult<MappingPlan> {
        let pair = TypePair::new(source.key(), destination.key());

        let constructor = destination
            .constructor()
            .map(Arc::clone)
            .ok_or(MapError::UnconstructibleTarget { pair })?;

        let mut bindings = Vec::new();
        let mut skipped = Vec::new();

        for source_field in source.readable_fields() {
            let Some(destination_field) = destination
                .writable_fields()
                .find(|d| d.name() == source_field.name())
            else {
                skipped.push(SkippedField {
                    name: source_field.name(),
                    reason: SkipReason::NoDestination,
                });
                continue;
            };

            let from = source_field.value_type();
            let to = destination_field.value_type();
            if from.is_assignable_to(&to) {
                bindings.push(FieldBinding::new(source_field.clone(), destination_field.clone()));
            } else {
                skipped.push(SkippedField {
                    name: source_field.name(),
                    reason: SkipReason::NotAssignable { from, to },
                });
            }
        }

        for destination_field in destination.writable_fields() {
            let has_source = source
                .readable_fields()
                .any(|s| s.name() == destination_field.name());
            if !has_source {
                skipped.push(SkippedField {
                    name: destination_field.name(),
                    reason: SkipReason::NoSource,
                });
            }
        }

        if self.options.report_skipped {
            for field in &skipped {
                tracing::debug!(%pair, field = field.name, reason = %field.reason, "field skipped");
            }
        }

        if bindings.is_empty() {
            match self.options.empty_plan {
                EmptyPlanPolicy::Allow => {}
                EmptyPlanPolicy::Warn => {
                    tracing::warn!(%pair, "mapping plan binds no fields; destinations will stay at defaults");
                }
                EmptyPlanPolicy::Reject => return Err(MapError::EmptyPlan { pair }),
            }
        }

        tracing::debug!(%pair, bound = bindings.len(), skipped = skipped.len(), "compiled mapping plan");

        Ok(MappingPlan::new(pair, bindings, skipped, constructor))
    }
}
