//! MappingPlan entity - the compiled, reusable conversion between two types
//!
//! A plan is immutable once built. It is shared through `Arc` by the plan
//! cache and applied to any number of source instances.

use std::any::Any;
use std::fmt;

use crate::domain::entities::type_descriptor::{Constructor, FieldDescriptor, Instance};
use crate::domain::value_objects::{TypePair, ValueType};
use crate::error::{MapError, MapResult};

/// One validated source-field-to-destination-field correspondence
#[derive(Debug, Clone)]
pub struct FieldBinding {
    source: FieldDescriptor,
    destination: FieldDescriptor,
}

impl FieldBinding {
    pub(crate) fn new(source: FieldDescriptor, destination: FieldDescriptor) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Field name shared by both sides
    pub fn name(&self) -> &'static str {
        self.destination.name()
    }

    pub fn source(&self) -> &FieldDescriptor {
        &self.source
    }

    pub fn destination(&self) -> &FieldDescriptor {
        &self.destination
    }
}

/// Why a field did not become part of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Readable on the source, but the destination has no writable field of that name
    NoDestination,
    /// Writable on the destination, but the source has no readable field of that name
    NoSource,
    /// Same name on both sides, but the value types are not assignable
    NotAssignable { from: ValueType, to: ValueType },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoDestination => write!(f, "no writable destination field"),
            SkipReason::NoSource => write!(f, "no readable source field"),
            SkipReason::NotAssignable { from, to } => {
                write!(f, "{} is not assignable to {}", from, to)
            }
        }
    }
}

/// A field left out of a plan, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedField {
    pub name: &'static str,
    pub reason: SkipReason,
}

/// Compiled conversion from one type to another
pub struct MappingPlan {
    pair: TypePair,
    bindings: Vec<FieldBinding>,
    skipped: Vec<SkippedField>,
    constructor: Constructor,
}

impl MappingPlan {
    pub(crate) fn new(
        pair: TypePair,
        bindings: Vec<FieldBinding>,
        skipped: Vec<SkippedField>,
        constructor: Constructor,
    ) -> Self {
        Self {
            pair,
            bindings,
            skipped,
            constructor,
        }
    }

    pub fn pair(&self) -> TypePair {
        self.pair
    }

    /// Bindings in the order they are applied
    pub fn bindings(&self) -> &[FieldBinding] {
        &self.bindings
    }

    /// Fields that were dropped while compiling
    pub fn skipped(&self) -> &[SkippedField] {
        &self.skipped
    }

    /// Whether the plan copies no fields at all
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Build a new destination and copy every bound field from `source`
    ///
    /// The source's runtime type is not checked up front; a foreign source
    /// only fails once a binding cannot read from it.
    pub fn apply(&self, source: &dyn Any) -> MapResult<Instance> {
        let mut destination = (self.constructor)();

        for binding in &self.bindings {
            let value = binding
                .source
                .read(source)
                .ok_or_else(|| self.transfer_error(binding))?;
            binding
                .destination
                .write(&mut *destination, value)
                .map_err(|_| self.transfer_error(binding))?;
        }

        Ok(destination)
    }

    fn transfer_error(&self, binding: &FieldBinding) -> MapError {
        MapError::FieldTransfer {
            pair: self.pair,
            field: binding.name().to_string(),
        }
    }
}

impl fmt::Debug for MappingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingPlan")
            .field("pair", &self.pair)
            .field("bindings", &self.bindings)
            .field("skipped", &self.skipped)
            .finish()
    }
}

impl fmt::Display for MappingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.pair)?;
        for binding in &self.bindings {
            writeln!(
                f,
                "  = {}: {} -> {}",
                binding.name(),
                binding.source.value_type(),
                binding.destination.value_type()
            )?;
        }
        for skipped in &self.skipped {
            writeln!(f, "  - {}: {}", skipped.name, skipped.reason)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TypeDescriptor;
    use std::sync::Arc;

    #[derive(Default)]
    struct Source {
        code: u32,
    }

    #[derive(Default, Debug, PartialEq)]
    struct Target {
        code: u32,
    }

    fn plan() -> MappingPlan {
        let source = TypeDescriptor::builder::<Source>()
            .field("code", |s: &Source| &s.code, |s: &mut Source| &mut s.code)
            .build();
        let target = TypeDescriptor::builder::<Target>()
            .default_constructor()
            .field("code", |t: &Target| &t.code, |t: &mut Target| &mut t.code)
            .build();
        let binding = FieldBinding::new(
            source.field("code").unwrap().clone(),
            target.field("code").unwrap().clone(),
        );
        MappingPlan::new(
            TypePair::new(source.key(), target.key()),
            vec![binding],
            Vec::new(),
            Arc::clone(target.constructor().unwrap()),
        )
    }

    #[test]
    fn apply_copies_bound_fields() {
        let out = plan().apply(&Source { code: 77 }).unwrap();
        assert_eq!(*out.downcast::<Target>().unwrap(), Target { code: 77 });
    }

    #[test]
    fn apply_reports_unreadable_source() {
        let err = plan().apply(&"not a source").unwrap_err();
        match err {
            MapError::FieldTransfer { field, .. } => assert_eq!(field, "code"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn display_lists_bindings_and_skips() {
        let mut plan = plan();
        plan.skipped.push(SkippedField {
            name: "note",
            reason: SkipReason::NoSource,
        });
        let rendered = plan.to_string();
        assert_eq!(
            rendered,
            "Source -> Target\n  = code: u32 -> u32\n  - note: no readable source field\n"
        );
    }
}
