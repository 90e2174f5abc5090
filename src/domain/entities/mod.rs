//! Domain Entities
//!
//! Descriptors of mappable types and the plans compiled from them.

mod mapping_plan;
mod type_descriptor;

pub use mapping_plan::{FieldBinding, MappingPlan, SkipReason, SkippedField};
pub use type_descriptor::{FieldDescriptor, Instance, TypeDescriptor, TypeDescriptorBuilder};
