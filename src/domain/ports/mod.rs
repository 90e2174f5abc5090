//! Domain Ports (Interfaces)
//!
//! These traits define what a type must provide to take part in a mapping.

pub mod field_type;
pub mod mappable;

pub use field_type::{FieldType, FieldValue};
pub use mappable::Mappable;
