//! Domain Layer
//!
//! Pure mapping logic without shared state.
//!
//! ## Structure
//!
//! - `entities/` - Type descriptors and compiled mapping plans
//! - `value_objects/` - Immutable value types (TypePair, ValueType, EmptyPlanPolicy)
//! - `services/` - The plan compiler
//! - `ports/` - Capabilities a type implements to take part in mapping

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
