//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod empty_plan_policy;
mod type_pair;
mod value_type;

pub use config_warning::ConfigWarning;
pub use empty_plan_policy::EmptyPlanPolicy;
pub(crate) use type_pair::short_type_name;
pub use type_pair::{TypeKey, TypePair};
pub use value_type::ValueType;
