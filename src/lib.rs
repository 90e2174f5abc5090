//! fieldmap - cached, plan-compiled conversion between record types
//!
//! fieldmap converts a value of one type into another by copying fields that
//! share a name and an assignable value type. The matching work happens once
//! per (source, destination) pair: it produces a `MappingPlan` that is cached
//! by the `Mapper` and reused for every later conversion between the same
//! two types.
//!
//! ```
//! use fieldmap::{mappable, Mapper};
//!
//! #[derive(Default)]
//! struct Order { order_id: i32, order_name: String }
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct OrderDto { order_id: i32, order_name: String, note: String }
//!
//! mappable!(Order { order_id, order_name });
//! mappable!(OrderDto { order_id, order_name, note });
//!
//! let mapper = Mapper::new();
//! let order = Order { order_id: 1, order_name: "OrderName".into() };
//! let dto: OrderDto = mapper.map(&order).unwrap();
//! assert_eq!(dto.order_id, 1);
//! assert_eq!(dto.note, "");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::{CacheStats, Mapper, PlanCache};
pub use config::{ConfigWarning, MapperConfig};
pub use domain::entities::{
    FieldBinding, FieldDescriptor, Instance, MappingPlan, SkipReason, SkippedField,
    TypeDescriptor, TypeDescriptorBuilder,
};
pub use domain::ports::{FieldType, FieldValue, Mappable};
pub use domain::services::{CompileOptions, PlanCompiler};
pub use domain::value_objects::{EmptyPlanPolicy, TypeKey, TypePair, ValueType};
pub use error::{MapError, MapResult};
