//! Mappable port - the "describable" capability
//!
//! Any type that takes part in a mapping exposes its named, typed fields
//! through a `TypeDescriptor`. The plan compiler works only against this
//! capability, never against runtime introspection.

use std::any::Any;

use crate::domain::entities::TypeDescriptor;

/// A type that can be the source or destination of a mapping
///
/// Usually implemented with the [`mappable!`](crate::mappable) macro.
pub trait Mappable: Any + Send + Sized {
    /// Describe the fields and construction strategy of this type
    ///
    /// Only called when a plan involving this type is compiled.
    fn describe() -> TypeDescriptor;
}

/// Implement `Mappable` for a plain struct by listing its fields
///
/// Each listed field is readable and writable. The type is constructed with
/// `Default::default()`, unless the `no_default` form is used, in which case
/// the type can still be a mapping source but never a destination.
///
/// ```
/// use fieldmap::{mappable, Mapper};
///
/// #[derive(Default)]
/// struct Order { order_id: i32, order_name: String }
///
/// #[derive(Default, Debug, PartialEq)]
/// struct OrderDto { order_id: i32, order_name: String }
///
/// mappable!(Order { order_id, order_name });
/// mappable!(OrderDto { order_id, order_name });
///
/// let mapper = Mapper::new();
/// let order = Order { order_id: 1, order_name: "OrderName".into() };
/// let dto: OrderDto = mapper.map(&order).unwrap();
/// assert_eq!(dto, OrderDto { order_id: 1, order_name: "OrderName".into() });
/// ```
#[macro_export]
macro_rules! mappable {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::Mappable for $ty {
            fn describe() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::builder::<$ty>()
                    .name(stringify!($ty))
                    .default_constructor()
                    $(.field(stringify!($field), |v: &$ty| &v.$field, |v: &mut $ty| &mut v.$field))*
                    .build()
            }
        }
    };
    ($ty:ident no_default { $($field:ident),* $(,)? }) => {
        impl $crate::Mappable for $ty {
            fn describe() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::builder::<$ty>()
                    .name(stringify!($ty))
                    $(.field(stringify!($field), |v: &$ty| &v.$field, |v: &mut $ty| &mut v.$field))*
                    .build()
            }
        }
    };
}
