//! Value Type Value Object
//!
//! Identity of a field's declared value type, plus the assignability rule
//! used when binding source fields to destination fields.

use std::any::{type_name, TypeId};
use std::fmt;

/// Declared type of a field value
#[derive(Debug, Clone, Copy)]
pub struct ValueType {
    id: TypeId,
    name: &'static str,
    /// For `Option<T>`, the identity of `T`
    lifted_from: Option<TypeId>,
}

impl ValueType {
    /// Value type for `T`
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            lifted_from: None,
        }
    }

    /// Value type for `Option<T>`, which also accepts plain `T` values
    pub fn optional<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<Option<T>>(),
            name: type_name::<Option<T>>(),
            lifted_from: Some(TypeId::of::<T>()),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this is an `Option<_>` value type
    pub fn is_optional(&self) -> bool {
        self.lifted_from.is_some()
    }

    /// Whether a value of this type can be stored in a field of type `target`
    ///
    /// True for identical types, and for `T` into `Option<T>`. There is no
    /// numeric widening.
    pub fn is_assignable_to(&self, target: &ValueType) -> bool {
        self.id == target.id || target.lifted_from == Some(self.id)
    }
}

impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ValueType {}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
