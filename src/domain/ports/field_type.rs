//! FieldType port - value types that can travel through a mapping plan
//!
//! Field values move through a plan type-erased as `FieldValue`. Each
//! `FieldType` knows its `ValueType` and how to rebuild itself from an
//! erased value that passed the assignability check.

use std::any::Any;
use std::sync::Arc;

use crate::domain::value_objects::ValueType;

/// A type-erased field value in transit from source to destination
pub type FieldValue = Box<dyn Any + Send>;

/// A value type that may appear as a mapped field
///
/// Copies are made with `Clone`, so `Arc` fields share their referent and
/// plain values are copied.
pub trait FieldType: Any + Clone + Send + Sync {
    /// Declared value type used for assignability checks
    fn value_type() -> ValueType {
        ValueType::of::<Self>()
    }

    /// Recover a concrete value, handing the erased value back on mismatch
    fn from_field_value(value: FieldValue) -> Result<Self, FieldValue> {
        value.downcast::<Self>().map(|v| *v)
    }
}

impl<T: FieldType> FieldType for Option<T> {
    fn value_type() -> ValueType {
        ValueType::optional::<T>()
    }

    fn from_field_value(value: FieldValue) -> Result<Self, FieldValue> {
        match value.downcast::<Self>() {
            Ok(v) => Ok(*v),
            Err(value) => T::from_field_value(value).map(Some),
        }
    }
}

impl<T: FieldType> FieldType for Vec<T> {}

impl<T: ?Sized + Send + Sync + 'static> FieldType for Arc<T> {}

/// Implement `FieldType` for types that are copied as a whole
///
/// ```
/// #[derive(Clone)]
/// struct Money(i64);
///
/// fieldmap::impl_field_type!(Money);
/// ```
#[macro_export]
macro_rules! impl_field_type {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::FieldType for $ty {})*
    };
}

crate::impl_field_type!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String,
);

crate::impl_field_type!(
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::Utc>,
    chrono::DateTime<chrono::FixedOffset>,
    chrono::DateTime<chrono::Local>,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_value_round_trips_through_erasure() {
        let erased: FieldValue = Box::new(42_i32);
        assert_eq!(i32::from_field_value(erased).ok(), Some(42));
    }

    #[test]
    fn mismatched_value_is_handed_back() {
        let erased: FieldValue = Box::new("text".to_string());
        let back = i32::from_field_value(erased).unwrap_err();
        assert_eq!(back.downcast_ref::<String>().map(String::as_str), Some("text"));
    }

    #[test]
    fn option_accepts_plain_and_optional_values() {
        let plain: FieldValue = Box::new(7_u8);
        assert_eq!(Option::<u8>::from_field_value(plain).ok(), Some(Some(7)));

        let optional: FieldValue = Box::new(None::<u8>);
        assert_eq!(Option::<u8>::from_field_value(optional).ok(), Some(None));
    }

    #[test]
    fn arc_fields_share_their_referent() {
        let shared: Arc<str> = Arc::from("shared");
        let erased: FieldValue = Box::new(shared.clone());
        let back = Arc::<str>::from_field_value(erased).ok().unwrap();
        assert!(Arc::ptr_eq(&shared, &back));
    }

    #[test]
    fn option_value_type_is_optional() {
        assert!(Option::<String>::value_type().is_optional());
        assert!(!String::value_type().is_optional());
    }
}
