//! TypeDescriptor entity - the named, typed fields of a mappable type
//!
//! Descriptors are built from typed accessor closures and then erased, so a
//! compiled plan can move values between two types it knows only by
//! descriptor.

use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::domain::ports::{FieldType, FieldValue};
use crate::domain::value_objects::{short_type_name, TypeKey, ValueType};

/// A type-erased instance of a mappable type
pub type Instance = Box<dyn Any + Send>;

type Reader = Arc<dyn Fn(&dyn Any) -> Option<FieldValue> + Send + Sync>;
type Writer = Arc<dyn Fn(&mut dyn Any, FieldValue) -> Result<(), FieldValue> + Send + Sync>;
pub(crate) type Constructor = Arc<dyn Fn() -> Instance + Send + Sync>;

/// One accessible field of a type
#[derive(Clone)]
pub struct FieldDescriptor {
    name: &'static str,
    value_type: ValueType,
    reader: Option<Reader>,
    writer: Option<Writer>,
}

impl FieldDescriptor {
    /// Field that can be both read and written
    pub fn read_write<S, T>(
        name: &'static str,
        get: impl Fn(&S) -> &T + Send + Sync + 'static,
        get_mut: impl Fn(&mut S) -> &mut T + Send + Sync + 'static,
    ) -> Self
    where
        S: Any,
        T: FieldType,
    {
        Self {
            name,
            value_type: T::value_type(),
            reader: Some(Self::reader::<S, T>(get)),
            writer: Some(Self::writer::<S, T>(get_mut)),
        }
    }

    /// Field that can only be read (never a mapping destination)
    pub fn read_only<S, T>(name: &'static str, get: impl Fn(&S) -> &T + Send + Sync + 'static) -> Self
    where
        S: Any,
        T: FieldType,
    {
        Self {
            name,
            value_type: T::value_type(),
            reader: Some(Self::reader::<S, T>(get)),
            writer: None,
        }
    }

    /// Field that can only be written (never a mapping source)
    pub fn write_only<S, T>(
        name: &'static str,
        set: impl Fn(&mut S, T) + Send + Sync + 'static,
    ) -> Self
    where
        S: Any,
        T: FieldType,
    {
        let writer: Writer = Arc::new(move |instance: &mut dyn Any, value: FieldValue| {
            let Some(target) = instance.downcast_mut::<S>() else {
                return Err(value);
            };
            set(target, T::from_field_value(value)?);
            Ok(())
        });
        Self {
            name,
            value_type: T::value_type(),
            reader: None,
            writer: Some(writer),
        }
    }

    fn reader<S: Any, T: FieldType>(get: impl Fn(&S) -> &T + Send + Sync + 'static) -> Reader {
        Arc::new(move |instance: &dyn Any| {
            instance
                .downcast_ref::<S>()
                .map(|source| Box::new(get(source).clone()) as FieldValue)
        })
    }

    fn writer<S: Any, T: FieldType>(
        get_mut: impl Fn(&mut S) -> &mut T + Send + Sync + 'static,
    ) -> Writer {
        Arc::new(move |instance: &mut dyn Any, value: FieldValue| {
            let Some(target) = instance.downcast_mut::<S>() else {
                return Err(value);
            };
            *get_mut(target) = T::from_field_value(value)?;
            Ok(())
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn is_readable(&self) -> bool {
        self.reader.is_some()
    }

    pub fn is_writable(&self) -> bool {
        self.writer.is_some()
    }

    /// Copy this field's value out of `instance`
    ///
    /// `None` if the field is not readable or `instance` is not the
    /// described type.
    pub fn read(&self, instance: &dyn Any) -> Option<FieldValue> {
        self.reader.as_ref().and_then(|read| read(instance))
    }

    /// Store `value` into this field of `instance`
    ///
    /// Hands the value back if the field is not writable, `instance` is not
    /// the described type, or the value has the wrong type.
    pub fn write(&self, instance: &mut dyn Any, value: FieldValue) -> Result<(), FieldValue> {
        match &self.writer {
            Some(write) => write(instance, value),
            None => Err(value),
        }
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("value_type", &self.value_type.name())
            .field("readable", &self.is_readable())
            .field("writable", &self.is_writable())
            .finish()
    }
}

/// The mapping-relevant shape of a type
#[derive(Clone)]
pub struct TypeDescriptor {
    key: TypeKey,
    fields: Vec<FieldDescriptor>,
    constructor: Option<Constructor>,
}

impl TypeDescriptor {
    /// Start describing the type `S`
    pub fn builder<S: Any + Send>() -> TypeDescriptorBuilder<S> {
        TypeDescriptorBuilder {
            name: short_type_name(std::any::type_name::<S>()),
            fields: Vec::new(),
            constructor: None,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> TypeKey {
        self.key
    }

    pub fn id(&self) -> TypeId {
        self.key.id()
    }

    pub fn name(&self) -> &'static str {
        self.key.name()
    }

    /// All fields in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look up a field by exact name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn readable_fields(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter().filter(|f| f.is_readable())
    }

    pub fn writable_fields(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter().filter(|f| f.is_writable())
    }

    /// Whether the type has a parameterless constructor
    pub fn is_constructible(&self) -> bool {
        self.constructor.is_some()
    }

    /// Create a default instance, if the type has a parameterless constructor
    pub fn construct(&self) -> Option<Instance> {
        self.constructor.as_ref().map(|construct| construct())
    }

    pub(crate) fn constructor(&self) -> Option<&Constructor> {
        self.constructor.as_ref()
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name())
            .field("fields", &self.fields)
            .field("constructible", &self.is_constructible())
            .finish()
    }
}

/// Builder for [`TypeDescriptor`]
pub struct TypeDescriptorBuilder<S> {
    name: &'static str,
    fields: Vec<FieldDescriptor>,
    constructor: Option<Constructor>,
    _marker: PhantomData<fn() -> S>,
}

impl<S: Any + Send> TypeDescriptorBuilder<S> {
    /// Override the display name (defaults to the type's own name)
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Use `construct` as the parameterless constructor
    pub fn constructor(mut self, construct: impl Fn() -> S + Send + Sync + 'static) -> Self {
        self.constructor = Some(Arc::new(move || Box::new(construct()) as Instance));
        self
    }

    /// Use `Default::default` as the parameterless constructor
    pub fn default_constructor(self) -> Self
    where
        S: Default,
    {
        self.constructor(S::default)
    }

    /// Add a readable and writable field
    pub fn field<T: FieldType>(
        self,
        name: &'static str,
        get: impl Fn(&S) -> &T + Send + Sync + 'static,
        get_mut: impl Fn(&mut S) -> &mut T + Send + Sync + 'static,
    ) -> Self {
        self.with(FieldDescriptor::read_write::<S, T>(name, get, get_mut))
    }

    /// Add a field that can only be read
    pub fn read_only<T: FieldType>(
        self,
        name: &'static str,
        get: impl Fn(&S) -> &T + Send + Sync + 'static,
    ) -> Self {
        self.with(FieldDescriptor::read_only::<S, T>(name, get))
    }

    /// Add a field that can only be written
    pub fn write_only<T: FieldType>(
        self,
        name: &'static str,
        set: impl Fn(&mut S, T) + Send + Sync + 'static,
    ) -> Self {
        self.with(FieldDescriptor::write_only::<S, T>(name, set))
    }

    /// Add a prepared field descriptor; replaces an earlier field of the same name
    pub fn with(mut self, field: FieldDescriptor) -> Self {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            key: TypeKey::new(TypeId::of::<S>(), self.name),
            fields: self.fields,
            constructor: self.constructor,
        }
    }
}
