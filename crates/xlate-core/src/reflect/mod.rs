//! Value access for schema types
//!
//! [`Reflect`] is the object-safe counterpart of [`Shaped`](crate::Shaped): it
//! lets the translator read a source value and fill a destination value without
//! knowing either concrete type. Schema structs get their impls from
//! [`reflect_struct!`](crate::reflect_struct), named primitive aliases from
//! [`reflect_alias!`](crate::reflect_alias). The standard primitives, `Option`,
//! `Vec` and the disallowed kinds are covered here.
//!
//! Copyright (c) 2025 Xlate Team
//! Licensed under the Apache-2.0 license

mod impls;
mod macros;
pub mod primitive;


pub use primitive::{PrimitiveType, PrimitiveValue};

use crate::shape::TypeShape;
use std::any::Any;

/// Runtime view of a schema value
pub trait Reflect: Any {
    /// Shape of the concrete type behind this value
    fn type_shape(&self) -> TypeShape;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Read-only view used on the source side
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Mutable view used on the destination side
    fn reflect_mut(&mut self) -> ReflectMut<'_>;
}

/// Read-only view of a value, split by kind
pub enum ReflectRef<'a> {
    Primitive(PrimitiveValue),
    /// `None` is the nil pointer
    Pointer(Option<&'a dyn Reflect>),
    Sequence(&'a dyn ReflectSequence),
    Struct(&'a dyn ReflectStruct),
    /// Disallowed kinds expose nothing
    Opaque,
}

/// Mutable view of a value, split by kind
pub enum ReflectMut<'a> {
    Primitive(&'a mut dyn ReflectPrimitive),
    Pointer(&'a mut dyn ReflectPointer),
    Sequence(&'a mut dyn ReflectSequence),
    Struct(&'a mut dyn ReflectStruct),
    Opaque,
}

/// Destination side of a primitive
pub trait ReflectPrimitive {
    /// Overwrite the value. A value of the wrong primitive kind is handed back.
    fn set_primitive(&mut self, value: PrimitiveValue) -> Result<(), PrimitiveValue>;
}

/// Destination side of an optional value
pub trait ReflectPointer {
    /// Store a default value and return it for filling
    fn allocate(&mut self) -> &mut dyn Reflect;
}

pub trait ReflectSequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Replace the contents with `len` default elements
    fn reset(&mut self, len: usize);
}

/// Field access by declared name
pub trait ReflectStruct {
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;
}

impl<'a> dyn Reflect + 'a {
    /// Downcast to a concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}
