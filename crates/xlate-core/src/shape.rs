//! Static type shape descriptions for schema types
//!
//! A [`TypeShape`] classifies a type into exactly one kind and, for structs,
//! lists the declared fields together with their per-family serialization tags.
//! Shapes are produced by [`Shaped::shape`], usually generated by the
//! [`reflect_struct!`](crate::reflect_struct) and
//! [`reflect_alias!`](crate::reflect_alias) macros.
//!
//! Copyright (c) 2025 Xlate Team
//! Licensed under the Apache-2.0 license

use std::any::TypeId;
use std::fmt;

/// Types that can describe their own shape without a value at hand
pub trait Shaped: 'static {
    /// Build the shape description of `Self`
    fn shape() -> TypeShape;
}

/// Primitive kinds. Two primitives are only compatible when their kinds match
/// exactly, so `i32` and `i64` are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
}

/// Kinds that are never legal inside a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisallowedKind {
    Function,
    Channel,
    Map,
    Interface,
}

/// Coarse kind of a shape, used for the exact-kind comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Primitive(PrimitiveKind),
    Pointer,
    Sequence,
    Struct,
    Disallowed(DisallowedKind),
}

/// Kind-specific part of a shape
#[derive(Debug, Clone)]
pub enum ShapeKind {
    Primitive(PrimitiveKind),
    /// Optional value; the element shape is built lazily
    Pointer(fn() -> TypeShape),
    /// Ordered, variable length sequence
    Sequence(fn() -> TypeShape),
    Struct(Vec<FieldShape>),
    Disallowed(DisallowedKind),
}

/// One declared field of a struct shape
#[derive(Debug, Clone)]
pub struct FieldShape {
    name: &'static str,
    tags: Vec<(&'static str, &'static str)>,
    embedded: bool,
    shape: fn() -> TypeShape,
}

impl FieldShape {
    /// Create a field with its declared name and the shape of its type
    pub fn new(name: &'static str, shape: fn() -> TypeShape) -> Self {
        Self {
            name,
            tags: Vec::new(),
            embedded: false,
            shape,
        }
    }

    /// Attach a serialization tag for a schema family, e.g. `("yaml", "files,omitempty")`
    pub fn tag(mut self, family: &'static str, value: &'static str) -> Self {
        self.tags.push((family, value));
        self
    }

    /// Mark the field as embedded; embedded fields do not extend paths
    pub fn embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    /// Declared field name
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Shape of the field's type
    pub fn shape(&self) -> TypeShape {
        (self.shape)()
    }

    /// Name used when (un)marshalling the field for `family`.
    ///
    /// Options after the first comma are ignored. A missing or empty tag falls
    /// back to the declared field name.
    pub fn serialized_name(&self, family: &str) -> &'static str {
        self.tags
            .iter()
            .find(|(tag, _)| *tag == family)
            .and_then(|(_, value)| value.split(',').next())
            .filter(|name| !name.is_empty())
            .unwrap_or(self.name)
    }
}

/// Shape description of a single Rust type
#[derive(Debug, Clone)]
pub struct TypeShape {
    id: TypeId,
    name: &'static str,
    type_name: &'static str,
    kind: ShapeKind,
}

impl TypeShape {
    fn new<T: 'static>(name: &'static str, kind: ShapeKind) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name,
            type_name: std::any::type_name::<T>(),
            kind,
        }
    }

    /// A primitive, or a named alias of one
    pub fn primitive<T: 'static>(name: &'static str, kind: PrimitiveKind) -> Self {
        Self::new::<T>(name, ShapeKind::Primitive(kind))
    }

    pub fn pointer<T: 'static>(element: fn() -> TypeShape) -> Self {
        Self::new::<T>("", ShapeKind::Pointer(element))
    }

    pub fn sequence<T: 'static>(element: fn() -> TypeShape) -> Self {
        Self::new::<T>("", ShapeKind::Sequence(element))
    }

    /// A named struct with its fields in declaration order
    pub fn structure<T: 'static>(name: &'static str, fields: Vec<FieldShape>) -> Self {
        Self::new::<T>(name, ShapeKind::Struct(fields))
    }

    pub fn disallowed<T: 'static>(kind: DisallowedKind) -> Self {
        Self::new::<T>("", ShapeKind::Disallowed(kind))
    }

    /// Shape of `T`
    pub fn of<T: Shaped>() -> Self {
        T::shape()
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Declared name; empty for unnamed composites such as `Option<T>`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fully qualified Rust type name, for diagnostics
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn kind(&self) -> Kind {
        match &self.kind {
            ShapeKind::Primitive(p) => Kind::Primitive(*p),
            ShapeKind::Pointer(_) => Kind::Pointer,
            ShapeKind::Sequence(_) => Kind::Sequence,
            ShapeKind::Struct(_) => Kind::Struct,
            ShapeKind::Disallowed(d) => Kind::Disallowed(*d),
        }
    }

    pub fn shape_kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Element shape of a pointer or sequence
    pub fn element(&self) -> Option<TypeShape> {
        match &self.kind {
            ShapeKind::Pointer(elem) | ShapeKind::Sequence(elem) => Some(elem()),
            _ => None,
        }
    }

    /// Struct fields in declaration order; empty for other kinds
    pub fn fields(&self) -> &[FieldShape] {
        match &self.kind {
            ShapeKind::Struct(fields) => fields,
            _ => &[],
        }
    }

    /// Look up a struct field by declared name
    pub fn field(&self, name: &str) -> Option<&FieldShape> {
        self.fields().iter().find(|f| f.name == name)
    }
}

impl PartialEq for TypeShape {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeShape {}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::I8 => "i8",
            PrimitiveKind::I16 => "i16",
            PrimitiveKind::I32 => "i32",
            PrimitiveKind::I64 => "i64",
            PrimitiveKind::U8 => "u8",
            PrimitiveKind::U16 => "u16",
            PrimitiveKind::U32 => "u32",
            PrimitiveKind::U64 => "u64",
            PrimitiveKind::F32 => "f32",
            PrimitiveKind::F64 => "f64",
            PrimitiveKind::String => "string",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for DisallowedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisallowedKind::Function => write!(f, "func"),
            DisallowedKind::Channel => write!(f, "chan"),
            DisallowedKind::Map => write!(f, "map"),
            DisallowedKind::Interface => write!(f, "interface"),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Primitive(p) => write!(f, "{}", p),
            Kind::Pointer => write!(f, "ptr"),
            Kind::Sequence => write!(f, "slice"),
            Kind::Struct => write!(f, "struct"),
            Kind::Disallowed(d) => write!(f, "{}", d),
        }
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name)
    }
}
