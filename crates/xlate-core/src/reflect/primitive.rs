//! Primitive values moved between source and destination

use crate::shape::PrimitiveKind;
use std::fmt;

/// An owned primitive read from a source value
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
}

impl PrimitiveValue {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            PrimitiveValue::Bool(_) => PrimitiveKind::Bool,
            PrimitiveValue::I8(_) => PrimitiveKind::I8,
            PrimitiveValue::I16(_) => PrimitiveKind::I16,
            PrimitiveValue::I32(_) => PrimitiveKind::I32,
            PrimitiveValue::I64(_) => PrimitiveKind::I64,
            PrimitiveValue::U8(_) => PrimitiveKind::U8,
            PrimitiveValue::U16(_) => PrimitiveKind::U16,
            PrimitiveValue::U32(_) => PrimitiveKind::U32,
            PrimitiveValue::U64(_) => PrimitiveKind::U64,
            PrimitiveValue::F32(_) => PrimitiveKind::F32,
            PrimitiveValue::F64(_) => PrimitiveKind::F64,
            PrimitiveValue::String(_) => PrimitiveKind::String,
        }
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::Bool(v) => write!(f, "{}", v),
            PrimitiveValue::I8(v) => write!(f, "{}", v),
            PrimitiveValue::I16(v) => write!(f, "{}", v),
            PrimitiveValue::I32(v) => write!(f, "{}", v),
            PrimitiveValue::I64(v) => write!(f, "{}", v),
            PrimitiveValue::U8(v) => write!(f, "{}", v),
            PrimitiveValue::U16(v) => write!(f, "{}", v),
            PrimitiveValue::U32(v) => write!(f, "{}", v),
            PrimitiveValue::U64(v) => write!(f, "{}", v),
            PrimitiveValue::F32(v) => write!(f, "{}", v),
            PrimitiveValue::F64(v) => write!(f, "{}", v),
            PrimitiveValue::String(v) => write!(f, "{:?}", v),
        }
    }
}

/// Rust types that back a primitive kind. Named aliases delegate to the
/// type they wrap.
pub trait PrimitiveType: Sized + 'static {
    const KIND: PrimitiveKind;

    fn to_primitive(&self) -> PrimitiveValue;

    /// Convert back, handing the value back when its kind does not match
    fn from_primitive(value: PrimitiveValue) -> Result<Self, PrimitiveValue>;
}

macro_rules! primitive_type {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl PrimitiveType for $ty {
                const KIND: PrimitiveKind = PrimitiveKind::$variant;

                fn to_primitive(&self) -> PrimitiveValue {
                    PrimitiveValue::$variant(self.clone())
                }

                fn from_primitive(value: PrimitiveValue) -> Result<Self, PrimitiveValue> {
                    match value {
                        PrimitiveValue::$variant(v) => Ok(v),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

primitive_type! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
}
