//! `Shaped` and `Reflect` for the standard library types a schema may use
//! (and the ones it must never use)

use super::{
    PrimitiveType, PrimitiveValue, Reflect, ReflectMut, ReflectPointer, ReflectPrimitive,
    ReflectRef, ReflectSequence,
};
use crate::shape::{DisallowedKind, Shaped, TypeShape};
use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::sync::mpsc::{Receiver, Sender, SyncSender};

macro_rules! reflect_primitive {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Shaped for $ty {
                fn shape() -> TypeShape {
                    TypeShape::primitive::<Self>($name, <$ty as PrimitiveType>::KIND)
                }
            }

            impl Reflect for $ty {
                fn type_shape(&self) -> TypeShape {
                    <Self as Shaped>::shape()
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn Any {
                    self
                }

                fn reflect_ref(&self) -> ReflectRef<'_> {
                    ReflectRef::Primitive(self.to_primitive())
                }

                fn reflect_mut(&mut self) -> ReflectMut<'_> {
                    ReflectMut::Primitive(self)
                }
            }

            impl ReflectPrimitive for $ty {
                fn set_primitive(&mut self, value: PrimitiveValue) -> Result<(), PrimitiveValue> {
                    *self = <$ty as PrimitiveType>::from_primitive(value)?;
                    Ok(())
                }
            }
        )*
    };
}

reflect_primitive! {
    bool => "bool",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    f32 => "f32",
    f64 => "f64",
    String => "string",
}

impl<T: Shaped> Shaped for Option<T> {
    fn shape() -> TypeShape {
        TypeShape::pointer::<Self>(T::shape)
    }
}

impl<T: Reflect + Shaped + Default> Reflect for Option<T> {
    fn type_shape(&self) -> TypeShape {
        <Self as Shaped>::shape()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self.as_ref().map(|v| v as &dyn Reflect))
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(self)
    }
}

impl<T: Reflect + Default> ReflectPointer for Option<T> {
    fn allocate(&mut self) -> &mut dyn Reflect {
        self.insert(T::default())
    }
}

impl<T: Shaped> Shaped for Vec<T> {
    fn shape() -> TypeShape {
        TypeShape::sequence::<Self>(T::shape)
    }
}

impl<T: Reflect + Shaped + Default> Reflect for Vec<T> {
    fn type_shape(&self) -> TypeShape {
        <Self as Shaped>::shape()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Sequence(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Sequence(self)
    }
}

impl<T: Reflect + Default> ReflectSequence for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|v| v as &dyn Reflect)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice()
            .get_mut(index)
            .map(|v| v as &mut dyn Reflect)
    }

    fn reset(&mut self, len: usize) {
        self.clear();
        self.resize_with(len, T::default);
    }
}

// Kinds that may never appear in a schema. They still get impls so that a
// struct holding one can be described; the compatibility check rejects them.
macro_rules! reflect_disallowed {
    ($kind:ident => $([$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Shaped for $ty {
                fn shape() -> TypeShape {
                    TypeShape::disallowed::<Self>(DisallowedKind::$kind)
                }
            }

            impl<$($generics)*> Reflect for $ty {
                fn type_shape(&self) -> TypeShape {
                    <Self as Shaped>::shape()
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn Any {
                    self
                }

                fn reflect_ref(&self) -> ReflectRef<'_> {
                    ReflectRef::Opaque
                }

                fn reflect_mut(&mut self) -> ReflectMut<'_> {
                    ReflectMut::Opaque
                }
            }
        )*
    };
}

reflect_disallowed!(Function =>
    [R: 'static] fn() -> R,
    [A: 'static, R: 'static] fn(A) -> R,
);

reflect_disallowed!(Map =>
    [K: 'static, V: 'static, S: 'static] HashMap<K, V, S>,
    [K: 'static, V: 'static] BTreeMap<K, V>,
);

reflect_disallowed!(Channel =>
    [T: 'static] Sender<T>,
    [T: 'static] SyncSender<T>,
    [T: 'static] Receiver<T>,
);

reflect_disallowed!(Interface =>
    [] Box<dyn Any>,
);
