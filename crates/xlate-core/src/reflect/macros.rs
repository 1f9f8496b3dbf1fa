//! Declarative generators for schema types
//!
//! Both macros are exported at the crate root.

/// Implement [`Shaped`](crate::Shaped), [`Reflect`](crate::Reflect) and
/// [`ReflectStruct`](crate::ReflectStruct) for a schema struct.
///
/// Each field lists its type and, optionally, its serialization name per
/// schema family. `#[embedded]` marks a field whose contents appear at the
/// same path depth as the enclosing struct.
///
/// ```
/// use xlate_core::reflect_struct;
///
/// #[derive(Debug, Default)]
/// pub struct Common {
///     pub version: String,
/// }
///
/// #[derive(Debug, Default)]
/// pub struct Config {
///     pub common: Common,
///     pub files: Vec<String>,
///     pub timeout: Option<u32>,
/// }
///
/// reflect_struct!(Common {
///     version: String => { "yaml": "version", "json": "version" },
/// });
///
/// reflect_struct!(Config {
///     #[embedded]
///     common: Common,
///     files: Vec<String> => { "yaml": "files,omitempty", "json": "files" },
///     timeout: Option<u32>,
/// });
/// ```
#[macro_export]
macro_rules! reflect_struct {
    (
        $ty:ident {
            $(
                $(#[$marker:ident])?
                $field:ident : $fty:ty $( => { $( $family:literal : $tag:literal ),* $(,)? } )?
            ),* $(,)?
        }
    ) => {
        impl $crate::Shaped for $ty {
            fn shape() -> $crate::TypeShape {
                $crate::TypeShape::structure::<Self>(
                    stringify!($ty),
                    vec![
                        $(
                            $crate::FieldShape::new(
                                stringify!($field),
                                <$fty as $crate::Shaped>::shape,
                            )
                            .embedded($crate::__reflect_embedded!($($marker)?))
                            $( $( .tag($family, $tag) )* )?
                        ),*
                    ],
                )
            }
        }

        impl $crate::Reflect for $ty {
            fn type_shape(&self) -> $crate::TypeShape {
                <Self as $crate::Shaped>::shape()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn reflect_ref(&self) -> $crate::ReflectRef<'_> {
                $crate::ReflectRef::Struct(self)
            }

            fn reflect_mut(&mut self) -> $crate::ReflectMut<'_> {
                $crate::ReflectMut::Struct(self)
            }
        }

        impl $crate::ReflectStruct for $ty {
            #[allow(unused_variables)]
            fn field(&self, name: &str) -> Option<&dyn $crate::Reflect> {
                $(
                    if name == stringify!($field) {
                        return Some(&self.$field as &dyn $crate::Reflect);
                    }
                )*
                None
            }

            #[allow(unused_variables)]
            fn field_mut(&mut self, name: &str) -> Option<&mut dyn $crate::Reflect> {
                $(
                    if name == stringify!($field) {
                        return Some(&mut self.$field as &mut dyn $crate::Reflect);
                    }
                )*
                None
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __reflect_embedded {
    () => {
        false
    };
    (embedded) => {
        true
    };
}

/// Implement [`Shaped`](crate::Shaped) and [`Reflect`](crate::Reflect) for a
/// single-field tuple struct that names a primitive, e.g.
/// `struct Mode(String)`. The alias keeps the kind of the wrapped primitive,
/// so it converts to and from the bare type.
///
/// ```
/// use xlate_core::reflect_alias;
///
/// #[derive(Debug, Default, Clone, PartialEq)]
/// pub struct Mode(pub String);
///
/// reflect_alias!(Mode => String);
/// ```
#[macro_export]
macro_rules! reflect_alias {
    ($($alias:ident => $inner:ty),+ $(,)?) => {
        $(
            impl $crate::Shaped for $alias {
                fn shape() -> $crate::TypeShape {
                    $crate::TypeShape::primitive::<Self>(
                        stringify!($alias),
                        <$inner as $crate::PrimitiveType>::KIND,
                    )
                }
            }

            impl $crate::Reflect for $alias {
                fn type_shape(&self) -> $crate::TypeShape {
                    <Self as $crate::Shaped>::shape()
                }

                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                    self
                }

                fn reflect_ref(&self) -> $crate::ReflectRef<'_> {
                    $crate::ReflectRef::Primitive($crate::PrimitiveType::to_primitive(&self.0))
                }

                fn reflect_mut(&mut self) -> $crate::ReflectMut<'_> {
                    $crate::ReflectMut::Primitive(self)
                }
            }

            impl $crate::ReflectPrimitive for $alias {
                fn set_primitive(
                    &mut self,
                    value: $crate::PrimitiveValue,
                ) -> ::std::result::Result<(), $crate::PrimitiveValue> {
                    self.0 = <$inner as $crate::PrimitiveType>::from_primitive(value)?;
                    Ok(())
                }
            }
        )+
    };
}
