//! Xlate Core - structural translator for versioned config schemas
//!
//! This crate deep-converts a value of one struct-shaped schema into a value
//! of a second, nearly identical schema, and records for every converted leaf
//! where it came from. Validation errors found against the destination value
//! can then be reported in the coordinates of the source document.
//!
//! # Main Components
//!
//! - **Shapes**: static type descriptions ([`Shaped`], [`TypeShape`])
//! - **Reflection**: value access for the copier ([`Reflect`]), generated by
//!   [`reflect_struct!`] and [`reflect_alias!`]
//! - **Provenance**: [`ContextPath`] and [`TranslationSet`]
//! - **Translator**: compatibility checking, hooks and the recursive copy
//!   ([`Translator`])
//!
//! # Example
//!
//! ```
//! use xlate_core::{Translator, TranslationSet, Result};
//!
//! mod v1 {
//!     #[derive(Debug, Default)]
//!     pub struct File {
//!         pub path: String,
//!         pub mode: Option<u32>,
//!     }
//!     xlate_core::reflect_struct!(File {
//!         path: String => { "yaml": "path" },
//!         mode: Option<u32> => { "yaml": "mode" },
//!     });
//! }
//!
//! mod v2 {
//!     #[derive(Debug, Default)]
//!     pub struct File {
//!         pub path: String,
//!         pub mode: Option<u32>,
//!     }
//!     xlate_core::reflect_struct!(File {
//!         path: String => { "json": "path" },
//!         mode: Option<u32> => { "json": "mode" },
//!     });
//! }
//!
//! fn example() -> Result<TranslationSet> {
//!     let translator = Translator::new("yaml", "json");
//!     translator.check::<v1::File, v2::File>()?;
//!
//!     let source = v1::File { path: "/etc/motd".to_string(), mode: Some(0o644) };
//!     let mut dest = v2::File::default();
//!     translator.translate(&source, &mut dest)
//! }
//!
//! let translations = example().unwrap();
//! assert_eq!(translations.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod reflect;
pub mod shape;
pub mod translation;

// Re-export main types for convenience
pub use config::TranslatorConfig;
pub use error::{Error, Result};
pub use reflect::{
    PrimitiveType, PrimitiveValue, Reflect, ReflectMut, ReflectPointer, ReflectPrimitive,
    ReflectRef, ReflectSequence, ReflectStruct,
};
pub use shape::{DisallowedKind, FieldShape, Kind, PrimitiveKind, ShapeKind, Shaped, TypeShape};
pub use translation::{
    CompatibilityChecker, ContextPath, Hook, HookRegistry, Segment, Translation, TranslationSet,
    Translator, TranslatorBuilder,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
