//! The structural translator
//!
//! Copyright (c) 2025 Xlate Team
//! Licensed under the Apache-2.0 license

use super::builder::TranslatorBuilder;
use super::compat::CompatibilityChecker;
use super::hooks::HookRegistry;
use super::path::ContextPath;
use super::set::TranslationSet;
use crate::config::TranslatorConfig;
use crate::shape::{Shaped, TypeShape};
use crate::{Error, Reflect, ReflectMut, ReflectRef, Result};
use std::fmt;
use tracing::{debug, trace};

/// Deep-copies values of one schema family into another and records where
/// every converted leaf came from.
///
/// Fields whose shape differs between the two families are handled by hooks
/// registered ahead of time; everything else is copied structurally. The
/// hooks persist across calls while each call to [`translate`](Self::translate)
/// starts from an empty [`TranslationSet`].
///
/// ```
/// use xlate_core::Translator;
///
/// mod v1 {
///     #[derive(Debug, Default)]
///     pub struct Config {
///         pub name: String,
///     }
///     xlate_core::reflect_struct!(Config { name: String => { "yaml": "name" } });
/// }
///
/// mod v2 {
///     #[derive(Debug, Default)]
///     pub struct Config {
///         pub name: String,
///     }
///     xlate_core::reflect_struct!(Config { name: String => { "json": "name" } });
/// }
///
/// # fn main() -> xlate_core::Result<()> {
/// let translator = Translator::new("yaml", "json");
/// let source = v1::Config { name: "x".to_string() };
/// let mut dest = v2::Config::default();
///
/// let translations = translator.translate(&source, &mut dest)?;
/// assert_eq!(dest.name, "x");
/// assert_eq!(translations.get("$json.name").unwrap().from.to_string(), "$yaml.name");
/// # Ok(())
/// # }
/// ```
pub struct Translator {
    config: TranslatorConfig,
    hooks: HookRegistry,
}

impl Translator {
    /// Create a translator reading `from_tag` field tags on the source side
    /// and `to_tag` field tags on the destination side
    pub fn new(from_tag: impl Into<String>, to_tag: impl Into<String>) -> Self {
        Self::from_config(TranslatorConfig::new(from_tag, to_tag))
    }

    pub fn from_config(config: TranslatorConfig) -> Self {
        Self {
            config,
            hooks: HookRegistry::new(),
        }
    }

    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::new()
    }

    pub(crate) fn with_config(mut self, config: TranslatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn from_tag(&self) -> &str {
        &self.config.from_tag
    }

    pub fn to_tag(&self) -> &str {
        &self.config.to_tag
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Register a hook for fields that cannot be copied structurally.
    ///
    /// The hook returns the converted value together with the translations it
    /// performed, with paths relative to its argument. They are relocated
    /// under the field's own path when merged.
    pub fn register_hook<S, D, F>(&mut self, hook: F) -> Result<()>
    where
        S: Reflect + Shaped,
        D: Reflect + Shaped,
        F: Fn(&S) -> Result<(D, TranslationSet)> + 'static,
    {
        self.hooks.register(move |_: &Translator, source: &S| hook(source))
    }

    /// Like [`register_hook`](Self::register_hook), but the hook also receives
    /// the translator so it can hand parts of its input back to the generic
    /// machinery.
    pub fn register_hook_with<S, D, F>(&mut self, hook: F) -> Result<()>
    where
        S: Reflect + Shaped,
        D: Reflect + Shaped,
        F: Fn(&Translator, &S) -> Result<(D, TranslationSet)> + 'static,
    {
        self.hooks.register(hook)
    }

    /// Whether `t1` can be copied into `t2` without a hook for the pair itself
    pub fn compatible(&self, t1: &TypeShape, t2: &TypeShape) -> Result<bool> {
        CompatibilityChecker::new(&self.hooks).compatible(t1, t2)
    }

    /// Check ahead of any data that `S` can be translated into `D`
    pub fn check<S: Shaped, D: Shaped>(&self) -> Result<()> {
        let (from, to) = (S::shape(), D::shape());
        if self.hooks.contains(&from, &to) || self.compatible(&from, &to)? {
            return Ok(());
        }
        Err(Error::NoConversion {
            from: from.type_name().to_string(),
            to: to.type_name().to_string(),
        })
    }

    /// Translate `from` into `to` and return every path change performed.
    ///
    /// The destination is filled in place. After an error its contents are
    /// unspecified.
    pub fn translate(&self, from: &dyn Reflect, to: &mut dyn Reflect) -> Result<TranslationSet> {
        let mut translations = TranslationSet::new(self.from_tag(), self.to_tag());
        debug!(
            from = %from.type_shape(),
            to = %to.type_shape(),
            from_tag = self.from_tag(),
            to_tag = self.to_tag(),
            "translating"
        );

        self.translate_value(
            from,
            to,
            &ContextPath::new(self.from_tag()),
            &ContextPath::new(self.to_tag()),
            &mut translations,
        )?;

        debug!(entries = translations.len(), "translation complete");
        Ok(translations)
    }

    fn translate_value(
        &self,
        from: &dyn Reflect,
        to: &mut dyn Reflect,
        from_path: &ContextPath,
        to_path: &ContextPath,
        out: &mut TranslationSet,
    ) -> Result<()> {
        let from_id = from.as_any().type_id();
        let to_id = to.as_any().type_id();
        if let Some(hook) = self.hooks.lookup(from_id, to_id) {
            trace!(from = %from_path, to = %to_path, hook = %hook, "applying hook");
            let returned = hook.apply(self, from, to)?;
            // hook paths are relative to its argument
            out.merge_rebased(from_path, to_path, &returned);
            return Ok(());
        }

        let from_shape = from.type_shape();
        let to_shape = to.type_shape();
        if self.compatible(&from_shape, &to_shape)? {
            return self.translate_same_type(from, to, &from_shape, &to_shape, from_path, to_path, out);
        }

        Err(Error::NoConversion {
            from: from_shape.type_name().to_string(),
            to: to_shape.type_name().to_string(),
        })
    }

    // precondition: the shapes are compatible
    #[allow(clippy::too_many_arguments)]
    fn translate_same_type(
        &self,
        from: &dyn Reflect,
        to: &mut dyn Reflect,
        from_shape: &TypeShape,
        to_shape: &TypeShape,
        from_path: &ContextPath,
        to_path: &ContextPath,
        out: &mut TranslationSet,
    ) -> Result<()> {
        match (from.reflect_ref(), to.reflect_mut()) {
            (ReflectRef::Primitive(value), ReflectMut::Primitive(slot)) => {
                slot.set_primitive(value).map_err(|rejected| Error::TypeMismatch {
                    path: to_path.to_string(),
                    message: format!("cannot store {} value {} in {}", rejected.kind(), rejected, to_shape),
                })?;
                trace!(from = %from_path, to = %to_path, "copied leaf");
                out.add(from_path, to_path);
            }
            (ReflectRef::Pointer(None), ReflectMut::Pointer(_)) => {}
            (ReflectRef::Pointer(Some(inner)), ReflectMut::Pointer(target)) => {
                // pointers do not show up in paths
                let target = target.allocate();
                self.translate_value(inner, target, from_path, to_path, out)?;
            }
            (ReflectRef::Sequence(items), ReflectMut::Sequence(targets)) => {
                targets.reset(items.len());
                for index in 0..items.len() {
                    let (Some(item), Some(target)) = (items.get(index), targets.get_mut(index)) else {
                        return Err(Error::TypeMismatch {
                            path: to_path.append(index).to_string(),
                            message: "sequence lengths diverged while copying".to_string(),
                        });
                    };
                    self.translate_value(
                        item,
                        target,
                        &from_path.append(index),
                        &to_path.append(index),
                        out,
                    )?;
                }
            }
            (ReflectRef::Struct(source), ReflectMut::Struct(target)) => {
                for field in from_shape.fields() {
                    let missing = || Error::TypeMismatch {
                        path: to_path.to_string(),
                        message: format!("{} has no field {}", to_shape, field.name()),
                    };
                    let to_field = to_shape.field(field.name()).ok_or_else(missing)?;
                    let source_value = source.field(field.name()).ok_or_else(missing)?;
                    let target_value = target.field_mut(field.name()).ok_or_else(missing)?;

                    if field.is_embedded() {
                        self.translate_value(source_value, target_value, from_path, to_path, out)?;
                    } else {
                        let from_next = from_path.append(field.serialized_name(&from_path.tag));
                        let to_next = to_path.append(to_field.serialized_name(&to_path.tag));
                        self.translate_value(source_value, target_value, &from_next, &to_next, out)?;
                    }
                }
            }
            _ => {
                return Err(Error::TypeMismatch {
                    path: to_path.to_string(),
                    message: format!(
                        "encountered {} and {} which should be the same kind",
                        from_shape, to_shape
                    ),
                })
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("from_tag", &self.config.from_tag)
            .field("to_tag", &self.config.to_tag)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
