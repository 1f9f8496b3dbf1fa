//! Registry of custom conversion hooks
//!
//! A hook converts one source type into one destination type when the two
//! cannot be copied field by field. Hooks are matched on the exact
//! `(source, destination)` type pair; the first one registered for a pair wins.
//!
//! Copyright (c) 2025 Xlate Team
//! Licensed under the Apache-2.0 license

use super::set::TranslationSet;
use super::translator::Translator;
use crate::shape::{Kind, Shaped, TypeShape};
use crate::{Error, Reflect, Result};
use std::any::TypeId;
use std::fmt;
use tracing::debug;

type HookFn = Box<dyn Fn(&Translator, &dyn Reflect, &mut dyn Reflect) -> Result<TranslationSet>>;

/// A registered hook with its type pair erased
pub struct Hook {
    from: TypeShape,
    to: TypeShape,
    call: HookFn,
}

impl Hook {
    /// Declared input type
    pub fn from(&self) -> &TypeShape {
        &self.from
    }

    /// Declared output type
    pub fn to(&self) -> &TypeShape {
        &self.to
    }

    /// Run the hook on `source`, store its output in `dest` and return the
    /// translations it reported, relative to `source`
    pub fn apply(
        &self,
        translator: &Translator,
        source: &dyn Reflect,
        dest: &mut dyn Reflect,
    ) -> Result<TranslationSet> {
        (self.call)(translator, source, dest)
    }

    fn matches(&self, from: TypeId, to: TypeId) -> bool {
        self.from.id() == from && self.to.id() == to
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook")
            .field("from", &self.from.type_name())
            .field("to", &self.to.type_name())
            .finish()
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Ordered list of hooks
#[derive(Debug, Default)]
pub struct HookRegistry {
    hooks: Vec<Hook>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook converting `S` into `D`.
    ///
    /// The hook must hand back the translations it performed, with paths
    /// relative to its own argument. Hooks whose input or output type is of a
    /// disallowed kind are rejected immediately.
    pub fn register<S, D, F>(&mut self, hook: F) -> Result<()>
    where
        S: Reflect + Shaped,
        D: Reflect + Shaped,
        F: Fn(&Translator, &S) -> Result<(D, TranslationSet)> + 'static,
    {
        let from = S::shape();
        let to = D::shape();
        for shape in [&from, &to] {
            if let Kind::Disallowed(kind) = shape.kind() {
                return Err(Error::InvalidHook {
                    from: from.type_name().to_string(),
                    to: to.type_name().to_string(),
                    message: format!("{} is of invalid kind {}", shape.type_name(), kind),
                });
            }
        }

        let call = move |translator: &Translator,
                         source: &dyn Reflect,
                         dest: &mut dyn Reflect|
              -> Result<TranslationSet> {
            let source = source
                .downcast_ref::<S>()
                .ok_or_else(|| Error::TypeMismatch {
                    path: String::new(),
                    message: format!("hook input is not {}", std::any::type_name::<S>()),
                })?;
            let dest = dest
                .downcast_mut::<D>()
                .ok_or_else(|| Error::TypeMismatch {
                    path: String::new(),
                    message: format!("hook output is not {}", std::any::type_name::<D>()),
                })?;
            let (value, translations) = hook(translator, source)?;
            *dest = value;
            Ok(translations)
        };

        debug!(from = %from, to = %to, "registered translation hook");
        self.hooks.push(Hook {
            from,
            to,
            call: Box::new(call),
        });
        Ok(())
    }

    /// First hook registered for exactly this pair
    pub fn lookup(&self, from: TypeId, to: TypeId) -> Option<&Hook> {
        self.hooks.iter().find(|hook| hook.matches(from, to))
    }

    pub fn contains(&self, from: &TypeShape, to: &TypeShape) -> bool {
        self.lookup(from.id(), to.id()).is_some()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}
