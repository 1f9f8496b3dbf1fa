//! Fluent construction of a [`Translator`]
//!
//! Copyright (c) 2025 Xlate Team
//! Licensed under the Apache-2.0 license

use super::set::TranslationSet;
use super::translator::Translator;
use crate::config::TranslatorConfig;
use crate::shape::Shaped;
use crate::{Error, Reflect, Result};

/// Builder for [`Translator`] instances
///
/// Hook registration errors are kept until [`build`](Self::build), which
/// reports the first one.
pub struct TranslatorBuilder {
    config: TranslatorConfig,
    translator: Translator,
    error: Option<Error>,
}

impl TranslatorBuilder {
    pub fn new() -> Self {
        Self::from_config(TranslatorConfig::default())
    }

    pub fn from_config(config: TranslatorConfig) -> Self {
        Self {
            translator: Translator::from_config(config.clone()),
            config,
            error: None,
        }
    }

    /// Tag label of the source family
    pub fn from_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.from_tag = tag.into();
        self
    }

    /// Tag label of the destination family
    pub fn to_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.to_tag = tag.into();
        self
    }

    /// Add a hook, see [`Translator::register_hook`]
    pub fn hook<S, D, F>(mut self, hook: F) -> Self
    where
        S: Reflect + Shaped,
        D: Reflect + Shaped,
        F: Fn(&S) -> Result<(D, TranslationSet)> + 'static,
    {
        if self.error.is_none() {
            self.error = self.translator.register_hook(hook).err();
        }
        self
    }

    /// Add a hook that receives the translator, see
    /// [`Translator::register_hook_with`]
    pub fn hook_with<S, D, F>(mut self, hook: F) -> Self
    where
        S: Reflect + Shaped,
        D: Reflect + Shaped,
        F: Fn(&Translator, &S) -> Result<(D, TranslationSet)> + 'static,
    {
        if self.error.is_none() {
            self.error = self.translator.register_hook_with(hook).err();
        }
        self
    }

    pub fn build(self) -> Result<Translator> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(self.translator.with_config(self.config))
    }
}

impl Default for TranslatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
