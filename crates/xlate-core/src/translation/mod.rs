//! Translation engine for converting values between schema families
//!
//! This module implements the structural translator: the compatibility check,
//! the hook registry, the recursive copier and the path provenance it records.
//!
//! Copyright (c) 2025 Xlate Team
//! Licensed under the Apache-2.0 license

pub mod builder;
pub mod compat;
pub mod hooks;
pub mod path;
pub mod set;
pub mod translator;

#[cfg(test)]
mod tests;

pub use builder::TranslatorBuilder;
pub use compat::CompatibilityChecker;
pub use hooks::{Hook, HookRegistry};
pub use path::{ContextPath, Segment};
pub use set::{Translation, TranslationSet};
pub use translator::Translator;
