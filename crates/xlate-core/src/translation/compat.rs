//! Structural compatibility between type shapes
//!
//! Two shapes are compatible when the translator can copy one into the other
//! without a custom hook. Children of a compatible pair may still rely on hooks.
//!
//! Copyright (c) 2025 Xlate Team
//! Licensed under the Apache-2.0 license

use super::hooks::HookRegistry;
use crate::shape::{Kind, TypeShape};
use crate::{Error, Result};
use tracing::trace;

/// Decides whether a type pair can be copied field by field
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityChecker<'a> {
    hooks: &'a HookRegistry,
}

impl<'a> CompatibilityChecker<'a> {
    pub fn new(hooks: &'a HookRegistry) -> Self {
        Self { hooks }
    }

    /// Whether `t1` can be copied into `t2` without a hook for the pair itself.
    ///
    /// Fails when both sides share a disallowed kind: such a type should never
    /// have been part of a schema.
    pub fn compatible(&self, t1: &TypeShape, t2: &TypeShape) -> Result<bool> {
        let k1 = t1.kind();
        if k1 != t2.kind() {
            return Ok(false);
        }
        match k1 {
            Kind::Primitive(_) => Ok(true),
            Kind::Disallowed(kind) => Err(Error::DisallowedKind {
                kind,
                type_name: t1.type_name().to_string(),
            }),
            Kind::Pointer | Kind::Sequence => match (t1.element(), t2.element()) {
                (Some(e1), Some(e2)) => Ok(self.compatible(&e1, &e2)? || self.hooks.contains(&e1, &e2)),
                _ => Ok(false),
            },
            Kind::Struct => self.compatible_struct(t1, t2),
        }
    }

    // precondition: t1 and t2 are both structs
    fn compatible_struct(&self, t1: &TypeShape, t2: &TypeShape) -> Result<bool> {
        if t1.fields().len() != t2.fields().len() || t1.name() != t2.name() {
            trace!(from = %t1, to = %t2, "struct name or field count differs");
            return Ok(false);
        }
        for f1 in t1.fields() {
            let Some(f2) = t2.field(f1.name()) else {
                trace!(from = %t1, to = %t2, field = f1.name(), "field missing in destination");
                return Ok(false);
            };
            let (s1, s2) = (f1.shape(), f2.shape());
            if !self.compatible(&s1, &s2)? && !self.hooks.contains(&s1, &s2) {
                trace!(from = %t1, to = %t2, field = f1.name(), "field types differ");
                return Ok(false);
            }
        }
        Ok(true)
    }
}
