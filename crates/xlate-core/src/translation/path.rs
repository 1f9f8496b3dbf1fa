//! Context paths rooted in a schema family
//!
//! Copyright (c) 2025 Xlate Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step in a path: a field name or a sequence index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    Index(usize),
    Field(String),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Index(i) => write!(f, "{}", i),
            Segment::Field(name) => write!(f, "{}", name),
        }
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

impl From<&str> for Segment {
    fn from(name: &str) -> Self {
        Segment::Field(name.to_string())
    }
}

impl From<String> for Segment {
    fn from(name: String) -> Self {
        Segment::Field(name)
    }
}

/// A position inside one schema family's document, e.g. `$yaml.storage.files.0`.
///
/// Paths are plain values: `append` and `extend` return new paths and leave
/// the receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextPath {
    /// Family label the path is rooted under
    pub tag: String,
    pub segments: Vec<Segment>,
}

impl ContextPath {
    /// The root of a family
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            segments: Vec::new(),
        }
    }

    /// Build a path from a family and a list of segments
    pub fn with_segments<I, S>(tag: impl Into<String>, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        Self {
            tag: tag.into(),
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Copy of this path with one more segment
    pub fn append(&self, segment: impl Into<Segment>) -> Self {
        let mut path = self.clone();
        path.segments.push(segment.into());
        path
    }

    /// Copy of this path with all of `segments` appended
    pub fn extend<'s, I>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = &'s Segment>,
    {
        let mut path = self.clone();
        path.segments.extend(segments.into_iter().cloned());
        path
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ContextPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.tag)?;
        for segment in &self.segments {
            write!(f, ".{}", segment)?;
        }
        Ok(())
    }
}
