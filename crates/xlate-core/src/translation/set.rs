//! Path provenance recorded during a translation
//!
//! A [`TranslationSet`] maps every destination location produced by a
//! translation back to the source location it came from. Validation errors
//! found against the destination value can then be reported in the
//! coordinates of the source document.
//!
//! Copyright (c) 2025 Xlate Team
//! Licensed under the Apache-2.0 license

use super::path::{ContextPath, Segment};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How one path changed while translating. If something at
/// `$yaml.storage.filesystems.4` produced content at `$json.systemd.units.3`,
/// a translation records that pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub from: ContextPath,
    pub to: ContextPath,
}

/// All translations that occurred, keyed by the rendered destination path.
///
/// Adding a second translation whose destination renders identically replaces
/// the first one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSet {
    from_tag: String,
    to_tag: String,
    set: BTreeMap<String, Translation>,
}

impl TranslationSet {
    /// Create an empty set for the given source and destination families
    pub fn new(from_tag: impl Into<String>, to_tag: impl Into<String>) -> Self {
        Self {
            from_tag: from_tag.into(),
            to_tag: to_tag.into(),
            set: BTreeMap::new(),
        }
    }

    pub fn from_tag(&self) -> &str {
        &self.from_tag
    }

    pub fn to_tag(&self) -> &str {
        &self.to_tag
    }

    /// Record that `from` produced `to`
    pub fn add(&mut self, from: &ContextPath, to: &ContextPath) {
        let translation = Translation {
            from: from.clone(),
            to: to.clone(),
        };
        self.set.insert(translation.to.to_string(), translation);
    }

    /// Shortcut for translations where both sides use the same field name
    /// directly under their family roots
    pub fn add_identity<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        for segment in paths {
            let segment = segment.into();
            let from = ContextPath::new(self.from_tag.clone()).append(segment.clone());
            let to = ContextPath::new(self.to_tag.clone()).append(segment);
            self.add(&from, &to);
        }
    }

    /// Add every entry of `other`, replacing entries with the same destination
    pub fn merge(&mut self, other: &TranslationSet) {
        for translation in other.set.values() {
            self.add(&translation.from, &translation.to);
        }
    }

    /// Like [`merge`](Self::merge), but `other` is prefixed first
    pub fn merge_with_prefix<I, S>(&mut self, prefix: I, other: &TranslationSet)
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        let prefixed = other.prefix(prefix);
        self.merge(&prefixed);
    }

    /// Return a copy with every path prefixed by `prefix` under its own family
    /// root.
    ///
    /// Both the new source path and the new destination path are rebuilt from
    /// the entry's *source* suffix. This assumes a prefixed subtree has the
    /// same layout on both sides.
    pub fn prefix<I, S>(&self, prefix: I) -> TranslationSet
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        let prefix: Vec<Segment> = prefix.into_iter().map(Into::into).collect();
        let from_root = ContextPath::with_segments(self.from_tag.clone(), prefix.clone());
        let to_root = ContextPath::with_segments(self.to_tag.clone(), prefix);

        let mut ret = TranslationSet::new(self.from_tag.clone(), self.to_tag.clone());
        for translation in self.set.values() {
            ret.add(
                &from_root.extend(&translation.from.segments),
                &to_root.extend(&translation.from.segments),
            );
        }
        ret
    }

    /// Add every entry of `other` relocated under `from_prefix` and
    /// `to_prefix`, each side keeping its own suffix
    pub fn merge_rebased(
        &mut self,
        from_prefix: &ContextPath,
        to_prefix: &ContextPath,
        other: &TranslationSet,
    ) {
        for translation in other.set.values() {
            self.add(
                &from_prefix.extend(&translation.from.segments),
                &to_prefix.extend(&translation.to.segments),
            );
        }
    }

    /// Translation whose destination renders as `key`
    pub fn get(&self, key: &str) -> Option<&Translation> {
        self.set.get(key)
    }

    /// Translation that produced the destination location `to`
    pub fn lookup(&self, to: &ContextPath) -> Option<&Translation> {
        self.set.get(&to.to_string())
    }

    /// Source location that produced `to`, if it was recorded
    pub fn source_of(&self, to: &ContextPath) -> Option<&ContextPath> {
        self.lookup(to).map(|translation| &translation.from)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.set.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Entries ordered by rendered destination path
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Translation)> {
        self.set.iter().map(|(key, translation)| (key.as_str(), translation))
    }

    /// Rendered destination paths, in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.set.keys().map(String::as_str)
    }
}

impl fmt::Display for TranslationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "from: {}", self.from_tag)?;
        writeln!(f, "to: {}", self.to_tag)?;
        for (key, translation) in &self.set {
            writeln!(f, "{}: {} -> {}", key, translation.from, translation.to)?;
        }
        Ok(())
    }
}
