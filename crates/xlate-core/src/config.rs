//! Translator configuration
//!
//! The configuration names the two schema families a translator moves
//! between. The family labels root every recorded path and select which
//! field tag supplies a field's serialized name.

use serde::{Deserialize, Serialize};

/// Settings for a [`Translator`](crate::Translator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Family of the source schema, e.g. `yaml`
    pub from_tag: String,

    /// Family of the destination schema, e.g. `json`
    pub to_tag: String,
}

impl TranslatorConfig {
    pub fn new(from_tag: impl Into<String>, to_tag: impl Into<String>) -> Self {
        Self {
            from_tag: from_tag.into(),
            to_tag: to_tag.into(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            from_tag: "yaml".to_string(),
            to_tag: "json".to_string(),
        }
    }
}
