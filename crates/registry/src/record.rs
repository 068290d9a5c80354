// SPDX-License-Identifier: MIT OR Apache-2.0

//! The IANA registry record shape (§3 `Registry record`).

use serde::{Deserialize, Serialize};

/// Which of the IANA subtag registry's partitions a record belongs to,
/// plus the parallel single-character-keyed extension registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryType {
    Language,
    Extlang,
    Script,
    Region,
    Variant,
    Grandfathered,
    Redundant,
    Extension,
}

impl RegistryType {
    pub fn as_str(self) -> &'static str {
        match self {
            RegistryType::Language => "language",
            RegistryType::Extlang => "extlang",
            RegistryType::Script => "script",
            RegistryType::Region => "region",
            RegistryType::Variant => "variant",
            RegistryType::Grandfathered => "grandfathered",
            RegistryType::Redundant => "redundant",
            RegistryType::Extension => "extension",
        }
    }
}

/// A single IANA registry entry (§3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryRecord {
    #[serde(rename = "type")]
    pub record_type: RegistryType,
    pub subtag: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub added: Option<String>,
    #[serde(default)]
    pub deprecated: Option<String>,
    #[serde(default, rename = "preferredValue")]
    pub preferred_value: Option<String>,
    #[serde(default, rename = "suppressScript")]
    pub suppress_script: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub macrolanguage: Option<String>,
    /// Ordered sequence of prefixes this subtag is only valid after
    /// (extlangs and variants use this for the strictly-valid prefix
    /// rule, §4.C).
    #[serde(default)]
    pub prefix: Vec<String>,
}

impl RegistryRecord {
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }
}
