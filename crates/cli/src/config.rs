// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small TOML config for the CLI (§1 ambient addition): registry paths,
//! catalog path, default fallback tag, and qualifier declarations. Pure
//! ambient tooling — the library crates never read this themselves.

use anyhow::Result;
use ctxres_resource::{Qualifier, QualifierType};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub fallback_tag: Option<String>,
    #[serde(default)]
    pub qualifiers: Vec<QualifierConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QualifierConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: QualifierKindConfig,
    #[serde(default)]
    pub default_priority: u16,
    #[serde(default)]
    pub token_is_optional: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualifierKindConfig {
    Language,
    Territory,
    Literal,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Builds the qualifier set the importer/resolver use. Falls back to
    /// a small built-in `language`/`territory` set when the config
    /// doesn't declare any, so the CLI is runnable with zero config.
    pub fn qualifiers(&self) -> Result<HashMap<String, Qualifier>> {
        if self.qualifiers.is_empty() {
            return Ok(default_qualifiers());
        }
        let mut out = HashMap::new();
        for qc in &self.qualifiers {
            let qualifier_type = match qc.kind {
                QualifierKindConfig::Language => QualifierType::Language,
                QualifierKindConfig::Territory => QualifierType::Territory,
                QualifierKindConfig::Literal => QualifierType::Literal,
            };
            let mut qualifier = Qualifier::new(qc.name.clone(), qualifier_type, qc.default_priority)?;
            if qc.token_is_optional {
                qualifier = qualifier.with_token(qc.name.clone(), true);
            }
            out.insert(qc.name.clone(), qualifier);
        }
        Ok(out)
    }
}

fn default_qualifiers() -> HashMap<String, Qualifier> {
    let mut m = HashMap::new();
    m.insert(
        "language".to_string(),
        Qualifier::new("language", QualifierType::Language, 10).expect("valid built-in name"),
    );
    m.insert(
        "territory".to_string(),
        Qualifier::new("territory", QualifierType::Territory, 10)
            .expect("valid built-in name")
            .with_token("territory", true),
    );
    m
}
