// SPDX-License-Identifier: MIT OR Apache-2.0

//! A runtime query context: qualifier name to context value (§3 `Context`).

use crate::token;
use ctxres_core::Result;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    values: HashMap<String, String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, qualifier_name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(qualifier_name.into(), value.into());
        self
    }

    /// Parses the `qualifier=value|qualifier2=value2` token syntax (§6).
    pub fn parse(raw: &str) -> Result<Self> {
        let mut ctx = Self::new();
        for pair in token::parse_pairs(raw)? {
            ctx.values.insert(pair.qualifier_name, pair.value);
        }
        Ok(ctx)
    }

    pub fn get(&self, qualifier_name: &str) -> Option<&str> {
        self.values.get(qualifier_name).map(String::as_str)
    }

    /// All `(qualifier name, value)` pairs, for validating a context
    /// against a catalog's registered qualifier types (§3 Context).
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
