// SPDX-License-Identifier: MIT OR Apache-2.0

//! The shared `qualifier=value` token grammar used by both condition and
//! context strings (§6 "Condition/context token syntax"):
//! `<qualifier>=<value>`, pipe-separated, whitespace trimmed around `|`.

use crate::qualifier::is_valid_name;
use ctxres_core::{CtxError, Result};

/// One parsed `qualifier=value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub qualifier_name: String,
    pub value: String,
}

/// Splits `raw` on `|`, trims whitespace around each pipe, and parses
/// each token as `qualifier=value`. An empty token (`"a=b||c=d"` or
/// leading/trailing `|`) is an error, as is a missing `=` or an invalid
/// qualifier name.
pub fn parse_pairs(raw: &str) -> Result<Vec<Pair>> {
    raw.split('|')
        .map(str::trim)
        .map(|token| {
            if token.is_empty() {
                return Err(CtxError::ParseError {
                    reason: "empty token between pipes".to_string(),
                    position: 0,
                });
            }
            let (name, value) = token.split_once('=').ok_or_else(|| CtxError::ParseError {
                reason: format!("token {token:?} is missing '='"),
                position: 0,
            })?;
            if !is_valid_name(name) {
                return Err(CtxError::ParseError {
                    reason: format!("{name:?} is not a valid qualifier name"),
                    position: 0,
                });
            }
            Ok(Pair { qualifier_name: name.to_string(), value: value.to_string() })
        })
        .collect()
}
