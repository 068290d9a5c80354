// SPDX-License-Identifier: MIT OR Apache-2.0

//! A qualifier: a named, typed axis of variation (§3 `Qualifier`).

use crate::qualifier_type::QualifierType;
use ctxres_core::{CtxError, Result};
use regex::Regex;
use std::sync::OnceLock;

fn name_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("valid qualifier name regex"))
}

pub fn is_valid_name(name: &str) -> bool {
    name_pattern().is_match(name)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Qualifier {
    pub name: String,
    pub qualifier_type: QualifierType,
    pub default_priority: u16,
    pub token: Option<String>,
    pub token_is_optional: bool,
    pub default_value: Option<String>,
}

impl Qualifier {
    pub fn new(
        name: impl Into<String>,
        qualifier_type: QualifierType,
        default_priority: u16,
    ) -> Result<Self> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(CtxError::ParseError {
                reason: format!("{name:?} is not a valid qualifier name"),
                position: 0,
            });
        }
        Ok(Self {
            name,
            qualifier_type,
            default_priority,
            token: None,
            token_is_optional: false,
            default_value: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>, optional: bool) -> Self {
        self.token = Some(token.into());
        self.token_is_optional = optional;
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_names_starting_with_a_digit() {
        assert!(!is_valid_name("1lang"));
        assert!(is_valid_name("lang"));
        assert!(is_valid_name("_lang-2"));
    }

    #[test]
    fn constructor_rejects_invalid_name() {
        let err = Qualifier::new("1bad", QualifierType::Literal, 0).unwrap_err();
        assert!(matches!(err, CtxError::ParseError { .. }));
    }
}
