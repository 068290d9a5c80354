// SPDX-License-Identifier: MIT OR Apache-2.0

//! The BCP-47 parser, validator, and normalizer (§4.B, §4.C, §4.D).
//!
//! This crate turns a raw tag string into an immutable, already-validated
//! [`ctxres_core::LanguageTag`] at whatever validity/normalization level
//! the caller asks for.

mod cursor;
pub mod normalizer;
pub mod parser;
pub mod validator;

pub use normalizer::{canonicalize, choose_normalizer, normalize, preferred};
pub use parser::parse;
pub use validator::{choose_validator, validate};

use ctxres_core::{LanguageTag, NormalizationLevel, Result, ValidityLevel};
use ctxres_registry::Registries;

/// Parse, validate, and normalize `raw` in one call, producing a
/// [`LanguageTag`] at the requested levels (§3 `LanguageTag`).
pub fn parse_tag(
    registries: &Registries,
    raw: &str,
    validity: ValidityLevel,
    normalization: NormalizationLevel,
) -> Result<LanguageTag> {
    let subtags = parser::parse(registries, raw)?;
    validator::validate(registries, &subtags, validity)?;
    let normalized = normalizer::normalize(registries, &subtags, normalization)?;
    let canonical = normalized.render();
    Ok(LanguageTag::new_unchecked(canonical, normalized, validity, normalization))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registries() -> &'static Registries {
        Registries::bundled()
    }

    #[test]
    fn round_trip_canonical_tag_is_a_fixed_point() {
        let tag = parse_tag(
            registries(),
            "en-US",
            ValidityLevel::Valid,
            NormalizationLevel::Canonical,
        )
        .unwrap();
        assert_eq!(tag.as_str(), "en-US");
    }

    #[test]
    fn grandfathered_tag_normalizes_to_preferred_value() {
        let tag = parse_tag(
            registries(),
            "i-klingon",
            ValidityLevel::Valid,
            NormalizationLevel::Preferred,
        )
        .unwrap();
        assert_eq!(tag.as_str(), "tlh");
    }
}
