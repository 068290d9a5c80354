// SPDX-License-Identifier: MIT OR Apache-2.0

//! The parsed representation of a BCP-47 tag (§3 `Subtags`).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single extension sequence: a singleton identifier followed by one or
/// more 2-8 alphanumeric subtags (§4.B step 7).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionSubtag {
    pub singleton: char,
    pub subtags: Vec<String>,
}

/// The structured result of parsing a tag (§3).
///
/// Invariant: exactly one of `primary_language`, `grandfathered`, or a
/// non-empty `private_use` is present. [`Subtags::primary_form`] exposes
/// that invariant as a closed enum rather than leaving callers to check
/// three optional fields by hand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Subtags {
    pub primary_language: Option<String>,
    /// At most three, per RFC 5646 (§4.B step 3).
    pub extlangs: SmallVec<[String; 3]>,
    pub script: Option<String>,
    pub region: Option<String>,
    pub variants: Vec<String>,
    pub extensions: Vec<ExtensionSubtag>,
    pub private_use: Vec<String>,
    pub grandfathered: Option<String>,
}

/// The closed union the `primary_language`/`grandfathered`/`private_use`
/// invariant collapses to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryForm<'a> {
    Language(&'a str),
    Grandfathered(&'a str),
    PrivateUseOnly,
}

impl Subtags {
    pub fn primary_form(&self) -> Option<PrimaryForm<'_>> {
        if let Some(g) = &self.grandfathered {
            Some(PrimaryForm::Grandfathered(g))
        } else if let Some(l) = &self.primary_language {
            Some(PrimaryForm::Language(l))
        } else if !self.private_use.is_empty() {
            Some(PrimaryForm::PrivateUseOnly)
        } else {
            None
        }
    }

    pub fn is_grandfathered(&self) -> bool {
        self.grandfathered.is_some()
    }

    pub fn is_private_use_only(&self) -> bool {
        self.grandfathered.is_none() && self.primary_language.is_none() && !self.private_use.is_empty()
    }

    /// Renders the subtags back into a `-`-delimited string, in the fixed
    /// RFC 5646 order. Case is whatever each field currently holds; callers
    /// normalize before rendering if they want canonical/preferred casing.
    pub fn render(&self) -> String {
        if let Some(g) = &self.grandfathered {
            return g.clone();
        }
        let mut parts: Vec<String> = Vec::new();
        if self.is_private_use_only() {
            parts.push("x".to_string());
            parts.extend(self.private_use.iter().cloned());
            return parts.join("-");
        }
        if let Some(l) = &self.primary_language {
            parts.push(l.clone());
        }
        parts.extend(self.extlangs.iter().cloned());
        if let Some(s) = &self.script {
            parts.push(s.clone());
        }
        if let Some(r) = &self.region {
            parts.push(r.clone());
        }
        parts.extend(self.variants.iter().cloned());
        for ext in &self.extensions {
            parts.push(ext.singleton.to_string());
            parts.extend(ext.subtags.iter().cloned());
        }
        if !self.private_use.is_empty() {
            parts.push("x".to_string());
            parts.extend(self.private_use.iter().cloned());
        }
        parts.join("-")
    }
}

/// The three escalating validation levels (§4.C), forming a total order
/// `WellFormed < Valid < StrictlyValid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ValidityLevel {
    WellFormed,
    Valid,
    StrictlyValid,
}

/// The two normalization levels (§4.D): `Canonical < Preferred`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NormalizationLevel {
    Canonical,
    Preferred,
}

/// An immutable, already-validated BCP-47 tag (§3 `LanguageTag`).
///
/// `to_string(parse(tag)) == tag` holds whenever `tag` is already at or
/// above `normalization`; see the round-trip property in §8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTag {
    canonical: String,
    subtags: Subtags,
    validity: ValidityLevel,
    normalization: NormalizationLevel,
}

impl LanguageTag {
    /// Used only by the crates that establish the validity/normalization
    /// level (`ctxres-parse`); everyone else receives an already-built
    /// `LanguageTag`.
    pub fn new_unchecked(
        canonical: String,
        subtags: Subtags,
        validity: ValidityLevel,
        normalization: NormalizationLevel,
    ) -> Self {
        Self { canonical, subtags, validity, normalization }
    }

    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    pub fn subtags(&self) -> &Subtags {
        &self.subtags
    }

    pub fn validity(&self) -> ValidityLevel {
        self.validity
    }

    pub fn normalization(&self) -> NormalizationLevel {
        self.normalization
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical)
    }
}

/// `chooseValidator`/`chooseNormalizer` share this shape (§4.C/§4.D):
/// `Some(requested)` iff `current < requested`, else `None`.
pub fn choose_level<T: PartialOrd + Copy>(requested: T, current: T) -> Option<T> {
    if current < requested {
        Some(requested)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choose_level_is_none_when_already_satisfied() {
        assert_eq!(choose_level(ValidityLevel::Valid, ValidityLevel::Valid), None);
        assert_eq!(
            choose_level(ValidityLevel::Valid, ValidityLevel::StrictlyValid),
            None
        );
        assert_eq!(
            choose_level(ValidityLevel::Valid, ValidityLevel::WellFormed),
            Some(ValidityLevel::Valid)
        );
    }

    #[test]
    fn render_round_trips_simple_tag() {
        let subtags = Subtags {
            primary_language: Some("en".into()),
            region: Some("US".into()),
            ..Default::default()
        };
        assert_eq!(subtags.render(), "en-US");
    }
}
