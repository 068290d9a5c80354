// SPDX-License-Identifier: MIT OR Apache-2.0

//! The two normalization levels (§4.D): `canonical` (mechanical casing)
//! and `preferred` (registry-driven semantic substitutions).

use ctxres_core::{casing, CtxError, NormalizationLevel, Result, Subtags};
use ctxres_registry::Registries;
use std::collections::HashSet;

pub use ctxres_core::choose_level as choose_normalizer;

/// **canonical**: apply per-position casing only; never consults registry
/// semantics beyond case.
pub fn canonicalize(subtags: &Subtags) -> Subtags {
    if let Some(g) = &subtags.grandfathered {
        return Subtags { grandfathered: Some(g.clone()), ..Default::default() };
    }
    if subtags.is_private_use_only() {
        return Subtags {
            private_use: subtags.private_use.iter().map(|s| casing::lower(s)).collect(),
            ..Default::default()
        };
    }
    Subtags {
        primary_language: subtags.primary_language.as_deref().map(casing::lower),
        extlangs: subtags.extlangs.iter().map(|s| casing::lower(s)).collect(),
        script: subtags.script.as_deref().map(casing::title),
        region: subtags.region.as_deref().map(casing::upper),
        variants: subtags.variants.iter().map(|s| casing::lower(s)).collect(),
        extensions: subtags
            .extensions
            .iter()
            .map(|e| ctxres_core::ExtensionSubtag {
                singleton: e.singleton.to_ascii_lowercase(),
                subtags: e.subtags.iter().map(|s| casing::lower(s)).collect(),
            })
            .collect(),
        private_use: subtags.private_use.iter().map(|s| casing::lower(s)).collect(),
        grandfathered: None,
    }
}

/// **preferred**: canonical casing plus every registry-recommended
/// substitution and deletion (§4.D).
pub fn preferred(registries: &Registries, subtags: &Subtags) -> Result<Subtags> {
    let canonical = canonicalize(subtags);

    if let Some(g) = &canonical.grandfathered {
        if let Some(record) = registries.grandfathered().try_get(g) {
            if let Some(replacement) = &record.preferred_value {
                let reparsed = crate::parser::parse(registries, replacement)?;
                return preferred(registries, &reparsed);
            }
        }
        return Ok(canonical);
    }
    if canonical.is_private_use_only() {
        return Ok(canonical);
    }

    let mut primary_language = canonical.primary_language.clone();
    if let Some(lang) = &primary_language {
        if let Some(record) = registries.language().try_get(lang) {
            if let Some(preferred) = &record.preferred_value {
                primary_language = Some(preferred.clone());
            }
        }
    }

    // Extlang absorption: a registered extlang's preferred form replaces
    // the primary+extlang pair outright (§4.D "absorbing the extlang").
    let mut extlangs = canonical.extlangs.clone();
    if let Some(first) = canonical.extlangs.first() {
        if let Some(record) = registries.extlang().try_get(first) {
            let replacement = record.preferred_value.clone().unwrap_or_else(|| first.clone());
            primary_language = Some(replacement);
            extlangs.clear();
        }
    }

    let mut region = canonical.region.clone();
    if let Some(r) = &region {
        if let Some(record) = registries.region().try_get(r) {
            if let Some(preferred) = &record.preferred_value {
                region = Some(preferred.clone());
            }
        }
    }

    let mut seen_variants = HashSet::new();
    let mut variants = Vec::new();
    for variant in &canonical.variants {
        let substituted = registries
            .variant()
            .try_get(variant)
            .and_then(|r| r.preferred_value.clone())
            .unwrap_or_else(|| variant.clone());
        if seen_variants.insert(substituted.to_ascii_lowercase()) {
            variants.push(substituted);
        }
    }

    let mut seen_singletons = HashSet::new();
    let mut extensions = Vec::new();
    for ext in &canonical.extensions {
        let singleton = registries
            .extension()
            .try_get(&ext.singleton.to_string())
            .and_then(|r| r.preferred_value.clone())
            .and_then(|v| v.chars().next())
            .unwrap_or(ext.singleton);
        if let Some(existing) = extensions
            .iter()
            .find(|e: &&ctxres_core::ExtensionSubtag| e.singleton == singleton)
        {
            if existing.subtags != ext.subtags {
                return Err(CtxError::KeyCollision(format!(
                    "extension singleton {singleton:?} duplicated with differing subtags"
                )));
            }
            continue;
        }
        if !seen_singletons.insert(singleton) {
            continue;
        }
        extensions.push(ctxres_core::ExtensionSubtag { singleton, subtags: ext.subtags.clone() });
    }

    // Strip an explicit script that matches the (possibly substituted)
    // primary language's suppress-script.
    let mut script = canonical.script.clone();
    if let (Some(lang), Some(s)) = (&primary_language, &script) {
        if let Some(record) = registries.language().try_get(lang) {
            if let Some(suppress) = &record.suppress_script {
                if suppress.eq_ignore_ascii_case(s) {
                    script = None;
                }
            }
        }
    }

    Ok(Subtags {
        primary_language,
        extlangs,
        script,
        region,
        variants,
        extensions,
        private_use: canonical.private_use,
        grandfathered: None,
    })
}

/// Applies the level-appropriate transform to produce the rendered,
/// registry-canonical string form used to build a [`ctxres_core::LanguageTag`].
pub fn normalize(registries: &Registries, subtags: &Subtags, level: NormalizationLevel) -> Result<Subtags> {
    match level {
        NormalizationLevel::Canonical => Ok(canonicalize(subtags)),
        NormalizationLevel::Preferred => preferred(registries, subtags),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn registries() -> &'static Registries {
        Registries::bundled()
    }

    #[test]
    fn canonical_applies_mechanical_casing() {
        let subtags = Subtags {
            primary_language: Some("EN".into()),
            script: Some("latn".into()),
            region: Some("us".into()),
            ..Default::default()
        };
        let canonical = canonicalize(&subtags);
        assert_eq!(canonical.primary_language.as_deref(), Some("en"));
        assert_eq!(canonical.script.as_deref(), Some("Latn"));
        assert_eq!(canonical.region.as_deref(), Some("US"));
    }

    #[test]
    fn preferred_substitutes_deprecated_language() {
        let subtags = Subtags { primary_language: Some("mo".into()), ..Default::default() };
        let result = preferred(registries(), &subtags).unwrap();
        assert_eq!(result.primary_language.as_deref(), Some("ro"));
    }

    #[test]
    fn preferred_absorbs_extlang() {
        let subtags = parse(registries(), "zh-cmn-Hans-CN").unwrap();
        let result = preferred(registries(), &subtags).unwrap();
        assert_eq!(result.primary_language.as_deref(), Some("cmn"));
        assert!(result.extlangs.is_empty());
    }

    #[test]
    fn preferred_strips_suppress_script() {
        let subtags = parse(registries(), "zh-Hans-CN").unwrap();
        let result = preferred(registries(), &subtags).unwrap();
        assert_eq!(result.script, None);
    }

    #[test]
    fn preferred_substitutes_grandfathered_tag() {
        let subtags = parse(registries(), "i-klingon").unwrap();
        let result = preferred(registries(), &subtags).unwrap();
        assert_eq!(result.primary_language.as_deref(), Some("tlh"));
        assert_eq!(result.grandfathered, None);
    }

    #[test]
    fn preferred_is_idempotent() {
        let subtags = parse(registries(), "zh-cmn-Hans-CN").unwrap();
        let once = preferred(registries(), &subtags).unwrap();
        let twice = preferred(registries(), &once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn preferred_dedups_variants() {
        let subtags = Subtags {
            primary_language: Some("sl".into()),
            variants: vec!["fonipa".into(), "fonipa".into()],
            ..Default::default()
        };
        let result = preferred(registries(), &subtags).unwrap();
        assert_eq!(result.variants, vec!["fonipa".to_string()]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::parser::parse;
    use proptest::prelude::*;

    const LANGUAGES: &[&str] =
        &["und", "en", "fr", "de", "es", "pt", "it", "nl", "ru", "ja", "ko", "sl", "tlh", "zh", "mo"];
    const REGIONS: &[&str] = &[
        "001", "019", "021", "150", "009", "053", "030", "142", "US", "GB", "CA", "AU", "NZ", "MX",
        "FR", "DE", "ES", "PT", "IT", "NL", "BE", "CH", "RU", "CN", "JP", "KR",
    ];

    fn registries() -> &'static Registries {
        Registries::bundled()
    }

    fn tag() -> impl Strategy<Value = String> {
        (
            prop::sample::select(LANGUAGES),
            prop::option::of(prop::sample::select(REGIONS)),
        )
            .prop_map(|(lang, region)| match region {
                Some(region) => format!("{lang}-{region}"),
                None => lang.to_string(),
            })
    }

    proptest! {
        /// §4.D: `preferred` is idempotent on any well-formed tag this
        /// generator can produce, not just the one absorbed-extlang case
        /// spelled out above.
        #[test]
        fn preferred_normalization_is_idempotent(raw in tag()) {
            let subtags = parse(registries(), &raw).unwrap();
            let once = preferred(registries(), &subtags).unwrap();
            let twice = preferred(registries(), &once).unwrap();
            prop_assert_eq!(once, twice);
        }

        /// §4.D: mechanical casing is idempotent too — canonicalizing an
        /// already-canonical value changes nothing.
        #[test]
        fn canonicalization_is_idempotent(raw in tag()) {
            let subtags = parse(registries(), &raw).unwrap();
            let once = canonicalize(&subtags);
            let twice = canonicalize(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
