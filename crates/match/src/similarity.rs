// SPDX-License-Identifier: MIT OR Apache-2.0

//! The BCP-47 similarity matcher (§4.E): a left-to-right short-circuit
//! algorithm over two already-parsed tags' subtags, producing one of the
//! eleven totally-ordered [`SimilarityTier`]s.

use crate::affinity;
use ctxres_core::{territory, PrimaryForm, Result, SimilarityTier, Subtags};
use ctxres_registry::Registries;

/// Compute similarity between two raw BCP-47 tag strings, normalizing
/// both to their preferred form first (§4.E's "after preferred
/// normalization if requested" — this crate always requests it, since an
/// un-normalized comparison would treat `i-klingon` and `tlh` as
/// unrelated primary languages).
pub fn similarity(registries: &Registries, raw_a: &str, raw_b: &str) -> Result<SimilarityTier> {
    let a = ctxres_parse::parse(registries, raw_a)?;
    let b = ctxres_parse::parse(registries, raw_b)?;
    let a = ctxres_parse::preferred(registries, &a)?;
    let b = ctxres_parse::preferred(registries, &b)?;
    Ok(similarity_subtags(registries, &a, &b))
}

/// The pure, registry-consulting form used once both sides are already
/// parsed (and, conventionally, preferred-normalized).
pub fn similarity_subtags(registries: &Registries, a: &Subtags, b: &Subtags) -> SimilarityTier {
    match (a.primary_form(), b.primary_form()) {
        (Some(PrimaryForm::PrivateUseOnly), Some(PrimaryForm::PrivateUseOnly)) => {
            return if private_use_eq(a, b) { SimilarityTier::Exact } else { SimilarityTier::None };
        }
        (Some(PrimaryForm::PrivateUseOnly), _) | (_, Some(PrimaryForm::PrivateUseOnly)) => {
            return SimilarityTier::None;
        }
        _ => {}
    }

    let lang_a = a.primary_language.as_deref().or(a.grandfathered.as_deref()).unwrap_or_default();
    let lang_b = b.primary_language.as_deref().or(b.grandfathered.as_deref()).unwrap_or_default();

    // Step 1 (with step 2's `und` exception folded in, since a hard
    // language mismatch would otherwise short-circuit before `und` gets a
    // chance to cap the result instead).
    if !lang_a.eq_ignore_ascii_case(lang_b) {
        if lang_a.eq_ignore_ascii_case("und") || lang_b.eq_ignore_ascii_case("und") {
            return SimilarityTier::Undetermined;
        }
        return SimilarityTier::None;
    }

    // Step 3: extlangs.
    if a.extlangs.len() != b.extlangs.len() {
        return SimilarityTier::None;
    }
    for (x, y) in a.extlangs.iter().zip(b.extlangs.iter()) {
        if !x.eq_ignore_ascii_case(y) {
            return SimilarityTier::None;
        }
    }

    // Step 4: scripts.
    if !scripts_compatible(registries, lang_a, a.script.as_deref(), b.script.as_deref()) {
        return SimilarityTier::None;
    }

    let mut tier = SimilarityTier::Exact;

    // Step 5: regions.
    tier = tier.min(region_tier(lang_a, a.region.as_deref(), b.region.as_deref()));

    // Step 6: variants.
    let variants_equal = a.variants.len() == b.variants.len()
        && a.variants.iter().zip(b.variants.iter()).all(|(x, y)| x.eq_ignore_ascii_case(y));
    if !variants_equal {
        tier = tier.min(SimilarityTier::Region);
    }

    // Step 7: extensions and private-use.
    if a.extensions != b.extensions || a.private_use != b.private_use {
        tier = tier.min(SimilarityTier::Variant);
    }

    tier
}

fn private_use_eq(a: &Subtags, b: &Subtags) -> bool {
    a.private_use.len() == b.private_use.len()
        && a.private_use.iter().zip(b.private_use.iter()).all(|(x, y)| x.eq_ignore_ascii_case(y))
}

fn scripts_compatible(
    registries: &Registries,
    language: &str,
    a: Option<&str>,
    b: Option<&str>,
) -> bool {
    match (a, b) {
        (Some(x), Some(y)) => x.eq_ignore_ascii_case(y),
        (Some(s), None) | (None, Some(s)) => registries
            .language()
            .try_get(language)
            .and_then(|r| r.suppress_script.as_deref())
            .is_some_and(|suppress| suppress.eq_ignore_ascii_case(s)),
        (None, None) => true,
    }
}

fn region_tier(language: &str, a: Option<&str>, b: Option<&str>) -> SimilarityTier {
    match (a, b) {
        (Some(ra), Some(rb)) => {
            if ra.eq_ignore_ascii_case(rb) {
                return SimilarityTier::Exact;
            }
            // Region `001` (world) matches any present region at `exact`
            // (§8 boundary behavior), not only when the other side is
            // missing.
            if territory::is_world(ra) || territory::is_world(rb) {
                return SimilarityTier::Exact;
            }
            if territory::is_ancestor(ra, rb) || territory::is_ancestor(rb, ra) {
                return SimilarityTier::MacroRegion;
            }
            affinity::affinity_tier(language, ra, rb)
        }
        (Some(r), None) | (None, Some(r)) => {
            if territory::is_world(r) {
                SimilarityTier::Exact
            } else {
                SimilarityTier::NeutralRegion
            }
        }
        (None, None) => SimilarityTier::Exact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registries() -> &'static Registries {
        Registries::bundled()
    }

    #[test]
    fn reflexive_similarity_is_exact() {
        assert_eq!(similarity(registries(), "en-US", "en-US").unwrap(), SimilarityTier::Exact);
    }

    #[test]
    fn symmetric_similarity() {
        let ab = similarity(registries(), "en-US", "en-GB").unwrap();
        let ba = similarity(registries(), "en-GB", "en-US").unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn scenario_en_us_en_gb_is_sibling() {
        assert_eq!(similarity(registries(), "en-US", "en-GB").unwrap(), SimilarityTier::Sibling);
    }

    #[test]
    fn scenario_en_gb_en_ca_is_preferred_affinity() {
        assert_eq!(
            similarity(registries(), "en-GB", "en-CA").unwrap(),
            SimilarityTier::PreferredAffinity
        );
    }

    #[test]
    fn scenario_en_au_en_is_neutral_region() {
        assert_eq!(similarity(registries(), "en-AU", "en").unwrap(), SimilarityTier::NeutralRegion);
    }

    #[test]
    fn different_languages_are_none() {
        assert_eq!(similarity(registries(), "en-US", "fr-FR").unwrap(), SimilarityTier::None);
    }

    #[test]
    fn und_caps_at_undetermined() {
        assert_eq!(similarity(registries(), "und", "en-US").unwrap(), SimilarityTier::Undetermined);
    }

    #[test]
    fn world_region_matches_any_present_region_at_exact() {
        assert_eq!(similarity(registries(), "en-001", "en-US").unwrap(), SimilarityTier::Exact);
    }
}
