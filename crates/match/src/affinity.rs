// SPDX-License-Identifier: MIT OR Apache-2.0

//! The static region-affinity table (§4.E step 5): for languages with a
//! documented set of related regions, a direct `(language, regionA,
//! regionB) -> tier` lookup rather than a derived formula — a generic
//! "preferred region gets top marks" rule would contradict the documented
//! worked example (`en-US` vs `en-GB` is `sibling` even though `GB` is
//! English's preferred region), so the table only grants `affinity`/
//! `preferredAffinity` to pairs it actually lists. Anything it doesn't
//! know about falls back to `sibling`, never lower — by this point the
//! two tags already agree on primary language, script, and extlangs.

use ctxres_core::SimilarityTier;

struct AffinityEntry {
    language: &'static str,
    preferred: &'static str,
    related: &'static [&'static str],
}

const TABLE: &[AffinityEntry] = &[
    AffinityEntry { language: "en", preferred: "GB", related: &["GB", "CA", "AU", "NZ"] },
    AffinityEntry { language: "fr", preferred: "FR", related: &["FR", "CA", "BE", "CH"] },
];

/// Looks up the affinity tier for two distinct, present regions under a
/// shared primary language (§4.E step 5's final "both present but
/// unrelated" branch).
pub fn affinity_tier(language: &str, region_a: &str, region_b: &str) -> SimilarityTier {
    let Some(entry) = TABLE.iter().find(|e| e.language.eq_ignore_ascii_case(language)) else {
        return SimilarityTier::Sibling;
    };
    let a_preferred = entry.preferred.eq_ignore_ascii_case(region_a);
    let b_preferred = entry.preferred.eq_ignore_ascii_case(region_b);
    let a_related = entry.related.iter().any(|r| r.eq_ignore_ascii_case(region_a));
    let b_related = entry.related.iter().any(|r| r.eq_ignore_ascii_case(region_b));

    if a_related && b_related {
        if a_preferred || b_preferred {
            SimilarityTier::PreferredAffinity
        } else {
            SimilarityTier::Affinity
        }
    } else {
        SimilarityTier::Sibling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_region_paired_with_related_is_preferred_affinity() {
        assert_eq!(affinity_tier("en", "GB", "CA"), SimilarityTier::PreferredAffinity);
    }

    #[test]
    fn two_related_non_preferred_regions_are_affinity() {
        assert_eq!(affinity_tier("en", "CA", "AU"), SimilarityTier::Affinity);
    }

    #[test]
    fn untabulated_region_falls_back_to_sibling() {
        assert_eq!(affinity_tier("en", "US", "GB"), SimilarityTier::Sibling);
    }

    #[test]
    fn unknown_language_falls_back_to_sibling() {
        assert_eq!(affinity_tier("de", "DE", "AT"), SimilarityTier::Sibling);
    }
}
