// SPDX-License-Identifier: MIT OR Apache-2.0

//! The similarity tier total order used by the BCP-47 matcher (§4.E).
//!
//! Tiers are declared in ascending order so `#[derive(PartialOrd, Ord)]`
//! gives exactly the required total order:
//! `none=0 < undetermined < sibling < region < macroRegion < neutralRegion
//! < preferredRegion < affinity < preferredAffinity < variant < exact=1`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SimilarityTier {
    None,
    Undetermined,
    Sibling,
    Region,
    MacroRegion,
    NeutralRegion,
    PreferredRegion,
    Affinity,
    PreferredAffinity,
    Variant,
    Exact,
}

impl SimilarityTier {
    /// Project the tier onto `[0, 1]`, used wherever a qualifier type's
    /// `match` must return a bare float (§4.G).
    pub fn score(self) -> f64 {
        match self {
            SimilarityTier::None => 0.0,
            SimilarityTier::Undetermined => 0.05,
            SimilarityTier::Sibling => 0.3,
            SimilarityTier::Region => 0.4,
            SimilarityTier::MacroRegion => 0.5,
            SimilarityTier::NeutralRegion => 0.6,
            SimilarityTier::PreferredRegion => 0.7,
            SimilarityTier::Affinity => 0.8,
            SimilarityTier::PreferredAffinity => 0.9,
            SimilarityTier::Variant => 0.95,
            SimilarityTier::Exact => 1.0,
        }
    }

    pub fn is_match(self) -> bool {
        self > SimilarityTier::None
    }
}

impl std::fmt::Display for SimilarityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SimilarityTier::None => "none",
            SimilarityTier::Undetermined => "undetermined",
            SimilarityTier::Sibling => "sibling",
            SimilarityTier::Region => "region",
            SimilarityTier::MacroRegion => "macroRegion",
            SimilarityTier::NeutralRegion => "neutralRegion",
            SimilarityTier::PreferredRegion => "preferredRegion",
            SimilarityTier::Affinity => "affinity",
            SimilarityTier::PreferredAffinity => "preferredAffinity",
            SimilarityTier::Variant => "variant",
            SimilarityTier::Exact => "exact",
        };
        f.write_str(s)
    }
}
