// SPDX-License-Identifier: MIT OR Apache-2.0

//! The chooser (§4.F): orders `available` tags by best match against an
//! ordered `desired` list.

use crate::similarity;
use ctxres_core::{Result, SimilarityTier};
use ctxres_registry::Registries;
use std::collections::{HashMap, HashSet};

/// How many matches per available tag survive filtering.
///
/// `All` and `Best` are documented synonyms (§9 Open Question): a
/// caller-supplied `all` is treated as `best` rather than as a third,
/// distinct semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    Best,
    All,
    None,
}

/// Whether the chooser emits the tag that was available, or the desired
/// tag that matched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Use {
    #[default]
    AvailableLanguage,
    DesiredLanguage,
}

#[derive(Debug, Clone, Default)]
pub struct ChooseOptions {
    pub filter: Filter,
    pub ultimate_fallback: Option<String>,
    pub use_: Use,
}

/// Rank `available` tags against `desired` (§4.F).
pub fn choose(
    registries: &Registries,
    desired: &[String],
    available: &[String],
    options: &ChooseOptions,
) -> Result<Vec<String>> {
    let mut triples: Vec<(usize, SimilarityTier, usize)> = Vec::new();
    for (di, d) in desired.iter().enumerate() {
        for (ai, a) in available.iter().enumerate() {
            let sim = similarity::similarity(registries, d, a)?;
            if sim.is_match() {
                triples.push((di, sim, ai));
            }
        }
    }

    // Step 3: `(desiredIndex asc, similarity desc, availableIndex asc)`.
    triples.sort_by(|x, y| x.0.cmp(&y.0).then(y.1.cmp(&x.1)).then(x.2.cmp(&y.2)));

    let filtered: Vec<(usize, SimilarityTier, usize)> = match options.filter {
        Filter::None => triples,
        Filter::All | Filter::Best => {
            let mut best_per_available: HashMap<usize, SimilarityTier> = HashMap::new();
            for &(_, sim, ai) in &triples {
                best_per_available
                    .entry(ai)
                    .and_modify(|top| {
                        if sim > *top {
                            *top = sim;
                        }
                    })
                    .or_insert(sim);
            }
            triples.into_iter().filter(|&(_, sim, ai)| best_per_available[&ai] == sim).collect()
        }
    };

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for (di, _, ai) in filtered {
        if seen.insert(ai) {
            out.push(match options.use_ {
                Use::AvailableLanguage => available[ai].clone(),
                Use::DesiredLanguage => desired[di].clone(),
            });
        }
    }

    if out.is_empty() {
        if let Some(fallback) = &options.ultimate_fallback {
            return Ok(vec![fallback.clone()]);
        }
    }

    Ok(out)
}
