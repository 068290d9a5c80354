// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `territory` qualifier type (§4.G): "exact match = 1; `world`
//! context matches any region at neutralRegion; macro-region containing
//! condition region = macroRegion."

use super::split_context_list;
use ctxres_core::{territory, SimilarityTier};
use ctxres_registry::Registries;

const WORLD_KEYWORD: &str = "world";

fn is_registered_region(registries: &Registries, value: &str) -> bool {
    value.eq_ignore_ascii_case(WORLD_KEYWORD) || registries.region().try_get(value).is_some()
}

pub fn is_valid_condition_value(registries: &Registries, value: &str) -> bool {
    is_registered_region(registries, value)
}

pub fn is_valid_context_value(registries: &Registries, value: &str) -> bool {
    let items = split_context_list(value);
    !items.is_empty() && items.iter().all(|item| is_registered_region(registries, item))
}

fn is_world_keyword(value: &str) -> bool {
    value.eq_ignore_ascii_case(WORLD_KEYWORD)
}

fn pair_tier(condition_value: &str, context_value: &str) -> SimilarityTier {
    if condition_value.eq_ignore_ascii_case(context_value) {
        return SimilarityTier::Exact;
    }
    if is_world_keyword(context_value) {
        return SimilarityTier::NeutralRegion;
    }
    let a = if is_world_keyword(condition_value) { territory::WORLD } else { condition_value };
    if territory::is_ancestor(a, context_value) || territory::is_ancestor(context_value, a) {
        return SimilarityTier::MacroRegion;
    }
    SimilarityTier::None
}

pub fn score(condition_value: &str, context_value: &str) -> f64 {
    split_context_list(context_value)
        .iter()
        .map(|item| pair_tier(condition_value, item).score())
        .fold(0.0_f64, f64::max)
}
