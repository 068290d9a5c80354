// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `language` qualifier type (§4.G): condition/context values are
//! BCP-47 tags, matched via the similarity matcher.

use super::split_context_list;
use ctxres_registry::Registries;

pub fn is_valid_condition_value(registries: &Registries, value: &str) -> bool {
    ctxres_parse::parser::parse(registries, value).is_ok()
}

pub fn is_valid_context_value(registries: &Registries, value: &str) -> bool {
    let items = split_context_list(value);
    !items.is_empty() && items.iter().all(|item| is_valid_condition_value(registries, item))
}

/// A comma-separated context value matches at the best similarity any one
/// of its listed tags reaches against the condition value.
pub fn score(registries: &Registries, condition_value: &str, context_value: &str) -> f64 {
    split_context_list(context_value)
        .iter()
        .filter_map(|tag| ctxres_match::similarity(registries, condition_value, tag).ok())
        .map(|tier| tier.score())
        .fold(0.0_f64, f64::max)
}
