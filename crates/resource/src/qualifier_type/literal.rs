// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `literal` qualifier type (§4.G): condition values are single
//! opaque tokens matched case-insensitively; context values may be a
//! comma-separated list of candidates.

use super::split_context_list;

pub fn is_valid_condition_value(value: &str) -> bool {
    !value.trim().is_empty() && !value.contains(',')
}

pub fn is_valid_context_value(value: &str) -> bool {
    let items = split_context_list(value);
    !items.is_empty()
}

pub fn score(condition_value: &str, context_value: &str) -> f64 {
    let hit = split_context_list(context_value)
        .iter()
        .any(|item| item.eq_ignore_ascii_case(condition_value));
    if hit {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_values_cannot_contain_commas() {
        assert!(is_valid_condition_value("phone"));
        assert!(!is_valid_condition_value("phone,tablet"));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(score("Phone", "phone"), 1.0);
    }

    #[test]
    fn context_list_matches_any_listed_value() {
        assert_eq!(score("tablet", "phone,tablet"), 1.0);
        assert_eq!(score("watch", "phone,tablet"), 0.0);
    }
}
