// SPDX-License-Identifier: MIT OR Apache-2.0

//! The mechanical, registry-independent casing rules the canonical
//! normalization level applies per subtag position (§4.D): language and
//! extlang lower, script title case, region upper, variant lower,
//! extension subtags lower, private-use lower.

pub fn lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

pub fn upper(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Titlecase: first byte upper, rest lower (scripts are always 4 ASCII
/// letters, e.g. `Latn`, `Hans`).
pub fn title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_only_first_letter() {
        assert_eq!(title("LATN"), "Latn");
        assert_eq!(title("hans"), "Hans");
    }
}
