// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-subtag-type well-formedness regexes (§4.A `isWellFormed`, feeding
//! the parser's lookahead in §4.B).

use regex::Regex;
use std::sync::OnceLock;

fn compiled(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static well-formedness pattern is valid")
}

macro_rules! pattern_fn {
    ($name:ident, $pattern:literal) => {
        pub fn $name() -> &'static Regex {
            static CELL: OnceLock<Regex> = OnceLock::new();
            CELL.get_or_init(|| compiled($pattern))
        }
    };
}

// 2-3 or 5-8 ASCII letters.
pattern_fn!(language, r"^(?i:[A-Za-z]{2,3}|[A-Za-z]{5,8})$");
// Exactly 3 ASCII letters (RFC 5646 extended-language subtags).
pattern_fn!(extlang, r"^(?i:[A-Za-z]{3})$");
// 4 ASCII letters.
pattern_fn!(script, r"^(?i:[A-Za-z]{4})$");
// 2 letters or 3 digits.
pattern_fn!(region, r"^(?i:[A-Za-z]{2}|[0-9]{3})$");
// 5-8 alphanumeric, or 4 characters starting with a digit.
pattern_fn!(variant, r"^(?i:[A-Za-z0-9]{5,8}|[0-9][A-Za-z0-9]{3})$");
// A single ASCII alphanumeric that is not `x`/`X` (§4.B step 7).
pattern_fn!(extension_singleton, r"^(?i:[0-9A-Wy-z])$");
// 2-8 alphanumeric extension subtags.
pattern_fn!(extension_subtag, r"^(?i:[A-Za-z0-9]{2,8})$");
// 1-8 alphanumeric private-use subtags.
pattern_fn!(private_use_subtag, r"^(?i:[A-Za-z0-9]{1,8})$");
// A whole grandfathered or redundant tag: 2+ hyphen-joined alphanumeric
// subtags (e.g. "i-klingon", "zh-Hans").
pattern_fn!(whole_tag, r"^(?i:[A-Za-z0-9]{1,8}(-[A-Za-z0-9]{1,8})+)$");

pub fn is_well_formed(pattern: &Regex, raw: &str) -> bool {
    pattern.is_match(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_accepts_two_and_three_and_long_forms() {
        assert!(is_well_formed(language(), "en"));
        assert!(is_well_formed(language(), "ast"));
        assert!(is_well_formed(language(), "abcde"));
        assert!(!is_well_formed(language(), "a"));
        assert!(!is_well_formed(language(), "abcd"));
    }

    #[test]
    fn region_accepts_letters_or_digits() {
        assert!(is_well_formed(region(), "US"));
        assert!(is_well_formed(region(), "001"));
        assert!(!is_well_formed(region(), "USA"));
    }

    #[test]
    fn extension_singleton_excludes_x() {
        assert!(is_well_formed(extension_singleton(), "u"));
        assert!(!is_well_formed(extension_singleton(), "x"));
        assert!(!is_well_formed(extension_singleton(), "X"));
    }

    #[test]
    fn variant_accepts_long_form_and_digit_led_short_form() {
        assert!(is_well_formed(variant(), "1994"));
        assert!(is_well_formed(variant(), "fonipa"));
        assert!(!is_well_formed(variant(), "abcd"));
    }
}
