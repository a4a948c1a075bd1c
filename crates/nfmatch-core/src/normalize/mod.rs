//! Invoice number normalization and filename token extraction.
//!
//! Both sides of the match share the same minimum-digit gate
//! ([`MIN_SEARCH_DIGITS`]) and the same leading-zero rule: a lookup
//! variant shorter than the gate is never generated, and a filename
//! token shorter than the gate is never indexed. Keeping the two in
//! lockstep is what prevents currency and date fragments from producing
//! false positives.

pub mod canonical;
pub mod patterns;
pub mod tokens;
pub mod variants;

pub use canonical::normalize_number;
pub use patterns::{MIN_SEARCH_DIGITS, STRIP_PREFIXES};
pub use tokens::filename_tokens;
pub use variants::lookup_variants;

/// Strip leading zeros from a digit string, keeping at least one digit.
pub(crate) fn strip_leading_zeros(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() && !digits.is_empty() {
        "0"
    } else {
        stripped
    }
}

/// Extract only the ASCII digits of a string.
pub(crate) fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strip_leading_zeros_keeps_one_digit() {
        assert_eq!(strip_leading_zeros("0000"), "0");
        assert_eq!(strip_leading_zeros("0085583"), "85583");
        assert_eq!(strip_leading_zeros("85583"), "85583");
        assert_eq!(strip_leading_zeros(""), "");
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("DP-0085583-1"), "00855831");
        assert_eq!(digits_only("ABC"), "");
    }
}
