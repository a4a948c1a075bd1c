//! Lookup-variant generation for invoice numbers.

use indexmap::IndexSet;

use super::canonical::normalize_number;
use super::patterns::{MIN_SEARCH_DIGITS, SERIES_PREFIX};
use super::{digits_only, strip_leading_zeros};

/// Generate the ordered set of index lookup variants for an invoice number.
///
/// Returns an empty vector when the canonical key has fewer than
/// [`MIN_SEARCH_DIGITS`](super::MIN_SEARCH_DIGITS) digits; that is the
/// single gate that classifies a number as ignored-too-short, so short
/// fragments ("101", "01") are reported instead of mismatched.
///
/// Priority order, deduplicated keeping the first occurrence:
/// 1. digits of the canonical key;
/// 2. digits of the raw input, and that with leading zeros stripped
///    (covers inputs with noise the canonical steps do not target);
/// 3. the key zero-padded to widths 6 and 8;
/// 4. for series-prefixed keys (`[1-3]00` + number), the number after
///    the series code with leading zeros stripped.
pub fn lookup_variants(raw: &str) -> Vec<String> {
    let key = digits_only(&normalize_number(raw));
    if key.len() < MIN_SEARCH_DIGITS {
        return Vec::new();
    }

    let mut variants: IndexSet<String> = IndexSet::new();
    variants.insert(key.clone());

    let raw_digits = digits_only(raw);
    if raw_digits.len() >= MIN_SEARCH_DIGITS {
        let stripped = strip_leading_zeros(&raw_digits);
        variants.insert(raw_digits.clone());
        if stripped.len() >= MIN_SEARCH_DIGITS {
            variants.insert(stripped.to_string());
        }
    }

    variants.insert(zero_pad(&key, 6));
    variants.insert(zero_pad(&key, 8));

    if SERIES_PREFIX.is_match(&key) {
        let suffix = strip_leading_zeros(&key[3..]);
        if suffix.len() >= MIN_SEARCH_DIGITS {
            variants.insert(suffix.to_string());
        }
    }

    variants.into_iter().collect()
}

/// Left-pad a digit string with zeros up to `width`. Longer strings are
/// returned unchanged.
fn zero_pad(digits: &str, width: usize) -> String {
    if digits.len() >= width {
        digits.to_string()
    } else {
        format!("{digits:0>width$}")
    }
}
