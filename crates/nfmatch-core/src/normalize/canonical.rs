//! Canonical form of an invoice number.
//!
//! The pipeline is an ordered list of steps; each step is a small pure
//! function so the order is data and every step can be tested on its own.

use super::patterns::{PARCEL_SUFFIX, STRIP_PREFIXES};
use super::strip_leading_zeros;

/// Normalization steps, applied in order to the trimmed uppercase input.
const STEPS: &[fn(&str) -> String] = &[
    strip_known_prefix,
    strip_parcel_suffix,
    strip_unit_marker,
    collapse_leading_zeros,
];

/// Normalize an invoice number into its canonical key.
///
/// Strips one known vendor prefix, a trailing parcel suffix, a leading
/// `1-` unit marker, and leading zeros (keeping at least one digit).
/// Infallible; may return an empty string for degenerate input, which
/// downstream variant generation turns into an ignored outcome.
pub fn normalize_number(raw: &str) -> String {
    let mut value = raw.trim().to_uppercase();
    for step in STEPS {
        value = step(&value);
    }
    value
}

/// Strip the first matching known prefix, if any. Single pass: a second
/// prefix-like substring is left alone.
fn strip_known_prefix(value: &str) -> String {
    for prefix in STRIP_PREFIXES {
        if let Some(rest) = value.strip_prefix(prefix) {
            return rest.to_string();
        }
    }
    value.to_string()
}

/// Strip one trailing parcel suffix ("-001", "/02", ...).
fn strip_parcel_suffix(value: &str) -> String {
    PARCEL_SUFFIX.replace(value, "").into_owned()
}

/// Strip a literal leading "1-" (e.g. "1-0085583" -> "0085583").
fn strip_unit_marker(value: &str) -> String {
    value.strip_prefix("1-").unwrap_or(value).to_string()
}

/// Collapse leading zeros on all-digit values, keeping at least one digit.
fn collapse_leading_zeros(value: &str) -> String {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        strip_leading_zeros(value).to_string()
    } else {
        value.to_string()
    }
}
