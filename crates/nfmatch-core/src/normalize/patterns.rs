//! Shared constants and regex patterns for the normalization pipeline.

use lazy_static::lazy_static;
use regex::Regex;

/// Minimum digit count for a search key or filename token.
///
/// Anything shorter is ignored on the identifier side and never indexed
/// on the filename side, so a 3-digit currency remnant can never match.
pub const MIN_SEARCH_DIGITS: usize = 4;

/// Known vendor prefixes stripped from invoice numbers (first match only).
pub const STRIP_PREFIXES: [&str; 8] = [
    "DP-", "DA-", "EM-", "U-", "NF-", "NOTA-", "FAT-", "V-",
];

lazy_static! {
    /// Trailing parcel suffix: separator plus 1-3 digits (e.g. "-001", "/02").
    pub static ref PARCEL_SUFFIX: Regex = Regex::new(r"[-/]\d{1,3}$").unwrap();

    /// Series-prefixed numbers: a 1-3 series code times 100 glued onto the
    /// real number (e.g. "3001351595" for series 300, number 1351595).
    pub static ref SERIES_PREFIX: Regex = Regex::new(r"^[1-3]00\d{4,}$").unwrap();

    /// Monetary amount embedded in a filename (e.g. "R$ 11.101,15").
    pub static ref CURRENCY_AMOUNT: Regex = Regex::new(r"(?i)R\$\s*[\d.,]+").unwrap();

    /// Maximal digit run long enough to index.
    pub static ref DIGIT_RUN: Regex = Regex::new(r"\d{4,}").unwrap();
}
