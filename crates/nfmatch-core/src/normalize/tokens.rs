//! Numeric token extraction from candidate filenames.

use indexmap::IndexSet;

use super::patterns::{CURRENCY_AMOUNT, DIGIT_RUN, MIN_SEARCH_DIGITS};
use super::strip_leading_zeros;

/// Extract the indexable numeric tokens of a filename.
///
/// Monetary amounts are blanked out first so a price like "R$ 11.101,15"
/// never contributes its digits as tokens. What remains is scanned for
/// maximal digit runs of at least
/// [`MIN_SEARCH_DIGITS`](super::MIN_SEARCH_DIGITS) digits; each run is
/// indexed as-is and, when still long enough, with leading zeros
/// stripped. Deduplicated, discovery order.
pub fn filename_tokens(name: &str) -> Vec<String> {
    let cleaned = CURRENCY_AMOUNT.replace_all(name, " ");

    let mut tokens: IndexSet<String> = IndexSet::new();
    for run in DIGIT_RUN.find_iter(&cleaned) {
        let run = run.as_str();
        tokens.insert(run.to_string());

        let stripped = strip_leading_zeros(run);
        if stripped != run && stripped.len() >= MIN_SEARCH_DIGITS {
            tokens.insert(stripped.to_string());
        }
    }

    tokens.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_extraction() {
        assert_eq!(filename_tokens("NF 798541 - fornecedor.pdf"), vec!["798541"]);
    }

    #[test]
    fn test_short_runs_are_not_indexed() {
        assert_eq!(filename_tokens("nota 101 v2.pdf"), Vec::<String>::new());
    }

    #[test]
    fn test_zero_stripped_twin() {
        assert_eq!(filename_tokens("NF 0085583.pdf"), vec!["0085583", "85583"]);
        // Stripping below the gate does not add a twin.
        assert_eq!(filename_tokens("doc 0001234.pdf"), vec!["0001234", "1234"]);
        assert_eq!(filename_tokens("doc 0000123.pdf"), vec!["0000123"]);
    }

    #[test]
    fn test_currency_suppression() {
        // The price digits would otherwise index as "11" / "101" / "15".
        assert_eq!(
            filename_tokens("NF 798541 R$ 11.101,15.pdf"),
            vec!["798541"]
        );
        // A long amount must not leak either.
        assert_eq!(
            filename_tokens("boleto R$ 1.234.567,89 acme.pdf"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_multiple_runs() {
        assert_eq!(
            filename_tokens("769591_3001351595.pdf"),
            vec!["769591", "3001351595"]
        );
    }

    #[test]
    fn test_deduplication() {
        assert_eq!(filename_tokens("798541-798541.pdf"), vec!["798541"]);
    }
}
