//! Resolution of invoice numbers against the token index.

use std::fs;
use std::path::PathBuf;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::index::TokenIndex;
use crate::normalize::{filename_tokens, lookup_variants};

/// A file resolved for one invoice number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundPdf {
    /// The raw invoice number as supplied by the caller.
    pub number: String,
    /// Filename of the matched file.
    pub file_name: String,
    /// Full path of the matched file.
    pub path: PathBuf,
    /// File size in bytes at resolution time.
    pub size: u64,
}

/// Why a number was ignored instead of searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Fewer canonical digits than the search minimum.
    TooShort,
}

/// Classification of one invoice number.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// A candidate file was resolved and is accessible.
    Found(FoundPdf),
    /// No variant hit the index.
    NotFound,
    /// The number never reached the index.
    Ignored(IgnoreReason),
}

/// Outcome buckets of a batch search, each in input order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub found: Vec<FoundPdf>,
    pub not_found: Vec<String>,
    pub ignored: Vec<String>,
}

/// Resolve one invoice number to at most one file.
///
/// Variants are tried in priority order; the first with a non-empty
/// bucket wins and its first file is taken, provided a stat confirms it
/// is still accessible. A failed stat logs and falls through to the next
/// variant rather than failing the number.
pub fn resolve(number: &str, index: &TokenIndex) -> MatchOutcome {
    let variants = lookup_variants(number);
    if variants.is_empty() {
        info!("number ignored (too short): {number}");
        return MatchOutcome::Ignored(IgnoreReason::TooShort);
    }

    for variant in &variants {
        let Some(path) = index.bucket(variant).and_then(<[PathBuf]>::first) else {
            continue;
        };

        match fs::metadata(path) {
            Ok(meta) => {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                return MatchOutcome::Found(FoundPdf {
                    number: number.to_string(),
                    file_name,
                    path: path.clone(),
                    size: meta.len(),
                });
            }
            Err(err) => {
                warn!("stat failed for {}: {}", path.display(), err);
            }
        }
    }

    MatchOutcome::NotFound
}

/// All files the number could correspond to, across every variant.
///
/// One entry per file, first-seen order. Used by preview flows to flag
/// multi-match ambiguity instead of silently picking one file.
pub fn resolve_all(number: &str, index: &TokenIndex) -> Vec<PathBuf> {
    let variants = lookup_variants(number);
    let mut files: IndexSet<PathBuf> = IndexSet::new();
    for variant in &variants {
        if let Some(bucket) = index.bucket(variant) {
            for path in bucket {
                files.insert(path.clone());
            }
        }
    }
    files.into_iter().collect()
}

/// Linear-scan match against an unindexed, in-memory list of filenames.
///
/// A name matches when any variant is a member of its token set, the
/// same rule the index applies, so both paths share the minimum-digit
/// gate. Returns matching names in input order, each at most once.
pub fn resolve_in_list<'a>(number: &str, names: &'a [String]) -> Vec<&'a str> {
    let variants = lookup_variants(number);
    if variants.is_empty() {
        return Vec::new();
    }

    names
        .iter()
        .filter(|name| {
            let tokens = filename_tokens(name);
            variants.iter().any(|v| tokens.contains(v))
        })
        .map(String::as_str)
        .collect()
}

/// Classify a list of invoice numbers against the index, in input order.
pub fn search_batch(numbers: &[String], index: &TokenIndex) -> SearchResults {
    let mut results = SearchResults::default();

    for number in numbers {
        match resolve(number, index) {
            MatchOutcome::Found(found) => results.found.push(found),
            MatchOutcome::NotFound => results.not_found.push(number.clone()),
            MatchOutcome::Ignored(_) => results.ignored.push(number.clone()),
        }
    }

    info!(
        "search: {} found, {} not found, {} ignored",
        results.found.len(),
        results.not_found.len(),
        results.ignored.len()
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;

    fn index_with(dir: &Path, names: &[&str]) -> TokenIndex {
        for name in names {
            fs::write(dir.join(name), b"x").unwrap();
        }
        TokenIndex::build(dir, "pdf")
    }

    #[test]
    fn test_resolve_found() {
        let dir = tempfile::tempdir().unwrap();
        let index = index_with(dir.path(), &["NF 798541 acme.pdf"]);

        match resolve("798541", &index) {
            MatchOutcome::Found(found) => {
                assert_eq!(found.file_name, "NF 798541 acme.pdf");
                assert_eq!(found.number, "798541");
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_not_found_and_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let index = index_with(dir.path(), &["NF 798541.pdf"]);

        assert_eq!(resolve("999999", &index), MatchOutcome::NotFound);
        assert_eq!(
            resolve("101", &index),
            MatchOutcome::Ignored(IgnoreReason::TooShort)
        );
    }

    #[test]
    fn test_resolve_via_series_variant() {
        let dir = tempfile::tempdir().unwrap();
        let index = index_with(dir.path(), &["fatura 1351595.pdf"]);

        match resolve("3001351595", &index) {
            MatchOutcome::Found(found) => {
                assert_eq!(found.file_name, "fatura 1351595.pdf")
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_first_variant_wins() {
        let dir = tempfile::tempdir().unwrap();
        // Both files are reachable: one via the full key, one via the
        // series-stripped suffix. The full key has higher priority.
        let index = index_with(
            dir.path(),
            &["a 3001351595.pdf", "b 1351595 only.pdf"],
        );

        match resolve("3001351595", &index) {
            MatchOutcome::Found(found) => {
                assert_eq!(found.file_name, "a 3001351595.pdf")
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_all_reports_every_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let index = index_with(
            dir.path(),
            &["a 3001351595.pdf", "b 1351595 only.pdf"],
        );

        let all = resolve_all("3001351595", &index);
        let mut names: Vec<_> = all
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        assert_eq!(names, vec!["a 3001351595.pdf", "b 1351595 only.pdf"]);
    }

    #[test]
    fn test_resolve_in_list() {
        let names = vec![
            "NF 798541.pdf".to_string(),
            "NF 0085583.pdf".to_string(),
            "recibo R$ 11.101,15.pdf".to_string(),
        ];

        assert_eq!(resolve_in_list("DP-0085583-1", &names), vec!["NF 0085583.pdf"]);
        assert_eq!(resolve_in_list("101", &names), Vec::<&str>::new());
    }

    #[test]
    fn test_search_batch_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let index = index_with(dir.path(), &["NF 798541.pdf", "NF 769591.pdf"]);

        let numbers: Vec<String> = ["798541", "101-1", "769591", "001-001"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let results = search_batch(&numbers, &index);

        assert_eq!(results.found.len(), 2);
        assert_eq!(results.found[0].number, "798541");
        assert_eq!(results.found[1].number, "769591");
        assert_eq!(results.not_found, Vec::<String>::new());
        assert_eq!(results.ignored, vec!["101-1", "001-001"]);
    }

    #[test]
    fn test_duplicate_numbers_classify_identically() {
        let dir = tempfile::tempdir().unwrap();
        let index = index_with(dir.path(), &["NF 798541.pdf"]);

        let numbers = vec!["798541".to_string(), "798541".to_string()];
        let results = search_batch(&numbers, &index);
        assert_eq!(results.found.len(), 2);
        assert_eq!(results.found[0].path, results.found[1].path);
    }
}
