//! Shared test utilities and fixtures.

#![allow(dead_code)]

use shakesearch::{Corpus, Query, SearchResult, CONTEXT_WINDOW};

// Re-export canonical fixtures from shakesearch::testing
pub use shakesearch::testing::{
    corpus, make_query, scan_corpus, spaced, synthetic_corpus, HAMLET_LINE, SONNET,
};

// ============================================================================
// CORPUS PAIRS
// ============================================================================

/// The same text behind the suffix index and behind the regex scan.
///
/// Every search assertion should hold for both.
pub fn both_corpora(text: &str) -> [(&'static str, Corpus); 2] {
    [("indexed", corpus(text)), ("scan", scan_corpus(text))]
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Phrases of a result, in serving order.
pub fn phrases(result: &SearchResult) -> Vec<&str> {
    result.data.iter().map(|m| m.phrase.as_str()).collect()
}

/// Structural checks every result must pass, whatever the query.
pub fn assert_result_well_formed(corpus: &Corpus, query: &Query, result: &SearchResult) {
    assert_eq!(result.page, query.page, "page echoed back");
    assert!(
        result.data.len() <= query.limit as usize,
        "served {} with limit {}",
        result.data.len(),
        query.limit
    );

    let expected_len = query.page_range(result.total).len();
    assert_eq!(
        result.data.len(),
        expected_len,
        "page {} of {} with limit {}",
        query.page,
        result.total,
        query.limit
    );

    let term_len = query.term.len();
    for m in &result.data {
        assert!(
            corpus.text().contains(m.phrase.as_str()),
            "phrase is not a slice of the corpus: {:?}",
            m.phrase
        );
        assert!(
            m.phrase.len() <= term_len + 2 * CONTEXT_WINDOW + 8,
            "phrase longer than its window: {}",
            m.phrase.len()
        );
        assert!(
            m.phrase
                .to_ascii_lowercase()
                .contains(&query.term.to_ascii_lowercase()),
            "phrase does not contain the term: {:?}",
            m.phrase
        );
    }
}
