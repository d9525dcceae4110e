//! Ordering: occurrence and frequency, both directions.

use super::common::{both_corpora, make_query, spaced};
use shakesearch::{search, OrderBy, SortDirection};

/// Numbered occurrences far enough apart that no window holds two of them.
fn numbered(n: usize) -> String {
    (0..n)
        .map(|i| format!("ghost{i:02}"))
        .collect::<Vec<_>>()
        .join(&" ".repeat(250))
}

fn labels(result: &shakesearch::SearchResult) -> Vec<String> {
    result
        .data
        .iter()
        .map(|m| {
            let at = m.phrase.find("ghost").unwrap_or(0);
            m.phrase[at..at + 7].to_string()
        })
        .collect()
}

#[test]
fn test_occurrence_asc_is_document_order() {
    for (kind, corpus) in both_corpora(&numbered(4)) {
        let query = make_query("ghost", 10, 1, OrderBy::Occurrence, SortDirection::Asc);
        assert_eq!(
            labels(&search(&corpus, &query)),
            vec!["ghost00", "ghost01", "ghost02", "ghost03"],
            "{kind}"
        );
    }
}

#[test]
fn test_occurrence_desc_is_reverse_document_order() {
    for (kind, corpus) in both_corpora(&numbered(4)) {
        let query = make_query("ghost", 10, 1, OrderBy::Occurrence, SortDirection::Desc);
        assert_eq!(
            labels(&search(&corpus, &query)),
            vec!["ghost03", "ghost02", "ghost01", "ghost00"],
            "{kind}"
        );
    }
}

#[test]
fn test_default_request_serves_reverse_document_order() {
    for (kind, corpus) in both_corpora(&numbered(2)) {
        let query = shakesearch::Query::new("ghost").with_limit(1).with_page(2);
        assert_eq!(labels(&search(&corpus, &query)), vec!["ghost00"], "{kind}");
    }
}

#[test]
fn test_frequency_desc_puts_clusters_first() {
    // A lone match, then a cluster of three within one window
    let text = format!(
        "{}{}{}",
        "storm",
        " ".repeat(300),
        spaced(&["storm", "storm", "storm"], 10)
    );

    for (kind, corpus) in both_corpora(&text) {
        let desc = make_query("storm", 10, 1, OrderBy::Frequency, SortDirection::Desc);
        let result = search(&corpus, &desc);
        assert_eq!(result.total, 4, "{kind}");
        // The lone match's window holds only itself, so it comes last
        assert!(!result.data[3].phrase.contains("storm storm"), "{kind}");
        assert!(result.data[0].phrase.matches("storm").count() >= 3, "{kind}");

        let asc = make_query("storm", 10, 1, OrderBy::Frequency, SortDirection::Asc);
        let result = search(&corpus, &asc);
        assert_eq!(result.data[0].phrase.matches("storm").count(), 1, "{kind}");
    }
}

#[test]
fn test_frequency_ties_keep_document_order() {
    for (kind, corpus) in both_corpora(&numbered(5)) {
        for sort in [SortDirection::Asc, SortDirection::Desc] {
            let query = make_query("ghost", 10, 1, OrderBy::Frequency, sort);
            assert_eq!(
                labels(&search(&corpus, &query)),
                vec!["ghost00", "ghost01", "ghost02", "ghost03", "ghost04"],
                "{kind} {sort}"
            );
        }
    }
}

#[test]
fn test_ordering_applies_before_pagination() {
    let corpus = super::common::corpus(&numbered(6));
    let query = make_query("ghost", 2, 2, OrderBy::Occurrence, SortDirection::Desc);
    assert_eq!(labels(&search(&corpus, &query)), vec!["ghost03", "ghost02"]);
}
