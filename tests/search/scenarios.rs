//! End-to-end search scenarios over small corpora.

use super::common::{both_corpora, phrases, HAMLET_LINE, SONNET};
use shakesearch::{search, OrderBy, Query, SortDirection};

#[test]
fn test_two_occurrences_in_short_corpus() {
    for (kind, corpus) in both_corpora(HAMLET_LINE) {
        let result = search(&corpus, &Query::new("be").with_limit(10));

        assert_eq!(result.total, 2, "{kind}");
        assert_eq!(result.page, 1, "{kind}");
        // Both windows clamp to the whole corpus
        assert_eq!(phrases(&result), vec![HAMLET_LINE, HAMLET_LINE], "{kind}");
    }
}

#[test]
fn test_absent_term_is_empty() {
    for (kind, corpus) in both_corpora(HAMLET_LINE) {
        let result = search(&corpus, &Query::new("xyz"));
        assert_eq!(result.total, 0, "{kind}");
        assert!(result.data.is_empty(), "{kind}");
    }
}

#[test]
fn test_second_page_of_one() {
    let text = format!("be{}BE", " ".repeat(400));

    for (kind, corpus) in both_corpora(&text) {
        let query = Query::new("be")
            .with_limit(1)
            .with_page(2)
            .with_order(OrderBy::Occurrence, SortDirection::Asc);
        let result = search(&corpus, &query);

        assert_eq!(result.total, 2, "{kind}");
        assert_eq!(result.data.len(), 1, "{kind}");
        assert!(result.data[0].phrase.ends_with("BE"), "{kind}");
    }
}

#[test]
fn test_matching_ignores_case() {
    for (kind, corpus) in both_corpora(SONNET) {
        let lower = search(&corpus, &Query::new("summer").with_limit(500));
        let upper = search(&corpus, &Query::new("SUMMER").with_limit(500));
        let mixed = search(&corpus, &Query::new("sUmMeR").with_limit(500));

        assert_eq!(lower.total, 3, "{kind}");
        assert_eq!(phrases(&lower), phrases(&upper), "{kind}");
        assert_eq!(phrases(&lower), phrases(&mixed), "{kind}");
    }
}

#[test]
fn test_multi_word_term() {
    for (kind, corpus) in both_corpora(SONNET) {
        let result = search(&corpus, &Query::new("so long").with_limit(500));
        assert_eq!(result.total, 2, "{kind}");
    }
}

#[test]
fn test_substrings_inside_words_count() {
    // Only ever inside "fair"
    for (kind, corpus) in both_corpora(SONNET) {
        let result = search(&corpus, &Query::new("air").with_limit(500));
        assert_eq!(result.total, 3, "{kind}");
    }
}

#[test]
fn test_regex_syntax_is_honoured_by_scan() {
    let corpus = super::common::corpus(SONNET);
    let result = search(&corpus, &Query::new("thou|thee").with_limit(500));
    let thou = search(&corpus, &Query::new("thou").with_limit(500)).total;
    let thee = search(&corpus, &Query::new("thee").with_limit(500)).total;
    assert_eq!(result.total, thou + thee);
}

#[test]
fn test_invalid_regex_matches_literally() {
    let corpus = super::common::corpus("call it (fair or foul");
    let result = search(&corpus, &Query::new("(fair"));
    assert_eq!(result.total, 1);
}

#[test]
fn test_repeated_search_is_deterministic() {
    let corpus = super::common::corpus(SONNET);
    let query = Query::new("the").with_order(OrderBy::Frequency, SortDirection::Desc);
    let first = search(&corpus, &query);
    let second = search(&corpus, &query);
    assert_eq!(first.total, second.total);
    assert_eq!(first.data, second.data);
}
