//! Context windows in search results.

use super::common::{both_corpora, corpus};
use shakesearch::{search, Query, CONTEXT_WINDOW};

#[test]
fn test_match_at_corpus_start_is_clamped() {
    let text = format!("Romeo{}", "-".repeat(500));
    for (kind, corpus) in both_corpora(&text) {
        let result = search(&corpus, &Query::new("romeo"));
        assert_eq!(result.total, 1, "{kind}");
        assert_eq!(result.data[0].phrase.len(), 5 + CONTEXT_WINDOW, "{kind}");
        assert!(result.data[0].phrase.starts_with("Romeo"), "{kind}");
    }
}

#[test]
fn test_match_at_corpus_end_is_clamped() {
    let text = format!("{}Juliet", "-".repeat(500));
    for (kind, corpus) in both_corpora(&text) {
        let result = search(&corpus, &Query::new("juliet"));
        assert_eq!(result.data[0].phrase.len(), CONTEXT_WINDOW + 6, "{kind}");
        assert!(result.data[0].phrase.ends_with("Juliet"), "{kind}");
    }
}

#[test]
fn test_window_in_middle_has_full_context() {
    let text = format!("{}Hamlet{}", "a".repeat(500), "b".repeat(500));
    let corpus = corpus(&text);
    let phrase = &search(&corpus, &Query::new("hamlet")).data[0].phrase;
    assert_eq!(
        phrase,
        &format!("{}Hamlet{}", "a".repeat(CONTEXT_WINDOW), "b".repeat(CONTEXT_WINDOW))
    );
}

#[test]
fn test_window_respects_multibyte_text() {
    let text = format!("{}lord{}", "é".repeat(200), "ō".repeat(200));
    for (kind, corpus) in both_corpora(&text) {
        let result = search(&corpus, &Query::new("lord"));
        let phrase = &result.data[0].phrase;
        // Slicing would have panicked on a bad boundary; check the shape too
        assert!(phrase.contains("lord"), "{kind}");
        assert!(phrase.len() <= 4 + 2 * CONTEXT_WINDOW, "{kind}");
        assert!(phrase.starts_with('é') && phrase.ends_with('ō'), "{kind}");
    }
}
