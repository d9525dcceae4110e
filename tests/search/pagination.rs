//! Pagination over the ordered match list.

use super::common::{assert_result_well_formed, both_corpora, make_query, spaced};
use shakesearch::{search, OrderBy, SortDirection};

fn twenty_three_kings() -> String {
    spaced(&["king"; 23], 250)
}

#[test]
fn test_pages_partition_all_matches() {
    let text = twenty_three_kings();

    for (kind, corpus) in both_corpora(&text) {
        let mut seen = Vec::new();
        for page in 1..=5 {
            let query = make_query("king", 5, page, OrderBy::Occurrence, SortDirection::Asc);
            let result = search(&corpus, &query);
            assert_result_well_formed(&corpus, &query, &result);
            assert_eq!(result.total, 23, "{kind}");
            seen.extend(result.data);
        }
        assert_eq!(seen.len(), 23, "{kind}");
    }
}

#[test]
fn test_last_page_is_truncated() {
    let corpus = super::common::corpus(&twenty_three_kings());
    let query = make_query("king", 10, 3, OrderBy::Occurrence, SortDirection::Desc);
    let result = search(&corpus, &query);
    assert_eq!(result.total, 23);
    assert_eq!(result.data.len(), 3);
}

#[test]
fn test_page_past_end_is_empty_not_error() {
    let corpus = super::common::corpus(&twenty_three_kings());
    let query = make_query("king", 25, 100, OrderBy::Frequency, SortDirection::Asc);
    let result = search(&corpus, &query);
    assert_eq!(result.total, 23);
    assert_eq!(result.page, 100);
    assert!(result.data.is_empty());
}

#[test]
fn test_max_limit_serves_everything() {
    let corpus = super::common::corpus(&twenty_three_kings());
    let query = make_query("king", 500, 1, OrderBy::Occurrence, SortDirection::Desc);
    let result = search(&corpus, &query);
    assert_eq!(result.data.len(), 23);
}
