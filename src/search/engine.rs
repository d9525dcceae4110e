// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: locate, order, paginate, window.
//!
//! ```text
//! Query ──▶ Pattern ──▶ Corpus::locate ──▶ [Span] (document order)
//!                                             │
//!                                   order (occurrence | frequency)
//!                                             │
//!                                   page slice [(p-1)·l, p·l)
//!                                             │
//!                                   window ──▶ [Match]
//! ```
//!
//! Only the served page is windowed. Frequency ordering needs window
//! *bounds* for every span, but never the phrase text, so the result is the
//! same as windowing everything first.

use super::pattern::Pattern;
use super::window::{extract, window_bounds};
use crate::contracts::{check_page_size, check_query_preconditions, check_spans_well_formed};
use crate::corpus::Corpus;
use crate::types::{Match, OrderBy, Query, SearchResult, SortDirection, Span};
use std::time::Instant;

/// Run `query` against `corpus`.
///
/// Never fails: no occurrences, or a page past the end, is an empty `data`.
/// The query must have passed validation (see `contracts`).
pub fn search(corpus: &Corpus, query: &Query) -> SearchResult {
    check_query_preconditions(query);
    let started = Instant::now();

    let pattern = Pattern::compile(&query.term);
    let spans = corpus.locate(&pattern);
    check_spans_well_formed(corpus.text(), &spans);

    let order = order_spans(corpus.text(), &spans, query.order_by, query.sort);

    let data: Vec<Match> = order[query.page_range(spans.len())]
        .iter()
        .map(|&i| Match {
            phrase: extract(corpus.text(), spans[i]).to_string(),
        })
        .collect();
    check_page_size(data.len(), query.limit);

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    tracing::debug!(
        term = %query.term,
        total = spans.len(),
        page = query.page,
        served = data.len(),
        order_by = %query.order_by,
        sort = %query.sort,
        duration_ms,
        "search complete"
    );

    SearchResult {
        total: spans.len(),
        page: query.page,
        data,
        duration_ms,
    }
}

/// Indices into `spans` in serving order.
///
/// - Occurrence/ASC: document order
/// - Occurrence/DESC: reverse document order
/// - Frequency: by `window_frequencies`, ties broken by document position
///   ascending in both directions
pub fn order_spans(
    text: &str,
    spans: &[Span],
    order_by: OrderBy,
    sort: SortDirection,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..spans.len()).collect();

    match (order_by, sort) {
        (OrderBy::Occurrence, SortDirection::Asc) => {}
        (OrderBy::Occurrence, SortDirection::Desc) => order.reverse(),
        (OrderBy::Frequency, sort) => {
            let freq = window_frequencies(text, spans);
            // Stable sorts over indices already in document order
            match sort {
                SortDirection::Asc => order.sort_by_key(|&i| freq[i]),
                SortDirection::Desc => order.sort_by(|&a, &b| freq[b].cmp(&freq[a])),
            }
        }
    }

    order
}

/// For each span, how many spans (itself included) fit entirely inside its
/// context window.
///
/// `spans` must be in document order and non-overlapping, so both starts and
/// ends are sorted and two binary searches bracket the run.
pub fn window_frequencies(text: &str, spans: &[Span]) -> Vec<usize> {
    spans
        .iter()
        .map(|&span| {
            let (lo, hi) = window_bounds(text, span);
            let first = spans.partition_point(|s| s.start < lo);
            let last = spans.partition_point(|s| s.end <= hi);
            last.saturating_sub(first)
        })
        .collect()
}
