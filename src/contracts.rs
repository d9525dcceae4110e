// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the search pipeline.
//!
//! Debug-mode assertions for the properties the engine relies on but never
//! re-checks on the hot path. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Document the **preconditions** callers must establish
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Property                                         |
//! |--------------------------------|--------------------------------------------------|
//! | `check_query_preconditions`    | term non-empty, limit and page in range          |
//! | `check_spans_well_formed`      | spans ordered, non-overlapping, in bounds        |
//! | `check_window_in_bounds`       | context window covers its span, inside the text  |
//! | `check_page_size`              | a page never exceeds the limit                   |
//! | `check_suffix_array_sorted`    | suffix array lexicographically sorted            |
//!
//! # Usage
//!
//! ```ignore
//! use shakesearch::contracts::*;
//!
//! // In debug builds, this panics if the query was never validated
//! check_query_preconditions(&query);
//!
//! // In release builds, this is a no-op
//! ```

use crate::types::{Query, Span, MAX_LIMIT, MAX_PAGE};

// ============================================================================
// QUERY CONTRACTS
// ============================================================================

/// Check that a query passed validation before reaching the engine.
///
/// # Panics (debug builds only)
/// Panics on an empty term, or a limit/page outside the accepted ranges.
#[inline]
pub fn check_query_preconditions(query: &Query) {
    debug_assert!(
        !query.term.is_empty(),
        "Contract violation: search called with an empty term"
    );
    debug_assert!(
        (1..=MAX_LIMIT).contains(&query.limit),
        "Contract violation: limit {} outside 1..={}",
        query.limit,
        MAX_LIMIT
    );
    debug_assert!(
        (1..=MAX_PAGE).contains(&query.page),
        "Contract violation: page {} outside 1..={}",
        query.page,
        MAX_PAGE
    );
}

// ============================================================================
// SPAN CONTRACTS
// ============================================================================

/// Check that located spans are what every `Locator` promises.
///
/// Non-empty, inside `text`, on character boundaries, strictly left to right
/// and non-overlapping.
#[inline]
pub fn check_spans_well_formed(text: &str, spans: &[Span]) {
    #[cfg(debug_assertions)]
    {
        for (i, span) in spans.iter().enumerate() {
            debug_assert!(
                !span.is_empty(),
                "Contract violation: spans[{}] is empty at {}",
                i,
                span.start
            );
            debug_assert!(
                span.end <= text.len(),
                "Contract violation: spans[{}].end {} > text.len() {}",
                i,
                span.end,
                text.len()
            );
            debug_assert!(
                text.is_char_boundary(span.start) && text.is_char_boundary(span.end),
                "Contract violation: spans[{}] {:?} splits a character",
                i,
                span
            );
        }

        for (i, pair) in spans.windows(2).enumerate() {
            debug_assert!(
                pair[0].end <= pair[1].start,
                "Contract violation: spans[{}] {:?} overlaps or precedes spans[{}] {:?}",
                i,
                pair[0],
                i + 1,
                pair[1]
            );
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = (text, spans);
}

/// Check that a context window `[lo, hi)` is inside `text` and covers `span`.
#[inline]
pub fn check_window_in_bounds(text: &str, span: Span, lo: usize, hi: usize) {
    debug_assert!(
        span.within(lo, hi),
        "Contract violation: window {}..{} does not cover span {:?}",
        lo,
        hi,
        span
    );
    debug_assert!(
        hi <= text.len(),
        "Contract violation: window end {} > text.len() {}",
        hi,
        text.len()
    );
    debug_assert!(
        text.is_char_boundary(lo) && text.is_char_boundary(hi),
        "Contract violation: window {}..{} splits a character",
        lo,
        hi
    );
}

/// Check that a served page respects the limit.
#[inline]
pub fn check_page_size(served: usize, limit: u32) {
    debug_assert!(
        served <= limit as usize,
        "Contract violation: served {} matches with limit {}",
        served,
        limit
    );
}

// ============================================================================
// SUFFIX ARRAY CONTRACTS
// ============================================================================

/// Check if the suffix array over `text` is sorted.
pub fn is_suffix_array_sorted(text: &[u8], suffix_array: &[usize]) -> bool {
    suffix_array
        .windows(2)
        .all(|pair| text[pair[0]..] <= text[pair[1]..])
}

/// Check that the suffix array over `text` is sorted.
///
/// O(n * lcp); only worth calling on small inputs.
///
/// # Panics (debug builds only)
/// Panics at the first out-of-order pair.
#[inline]
pub fn check_suffix_array_sorted(text: &[u8], suffix_array: &[usize]) {
    debug_assert!(
        is_suffix_array_sorted(text, suffix_array),
        "Contract violation: suffix array is not sorted"
    );
}
