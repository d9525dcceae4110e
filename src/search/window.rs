// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Context windows around occurrences.
//!
//! A window is `CONTEXT_WINDOW` bytes either side of a span, clamped to the
//! corpus and then pulled inward to the nearest character boundary. Matches
//! near either end of the corpus get shorter phrases, never a bad slice.

use crate::contracts::check_window_in_bounds;
use crate::types::Span;

/// Bytes of context taken before and after each occurrence.
pub const CONTEXT_WINDOW: usize = 100;

/// Byte range `[lo, hi)` of the context window around `span`.
pub fn window_bounds(text: &str, span: Span) -> (usize, usize) {
    let start = span.start.min(text.len());
    let end = span.end.clamp(start, text.len());

    let mut lo = start.saturating_sub(CONTEXT_WINDOW);
    while !text.is_char_boundary(lo) {
        lo += 1;
    }

    let mut hi = end.saturating_add(CONTEXT_WINDOW).min(text.len());
    while !text.is_char_boundary(hi) {
        hi -= 1;
    }

    check_window_in_bounds(text, Span::new(start, end), lo, hi);
    (lo, hi)
}

/// The phrase for `span`: the occurrence plus its context window.
pub fn extract(text: &str, span: Span) -> &str {
    let (lo, hi) = window_bounds(text, span);
    &text[lo..hi]
}
