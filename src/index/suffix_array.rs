// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix array over the case-folded corpus.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SUFFIX_ARRAY_SORTED**: suffixes of the ASCII-folded text are in
//!    lexicographic order, so every suffix starting with a given needle sits in
//!    one contiguous run
//! 2. **SUFFIX_ARRAY_COMPLETE**: every byte offset of the text has exactly one entry
//! 3. **SCAN_EQUIVALENT**: `locate` returns exactly what `RegexScan` returns for
//!    every pattern `supports` accepts
//!
//! Offsets are **byte offsets**. The index is only consulted for ASCII needles,
//! and an ASCII byte can never sit inside a multi-byte UTF-8 sequence, so every
//! hit is a character boundary.
//!
//! # Why ASCII folding is exact
//!
//! The regex crate's case-insensitive mode uses Unicode simple case folding.
//! For an ASCII needle that differs from ASCII folding in exactly two places:
//! `k` also matches U+212A KELVIN SIGN and `s` also matches U+017F LATIN SMALL
//! LETTER LONG S. A corpus containing either character gets an index that
//! declines every pattern, which routes all queries to the scan.

use super::sais::sais;
use super::Locator;
use crate::contracts::{check_spans_well_formed, check_suffix_array_sorted};
use crate::search::Pattern;
use crate::types::Span;
use std::cmp::Ordering;
use std::time::Instant;

/// Largest text whose suffix array is re-verified after construction
/// (debug builds only; the check is O(n * lcp)).
const SORTEDNESS_CHECK_LIMIT: usize = 4096;

/// Suffix array over `text.to_ascii_lowercase()`.
///
/// The folded copy is only needed while sorting; lookups fold on the fly.
#[derive(Debug, Clone)]
pub struct SuffixIndex {
    suffix_array: Vec<usize>,
    fold_exact: bool,
}

impl SuffixIndex {
    /// Build the index in O(n) with SA-IS.
    pub fn build(text: &str) -> Self {
        let started = Instant::now();

        let folded = text.as_bytes().to_ascii_lowercase();
        let suffix_array = sais(&folded);
        if folded.len() <= SORTEDNESS_CHECK_LIMIT {
            check_suffix_array_sorted(&folded, &suffix_array);
        }
        let fold_exact = !text.contains(|c: char| matches!(c, '\u{212A}' | '\u{017F}'));

        tracing::info!(
            bytes = text.len(),
            fold_exact,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built suffix index"
        );

        Self {
            suffix_array,
            fold_exact,
        }
    }

    /// Sorted suffix start offsets.
    pub fn suffix_array(&self) -> &[usize] {
        &self.suffix_array
    }

    pub fn len(&self) -> usize {
        self.suffix_array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffix_array.is_empty()
    }

    /// False when the corpus holds characters that make ASCII folding diverge
    /// from the regex's case folding.
    pub fn is_fold_exact(&self) -> bool {
        self.fold_exact
    }

    /// Every offset whose folded suffix starts with `needle`, in suffix order.
    ///
    /// Two binary searches bracket the run of matching suffixes. `needle` must
    /// already be lowercase ASCII.
    fn matching_suffixes(&self, text: &[u8], needle: &[u8]) -> &[usize] {
        let lo = self
            .suffix_array
            .partition_point(|&pos| compare_folded_prefix(text, pos, needle) == Ordering::Less);
        let hi = self
            .suffix_array
            .partition_point(|&pos| compare_folded_prefix(text, pos, needle) != Ordering::Greater);
        &self.suffix_array[lo..hi.max(lo)]
    }
}

impl Locator for SuffixIndex {
    fn supports(&self, pattern: &Pattern) -> bool {
        self.fold_exact && pattern.folded_literal().is_some()
    }

    fn locate(&self, text: &str, pattern: &Pattern) -> Vec<Span> {
        let Some(needle) = pattern.folded_literal() else {
            return Vec::new();
        };

        let mut starts = self.matching_suffixes(text.as_bytes(), needle).to_vec();
        starts.sort_unstable();

        // Suffix hits can overlap ("aa" in "aaa"); keep the leftmost
        // non-overlapping ones, which is what a left-to-right scan reports.
        let mut spans = Vec::with_capacity(starts.len());
        let mut next_free = 0;
        for start in starts {
            if start >= next_free {
                let end = start + needle.len();
                spans.push(Span::new(start, end));
                next_free = end;
            }
        }

        check_spans_well_formed(text, &spans);
        spans
    }
}

/// Compare the folded suffix at `pos`, truncated to `needle.len()`, against `needle`.
///
/// A suffix shorter than the needle that agrees on every byte it has compares
/// `Less`, matching how the full suffix sorts.
fn compare_folded_prefix(text: &[u8], pos: usize, needle: &[u8]) -> Ordering {
    let end = (pos + needle.len()).min(text.len());
    let hay = &text[pos..end];

    for (&a, &b) in hay.iter().zip(needle) {
        match a.to_ascii_lowercase().cmp(&b) {
            Ordering::Equal => {}
            other => return other,
        }
    }

    hay.len().cmp(&needle.len())
}
