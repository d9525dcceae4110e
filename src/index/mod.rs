// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Occurrence lookup: the data structures that make search fast.
//!
//! Two strategies sit behind the same `Locator` contract:
//! - **Regex scan**: one linear pass over the corpus; handles any term
//! - **Suffix array**: O(m log n) lookup for plain literal terms
//!
//! Both return the leftmost non-overlapping occurrences in document order, so
//! which one answers a query is invisible to the caller.

mod sais;
mod scan;
mod suffix_array;

pub use sais::sais;
pub use scan::RegexScan;
pub use suffix_array::SuffixIndex;

use crate::search::Pattern;
use crate::types::Span;

/// A way of finding every occurrence of a pattern in the corpus text.
pub trait Locator: Send + Sync {
    /// Whether this locator can answer `pattern` with scan-identical results.
    fn supports(&self, pattern: &Pattern) -> bool;

    /// Non-empty, non-overlapping occurrences of `pattern` in `text`, in
    /// left-to-right order.
    fn locate(&self, text: &str, pattern: &Pattern) -> Vec<Span>;
}
