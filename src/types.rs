// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types for corpus search.
//!
//! A `Query` goes in, a `SearchResult` comes out. `Span` is the internal
//! currency between the two: a half-open byte range of one occurrence, always
//! on UTF-8 character boundaries. `Match` is what callers actually see, a
//! phrase cut from the corpus around a span.

use crate::error::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of matches per page.
pub const DEFAULT_LIMIT: u32 = 25;

/// Largest accepted page size.
pub const MAX_LIMIT: u32 = 500;

/// Default (first) page.
pub const DEFAULT_PAGE: u32 = 1;

/// Largest accepted page number.
pub const MAX_PAGE: u32 = 100;

/// Half-open byte range `[start, end)` of one occurrence in the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} > end {}", start, end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True if this span lies entirely inside `[lo, hi)`.
    pub fn within(&self, lo: usize, hi: usize) -> bool {
        self.start >= lo && self.end <= hi
    }
}

/// How matches are ordered before pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    /// By position in the document.
    #[default]
    Occurrence,
    /// By how many occurrences share the match's context window.
    Frequency,
}

impl FromStr for OrderBy {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            // "occurence" is the legacy spelling older clients still send
            "occurrence" | "occurence" => Ok(OrderBy::Occurrence),
            "frequency" => Ok(OrderBy::Frequency),
            _ => Err(QueryError::InvalidOrderBy(s.to_string())),
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBy::Occurrence => write!(f, "occurrence"),
            OrderBy::Frequency => write!(f, "frequency"),
        }
    }
}

/// Sort direction applied to the `OrderBy` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            _ => Err(QueryError::InvalidSortBy(s.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// A validated search request.
///
/// Built by the request handler (or the CLI) after validation; the engine
/// assumes `term` is non-empty, `limit` is in `1..=MAX_LIMIT` and `page` is in
/// `1..=MAX_PAGE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub term: String,
    pub limit: u32,
    pub page: u32,
    pub order_by: OrderBy,
    pub sort: SortDirection,
}

impl Query {
    /// Query for `term` with every other parameter at its default.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
            order_by: OrderBy::default(),
            sort: SortDirection::default(),
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_order(mut self, order_by: OrderBy, sort: SortDirection) -> Self {
        self.order_by = order_by;
        self.sort = sort;
        self
    }

    /// Half-open index range of this page over an ordered list of `total` items.
    ///
    /// Never extends past `total`; a page past the end yields an empty range.
    pub fn page_range(&self, total: usize) -> std::ops::Range<usize> {
        if self.page == 0 {
            return 0..0;
        }
        let limit = self.limit as usize;
        let start = ((self.page - 1) as usize)
            .saturating_mul(limit)
            .min(total);
        let end = start.saturating_add(limit).min(total);
        start..end
    }
}

/// One occurrence with its surrounding context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub phrase: String,
}

/// A page of matches plus bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Occurrences found before pagination.
    pub total: usize,
    /// Page actually served.
    pub page: u32,
    pub data: Vec<Match>,
    /// Wall-clock milliseconds spent searching.
    #[serde(rename = "duration")]
    pub duration_ms: u64,
}
