// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case-insensitive substring search over a single in-memory text corpus.
//!
//! One document is loaded at startup. A query term is matched
//! case-insensitively, every occurrence is wrapped in a fixed context window,
//! and the matches come back ordered and paginated. Plain literal terms are
//! answered by a suffix array built with SA-IS; anything else falls back to a
//! regex scan that finds exactly the same occurrences.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  corpus.rs  │────▶│   index/     │────▶│     search/      │
//! │  (Corpus,   │     │ (SuffixIndex,│     │ (Pattern, order, │
//! │   load)     │     │  RegexScan)  │     │  page, window)   │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │                                          │
//!        ▼                                          ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         server/                             │
//! │       (params validation, /search handler, static files)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use shakesearch::{search, Corpus, CorpusOptions, Query};
//!
//! let corpus = Corpus::from_text("To be, or not to be", CorpusOptions::default()).unwrap();
//! let result = search(&corpus, &Query::new("be").with_limit(10));
//!
//! assert_eq!(result.total, 2);
//! assert_eq!(result.data[0].phrase, "To be, or not to be");
//! ```

// Module declarations
pub mod config;
pub mod contracts;
mod corpus;
mod error;
pub mod index;
pub mod search;
pub mod server;
mod types;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use corpus::{Corpus, CorpusOptions};
pub use error::{LoadError, QueryError};
pub use index::{Locator, RegexScan, SuffixIndex};
pub use search::{search, Pattern, CONTEXT_WINDOW};
pub use types::{
    Match, OrderBy, Query, SearchResult, SortDirection, Span, DEFAULT_LIMIT, DEFAULT_PAGE,
    MAX_LIMIT, MAX_PAGE,
};
