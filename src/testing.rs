//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::corpus::{Corpus, CorpusOptions};
use crate::types::{OrderBy, Query, SortDirection};

/// Short enough that every context window covers the whole corpus.
pub const HAMLET_LINE: &str = "to be or not to be, that is the question";

/// A few lines of verse with repeated and mixed-case terms.
pub const SONNET: &str = "\
Shall I compare thee to a summer's day?
Thou art more lovely and more temperate:
Rough winds do shake the darling buds of May,
And summer's lease hath all too short a date;
Sometime too hot the eye of heaven shines,
And often is his gold complexion dimm'd;
And every fair from fair sometime declines,
By chance or nature's changing course untrimm'd;
But thy eternal Summer shall not fade,
Nor lose possession of that fair thou ow'st;
Nor shall Death brag thou wander'st in his shade,
When in eternal lines to time thou grow'st:
So long as men can breathe or eyes can see,
So long lives this, and this gives life to thee.";

/// Indexed corpus over `text`.
///
/// # Panics
/// Panics if `text` is empty.
pub fn corpus(text: &str) -> Corpus {
    Corpus::from_text(text, CorpusOptions::default()).expect("fixture corpus must be non-empty")
}

/// Scan-only corpus over `text`.
///
/// # Panics
/// Panics if `text` is empty.
pub fn scan_corpus(text: &str) -> Corpus {
    Corpus::from_text(text, CorpusOptions::scan_only()).expect("fixture corpus must be non-empty")
}

/// `words` joined by exactly `gap` spaces.
pub fn spaced(words: &[&str], gap: usize) -> String {
    let filler = " ".repeat(gap);
    words.join(&filler)
}

/// Synthetic corpus of roughly `bytes` bytes built from a fixed vocabulary.
pub fn synthetic_corpus(bytes: usize) -> String {
    const VOCAB: &[&str] = &[
        "the", "king", "queen", "love", "death", "thou", "art", "sweet", "Romeo", "night",
        "Hamlet", "fair", "lord", "lady", "sword", "crown", "ghost", "storm", "fool", "heaven",
    ];

    let mut text = String::with_capacity(bytes + 16);
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    while text.len() < bytes {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        text.push_str(VOCAB[(state % VOCAB.len() as u64) as usize]);
        text.push(if state % 11 == 0 { '\n' } else { ' ' });
    }
    text
}

/// Query with every parameter spelled out.
pub fn make_query(term: &str, limit: u32, page: u32, order_by: OrderBy, sort: SortDirection) -> Query {
    Query::new(term)
        .with_limit(limit)
        .with_page(page)
        .with_order(order_by, sort)
}
