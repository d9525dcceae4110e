// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query term compilation.
//!
//! A term is compiled once per search into a case-insensitive regex. Terms
//! that are plain literals (ASCII letters, digits, spaces) also carry their
//! ASCII-folded bytes so the suffix index can answer them without the regex.

use regex::{Regex, RegexBuilder};

/// A compiled, case-insensitive search term.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Option<Regex>,
    literal: Option<Vec<u8>>,
}

impl Pattern {
    /// Compile `term` as a case-insensitive regex.
    ///
    /// A term that is not valid regex syntax is matched literally instead, so
    /// compilation never fails.
    pub fn compile(term: &str) -> Self {
        let regex = RegexBuilder::new(term)
            .case_insensitive(true)
            .build()
            .or_else(|_| {
                RegexBuilder::new(&regex::escape(term))
                    .case_insensitive(true)
                    .build()
            });

        // An escaped literal can only fail on the size limit; such a term
        // matches nothing.
        let regex = match regex {
            Ok(regex) => Some(regex),
            Err(err) => {
                tracing::warn!(term, error = %err, "term could not be compiled, matching nothing");
                None
            }
        };

        let literal = (regex.is_some() && is_plain_literal(term))
            .then(|| term.to_ascii_lowercase().into_bytes());

        Self {
            regex,
            literal,
        }
    }

    /// The compiled matcher, or `None` for a term that matches nothing.
    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }

    /// Lowercased bytes of the term, if it is a plain ASCII literal.
    pub fn folded_literal(&self) -> Option<&[u8]> {
        self.literal.as_deref()
    }
}

/// ASCII letters, digits and spaces only: no regex metacharacters, and
/// case-insensitive matching reduces to ASCII folding.
fn is_plain_literal(term: &str) -> bool {
    !term.is_empty() && term.bytes().all(|b| b.is_ascii_alphanumeric() || b == b' ')
}
