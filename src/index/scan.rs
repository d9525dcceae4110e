// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linear regex scan over the corpus.

use super::Locator;
use crate::search::Pattern;
use crate::types::Span;

/// Finds occurrences by running the compiled regex over the whole text.
///
/// The regex crate guarantees matching linear in the haystack, so the worst
/// case is bounded by corpus size no matter what the term looks like.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexScan;

impl Locator for RegexScan {
    fn supports(&self, _pattern: &Pattern) -> bool {
        true
    }

    fn locate(&self, text: &str, pattern: &Pattern) -> Vec<Span> {
        let Some(regex) = pattern.regex() else {
            return Vec::new();
        };

        // Zero-width matches (e.g. `a*`) are not occurrences of anything
        regex
            .find_iter(text)
            .filter(|m| !m.is_empty())
            .map(|m| Span::new(m.start(), m.end()))
            .collect()
    }
}
