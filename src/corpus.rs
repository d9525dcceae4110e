// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The corpus store.
//!
//! One document, read fully into memory at startup and never touched again.
//! Every search borrows it read-only, so it is shared across request handlers
//! behind an `Arc` with no locking.
//!
//! Loading is all-or-nothing: `Corpus::load` either returns a complete corpus
//! (text plus, optionally, its suffix index) or a `LoadError`.

use crate::error::LoadError;
use crate::index::{Locator, RegexScan, SuffixIndex};
use crate::search::Pattern;
use crate::types::Span;
use std::fs;
use std::path::{Path, PathBuf};

/// How the corpus is prepared at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusOptions {
    /// Build the suffix index for literal lookups.
    pub build_index: bool,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self { build_index: true }
    }
}

impl CorpusOptions {
    /// Scan-only corpus: no suffix index.
    pub fn scan_only() -> Self {
        Self { build_index: false }
    }
}

/// An immutable, non-empty, in-memory text corpus.
#[derive(Debug)]
pub struct Corpus {
    text: String,
    index: Option<SuffixIndex>,
    source: Option<PathBuf>,
}

impl Corpus {
    /// Read the document at `path` into memory.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
    pub fn load(path: impl AsRef<Path>, options: CorpusOptions) -> Result<Self, LoadError> {
        let path = path.as_ref();

        let bytes = fs::read(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    valid_up_to = err.utf8_error().valid_up_to(),
                    "corpus is not valid UTF-8, replacing invalid sequences"
                );
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        let mut corpus = Self::build(text, options, path)?;
        corpus.source = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            bytes = corpus.len(),
            indexed = corpus.has_index(),
            "loaded corpus"
        );

        Ok(corpus)
    }

    /// Build a corpus from text already in memory.
    pub fn from_text(text: impl Into<String>, options: CorpusOptions) -> Result<Self, LoadError> {
        Self::build(text.into(), options, Path::new("<memory>"))
    }

    fn build(text: String, options: CorpusOptions, origin: &Path) -> Result<Self, LoadError> {
        if text.is_empty() {
            return Err(LoadError::Empty {
                path: origin.to_path_buf(),
            });
        }

        let index = options.build_index.then(|| SuffixIndex::build(&text));

        Ok(Self {
            text,
            index,
            source: None,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a loaded corpus; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn has_index(&self) -> bool {
        self.index.is_some()
    }

    /// File the corpus was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The locator that will answer `pattern`: the suffix index when it can
    /// reproduce the scan exactly, otherwise the scan itself.
    fn locator(&self, pattern: &Pattern) -> &dyn Locator {
        match &self.index {
            Some(index) if index.supports(pattern) => index as &dyn Locator,
            _ => &RegexScan,
        }
    }

    /// Every occurrence of `pattern`, leftmost non-overlapping, in document order.
    pub fn locate(&self, pattern: &Pattern) -> Vec<Span> {
        self.locator(pattern).locate(&self.text, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_reads_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "To be, or not to be").unwrap();

        let corpus = Corpus::load(file.path(), CorpusOptions::default()).unwrap();
        assert_eq!(corpus.text(), "To be, or not to be");
        assert_eq!(corpus.source(), Some(file.path()));
        assert!(corpus.has_index());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("completeworks.txt");

        let err = Corpus::load(&missing, CorpusOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Read { ref path, .. } if path == &missing));
    }

    #[test]
    fn test_load_empty_file_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = Corpus::load(file.path(), CorpusOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn test_load_replaces_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"fair \xff verona").unwrap();

        let corpus = Corpus::load(file.path(), CorpusOptions::scan_only()).unwrap();
        assert_eq!(corpus.text(), "fair \u{FFFD} verona");
        assert!(!corpus.has_index());
    }

    #[test]
    fn test_from_text_rejects_empty() {
        assert!(matches!(
            Corpus::from_text("", CorpusOptions::default()),
            Err(LoadError::Empty { .. })
        ));
    }

    #[test]
    fn test_locate_same_with_and_without_index() {
        let text = "Romeo, Romeo, wherefore art thou ROMEO";
        let indexed = Corpus::from_text(text, CorpusOptions::default()).unwrap();
        let scanned = Corpus::from_text(text, CorpusOptions::scan_only()).unwrap();
        let pattern = Pattern::compile("romeo");

        assert_eq!(indexed.locate(&pattern), scanned.locate(&pattern));
        assert_eq!(indexed.locate(&pattern).len(), 3);
    }

    #[test]
    fn test_regex_terms_fall_back_to_scan() {
        let corpus = Corpus::from_text("be bee beee", CorpusOptions::default()).unwrap();
        let spans = corpus.locate(&Pattern::compile("be+"));
        assert_eq!(spans.len(), 3);
    }
}
