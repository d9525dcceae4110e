// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only two things can go wrong: the corpus cannot be loaded (fatal, startup
//! only) or a request carries parameters the engine must never see. Everything
//! that happens inside a search degrades to a well-formed result instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Corpus could not be brought into memory. The process must not serve.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read corpus {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("corpus {} is empty", path.display())]
    Empty { path: PathBuf },
}

/// Request parameters rejected before reaching the engine.
///
/// Messages are user-facing; the server returns them verbatim with a 400.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Invalid request. Missing search query in URL params")]
    MissingTerm,

    #[error("Invalid request. Please enter a valid search query")]
    InvalidTerm(String),

    #[error("Invalid request. The limit param needs to be an int >= 1 and <= 500")]
    InvalidLimit(String),

    #[error("Invalid request. The page param needs to be an int >= 1 and <= 100")]
    InvalidPage(String),

    #[error("Invalid request. You can only order matches by frequency or occurrence")]
    InvalidOrderBy(String),

    #[error("Invalid request. You can only sort matches in ascending(ASC) or descending(DESC) order")]
    InvalidSortBy(String),
}
