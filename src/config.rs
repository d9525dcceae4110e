// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Resolved server configuration.

use crate::corpus::CorpusOptions;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port the server listens on when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3001;

/// Corpus file read when `CORPUS_PATH` is not set.
pub const DEFAULT_CORPUS_PATH: &str = "completeworks.txt";

/// Directory served for every path other than `/search`.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Everything `server::serve` needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub corpus_path: PathBuf,
    pub static_dir: PathBuf,
    pub corpus_options: CorpusOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            corpus_options: CorpusOptions::default(),
        }
    }
}
