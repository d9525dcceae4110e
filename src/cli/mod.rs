// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the shakesearch command-line interface.
//!
//! Two subcommands: `serve` to load a corpus and answer `/search` over HTTP,
//! and `search` to run a single query and print the JSON result. Both accept
//! `--no-index` to skip building the suffix index and scan every query.

use clap::{Parser, Subcommand};
use shakesearch::config::{ServerConfig, DEFAULT_CORPUS_PATH, DEFAULT_PORT, DEFAULT_STATIC_DIR};
use shakesearch::server::params::SearchParams;
use shakesearch::CorpusOptions;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "shakesearch",
    about = "Case-insensitive search over a single text corpus",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the corpus and serve /search plus the static front-end
    Serve {
        /// Corpus file, read fully into memory at startup
        #[arg(long, env = "CORPUS_PATH", default_value = DEFAULT_CORPUS_PATH)]
        corpus: PathBuf,

        /// Address to bind
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Directory served for every path other than /search
        #[arg(long, default_value = DEFAULT_STATIC_DIR)]
        static_dir: PathBuf,

        /// Skip the suffix index and scan the corpus for every query
        #[arg(long)]
        no_index: bool,
    },

    /// Run one search and print the result as JSON
    Search {
        /// Search term (three letters, then letters and spaces)
        term: String,

        /// Corpus file
        #[arg(long, env = "CORPUS_PATH", default_value = DEFAULT_CORPUS_PATH)]
        corpus: PathBuf,

        /// Matches per page (1-500)
        #[arg(short, long, default_value = "25")]
        limit: String,

        /// Page to return (1-100)
        #[arg(long, default_value = "1")]
        page: String,

        /// Order matches by `occurrence` or `frequency`
        #[arg(long, default_value = "occurrence")]
        order_by: String,

        /// Sort direction, ASC or DESC
        #[arg(long, default_value = "DESC")]
        sort_by: String,

        /// Skip the suffix index and scan the corpus
        #[arg(long)]
        no_index: bool,
    },
}

pub fn corpus_options(no_index: bool) -> CorpusOptions {
    if no_index {
        CorpusOptions::scan_only()
    } else {
        CorpusOptions::default()
    }
}

pub fn server_config(
    corpus: PathBuf,
    host: IpAddr,
    port: u16,
    static_dir: PathBuf,
    no_index: bool,
) -> ServerConfig {
    ServerConfig {
        addr: SocketAddr::new(host, port),
        corpus_path: corpus,
        static_dir,
        corpus_options: corpus_options(no_index),
    }
}

/// CLI arguments as raw request parameters, so both surfaces share validation.
pub fn search_params(
    term: String,
    limit: String,
    page: String,
    order_by: String,
    sort_by: String,
) -> SearchParams {
    SearchParams {
        q: Some(term),
        limit: Some(limit),
        page: Some(page),
        orderby: Some(order_by),
        sortby: Some(sort_by),
    }
}
