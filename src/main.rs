// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use clap::Parser;
use shakesearch::{search, server, Corpus};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Commands::Serve {
            corpus,
            host,
            port,
            static_dir,
            no_index,
        } => {
            let config = cli::server_config(corpus, host, port, static_dir, no_index);
            run_serve(config).await
        }
        Commands::Search {
            term,
            corpus,
            limit,
            page,
            order_by,
            sort_by,
            no_index,
        } => {
            let params = cli::search_params(term, limit, page, order_by, sort_by);
            run_search(params, corpus, no_index).await
        }
    }
}

async fn run_serve(config: shakesearch::config::ServerConfig) -> anyhow::Result<()> {
    let path = config.corpus_path.clone();
    let options = config.corpus_options;
    let corpus = tokio::task::spawn_blocking(move || Corpus::load(&path, options))
        .await
        .context("corpus loader panicked")?
        .with_context(|| format!("cannot serve without corpus {}", config.corpus_path.display()))?;

    server::serve(Arc::new(corpus), &config)
        .await
        .with_context(|| format!("server on {} failed", config.addr))
}

async fn run_search(
    params: shakesearch::server::params::SearchParams,
    corpus: std::path::PathBuf,
    no_index: bool,
) -> anyhow::Result<()> {
    let query = params.into_query()?;
    let options = cli::corpus_options(no_index);

    let result = tokio::task::spawn_blocking(move || {
        Corpus::load(&corpus, options).map(|corpus| search(&corpus, &query))
    })
    .await
    .context("search panicked")??;

    println!(
        "{}",
        serde_json::to_string_pretty(&result).context("failed to encode result")?
    );
    Ok(())
}
