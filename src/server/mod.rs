// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP surface.
//!
//! ```text
//! GET /search?q=..   ──▶ params::from_query_string ──▶ into_query
//!                           ──▶ search (blocking pool) ──▶ JSON
//! GET /<anything>    ──▶ ServeDir over the static directory (`/` → index.html)
//! ```
//!
//! The corpus is loaded before the listener is bound and shared by every
//! request as an `Arc<Corpus>`.

pub mod handlers;
pub mod params;

use crate::config::ServerConfig;
use crate::corpus::Corpus;
use axum::routing::get;
use axum::{Extension, Router};
use handlers::handle_search;
use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

/// Routes for a loaded corpus.
pub fn router(corpus: Arc<Corpus>, static_dir: impl Into<PathBuf>) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .fallback_service(ServeDir::new(static_dir.into()))
        .layer(Extension(corpus))
}

/// Bind `config.addr` and serve until Ctrl-C.
pub async fn serve(corpus: Arc<Corpus>, config: &ServerConfig) -> io::Result<()> {
    let listener = TcpListener::bind(config.addr).await?;
    serve_with_shutdown(listener, corpus, config.static_dir.clone(), ctrl_c()).await
}

/// Serve on an already bound `listener` until `shutdown` resolves, then
/// drain in-flight requests.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    corpus: Arc<Corpus>,
    static_dir: PathBuf,
    shutdown: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!(
        addr = %listener.local_addr()?,
        static_dir = %static_dir.display(),
        "listening"
    );

    axum::serve(listener, router(corpus, static_dir))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("shutting down");
    Ok(())
}

async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}
