// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `/search` handler.

use super::params::SearchParams;
use crate::corpus::Corpus;
use crate::search::search;
use axum::extract::RawQuery;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

/// Search responses may be read from any origin.
fn cors() -> [(header::HeaderName, &'static str); 1] {
    [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")]
}

/// `GET /search?q=..&limit=..&page=..&orderby=..&sortby=..`
///
/// 400 with a plain-text message when validation fails, otherwise the JSON
/// `SearchResult`. Every response carries the CORS header. The search itself
/// runs on the blocking pool.
pub async fn handle_search(
    RawQuery(raw): RawQuery,
    Extension(corpus): Extension<Arc<Corpus>>,
) -> Response {
    let params = SearchParams::from_query_string(raw.as_deref().unwrap_or_default());

    let query = match params.into_query() {
        Ok(query) => query,
        Err(err) => {
            tracing::warn!(error = %err, "rejected search request");
            return (StatusCode::BAD_REQUEST, cors(), err.to_string()).into_response();
        }
    };

    match tokio::task::spawn_blocking(move || search(&corpus, &query)).await {
        Ok(result) => (StatusCode::OK, cors(), Json(result)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "search task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                cors(),
                "Error processing search request",
            )
                .into_response()
        }
    }
}
