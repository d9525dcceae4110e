// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request parameter validation.
//!
//! Raw query-string values come in as optional strings; a `Query` the engine
//! can trust comes out, or the first `QueryError` encountered. Every value is
//! trimmed of surrounding spaces before it is checked.
//!
//! A key given more than once keeps its first value. Unknown keys are ignored.

use crate::error::QueryError;
use crate::types::{OrderBy, Query, SortDirection, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, MAX_PAGE};

/// `/search` query string, decoded but otherwise as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
    pub orderby: Option<String>,
    pub sortby: Option<String>,
}

impl SearchParams {
    /// Decode a raw `application/x-www-form-urlencoded` query string.
    pub fn from_query_string(raw: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            let slot = match key.as_ref() {
                "q" => &mut params.q,
                "limit" => &mut params.limit,
                "page" => &mut params.page,
                "orderby" => &mut params.orderby,
                "sortby" => &mut params.sortby,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    /// Validate every parameter, in the order `q`, `limit`, `page`,
    /// `orderby`, `sortby`.
    pub fn into_query(self) -> Result<Query, QueryError> {
        let term = validate_term(self.q.as_deref())?;
        let limit = parse_bounded(self.limit.as_deref(), DEFAULT_LIMIT, MAX_LIMIT)
            .map_err(QueryError::InvalidLimit)?;
        let page = parse_bounded(self.page.as_deref(), DEFAULT_PAGE, MAX_PAGE)
            .map_err(QueryError::InvalidPage)?;
        let order_by = match self.orderby.as_deref() {
            Some(raw) => raw.parse::<OrderBy>()?,
            None => OrderBy::default(),
        };
        let sort = match self.sortby.as_deref() {
            Some(raw) => raw.parse::<SortDirection>()?,
            None => SortDirection::default(),
        };

        Ok(Query::new(term)
            .with_limit(limit)
            .with_page(page)
            .with_order(order_by, sort))
    }
}

/// Trimmed term, if it has the accepted shape.
pub fn validate_term(raw: Option<&str>) -> Result<String, QueryError> {
    let raw = raw.ok_or(QueryError::MissingTerm)?;
    let term = raw.trim_matches(' ');
    if has_term_shape(term) {
        Ok(term.to_string())
    } else {
        Err(QueryError::InvalidTerm(raw.to_string()))
    }
}

/// `^[a-zA-Z]{3}[ a-zA-Z]*$`: three ASCII letters, then letters and spaces.
fn has_term_shape(term: &str) -> bool {
    let bytes = term.as_bytes();
    bytes.len() >= 3
        && bytes[..3].iter().all(u8::is_ascii_alphabetic)
        && bytes[3..].iter().all(|&b| b.is_ascii_alphabetic() || b == b' ')
}

/// Integer in `1..=max`, or `default` when absent. The raw value is returned
/// as the error so the caller picks the variant.
fn parse_bounded(raw: Option<&str>, default: u32, max: u32) -> Result<u32, String> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim_matches(' ').parse::<u32>() {
        Ok(value) if (1..=max).contains(&value) => Ok(value),
        _ => Err(raw.to_string()),
    }
}
