// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! A term is compiled into a case-insensitive `Pattern`, the corpus finds its
//! occurrences, and the engine orders them, cuts the requested page and wraps
//! each occurrence in its context window.

mod engine;
mod pattern;
pub mod window;

pub use engine::{order_spans, search, window_frequencies};
pub use pattern::Pattern;
pub use window::CONTEXT_WINDOW;
