// SPDX-License-Identifier: Apache-2.0

//! Lenient request-parameter coercion.
//!
//! The policy, explicit rather than implicit: every parameter has a
//! defined fallback, so no query-string input can fail a request.
//! Unparseable `limit`/`offset` fall back to their defaults,
//! unparseable `rarity` disables the rarity filter, and string filters
//! that trim to empty disable themselves.

use std::collections::HashMap;

pub const DEFAULT_LIMIT: usize = 50;
pub const MAX_LIMIT: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub limit: usize,
    pub offset: usize,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Parses a query-string value as a finite number. Whitespace-only and
/// non-finite inputs are `None`.
#[must_use]
pub fn to_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[must_use]
pub fn parse_page_params(query: &HashMap<String, String>) -> PageParams {
    parse_page_params_with_defaults(query, DEFAULT_LIMIT, MAX_LIMIT)
}

/// `limit` clamps into `[1, max_limit]`, `offset` into `[0, ∞)`;
/// fractional inputs truncate.
#[must_use]
pub fn parse_page_params_with_defaults(
    query: &HashMap<String, String>,
    default_limit: usize,
    max_limit: usize,
) -> PageParams {
    let limit = query
        .get("limit")
        .and_then(|raw| to_number(raw))
        .map_or(default_limit, |n| {
            if n < 1.0 {
                1
            } else if n >= max_limit as f64 {
                max_limit
            } else {
                n as usize
            }
        });
    let offset = query
        .get("offset")
        .and_then(|raw| to_number(raw))
        .map_or(0, |n| if n < 0.0 { 0 } else { n as usize });
    PageParams { limit, offset }
}

/// Rarity filter value; unparseable input means "no rarity filter".
#[must_use]
pub fn parse_rarity(query: &HashMap<String, String>) -> Option<f64> {
    query.get("rarity").and_then(|raw| to_number(raw))
}

/// Trimmed string filter; empty after trim means "no filter".
#[must_use]
pub fn text_filter(query: &HashMap<String, String>, key: &str) -> Option<String> {
    let trimmed = query.get(key)?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Case-insensitive substring check (Unicode lowercase).
#[must_use]
pub fn includes_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive equality where a missing field reads as "".
#[must_use]
pub fn eq_ci_or_empty(field: Option<&str>, wanted: &str) -> bool {
    field.unwrap_or("").to_lowercase() == wanted.to_lowercase()
}
