//! Shared JSON response envelope.
//!
//! Every API response uses the same shape:
//! `{ success, message?, data?, error?, errors?, pagination? }`.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;

use serde::Serialize;

/// Uniform response wrapper returned by every API handler.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T: Serialize> Envelope<T> {
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self { success: true, message: None, data: Some(data), error: None, errors: None, pagination: None }
    }

    #[must_use]
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            error: None,
            errors: None,
            pagination: None,
        }
    }

    #[must_use]
    pub fn ok_paginated(data: T, pagination: Pagination) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
            errors: None,
            pagination: Some(pagination),
        }
    }
}

impl Envelope<serde_json::Value> {
    /// Success envelope carrying only a message, no data payload.
    #[must_use]
    pub fn message_only(message: impl Into<String>) -> Self {
        Self { success: true, message: Some(message.into()), data: None, error: None, errors: None, pagination: None }
    }

    /// Failure envelope with a user-facing message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            success: false,
            message: Some(message.clone()),
            data: None,
            error: Some(message),
            errors: None,
            pagination: None,
        }
    }
}

/// Pagination metadata for list endpoints.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    #[must_use]
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if limit > 0 { (total + limit - 1) / limit } else { 0 };
        Self { page, limit, total, total_pages }
    }
}

const DEFAULT_PAGE_LIMIT: i64 = 10;
const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp raw query parameters into a valid `(page, limit)` pair.
#[must_use]
pub fn page_params(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);
    (page, limit)
}
