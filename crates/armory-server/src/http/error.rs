// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Wire error object: `{ "error": <code>, "message": <human text> }`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub(crate) struct ApiError {
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: "not_found",
            message: message.into(),
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: "bad_request",
            message: message.into(),
        }
    }
}

pub(crate) fn api_error_response(status: StatusCode, err: ApiError) -> Response {
    (status, Json(err)).into_response()
}
