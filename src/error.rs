// SPDX-License-Identifier: AGPL-3.0-or-later

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// API-level error rendered as the `{"success":false,"error":...}` JSON
/// body the endpoints advertise.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    /// Offending entries for batch validation failures.
    pub invalid_addresses: Option<Vec<String>>,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(rename = "invalidAddresses", skip_serializing_if = "Option::is_none")]
    invalid_addresses: Option<Vec<String>>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            invalid_addresses: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// 400 listing every address that failed batch validation.
    pub fn invalid_addresses(addresses: Vec<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Wrong address format".to_string(),
            invalid_addresses: Some(addresses),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            success: false,
            error: self.message,
            invalid_addresses: self.invalid_addresses,
        });
        (self.status, body).into_response()
    }
}
