//! Error responses for the keypad server.

use crate::keypad::UnknownKey;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use calcpad_calculator::CalcError;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Calculation(#[from] CalcError),

    #[error(transparent)]
    UnknownKey(#[from] UnknownKey),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Calculation(CalcError::DivisionByZero) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Calculation(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownKey(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Calculation(err) => err.code(),
            ApiError::UnknownKey(_) => "UNKNOWN_KEY",
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(code = self.error_code(), status = status.as_u16(), "request failed: {}", self);
        let body =
            ApiErrorResponse { code: self.error_code().to_string(), message: self.to_string() };
        (status, Json(body)).into_response()
    }
}
