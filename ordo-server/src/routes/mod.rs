pub mod cache;
pub mod days;
pub mod status;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ordo_core::OrdoError;
use serde::Serialize;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Converts domain errors to HTTP responses.
///
/// Invalid client input maps to 400, a date the engine has no data for
/// maps to 404, everything else is a 500.
pub struct ApiError(OrdoError);

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            OrdoError::InvalidDate(_)
            | OrdoError::YearOutOfRange(..)
            | OrdoError::InvalidMonth(_)
            | OrdoError::UnknownSeason(_) => StatusCode::BAD_REQUEST,
            OrdoError::DateNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<OrdoError> for ApiError {
    fn from(err: OrdoError) -> Self {
        ApiError(err)
    }
}
