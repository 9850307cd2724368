use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NO_JSON_DATA: &str = "No JSON data provided";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl StatsError {
    pub fn no_json_data() -> Self {
        StatsError::BadRequest(NO_JSON_DATA.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            StatsError::BadRequest(_) => StatusCode::BAD_REQUEST,
            StatsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body returned on every failed `/api/*` call.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            StatsError::BadRequest(_) => {
                tracing::warn!(error = %self, "Rejected stats request");
            }
            StatsError::Internal(_) => {
                tracing::error!(error = ?self, "Request failed");
            }
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
