//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use subway_core::{LineServiceError, StationServiceError};
use thiserror::Error;

/// JSON body returned with every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Failure of a line or station request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Line(#[from] LineServiceError),
    #[error(transparent)]
    Station(#[from] StationServiceError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Line(LineServiceError::LineNotFound(_))
            | Self::Line(LineServiceError::StationNotFound(_))
            | Self::Station(StationServiceError::StationNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Line(LineServiceError::Repo(_)) | Self::Station(StationServiceError::Repo(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Line(LineServiceError::LineNotFound(_)) => "line_not_found",
            Self::Line(LineServiceError::StationNotFound(_))
            | Self::Station(StationServiceError::StationNotFound(_)) => "station_not_found",
            Self::Line(LineServiceError::Repo(_)) | Self::Station(StationServiceError::Repo(_)) => {
                "internal_error"
            }
        }
    }

    /// Emits the failure event for `event` and hands the error back.
    pub(crate) fn logged(self, event: &'static str, started_at: Instant) -> Self {
        let status = self.status();
        if status.is_server_error() {
            error!(
                "event={} module=http status=error http_status={} duration_ms={} error_code={} error={}",
                event,
                status.as_u16(),
                started_at.elapsed().as_millis(),
                self.code(),
                self
            );
        } else {
            warn!(
                "event={} module=http status=rejected http_status={} duration_ms={} error_code={}",
                event,
                status.as_u16(),
                started_at.elapsed().as_millis(),
                self.code()
            );
        }
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            "internal storage failure".to_string()
        } else {
            self.to_string()
        };
        let body = ErrorBody {
            code: self.code().to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use subway_core::{DbError, LineServiceError, RepoError, StationServiceError};

    #[test]
    fn not_found_variants_map_to_404() {
        let line = ApiError::from(LineServiceError::LineNotFound(3));
        assert_eq!(line.status(), StatusCode::NOT_FOUND);
        assert_eq!(line.code(), "line_not_found");

        let dangling = ApiError::from(LineServiceError::StationNotFound(9));
        assert_eq!(dangling.status(), StatusCode::NOT_FOUND);
        assert_eq!(dangling.code(), "station_not_found");

        let station = ApiError::from(StationServiceError::StationNotFound(9));
        assert_eq!(station.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_failure_maps_to_500() {
        let err = ApiError::from(LineServiceError::Repo(RepoError::Db(
            DbError::UnsupportedSchemaVersion {
                db_version: 2,
                latest_supported: 1,
            },
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "internal_error");
    }
}
