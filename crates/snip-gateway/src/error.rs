use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use snip_core::RegistryError;
use thiserror::Error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("{}", .0.body_text())]
    Json(#[from] JsonRejection),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Json(rejection) => rejection.status(),
            AppError::Registry(error) => match error {
                RegistryError::CodeConflict(_) | RegistryError::InvalidValidity(_) => {
                    StatusCode::BAD_REQUEST
                }
                RegistryError::ExhaustedAttempts { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
                RegistryError::Expired(_) => StatusCode::GONE,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_errors_map_to_distinct_statuses() {
        let cases = [
            (RegistryError::CodeConflict("promo".into()), StatusCode::BAD_REQUEST),
            (
                RegistryError::ExhaustedAttempts { attempts: 5 },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (RegistryError::NotFound("nope".into()), StatusCode::NOT_FOUND),
            (RegistryError::Expired("old".into()), StatusCode::GONE),
            (RegistryError::InvalidValidity(i64::MAX), StatusCode::BAD_REQUEST),
        ];

        for (error, status) in cases {
            assert_eq!(AppError::from(error).status(), status);
        }
    }

    #[test]
    fn invalid_url_is_unprocessable() {
        let error = AppError::InvalidUrl("nope".into());
        assert_eq!(error.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
