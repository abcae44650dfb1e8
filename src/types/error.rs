use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// One failed constraint on one submitted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Error)]
pub enum AppError {
    // the caller can fix these
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    // infra things; the wire only ever sees `public`
    #[error("{public}")]
    Storage {
        public: &'static str,
        #[source]
        source: DbErr,
    },
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a [FieldError]>,
}

impl AppError {
    /// Maps a storage failure onto an opaque caller-facing message,
    /// logging the real cause for the operator.
    pub fn storage(public: &'static str) -> impl FnOnce(DbErr) -> AppError {
        move |source| {
            tracing::error!(error = %source, "storage operation failed");
            AppError::Storage { public, source }
        }
    }

    fn public_message(&self) -> &str {
        match self {
            Self::Validation(_) => "Validation failed",
            Self::Storage { public, .. } => public,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let details = match self {
            Self::Validation(errors) => Some(errors.as_slice()),
            Self::Storage { .. } => None,
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            success: false,
            error: self.public_message(),
            details,
        })
    }
}
