use axum::{
    BoxError, Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::application::validation::ValidationError;
use crate::infrastructure::db::DbError;

// Postgres SQLSTATE codes surfaced as client errors.
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{method} is not allowed on {path}")]
    MethodNotAllowed { method: Method, path: String },
    #[error("the request did not complete within {0}s")]
    Timeout(u64),
    #[error("the database is unavailable")]
    Unavailable(#[source] anyhow::Error),
    #[error("an internal error occurred")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn not_found(resource: &str, id: i32) -> Self {
        ApiError::NotFound(format!("{resource} {id} was not found"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejected { status, .. } => *status,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::Rejected { status, .. } => match *status {
                StatusCode::UNPROCESSABLE_ENTITY => "validation_error",
                StatusCode::UNSUPPORTED_MEDIA_TYPE => "unsupported_media_type",
                StatusCode::PAYLOAD_TOO_LARGE => "payload_too_large",
                _ => "bad_request",
            },
            ApiError::NotFound(_) => "not_found",
            ApiError::Conflict(_) => "conflict",
            ApiError::MethodNotAllowed { .. } => "method_not_allowed",
            ApiError::Timeout(_) => "timeout",
            ApiError::Unavailable(_) => "unavailable",
            ApiError::Internal(_) => "internal",
        }
    }
}

enum Kind {
    Validation(ValidationError),
    Conflict(&'static str),
    Unavailable,
    Internal,
}

fn classify_sqlx(err: &sqlx::Error) -> Kind {
    match err {
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut => Kind::Unavailable,
        sqlx::Error::Database(db) => match db.code().as_deref() {
            Some(UNIQUE_VIOLATION) => Kind::Conflict("a record with the same name already exists"),
            Some(FOREIGN_KEY_VIOLATION) => {
                Kind::Conflict("the record is still referenced by inhabitants")
            }
            Some(CHECK_VIOLATION) => Kind::Validation(ValidationError::new(
                "body",
                "a value is outside its allowed range",
            )),
            _ => Kind::Internal,
        },
        _ => Kind::Internal,
    }
}

fn classify(err: &anyhow::Error) -> Kind {
    if let Some(v) = err.downcast_ref::<ValidationError>() {
        return Kind::Validation(v.clone());
    }
    if let Some(db) = err.downcast_ref::<DbError>() {
        return match db {
            DbError::NotConnected | DbError::Connection(_) => Kind::Unavailable,
            DbError::Query(e) => classify_sqlx(e),
            DbError::Migration(_) => Kind::Internal,
        };
    }
    if let Some(e) = err.downcast_ref::<sqlx::Error>() {
        return classify_sqlx(e);
    }
    Kind::Internal
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match classify(&err) {
            Kind::Validation(v) => ApiError::Validation(v),
            Kind::Conflict(msg) => ApiError::Conflict(msg.to_string()),
            Kind::Unavailable => ApiError::Unavailable(err),
            Kind::Internal => ApiError::Internal(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Router fallback for paths no router binds.
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// Fallback for a bound path hit with a method it does not serve.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        path: uri.path().to_string(),
    }
}

/// Turns errors from the middleware stack into responses. `timeout_secs` is
/// only used for the message.
pub fn middleware_error(err: BoxError, timeout_secs: u64) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout(timeout_secs)
    } else {
        ApiError::Internal(anyhow::Error::msg(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(e) => tracing::error!(error = ?e, "request_failed"),
            ApiError::Unavailable(e) => tracing::warn!(error = %e, "database_unavailable"),
            ApiError::Timeout(secs) => tracing::warn!(timeout_secs = secs, "request_timed_out"),
            _ => tracing::debug!(error = %self, "request_rejected"),
        }
        let status = self.status();
        let field = match &self {
            ApiError::Validation(v) => Some(v.field.to_string()),
            _ => None,
        };
        let body = ErrorBody {
            code: self.code().to_string(),
            message: self.to_string(),
            field,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_422() {
        let err: ApiError =
            anyhow::Error::from(ValidationError::new("name", "must not be empty")).into();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "validation_error");
        assert_eq!(err.to_string(), "name: must not be empty");
    }

    #[test]
    fn missing_pool_maps_to_503() {
        let err: ApiError = anyhow::Error::from(DbError::NotConnected).into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.code(), "unavailable");
    }

    #[test]
    fn closed_pool_maps_to_503() {
        let err: ApiError = anyhow::Error::from(sqlx::Error::PoolClosed).into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn unknown_errors_hide_details() {
        let err: ApiError = anyhow::anyhow!("connection reset by peer").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "an internal error occurred");
    }

    #[test]
    fn elapsed_requests_map_to_408() {
        let err = middleware_error(Box::new(tower::timeout::error::Elapsed::new()), 30);
        assert_eq!(err.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(err.code(), "timeout");

        let err = middleware_error("layer exploded".into(), 30);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_names_the_resource() {
        let err = ApiError::not_found("species", 7);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "species 7 was not found");
    }
}
