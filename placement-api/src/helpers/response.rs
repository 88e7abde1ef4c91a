use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use form_rules::listing::{ListingError, PageParams};
use serde::Serialize;
use shared_types::{ApiResponse, FieldErrors, Paginated, PaginationInfo};
use thiserror::Error;

use crate::database::StoreError;

pub const VALIDATION_FAILED: &str = "Validation failed. Please check the errors below.";

/// Failures surfaced to API clients, each rendered as the standard envelope.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },
    #[error("{message}")]
    Conflict { message: String, errors: FieldErrors },
    #[error("{message}")]
    NotFound {
        message: String,
        errors: Option<FieldErrors>,
    },
    #[error("{message}")]
    Internal {
        message: String,
        detail: Option<String>,
    },
}

impl ApiError {
    pub fn validation(errors: FieldErrors) -> Self {
        Self::invalid(VALIDATION_FAILED, errors)
    }

    pub fn invalid(message: impl Into<String>, errors: FieldErrors) -> Self {
        ApiError::Validation {
            message: message.into(),
            errors,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            errors: None,
        }
    }

    pub fn invalid_id() -> Self {
        Self::invalid(
            "Invalid job notification ID",
            form_rules::single_error("id", "Invalid ID format"),
        )
    }

    fn body(&self) -> ApiResponse<()> {
        match self {
            ApiError::Validation { message, errors } | ApiError::Conflict { message, errors } => {
                ApiResponse::failure(message.clone(), Some(errors.clone()))
            }
            ApiError::NotFound { message, errors } => {
                ApiResponse::failure(message.clone(), errors.clone())
            }
            ApiError::Internal { message, detail } => ApiResponse::failure(
                message.clone(),
                Some(form_rules::single_error(
                    "error",
                    detail.as_deref().unwrap_or("Internal server error"),
                )),
            ),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

impl From<ListingError> for ApiError {
    fn from(err: ListingError) -> Self {
        ApiError::invalid(err.to_string(), err.errors().clone())
    }
}

/// Response text for store failures of one kind of record.
#[derive(Debug, Clone, Copy)]
pub struct StoreMessages {
    pub not_found: &'static str,
    pub conflict: &'static str,
    pub internal: &'static str,
}

/// Decides how much of an unexpected storage failure reaches the client.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorReporting {
    pub expose_details: bool,
}

impl ErrorReporting {
    pub fn store(&self, err: StoreError, messages: &StoreMessages) -> ApiError {
        match err {
            StoreError::NotFound => ApiError::not_found(messages.not_found),
            StoreError::Conflict {
                field,
                message,
                existing_id,
            } => {
                tracing::warn!(field, existing_id = ?existing_id, "{}", messages.conflict);
                ApiError::Conflict {
                    message: messages.conflict.to_string(),
                    errors: form_rules::single_error(field, message),
                }
            }
            StoreError::Storage(detail) => {
                tracing::error!("{}: {}", messages.internal, detail);
                ApiError::Internal {
                    message: messages.internal.to_string(),
                    detail: self.expose_details.then_some(detail),
                }
            }
        }
    }
}

pub fn ok<T: Serialize>(message: &str, data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(message, data))
}

pub fn created<T: Serialize>(message: &str, data: T) -> HttpResponse {
    HttpResponse::Created().json(ApiResponse::ok(message, data))
}

pub fn paginated<T>(items: Vec<T>, total: u64, page: PageParams) -> Paginated<T> {
    Paginated {
        items,
        pagination: PaginationInfo::new(page.page, page.limit, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    const MESSAGES: StoreMessages = StoreMessages {
        not_found: "Job notification not found",
        conflict: "Email already registered. Please use a different email address.",
        internal: "Failed to process job notification",
    };

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_not_found_has_no_error_map() {
        let err = ErrorReporting::default().store(StoreError::NotFound, &MESSAGES);
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Job notification not found");
        assert!(json.get("errors").is_none());
    }

    #[actix_web::test]
    async fn test_conflict_names_field() {
        let err = ErrorReporting::default().store(
            StoreError::Conflict {
                field: "email",
                message: "This email is already registered in the system".into(),
                existing_id: None,
            },
            &MESSAGES,
        );
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            json["errors"]["email"],
            "This email is already registered in the system"
        );
    }

    #[actix_web::test]
    async fn test_storage_detail_only_in_development() {
        let failure = || StoreError::Storage("disk I/O error".into());

        let (status, json) = body_json(ErrorReporting::default().store(failure(), &MESSAGES)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["errors"]["error"], "Internal server error");

        let dev = ErrorReporting {
            expose_details: true,
        };
        let (_, json) = body_json(dev.store(failure(), &MESSAGES)).await;
        assert_eq!(json["errors"]["error"], "disk I/O error");
    }

    #[actix_web::test]
    async fn test_listing_error_becomes_bad_request() {
        let err: ApiError = form_rules::listing::parse_pagination(Some("0"), None)
            .unwrap_err()
            .into();
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid pagination parameters");
        assert_eq!(json["errors"]["page"], "Page must be a positive number");
    }
}
