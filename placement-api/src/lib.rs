pub mod config;
pub mod database;
pub mod handlers;
pub mod helpers;
pub mod services;

pub use database::Database;

use actix_web::error::InternalError;
use actix_web::{web, ResponseError};

use handlers::{course_feedback, health, job_notifications as jobs, placement_feedback};
use helpers::response::ApiError;

/// Registers every API route. Literal segments come before `{id}` so they
/// are never captured as identifiers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health))
        .route("/job-notifications", web::post().to(jobs::create_job_notification))
        .route("/job-notifications", web::get().to(jobs::list_job_notifications))
        .route("/job-notifications/validate", web::post().to(jobs::validate_job_notification))
        .route(
            "/job-notifications/application/{applicationId}",
            web::get().to(jobs::get_by_application_id),
        )
        .route("/job-notifications/company/{companyName}", web::get().to(jobs::list_by_company))
        .route("/job-notifications/status/active", web::get().to(jobs::list_active))
        .route("/job-notifications/status/pending", web::get().to(jobs::list_pending))
        .route("/job-notifications/{id}", web::get().to(jobs::get_job_notification))
        .route("/job-notifications/{id}", web::put().to(jobs::update_job_notification))
        .route("/job-notifications/{id}", web::delete().to(jobs::delete_job_notification))
        .route("/job-notifications/{id}/approve", web::patch().to(jobs::approve_job_notification))
        .route("/job-notifications/{id}/reject", web::patch().to(jobs::reject_job_notification))
        .route("/job-notifications/{id}/hold", web::patch().to(jobs::hold_job_notification))
        .route("/student-feedback", web::post().to(course_feedback::create_feedback))
        .route("/student-feedback", web::get().to(course_feedback::list_feedback))
        .route("/student-feedback/validate", web::post().to(course_feedback::validate_feedback))
        .route("/placement-feedback", web::post().to(placement_feedback::create_feedback))
        .route("/placement-feedback", web::get().to(placement_feedback::list_feedback));
}

/// Malformed or non-JSON bodies become the standard 400 envelope
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(1024 * 1024)
        .error_handler(|err, _req| {
            tracing::debug!("Rejected request body: {}", err);
            let api_error = ApiError::invalid(
                "Invalid request body",
                form_rules::single_error("body", err.to_string()),
            );
            let response = api_error.error_response();
            InternalError::from_response(err, response).into()
        })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let api_error = ApiError::invalid(
            "Invalid query parameters",
            form_rules::single_error("query", err.to_string()),
        );
        let response = api_error.error_response();
        InternalError::from_response(err, response).into()
    })
}
