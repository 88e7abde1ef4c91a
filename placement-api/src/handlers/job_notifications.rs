use actix_web::{web, HttpResponse, Result as ActixResult};
use form_rules::listing::{company_term, job_listing, parse_pagination};
use form_rules::review::ReviewAction;
use shared_types::{
    CreateJobNotificationRequest, CreatedJobNotification, FieldErrors, JobNotification, JobStatus,
    ListJobNotificationsQuery, PageQuery, ReviewRequest, UpdateJobNotificationRequest,
    ValidationReport, UPDATABLE_FIELDS,
};
use std::sync::Arc;

use crate::database::job_notifications as db;
use crate::database::{is_record_id, Database, StoreError};
use crate::helpers::application_id::generate_application_id;
use crate::helpers::response::{self, ApiError, ErrorReporting, StoreMessages, VALIDATION_FAILED};
use crate::services::workflow::{self, WorkflowError};

const MESSAGES: StoreMessages = StoreMessages {
    not_found: "Job notification not found",
    conflict: "Email already registered. Please use a different email address.",
    internal: "Internal server error",
};

fn record_id(path: web::Path<String>) -> Result<String, ApiError> {
    let id = path.into_inner();
    if !is_record_id(&id) {
        return Err(ApiError::invalid_id());
    }
    Ok(id)
}

pub async fn create_job_notification(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    request: web::Json<CreateJobNotificationRequest>,
) -> ActixResult<HttpResponse> {
    let fields = form_rules::job_notification::prepare(&request).map_err(|errors| {
        tracing::debug!(?errors, "Job notification failed validation");
        ApiError::validation(errors)
    })?;

    let submitted = workflow::now();
    let record = JobNotification {
        id: uuid::Uuid::new_v4().to_string(),
        application_id: generate_application_id(),
        fields,
        status: JobStatus::Pending,
        reviewed_by: String::new(),
        review_notes: String::new(),
        submission_date: submitted,
        last_updated: submitted,
        is_active: true,
    };

    let record = db::create(&database, record)
        .await
        .map_err(|e| reporting.store(e, &MESSAGES))?;

    tracing::info!(
        id = %record.id,
        application_id = %record.application_id,
        company = %record.fields.company_name,
        "Job notification submitted"
    );

    Ok(response::created(
        "Job notification created successfully. Our team will review and contact you soon.",
        CreatedJobNotification {
            id: record.id,
            application_id: record.application_id,
            email: record.fields.email,
            company_name: record.fields.company_name,
            submission_date: record.submission_date,
        },
    ))
}

/// Dry run of the create rules; nothing is stored.
pub async fn validate_job_notification(
    request: web::Json<CreateJobNotificationRequest>,
) -> ActixResult<HttpResponse> {
    form_rules::job_notification::validate(&request)
        .into_result()
        .map_err(ApiError::validation)?;

    Ok(response::ok(
        "Job notification is valid",
        ValidationReport { is_valid: true },
    ))
}

pub async fn list_job_notifications(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    query: web::Query<ListJobNotificationsQuery>,
) -> ActixResult<HttpResponse> {
    let listing = job_listing(&query).map_err(ApiError::from)?;

    let (items, total) = db::list(&database, &listing)
        .await
        .map_err(|e| reporting.store(e, &MESSAGES))?;

    Ok(response::ok(
        "Job notifications retrieved successfully",
        response::paginated(items, total, listing.page),
    ))
}

pub async fn get_job_notification(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = record_id(path)?;

    let record = db::get(&database, &id)
        .await
        .map_err(|e| reporting.store(e, &MESSAGES))?;

    Ok(response::ok("Job notification retrieved successfully", record))
}

/// Checks every key against the update allow-list before anything else is
/// looked at. One disallowed key fails the whole request.
pub fn parse_update(body: serde_json::Value) -> Result<UpdateJobNotificationRequest, ApiError> {
    let serde_json::Value::Object(map) = &body else {
        return Err(ApiError::invalid(
            "Invalid update fields",
            form_rules::single_error("fields", "Update body must be a JSON object"),
        ));
    };

    let disallowed: Vec<&str> = map
        .keys()
        .map(String::as_str)
        .filter(|key| !UPDATABLE_FIELDS.contains(key))
        .collect();
    if !disallowed.is_empty() {
        return Err(ApiError::invalid(
            "Invalid update fields",
            form_rules::single_error(
                "fields",
                format!("These fields cannot be updated: {}", disallowed.join(", ")),
            ),
        ));
    }

    serde_json::from_value(body).map_err(|e| {
        ApiError::invalid(VALIDATION_FAILED, form_rules::single_error("body", e.to_string()))
    })
}

enum EditError {
    Invalid(FieldErrors),
    Store(StoreError),
}

impl From<StoreError> for EditError {
    fn from(err: StoreError) -> Self {
        EditError::Store(err)
    }
}

/// Overlays the changes on the stored submission and re-runs the full
/// create rules on the result.
fn apply_update(record: &mut JobNotification, changes: UpdateJobNotificationRequest) -> Result<(), EditError> {
    let mut merged = CreateJobNotificationRequest::from(&record.fields);
    changes.apply_to(&mut merged);
    record.fields = form_rules::job_notification::prepare(&merged).map_err(EditError::Invalid)?;
    record.last_updated = workflow::next_timestamp(record.last_updated);
    Ok(())
}

pub async fn update_job_notification(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    path: web::Path<String>,
    body: web::Json<serde_json::Value>,
) -> ActixResult<HttpResponse> {
    let id = record_id(path)?;
    let changes = parse_update(body.into_inner())?;

    let record = db::modify(&database, &id, move |record| apply_update(record, changes))
        .await
        .map_err(|err| match err {
            EditError::Invalid(errors) => {
                tracing::debug!(?errors, "Job notification update failed validation");
                ApiError::validation(errors)
            }
            EditError::Store(e) => reporting.store(e, &MESSAGES),
        })?;

    tracing::info!(id = %record.id, "Job notification updated");
    Ok(response::ok("Job notification updated successfully", record))
}

/// Soft delete: the record stays readable with `isActive = false`.
pub async fn delete_job_notification(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = record_id(path)?;

    let record = db::modify(&database, &id, |record| {
        record.is_active = false;
        record.last_updated = workflow::next_timestamp(record.last_updated);
        Ok::<_, StoreError>(())
    })
    .await
    .map_err(|e| reporting.store(e, &MESSAGES))?;

    tracing::info!(id = %record.id, "Job notification deactivated");
    Ok(response::ok("Job notification deleted successfully", record))
}

fn workflow_error(err: WorkflowError, reporting: &ErrorReporting) -> ApiError {
    match err {
        WorkflowError::Invalid { message, errors } => {
            tracing::debug!(?errors, "Review input failed validation");
            ApiError::invalid(message, errors)
        }
        WorkflowError::Locked(status) => ApiError::Conflict {
            message: "Job notification has already been reviewed".to_string(),
            errors: form_rules::single_error("status", WorkflowError::Locked(status).to_string()),
        },
        WorkflowError::Store(e) => reporting.store(e, &MESSAGES),
    }
}

async fn review(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    path: web::Path<String>,
    request: web::Json<ReviewRequest>,
    action: ReviewAction,
) -> ActixResult<HttpResponse> {
    let id = record_id(path)?;

    let record = workflow::review(&database, &id, action, &request)
        .await
        .map_err(|e| workflow_error(e, &reporting))?;

    Ok(response::ok(
        &format!("Job notification {} successfully", action.past_tense()),
        record,
    ))
}

pub async fn approve_job_notification(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    path: web::Path<String>,
    request: web::Json<ReviewRequest>,
) -> ActixResult<HttpResponse> {
    review(database, reporting, path, request, ReviewAction::Approve).await
}

pub async fn reject_job_notification(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    path: web::Path<String>,
    request: web::Json<ReviewRequest>,
) -> ActixResult<HttpResponse> {
    review(database, reporting, path, request, ReviewAction::Reject).await
}

pub async fn hold_job_notification(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    path: web::Path<String>,
    request: web::Json<ReviewRequest>,
) -> ActixResult<HttpResponse> {
    review(database, reporting, path, request, ReviewAction::Hold).await
}

pub async fn get_by_application_id(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let application_id = path.into_inner();

    let record = db::get_by_application_id(&database, application_id.trim())
        .await
        .map_err(|e| match e {
            StoreError::NotFound => ApiError::NotFound {
                message: MESSAGES.not_found.to_string(),
                errors: Some(form_rules::single_error(
                    "applicationId",
                    "Application ID does not exist",
                )),
            },
            other => reporting.store(other, &MESSAGES),
        })?;

    Ok(response::ok("Job notification retrieved successfully", record))
}

pub async fn list_by_company(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> ActixResult<HttpResponse> {
    let raw = path.into_inner();
    let term = company_term(&raw).map_err(|err| {
        if raw.trim().is_empty() {
            ApiError::invalid("Company name is required", err.errors().clone())
        } else {
            ApiError::from(err)
        }
    })?;
    let page = parse_pagination(query.page.as_deref(), query.limit.as_deref()).map_err(ApiError::from)?;

    let (items, total) = db::list_by_company(&database, &term, page)
        .await
        .map_err(|e| reporting.store(e, &MESSAGES))?;

    if items.is_empty() {
        return Err(ApiError::not_found("No jobs found for this company").into());
    }

    Ok(response::ok(
        "Company jobs retrieved successfully",
        response::paginated(items, total, page),
    ))
}

pub async fn list_active(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    query: web::Query<PageQuery>,
) -> ActixResult<HttpResponse> {
    let page = parse_pagination(query.page.as_deref(), query.limit.as_deref()).map_err(ApiError::from)?;

    let (items, total) = db::list_active(&database, page)
        .await
        .map_err(|e| reporting.store(e, &MESSAGES))?;

    Ok(response::ok(
        "Active jobs retrieved successfully",
        response::paginated(items, total, page),
    ))
}

pub async fn list_pending(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    query: web::Query<PageQuery>,
) -> ActixResult<HttpResponse> {
    let page = parse_pagination(query.page.as_deref(), query.limit.as_deref()).map_err(ApiError::from)?;

    let (items, total) = db::list_pending(&database, page)
        .await
        .map_err(|e| reporting.store(e, &MESSAGES))?;

    Ok(response::ok(
        "Pending jobs retrieved successfully",
        response::paginated(items, total, page),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields_error(err: ApiError) -> String {
        match err {
            ApiError::Validation { message, errors } => {
                assert_eq!(message, "Invalid update fields");
                errors["fields"].clone()
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_update_rejects_workflow_fields() {
        let err = parse_update(json!({
            "jobTitle": "Platform Engineer",
            "status": "Approved",
            "email": "new@acme.example.com"
        }))
        .unwrap_err();
        assert_eq!(
            fields_error(err),
            "These fields cannot be updated: email, status"
        );
    }

    #[test]
    fn test_update_requires_object() {
        let err = parse_update(json!(["jobTitle"])).unwrap_err();
        assert_eq!(fields_error(err), "Update body must be a JSON object");
    }

    #[test]
    fn test_update_accepts_allowed_fields() {
        let changes = parse_update(json!({
            "jobTitle": "Platform Engineer",
            "headHRName": "Ritu Verma",
            "numberOfEmployees": 500
        }))
        .unwrap();
        assert_eq!(changes.job_title.as_deref(), Some("Platform Engineer"));
        assert_eq!(changes.head_hr_name.as_deref(), Some("Ritu Verma"));
        assert_eq!(changes.number_of_employees.as_deref(), Some("500"));
    }

    #[test]
    fn test_apply_update_revalidates() {
        let fields = form_rules::job_notification::prepare(
            &form_rules::fixtures::job_notification_request("hr@acme.example.com"),
        )
        .unwrap();
        let submitted = workflow::now();
        let mut record = JobNotification {
            id: uuid::Uuid::new_v4().to_string(),
            application_id: "JNF1718000000123ABCDE".into(),
            fields,
            status: JobStatus::Pending,
            reviewed_by: String::new(),
            review_notes: String::new(),
            submission_date: submitted,
            last_updated: submitted,
            is_active: true,
        };

        let bad = parse_update(json!({ "jobDescription": "short" })).unwrap();
        match apply_update(&mut record.clone(), bad) {
            Err(EditError::Invalid(errors)) => assert!(errors.contains_key("jobDescription")),
            _ => panic!("expected a validation failure"),
        }

        let good = parse_update(json!({ "jobTitle": "  Platform   Engineer " })).unwrap();
        assert!(apply_update(&mut record, good).is_ok());
        assert_eq!(record.fields.job_title, "Platform Engineer");
        assert_eq!(record.fields.email, "hr@acme.example.com");
        assert!(record.last_updated > submitted);
    }
}
