//! Reviewer-driven status changes on job notifications.
//!
//! Pending, Under Review and On Hold notifications may be approved,
//! rejected or put on hold. Approved and Rejected are final.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use form_rules::review::{validate_review, ReviewAction, ReviewInput};
use shared_types::{FieldErrors, JobNotification, JobStatus, ReviewRequest};
use thiserror::Error;

use crate::database::{job_notifications, Database, StoreError};
use crate::helpers::response::VALIDATION_FAILED;

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("{message}")]
    Invalid {
        message: &'static str,
        errors: FieldErrors,
    },
    #[error("Job notification is already {}", .0.as_str())]
    Locked(JobStatus),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Current time at the millisecond precision stored in the database
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// A timestamp strictly after `previous`, even when the clock has not moved
/// on since it was taken.
pub fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = now();
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}

pub fn ensure_reviewable(status: JobStatus) -> Result<(), WorkflowError> {
    if status.is_terminal() {
        return Err(WorkflowError::Locked(status));
    }
    Ok(())
}

pub fn apply_review(
    record: &mut JobNotification,
    action: ReviewAction,
    input: ReviewInput,
) -> Result<(), WorkflowError> {
    ensure_reviewable(record.status)?;
    record.status = action.target_status();
    record.reviewed_by = input.reviewer_name;
    record.review_notes = input.review_notes;
    record.last_updated = next_timestamp(record.last_updated);
    Ok(())
}

fn summary(action: ReviewAction, errors: &FieldErrors) -> &'static str {
    if errors.contains_key("reviewerName") {
        "Reviewer name is required"
    } else if action == ReviewAction::Reject
        && errors.get("reviewNotes").map(String::as_str) == Some("Please provide a reason for rejection")
    {
        "Rejection reason is required"
    } else {
        VALIDATION_FAILED
    }
}

/// Validates the reviewer input, then applies `action` to the stored record.
/// Invalid input never touches storage.
pub async fn review(
    db: &Database,
    id: &str,
    action: ReviewAction,
    request: &ReviewRequest,
) -> Result<JobNotification, WorkflowError> {
    let input = validate_review(action, request).map_err(|errors| WorkflowError::Invalid {
        message: summary(action, &errors),
        errors,
    })?;

    let record = job_notifications::modify(db, id, move |record| apply_review(record, action, input)).await?;

    tracing::info!(
        id = %record.id,
        application_id = %record.application_id,
        reviewer = %record.reviewed_by,
        "Job notification {}",
        action.past_tense()
    );
    Ok(record)
}
