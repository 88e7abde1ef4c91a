use actix_web::{web, HttpResponse, Result as ActixResult};
use form_rules::listing::course_feedback_listing;
use shared_types::{
    CourseFeedback, CreateCourseFeedbackRequest, CreatedCourseFeedback, ListCourseFeedbackQuery,
    ValidationReport,
};
use std::sync::Arc;

use crate::database::{course_feedback as db, Database};
use crate::helpers::response::{self, ApiError, ErrorReporting, StoreMessages};
use crate::services::workflow;

const MESSAGES: StoreMessages = StoreMessages {
    not_found: "Feedback not found",
    conflict: "Feedback already submitted for this course by this student",
    internal: "Internal server error",
};

pub async fn create_feedback(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    request: web::Json<CreateCourseFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    let fields = form_rules::course_feedback::prepare(&request).map_err(|errors| {
        tracing::debug!(?errors, "Course feedback failed validation");
        ApiError::validation(errors)
    })?;

    let feedback = CourseFeedback {
        id: uuid::Uuid::new_v4().to_string(),
        fields,
        created_at: workflow::now(),
    };

    let feedback = db::create(&database, feedback)
        .await
        .map_err(|e| reporting.store(e, &MESSAGES))?;

    tracing::info!(
        id = %feedback.id,
        course = %feedback.fields.course_code,
        "Course feedback submitted"
    );

    Ok(response::created(
        "Feedback submitted successfully",
        CreatedCourseFeedback {
            id: feedback.id,
            student_id: feedback.fields.student_id,
            course_code: feedback.fields.course_code,
            created_at: feedback.created_at,
        },
    ))
}

pub async fn validate_feedback(
    request: web::Json<CreateCourseFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    form_rules::course_feedback::validate(&request)
        .into_result()
        .map_err(ApiError::validation)?;

    Ok(response::ok("Feedback is valid", ValidationReport { is_valid: true }))
}

pub async fn list_feedback(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    query: web::Query<ListCourseFeedbackQuery>,
) -> ActixResult<HttpResponse> {
    let listing = course_feedback_listing(&query).map_err(ApiError::from)?;

    let (items, total) = db::list(&database, &listing)
        .await
        .map_err(|e| reporting.store(e, &MESSAGES))?;

    Ok(response::ok(
        "Feedbacks retrieved successfully",
        response::paginated(items, total, listing.page),
    ))
}
