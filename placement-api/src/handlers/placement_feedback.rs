use actix_web::{web, HttpResponse, Result as ActixResult};
use form_rules::listing::placement_feedback_listing;
use shared_types::{
    CreatePlacementFeedbackRequest, CreatedPlacementFeedback, ListPlacementFeedbackQuery,
    PlacementFeedback,
};
use std::sync::Arc;

use crate::database::{placement_feedback as db, Database};
use crate::helpers::response::{self, ApiError, ErrorReporting, StoreMessages};
use crate::services::workflow;

const MESSAGES: StoreMessages = StoreMessages {
    not_found: "Feedback not found",
    conflict: "Feedback already submitted for this company by this student",
    internal: "Internal server error",
};

pub async fn create_feedback(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    request: web::Json<CreatePlacementFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    let fields = form_rules::placement_feedback::prepare(&request).map_err(|errors| {
        tracing::debug!(?errors, "Placement feedback failed validation");
        ApiError::validation(errors)
    })?;

    let feedback = PlacementFeedback {
        id: uuid::Uuid::new_v4().to_string(),
        fields,
        created_at: workflow::now(),
    };

    let feedback = db::create(&database, feedback)
        .await
        .map_err(|e| reporting.store(e, &MESSAGES))?;

    tracing::info!(
        id = %feedback.id,
        company = %feedback.fields.company_name,
        offer = feedback.fields.offer_status.as_str(),
        "Placement feedback submitted"
    );

    Ok(response::created(
        "Feedback submitted successfully",
        CreatedPlacementFeedback {
            id: feedback.id,
            enrollment_number: feedback.fields.enrollment_number,
            company_name: feedback.fields.company_name,
            created_at: feedback.created_at,
        },
    ))
}

pub async fn list_feedback(
    database: web::Data<Arc<Database>>,
    reporting: web::Data<ErrorReporting>,
    query: web::Query<ListPlacementFeedbackQuery>,
) -> ActixResult<HttpResponse> {
    let listing = placement_feedback_listing(&query).map_err(ApiError::from)?;

    let (items, total) = db::list(&database, &listing)
        .await
        .map_err(|e| reporting.store(e, &MESSAGES))?;

    Ok(response::ok(
        "Feedbacks retrieved successfully",
        response::paginated(items, total, listing.page),
    ))
}
