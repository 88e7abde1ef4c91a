use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod course_feedback;
pub mod job_notification;
pub mod lenient;
pub mod pagination;
pub mod placement_feedback;

pub use course_feedback::{
    CourseFeedback, CourseFeedbackFields, CreateCourseFeedbackRequest, CreatedCourseFeedback,
    FacilityRating, FacilityRatings, ListCourseFeedbackQuery,
};
pub use job_notification::{
    BacklogEligibility, CreateJobNotificationRequest, CreatedJobNotification, JobNotification,
    JobNotificationFields, JobStatus, ListJobNotificationsQuery, OrganizationType, PageQuery,
    ReviewRequest, SelectionMode, UpdateJobNotificationRequest, UPDATABLE_FIELDS,
};
pub use pagination::{Paginated, PaginationInfo, ValidationReport};
pub use placement_feedback::{
    CreatePlacementFeedbackRequest, CreatedPlacementFeedback, ListPlacementFeedbackQuery,
    OfferStatus, PlacementFeedback, PlacementFeedbackFields, RecruitmentRatings,
};

/// Field name to human-readable message. Ordered so responses are stable.
pub type FieldErrors = BTreeMap<String, String>;

/// Envelope wrapped around every API response
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
            timestamp: Utc::now(),
        }
    }

    /// An error envelope. An empty error map is omitted from the body.
    pub fn failure(message: impl Into<String>, errors: Option<FieldErrors>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: errors.filter(|e| !e.is_empty()),
            timestamp: Utc::now(),
        }
    }
}
