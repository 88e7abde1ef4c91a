use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lenient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OfferStatus {
    Selected,
    Rejected,
    Pending,
}

impl OfferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferStatus::Selected => "Selected",
            OfferStatus::Rejected => "Rejected",
            OfferStatus::Pending => "Pending",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Selected" => Some(OfferStatus::Selected),
            "Rejected" => Some(OfferStatus::Rejected),
            "Pending" => Some(OfferStatus::Pending),
            _ => None,
        }
    }
}

/// 1-5 scores a student gives a recruiting company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentRatings {
    pub overall_experience: u8,
    pub recruitment_process: u8,
    pub company_reputation_rating: u8,
    pub company_work_culture_rating: u8,
    pub recruitment_process_transparency: u8,
    pub communication_quality: u8,
    pub technical_interview_quality: u8,
    pub hr_interview_experience: u8,
    pub interviewer_behavior: u8,
    pub college_preparation_support: u8,
    pub placement_cell_support: u8,
}

/// Validated content of a recruiting-experience submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PlacementFeedbackFields {
    pub student_email: String,
    pub student_name: String,
    pub enrollment_number: String,
    pub branch: String,
    pub semester: String,
    pub academic_year: String,
    pub company_name: String,
    pub position_applied: String,
    #[serde(flatten)]
    pub ratings: RecruitmentRatings,
    pub technical_interview_difficulty: String,
    pub feedback_received_from_company: String,
    pub offer_status: OfferStatus,
    pub package_offered: Option<String>,
    pub joining_date: Option<String>,
    pub strengths: String,
    pub improvements: String,
    pub advice_for_juniors: String,
    pub would_recommend: String,
    pub additional_comments: String,
    pub can_be_contacted: bool,
    pub alternate_phone: Option<String>,
    pub linkedin_profile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PlacementFeedback {
    pub id: String,
    #[serde(flatten)]
    pub fields: PlacementFeedbackFields,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlacementFeedbackRequest {
    #[serde(default, deserialize_with = "lenient::text")]
    pub student_email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub student_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub enrollment_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub branch: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub semester: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub academic_year: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub position_applied: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub overall_experience: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub recruitment_process: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_reputation_rating: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_work_culture_rating: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub recruitment_process_transparency: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub communication_quality: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub technical_interview_difficulty: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub technical_interview_quality: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub hr_interview_experience: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub interviewer_behavior: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub college_preparation_support: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub placement_cell_support: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub feedback_received_from_company: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub offer_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub package_offered: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub joining_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub strengths: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub improvements: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub advice_for_juniors: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub would_recommend: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub additional_comments: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub can_be_contacted: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub alternate_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub linkedin_profile: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPlacementFeedback {
    pub id: String,
    pub enrollment_number: String,
    pub company_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListPlacementFeedbackQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub branch: Option<String>,
    pub semester: Option<String>,
    pub academic_year: Option<String>,
    pub company_name: Option<String>,
    pub offer_status: Option<String>,
    pub sort_by: Option<String>,
}
