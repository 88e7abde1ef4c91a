use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lenient;

/// Qualitative rating used for campus facilities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FacilityRating {
    Excellent,
    Good,
    Average,
    Poor,
    #[default]
    #[serde(rename = "Not Applicable")]
    NotApplicable,
}

impl FacilityRating {
    pub const ALL: [FacilityRating; 5] = [
        FacilityRating::Excellent,
        FacilityRating::Good,
        FacilityRating::Average,
        FacilityRating::Poor,
        FacilityRating::NotApplicable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FacilityRating::Excellent => "Excellent",
            FacilityRating::Good => "Good",
            FacilityRating::Average => "Average",
            FacilityRating::Poor => "Poor",
            FacilityRating::NotApplicable => "Not Applicable",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FacilityRatings {
    pub placement_support: FacilityRating,
    pub library_facilities: FacilityRating,
    pub lab_facilities: FacilityRating,
    pub hostel_facilities: FacilityRating,
    pub sports_facilities: FacilityRating,
    pub career_guidance: FacilityRating,
    pub extracurricular: FacilityRating,
    pub campus_environment: FacilityRating,
    pub admin_support: FacilityRating,
}

/// Validated content of a course/faculty evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CourseFeedbackFields {
    pub student_id: String,
    pub student_name: String,
    pub email: String,
    pub department: String,
    pub semester: String,
    pub degree_program: String,
    pub academic_year: String,
    pub course_code: String,
    pub course_name: String,
    pub faculty_name: String,
    pub rating_teaching: u8,
    pub rating_content: u8,
    pub rating_evaluation: u8,
    pub rating_facilities: u8,
    pub rating_overall: u8,
    pub strengths: String,
    pub improvements: String,
    pub suggestions: String,
    #[serde(flatten)]
    pub facilities: FacilityRatings,
    pub additional_comments: String,
    pub recommend_improvements: Vec<String>,
    pub willing_to_participate: bool,
    pub contact_for_followup: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CourseFeedback {
    pub id: String,
    #[serde(flatten)]
    pub fields: CourseFeedbackFields,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseFeedbackRequest {
    #[serde(default, deserialize_with = "lenient::text")]
    pub student_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub student_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub semester: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub degree_program: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub academic_year: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub course_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub course_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub faculty_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub rating_teaching: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub rating_content: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub rating_evaluation: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub rating_facilities: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub rating_overall: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub strengths: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub improvements: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub suggestions: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub placement_support: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub library_facilities: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub lab_facilities: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub hostel_facilities: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub sports_facilities: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub career_guidance: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub extracurricular: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub campus_environment: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub admin_support: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub additional_comments: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub recommend_improvements: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub willing_to_participate: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub contact_for_followup: Option<bool>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCourseFeedback {
    pub id: String,
    pub student_id: String,
    pub course_code: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListCourseFeedbackQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub department: Option<String>,
    pub semester: Option<String>,
    pub academic_year: Option<String>,
    pub course_code: Option<String>,
    pub faculty_name: Option<String>,
    pub sort_by: Option<String>,
}
