use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lenient;

/// Lifecycle state of a job notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum JobStatus {
    Pending,
    #[serde(rename = "Under Review")]
    UnderReview,
    Approved,
    Rejected,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl JobStatus {
    pub const ALL: [JobStatus; 5] = [
        JobStatus::Pending,
        JobStatus::UnderReview,
        JobStatus::Approved,
        JobStatus::Rejected,
        JobStatus::OnHold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "Pending",
            JobStatus::UnderReview => "Under Review",
            JobStatus::Approved => "Approved",
            JobStatus::Rejected => "Rejected",
            JobStatus::OnHold => "On Hold",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }

    /// No review operation moves a record out of these states.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Approved | JobStatus::Rejected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OrganizationType {
    Private,
    #[serde(rename = "MNC(Indian Origin)")]
    MncIndianOrigin,
    #[serde(rename = "MNC(Foreign Origin)")]
    MncForeignOrigin,
    Government,
    #[serde(rename = "PSUs")]
    Psus,
    #[serde(rename = "NGO")]
    Ngo,
    #[serde(rename = "STARTUP")]
    Startup,
    Other,
}

impl OrganizationType {
    pub const ALL: [OrganizationType; 8] = [
        OrganizationType::Private,
        OrganizationType::MncIndianOrigin,
        OrganizationType::MncForeignOrigin,
        OrganizationType::Government,
        OrganizationType::Psus,
        OrganizationType::Ngo,
        OrganizationType::Startup,
        OrganizationType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrganizationType::Private => "Private",
            OrganizationType::MncIndianOrigin => "MNC(Indian Origin)",
            OrganizationType::MncForeignOrigin => "MNC(Foreign Origin)",
            OrganizationType::Government => "Government",
            OrganizationType::Psus => "PSUs",
            OrganizationType::Ngo => "NGO",
            OrganizationType::Startup => "STARTUP",
            OrganizationType::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == label)
    }

    /// Multinationals must name their head office.
    pub fn is_mnc(&self) -> bool {
        matches!(
            self,
            OrganizationType::MncIndianOrigin | OrganizationType::MncForeignOrigin
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BacklogEligibility {
    Yes,
    No,
}

impl BacklogEligibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            BacklogEligibility::Yes => "Yes",
            BacklogEligibility::No => "No",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Yes" => Some(BacklogEligibility::Yes),
            "No" => Some(BacklogEligibility::No),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SelectionMode {
    Virtual,
    #[serde(rename = "Campus Visit")]
    CampusVisit,
    Hybrid,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Virtual => "Virtual",
            SelectionMode::CampusVisit => "Campus Visit",
            SelectionMode::Hybrid => "Hybrid",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Virtual" => Some(SelectionMode::Virtual),
            "Campus Visit" => Some(SelectionMode::CampusVisit),
            "Hybrid" => Some(SelectionMode::Hybrid),
            _ => None,
        }
    }
}

/// Validated, normalized content of a company submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct JobNotificationFields {
    // Company profile
    pub email: String,
    pub company_name: String,
    pub about_company: String,
    pub correspondence_address: String,
    pub date_of_establishment: Option<NaiveDate>,
    pub number_of_employees: Option<u32>,
    pub social_media_link: Option<String>,
    pub website: String,
    pub type_of_organization: OrganizationType,
    pub mnc_head_office: Option<String>,
    pub nature_of_business: Vec<String>,

    // HR and contacts
    #[serde(rename = "headHRName")]
    pub head_hr_name: String,
    #[serde(rename = "headHRContact")]
    pub head_hr_contact: String,
    #[serde(rename = "headHREmail")]
    pub head_hr_email: String,
    pub first_contact_name: String,
    pub first_contact_email: String,
    pub first_contact_phone: String,
    pub second_contact_name: String,
    pub second_contact_email: String,
    pub second_contact_phone: String,

    // Job details
    pub job_profile: String,
    pub job_title: String,
    pub job_description: String,
    pub min_hires: u32,
    pub expected_hires: u32,
    pub job_location: String,
    pub required_skills: String,

    // Eligibility
    pub eligible_degrees: Vec<String>,
    #[serde(rename = "eligibleBTechDepartments")]
    pub eligible_btech_departments: Vec<String>,
    #[serde(rename = "eligibleMTechDepartments")]
    pub eligible_mtech_departments: Vec<String>,
    #[serde(rename = "eligiblePhDDepartments")]
    pub eligible_phd_departments: Vec<String>,

    // Role-specific descriptions
    #[serde(rename = "jobDesignationBTech")]
    pub job_designation_btech: String,
    #[serde(rename = "jobDescBTech")]
    pub job_desc_btech: String,
    #[serde(rename = "jobDesignationMTech")]
    pub job_designation_mtech: String,
    #[serde(rename = "jobDescMTech")]
    pub job_desc_mtech: String,
    #[serde(rename = "jobDesignationPhD")]
    pub job_designation_phd: String,
    #[serde(rename = "jobDescPhD")]
    pub job_desc_phd: String,

    // Selection process
    pub cgpa_cutoff: String,
    pub backlog_eligibility: BacklogEligibility,
    pub mode_of_selection: SelectionMode,
    pub selection_rounds: Vec<String>,
    pub total_rounds: u8,
    pub syllabus: Option<String>,
}

/// A persisted job notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct JobNotification {
    pub id: String,
    pub application_id: String,
    #[serde(flatten)]
    pub fields: JobNotificationFields,
    pub status: JobStatus,
    pub reviewed_by: String,
    pub review_notes: String,
    pub submission_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub is_active: bool,
}

/// Raw company submission as posted by the form.
///
/// Every field is optional here; presence and format are judged by the
/// validator so that a single response can report every problem at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobNotificationRequest {
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub about_company: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub correspondence_address: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date_of_establishment: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub number_of_employees: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub social_media_link: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub type_of_organization: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub mnc_head_office: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub nature_of_business: Option<Vec<String>>,

    #[serde(rename = "headHRName", default, deserialize_with = "lenient::text")]
    pub head_hr_name: Option<String>,
    #[serde(rename = "headHRContact", default, deserialize_with = "lenient::text")]
    pub head_hr_contact: Option<String>,
    #[serde(rename = "headHREmail", default, deserialize_with = "lenient::text")]
    pub head_hr_email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub first_contact_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub first_contact_email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub first_contact_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub second_contact_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub second_contact_email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub second_contact_phone: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub job_profile: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub job_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub min_hires: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub expected_hires: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub job_location: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub required_skills: Option<String>,

    #[serde(default, deserialize_with = "lenient::text_list")]
    pub eligible_degrees: Option<Vec<String>>,
    #[serde(rename = "eligibleBTechDepartments", default, deserialize_with = "lenient::text_list")]
    pub eligible_btech_departments: Option<Vec<String>>,
    #[serde(rename = "eligibleMTechDepartments", default, deserialize_with = "lenient::text_list")]
    pub eligible_mtech_departments: Option<Vec<String>>,
    #[serde(rename = "eligiblePhDDepartments", default, deserialize_with = "lenient::text_list")]
    pub eligible_phd_departments: Option<Vec<String>>,

    #[serde(rename = "jobDesignationBTech", default, deserialize_with = "lenient::text")]
    pub job_designation_btech: Option<String>,
    #[serde(rename = "jobDescBTech", default, deserialize_with = "lenient::text")]
    pub job_desc_btech: Option<String>,
    #[serde(rename = "jobDesignationMTech", default, deserialize_with = "lenient::text")]
    pub job_designation_mtech: Option<String>,
    #[serde(rename = "jobDescMTech", default, deserialize_with = "lenient::text")]
    pub job_desc_mtech: Option<String>,
    #[serde(rename = "jobDesignationPhD", default, deserialize_with = "lenient::text")]
    pub job_designation_phd: Option<String>,
    #[serde(rename = "jobDescPhD", default, deserialize_with = "lenient::text")]
    pub job_desc_phd: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub cgpa_cutoff: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub backlog_eligibility: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub mode_of_selection: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub selection_rounds: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub total_rounds: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub syllabus: Option<String>,
}

impl From<&JobNotificationFields> for CreateJobNotificationRequest {
    fn from(fields: &JobNotificationFields) -> Self {
        Self {
            email: Some(fields.email.clone()),
            company_name: Some(fields.company_name.clone()),
            about_company: Some(fields.about_company.clone()),
            correspondence_address: Some(fields.correspondence_address.clone()),
            date_of_establishment: fields.date_of_establishment.map(|d| d.to_string()),
            number_of_employees: fields.number_of_employees.map(|n| n.to_string()),
            social_media_link: fields.social_media_link.clone(),
            website: Some(fields.website.clone()),
            type_of_organization: Some(fields.type_of_organization.as_str().to_string()),
            mnc_head_office: fields.mnc_head_office.clone(),
            nature_of_business: Some(fields.nature_of_business.clone()),
            head_hr_name: Some(fields.head_hr_name.clone()),
            head_hr_contact: Some(fields.head_hr_contact.clone()),
            head_hr_email: Some(fields.head_hr_email.clone()),
            first_contact_name: Some(fields.first_contact_name.clone()),
            first_contact_email: Some(fields.first_contact_email.clone()),
            first_contact_phone: Some(fields.first_contact_phone.clone()),
            second_contact_name: Some(fields.second_contact_name.clone()),
            second_contact_email: Some(fields.second_contact_email.clone()),
            second_contact_phone: Some(fields.second_contact_phone.clone()),
            job_profile: Some(fields.job_profile.clone()),
            job_title: Some(fields.job_title.clone()),
            job_description: Some(fields.job_description.clone()),
            min_hires: Some(fields.min_hires.to_string()),
            expected_hires: Some(fields.expected_hires.to_string()),
            job_location: Some(fields.job_location.clone()),
            required_skills: Some(fields.required_skills.clone()),
            eligible_degrees: Some(fields.eligible_degrees.clone()),
            eligible_btech_departments: Some(fields.eligible_btech_departments.clone()),
            eligible_mtech_departments: Some(fields.eligible_mtech_departments.clone()),
            eligible_phd_departments: Some(fields.eligible_phd_departments.clone()),
            job_designation_btech: Some(fields.job_designation_btech.clone()),
            job_desc_btech: Some(fields.job_desc_btech.clone()),
            job_designation_mtech: Some(fields.job_designation_mtech.clone()),
            job_desc_mtech: Some(fields.job_desc_mtech.clone()),
            job_designation_phd: Some(fields.job_designation_phd.clone()),
            job_desc_phd: Some(fields.job_desc_phd.clone()),
            cgpa_cutoff: Some(fields.cgpa_cutoff.clone()),
            backlog_eligibility: Some(fields.backlog_eligibility.as_str().to_string()),
            mode_of_selection: Some(fields.mode_of_selection.as_str().to_string()),
            selection_rounds: Some(fields.selection_rounds.clone()),
            total_rounds: Some(fields.total_rounds.to_string()),
            syllabus: fields.syllabus.clone(),
        }
    }
}

/// Fields a company may change after submission. Workflow fields are
/// deliberately absent.
pub const UPDATABLE_FIELDS: [&str; 27] = [
    "aboutCompany",
    "correspondenceAddress",
    "dateOfEstablishment",
    "numberOfEmployees",
    "socialMediaLink",
    "headHRName",
    "headHRContact",
    "headHREmail",
    "firstContactName",
    "firstContactEmail",
    "firstContactPhone",
    "secondContactName",
    "secondContactEmail",
    "secondContactPhone",
    "jobProfile",
    "jobTitle",
    "jobDescription",
    "jobLocation",
    "requiredSkills",
    "jobDesignationBTech",
    "jobDescBTech",
    "jobDesignationMTech",
    "jobDescMTech",
    "jobDesignationPhD",
    "jobDescPhD",
    "cgpaCutoff",
    "syllabus",
];

/// Partial update restricted to [`UPDATABLE_FIELDS`].
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateJobNotificationRequest {
    #[serde(default, deserialize_with = "lenient::text")]
    pub about_company: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub correspondence_address: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date_of_establishment: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub number_of_employees: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub social_media_link: Option<String>,
    #[serde(rename = "headHRName", default, deserialize_with = "lenient::text")]
    pub head_hr_name: Option<String>,
    #[serde(rename = "headHRContact", default, deserialize_with = "lenient::text")]
    pub head_hr_contact: Option<String>,
    #[serde(rename = "headHREmail", default, deserialize_with = "lenient::text")]
    pub head_hr_email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub first_contact_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub first_contact_email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub first_contact_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub second_contact_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub second_contact_email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub second_contact_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub job_profile: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub job_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub job_location: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub required_skills: Option<String>,
    #[serde(rename = "jobDesignationBTech", default, deserialize_with = "lenient::text")]
    pub job_designation_btech: Option<String>,
    #[serde(rename = "jobDescBTech", default, deserialize_with = "lenient::text")]
    pub job_desc_btech: Option<String>,
    #[serde(rename = "jobDesignationMTech", default, deserialize_with = "lenient::text")]
    pub job_designation_mtech: Option<String>,
    #[serde(rename = "jobDescMTech", default, deserialize_with = "lenient::text")]
    pub job_desc_mtech: Option<String>,
    #[serde(rename = "jobDesignationPhD", default, deserialize_with = "lenient::text")]
    pub job_designation_phd: Option<String>,
    #[serde(rename = "jobDescPhD", default, deserialize_with = "lenient::text")]
    pub job_desc_phd: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub cgpa_cutoff: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub syllabus: Option<String>,
}

impl UpdateJobNotificationRequest {
    /// Overlays the provided fields onto an existing submission.
    pub fn apply_to(self, base: &mut CreateJobNotificationRequest) {
        fn set(target: &mut Option<String>, value: Option<String>) {
            if value.is_some() {
                *target = value;
            }
        }

        set(&mut base.about_company, self.about_company);
        set(&mut base.correspondence_address, self.correspondence_address);
        set(&mut base.date_of_establishment, self.date_of_establishment);
        set(&mut base.number_of_employees, self.number_of_employees);
        set(&mut base.social_media_link, self.social_media_link);
        set(&mut base.head_hr_name, self.head_hr_name);
        set(&mut base.head_hr_contact, self.head_hr_contact);
        set(&mut base.head_hr_email, self.head_hr_email);
        set(&mut base.first_contact_name, self.first_contact_name);
        set(&mut base.first_contact_email, self.first_contact_email);
        set(&mut base.first_contact_phone, self.first_contact_phone);
        set(&mut base.second_contact_name, self.second_contact_name);
        set(&mut base.second_contact_email, self.second_contact_email);
        set(&mut base.second_contact_phone, self.second_contact_phone);
        set(&mut base.job_profile, self.job_profile);
        set(&mut base.job_title, self.job_title);
        set(&mut base.job_description, self.job_description);
        set(&mut base.job_location, self.job_location);
        set(&mut base.required_skills, self.required_skills);
        set(&mut base.job_designation_btech, self.job_designation_btech);
        set(&mut base.job_desc_btech, self.job_desc_btech);
        set(&mut base.job_designation_mtech, self.job_designation_mtech);
        set(&mut base.job_desc_mtech, self.job_desc_mtech);
        set(&mut base.job_designation_phd, self.job_designation_phd);
        set(&mut base.job_desc_phd, self.job_desc_phd);
        set(&mut base.cgpa_cutoff, self.cgpa_cutoff);
        set(&mut base.syllabus, self.syllabus);
    }
}

/// Reviewer input for approve / reject / hold.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    #[serde(default, deserialize_with = "lenient::text")]
    pub reviewer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub review_notes: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreatedJobNotification {
    pub id: String,
    pub application_id: String,
    pub email: String,
    pub company_name: String,
    pub submission_date: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListJobNotificationsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub status: Option<String>,
    pub company_name: Option<String>,
    pub sort_by: Option<String>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}
