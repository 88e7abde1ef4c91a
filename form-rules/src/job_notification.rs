//! Company job notification rules.
//!
//! The form is split into six sections. Each section is checked on its own
//! and the error maps are merged; field names never collide across sections.

use shared_types::{
    BacklogEligibility, CreateJobNotificationRequest, FieldErrors, JobNotificationFields,
    OrganizationType, SelectionMode,
};

use crate::checks::{filled, parse_int, FieldCheck};
use crate::{merge_errors, patterns, sanitize, single_error, vocab, ValidationOutcome};

pub fn validate(req: &CreateJobNotificationRequest) -> ValidationOutcome {
    ValidationOutcome::from_errors(merge_errors([
        validate_company_info(req),
        validate_hr_info(req),
        validate_job_details(req),
        validate_eligibility(req),
        validate_role_specific(req),
        validate_selection_process(req),
    ]))
}

pub fn validate_company_info(req: &CreateJobNotificationRequest) -> FieldErrors {
    let mut check = FieldCheck::new();

    check.email(
        "email",
        req.email.as_deref(),
        "Valid email is required (e.g., company@domain.com)",
    );

    if let Some(name) = check.required("companyName", req.company_name.as_deref(), "Company name is required") {
        check.length(
            "companyName",
            name,
            Some((3, "Company name must be at least 3 characters")),
            Some((200, "Company name cannot exceed 200 characters")),
        );
    }

    if let Some(about) = check.required(
        "aboutCompany",
        req.about_company.as_deref(),
        "About company description is required",
    ) {
        check.length(
            "aboutCompany",
            about,
            Some((20, "About company must be at least 20 characters")),
            Some((2000, "About company cannot exceed 2000 characters")),
        );
    }

    if let Some(address) = check.required(
        "correspondenceAddress",
        req.correspondence_address.as_deref(),
        "Correspondence address is required",
    ) {
        check.length(
            "correspondenceAddress",
            address,
            Some((10, "Correspondence address must be at least 10 characters")),
            Some((500, "Correspondence address cannot exceed 500 characters")),
        );
    }

    check.url(
        "website",
        req.website.as_deref(),
        "Valid website URL is required (e.g., https://www.company.com)",
    );

    let org_type = req
        .type_of_organization
        .as_deref()
        .and_then(OrganizationType::from_label);
    match org_type {
        None => check.fail("typeOfOrganization", "Valid type of organization is required"),
        Some(t) if t.is_mnc() && filled(req.mnc_head_office.as_deref()).is_none() => {
            check.fail("mncHeadOffice", "MNC head office location is required")
        }
        Some(_) => {}
    }

    check.selection(
        "natureOfBusiness",
        req.nature_of_business.as_deref(),
        vocab::NATURE_OF_BUSINESS,
        "Select at least one nature of business",
        "Invalid nature of business selected",
    );

    if let Some(date) = filled(req.date_of_establishment.as_deref()) {
        if patterns::parse_date(date).is_none() {
            check.fail("dateOfEstablishment", "Invalid date format");
        }
    }

    if filled(req.number_of_employees.as_deref()).is_some() {
        match parse_int(req.number_of_employees.as_deref()) {
            Some(n) if n >= 1 && n <= i64::from(u32::MAX) => {}
            _ => check.fail(
                "numberOfEmployees",
                "Number of employees must be a positive number",
            ),
        }
    }

    if let Some(link) = filled(req.social_media_link.as_deref()) {
        if !patterns::is_valid_url(link.trim()) {
            check.fail("socialMediaLink", "Social media link must be a valid URL");
        }
    }

    check.finish()
}

pub fn validate_hr_info(req: &CreateJobNotificationRequest) -> FieldErrors {
    let mut check = FieldCheck::new();

    check.text(
        "headHRName",
        req.head_hr_name.as_deref(),
        "Head HR name is required",
        150,
        "Head HR name cannot exceed 150 characters",
    );
    check.phone(
        "headHRContact",
        req.head_hr_contact.as_deref(),
        "Valid 10-15 digit contact number is required",
    );
    check.email(
        "headHREmail",
        req.head_hr_email.as_deref(),
        "Valid Head HR email is required",
    );

    check.text(
        "firstContactName",
        req.first_contact_name.as_deref(),
        "First contact name is required",
        150,
        "First contact name cannot exceed 150 characters",
    );
    check.email(
        "firstContactEmail",
        req.first_contact_email.as_deref(),
        "Valid first contact email is required",
    );
    check.phone(
        "firstContactPhone",
        req.first_contact_phone.as_deref(),
        "Valid first contact phone is required",
    );

    check.text(
        "secondContactName",
        req.second_contact_name.as_deref(),
        "Second contact name is required",
        150,
        "Second contact name cannot exceed 150 characters",
    );
    check.email(
        "secondContactEmail",
        req.second_contact_email.as_deref(),
        "Valid second contact email is required",
    );
    check.phone(
        "secondContactPhone",
        req.second_contact_phone.as_deref(),
        "Valid second contact phone is required",
    );

    check.finish()
}

pub fn validate_job_details(req: &CreateJobNotificationRequest) -> FieldErrors {
    let mut check = FieldCheck::new();

    check.text(
        "jobProfile",
        req.job_profile.as_deref(),
        "Job profile is required",
        200,
        "Job profile cannot exceed 200 characters",
    );
    check.text(
        "jobTitle",
        req.job_title.as_deref(),
        "Job title is required",
        200,
        "Job title cannot exceed 200 characters",
    );

    if let Some(description) = check.required(
        "jobDescription",
        req.job_description.as_deref(),
        "Job description is required",
    ) {
        check.length(
            "jobDescription",
            description,
            Some((30, "Job description must be at least 30 characters")),
            Some((2000, "Job description cannot exceed 2000 characters")),
        );
    }

    let min_hires = parse_int(req.min_hires.as_deref()).filter(|n| (0..=i64::from(u32::MAX)).contains(n));
    if min_hires.is_none() {
        check.fail(
            "minHires",
            "Valid minimum hires (non-negative number) is required",
        );
    }

    match parse_int(req.expected_hires.as_deref()) {
        Some(expected) if expected >= 0 && expected <= i64::from(u32::MAX) => {
            if min_hires.is_some_and(|min| expected < min) {
                check.fail(
                    "expectedHires",
                    "Expected hires must be greater than or equal to minimum hires",
                );
            }
        }
        _ => check.fail(
            "expectedHires",
            "Expected hires must be greater than or equal to minimum hires",
        ),
    }

    check.text(
        "jobLocation",
        req.job_location.as_deref(),
        "Job location is required",
        300,
        "Job location cannot exceed 300 characters",
    );
    check.text(
        "requiredSkills",
        req.required_skills.as_deref(),
        "Required skills are required",
        1500,
        "Required skills cannot exceed 1500 characters",
    );

    check.finish()
}

pub fn validate_eligibility(req: &CreateJobNotificationRequest) -> FieldErrors {
    let mut check = FieldCheck::new();

    check.selection(
        "eligibleDegrees",
        req.eligible_degrees.as_deref(),
        vocab::ELIGIBLE_DEGREES,
        "Select at least one eligible degree",
        "Invalid degree(s) selected",
    );
    check.selection(
        "eligibleBTechDepartments",
        req.eligible_btech_departments.as_deref(),
        vocab::BTECH_DEPARTMENTS,
        "Select at least one B.Tech department",
        "Invalid B.Tech department(s) selected",
    );
    check.selection(
        "eligibleMTechDepartments",
        req.eligible_mtech_departments.as_deref(),
        vocab::MTECH_DEPARTMENTS,
        "Select at least one M.Tech department",
        "Invalid M.Tech department(s) selected",
    );
    check.selection(
        "eligiblePhDDepartments",
        req.eligible_phd_departments.as_deref(),
        vocab::PHD_DEPARTMENTS,
        "Select at least one PhD department",
        "Invalid PhD department(s) selected",
    );

    check.finish()
}

pub fn validate_role_specific(req: &CreateJobNotificationRequest) -> FieldErrors {
    let mut check = FieldCheck::new();

    let roles = [
        (
            "B.Tech",
            ("jobDesignationBTech", req.job_designation_btech.as_deref()),
            ("jobDescBTech", req.job_desc_btech.as_deref()),
        ),
        (
            "M.Tech",
            ("jobDesignationMTech", req.job_designation_mtech.as_deref()),
            ("jobDescMTech", req.job_desc_mtech.as_deref()),
        ),
        (
            "PhD",
            ("jobDesignationPhD", req.job_designation_phd.as_deref()),
            ("jobDescPhD", req.job_desc_phd.as_deref()),
        ),
    ];

    for (degree, (designation_field, designation), (desc_field, desc)) in roles {
        check.text(
            designation_field,
            designation,
            &format!("{degree} job designation is required"),
            200,
            &format!("{degree} job designation cannot exceed 200 characters"),
        );
        if let Some(desc) = check.required(
            desc_field,
            desc,
            &format!("{degree} job description is required"),
        ) {
            check.length(
                desc_field,
                desc,
                Some((20, format!("{degree} job description must be at least 20 characters").as_str())),
                Some((1000, format!("{degree} job description cannot exceed 1000 characters").as_str())),
            );
        }
    }

    check.finish()
}

pub fn validate_selection_process(req: &CreateJobNotificationRequest) -> FieldErrors {
    let mut check = FieldCheck::new();

    check.text(
        "cgpaCutoff",
        req.cgpa_cutoff.as_deref(),
        "CGPA cutoff is required",
        100,
        "CGPA cutoff cannot exceed 100 characters",
    );
    check.one_of(
        "backlogEligibility",
        req.backlog_eligibility.as_deref(),
        vocab::YES_NO,
        "Backlog eligibility must be Yes or No",
    );
    if req
        .mode_of_selection
        .as_deref()
        .and_then(SelectionMode::from_label)
        .is_none()
    {
        check.fail(
            "modeOfSelection",
            "Valid mode of selection is required (Virtual, Campus Visit, or Hybrid)",
        );
    }

    let total_rounds = parse_int(req.total_rounds.as_deref()).filter(|n| (1..=10).contains(n));
    if total_rounds.is_none() {
        check.fail("totalRounds", "Total rounds must be between 1 and 10");
    }

    match req.selection_rounds.as_deref() {
        None | Some([]) => check.fail("selectionRounds", "Select at least one selection round"),
        Some(rounds) => {
            if rounds
                .iter()
                .any(|r| !vocab::SELECTION_ROUNDS.contains(&r.as_str()))
            {
                check.fail("selectionRounds", "Invalid selection round(s) selected");
            } else if rounds
                .iter()
                .enumerate()
                .any(|(i, r)| rounds[..i].contains(r))
            {
                check.fail("selectionRounds", "Selection rounds cannot repeat");
            } else if total_rounds.is_some_and(|total| rounds.len() as i64 > total) {
                check.fail(
                    "selectionRounds",
                    "Number of selection rounds cannot exceed total rounds",
                );
            }
        }
    }

    check.optional_text(
        "syllabus",
        req.syllabus.as_deref(),
        2000,
        "Syllabus cannot exceed 2000 characters",
    );

    check.finish()
}

/// Normalizes free text and email addresses. Selections, numbers and
/// enumerated values pass through untouched.
pub fn sanitize(req: &CreateJobNotificationRequest) -> CreateJobNotificationRequest {
    CreateJobNotificationRequest {
        email: sanitize::email(&req.email),
        company_name: sanitize::collapse(&req.company_name),
        about_company: sanitize::collapse(&req.about_company),
        correspondence_address: sanitize::collapse(&req.correspondence_address),
        date_of_establishment: sanitize::non_empty(&req.date_of_establishment),
        number_of_employees: sanitize::non_empty(&req.number_of_employees),
        social_media_link: sanitize::non_empty(&req.social_media_link),
        website: sanitize::trim(&req.website),
        mnc_head_office: sanitize::non_empty(&req.mnc_head_office),
        head_hr_name: sanitize::collapse(&req.head_hr_name),
        head_hr_contact: sanitize::trim(&req.head_hr_contact),
        head_hr_email: sanitize::email(&req.head_hr_email),
        first_contact_name: sanitize::collapse(&req.first_contact_name),
        first_contact_email: sanitize::email(&req.first_contact_email),
        first_contact_phone: sanitize::trim(&req.first_contact_phone),
        second_contact_name: sanitize::collapse(&req.second_contact_name),
        second_contact_email: sanitize::email(&req.second_contact_email),
        second_contact_phone: sanitize::trim(&req.second_contact_phone),
        job_profile: sanitize::collapse(&req.job_profile),
        job_title: sanitize::collapse(&req.job_title),
        job_description: sanitize::trim(&req.job_description),
        job_location: sanitize::trim(&req.job_location),
        required_skills: sanitize::trim(&req.required_skills),
        job_designation_btech: sanitize::trim(&req.job_designation_btech),
        job_desc_btech: sanitize::trim(&req.job_desc_btech),
        job_designation_mtech: sanitize::trim(&req.job_designation_mtech),
        job_desc_mtech: sanitize::trim(&req.job_desc_mtech),
        job_designation_phd: sanitize::trim(&req.job_designation_phd),
        job_desc_phd: sanitize::trim(&req.job_desc_phd),
        cgpa_cutoff: sanitize::trim(&req.cgpa_cutoff),
        syllabus: sanitize::non_empty(&req.syllabus),
        ..req.clone()
    }
}

/// Validates, sanitizes and converts a raw submission into stored content.
pub fn prepare(req: &CreateJobNotificationRequest) -> Result<JobNotificationFields, FieldErrors> {
    validate(req).into_result()?;
    into_fields(sanitize(req))
}

fn into_fields(req: CreateJobNotificationRequest) -> Result<JobNotificationFields, FieldErrors> {
    let type_of_organization = req
        .type_of_organization
        .as_deref()
        .and_then(OrganizationType::from_label)
        .ok_or_else(|| single_error("typeOfOrganization", "Valid type of organization is required"))?;
    let backlog_eligibility = req
        .backlog_eligibility
        .as_deref()
        .and_then(BacklogEligibility::from_label)
        .ok_or_else(|| single_error("backlogEligibility", "Backlog eligibility must be Yes or No"))?;
    let mode_of_selection = req
        .mode_of_selection
        .as_deref()
        .and_then(SelectionMode::from_label)
        .ok_or_else(|| single_error("modeOfSelection", "Valid mode of selection is required"))?;

    let min_hires = number(&req.min_hires, "minHires")?;
    let expected_hires = number(&req.expected_hires, "expectedHires")?;
    let total_rounds = number(&req.total_rounds, "totalRounds")?;
    let number_of_employees = match req.number_of_employees {
        Some(_) => Some(number(&req.number_of_employees, "numberOfEmployees")?),
        None => None,
    };

    Ok(JobNotificationFields {
        email: req.email.unwrap_or_default(),
        company_name: req.company_name.unwrap_or_default(),
        about_company: req.about_company.unwrap_or_default(),
        correspondence_address: req.correspondence_address.unwrap_or_default(),
        date_of_establishment: req
            .date_of_establishment
            .as_deref()
            .and_then(patterns::parse_date),
        number_of_employees,
        social_media_link: req.social_media_link,
        website: req.website.unwrap_or_default(),
        mnc_head_office: req.mnc_head_office,
        type_of_organization,
        nature_of_business: req.nature_of_business.unwrap_or_default(),
        head_hr_name: req.head_hr_name.unwrap_or_default(),
        head_hr_contact: req.head_hr_contact.unwrap_or_default(),
        head_hr_email: req.head_hr_email.unwrap_or_default(),
        first_contact_name: req.first_contact_name.unwrap_or_default(),
        first_contact_email: req.first_contact_email.unwrap_or_default(),
        first_contact_phone: req.first_contact_phone.unwrap_or_default(),
        second_contact_name: req.second_contact_name.unwrap_or_default(),
        second_contact_email: req.second_contact_email.unwrap_or_default(),
        second_contact_phone: req.second_contact_phone.unwrap_or_default(),
        job_profile: req.job_profile.unwrap_or_default(),
        job_title: req.job_title.unwrap_or_default(),
        job_description: req.job_description.unwrap_or_default(),
        min_hires,
        expected_hires,
        job_location: req.job_location.unwrap_or_default(),
        required_skills: req.required_skills.unwrap_or_default(),
        eligible_degrees: req.eligible_degrees.unwrap_or_default(),
        eligible_btech_departments: req.eligible_btech_departments.unwrap_or_default(),
        eligible_mtech_departments: req.eligible_mtech_departments.unwrap_or_default(),
        eligible_phd_departments: req.eligible_phd_departments.unwrap_or_default(),
        job_designation_btech: req.job_designation_btech.unwrap_or_default(),
        job_desc_btech: req.job_desc_btech.unwrap_or_default(),
        job_designation_mtech: req.job_designation_mtech.unwrap_or_default(),
        job_desc_mtech: req.job_desc_mtech.unwrap_or_default(),
        job_designation_phd: req.job_designation_phd.unwrap_or_default(),
        job_desc_phd: req.job_desc_phd.unwrap_or_default(),
        cgpa_cutoff: req.cgpa_cutoff.unwrap_or_default(),
        backlog_eligibility,
        mode_of_selection,
        selection_rounds: req.selection_rounds.unwrap_or_default(),
        total_rounds,
        syllabus: req.syllabus,
    })
}

fn number<T: TryFrom<i64>>(value: &Option<String>, field: &str) -> Result<T, FieldErrors> {
    parse_int(value.as_deref())
        .and_then(|n| T::try_from(n).ok())
        .ok_or_else(|| single_error(field, "Must be a whole number"))
}
