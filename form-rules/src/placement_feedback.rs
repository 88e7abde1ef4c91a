use shared_types::{
    CreatePlacementFeedbackRequest, FieldErrors, OfferStatus, PlacementFeedbackFields,
    RecruitmentRatings,
};

use crate::checks::{filled, FieldCheck};
use crate::{patterns, sanitize, single_error, vocab, ValidationOutcome};

fn rating_fields(req: &CreatePlacementFeedbackRequest) -> [(&'static str, Option<&str>, &'static str); 11] {
    [
        ("overallExperience", req.overall_experience.as_deref(), "Overall experience rating is required"),
        ("recruitmentProcess", req.recruitment_process.as_deref(), "Recruitment process feedback is required"),
        ("companyReputationRating", req.company_reputation_rating.as_deref(), "Company reputation rating is required"),
        ("companyWorkCultureRating", req.company_work_culture_rating.as_deref(), "Work culture rating is required"),
        ("recruitmentProcessTransparency", req.recruitment_process_transparency.as_deref(), "Transparency rating is required"),
        ("communicationQuality", req.communication_quality.as_deref(), "Communication quality rating is required"),
        ("technicalInterviewQuality", req.technical_interview_quality.as_deref(), "Technical interview quality is required"),
        ("hrInterviewExperience", req.hr_interview_experience.as_deref(), "HR interview experience is required"),
        ("interviewerBehavior", req.interviewer_behavior.as_deref(), "Interviewer behavior rating is required"),
        ("collegePreparationSupport", req.college_preparation_support.as_deref(), "College support rating is required"),
        ("placementCellSupport", req.placement_cell_support.as_deref(), "Placement cell support rating is required"),
    ]
}

pub fn validate(req: &CreatePlacementFeedbackRequest) -> ValidationOutcome {
    let mut check = FieldCheck::new();

    if let Some(email) = check.required("studentEmail", req.student_email.as_deref(), "Email is required") {
        check.email("studentEmail", Some(email), "Invalid email format");
    }
    if let Some(name) = check.required("studentName", req.student_name.as_deref(), "Name is required") {
        check.length(
            "studentName",
            name,
            Some((3, "Name must be at least 3 characters")),
            Some((100, "Name cannot exceed 100 characters")),
        );
    }
    check.text(
        "enrollmentNumber",
        req.enrollment_number.as_deref(),
        "Enrollment number is required",
        30,
        "Enrollment number cannot exceed 30 characters",
    );
    check.one_of(
        "branch",
        req.branch.as_deref(),
        vocab::BRANCHES,
        "Branch/Department is required",
    );
    check.one_of(
        "semester",
        req.semester.as_deref(),
        vocab::ORDINAL_SEMESTERS,
        "Semester is required",
    );
    check.one_of(
        "academicYear",
        req.academic_year.as_deref(),
        vocab::PLACEMENT_ACADEMIC_YEARS,
        "Academic year is required",
    );

    check.text(
        "companyName",
        req.company_name.as_deref(),
        "Company name is required",
        200,
        "Company name cannot exceed 200 characters",
    );
    check.text(
        "positionApplied",
        req.position_applied.as_deref(),
        "Position applied is required",
        200,
        "Position applied cannot exceed 200 characters",
    );

    for (field, value, missing) in rating_fields(req) {
        check.rating(field, value, missing);
    }

    check.one_of(
        "technicalInterviewDifficulty",
        req.technical_interview_difficulty.as_deref(),
        vocab::INTERVIEW_DIFFICULTY,
        "Technical interview difficulty is required",
    );
    check.one_of(
        "feedbackReceivedFromCompany",
        req.feedback_received_from_company.as_deref(),
        vocab::COMPANY_FEEDBACK,
        "Please specify feedback received",
    );

    match req.offer_status.as_deref().and_then(OfferStatus::from_label) {
        None => check.fail("offerStatus", "Offer status is required"),
        Some(OfferStatus::Selected) => {
            check.required(
                "packageOffered",
                req.package_offered.as_deref(),
                "Package offered is required",
            );
            match filled(req.joining_date.as_deref()) {
                None => check.fail("joiningDate", "Joining date is required"),
                Some(date) if patterns::parse_date(date).is_none() => {
                    check.fail("joiningDate", "Invalid date format")
                }
                Some(_) => {}
            }
        }
        Some(_) => {}
    }

    let long_texts = [
        ("strengths", req.strengths.as_deref(), "Strengths section is required", 20, "Strengths must be at least 20 characters"),
        ("improvements", req.improvements.as_deref(), "Improvements section is required", 20, "Improvements must be at least 20 characters"),
        ("adviceForJuniors", req.advice_for_juniors.as_deref(), "Advice for juniors is required", 30, "Advice must be at least 30 characters"),
    ];
    for (field, value, missing, min, too_short) in long_texts {
        if let Some(text) = check.required(field, value, missing) {
            check.length(
                field,
                text,
                Some((min, too_short)),
                Some((1000, "Cannot exceed 1000 characters")),
            );
        }
    }

    check.one_of(
        "wouldRecommend",
        req.would_recommend.as_deref(),
        vocab::RECOMMENDATION,
        "Recommendation status is required",
    );
    check.optional_text(
        "additionalComments",
        req.additional_comments.as_deref(),
        1500,
        "Additional comments cannot exceed 1500 characters",
    );

    check.one_of(
        "canBeContacted",
        req.can_be_contacted.as_deref(),
        vocab::YES_NO,
        "Please specify contact preference",
    );
    match filled(req.alternate_phone.as_deref()) {
        None if req.can_be_contacted.as_deref() == Some("Yes") => {
            check.fail("alternatePhone", "Phone number is required")
        }
        Some(phone) if !patterns::is_valid_phone(phone.trim()) => {
            check.fail("alternatePhone", "Invalid phone format")
        }
        _ => {}
    }

    if let Some(url) = filled(req.linkedin_profile.as_deref()) {
        if !patterns::is_valid_url(url.trim()) {
            check.fail("linkedinProfile", "LinkedIn profile must be a valid URL");
        }
    }

    ValidationOutcome::from_errors(check.finish())
}

pub fn sanitize(req: &CreatePlacementFeedbackRequest) -> CreatePlacementFeedbackRequest {
    CreatePlacementFeedbackRequest {
        student_email: sanitize::email(&req.student_email),
        student_name: sanitize::collapse(&req.student_name),
        enrollment_number: sanitize::trim(&req.enrollment_number),
        company_name: sanitize::collapse(&req.company_name),
        position_applied: sanitize::collapse(&req.position_applied),
        package_offered: sanitize::non_empty(&req.package_offered),
        joining_date: sanitize::non_empty(&req.joining_date),
        strengths: sanitize::trim(&req.strengths),
        improvements: sanitize::trim(&req.improvements),
        advice_for_juniors: sanitize::trim(&req.advice_for_juniors),
        additional_comments: sanitize::trim(&req.additional_comments),
        alternate_phone: sanitize::non_empty(&req.alternate_phone),
        linkedin_profile: sanitize::non_empty(&req.linkedin_profile),
        ..req.clone()
    }
}

pub fn prepare(req: &CreatePlacementFeedbackRequest) -> Result<PlacementFeedbackFields, FieldErrors> {
    validate(req).into_result()?;
    let req = sanitize(req);

    let mut check = FieldCheck::new();
    let scores = rating_fields(&req).map(|(field, value, missing)| check.rating(field, value, missing));
    let [
        Some(overall_experience),
        Some(recruitment_process),
        Some(company_reputation_rating),
        Some(company_work_culture_rating),
        Some(recruitment_process_transparency),
        Some(communication_quality),
        Some(technical_interview_quality),
        Some(hr_interview_experience),
        Some(interviewer_behavior),
        Some(college_preparation_support),
        Some(placement_cell_support),
    ] = scores
    else {
        return Err(check.finish());
    };

    let offer_status = req
        .offer_status
        .as_deref()
        .and_then(OfferStatus::from_label)
        .ok_or_else(|| single_error("offerStatus", "Offer status is required"))?;
    let selected = offer_status == OfferStatus::Selected;

    Ok(PlacementFeedbackFields {
        student_email: req.student_email.unwrap_or_default(),
        student_name: req.student_name.unwrap_or_default(),
        enrollment_number: req.enrollment_number.unwrap_or_default(),
        branch: req.branch.unwrap_or_default(),
        semester: req.semester.unwrap_or_default(),
        academic_year: req.academic_year.unwrap_or_default(),
        company_name: req.company_name.unwrap_or_default(),
        position_applied: req.position_applied.unwrap_or_default(),
        ratings: RecruitmentRatings {
            overall_experience,
            recruitment_process,
            company_reputation_rating,
            company_work_culture_rating,
            recruitment_process_transparency,
            communication_quality,
            technical_interview_quality,
            hr_interview_experience,
            interviewer_behavior,
            college_preparation_support,
            placement_cell_support,
        },
        technical_interview_difficulty: req.technical_interview_difficulty.unwrap_or_default(),
        feedback_received_from_company: req.feedback_received_from_company.unwrap_or_default(),
        offer_status,
        package_offered: req.package_offered.filter(|_| selected),
        joining_date: req.joining_date.filter(|_| selected),
        strengths: req.strengths.unwrap_or_default(),
        improvements: req.improvements.unwrap_or_default(),
        advice_for_juniors: req.advice_for_juniors.unwrap_or_default(),
        would_recommend: req.would_recommend.unwrap_or_default(),
        additional_comments: req.additional_comments.unwrap_or_default(),
        can_be_contacted: req.can_be_contacted.as_deref() == Some("Yes"),
        alternate_phone: req.alternate_phone,
        linkedin_profile: req.linkedin_profile,
    })
}
