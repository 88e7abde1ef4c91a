use shared_types::{
    CourseFeedbackFields, CreateCourseFeedbackRequest, FacilityRating, FacilityRatings,
    FieldErrors,
};

use crate::checks::{filled, FieldCheck};
use crate::{sanitize, ValidationOutcome};
use crate::vocab;

/// Facility fields with the wording used in their error messages.
const FACILITIES: [(&str, &str); 9] = [
    ("placementSupport", "placement support"),
    ("libraryFacilities", "library facilities"),
    ("labFacilities", "lab facilities"),
    ("hostelFacilities", "hostel facilities"),
    ("sportsFacilities", "sports facilities"),
    ("careerGuidance", "career guidance"),
    ("extracurricular", "extracurricular activities"),
    ("campusEnvironment", "campus environment"),
    ("adminSupport", "administrative support"),
];

fn facility_values(req: &CreateCourseFeedbackRequest) -> [Option<&str>; 9] {
    [
        req.placement_support.as_deref(),
        req.library_facilities.as_deref(),
        req.lab_facilities.as_deref(),
        req.hostel_facilities.as_deref(),
        req.sports_facilities.as_deref(),
        req.career_guidance.as_deref(),
        req.extracurricular.as_deref(),
        req.campus_environment.as_deref(),
        req.admin_support.as_deref(),
    ]
}

pub fn validate(req: &CreateCourseFeedbackRequest) -> ValidationOutcome {
    let mut check = FieldCheck::new();

    check.text(
        "studentId",
        req.student_id.as_deref(),
        "Student ID is required",
        20,
        "Student ID cannot exceed 20 characters",
    );
    if let Some(name) = check.required("studentName", req.student_name.as_deref(), "Student name is required") {
        check.length(
            "studentName",
            name,
            Some((3, "Student name must be at least 3 characters")),
            Some((100, "Student name cannot exceed 100 characters")),
        );
    }
    if let Some(email) = check.required("email", req.email.as_deref(), "Email is required") {
        check.email("email", Some(email), "Invalid email format");
        check.length("email", email, None, Some((100, "Email cannot exceed 100 characters")));
    }

    check.one_of(
        "department",
        req.department.as_deref(),
        vocab::COURSE_DEPARTMENTS,
        "Please select a valid department",
    );
    check.one_of(
        "semester",
        req.semester.as_deref(),
        vocab::COURSE_SEMESTERS,
        "Semester must be between 1 and 8",
    );
    check.one_of(
        "degreeProgram",
        req.degree_program.as_deref(),
        vocab::DEGREE_PROGRAMS,
        "Please select a valid degree program",
    );
    check.one_of(
        "academicYear",
        req.academic_year.as_deref(),
        vocab::COURSE_ACADEMIC_YEARS,
        "Please select a valid academic year",
    );

    check.text(
        "courseCode",
        req.course_code.as_deref(),
        "Course code is required",
        20,
        "Course code cannot exceed 20 characters",
    );
    check.text(
        "courseName",
        req.course_name.as_deref(),
        "Course name is required",
        100,
        "Course name cannot exceed 100 characters",
    );
    check.text(
        "facultyName",
        req.faculty_name.as_deref(),
        "Faculty name is required",
        100,
        "Faculty name cannot exceed 100 characters",
    );

    check.rating("ratingTeaching", req.rating_teaching.as_deref(), "Teaching rating is required");
    check.rating("ratingContent", req.rating_content.as_deref(), "Content rating is required");
    check.rating(
        "ratingEvaluation",
        req.rating_evaluation.as_deref(),
        "Evaluation rating is required",
    );
    check.rating(
        "ratingFacilities",
        req.rating_facilities.as_deref(),
        "Facilities rating is required",
    );
    check.rating("ratingOverall", req.rating_overall.as_deref(), "Overall rating is required");

    if let Some(strengths) = check.required("strengths", req.strengths.as_deref(), "Strengths feedback is required") {
        check.length(
            "strengths",
            strengths,
            Some((20, "Strengths must be at least 20 characters")),
            Some((1000, "Strengths cannot exceed 1000 characters")),
        );
    }
    if let Some(improvements) = check.required(
        "improvements",
        req.improvements.as_deref(),
        "Improvements feedback is required",
    ) {
        check.length(
            "improvements",
            improvements,
            Some((20, "Improvements must be at least 20 characters")),
            Some((1000, "Improvements cannot exceed 1000 characters")),
        );
    }
    check.optional_text(
        "suggestions",
        req.suggestions.as_deref(),
        1000,
        "Suggestions cannot exceed 1000 characters",
    );

    for ((field, label), value) in FACILITIES.iter().zip(facility_values(req)) {
        if let Some(value) = filled(value) {
            if FacilityRating::from_label(value).is_none() {
                check.fail(field, format!("Please select a valid rating for {label}"));
            }
        }
    }

    check.optional_text(
        "additionalComments",
        req.additional_comments.as_deref(),
        1500,
        "Additional comments cannot exceed 1500 characters",
    );

    if let Some(areas) = req.recommend_improvements.as_deref() {
        if areas
            .iter()
            .any(|a| !vocab::IMPROVEMENT_AREAS.contains(&a.as_str()))
        {
            check.fail("recommendImprovements", "Invalid improvement area(s) selected");
        }
    }

    ValidationOutcome::from_errors(check.finish())
}

pub fn sanitize(req: &CreateCourseFeedbackRequest) -> CreateCourseFeedbackRequest {
    CreateCourseFeedbackRequest {
        student_id: sanitize::trim(&req.student_id),
        student_name: sanitize::collapse(&req.student_name),
        email: sanitize::email(&req.email),
        course_code: sanitize::trim(&req.course_code),
        course_name: sanitize::collapse(&req.course_name),
        faculty_name: sanitize::collapse(&req.faculty_name),
        strengths: sanitize::trim(&req.strengths),
        improvements: sanitize::trim(&req.improvements),
        suggestions: sanitize::trim(&req.suggestions),
        additional_comments: sanitize::trim(&req.additional_comments),
        ..req.clone()
    }
}

pub fn prepare(req: &CreateCourseFeedbackRequest) -> Result<CourseFeedbackFields, FieldErrors> {
    validate(req).into_result()?;
    let req = sanitize(req);

    // Re-running the rating checks yields the parsed values; the payload is
    // already known to be valid here.
    let mut check = FieldCheck::new();
    let rating_teaching = check.rating("ratingTeaching", req.rating_teaching.as_deref(), "");
    let rating_content = check.rating("ratingContent", req.rating_content.as_deref(), "");
    let rating_evaluation = check.rating("ratingEvaluation", req.rating_evaluation.as_deref(), "");
    let rating_facilities = check.rating("ratingFacilities", req.rating_facilities.as_deref(), "");
    let rating_overall = check.rating("ratingOverall", req.rating_overall.as_deref(), "");
    let (
        Some(rating_teaching),
        Some(rating_content),
        Some(rating_evaluation),
        Some(rating_facilities),
        Some(rating_overall),
    ) = (
        rating_teaching,
        rating_content,
        rating_evaluation,
        rating_facilities,
        rating_overall,
    )
    else {
        return Err(check.finish());
    };

    let [placement_support, library_facilities, lab_facilities, hostel_facilities, sports_facilities, career_guidance, extracurricular, campus_environment, admin_support] =
        facility_values(&req).map(|value| {
            filled(value)
                .and_then(FacilityRating::from_label)
                .unwrap_or_default()
        });

    Ok(CourseFeedbackFields {
        student_id: req.student_id.unwrap_or_default(),
        student_name: req.student_name.unwrap_or_default(),
        email: req.email.unwrap_or_default(),
        department: req.department.unwrap_or_default(),
        semester: req.semester.unwrap_or_default(),
        degree_program: req.degree_program.unwrap_or_default(),
        academic_year: req.academic_year.unwrap_or_default(),
        course_code: req.course_code.unwrap_or_default(),
        course_name: req.course_name.unwrap_or_default(),
        faculty_name: req.faculty_name.unwrap_or_default(),
        rating_teaching,
        rating_content,
        rating_evaluation,
        rating_facilities,
        rating_overall,
        strengths: req.strengths.unwrap_or_default(),
        improvements: req.improvements.unwrap_or_default(),
        suggestions: req.suggestions.unwrap_or_default(),
        facilities: FacilityRatings {
            placement_support,
            library_facilities,
            lab_facilities,
            hostel_facilities,
            sports_facilities,
            career_guidance,
            extracurricular,
            campus_environment,
            admin_support,
        },
        additional_comments: req.additional_comments.unwrap_or_default(),
        recommend_improvements: req.recommend_improvements.unwrap_or_default(),
        willing_to_participate: req.willing_to_participate.unwrap_or(false),
        contact_for_followup: req.contact_for_followup.unwrap_or(false),
    })
}
