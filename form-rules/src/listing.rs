//! Listing parameters: pagination, sorting and filters.
//!
//! Query strings arrive as raw text. Out-of-range or non-numeric values are
//! rejected, never clamped.

use shared_types::{
    FieldErrors, JobStatus, ListCourseFeedbackQuery, ListJobNotificationsQuery,
    ListPlacementFeedbackQuery, OfferStatus,
};
use thiserror::Error;

use crate::checks::filled;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

pub const JOB_SORT_FIELDS: &[&str] = &[
    "submissionDate",
    "-submissionDate",
    "companyName",
    "-companyName",
    "email",
    "-email",
];
pub const JOB_DEFAULT_SORT: &str = "-submissionDate";

pub const COURSE_FEEDBACK_SORT_FIELDS: &[&str] = &[
    "createdAt",
    "-createdAt",
    "courseCode",
    "-courseCode",
    "facultyName",
    "-facultyName",
];
pub const PLACEMENT_FEEDBACK_SORT_FIELDS: &[&str] = &[
    "createdAt",
    "-createdAt",
    "companyName",
    "-companyName",
];
pub const FEEDBACK_DEFAULT_SORT: &str = "-createdAt";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("Invalid pagination parameters")]
    Pagination(FieldErrors),
    #[error("Invalid search parameters")]
    Search(FieldErrors),
}

impl ListingError {
    pub fn errors(&self) -> &FieldErrors {
        match self {
            ListingError::Pagination(errors) | ListingError::Search(errors) => errors,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageParams {
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// Missing or blank values fall back to page 1 and limit 10.
pub fn parse_pagination(page: Option<&str>, limit: Option<&str>) -> Result<PageParams, ListingError> {
    let mut errors = FieldErrors::new();
    let mut params = PageParams::default();

    if let Some(raw) = filled(page) {
        match raw.trim().parse::<u32>() {
            Ok(n) if n >= 1 => params.page = n,
            _ => {
                errors.insert("page".into(), "Page must be a positive number".into());
            }
        }
    }

    if let Some(raw) = filled(limit) {
        match raw.trim().parse::<u32>() {
            Ok(n) if (1..=MAX_LIMIT).contains(&n) => params.limit = n,
            _ => {
                errors.insert("limit".into(), "Limit must be between 1 and 100".into());
            }
        }
    }

    if errors.is_empty() {
        Ok(params)
    } else {
        Err(ListingError::Pagination(errors))
    }
}

/// A sort key from an allow-list, `-` prefix meaning descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: &'static str,
    pub descending: bool,
}

fn sort_spec(key: &'static str) -> SortSpec {
    match key.strip_prefix('-') {
        Some(field) => SortSpec {
            field,
            descending: true,
        },
        None => SortSpec {
            field: key,
            descending: false,
        },
    }
}

pub fn parse_sort(
    raw: Option<&str>,
    allowed: &[&'static str],
    default: &'static str,
    errors: &mut FieldErrors,
) -> SortSpec {
    let Some(raw) = filled(raw) else {
        return sort_spec(default);
    };
    match allowed.iter().find(|key| **key == raw.trim()) {
        Some(key) => sort_spec(*key),
        None => {
            errors.insert(
                "sortBy".into(),
                format!("Sort field must be one of: {}", allowed.join(", ")),
            );
            sort_spec(default)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    pub page: PageParams,
    pub status: Option<JobStatus>,
    pub company_name: Option<String>,
    pub sort: SortSpec,
}

pub fn job_listing(query: &ListJobNotificationsQuery) -> Result<JobListing, ListingError> {
    let page = parse_pagination(query.page.as_deref(), query.limit.as_deref())?;
    let mut errors = FieldErrors::new();

    let status = match filled(query.status.as_deref()) {
        None => None,
        Some(raw) => {
            let status = JobStatus::from_label(raw);
            if status.is_none() {
                let labels: Vec<&str> = JobStatus::ALL.iter().map(|s| s.as_str()).collect();
                errors.insert(
                    "status".into(),
                    format!("Status must be one of: {}", labels.join(", ")),
                );
            }
            status
        }
    };

    let company_name = filled(query.company_name.as_deref()).map(|s| s.trim().to_string());
    if company_name.as_ref().is_some_and(|name| name.chars().count() > 200) {
        errors.insert(
            "companyName".into(),
            "Company name search cannot exceed 200 characters".into(),
        );
    }

    let sort = parse_sort(query.sort_by.as_deref(), JOB_SORT_FIELDS, JOB_DEFAULT_SORT, &mut errors);

    if !errors.is_empty() {
        return Err(ListingError::Search(errors));
    }
    Ok(JobListing {
        page,
        status,
        company_name,
        sort,
    })
}

/// Search term for the company-scoped listing.
pub fn company_term(raw: &str) -> Result<String, ListingError> {
    let term = raw.trim();
    let mut errors = FieldErrors::new();
    if term.is_empty() {
        errors.insert("companyName".into(), "Company name cannot be empty".into());
    } else if term.chars().count() > 200 {
        errors.insert(
            "companyName".into(),
            "Company name search cannot exceed 200 characters".into(),
        );
    }
    if errors.is_empty() {
        Ok(term.to_string())
    } else {
        Err(ListingError::Search(errors))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseFeedbackListing {
    pub page: PageParams,
    pub department: Option<String>,
    pub semester: Option<String>,
    pub academic_year: Option<String>,
    pub course_code: Option<String>,
    pub faculty_name: Option<String>,
    pub sort: SortSpec,
}

fn exact(value: &Option<String>) -> Option<String> {
    filled(value.as_deref()).map(|s| s.trim().to_string())
}

pub fn course_feedback_listing(query: &ListCourseFeedbackQuery) -> Result<CourseFeedbackListing, ListingError> {
    let page = parse_pagination(query.page.as_deref(), query.limit.as_deref())?;
    let mut errors = FieldErrors::new();

    let faculty_name = exact(&query.faculty_name);
    if faculty_name.as_ref().is_some_and(|name| name.chars().count() > 100) {
        errors.insert(
            "facultyName".into(),
            "Faculty name search cannot exceed 100 characters".into(),
        );
    }
    let sort = parse_sort(
        query.sort_by.as_deref(),
        COURSE_FEEDBACK_SORT_FIELDS,
        FEEDBACK_DEFAULT_SORT,
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(ListingError::Search(errors));
    }
    Ok(CourseFeedbackListing {
        page,
        department: exact(&query.department),
        semester: exact(&query.semester),
        academic_year: exact(&query.academic_year),
        course_code: exact(&query.course_code),
        faculty_name,
        sort,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementFeedbackListing {
    pub page: PageParams,
    pub branch: Option<String>,
    pub semester: Option<String>,
    pub academic_year: Option<String>,
    pub company_name: Option<String>,
    pub offer_status: Option<OfferStatus>,
    pub sort: SortSpec,
}

pub fn placement_feedback_listing(
    query: &ListPlacementFeedbackQuery,
) -> Result<PlacementFeedbackListing, ListingError> {
    let page = parse_pagination(query.page.as_deref(), query.limit.as_deref())?;
    let mut errors = FieldErrors::new();

    let offer_status = match filled(query.offer_status.as_deref()) {
        None => None,
        Some(raw) => {
            let status = OfferStatus::from_label(raw.trim());
            if status.is_none() {
                errors.insert(
                    "offerStatus".into(),
                    "Offer status must be one of: Selected, Rejected, Pending".into(),
                );
            }
            status
        }
    };
    let company_name = exact(&query.company_name);
    if company_name.as_ref().is_some_and(|name| name.chars().count() > 200) {
        errors.insert(
            "companyName".into(),
            "Company name search cannot exceed 200 characters".into(),
        );
    }
    let sort = parse_sort(
        query.sort_by.as_deref(),
        PLACEMENT_FEEDBACK_SORT_FIELDS,
        FEEDBACK_DEFAULT_SORT,
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(ListingError::Search(errors));
    }
    Ok(PlacementFeedbackListing {
        page,
        branch: exact(&query.branch),
        semester: exact(&query.semester),
        academic_year: exact(&query.academic_year),
        company_name,
        offer_status,
        sort,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        assert_eq!(parse_pagination(None, None).unwrap(), PageParams { page: 1, limit: 10 });
        assert_eq!(parse_pagination(Some(""), Some(" ")).unwrap(), PageParams::default());
    }

    #[test]
    fn test_pagination_rejects_out_of_range() {
        let err = parse_pagination(Some("0"), Some("101")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid pagination parameters");
        assert_eq!(err.errors()["page"], "Page must be a positive number");
        assert_eq!(err.errors()["limit"], "Limit must be between 1 and 100");

        assert!(parse_pagination(Some("abc"), None).is_err());
        assert!(parse_pagination(None, Some("-5")).is_err());
    }

    #[test]
    fn test_offset() {
        let params = parse_pagination(Some("3"), Some("10")).unwrap();
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn test_sort_allow_list() {
        let mut errors = FieldErrors::new();
        let sort = parse_sort(Some("-companyName"), JOB_SORT_FIELDS, JOB_DEFAULT_SORT, &mut errors);
        assert_eq!(sort, SortSpec { field: "companyName", descending: true });
        assert!(errors.is_empty());

        let sort = parse_sort(Some("status"), JOB_SORT_FIELDS, JOB_DEFAULT_SORT, &mut errors);
        assert_eq!(sort.field, "submissionDate");
        assert!(errors["sortBy"].starts_with("Sort field must be one of: submissionDate"));
    }

    #[test]
    fn test_job_listing_filters() {
        let query = ListJobNotificationsQuery {
            status: Some("On Hold".into()),
            company_name: Some(" acme ".into()),
            ..Default::default()
        };
        let listing = job_listing(&query).unwrap();
        assert_eq!(listing.status, Some(JobStatus::OnHold));
        assert_eq!(listing.company_name.as_deref(), Some("acme"));
        assert_eq!(listing.sort, SortSpec { field: "submissionDate", descending: true });

        let query = ListJobNotificationsQuery {
            status: Some("Closed".into()),
            ..Default::default()
        };
        let err = job_listing(&query).unwrap_err();
        assert!(matches!(err, ListingError::Search(_)));
        assert!(err.errors()["status"].contains("Under Review"));
    }

    #[test]
    fn test_pagination_errors_reported_before_search_errors() {
        let query = ListJobNotificationsQuery {
            page: Some("0".into()),
            sort_by: Some("bogus".into()),
            ..Default::default()
        };
        assert!(matches!(job_listing(&query), Err(ListingError::Pagination(_))));
    }

    #[test]
    fn test_company_term() {
        assert_eq!(company_term("  Acme ").unwrap(), "Acme");
        assert!(company_term("   ").is_err());
    }

    #[test]
    fn test_feedback_listing_sort_default() {
        let listing = course_feedback_listing(&ListCourseFeedbackQuery::default()).unwrap();
        assert_eq!(listing.sort, SortSpec { field: "createdAt", descending: true });

        let query = ListPlacementFeedbackQuery {
            offer_status: Some("Maybe".into()),
            ..Default::default()
        };
        assert!(placement_feedback_listing(&query).is_err());
    }
}
