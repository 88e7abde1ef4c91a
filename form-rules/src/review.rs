use shared_types::{FieldErrors, JobStatus, ReviewRequest};

use crate::checks::{filled, FieldCheck};

/// Reviewer-initiated status changes on a job notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Reject,
    Hold,
}

impl ReviewAction {
    pub fn target_status(&self) -> JobStatus {
        match self {
            ReviewAction::Approve => JobStatus::Approved,
            ReviewAction::Reject => JobStatus::Rejected,
            ReviewAction::Hold => JobStatus::OnHold,
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            ReviewAction::Approve => "approved",
            ReviewAction::Reject => "rejected",
            ReviewAction::Hold => "put on hold",
        }
    }
}

/// Trimmed reviewer input that passed the rules for one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewInput {
    pub reviewer_name: String,
    pub review_notes: String,
}

pub fn validate_review(action: ReviewAction, req: &ReviewRequest) -> Result<ReviewInput, FieldErrors> {
    let mut check = FieldCheck::new();

    check.text(
        "reviewerName",
        req.reviewer_name.as_deref(),
        "Reviewer name cannot be empty",
        150,
        "Reviewer name cannot exceed 150 characters",
    );

    if action == ReviewAction::Reject && filled(req.review_notes.as_deref()).is_none() {
        check.fail("reviewNotes", "Please provide a reason for rejection");
    }
    check.optional_text(
        "reviewNotes",
        req.review_notes.as_deref(),
        1000,
        "Review notes cannot exceed 1000 characters",
    );

    let errors = check.finish();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ReviewInput {
        reviewer_name: req.reviewer_name.as_deref().unwrap_or_default().trim().to_string(),
        review_notes: req.review_notes.as_deref().unwrap_or_default().trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, notes: Option<&str>) -> ReviewRequest {
        ReviewRequest {
            reviewer_name: name.map(str::to_string),
            review_notes: notes.map(str::to_string),
        }
    }

    #[test]
    fn test_reviewer_required_for_every_action() {
        for action in [ReviewAction::Approve, ReviewAction::Reject, ReviewAction::Hold] {
            let errors = validate_review(action, &request(Some("  "), Some("fine"))).unwrap_err();
            assert_eq!(errors["reviewerName"], "Reviewer name cannot be empty");
        }
    }

    #[test]
    fn test_reject_requires_notes() {
        let errors = validate_review(ReviewAction::Reject, &request(Some("Dean"), None)).unwrap_err();
        assert_eq!(errors["reviewNotes"], "Please provide a reason for rejection");
        assert!(!errors.contains_key("reviewerName"));
    }

    #[test]
    fn test_hold_and_approve_allow_empty_notes() {
        let input = validate_review(ReviewAction::Hold, &request(Some(" Dean "), None)).unwrap();
        assert_eq!(input.reviewer_name, "Dean");
        assert_eq!(input.review_notes, "");
        assert!(validate_review(ReviewAction::Approve, &request(Some("Dean"), Some(""))).is_ok());
    }

    #[test]
    fn test_notes_length_cap() {
        let notes = "n".repeat(1001);
        let errors = validate_review(ReviewAction::Approve, &request(Some("Dean"), Some(notes.as_str()))).unwrap_err();
        assert_eq!(errors["reviewNotes"], "Review notes cannot exceed 1000 characters");
    }

    #[test]
    fn test_target_status() {
        assert_eq!(ReviewAction::Hold.target_status(), JobStatus::OnHold);
        assert_eq!(ReviewAction::Reject.target_status(), JobStatus::Rejected);
    }
}
