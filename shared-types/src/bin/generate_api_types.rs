use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions consumed by the portal forms
    let mut types = Vec::new();

    // Envelope and listing types
    types.push(clean_type(ApiResponse::<()>::export_to_string()?));
    types.push(clean_type(PaginationInfo::export_to_string()?));
    types.push(clean_type(Paginated::<()>::export_to_string()?));
    types.push(clean_type(ValidationReport::export_to_string()?));
    types.push(clean_type(PageQuery::export_to_string()?));

    // Job notification types
    types.push(clean_type(JobStatus::export_to_string()?));
    types.push(clean_type(OrganizationType::export_to_string()?));
    types.push(clean_type(BacklogEligibility::export_to_string()?));
    types.push(clean_type(SelectionMode::export_to_string()?));
    types.push(clean_type(JobNotificationFields::export_to_string()?));
    types.push(clean_type(JobNotification::export_to_string()?));
    types.push(clean_type(CreateJobNotificationRequest::export_to_string()?));
    types.push(clean_type(UpdateJobNotificationRequest::export_to_string()?));
    types.push(clean_type(CreatedJobNotification::export_to_string()?));
    types.push(clean_type(ReviewRequest::export_to_string()?));
    types.push(clean_type(ListJobNotificationsQuery::export_to_string()?));

    // Course feedback types
    types.push(clean_type(FacilityRating::export_to_string()?));
    types.push(clean_type(FacilityRatings::export_to_string()?));
    types.push(clean_type(CourseFeedbackFields::export_to_string()?));
    types.push(clean_type(CourseFeedback::export_to_string()?));
    types.push(clean_type(CreateCourseFeedbackRequest::export_to_string()?));
    types.push(clean_type(CreatedCourseFeedback::export_to_string()?));
    types.push(clean_type(ListCourseFeedbackQuery::export_to_string()?));

    // Placement feedback types
    types.push(clean_type(OfferStatus::export_to_string()?));
    types.push(clean_type(RecruitmentRatings::export_to_string()?));
    types.push(clean_type(PlacementFeedbackFields::export_to_string()?));
    types.push(clean_type(PlacementFeedback::export_to_string()?));
    types.push(clean_type(CreatePlacementFeedbackRequest::export_to_string()?));
    types.push(clean_type(CreatedPlacementFeedback::export_to_string()?));
    types.push(clean_type(ListPlacementFeedbackQuery::export_to_string()?));

    let output_dir = Path::new("../web/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

/// All types land in one file, so cross-type imports are dropped.
fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
