use form_rules::listing::PlacementFeedbackListing;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use shared_types::PlacementFeedback;

use super::{
    order_by, paginate, search_key, timestamp_sql, Database, SqlFilter, StoreError, StoreResult,
};

const TABLE: &str = "placement_feedback";

pub fn insert(conn: &Connection, feedback: &PlacementFeedback) -> StoreResult<()> {
    let fields = &feedback.fields;
    let key = search_key(&fields.company_name);

    let existing: Option<String> = conn
        .query_row(
            "SELECT id FROM placement_feedback
             WHERE enrollment_number = ?1 AND company_key = ?2 AND academic_year = ?3",
            params![&fields.enrollment_number, &key, &fields.academic_year],
            |row| row.get(0),
        )
        .optional()?;
    if let Some(existing) = existing {
        return Err(StoreError::Conflict {
            field: "duplicateId",
            message: existing.clone(),
            existing_id: Some(existing),
        });
    }

    let document = serde_json::to_string(feedback)?;
    conn.execute(
        "INSERT INTO placement_feedback
         (id, enrollment_number, company_name, company_key, academic_year, branch,
          semester, offer_status, created_at, document)
          VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            &feedback.id,
            &fields.enrollment_number,
            &fields.company_name,
            key,
            &fields.academic_year,
            &fields.branch,
            &fields.semester,
            fields.offer_status.as_str(),
            timestamp_sql(&feedback.created_at),
            document,
        ],
    )?;

    Ok(())
}

pub async fn create(db: &Database, feedback: PlacementFeedback) -> StoreResult<PlacementFeedback> {
    db.run(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        insert(&tx, &feedback)?;
        tx.commit()?;
        Ok(feedback)
    })
    .await
}

pub async fn list(
    db: &Database,
    listing: &PlacementFeedbackListing,
) -> StoreResult<(Vec<PlacementFeedback>, u64)> {
    let mut filter = SqlFilter::new();
    if let Some(branch) = &listing.branch {
        filter.bind("branch = ?", branch.clone());
    }
    if let Some(semester) = &listing.semester {
        filter.bind("semester = ?", semester.clone());
    }
    if let Some(year) = &listing.academic_year {
        filter.bind("academic_year = ?", year.clone());
    }
    if let Some(company) = &listing.company_name {
        filter.bind("instr(company_key, ?) > 0", search_key(company));
    }
    if let Some(status) = listing.offer_status {
        filter.bind("offer_status = ?", status.as_str().to_string());
    }
    let order = order_by(listing.sort.field, listing.sort.descending);
    paginate(db, TABLE, filter, order, listing.page).await
}
