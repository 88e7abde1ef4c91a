use form_rules::listing::CourseFeedbackListing;
use rusqlite::{params, Connection, OptionalExtension};
use shared_types::CourseFeedback;

use super::{
    order_by, paginate, search_key, timestamp_sql, Database, SqlFilter, StoreError, StoreResult,
};

const TABLE: &str = "course_feedback";

/// Feedback is write-once per student, course and academic year.
pub fn insert(conn: &Connection, feedback: &CourseFeedback) -> StoreResult<()> {
    let fields = &feedback.fields;
    let existing: Option<String> = conn
        .query_row(
            "SELECT id FROM course_feedback
             WHERE student_id = ?1 AND course_code = ?2 AND academic_year = ?3",
            params![&fields.student_id, &fields.course_code, &fields.academic_year],
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
        "INSERT INTO course_feedback
         (id, student_id, email, course_code, academic_year, department, semester,
          faculty_name, faculty_key, created_at, document)
          VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            &feedback.id,
            &fields.student_id,
            &fields.email,
            &fields.course_code,
            &fields.academic_year,
            &fields.department,
            &fields.semester,
            &fields.faculty_name,
            search_key(&fields.faculty_name),
            timestamp_sql(&feedback.created_at),
            document,
        ],
    )?;

    Ok(())
}

pub async fn create(db: &Database, feedback: CourseFeedback) -> StoreResult<CourseFeedback> {
    db.run(move |conn| {
        // The duplicate check and insert must not interleave with another submission
        let tx = conn.transaction_with_behavior(rusqlite::TransactionBehavior::Immediate)?;
        insert(&tx, &feedback)?;
        tx.commit()?;
        Ok(feedback)
    })
    .await
}

pub async fn list(
    db: &Database,
    listing: &CourseFeedbackListing,
) -> StoreResult<(Vec<CourseFeedback>, u64)> {
    let mut filter = SqlFilter::new();
    if let Some(department) = &listing.department {
        filter.bind("department = ?", department.clone());
    }
    if let Some(semester) = &listing.semester {
        filter.bind("semester = ?", semester.clone());
    }
    if let Some(year) = &listing.academic_year {
        filter.bind("academic_year = ?", year.clone());
    }
    if let Some(code) = &listing.course_code {
        filter.bind("course_code = ?", code.clone());
    }
    if let Some(faculty) = &listing.faculty_name {
        filter.bind("instr(faculty_key, ?) > 0", search_key(faculty));
    }
    let order = order_by(listing.sort.field, listing.sort.descending);
    paginate(db, TABLE, filter, order, listing.page).await
}
