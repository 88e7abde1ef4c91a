use form_rules::listing::{JobListing, PageParams};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, TransactionBehavior};
use shared_types::{JobNotification, JobStatus};

use super::{
    is_record_id, order_by, paginate, search_key, timestamp_sql, Database, SqlFilter, StoreError,
    StoreResult,
};

const TABLE: &str = "job_notifications";

fn email_conflict(existing_id: Option<String>) -> StoreError {
    StoreError::Conflict {
        field: "email",
        message: "This email is already registered in the system".to_string(),
        existing_id,
    }
}

/// Translates UNIQUE violations that slipped past the pre-insert check.
fn constraint_error(err: rusqlite::Error) -> StoreError {
    if let rusqlite::Error::SqliteFailure(failure, Some(detail)) = &err {
        if failure.code == ErrorCode::ConstraintViolation {
            if detail.contains("job_notifications.email") {
                return email_conflict(None);
            }
            if detail.contains("job_notifications.application_id") {
                return StoreError::Conflict {
                    field: "applicationId",
                    message: "This application ID is already in use".to_string(),
                    existing_id: None,
                };
            }
        }
    }
    err.into()
}

fn decode(document: String) -> StoreResult<JobNotification> {
    Ok(serde_json::from_str(&document)?)
}

pub fn insert(conn: &Connection, record: &JobNotification) -> StoreResult<()> {
    let existing: Option<String> = conn
        .query_row(
            "SELECT id FROM job_notifications WHERE email = ?1",
            [&record.fields.email],
            |row| row.get(0),
        )
        .optional()?;
    if let Some(existing) = existing {
        return Err(email_conflict(Some(existing)));
    }

    let document = serde_json::to_string(record)?;
    conn.execute(
        "INSERT INTO job_notifications
         (id, application_id, email, company_name, company_key, status, is_active,
          submission_date, last_updated, document)
          VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            &record.id,
            &record.application_id,
            &record.fields.email,
            &record.fields.company_name,
            search_key(&record.fields.company_name),
            record.status.as_str(),
            record.is_active,
            timestamp_sql(&record.submission_date),
            timestamp_sql(&record.last_updated),
            document,
        ],
    )
    .map_err(constraint_error)?;

    Ok(())
}

pub fn fetch(conn: &Connection, id: &str) -> StoreResult<JobNotification> {
    if !is_record_id(id) {
        return Err(StoreError::NotFound);
    }
    let document: String = conn.query_row(
        "SELECT document FROM job_notifications WHERE id = ?1",
        [id],
        |row| row.get(0),
    )?;
    decode(document)
}

pub fn fetch_by_application_id(conn: &Connection, application_id: &str) -> StoreResult<JobNotification> {
    let document: String = conn.query_row(
        "SELECT document FROM job_notifications WHERE application_id = ?1",
        [application_id],
        |row| row.get(0),
    )?;
    decode(document)
}

/// Rewrites the stored document and its projected columns.
pub fn update(conn: &Connection, record: &JobNotification) -> StoreResult<()> {
    let document = serde_json::to_string(record)?;
    let changed = conn
        .execute(
            "UPDATE job_notifications
             SET company_name = ?1, company_key = ?2, status = ?3, is_active = ?4,
                 last_updated = ?5, document = ?6
             WHERE id = ?7",
            params![
                &record.fields.company_name,
                search_key(&record.fields.company_name),
                record.status.as_str(),
                record.is_active,
                timestamp_sql(&record.last_updated),
                document,
                &record.id,
            ],
        )
        .map_err(constraint_error)?;

    if changed == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

pub async fn create(db: &Database, record: JobNotification) -> StoreResult<JobNotification> {
    db.run(move |conn| {
        insert(conn, &record)?;
        Ok(record)
    })
    .await
}

pub async fn get(db: &Database, id: &str) -> StoreResult<JobNotification> {
    let id = id.to_string();
    db.run(move |conn| fetch(conn, &id)).await
}

pub async fn get_by_application_id(db: &Database, application_id: &str) -> StoreResult<JobNotification> {
    let application_id = application_id.to_string();
    db.run(move |conn| fetch_by_application_id(conn, &application_id))
        .await
}

/// Loads a record, lets `change` edit it and writes it back inside one
/// immediate transaction. Nothing is written when `change` fails.
pub async fn modify<F, E>(db: &Database, id: &str, change: F) -> Result<JobNotification, E>
where
    F: FnOnce(&mut JobNotification) -> Result<(), E> + Send + 'static,
    E: From<StoreError> + Send + 'static,
{
    let id = id.to_string();
    db.run(move |conn| {
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(StoreError::from)?;
        let mut record = fetch(&tx, &id)?;
        change(&mut record)?;
        update(&tx, &record)?;
        tx.commit().map_err(StoreError::from)?;
        Ok(record)
    })
    .await
}

pub async fn list(db: &Database, listing: &JobListing) -> StoreResult<(Vec<JobNotification>, u64)> {
    let mut filter = SqlFilter::new();
    if let Some(status) = listing.status {
        filter.bind("status = ?", status.as_str().to_string());
    }
    if let Some(company) = &listing.company_name {
        filter.bind("instr(company_key, ?) > 0", search_key(company));
    }
    let order = order_by(listing.sort.field, listing.sort.descending);
    paginate(db, TABLE, filter, order, listing.page).await
}

/// Approved notifications that have not been withdrawn
pub async fn list_active(db: &Database, page: PageParams) -> StoreResult<(Vec<JobNotification>, u64)> {
    let mut filter = SqlFilter::new();
    filter
        .clause("is_active = 1")
        .bind("status = ?", JobStatus::Approved.as_str().to_string());
    paginate(db, TABLE, filter, order_by("submissionDate", true), page).await
}

pub async fn list_pending(db: &Database, page: PageParams) -> StoreResult<(Vec<JobNotification>, u64)> {
    let mut filter = SqlFilter::new();
    filter.bind("status = ?", JobStatus::Pending.as_str().to_string());
    paginate(db, TABLE, filter, order_by("submissionDate", true), page).await
}

pub async fn list_by_company(
    db: &Database,
    term: &str,
    page: PageParams,
) -> StoreResult<(Vec<JobNotification>, u64)> {
    let mut filter = SqlFilter::new();
    filter
        .clause("is_active = 1")
        .bind("instr(company_key, ?) > 0", search_key(term));
    paginate(db, TABLE, filter, order_by("submissionDate", true), page).await
}
