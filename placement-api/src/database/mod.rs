pub mod course_feedback;
pub mod job_notifications;
pub mod migrations;
pub mod placement_feedback;

use form_rules::listing::PageParams;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::DatabaseConfig;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("conflict on {field}: {message}")]
    Conflict {
        field: &'static str,
        message: String,
        existing_id: Option<String>,
    },
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound,
            other => StoreError::Storage(other.to_string()),
        }
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(err: r2d2::Error) -> Self {
        StoreError::Storage(format!("connection pool: {err}"))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Storage(format!("document encoding: {err}"))
    }
}

impl From<tokio::task::JoinError> for StoreError {
    fn from(err: tokio::task::JoinError) -> Self {
        StoreError::Storage(format!("blocking task: {err}"))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Pooled SQLite storage shared by every handler.
pub struct Database {
    pool: Arc<Pool<SqliteConnectionManager>>,
}

impl Database {
    /// Open the database file, run migrations and build the connection pool
    pub fn new(db_path: &Path, settings: &DatabaseConfig) -> anyhow::Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Migrate on a dedicated connection so pooled connections see the schema
        {
            let conn = Connection::open(db_path)?;
            migrations::run_migrations(&conn)?;
        }

        let busy_timeout = Duration::from_secs(settings.busy_timeout_secs);
        let manager = SqliteConnectionManager::file(db_path).with_init(move |conn| {
            conn.busy_timeout(busy_timeout)?;
            Ok(())
        });

        let pool = Pool::builder()
            .max_size(settings.max_connections.max(1))
            .build(manager)?;

        Ok(Database {
            pool: Arc::new(pool),
        })
    }

    /// Runs blocking storage work on the blocking thread pool with a pooled
    /// connection.
    pub async fn run<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Connection) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: From<StoreError> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(StoreError::from)?;
            f(&mut conn)
        })
        .await
        .map_err(|e| E::from(StoreError::from(e)))?
    }

    pub async fn ping(&self) -> StoreResult<()> {
        self.run(|conn| {
            conn.query_row("SELECT 1", [], |_| Ok(()))?;
            Ok(())
        })
        .await
    }
}

/// WHERE clause assembled from optional filters. Clauses are static SQL
/// with `?` placeholders; values are always bound.
#[derive(Debug, Clone, Default)]
pub struct SqlFilter {
    clauses: Vec<&'static str>,
    values: Vec<Value>,
}

impl SqlFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clause(&mut self, clause: &'static str) -> &mut Self {
        self.clauses.push(clause);
        self
    }

    pub fn bind(&mut self, clause: &'static str, value: impl Into<Value>) -> &mut Self {
        self.clauses.push(clause);
        self.values.push(value.into());
        self
    }

    fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }
}

pub fn count_rows(conn: &Connection, table: &str, filter: &SqlFilter) -> StoreResult<u64> {
    let sql = format!("SELECT COUNT(*) FROM {table}{}", filter.where_sql());
    let count: i64 = conn.query_row(&sql, params_from_iter(filter.values.iter()), |row| row.get(0))?;
    Ok(count.max(0) as u64)
}

pub fn fetch_documents<T: DeserializeOwned>(
    conn: &Connection,
    table: &str,
    filter: &SqlFilter,
    order_by: &str,
    page: PageParams,
) -> StoreResult<Vec<T>> {
    let sql = format!(
        "SELECT document FROM {table}{} ORDER BY {order_by} LIMIT ? OFFSET ?",
        filter.where_sql()
    );
    let mut values = filter.values.clone();
    values.push(Value::Integer(i64::from(page.limit)));
    values.push(Value::Integer(page.offset() as i64));

    let mut stmt = conn.prepare(&sql)?;
    let documents = stmt
        .query_map(params_from_iter(values.iter()), |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    documents
        .iter()
        .map(|doc| serde_json::from_str(doc).map_err(StoreError::from))
        .collect()
}

/// Counts and fetches one page concurrently. The two reads are independent,
/// so the total may lag concurrent writes.
pub async fn paginate<T>(
    db: &Database,
    table: &'static str,
    filter: SqlFilter,
    order_by: String,
    page: PageParams,
) -> StoreResult<(Vec<T>, u64)>
where
    T: DeserializeOwned + Send + 'static,
{
    let count_filter = filter.clone();
    let count = db.run(move |conn| count_rows(conn, table, &count_filter));
    let items = db.run(move |conn| fetch_documents(conn, table, &filter, &order_by, page));
    let (total, items) = tokio::try_join!(count, items)?;
    Ok((items, total))
}

/// Maps an allow-listed sort key to its column.
pub fn order_by(field: &str, descending: bool) -> String {
    let column = match field {
        "submissionDate" => "submission_date",
        "companyName" => "company_name",
        "email" => "email",
        "courseCode" => "course_code",
        "facultyName" => "faculty_name",
        _ => "created_at",
    };
    let direction = if descending { "DESC" } else { "ASC" };
    format!("{column} {direction}, rowid {direction}")
}

/// Lowercased, trimmed form of a name used for case-insensitive matching.
/// SQLite's `lower()` folds ASCII only, so keys and search terms are both
/// folded here.
pub fn search_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Store identifiers are UUIDs; anything else cannot match a record.
pub fn is_record_id(id: &str) -> bool {
    uuid::Uuid::parse_str(id).is_ok()
}

pub fn timestamp_sql(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
pub(crate) fn test_database() -> (tempfile::TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(&dir.path().join("portal.sqlite3"), &DatabaseConfig::default()).unwrap();
    (dir, db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_by_whitelist() {
        assert_eq!(order_by("submissionDate", true), "submission_date DESC, rowid DESC");
        assert_eq!(order_by("companyName", false), "company_name ASC, rowid ASC");
        assert_eq!(order_by("anything; DROP", false), "created_at ASC, rowid ASC");
    }

    #[test]
    fn test_where_sql() {
        let mut filter = SqlFilter::new();
        assert_eq!(filter.where_sql(), "");
        filter.clause("is_active = 1").bind("status = ?", "Pending".to_string());
        assert_eq!(filter.where_sql(), " WHERE is_active = 1 AND status = ?");
        assert_eq!(filter.values.len(), 1);
    }

    #[test]
    fn test_record_id_format() {
        assert!(is_record_id("8f14e45f-ceea-4f6a-9f0b-1c2d3e4f5a6b"));
        assert!(!is_record_id("123"));
        assert!(!is_record_id(""));
    }

    #[test]
    fn test_search_key_folds_unicode() {
        assert_eq!(search_key("  Acme Robotics "), "acme robotics");
        assert_eq!(search_key("  ÉLECTRICITÉ Systèmes "), "électricité systèmes");
    }

    #[tokio::test]
    async fn test_ping() {
        let (_dir, db) = test_database();
        db.ping().await.unwrap();
    }
}
