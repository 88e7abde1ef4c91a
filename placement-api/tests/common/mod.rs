#![allow(dead_code, unused_macros, unused_imports)]

use std::sync::Arc;

use placement_api::config::DatabaseConfig;
use placement_api::Database;
use serde_json::Value;
use tempfile::TempDir;

/// A fresh database file that lives as long as the returned directory.
pub fn test_database() -> (TempDir, Arc<Database>) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(&dir.path().join("portal.sqlite3"), &DatabaseConfig::default()).unwrap();
    (dir, Arc::new(db))
}

/// Builds the full application around `$db`, wired as `main` wires it.
macro_rules! init_app {
    ($db:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($db.clone()))
                .app_data(actix_web::web::Data::new(
                    placement_api::helpers::response::ErrorReporting::default(),
                ))
                .app_data(placement_api::json_config())
                .app_data(placement_api::query_config())
                .configure(placement_api::configure),
        )
        .await
    };
}

/// Sends `$req` and returns the status with the decoded JSON body.
macro_rules! send {
    ($app:expr, $req:expr) => {{
        let response = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = response.status();
        let body: serde_json::Value = actix_web::test::read_body_json(response).await;
        (status, body)
    }};
}

pub(crate) use init_app;
pub(crate) use send;

pub fn job_payload(email: &str) -> Value {
    serde_json::to_value(form_rules::fixtures::job_notification_request(email)).unwrap()
}

pub fn course_feedback_payload() -> Value {
    serde_json::to_value(form_rules::fixtures::course_feedback_request()).unwrap()
}

pub fn placement_feedback_payload() -> Value {
    serde_json::to_value(form_rules::fixtures::placement_feedback_request()).unwrap()
}

pub fn review(reviewer: &str, notes: &str) -> Value {
    serde_json::json!({ "reviewerName": reviewer, "reviewNotes": notes })
}

pub fn timestamp(value: &Value) -> chrono::DateTime<chrono::Utc> {
    value
        .as_str()
        .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .unwrap()
}

pub fn item_ids(body: &Value) -> Vec<String> {
    body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}
