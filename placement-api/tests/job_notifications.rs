mod common;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use serde_json::{json, Value};

use common::{init_app, item_ids, job_payload, review, send, test_database, timestamp};

#[actix_web::test]
async fn test_create_and_fetch() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    let (status, body) = send!(
        app,
        TestRequest::post()
            .uri("/job-notifications")
            .set_json(job_payload("  HR@Acme.Example.com "))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Job notification created successfully. Our team will review and contact you soon."
    );
    assert_eq!(body["data"]["email"], "hr@acme.example.com");
    assert_eq!(body["data"]["companyName"], "Acme Robotics");
    assert!(body["data"]["applicationId"].as_str().unwrap().starts_with("JNF"));
    assert!(body["timestamp"].is_string());

    let id = body["data"]["id"].as_str().unwrap().to_string();
    let (status, body) = send!(app, TestRequest::get().uri(&format!("/job-notifications/{id}")));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Pending");
    assert_eq!(body["data"]["isActive"], true);
    assert_eq!(body["data"]["totalRounds"], 3);
    assert_eq!(body["data"]["reviewedBy"], "");
}

#[actix_web::test]
async fn test_duplicate_email_leaves_first_record_unchanged() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    let (status, created) = send!(
        app,
        TestRequest::post()
            .uri("/job-notifications")
            .set_json(job_payload("hr@acme.example.com"))
    );
    assert_eq!(status, StatusCode::CREATED);
    let id = created["data"]["id"].as_str().unwrap().to_string();
    let (_, before) = send!(app, TestRequest::get().uri(&format!("/job-notifications/{id}")));

    let mut second = job_payload("HR@acme.example.com");
    second["companyName"] = json!("Other Company Ltd");
    let (status, body) = send!(app, TestRequest::post().uri("/job-notifications").set_json(second));
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Email already registered. Please use a different email address."
    );
    assert_eq!(
        body["errors"]["email"],
        "This email is already registered in the system"
    );

    let (_, after) = send!(app, TestRequest::get().uri(&format!("/job-notifications/{id}")));
    assert_eq!(before["data"], after["data"]);

    let (_, listing) = send!(app, TestRequest::get().uri("/job-notifications"));
    assert_eq!(listing["data"]["pagination"]["totalItems"], 1);
}

#[actix_web::test]
async fn test_selection_rounds_must_match_total() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    let mut payload = job_payload("hr@acme.example.com");
    payload["selectionRounds"] = json!([
        "Aptitude Test",
        "Group Discussion",
        "Personal Interview",
        "HR Round"
    ]);
    let (status, body) = send!(
        app,
        TestRequest::post().uri("/job-notifications").set_json(&payload)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed. Please check the errors below.");
    assert!(body["errors"]["selectionRounds"].is_string());

    payload["selectionRounds"] = json!(["Aptitude Test", "Group Discussion", "HR Round"]);
    let (status, _) = send!(
        app,
        TestRequest::post().uri("/job-notifications").set_json(&payload)
    );
    assert_eq!(status, StatusCode::CREATED);
}

#[actix_web::test]
async fn test_non_text_list_entries_fail_validation() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    let mut payload = job_payload("hr@acme.example.com");
    payload["natureOfBusiness"] = json!(["IT/Software", {"evil": true}, null]);
    payload["totalRounds"] = json!(1);
    payload["selectionRounds"] = json!(["Aptitude Test", null, [], {}]);
    let (status, body) = send!(
        app,
        TestRequest::post().uri("/job-notifications").set_json(&payload)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["natureOfBusiness"], "Invalid nature of business selected");
    assert_eq!(body["errors"]["selectionRounds"], "Invalid selection round(s) selected");

    let (_, listing) = send!(app, TestRequest::get().uri("/job-notifications"));
    assert_eq!(listing["data"]["pagination"]["totalItems"], 0);
}

#[actix_web::test]
async fn test_whole_decimal_numbers_accepted() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    let mut payload = job_payload("hr@acme.example.com");
    payload["minHires"] = json!(2.0);
    payload["expectedHires"] = json!("5.0");
    payload["totalRounds"] = json!(3.0);
    let (status, body) = send!(
        app,
        TestRequest::post().uri("/job-notifications").set_json(&payload)
    );
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();
    let (_, body) = send!(app, TestRequest::get().uri(&format!("/job-notifications/{id}")));
    assert_eq!(body["data"]["minHires"], 2);
    assert_eq!(body["data"]["expectedHires"], 5);
    assert_eq!(body["data"]["totalRounds"], 3);

    let mut fractional = job_payload("jobs@globex.example.com");
    fractional["totalRounds"] = json!(2.5);
    let (status, body) = send!(
        app,
        TestRequest::post().uri("/job-notifications").set_json(&fractional)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["totalRounds"], "Total rounds must be between 1 and 10");
}

#[actix_web::test]
async fn test_validate_does_not_store() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    let (status, body) = send!(
        app,
        TestRequest::post()
            .uri("/job-notifications/validate")
            .set_json(job_payload("hr@acme.example.com"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isValid"], true);

    let mut payload = job_payload("not-an-email");
    payload["jobTitle"] = Value::Null;
    let (status, body) = send!(
        app,
        TestRequest::post().uri("/job-notifications/validate").set_json(payload)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["email"].is_string());
    assert!(body["errors"]["jobTitle"].is_string());

    let (_, listing) = send!(app, TestRequest::get().uri("/job-notifications"));
    assert_eq!(listing["data"]["pagination"]["totalItems"], 0);
}

#[actix_web::test]
async fn test_malformed_body_is_bad_request() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    let (status, body) = send!(
        app,
        TestRequest::post()
            .uri("/job-notifications")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"email\": ")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid request body");
}

#[actix_web::test]
async fn test_reject_requires_reason() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    let (_, created) = send!(
        app,
        TestRequest::post()
            .uri("/job-notifications")
            .set_json(job_payload("hr@acme.example.com"))
    );
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send!(
        app,
        TestRequest::patch()
            .uri(&format!("/job-notifications/{id}/reject"))
            .set_json(review("Placement Officer", "   "))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Rejection reason is required");
    assert!(body["errors"]["reviewNotes"].is_string());

    let (status, body) = send!(
        app,
        TestRequest::patch()
            .uri(&format!("/job-notifications/{id}/hold"))
            .set_json(json!({ "reviewNotes": "Waiting on documents" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Reviewer name is required");

    let (_, body) = send!(app, TestRequest::get().uri(&format!("/job-notifications/{id}")));
    assert_eq!(body["data"]["status"], "Pending");
    assert_eq!(body["data"]["reviewedBy"], "");
}

#[actix_web::test]
async fn test_approve_records_reviewer_and_locks() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    let (_, created) = send!(
        app,
        TestRequest::post()
            .uri("/job-notifications")
            .set_json(job_payload("hr@acme.example.com"))
    );
    let id = created["data"]["id"].as_str().unwrap().to_string();
    let (_, before) = send!(app, TestRequest::get().uri(&format!("/job-notifications/{id}")));

    let (status, body) = send!(
        app,
        TestRequest::patch()
            .uri(&format!("/job-notifications/{id}/approve"))
            .set_json(review("Dr. Placement Officer", "Strong fit for CSE"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Job notification approved successfully");
    assert_eq!(body["data"]["status"], "Approved");
    assert_eq!(body["data"]["reviewedBy"], "Dr. Placement Officer");
    assert_eq!(body["data"]["reviewNotes"], "Strong fit for CSE");
    assert!(timestamp(&body["data"]["lastUpdated"]) > timestamp(&before["data"]["lastUpdated"]));

    let (status, body) = send!(
        app,
        TestRequest::patch()
            .uri(&format!("/job-notifications/{id}/reject"))
            .set_json(review("Someone Else", "Changed my mind"))
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Job notification has already been reviewed");
    assert_eq!(body["errors"]["status"], "Job notification is already Approved");
}

#[actix_web::test]
async fn test_hold_then_reject() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    let (_, created) = send!(
        app,
        TestRequest::post()
            .uri("/job-notifications")
            .set_json(job_payload("hr@acme.example.com"))
    );
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send!(
        app,
        TestRequest::patch()
            .uri(&format!("/job-notifications/{id}/hold"))
            .set_json(review("Officer", ""))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Job notification put on hold successfully");
    assert_eq!(body["data"]["status"], "On Hold");

    let (status, body) = send!(
        app,
        TestRequest::patch()
            .uri(&format!("/job-notifications/{id}/reject"))
            .set_json(review("Officer", "Stipend below the institute minimum"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Rejected");
}

#[actix_web::test]
async fn test_twenty_five_records_paginate_into_three_pages() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    for i in 0..25 {
        let (status, _) = send!(
            app,
            TestRequest::post()
                .uri("/job-notifications")
                .set_json(job_payload(&format!("hr{i}@acme.example.com")))
        );
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, first) = send!(app, TestRequest::get().uri("/job-notifications?page=1&limit=10"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["message"], "Job notifications retrieved successfully");
    assert_eq!(first["data"]["items"].as_array().unwrap().len(), 10);
    assert_eq!(first["data"]["pagination"]["totalPages"], 3);
    assert_eq!(first["data"]["pagination"]["hasNextPage"], true);
    assert_eq!(first["data"]["pagination"]["hasPreviousPage"], false);

    let (_, last) = send!(app, TestRequest::get().uri("/job-notifications?page=3&limit=10"));
    assert_eq!(last["data"]["items"].as_array().unwrap().len(), 5);
    assert_eq!(last["data"]["pagination"]["currentPage"], 3);
    assert_eq!(last["data"]["pagination"]["totalItems"], 25);
    assert_eq!(last["data"]["pagination"]["hasNextPage"], false);
    assert_eq!(last["data"]["pagination"]["hasPreviousPage"], true);

    let mut seen = item_ids(&first);
    for page in 2..=3 {
        let (_, body) = send!(
            app,
            TestRequest::get().uri(&format!("/job-notifications?page={page}&limit=10"))
        );
        seen.extend(item_ids(&body));
    }
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 25);

    let (status, _) = send!(app, TestRequest::get().uri("/job-notifications/status/pending?limit=10"));
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_listing_rejects_bad_parameters() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    for uri in [
        "/job-notifications?page=0",
        "/job-notifications?limit=101",
        "/job-notifications?page=abc",
        "/job-notifications/status/active?limit=0",
        "/job-notifications/status/pending?page=-1",
    ] {
        let (status, body) = send!(app, TestRequest::get().uri(uri));
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["message"], "Invalid pagination parameters", "{uri}");
    }

    let (status, body) = send!(app, TestRequest::get().uri("/job-notifications?status=Archived"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["status"].is_string());
}

#[actix_web::test]
async fn test_soft_delete_hides_from_active_listing() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    let (_, created) = send!(
        app,
        TestRequest::post()
            .uri("/job-notifications")
            .set_json(job_payload("hr@acme.example.com"))
    );
    let id = created["data"]["id"].as_str().unwrap().to_string();
    send!(
        app,
        TestRequest::patch()
            .uri(&format!("/job-notifications/{id}/approve"))
            .set_json(review("Officer", ""))
    );

    let (_, active) = send!(app, TestRequest::get().uri("/job-notifications/status/active"));
    assert_eq!(active["message"], "Active jobs retrieved successfully");
    assert_eq!(item_ids(&active), vec![id.clone()]);

    let (status, body) = send!(app, TestRequest::delete().uri(&format!("/job-notifications/{id}")));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Job notification deleted successfully");
    assert_eq!(body["data"]["isActive"], false);

    let (status, body) = send!(app, TestRequest::get().uri(&format!("/job-notifications/{id}")));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isActive"], false);
    assert_eq!(body["data"]["status"], "Approved");

    let (_, active) = send!(app, TestRequest::get().uri("/job-notifications/status/active"));
    assert!(item_ids(&active).is_empty());
    assert_eq!(active["data"]["pagination"]["totalItems"], 0);
}

#[actix_web::test]
async fn test_update_allow_list() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    let (_, created) = send!(
        app,
        TestRequest::post()
            .uri("/job-notifications")
            .set_json(job_payload("hr@acme.example.com"))
    );
    let id = created["data"]["id"].as_str().unwrap().to_string();
    let uri = format!("/job-notifications/{id}");

    let (status, body) = send!(
        app,
        TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "jobTitle": "Platform Engineer", "status": "Approved" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid update fields");
    assert_eq!(body["errors"]["fields"], "These fields cannot be updated: status");

    let (status, body) = send!(
        app,
        TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "jobTitle": "  Platform   Engineer ", "jobLocation": "Pune" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Job notification updated successfully");
    assert_eq!(body["data"]["jobTitle"], "Platform Engineer");
    assert_eq!(body["data"]["jobLocation"], "Pune");
    assert_eq!(body["data"]["status"], "Pending");

    let (status, body) = send!(
        app,
        TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "headHREmail": "not-an-email" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["headHREmail"].is_string());

    let (_, body) = send!(app, TestRequest::get().uri(&uri));
    assert_eq!(body["data"]["headHREmail"], "asha@acme.example.com");
    assert_eq!(body["data"]["jobTitle"], "Platform Engineer");
}

#[actix_web::test]
async fn test_identifier_errors() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    let (status, body) = send!(app, TestRequest::get().uri("/job-notifications/not-a-real-id"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid job notification ID");
    assert_eq!(body["errors"]["id"], "Invalid ID format");

    let (status, _) = send!(
        app,
        TestRequest::patch()
            .uri("/job-notifications/12345/approve")
            .set_json(review("Officer", ""))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let missing = uuid::Uuid::new_v4();
    let (status, body) = send!(app, TestRequest::get().uri(&format!("/job-notifications/{missing}")));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Job notification not found");

    let (status, _) = send!(app, TestRequest::delete().uri(&format!("/job-notifications/{missing}")));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_lookup_by_application_id() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    let (_, created) = send!(
        app,
        TestRequest::post()
            .uri("/job-notifications")
            .set_json(job_payload("hr@acme.example.com"))
    );
    let application_id = created["data"]["applicationId"].as_str().unwrap().to_string();

    let (status, body) = send!(
        app,
        TestRequest::get().uri(&format!("/job-notifications/application/{application_id}"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], created["data"]["id"]);

    let (status, body) = send!(
        app,
        TestRequest::get().uri("/job-notifications/application/JNF0000000000000ZZZZZ")
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"]["applicationId"], "Application ID does not exist");
}

#[actix_web::test]
async fn test_company_search() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    send!(
        app,
        TestRequest::post()
            .uri("/job-notifications")
            .set_json(job_payload("hr@acme.example.com"))
    );
    let mut other = job_payload("jobs@globex.example.com");
    other["companyName"] = json!("Globex Systems");
    send!(app, TestRequest::post().uri("/job-notifications").set_json(other));

    let (status, body) = send!(app, TestRequest::get().uri("/job-notifications/company/ACME"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Company jobs retrieved successfully");
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["items"][0]["companyName"], "Acme Robotics");

    let (status, body) = send!(app, TestRequest::get().uri("/job-notifications/company/Initech"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No jobs found for this company");

    let (status, body) = send!(app, TestRequest::get().uri("/job-notifications/company/%20%20"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Company name is required");
    assert_eq!(body["errors"]["companyName"], "Company name cannot be empty");
}

#[actix_web::test]
async fn test_accented_company_search() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    let mut payload = job_payload("rh@electricite.example.com");
    payload["companyName"] = json!("Électricité Systèmes");
    let (status, _) = send!(app, TestRequest::post().uri("/job-notifications").set_json(payload));
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send!(
        app,
        TestRequest::get().uri("/job-notifications?companyName=%C3%89lectricit%C3%A9")
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["totalItems"], 1);

    let (status, body) = send!(
        app,
        TestRequest::get().uri("/job-notifications/company/%C3%A9LECTRICIT%C3%89")
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"][0]["companyName"], "Électricité Systèmes");
}

#[actix_web::test]
async fn test_health() {
    let (_dir, db) = test_database();
    let app = init_app!(db);

    let (status, body) = send!(app, TestRequest::get().uri("/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
