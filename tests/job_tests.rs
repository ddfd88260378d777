
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

#[actix_rt::test]
async fn employer_creates_job_with_server_assigned_fields() {
    let app = TestApp::spawn().await;
    let employer = app.signup("acme_hr", "employer").await;

    let mut body = job_body("Backend Engineer", "Berlin", "full-time");
    body["employerId"] = json!(9999);
    body["isActive"] = json!(false);
    let response = app.post("/api/jobs", Some(&employer.token), &body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let job: Value = response.json().await.unwrap();
    assert!(job["id"].as_i64().unwrap() > 0);
    assert_eq!(job["employerId"], employer.id);
    assert_eq!(job["isActive"], true);
    assert_eq!(job["jobType"], "full-time");
    assert_eq!(job["skills"], json!(["Rust", "SQL"]));
    assert!(job["postedAt"].is_string());
}

#[actix_rt::test]
async fn seeker_cannot_create_job() {
    let app = TestApp::spawn().await;
    let seeker = app.signup("sam", "seeker").await;

    let response = app
        .post("/api/jobs", Some(&seeker.token), &job_body("Frontend Developer", "Remote", "remote"))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let jobs: Vec<Value> = app.get("/api/jobs", None).await.json().await.unwrap();
    assert!(jobs.is_empty());
}

#[actix_rt::test]
async fn create_job_requires_authentication() {
    let app = TestApp::spawn().await;

    let response = app.post("/api/jobs", None, &job_body("Designer", "Paris", "part-time")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn create_job_reports_missing_fields() {
    let app = TestApp::spawn().await;
    let employer = app.signup("globex", "employer").await;

    let response = app
        .post("/api/jobs", Some(&employer.token), &json!({"salaryMin": -10}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    let fields = error_fields(&body);
    for field in ["title", "description", "location", "salary_min"] {
        assert!(fields.contains(&field.to_string()), "missing error for {field}: {fields:?}");
    }
    assert!(fields.contains(&"job_type".to_string()));
}

#[actix_rt::test]
async fn whitespace_only_text_fields_are_rejected() {
    let app = TestApp::spawn().await;
    let employer = app.signup("initech", "employer").await;

    let mut body = job_body("   ", "\t ", "contract");
    body["description"] = json!("  ");
    let response = app.post("/api/jobs", Some(&employer.token), &body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let fields = error_fields(&response.json().await.unwrap());
    for field in ["title", "description", "location"] {
        assert!(fields.contains(&field.to_string()), "missing error for {field}: {fields:?}");
    }

    let jobs: Vec<Value> = app.get("/api/jobs", None).await.json().await.unwrap();
    assert!(jobs.is_empty());
}

#[actix_rt::test]
async fn unknown_job_type_is_a_field_error() {
    let app = TestApp::spawn().await;
    let employer = app.signup("hooli", "employer").await;

    let response = app
        .post("/api/jobs", Some(&employer.token), &job_body("Data Engineer", "Palo Alto", "freelance"))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(error_fields(&body), vec!["job_type".to_string()]);
}

#[actix_rt::test]
async fn ids_increase_monotonically() {
    let app = TestApp::spawn().await;
    let employer = app.signup("initech", "employer").await;

    let mut ids = Vec::new();
    for n in 0..5 {
        ids.push(create_job(&app, &employer, &job_body(&format!("Role {n}"), "Austin", "contract")).await);
    }

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[actix_rt::test]
async fn get_job_is_idempotent_and_404s_for_unknown_ids() {
    let app = TestApp::spawn().await;
    let employer = app.signup("umbrella", "employer").await;
    let id = create_job(&app, &employer, &job_body("Chemist", "Raccoon City", "full-time")).await;

    let first: Value = app.get(&format!("/api/jobs/{id}"), None).await.json().await.unwrap();
    let second: Value = app.get(&format!("/api/jobs/{id}"), None).await.json().await.unwrap();
    assert_eq!(first, second);

    assert_eq!(app.get("/api/jobs/424242", None).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get("/api/jobs/not-a-number", None).await.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn list_filters_by_keyword_location_and_type() {
    let app = TestApp::spawn().await;
    let employer = app.signup("hooli", "employer").await;
    create_job(&app, &employer, &job_body("Frontend Developer", "Pune", "full-time")).await;
    create_job(&app, &employer, &job_body("Backend Developer", "Bengaluru", "contract")).await;
    create_job(&app, &employer, &job_body("Product Manager", "pune", "part-time")).await;

    let by_keyword: Vec<Value> = app.get("/api/jobs?keyword=frontend", None).await.json().await.unwrap();
    assert_eq!(by_keyword.len(), 1);
    assert_eq!(by_keyword[0]["title"], "Frontend Developer");

    let by_location: Vec<Value> = app.get("/api/jobs?location=PUNE", None).await.json().await.unwrap();
    assert_eq!(by_location.len(), 2);

    let by_type: Vec<Value> = app.get("/api/jobs?jobType=contract", None).await.json().await.unwrap();
    assert_eq!(by_type.len(), 1);
    assert_eq!(by_type[0]["title"], "Backend Developer");

    let combined: Vec<Value> = app
        .get("/api/jobs?keyword=developer&location=pune", None)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(combined.len(), 1);

    let empty_filter: Vec<Value> = app.get("/api/jobs?keyword=", None).await.json().await.unwrap();
    assert_eq!(empty_filter.len(), 3);
}

#[actix_rt::test]
async fn keyword_matches_skills() {
    let app = TestApp::spawn().await;
    let employer = app.signup("pied_piper", "employer").await;
    let mut body = job_body("Compression Engineer", "Palo Alto", "full-time");
    body["skills"] = json!(["Kubernetes", "Go"]);
    create_job(&app, &employer, &body).await;

    let jobs: Vec<Value> = app.get("/api/jobs?keyword=kubernetes", None).await.json().await.unwrap();

    assert_eq!(jobs.len(), 1);
}

#[actix_rt::test]
async fn malformed_query_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/jobs?employerId=abc", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn owner_updates_job_with_shallow_merge() {
    let app = TestApp::spawn().await;
    let employer = app.signup("stark_ind", "employer").await;
    let id = create_job(&app, &employer, &job_body("Engineer", "New York", "full-time")).await;

    let response = app
        .put(
            &format!("/api/jobs/{id}"),
            Some(&employer.token),
            &json!({"title": "Senior Engineer", "salaryMin": null, "skills": ["Rust"]}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let job: Value = response.json().await.unwrap();
    assert_eq!(job["title"], "Senior Engineer");
    assert_eq!(job["location"], "New York");
    assert!(job["salaryMin"].is_null());
    assert_eq!(job["salaryMax"], 90000);
    assert_eq!(job["skills"], json!(["Rust"]));
    assert_eq!(job["employerId"], employer.id);
}

#[actix_rt::test]
async fn non_owner_cannot_update_or_delete_job() {
    let app = TestApp::spawn().await;
    let owner = app.signup("wayne_ent", "employer").await;
    let rival = app.signup("oscorp", "employer").await;
    let id = create_job(&app, &owner, &job_body("Analyst", "Gotham", "full-time")).await;
    let before: Value = app.get(&format!("/api/jobs/{id}"), None).await.json().await.unwrap();

    let update = app
        .put(&format!("/api/jobs/{id}"), Some(&rival.token), &json!({"title": "Hijacked"}))
        .await;
    let delete = app.delete(&format!("/api/jobs/{id}"), Some(&rival.token)).await;

    assert_eq!(update.status(), StatusCode::FORBIDDEN);
    assert_eq!(delete.status(), StatusCode::FORBIDDEN);
    let after: Value = app.get(&format!("/api/jobs/{id}"), None).await.json().await.unwrap();
    assert_eq!(before, after);
}

#[actix_rt::test]
async fn update_of_missing_job_is_404() {
    let app = TestApp::spawn().await;
    let employer = app.signup("cyberdyne", "employer").await;

    let response = app
        .put("/api/jobs/77", Some(&employer.token), &json!({"title": "Ghost"}))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn delete_is_a_soft_delete() {
    let app = TestApp::spawn().await;
    let employer = app.signup("tyrell", "employer").await;
    let id = create_job(&app, &employer, &job_body("Replicant Tester", "LA", "contract")).await;

    let response = app.delete(&format!("/api/jobs/{id}"), Some(&employer.token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<Value> = app.get("/api/jobs", None).await.json().await.unwrap();
    assert!(listed.iter().all(|job| job["id"] != id));

    let job: Value = app.get(&format!("/api/jobs/{id}"), None).await.json().await.unwrap();
    assert_eq!(job["isActive"], false);
}

#[actix_rt::test]
async fn update_cannot_reactivate_a_deleted_job() {
    let app = TestApp::spawn().await;
    let employer = app.signup("cyberdyne", "employer").await;
    let id = create_job(&app, &employer, &job_body("Firmware Engineer", "Sunnyvale", "full-time")).await;
    app.delete(&format!("/api/jobs/{id}"), Some(&employer.token)).await;

    let response = app
        .put(
            &format!("/api/jobs/{id}"),
            Some(&employer.token),
            &json!({"isActive": true, "title": "Senior Firmware Engineer"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let job: Value = response.json().await.unwrap();
    assert_eq!(job["title"], "Senior Firmware Engineer");
    assert_eq!(job["isActive"], false);

    let listed: Vec<Value> = app.get("/api/jobs", None).await.json().await.unwrap();
    assert!(listed.iter().all(|job| job["id"] != id));
}

#[actix_rt::test]
async fn job_employer_returns_posters_profile() {
    let app = TestApp::spawn().await;
    let employer = app.signup("wonka", "employer").await;
    let id = create_job(&app, &employer, &job_body("Chocolatier", "London", "full-time")).await;

    let missing = app.get(&format!("/api/jobs/{id}/employer"), None).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    app.post(
        "/api/profile/employer",
        Some(&employer.token),
        &json!({"companyName": "Wonka Industries", "industry": "Confectionery"}),
    )
    .await;

    let response = app.get(&format!("/api/jobs/{id}/employer"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let profile: Value = response.json().await.unwrap();
    assert_eq!(profile["companyName"], "Wonka Industries");
    assert_eq!(profile["userId"], employer.id);
}

#[actix_rt::test]
async fn admin_sees_inactive_jobs_and_can_deactivate_any() {
    let app = TestApp::spawn().await;
    let employer = app.signup("soylent", "employer").await;
    let first = create_job(&app, &employer, &job_body("Chef", "NYC", "full-time")).await;
    let second = create_job(&app, &employer, &job_body("Nutritionist", "NYC", "part-time")).await;
    let admin = app.admin_token().await;

    let response = app.delete(&format!("/api/admin/jobs/{first}"), Some(&admin)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        app.delete("/api/admin/jobs/999", Some(&admin)).await.status(),
        StatusCode::NOT_FOUND
    );

    let public: Vec<Value> = app.get("/api/jobs", None).await.json().await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0]["id"], second);

    let all: Vec<Value> = app.get("/api/admin/jobs", Some(&admin)).await.json().await.unwrap();
    assert_eq!(all.len(), 2);
}
