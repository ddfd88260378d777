
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

async fn apply(app: &TestApp, seeker: &TestUser, job_id: i64) -> reqwest::Response {
    app.post(
        "/api/applications",
        Some(&seeker.token),
        &json!({"jobId": job_id, "coverLetter": "I would love to join."}),
    )
    .await
}

#[actix_rt::test]
async fn hiring_flow_from_posting_to_interview() {
    let app = TestApp::spawn().await;
    let employer = app.signup("qa_hiring", "employer").await;
    let seeker = app.signup("priya", "seeker").await;

    let job_id = create_job(&app, &employer, &job_body("QA Engineer", "Pune", "full-time")).await;

    let response = apply(&app, &seeker, job_id).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let application: Value = response.json().await.unwrap();
    assert_eq!(application["status"], "applied");
    assert_eq!(application["seekerId"], seeker.id);
    assert_eq!(application["jobId"], job_id);
    let application_id = application["id"].as_i64().unwrap();

    let applicants: Vec<Value> = app
        .get(&format!("/api/applications/job/{job_id}"), Some(&employer.token))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(applicants.len(), 1);
    assert_eq!(applicants[0]["seeker"]["name"], "priya Tester");
    assert!(applicants[0]["seeker"].get("password").is_none());

    let response = app
        .put(
            &format!("/api/applications/{application_id}/status"),
            Some(&employer.token),
            &json!({"status": "interview"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["status"], "interview");

    let mine: Vec<Value> = app
        .get("/api/applications/seeker", Some(&seeker.token))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["status"], "interview");
    assert_eq!(mine[0]["job"]["title"], "QA Engineer");
    assert_eq!(mine[0]["job"]["location"], "Pune");
}

#[actix_rt::test]
async fn duplicate_application_is_rejected() {
    let app = TestApp::spawn().await;
    let employer = app.signup("dup_corp", "employer").await;
    let seeker = app.signup("olga", "seeker").await;
    let job_id = create_job(&app, &employer, &job_body("Tester", "Kyiv", "contract")).await;

    assert_eq!(apply(&app, &seeker, job_id).await.status(), StatusCode::CREATED);
    let second = apply(&app, &seeker, job_id).await;

    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body: Value = second.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("already applied"));

    let mine: Vec<Value> = app
        .get("/api/applications/seeker", Some(&seeker.token))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
}

#[actix_rt::test]
async fn employer_cannot_apply() {
    let app = TestApp::spawn().await;
    let employer = app.signup("solo_corp", "employer").await;
    let job_id = create_job(&app, &employer, &job_body("Pilot", "Corellia", "full-time")).await;

    let response = apply(&app, &employer, job_id).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[actix_rt::test]
async fn applying_to_missing_or_inactive_job_is_404() {
    let app = TestApp::spawn().await;
    let employer = app.signup("closed_co", "employer").await;
    let seeker = app.signup("pavel", "seeker").await;
    let job_id = create_job(&app, &employer, &job_body("Closed Role", "Oslo", "part-time")).await;
    app.delete(&format!("/api/jobs/{job_id}"), Some(&employer.token)).await;

    assert_eq!(apply(&app, &seeker, job_id).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(apply(&app, &seeker, 31337).await.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn application_without_job_id_fails_validation() {
    let app = TestApp::spawn().await;
    let seeker = app.signup("quinn", "seeker").await;

    let response = app
        .post("/api/applications", Some(&seeker.token), &json!({"coverLetter": "Hi"}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let fields = error_fields(&response.json().await.unwrap());
    assert!(fields.iter().any(|f| f == "job_id" || f == "jobId"));
}

#[actix_rt::test]
async fn invalid_status_is_rejected_and_unchanged() {
    let app = TestApp::spawn().await;
    let employer = app.signup("status_co", "employer").await;
    let seeker = app.signup("rosa", "seeker").await;
    let job_id = create_job(&app, &employer, &job_body("Clerk", "Rome", "full-time")).await;
    let application: Value = apply(&app, &seeker, job_id).await.json().await.unwrap();
    let application_id = application["id"].as_i64().unwrap();

    let response = app
        .put(
            &format!("/api/applications/{application_id}/status"),
            Some(&employer.token),
            &json!({"status": "bogus"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(error_fields(&body), vec!["status".to_string()]);

    let mine: Vec<Value> = app
        .get("/api/applications/seeker", Some(&seeker.token))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(mine[0]["status"], "applied");
}

#[actix_rt::test]
async fn only_job_owner_can_update_status() {
    let app = TestApp::spawn().await;
    let owner = app.signup("owner_co", "employer").await;
    let rival = app.signup("rival_co", "employer").await;
    let seeker = app.signup("sven", "seeker").await;
    let job_id = create_job(&app, &owner, &job_body("Welder", "Gothenburg", "full-time")).await;
    let application: Value = apply(&app, &seeker, job_id).await.json().await.unwrap();
    let application_id = application["id"].as_i64().unwrap();
    let path = format!("/api/applications/{application_id}/status");

    let by_rival = app.put(&path, Some(&rival.token), &json!({"status": "rejected"})).await;
    let by_seeker = app.put(&path, Some(&seeker.token), &json!({"status": "accepted"})).await;
    let missing = app
        .put("/api/applications/999/status", Some(&owner.token), &json!({"status": "rejected"}))
        .await;

    assert_eq!(by_rival.status(), StatusCode::FORBIDDEN);
    assert_eq!(by_seeker.status(), StatusCode::FORBIDDEN);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn job_applicants_are_visible_only_to_owner() {
    let app = TestApp::spawn().await;
    let owner = app.signup("visible_co", "employer").await;
    let rival = app.signup("peeking_co", "employer").await;
    let seeker = app.signup("tara", "seeker").await;
    let job_id = create_job(&app, &owner, &job_body("Baker", "Lyon", "part-time")).await;

    let by_rival = app.get(&format!("/api/applications/job/{job_id}"), Some(&rival.token)).await;
    let by_seeker = app.get(&format!("/api/applications/job/{job_id}"), Some(&seeker.token)).await;
    let missing = app.get("/api/applications/job/4040", Some(&owner.token)).await;

    assert_eq!(by_rival.status(), StatusCode::FORBIDDEN);
    assert_eq!(by_seeker.status(), StatusCode::FORBIDDEN);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn applicants_include_seeker_profile_when_present() {
    let app = TestApp::spawn().await;
    let employer = app.signup("profile_co", "employer").await;
    let with_profile = app.signup("uma", "seeker").await;
    let without_profile = app.signup("victor", "seeker").await;
    let job_id = create_job(&app, &employer, &job_body("Translator", "Madrid", "remote")).await;

    app.post(
        "/api/profile/seeker",
        Some(&with_profile.token),
        &json!({"title": "Linguist", "skills": ["Spanish", "French"]}),
    )
    .await;
    apply(&app, &with_profile, job_id).await;
    apply(&app, &without_profile, job_id).await;

    let applicants: Vec<Value> = app
        .get(&format!("/api/applications/job/{job_id}"), Some(&employer.token))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(applicants.len(), 2);
    let uma = applicants.iter().find(|a| a["seekerId"] == with_profile.id).unwrap();
    let victor = applicants.iter().find(|a| a["seekerId"] == without_profile.id).unwrap();
    assert_eq!(uma["profile"]["title"], "Linguist");
    assert!(victor["profile"].is_null());
}

#[actix_rt::test]
async fn seeker_application_list_requires_seeker_role() {
    let app = TestApp::spawn().await;
    let employer = app.signup("listing_co", "employer").await;

    let response = app.get("/api/applications/seeker", Some(&employer.token)).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
