use jobnexus::{
    db::memory::create_store,
    entities::{
        application::{ApplicationStatus, JobApplicationInsert, JobApplicationPatch},
        employer_profile::EmployerProfileInsert,
        job_listing::{JobFilters, JobListingInsert, JobType, UpdateJobListingRequest},
        seeker_profile::{SeekerProfileInsert, UpdateSeekerProfileRequest},
        user::{UserInsert, UserType},
    },
    errors::AppError,
    repositories::{
        application::ApplicationRepository, employer_profile::EmployerProfileRepository,
        job_listing::JobRepository, seeker_profile::SeekerProfileRepository, user::UserRepository,
    },
    shared_repos::SharedRepositories,
};

fn repos() -> SharedRepositories {
    SharedRepositories::new(create_store())
}

fn user(username: &str, user_type: UserType) -> UserInsert {
    UserInsert {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password_hash: "hash".to_string(),
        name: username.to_string(),
        user_type,
    }
}

fn job(employer_id: i64, title: &str, location: &str, job_type: JobType) -> JobListingInsert {
    JobListingInsert {
        employer_id,
        title: title.to_string(),
        description: format!("{} wanted", title),
        location: location.to_string(),
        job_type,
        salary_min: None,
        salary_max: None,
        skills: vec!["Rust".to_string()],
        application_deadline: None,
    }
}

fn seeker_profile(user_id: i64) -> SeekerProfileInsert {
    SeekerProfileInsert {
        user_id,
        title: Some("Engineer".to_string()),
        skills: vec![],
        education: vec![],
        experience: vec![],
        bio: None,
        location: None,
        phone: None,
        resume: None,
    }
}

fn application(job_id: i64, seeker_id: i64) -> JobApplicationInsert {
    JobApplicationInsert {
        job_id,
        seeker_id,
        cover_letter: None,
        resume: None,
    }
}

#[tokio::test]
async fn ids_are_assigned_per_collection_and_never_reused() {
    let repos = repos();

    let first = repos.job_repo.create_job(&job(1, "A", "X", JobType::Remote)).await.unwrap();
    let second = repos.job_repo.create_job(&job(1, "B", "X", JobType::Remote)).await.unwrap();
    repos.job_repo.delete_job(second.id).await.unwrap();
    let third = repos.job_repo.create_job(&job(1, "C", "X", JobType::Remote)).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(third.id, 3);

    let user = repos.user_repo.create_user(&user("solo", UserType::Seeker)).await.unwrap();
    assert_eq!(user.id, 1);
}

#[tokio::test]
async fn new_jobs_are_active_with_posted_timestamp() {
    let repos = repos();

    let created = repos.job_repo.create_job(&job(7, "Pilot", "Reno", JobType::FullTime)).await.unwrap();

    assert!(created.is_active);
    assert_eq!(created.employer_id, 7);
    let stored = repos.job_repo.get_job(created.id).await.unwrap().unwrap();
    assert_eq!(stored, created);
}

#[tokio::test]
async fn soft_deleted_jobs_are_hidden_from_listing_only() {
    let repos = repos();
    let kept = repos.job_repo.create_job(&job(1, "Kept", "X", JobType::Contract)).await.unwrap();
    let removed = repos.job_repo.create_job(&job(1, "Removed", "X", JobType::Contract)).await.unwrap();

    assert!(repos.job_repo.delete_job(removed.id).await.unwrap());
    assert!(!repos.job_repo.delete_job(404).await.unwrap());

    let listed = repos.job_repo.list_jobs(&JobFilters::default()).await.unwrap();
    assert_eq!(listed.iter().map(|j| j.id).collect::<Vec<_>>(), vec![kept.id]);

    let fetched = repos.job_repo.get_job(removed.id).await.unwrap().unwrap();
    assert!(!fetched.is_active);

    assert_eq!(repos.job_repo.count_jobs(false).await.unwrap(), 2);
    assert_eq!(repos.job_repo.count_jobs(true).await.unwrap(), 1);
    assert_eq!(repos.job_repo.list_all_jobs().await.unwrap().len(), 2);
}

#[tokio::test]
async fn listing_is_newest_first_and_filtered() {
    let repos = repos();
    let oldest = repos.job_repo.create_job(&job(1, "Rust Developer", "Pune", JobType::FullTime)).await.unwrap();
    let middle = repos.job_repo.create_job(&job(2, "Go Developer", "Delhi", JobType::Contract)).await.unwrap();
    let newest = repos.job_repo.create_job(&job(1, "Designer", "pune", JobType::FullTime)).await.unwrap();

    let all = repos.job_repo.list_jobs(&JobFilters::default()).await.unwrap();
    assert_eq!(
        all.iter().map(|j| j.id).collect::<Vec<_>>(),
        vec![newest.id, middle.id, oldest.id]
    );

    let filters = JobFilters {
        keyword: Some("DEVELOPER".to_string()),
        location: Some("Pune".to_string()),
        ..Default::default()
    };
    let hits = repos.job_repo.list_jobs(&filters).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, oldest.id);

    let by_employer = JobFilters {
        employer_id: Some(2),
        ..Default::default()
    };
    assert_eq!(repos.job_repo.list_jobs(&by_employer).await.unwrap().len(), 1);

    let unknown_type = JobFilters {
        job_type: Some("freelance".to_string()),
        ..Default::default()
    };
    assert!(repos.job_repo.list_jobs(&unknown_type).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_merges_and_reports_missing_ids() {
    let repos = repos();
    let created = repos.job_repo.create_job(&job(1, "Writer", "Remote", JobType::Remote)).await.unwrap();

    let patch: UpdateJobListingRequest =
        serde_json::from_value(serde_json::json!({"title": "Editor", "salaryMax": 70000})).unwrap();
    let updated = repos.job_repo.update_job(created.id, &patch).await.unwrap().unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Editor");
    assert_eq!(updated.salary_max, Some(70000));
    assert_eq!(updated.location, "Remote");
    assert_eq!(updated.posted_at, created.posted_at);

    assert!(repos.job_repo.update_job(999, &patch).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_usernames_and_emails_conflict() {
    let repos = repos();
    repos.user_repo.create_user(&user("ana", UserType::Seeker)).await.unwrap();

    let same_username = UserInsert {
        email: "other@example.com".to_string(),
        ..user("ana", UserType::Employer)
    };
    let same_email = UserInsert {
        email: "ana@example.com".to_string(),
        ..user("ana2", UserType::Employer)
    };

    assert!(matches!(
        repos.user_repo.create_user(&same_username).await,
        Err(AppError::Conflict(msg)) if msg == "Username already exists"
    ));
    assert!(matches!(
        repos.user_repo.create_user(&same_email).await,
        Err(AppError::Conflict(_))
    ));
    assert_eq!(repos.user_repo.count_users().await.unwrap(), 1);
}

#[tokio::test]
async fn users_are_found_by_username_email_and_ids() {
    let repos = repos();
    let ana = repos.user_repo.create_user(&user("ana", UserType::Seeker)).await.unwrap();
    let ben = repos.user_repo.create_user(&user("ben", UserType::Employer)).await.unwrap();

    assert_eq!(repos.user_repo.get_user_by_username("ben").await.unwrap().unwrap().id, ben.id);
    assert_eq!(
        repos.user_repo.get_user_by_email(" ANA@example.com ").await.unwrap().unwrap().id,
        ana.id
    );
    assert!(repos.user_repo.get_user_by_id(99).await.unwrap().is_none());

    let batch = repos.user_repo.get_users_by_ids(&[ben.id, 99, ana.id]).await.unwrap();
    assert_eq!(batch.iter().map(|u| u.id).collect::<Vec<_>>(), vec![ben.id, ana.id]);
}

#[tokio::test]
async fn one_application_per_seeker_and_job() {
    let repos = repos();

    let created = repos.application_repo.create_application(&application(1, 10)).await.unwrap();
    assert_eq!(created.status, ApplicationStatus::Applied);

    let duplicate = repos.application_repo.create_application(&application(1, 10)).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    repos.application_repo.create_application(&application(2, 10)).await.unwrap();
    repos.application_repo.create_application(&application(1, 11)).await.unwrap();

    assert_eq!(repos.application_repo.list_applications_by_seeker(10).await.unwrap().len(), 2);
    assert_eq!(repos.application_repo.list_applications_by_job(1).await.unwrap().len(), 2);
}

#[tokio::test]
async fn application_status_update_and_counts() {
    let repos = repos();
    let first = repos.application_repo.create_application(&application(1, 10)).await.unwrap();
    repos.application_repo.create_application(&application(1, 11)).await.unwrap();

    let updated = repos
        .application_repo
        .update_application(first.id, &JobApplicationPatch::status(ApplicationStatus::Reviewing))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, ApplicationStatus::Reviewing);
    assert_eq!(updated.applied_at, first.applied_at);

    let missing = repos
        .application_repo
        .update_application(77, &JobApplicationPatch::status(ApplicationStatus::Rejected))
        .await
        .unwrap();
    assert!(missing.is_none());

    let counts = repos.application_repo.count_applications_by_status().await.unwrap();
    assert_eq!(counts.get(&ApplicationStatus::Applied), Some(&1));
    assert_eq!(counts.get(&ApplicationStatus::Reviewing), Some(&1));
    assert_eq!(counts.get(&ApplicationStatus::Accepted), None);
}

#[tokio::test]
async fn one_profile_per_user() {
    let repos = repos();

    let profile = repos.seeker_profile_repo.create_seeker_profile(&seeker_profile(5)).await.unwrap();
    let again = repos.seeker_profile_repo.create_seeker_profile(&seeker_profile(5)).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    let by_user = repos.seeker_profile_repo.get_seeker_profile_by_user_id(5).await.unwrap();
    assert_eq!(by_user, Some(profile.clone()));

    let employer = EmployerProfileInsert {
        user_id: 6,
        company_name: "Acme".to_string(),
        company_size: None,
        industry: None,
        description: None,
        location: None,
        website: None,
        logo: None,
    };
    repos.employer_profile_repo.create_employer_profile(&employer).await.unwrap();
    assert!(matches!(
        repos.employer_profile_repo.create_employer_profile(&employer).await,
        Err(AppError::Conflict(_))
    ));
}

#[tokio::test]
async fn profile_patch_keeps_identity_fields() {
    let repos = repos();
    let profile = repos.seeker_profile_repo.create_seeker_profile(&seeker_profile(5)).await.unwrap();

    let patch: UpdateSeekerProfileRequest =
        serde_json::from_value(serde_json::json!({"title": null, "skills": ["SQL"]})).unwrap();
    let updated = repos
        .seeker_profile_repo
        .update_seeker_profile(profile.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, profile.id);
    assert_eq!(updated.user_id, 5);
    assert!(updated.title.is_none());
    assert_eq!(updated.skills, vec!["SQL".to_string()]);

    let profiles = repos.seeker_profile_repo.get_seeker_profiles_by_user_ids(&[5, 6]).await.unwrap();
    assert_eq!(profiles.len(), 1);
}
