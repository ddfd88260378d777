use actix_web::{get, web, HttpResponse, Responder};
use humantime::format_duration;
use chrono::Utc;
use std::time::Duration;
use serde::Serialize;

use crate::{
    constants::START_TIME,
    entities::stats::StoreCounts,
    errors::AppError,
    repositories::{application::ApplicationRepository, job_listing::JobRepository, user::UserRepository},
    AppState,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    version: String,
    revoked_tokens: usize,
    store: StoreCounts,
}

async fn store_counts(state: &AppState) -> Result<StoreCounts, AppError> {
    let applications: u64 = state
        .application_handler
        .application_repo
        .count_applications_by_status()
        .await?
        .values()
        .sum();

    Ok(StoreCounts {
        users: state.auth_handler.user_repo.count_users().await?,
        jobs: state.job_handler.job_repo.count_jobs(false).await?,
        applications,
    })
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let now_utc = Utc::now();
    let uptime_secs = now_utc.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;

    let response = HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        revoked_tokens: state.auth_handler.denylist.len(),
        store: store_counts(&state).await?,
    };

    Ok(HttpResponse::Ok().json(response))
}
