use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, use_cases::extractors::AdminClaims, AppState};

#[instrument(skip(_claims, state))]
pub async fn list_users(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let users = state.admin_handler.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

#[instrument(skip(_claims, state))]
pub async fn list_all_jobs(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let jobs = state.admin_handler.list_all_jobs().await?;
    Ok(HttpResponse::Ok().json(jobs))
}

#[instrument(skip(_claims, state))]
pub async fn deactivate_job(
    _claims: AdminClaims,
    job_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.admin_handler.deactivate_job(job_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"message": "Job listing deactivated"})))
}

#[instrument(skip(_claims, state))]
pub async fn platform_stats(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let stats = state.admin_handler.stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}
