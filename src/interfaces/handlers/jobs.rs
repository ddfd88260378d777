use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::job_listing::{JobFilters, NewJobListingRequest, UpdateJobListingRequest},
    errors::AppError,
    use_cases::extractors::{AuthClaims, EmployerClaims},
    AppState,
};

#[instrument(skip(state))]
pub async fn list_jobs(
    state: web::Data<AppState>,
    filters: web::Query<JobFilters>,
) -> Result<impl Responder, AppError> {
    let jobs = state.job_handler.list_jobs(&filters).await?;
    Ok(HttpResponse::Ok().json(jobs))
}

#[instrument(skip(state))]
pub async fn get_job(
    job_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let job = state.job_handler.get_job(job_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(job))
}

#[instrument(skip(state))]
pub async fn get_job_employer(
    job_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let profile = state.job_handler.get_job_employer(job_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[instrument(skip(claims, state, data))]
pub async fn create_job(
    claims: EmployerClaims,
    state: web::Data<AppState>,
    data: web::Json<NewJobListingRequest>,
) -> Result<impl Responder, AppError> {
    let job = state
        .job_handler
        .create_job(claims.user_id()?, data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(job))
}

#[instrument(skip(claims, state, data))]
pub async fn update_job(
    claims: AuthClaims,
    job_id: web::Path<i64>,
    state: web::Data<AppState>,
    data: web::Json<UpdateJobListingRequest>,
) -> Result<impl Responder, AppError> {
    let job = state
        .job_handler
        .update_job(claims.user_id()?, job_id.into_inner(), &data)
        .await?;
    Ok(HttpResponse::Ok().json(job))
}

#[instrument(skip(claims, state))]
pub async fn delete_job(
    claims: AuthClaims,
    job_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state
        .job_handler
        .delete_job(claims.user_id()?, job_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"message": "Job listing deleted"})))
}
