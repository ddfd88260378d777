use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::application::{NewApplicationRequest, UpdateApplicationStatusRequest},
    errors::AppError,
    use_cases::extractors::{EmployerClaims, SeekerClaims},
    AppState,
};

#[instrument(skip(claims, state, data))]
pub async fn apply_to_job(
    claims: SeekerClaims,
    state: web::Data<AppState>,
    data: web::Json<NewApplicationRequest>,
) -> Result<impl Responder, AppError> {
    let application = state
        .application_handler
        .apply(claims.user_id()?, data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(application))
}

#[instrument(skip(claims, state))]
pub async fn list_seeker_applications(
    claims: SeekerClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let applications = state
        .application_handler
        .list_for_seeker(claims.user_id()?)
        .await?;
    Ok(HttpResponse::Ok().json(applications))
}

#[instrument(skip(claims, state))]
pub async fn list_job_applications(
    claims: EmployerClaims,
    job_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let applications = state
        .application_handler
        .list_for_job(claims.user_id()?, job_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(applications))
}

#[instrument(skip(claims, state, data))]
pub async fn update_application_status(
    claims: EmployerClaims,
    application_id: web::Path<i64>,
    state: web::Data<AppState>,
    data: web::Json<UpdateApplicationStatusRequest>,
) -> Result<impl Responder, AppError> {
    let application = state
        .application_handler
        .update_status(claims.user_id()?, application_id.into_inner(), data.status.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(application))
}
