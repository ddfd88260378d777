use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        employer_profile::{NewEmployerProfileRequest, UpdateEmployerProfileRequest},
        seeker_profile::{NewSeekerProfileRequest, UpdateSeekerProfileRequest},
    },
    errors::AppError,
    use_cases::extractors::{AuthClaims, EmployerClaims, SeekerClaims},
    AppState,
};

#[instrument(skip(claims, state))]
pub async fn get_seeker_profile(
    claims: AuthClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let profile = state.profile_handler.get_seeker_profile(claims.user_id()?).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[instrument(skip(claims, state, data))]
pub async fn create_seeker_profile(
    claims: SeekerClaims,
    state: web::Data<AppState>,
    data: web::Json<NewSeekerProfileRequest>,
) -> Result<impl Responder, AppError> {
    let profile = state
        .profile_handler
        .create_seeker_profile(claims.user_id()?, data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(profile))
}

#[instrument(skip(claims, state, data))]
pub async fn update_seeker_profile(
    claims: SeekerClaims,
    profile_id: web::Path<i64>,
    state: web::Data<AppState>,
    data: web::Json<UpdateSeekerProfileRequest>,
) -> Result<impl Responder, AppError> {
    let profile = state
        .profile_handler
        .update_seeker_profile(claims.user_id()?, profile_id.into_inner(), &data)
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[instrument(skip(claims, state))]
pub async fn get_employer_profile(
    claims: AuthClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let profile = state.profile_handler.get_employer_profile(claims.user_id()?).await?;
    Ok(HttpResponse::Ok().json(profile))
}

#[instrument(skip(claims, state, data))]
pub async fn create_employer_profile(
    claims: EmployerClaims,
    state: web::Data<AppState>,
    data: web::Json<NewEmployerProfileRequest>,
) -> Result<impl Responder, AppError> {
    let profile = state
        .profile_handler
        .create_employer_profile(claims.user_id()?, data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(profile))
}

#[instrument(skip(claims, state, data))]
pub async fn update_employer_profile(
    claims: EmployerClaims,
    profile_id: web::Path<i64>,
    state: web::Data<AppState>,
    data: web::Json<UpdateEmployerProfileRequest>,
) -> Result<impl Responder, AppError> {
    let profile = state
        .profile_handler
        .update_employer_profile(claims.user_id()?, profile_id.into_inner(), &data)
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}
