use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use tracing::instrument;

use crate::entities::token::RefreshTokenRequest;
use crate::entities::user::{LoginUser, LogoutRequest, NewUser};
use crate::errors::{AppError, AuthError};
use crate::middlewares::auth::bearer_token;
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

#[post("/register")]
#[instrument(skip(state, user))]
pub async fn register(
    state: web::Data<AppState>,
    user: web::Json<NewUser>
) -> Result<impl Responder, AppError> {
    let created = state.auth_handler.register(user.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[post("/login")]
#[instrument(skip(state, user))]
pub async fn login(
    state: web::Data<AppState>,
    user: web::Json<LoginUser>
) -> Result<impl Responder, AppError> {
    let auth_response = state.auth_handler.login(user.into_inner()).await?;
    Ok(HttpResponse::Ok().json(auth_response))
}

#[post("/refresh-token")]
#[instrument(skip(state, request))]
pub async fn refresh_token(
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> Result<impl Responder, AuthError> {
    let auth_response = state.auth_handler.refresh_token(&request.refresh_token).await?;
    Ok(HttpResponse::Ok().json(auth_response))
}

#[post("/logout")]
#[instrument(skip(_claims, request, state, body))]
pub async fn logout(
    _claims: AuthClaims,
    request: HttpRequest,
    state: web::Data<AppState>,
    body: Option<web::Json<LogoutRequest>>,
) -> Result<impl Responder, AuthError> {
    let access_token = bearer_token(request.headers()).ok_or(AuthError::MissingCredentials)?;
    let supplied_refresh = body.and_then(|b| b.into_inner().refresh_token);

    state.auth_handler.logout(&access_token, supplied_refresh.as_deref())?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"message": "Logged out successfully"})))
}

#[get("/me")]
#[instrument(skip(claims, state))]
pub async fn me(
    claims: AuthClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let user = state.auth_handler.me(claims.user_id()?).await?;
    Ok(HttpResponse::Ok().json(user))
}
