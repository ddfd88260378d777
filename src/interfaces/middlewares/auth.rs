use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, AUTHORIZATION},
    web, Error, HttpMessage, ResponseError,
};
use futures_util::future::{ok, Ready, LocalBoxFuture};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{
    entities::{token::Claims, user::UserType},
    errors::AuthError,
    repositories::token::TokenServiceRepository,
    AppState,
};

pub struct AuthMiddleware;

impl<S> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let path = req.path().to_string();

            if is_public_route(&path, req.method().as_str()) {
                return service.call(req).await;
            }

            let claims = match authenticate(&req) {
                Ok(claims) => claims,
                Err(e) => {
                    tracing::warn!(%path, "Rejected request: {}", e);
                    return Ok(req.into_response(e.error_response()));
                }
            };

            if let Err(e) = enforce_admin_access(&path, &claims) {
                tracing::warn!(%path, user = %claims.sub, "Admin access required");
                return Ok(req.into_response(e.error_response()));
            }

            req.extensions_mut().insert(claims);
            service.call(req).await
        })
    }
}

fn is_public_route(path: &str, method: &str) -> bool {
    if method == "OPTIONS" {
        return true;
    }

    if method == "GET" && (path == "/api/jobs" || path.starts_with("/api/jobs/")) {
        return true;
    }

    matches!(
        (path, method),
        ("/", "GET") |
        ("/health", "GET") |
        ("/api/auth/refresh-token", "POST") |
        ("/api/auth/login", "POST") |
        ("/api/auth/register", "POST")
    )
}

/// Token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}

fn authenticate(req: &ServiceRequest) -> Result<Claims, AuthError> {
    let state = req.app_data::<web::Data<AppState>>()
        .ok_or_else(|| {
            tracing::error!("AppState missing in middleware");
            AuthError::MissingJwtService
        })?;

    let token = bearer_token(req.headers()).ok_or(AuthError::MissingCredentials)?;
    let decoded = state.auth_handler.token_service.decode_jwt(&token)?;

    if state.auth_handler.denylist.is_revoked(&decoded.claims.jti) {
        return Err(AuthError::TokenRevoked);
    }
    Ok(decoded.claims)
}

fn enforce_admin_access(path: &str, claims: &Claims) -> Result<(), AuthError> {
    if path == "/api/admin" || path.starts_with("/api/admin/") {
        claims.require_role(UserType::Admin)?;
    }
    Ok(())
}
