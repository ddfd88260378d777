use actix_web::{FromRequest, HttpRequest, HttpMessage};
use futures_util::future::{ready, Ready};

use crate::{entities::{token::Claims, user::UserType}, errors::AuthError};

/// Extractor for authenticated claims, ensuring the user is authenticated.
/// Returns 401 if the user is not authenticated.
/// Usage: Add `claims: AuthClaims` as a parameter to your handler function.
#[derive(Debug)]
pub struct AuthClaims(pub Claims);

impl AuthClaims {
    pub fn user_id(&self) -> Result<i64, AuthError> {
        self.0.user_id()
    }
}

impl FromRequest for AuthClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(claims_with_role(req, None).map(AuthClaims))
    }
}

/// Claims are inserted by the auth middleware. 401 when absent, 403 when the role differs.
fn claims_with_role(req: &HttpRequest, role: Option<UserType>) -> Result<Claims, actix_web::Error> {
    let claims = req.extensions()
        .get::<Claims>()
        .cloned()
        .ok_or(AuthError::MissingCredentials)?;

    if let Some(role) = role {
        claims.require_role(role)?;
    }
    Ok(claims)
}

macro_rules! role_extractor {
    ($(#[$meta:meta])* $name:ident, $role:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name(pub Claims);

        impl $name {
            pub fn user_id(&self) -> Result<i64, AuthError> {
                self.0.user_id()
            }
        }

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
                ready(claims_with_role(req, Some($role)).map($name))
            }
        }
    };
}

role_extractor!(
    /// Caller must hold the seeker role.
    SeekerClaims,
    UserType::Seeker
);

role_extractor!(
    /// Caller must hold the employer role.
    EmployerClaims,
    UserType::Employer
);

role_extractor!(
    /// Extractor for admin claims, ensuring the user has admin privileges.
    /// Returns 403 if the user is not an admin.
    /// Returns 401 if the user is not authenticated.
    AdminClaims,
    UserType::Admin
);
