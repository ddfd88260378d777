use validator::Validate;

use crate::auth::denylist::TokenDenylist;
use crate::auth::password::{hash_password, verify_password};
use crate::entities::token::AuthResponse;
use crate::entities::user::{LoginUser, NewUser, PublicUser, User, UserInsert, UserType};
use crate::errors::{AppError, AuthError};
use crate::repositories::token::TokenServiceRepository;
use crate::repositories::user::UserRepository;
use crate::settings::AdminBootstrap;

pub struct AuthHandler<R, T>
where
    R: UserRepository,
    T: TokenServiceRepository,
{
    pub user_repo: R,
    pub token_service: T,
    pub denylist: TokenDenylist,
}

impl<R, T> AuthHandler<R, T>
where
    R: UserRepository,
    T: TokenServiceRepository,
{
    pub fn new(user_repo: R, token_service: T, denylist: TokenDenylist) -> Self {
        AuthHandler {
            user_repo,
            token_service,
            denylist,
        }
    }

    /// Registers a seeker or employer account after validation and password hashing
    pub async fn register(&self, request: NewUser) -> Result<PublicUser, AppError> {
        request.validate()?;

        let user_insert = request.prepare_for_insert(String::new());

        if self.user_repo.get_user_by_username(&user_insert.username).await?.is_some() {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }
        if self.user_repo.get_user_by_email(&user_insert.email).await?.is_some() {
            return Err(AppError::Conflict("User with this email already exists".to_string()));
        }

        let password_hash = hash_password(&request.password)?;
        let user = self.user_repo
            .create_user(&UserInsert { password_hash, ..user_insert })
            .await?;

        tracing::info!(user_id = user.id, user_type = %user.user_type, "User registered");
        Ok(PublicUser::from(user))
    }

    /// Logs in a user by validating credentials and generating JWTs
    pub async fn login(&self, request: LoginUser) -> Result<AuthResponse, AppError> {
        request.validate()?;

        let user = self.user_repo.get_user_by_username(request.username.trim())
            .await?
            .ok_or(AuthError::WrongCredentials)?;

        let is_password_valid = verify_password(&request.password, &user.password_hash)
            .map_err(|e| {
                tracing::warn!("Stored password hash unusable for user {}: {}", user.id, e);
                AuthError::WrongCredentials
            })?;
        if !is_password_valid {
            return Err(AuthError::WrongCredentials.into());
        }

        let response = self.create_auth_response(&user)?;

        tracing::info!(user_id = user.id, "User logged in successfully");
        Ok(response)
    }

    /// Create auth response
    pub fn create_auth_response(&self, user: &User) -> Result<AuthResponse, AuthError> {
        let access_token = self.token_service.create_jwt(user)
            .map_err(|e| {
                tracing::warn!("Failed to create JWT: {}", e);
                AuthError::TokenCreation
            })?;

        let refresh_token = self.token_service.create_refresh_jwt(user.id)
            .map_err(|e| {
                tracing::warn!("Failed to create refresh JWT: {}", e);
                AuthError::TokenCreation
            })?;
        Ok(AuthResponse::new(access_token, refresh_token))
    }

    /// Exchanges a refresh token for a new token pair; the presented refresh token is revoked
    pub async fn refresh_token(&self, token: &str) -> Result<AuthResponse, AuthError> {
        let decoded = self.token_service.decode_refresh_jwt(token)?;
        if self.denylist.is_revoked(&decoded.claims.jti) {
            return Err(AuthError::TokenRevoked);
        }

        let user_id = decoded.claims.sub.parse::<i64>()
            .map_err(|_| AuthError::InvalidUserId)?;

        let user = self.user_repo.get_user_by_id(user_id)
            .await
            .map_err(|_| AuthError::WrongCredentials)?
            .ok_or(AuthError::WrongCredentials)?;

        self.denylist.revoke(&decoded.claims.jti, decoded.claims.exp);
        self.create_auth_response(&user)
    }

    /// Revokes the access token and, when supplied, the refresh token
    pub fn logout(&self, access_token: &str, refresh_token: Option<&str>) -> Result<(), AuthError> {
        let access = self.token_service.decode_jwt(access_token)?;

        let refresh = refresh_token
            .map(|token| self.token_service.decode_refresh_jwt(token))
            .transpose()?;
        if let Some(refresh) = &refresh {
            if refresh.claims.sub != access.claims.sub {
                return Err(AuthError::InvalidToken);
            }
        }

        // Nothing is revoked unless both tokens checked out
        self.denylist.revoke(&access.claims.jti, access.claims.exp);
        if let Some(refresh) = refresh {
            self.denylist.revoke(&refresh.claims.jti, refresh.claims.exp);
        }

        tracing::info!(user_id = %access.claims.sub, "User logged out");
        Ok(())
    }

    pub async fn me(&self, user_id: i64) -> Result<PublicUser, AppError> {
        self.user_repo
            .get_user_by_id(user_id)
            .await?
            .map(PublicUser::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Creates the configured admin account unless the username is already taken
    pub async fn bootstrap_admin(&self, admin: &AdminBootstrap) -> Result<Option<PublicUser>, AppError> {
        if self.user_repo.get_user_by_username(&admin.username).await?.is_some() {
            tracing::info!("Admin account '{}' already present", admin.username);
            return Ok(None);
        }

        let password_hash = hash_password(&admin.password)?;
        let user = self.user_repo
            .create_user(&UserInsert {
                username: admin.username.trim().to_string(),
                email: admin.email.trim().to_lowercase(),
                password_hash,
                name: "Administrator".to_string(),
                user_type: UserType::Admin,
            })
            .await?;

        tracing::info!(user_id = user.id, "Admin account created");
        Ok(Some(PublicUser::from(user)))
    }
}
