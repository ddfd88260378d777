use validator::Validate;

use crate::{
    entities::{
        employer_profile::{EmployerProfile, NewEmployerProfileRequest, UpdateEmployerProfileRequest},
        seeker_profile::{NewSeekerProfileRequest, SeekerProfile, UpdateSeekerProfileRequest},
    },
    errors::AppError,
    repositories::{employer_profile::EmployerProfileRepository, seeker_profile::SeekerProfileRepository},
};

pub struct ProfileHandler<S, E>
where
    S: SeekerProfileRepository,
    E: EmployerProfileRepository,
{
    pub seeker_profile_repo: S,
    pub employer_profile_repo: E,
}

impl<S, E> ProfileHandler<S, E>
where
    S: SeekerProfileRepository,
    E: EmployerProfileRepository,
{
    pub fn new(seeker_profile_repo: S, employer_profile_repo: E) -> Self {
        ProfileHandler {
            seeker_profile_repo,
            employer_profile_repo,
        }
    }

    pub async fn get_seeker_profile(&self, user_id: i64) -> Result<SeekerProfile, AppError> {
        self.seeker_profile_repo
            .get_seeker_profile_by_user_id(user_id)
            .await?
            .ok_or_else(profile_not_found)
    }

    /// One profile per user
    pub async fn create_seeker_profile(
        &self,
        user_id: i64,
        request: NewSeekerProfileRequest,
    ) -> Result<SeekerProfile, AppError> {
        request.validate()?;

        if self.seeker_profile_repo.get_seeker_profile_by_user_id(user_id).await?.is_some() {
            return Err(profile_exists());
        }

        let profile = self
            .seeker_profile_repo
            .create_seeker_profile(&request.prepare_for_insert(user_id))
            .await?;
        tracing::info!(profile_id = profile.id, user_id, "Seeker profile created");
        Ok(profile)
    }

    pub async fn update_seeker_profile(
        &self,
        user_id: i64,
        profile_id: i64,
        patch: &UpdateSeekerProfileRequest,
    ) -> Result<SeekerProfile, AppError> {
        let existing = self
            .seeker_profile_repo
            .get_seeker_profile(profile_id)
            .await?
            .ok_or_else(profile_not_found)?;
        ensure_owner(existing.user_id, user_id)?;

        self.seeker_profile_repo
            .update_seeker_profile(profile_id, patch)
            .await?
            .ok_or_else(profile_not_found)
    }

    pub async fn get_employer_profile(&self, user_id: i64) -> Result<EmployerProfile, AppError> {
        self.employer_profile_repo
            .get_employer_profile_by_user_id(user_id)
            .await?
            .ok_or_else(profile_not_found)
    }

    pub async fn create_employer_profile(
        &self,
        user_id: i64,
        request: NewEmployerProfileRequest,
    ) -> Result<EmployerProfile, AppError> {
        request.validate()?;

        if self.employer_profile_repo.get_employer_profile_by_user_id(user_id).await?.is_some() {
            return Err(profile_exists());
        }

        let profile = self
            .employer_profile_repo
            .create_employer_profile(&request.prepare_for_insert(user_id))
            .await?;
        tracing::info!(profile_id = profile.id, user_id, "Employer profile created");
        Ok(profile)
    }

    pub async fn update_employer_profile(
        &self,
        user_id: i64,
        profile_id: i64,
        patch: &UpdateEmployerProfileRequest,
    ) -> Result<EmployerProfile, AppError> {
        let existing = self
            .employer_profile_repo
            .get_employer_profile(profile_id)
            .await?
            .ok_or_else(profile_not_found)?;
        ensure_owner(existing.user_id, user_id)?;

        self.employer_profile_repo
            .update_employer_profile(profile_id, patch)
            .await?
            .ok_or_else(profile_not_found)
    }
}

fn ensure_owner(owner_id: i64, user_id: i64) -> Result<(), AppError> {
    if owner_id != user_id {
        return Err(AppError::ForbiddenAccess("You can only update your own profile".to_string()));
    }
    Ok(())
}

fn profile_not_found() -> AppError {
    AppError::NotFound("Profile not found".to_string())
}

fn profile_exists() -> AppError {
    AppError::Conflict("Profile already exists".to_string())
}
