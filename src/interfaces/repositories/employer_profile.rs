use async_trait::async_trait;

use crate::{
    db::memory::MemStore,
    entities::employer_profile::{EmployerProfile, EmployerProfileInsert, UpdateEmployerProfileRequest},
    errors::AppError,
    repositories::mem_repo::MemEmployerProfileRepo,
};

#[async_trait]
pub trait EmployerProfileRepository: Send + Sync {
    async fn get_employer_profile(&self, id: i64) -> Result<Option<EmployerProfile>, AppError>;
    async fn get_employer_profile_by_user_id(&self, user_id: i64) -> Result<Option<EmployerProfile>, AppError>;
    /// Fails with `Conflict` when the user already owns a profile.
    async fn create_employer_profile(&self, profile: &EmployerProfileInsert) -> Result<EmployerProfile, AppError>;
    async fn update_employer_profile(
        &self,
        id: i64,
        patch: &UpdateEmployerProfileRequest,
    ) -> Result<Option<EmployerProfile>, AppError>;
}

impl MemEmployerProfileRepo {
    pub fn new(store: MemStore) -> Self {
        MemEmployerProfileRepo { store }
    }
}

#[async_trait]
impl EmployerProfileRepository for MemEmployerProfileRepo {
    async fn get_employer_profile(&self, id: i64) -> Result<Option<EmployerProfile>, AppError> {
        Ok(self.store.read().employer_profiles.get(id).cloned())
    }

    async fn get_employer_profile_by_user_id(&self, user_id: i64) -> Result<Option<EmployerProfile>, AppError> {
        Ok(self
            .store
            .read()
            .employer_profiles
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn create_employer_profile(&self, profile: &EmployerProfileInsert) -> Result<EmployerProfile, AppError> {
        let mut collections = self.store.write();

        if collections.employer_profiles.find(|p| p.user_id == profile.user_id).is_some() {
            return Err(AppError::Conflict("Profile already exists".to_string()));
        }

        let created = collections.employer_profiles.insert_with(|id| EmployerProfile {
            id,
            user_id: profile.user_id,
            company_name: profile.company_name.clone(),
            company_size: profile.company_size.clone(),
            industry: profile.industry.clone(),
            description: profile.description.clone(),
            location: profile.location.clone(),
            website: profile.website.clone(),
            logo: profile.logo.clone(),
        });

        Ok(created)
    }

    async fn update_employer_profile(
        &self,
        id: i64,
        patch: &UpdateEmployerProfileRequest,
    ) -> Result<Option<EmployerProfile>, AppError> {
        Ok(self
            .store
            .write()
            .employer_profiles
            .update_with(id, |profile| patch.apply(profile)))
    }
}
