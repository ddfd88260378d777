use async_trait::async_trait;

use crate::{
    db::memory::MemStore,
    entities::seeker_profile::{SeekerProfile, SeekerProfileInsert, UpdateSeekerProfileRequest},
    errors::AppError,
    repositories::mem_repo::MemSeekerProfileRepo,
};

#[async_trait]
pub trait SeekerProfileRepository: Send + Sync {
    async fn get_seeker_profile(&self, id: i64) -> Result<Option<SeekerProfile>, AppError>;
    async fn get_seeker_profile_by_user_id(&self, user_id: i64) -> Result<Option<SeekerProfile>, AppError>;
    async fn get_seeker_profiles_by_user_ids(&self, user_ids: &[i64]) -> Result<Vec<SeekerProfile>, AppError>;
    /// Fails with `Conflict` when the user already owns a profile.
    async fn create_seeker_profile(&self, profile: &SeekerProfileInsert) -> Result<SeekerProfile, AppError>;
    async fn update_seeker_profile(
        &self,
        id: i64,
        patch: &UpdateSeekerProfileRequest,
    ) -> Result<Option<SeekerProfile>, AppError>;
}

impl MemSeekerProfileRepo {
    pub fn new(store: MemStore) -> Self {
        MemSeekerProfileRepo { store }
    }
}

#[async_trait]
impl SeekerProfileRepository for MemSeekerProfileRepo {
    async fn get_seeker_profile(&self, id: i64) -> Result<Option<SeekerProfile>, AppError> {
        Ok(self.store.read().seeker_profiles.get(id).cloned())
    }

    async fn get_seeker_profile_by_user_id(&self, user_id: i64) -> Result<Option<SeekerProfile>, AppError> {
        Ok(self
            .store
            .read()
            .seeker_profiles
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn get_seeker_profiles_by_user_ids(&self, user_ids: &[i64]) -> Result<Vec<SeekerProfile>, AppError> {
        Ok(self
            .store
            .read()
            .seeker_profiles
            .values()
            .filter(|p| user_ids.contains(&p.user_id))
            .cloned()
            .collect())
    }

    async fn create_seeker_profile(&self, profile: &SeekerProfileInsert) -> Result<SeekerProfile, AppError> {
        let mut collections = self.store.write();

        if collections.seeker_profiles.find(|p| p.user_id == profile.user_id).is_some() {
            return Err(AppError::Conflict("Profile already exists".to_string()));
        }

        let created = collections.seeker_profiles.insert_with(|id| SeekerProfile {
            id,
            user_id: profile.user_id,
            title: profile.title.clone(),
            skills: profile.skills.clone(),
            education: profile.education.clone(),
            experience: profile.experience.clone(),
            bio: profile.bio.clone(),
            location: profile.location.clone(),
            phone: profile.phone.clone(),
            resume: profile.resume.clone(),
        });

        Ok(created)
    }

    async fn update_seeker_profile(
        &self,
        id: i64,
        patch: &UpdateSeekerProfileRequest,
    ) -> Result<Option<SeekerProfile>, AppError> {
        Ok(self
            .store
            .write()
            .seeker_profiles
            .update_with(id, |profile| patch.apply(profile)))
    }
}
