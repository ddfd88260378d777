use std::cmp::Reverse;
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    db::memory::MemStore,
    entities::application::{ApplicationStatus, JobApplication, JobApplicationInsert, JobApplicationPatch},
    errors::AppError,
    repositories::mem_repo::MemApplicationRepo,
};

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn get_application(&self, id: i64) -> Result<Option<JobApplication>, AppError>;
    /// Most recent first.
    async fn list_applications_by_seeker(&self, seeker_id: i64) -> Result<Vec<JobApplication>, AppError>;
    /// Most recent first.
    async fn list_applications_by_job(&self, job_id: i64) -> Result<Vec<JobApplication>, AppError>;
    /// Stores a new application with status `applied`. Fails with `Conflict`
    /// when the seeker already applied to the job.
    async fn create_application(&self, application: &JobApplicationInsert) -> Result<JobApplication, AppError>;
    async fn update_application(
        &self,
        id: i64,
        patch: &JobApplicationPatch,
    ) -> Result<Option<JobApplication>, AppError>;
    async fn count_applications_by_status(&self) -> Result<BTreeMap<ApplicationStatus, u64>, AppError>;
}

impl MemApplicationRepo {
    pub fn new(store: MemStore) -> Self {
        MemApplicationRepo { store }
    }

    fn list_where(&self, predicate: impl Fn(&JobApplication) -> bool) -> Vec<JobApplication> {
        let mut applications: Vec<JobApplication> = self
            .store
            .read()
            .applications
            .values()
            .filter(|a| predicate(a))
            .cloned()
            .collect();

        applications.sort_by_key(|a| Reverse((a.applied_at, a.id)));
        applications
    }
}

#[async_trait]
impl ApplicationRepository for MemApplicationRepo {
    async fn get_application(&self, id: i64) -> Result<Option<JobApplication>, AppError> {
        Ok(self.store.read().applications.get(id).cloned())
    }

    async fn list_applications_by_seeker(&self, seeker_id: i64) -> Result<Vec<JobApplication>, AppError> {
        Ok(self.list_where(|a| a.seeker_id == seeker_id))
    }

    async fn list_applications_by_job(&self, job_id: i64) -> Result<Vec<JobApplication>, AppError> {
        Ok(self.list_where(|a| a.job_id == job_id))
    }

    async fn create_application(&self, application: &JobApplicationInsert) -> Result<JobApplication, AppError> {
        let mut collections = self.store.write();

        let duplicate = collections
            .applications
            .find(|a| a.job_id == application.job_id && a.seeker_id == application.seeker_id)
            .is_some();
        if duplicate {
            return Err(AppError::Conflict("You have already applied to this job".to_string()));
        }

        let created = collections.applications.insert_with(|id| JobApplication {
            id,
            job_id: application.job_id,
            seeker_id: application.seeker_id,
            status: ApplicationStatus::Applied,
            cover_letter: application.cover_letter.clone(),
            resume: application.resume.clone(),
            applied_at: Utc::now(),
        });

        Ok(created)
    }

    async fn update_application(
        &self,
        id: i64,
        patch: &JobApplicationPatch,
    ) -> Result<Option<JobApplication>, AppError> {
        Ok(self
            .store
            .write()
            .applications
            .update_with(id, |application| patch.apply(application)))
    }

    async fn count_applications_by_status(&self) -> Result<BTreeMap<ApplicationStatus, u64>, AppError> {
        let mut counts = BTreeMap::new();
        for application in self.store.read().applications.values() {
            *counts.entry(application.status).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
