use std::cmp::Reverse;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    db::memory::MemStore,
    entities::job_listing::{JobFilters, JobListing, JobListingInsert, UpdateJobListingRequest},
    errors::AppError,
    repositories::mem_repo::MemJobRepo,
};

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create_job(&self, job: &JobListingInsert) -> Result<JobListing, AppError>;
    /// Returns the listing whether or not it is still active.
    async fn get_job(&self, id: i64) -> Result<Option<JobListing>, AppError>;
    async fn get_jobs_by_ids(&self, ids: &[i64]) -> Result<Vec<JobListing>, AppError>;
    /// Active listings matching `filters`, most recently posted first.
    async fn list_jobs(&self, filters: &JobFilters) -> Result<Vec<JobListing>, AppError>;
    /// Every listing including deactivated ones, most recently posted first.
    async fn list_all_jobs(&self) -> Result<Vec<JobListing>, AppError>;
    async fn update_job(&self, id: i64, patch: &UpdateJobListingRequest) -> Result<Option<JobListing>, AppError>;
    /// Soft delete. `false` when the id does not exist.
    async fn delete_job(&self, id: i64) -> Result<bool, AppError>;
    async fn count_jobs(&self, active_only: bool) -> Result<u64, AppError>;
}

impl MemJobRepo {
    pub fn new(store: MemStore) -> Self {
        MemJobRepo { store }
    }
}

/// Newest first; equal timestamps fall back to the higher (later) id.
fn sort_by_posted_desc(jobs: &mut [JobListing]) {
    jobs.sort_by_key(|job| Reverse((job.posted_at, job.id)));
}

#[async_trait]
impl JobRepository for MemJobRepo {
    async fn create_job(&self, job: &JobListingInsert) -> Result<JobListing, AppError> {
        let mut collections = self.store.write();

        let created = collections.jobs.insert_with(|id| JobListing {
            id,
            employer_id: job.employer_id,
            title: job.title.clone(),
            description: job.description.clone(),
            location: job.location.clone(),
            job_type: job.job_type,
            salary_min: job.salary_min,
            salary_max: job.salary_max,
            skills: job.skills.clone(),
            application_deadline: job.application_deadline,
            posted_at: Utc::now(),
            is_active: true,
        });

        Ok(created)
    }

    async fn get_job(&self, id: i64) -> Result<Option<JobListing>, AppError> {
        Ok(self.store.read().jobs.get(id).cloned())
    }

    async fn get_jobs_by_ids(&self, ids: &[i64]) -> Result<Vec<JobListing>, AppError> {
        let collections = self.store.read();
        Ok(ids.iter().filter_map(|id| collections.jobs.get(*id).cloned()).collect())
    }

    async fn list_jobs(&self, filters: &JobFilters) -> Result<Vec<JobListing>, AppError> {
        let mut jobs: Vec<JobListing> = self
            .store
            .read()
            .jobs
            .values()
            .filter(|job| job.is_active && filters.matches(job))
            .cloned()
            .collect();

        sort_by_posted_desc(&mut jobs);
        Ok(jobs)
    }

    async fn list_all_jobs(&self) -> Result<Vec<JobListing>, AppError> {
        let mut jobs: Vec<JobListing> = self.store.read().jobs.values().cloned().collect();
        sort_by_posted_desc(&mut jobs);
        Ok(jobs)
    }

    async fn update_job(&self, id: i64, patch: &UpdateJobListingRequest) -> Result<Option<JobListing>, AppError> {
        Ok(self.store.write().jobs.update_with(id, |job| patch.apply(job)))
    }

    async fn delete_job(&self, id: i64) -> Result<bool, AppError> {
        let deactivated = self
            .store
            .write()
            .jobs
            .update_with(id, |job| job.is_active = false);

        Ok(deactivated.is_some())
    }

    async fn count_jobs(&self, active_only: bool) -> Result<u64, AppError> {
        let collections = self.store.read();
        let count = collections
            .jobs
            .values()
            .filter(|job| !active_only || job.is_active)
            .count();
        Ok(count as u64)
    }
}
