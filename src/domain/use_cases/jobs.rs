use validator::Validate;

use crate::{
    entities::{
        employer_profile::EmployerProfile,
        job_listing::{JobFilters, JobListing, NewJobListingRequest, UpdateJobListingRequest},
    },
    errors::AppError,
    repositories::{employer_profile::EmployerProfileRepository, job_listing::JobRepository},
};

pub struct JobHandler<J, E>
where
    J: JobRepository,
    E: EmployerProfileRepository,
{
    pub job_repo: J,
    pub employer_profile_repo: E,
}

impl<J, E> JobHandler<J, E>
where
    J: JobRepository,
    E: EmployerProfileRepository,
{
    pub fn new(job_repo: J, employer_profile_repo: E) -> Self {
        JobHandler { job_repo, employer_profile_repo }
    }

    /// Active listings matching the filters
    pub async fn list_jobs(&self, filters: &JobFilters) -> Result<Vec<JobListing>, AppError> {
        self.job_repo.list_jobs(filters).await
    }

    /// Retrieves a listing by id, active or not
    pub async fn get_job(&self, id: i64) -> Result<JobListing, AppError> {
        self.job_repo
            .get_job(id)
            .await?
            .ok_or_else(job_not_found)
    }

    /// Employer profile of the user who posted the listing
    pub async fn get_job_employer(&self, id: i64) -> Result<EmployerProfile, AppError> {
        let job = self.get_job(id).await?;
        self.employer_profile_repo
            .get_employer_profile_by_user_id(job.employer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Employer profile not found".to_string()))
    }

    /// Creates a listing owned by `employer_id`
    pub async fn create_job(&self, employer_id: i64, request: NewJobListingRequest) -> Result<JobListing, AppError> {
        request.validate()?;

        let insert = request
            .prepare_for_insert(employer_id)
            .ok_or_else(|| AppError::invalid_field("job_type", "Job type is required"))?;

        let job = self.job_repo.create_job(&insert).await?;
        tracing::info!(job_id = job.id, employer_id, "Job listing created");
        Ok(job)
    }

    /// Merges `patch` into a listing the caller owns
    pub async fn update_job(
        &self,
        employer_id: i64,
        id: i64,
        patch: &UpdateJobListingRequest,
    ) -> Result<JobListing, AppError> {
        self.owned_job(employer_id, id).await?;

        self.job_repo
            .update_job(id, patch)
            .await?
            .ok_or_else(job_not_found)
    }

    /// Deactivates a listing the caller owns
    pub async fn delete_job(&self, employer_id: i64, id: i64) -> Result<(), AppError> {
        self.owned_job(employer_id, id).await?;

        if !self.job_repo.delete_job(id).await? {
            return Err(job_not_found());
        }
        tracing::info!(job_id = id, employer_id, "Job listing deactivated");
        Ok(())
    }

    async fn owned_job(&self, employer_id: i64, id: i64) -> Result<JobListing, AppError> {
        let job = self.get_job(id).await?;
        if job.employer_id != employer_id {
            return Err(AppError::ForbiddenAccess("You can only modify your own job listings".to_string()));
        }
        Ok(job)
    }
}

fn job_not_found() -> AppError {
    AppError::NotFound("Job not found".to_string())
}
