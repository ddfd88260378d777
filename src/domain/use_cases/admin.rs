use std::collections::BTreeMap;

use crate::{
    entities::{
        application::ApplicationStatus,
        job_listing::JobListing,
        stats::PlatformStats,
        user::{PublicUser, UserType},
    },
    errors::AppError,
    repositories::{application::ApplicationRepository, job_listing::JobRepository, user::UserRepository},
};

pub struct AdminHandler<U, J, A>
where
    U: UserRepository,
    J: JobRepository,
    A: ApplicationRepository,
{
    pub user_repo: U,
    pub job_repo: J,
    pub application_repo: A,
}

impl<U, J, A> AdminHandler<U, J, A>
where
    U: UserRepository,
    J: JobRepository,
    A: ApplicationRepository,
{
    pub fn new(user_repo: U, job_repo: J, application_repo: A) -> Self {
        AdminHandler { user_repo, job_repo, application_repo }
    }

    pub async fn list_users(&self) -> Result<Vec<PublicUser>, AppError> {
        Ok(self
            .user_repo
            .list_users()
            .await?
            .into_iter()
            .map(PublicUser::from)
            .collect())
    }

    /// Every listing, including deactivated ones
    pub async fn list_all_jobs(&self) -> Result<Vec<JobListing>, AppError> {
        self.job_repo.list_all_jobs().await
    }

    /// Deactivates any listing regardless of owner
    pub async fn deactivate_job(&self, id: i64) -> Result<(), AppError> {
        if !self.job_repo.delete_job(id).await? {
            return Err(AppError::NotFound("Job not found".to_string()));
        }
        tracing::warn!(job_id = id, "Job listing deactivated by admin");
        Ok(())
    }

    pub async fn stats(&self) -> Result<PlatformStats, AppError> {
        let mut users_by_type: BTreeMap<String, u64> = [UserType::Seeker, UserType::Employer, UserType::Admin]
            .iter()
            .map(|t| (t.to_string(), 0))
            .collect();
        for user in self.user_repo.list_users().await? {
            *users_by_type.entry(user.user_type.to_string()).or_default() += 1;
        }

        let counted = self.application_repo.count_applications_by_status().await?;
        let applications_by_status = ApplicationStatus::ALL
            .iter()
            .map(|s| (s.to_string(), counted.get(s).copied().unwrap_or(0)))
            .collect();

        Ok(PlatformStats {
            users_by_type,
            total_jobs: self.job_repo.count_jobs(false).await?,
            active_jobs: self.job_repo.count_jobs(true).await?,
            applications_by_status,
        })
    }
}
