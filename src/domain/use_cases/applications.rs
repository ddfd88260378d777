use std::collections::HashMap;

use validator::Validate;

use crate::{
    entities::{
        application::{
            ApplicationStatus, ApplicationWithJob, ApplicationWithSeeker, JobApplication,
            JobApplicationInsert, JobApplicationPatch, NewApplicationRequest,
        },
        user::PublicUser,
    },
    errors::AppError,
    repositories::{
        application::ApplicationRepository, job_listing::JobRepository,
        seeker_profile::SeekerProfileRepository, user::UserRepository,
    },
};

pub struct ApplicationHandler<A, J, U, S>
where
    A: ApplicationRepository,
    J: JobRepository,
    U: UserRepository,
    S: SeekerProfileRepository,
{
    pub application_repo: A,
    pub job_repo: J,
    pub user_repo: U,
    pub seeker_profile_repo: S,
}

impl<A, J, U, S> ApplicationHandler<A, J, U, S>
where
    A: ApplicationRepository,
    J: JobRepository,
    U: UserRepository,
    S: SeekerProfileRepository,
{
    pub fn new(application_repo: A, job_repo: J, user_repo: U, seeker_profile_repo: S) -> Self {
        ApplicationHandler {
            application_repo,
            job_repo,
            user_repo,
            seeker_profile_repo,
        }
    }

    /// Submits an application for `seeker_id`; the job must exist and still be active
    pub async fn apply(&self, seeker_id: i64, request: NewApplicationRequest) -> Result<JobApplication, AppError> {
        request.validate()?;

        let job_id = request
            .job_id
            .ok_or_else(|| AppError::invalid_field("job_id", "Job id is required"))?;

        match self.job_repo.get_job(job_id).await? {
            Some(job) if job.is_active => {}
            _ => return Err(AppError::NotFound("Job not found".to_string())),
        }

        let already_applied = self
            .application_repo
            .list_applications_by_seeker(seeker_id)
            .await?
            .iter()
            .any(|a| a.job_id == job_id);
        if already_applied {
            return Err(AppError::Conflict("You have already applied to this job".to_string()));
        }

        let application = self
            .application_repo
            .create_application(&JobApplicationInsert {
                job_id,
                seeker_id,
                cover_letter: request.cover_letter,
                resume: request.resume,
            })
            .await?;

        tracing::info!(application_id = application.id, job_id, seeker_id, "Application submitted");
        Ok(application)
    }

    /// The seeker's applications, each with its listing attached
    pub async fn list_for_seeker(&self, seeker_id: i64) -> Result<Vec<ApplicationWithJob>, AppError> {
        let applications = self.application_repo.list_applications_by_seeker(seeker_id).await?;

        let job_ids: Vec<i64> = applications.iter().map(|a| a.job_id).collect();
        let jobs: HashMap<i64, _> = self
            .job_repo
            .get_jobs_by_ids(&job_ids)
            .await?
            .into_iter()
            .map(|job| (job.id, job))
            .collect();

        Ok(applications
            .into_iter()
            .map(|application| ApplicationWithJob {
                job: jobs.get(&application.job_id).cloned(),
                application,
            })
            .collect())
    }

    /// Applicants of a listing owned by `employer_id`, with public user and seeker profile
    pub async fn list_for_job(&self, employer_id: i64, job_id: i64) -> Result<Vec<ApplicationWithSeeker>, AppError> {
        let job = self
            .job_repo
            .get_job(job_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;
        if job.employer_id != employer_id {
            return Err(AppError::ForbiddenAccess("You can only view applications for your own jobs".to_string()));
        }

        let applications = self.application_repo.list_applications_by_job(job_id).await?;
        let seeker_ids: Vec<i64> = applications.iter().map(|a| a.seeker_id).collect();

        let users: HashMap<i64, PublicUser> = self
            .user_repo
            .get_users_by_ids(&seeker_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, PublicUser::from(user)))
            .collect();
        let profiles: HashMap<i64, _> = self
            .seeker_profile_repo
            .get_seeker_profiles_by_user_ids(&seeker_ids)
            .await?
            .into_iter()
            .map(|profile| (profile.user_id, profile))
            .collect();

        Ok(applications
            .into_iter()
            .map(|application| ApplicationWithSeeker {
                seeker: users.get(&application.seeker_id).cloned(),
                profile: profiles.get(&application.seeker_id).cloned(),
                application,
            })
            .collect())
    }

    /// Moves an application to `status`; only the employer owning the job may do so
    pub async fn update_status(
        &self,
        employer_id: i64,
        application_id: i64,
        status: Option<&str>,
    ) -> Result<JobApplication, AppError> {
        let status = status
            .ok_or_else(|| AppError::invalid_field("status", "Status is required"))?
            .parse::<ApplicationStatus>()
            .map_err(|msg| AppError::invalid_field("status", msg))?;

        let application = self
            .application_repo
            .get_application(application_id)
            .await?
            .ok_or_else(application_not_found)?;

        let owns_job = self
            .job_repo
            .get_job(application.job_id)
            .await?
            .is_some_and(|job| job.employer_id == employer_id);
        if !owns_job {
            return Err(AppError::ForbiddenAccess("You can only update applications for your own jobs".to_string()));
        }

        let updated = self
            .application_repo
            .update_application(application_id, &JobApplicationPatch::status(status))
            .await?
            .ok_or_else(application_not_found)?;

        tracing::info!(application_id, status = %status, "Application status updated");
        Ok(updated)
    }
}

fn application_not_found() -> AppError {
    AppError::NotFound("Application not found".to_string())
}
