use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::entities::option_fields::OptionField;

// ───── Constants ──────────────────────────────────────────────────────
const MAX_TITLE_LENGTH: u64 = 200;
const MAX_LOCATION_LENGTH: u64 = 200;
const MAX_DESCRIPTION_LENGTH: u64 = 20_000;
const MAX_SKILLS: usize = 50;
const MAX_SKILL_LENGTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Remote,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Remote => "remote",
        }
    }

    pub fn parse(value: &str) -> Option<JobType> {
        match value {
            "full-time" => Some(JobType::FullTime),
            "part-time" => Some(JobType::PartTime),
            "contract" => Some(JobType::Contract),
            "remote" => Some(JobType::Remote),
            _ => None,
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ───── Stored Models ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: i64,
    pub employer_id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub job_type: JobType,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub skills: Vec<String>,
    pub application_deadline: Option<DateTime<Utc>>,
    pub posted_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Create-time subset; `id`, `postedAt` and `isActive` belong to the store.
#[derive(Debug, Clone)]
pub struct JobListingInsert {
    pub employer_id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub job_type: JobType,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub skills: Vec<String>,
    pub application_deadline: Option<DateTime<Utc>>,
}

// ───── Input & Validation ───────────────────────────────────────────

/// Body of `POST /api/jobs`. Any `employerId` sent by the client is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct NewJobListingRequest {
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH, message = "Title is required"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[validate(
        length(min = 1, max = MAX_DESCRIPTION_LENGTH, message = "Description is required"),
        custom(function = "validate_not_blank")
    )]
    pub description: String,

    #[validate(
        length(min = 1, max = MAX_LOCATION_LENGTH, message = "Location is required"),
        custom(function = "validate_not_blank")
    )]
    pub location: String,

    /// Kept as text so an unknown value is reported against `job_type`.
    #[validate(required(message = "Job type is required"), custom(function = "validate_job_type"))]
    pub job_type: Option<String>,

    #[validate(range(min = 0, message = "Salary cannot be negative"))]
    pub salary_min: Option<i64>,

    #[validate(range(min = 0, message = "Salary cannot be negative"))]
    pub salary_max: Option<i64>,

    #[validate(custom(function = "validate_skills"))]
    pub skills: Vec<String>,

    pub application_deadline: Option<DateTime<Utc>>,
}

impl NewJobListingRequest {
    pub fn prepare_for_insert(self, employer_id: i64) -> Option<JobListingInsert> {
        Some(JobListingInsert {
            employer_id,
            title: self.title.trim().to_string(),
            description: self.description,
            location: self.location.trim().to_string(),
            job_type: self.job_type.as_deref().and_then(JobType::parse)?,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            skills: normalize_skills(self.skills),
            application_deadline: self.application_deadline,
        })
    }
}

/// Partial update of a listing. No validation rules run on it; absent keys are kept,
/// present keys replace the stored value wholesale. `isActive` is not patchable,
/// only deletion changes it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateJobListingRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub salary_min: OptionField<i64>,
    pub salary_max: OptionField<i64>,
    pub skills: Option<Vec<String>>,
    pub application_deadline: OptionField<DateTime<Utc>>,
}

impl UpdateJobListingRequest {
    pub fn apply(&self, job: &mut JobListing) {
        if let Some(title) = &self.title {
            job.title = title.clone();
        }
        if let Some(description) = &self.description {
            job.description = description.clone();
        }
        if let Some(location) = &self.location {
            job.location = location.clone();
        }
        if let Some(job_type) = self.job_type {
            job.job_type = job_type;
        }
        self.salary_min.apply_to(&mut job.salary_min);
        self.salary_max.apply_to(&mut job.salary_max);
        if let Some(skills) = &self.skills {
            job.skills = skills.clone();
        }
        self.application_deadline.apply_to(&mut job.application_deadline);
    }
}

/// Query of `GET /api/jobs`. All filters are optional and AND-combined.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilters {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub employer_id: Option<i64>,
}

impl JobFilters {
    /// Case-insensitive predicate used by the listing query.
    pub fn matches(&self, job: &JobListing) -> bool {
        if let Some(keyword) = non_empty(&self.keyword) {
            let keyword = keyword.to_lowercase();
            let hit = job.title.to_lowercase().contains(&keyword)
                || job.description.to_lowercase().contains(&keyword)
                || job.skills.iter().any(|s| s.to_lowercase().contains(&keyword));
            if !hit {
                return false;
            }
        }

        if let Some(location) = non_empty(&self.location) {
            if !job.location.to_lowercase().contains(&location.to_lowercase()) {
                return false;
            }
        }

        if let Some(job_type) = non_empty(&self.job_type) {
            if job.job_type.as_str() != job_type {
                return false;
            }
        }

        match self.employer_id {
            Some(employer_id) => job.employer_id == employer_id,
            None => true,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn validate_skills(skills: &[String]) -> Result<(), ValidationError> {
    if skills.len() > MAX_SKILLS {
        let mut error = ValidationError::new("skills_count");
        error.message = Some(format!("At most {} skills are allowed", MAX_SKILLS).into());
        return Err(error);
    }

    if skills.iter().any(|s| s.chars().count() > MAX_SKILL_LENGTH) {
        let mut error = ValidationError::new("skill_length");
        error.message = Some(format!("Each skill must be at most {} characters", MAX_SKILL_LENGTH).into());
        return Err(error);
    }

    Ok(())
}

/// Rejects text that is empty once surrounding whitespace is trimmed.
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Cannot be blank".into());
        return Err(error);
    }
    Ok(())
}

fn validate_job_type(value: &str) -> Result<(), ValidationError> {
    if JobType::parse(value).is_none() {
        let mut error = ValidationError::new("job_type");
        error.message = Some("Must be one of full-time, part-time, contract, remote".into());
        return Err(error);
    }
    Ok(())
}
