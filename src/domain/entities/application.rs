use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{
    job_listing::JobListing,
    option_fields::PatchString,
    seeker_profile::SeekerProfile,
    user::PublicUser,
};

const MAX_COVER_LETTER_LENGTH: u64 = 10_000;
const MAX_RESUME_LENGTH: u64 = 2_048;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Reviewing,
    Interview,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Reviewing,
        ApplicationStatus::Interview,
        ApplicationStatus::Rejected,
        ApplicationStatus::Accepted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Accepted => "accepted",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                let allowed = ApplicationStatus::ALL
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Status must be one of: {allowed}")
            })
    }
}

// ───── Stored Models ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: i64,
    pub job_id: i64,
    pub seeker_id: i64,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub resume: Option<String>,
    pub applied_at: DateTime<Utc>,
}

/// Create-time subset; the store assigns `id`, `appliedAt` and the initial status.
#[derive(Debug, Clone)]
pub struct JobApplicationInsert {
    pub job_id: i64,
    pub seeker_id: i64,
    pub cover_letter: Option<String>,
    pub resume: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct JobApplicationPatch {
    pub status: Option<ApplicationStatus>,
    pub cover_letter: PatchString,
    pub resume: PatchString,
}

impl JobApplicationPatch {
    pub fn status(status: ApplicationStatus) -> Self {
        JobApplicationPatch {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn apply(&self, application: &mut JobApplication) {
        if let Some(status) = self.status {
            application.status = status;
        }
        self.cover_letter.apply_to(&mut application.cover_letter);
        self.resume.apply_to(&mut application.resume);
    }
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct NewApplicationRequest {
    #[validate(required(message = "Job id is required"), range(min = 1, message = "Invalid job id"))]
    pub job_id: Option<i64>,

    #[validate(length(max = MAX_COVER_LETTER_LENGTH, message = "Cover letter is too long"))]
    pub cover_letter: Option<String>,

    #[validate(length(max = MAX_RESUME_LENGTH, message = "Resume reference is too long"))]
    pub resume: Option<String>,
}

/// Body of `PUT /api/applications/{id}/status`. Kept as a raw string so an
/// unknown status surfaces as a field-level validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateApplicationStatusRequest {
    pub status: Option<String>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationWithJob {
    #[serde(flatten)]
    pub application: JobApplication,
    pub job: Option<JobListing>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationWithSeeker {
    #[serde(flatten)]
    pub application: JobApplication,
    pub seeker: Option<PublicUser>,
    pub profile: Option<SeekerProfile>,
}
