use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::entities::{
    education::Education,
    experience::Experience,
    option_fields::PatchString,
};

const MAX_BIO_LENGTH: u64 = 5_000;
const MAX_PHONE_LENGTH: u64 = 32;
const MAX_SKILLS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeekerProfile {
    pub id: i64,
    pub user_id: i64,
    pub title: Option<String>,
    pub skills: Vec<String>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub resume: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SeekerProfileInsert {
    pub user_id: i64,
    pub title: Option<String>,
    pub skills: Vec<String>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub resume: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct NewSeekerProfileRequest {
    #[validate(length(max = 200))]
    pub title: Option<String>,

    #[validate(custom(function = "validate_profile_skills"))]
    pub skills: Vec<String>,

    #[validate(nested)]
    pub education: Vec<Education>,

    #[validate(nested)]
    pub experience: Vec<Experience>,

    #[validate(length(max = MAX_BIO_LENGTH, message = "Bio is too long"))]
    pub bio: Option<String>,

    #[validate(length(max = 200))]
    pub location: Option<String>,

    #[validate(length(max = MAX_PHONE_LENGTH, message = "Phone number is too long"))]
    pub phone: Option<String>,

    #[validate(length(max = 2048))]
    pub resume: Option<String>,
}

impl NewSeekerProfileRequest {
    pub fn prepare_for_insert(self, user_id: i64) -> SeekerProfileInsert {
        SeekerProfileInsert {
            user_id,
            title: self.title,
            skills: self.skills,
            education: self.education,
            experience: self.experience,
            bio: self.bio,
            location: self.location,
            phone: self.phone,
            resume: self.resume,
        }
    }
}

/// Shallow-merge patch: lists replace the stored list as a whole.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateSeekerProfileRequest {
    pub title: PatchString,
    pub skills: Option<Vec<String>>,
    pub education: Option<Vec<Education>>,
    pub experience: Option<Vec<Experience>>,
    pub bio: PatchString,
    pub location: PatchString,
    pub phone: PatchString,
    pub resume: PatchString,
}

impl UpdateSeekerProfileRequest {
    pub fn apply(&self, profile: &mut SeekerProfile) {
        self.title.apply_to(&mut profile.title);
        if let Some(skills) = &self.skills {
            profile.skills = skills.clone();
        }
        if let Some(education) = &self.education {
            profile.education = education.clone();
        }
        if let Some(experience) = &self.experience {
            profile.experience = experience.clone();
        }
        self.bio.apply_to(&mut profile.bio);
        self.location.apply_to(&mut profile.location);
        self.phone.apply_to(&mut profile.phone);
        self.resume.apply_to(&mut profile.resume);
    }
}

fn validate_profile_skills(skills: &[String]) -> Result<(), ValidationError> {
    if skills.len() > MAX_SKILLS {
        let mut error = ValidationError::new("skills_count");
        error.message = Some(format!("At most {} skills are allowed", MAX_SKILLS).into());
        return Err(error);
    }
    if skills.iter().any(|s| s.trim().is_empty()) {
        let mut error = ValidationError::new("skills_empty");
        error.message = Some("Skills cannot be blank".into());
        return Err(error);
    }
    Ok(())
}
