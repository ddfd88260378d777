use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::job_listing::validate_not_blank;
use crate::entities::option_fields::PatchString;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerProfile {
    pub id: i64,
    pub user_id: i64,
    pub company_name: String,
    pub company_size: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EmployerProfileInsert {
    pub user_id: i64,
    pub company_name: String,
    pub company_size: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEmployerProfileRequest {
    #[validate(
        length(min = 1, max = 200, message = "Company name is required"),
        custom(function = "validate_not_blank")
    )]
    pub company_name: String,

    #[validate(length(max = 50))]
    pub company_size: Option<String>,

    #[validate(length(max = 100))]
    pub industry: Option<String>,

    #[validate(length(max = 10_000))]
    pub description: Option<String>,

    #[validate(length(max = 200))]
    pub location: Option<String>,

    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,

    #[validate(url(message = "Logo must be a valid URL"))]
    pub logo: Option<String>,
}

impl NewEmployerProfileRequest {
    pub fn prepare_for_insert(self, user_id: i64) -> EmployerProfileInsert {
        EmployerProfileInsert {
            user_id,
            company_name: self.company_name.trim().to_string(),
            company_size: self.company_size,
            industry: self.industry,
            description: self.description,
            location: self.location,
            website: self.website,
            logo: self.logo,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateEmployerProfileRequest {
    pub company_name: Option<String>,
    pub company_size: PatchString,
    pub industry: PatchString,
    pub description: PatchString,
    pub location: PatchString,
    pub website: PatchString,
    pub logo: PatchString,
}

impl UpdateEmployerProfileRequest {
    pub fn apply(&self, profile: &mut EmployerProfile) {
        if let Some(company_name) = &self.company_name {
            profile.company_name = company_name.clone();
        }
        self.company_size.apply_to(&mut profile.company_size);
        self.industry.apply_to(&mut profile.industry);
        self.description.apply_to(&mut profile.description);
        self.location.apply_to(&mut profile.location);
        self.website.apply_to(&mut profile.website);
        self.logo.apply_to(&mut profile.logo);
    }
}
