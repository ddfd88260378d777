use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[validate(length(min = 1, max = 200, message = "Institution is required"))]
    pub institution: String,
    #[validate(length(min = 1, max = 200, message = "Degree is required"))]
    pub degree: String,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}
