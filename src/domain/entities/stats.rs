use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub users_by_type: BTreeMap<String, u64>,
    pub total_jobs: u64,
    pub active_jobs: u64,
    pub applications_by_status: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreCounts {
    pub users: u64,
    pub jobs: u64,
    pub applications: u64,
}
