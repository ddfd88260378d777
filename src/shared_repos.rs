use crate::{
    db::memory::MemStore,
    repositories::mem_repo::{
        MemApplicationRepo, MemEmployerProfileRepo, MemJobRepo, MemSeekerProfileRepo, MemUserRepo,
    },
};

/// One repository per entity, all backed by the same store.
#[derive(Clone)]
pub struct SharedRepositories {
    pub user_repo: MemUserRepo,
    pub seeker_profile_repo: MemSeekerProfileRepo,
    pub employer_profile_repo: MemEmployerProfileRepo,
    pub job_repo: MemJobRepo,
    pub application_repo: MemApplicationRepo,
}

impl SharedRepositories {
    pub fn new(store: MemStore) -> Self {
        let user_repo = MemUserRepo::new(store.clone());
        let seeker_profile_repo = MemSeekerProfileRepo::new(store.clone());
        let employer_profile_repo = MemEmployerProfileRepo::new(store.clone());
        let job_repo = MemJobRepo::new(store.clone());
        let application_repo = MemApplicationRepo::new(store);

        SharedRepositories {
            user_repo,
            seeker_profile_repo,
            employer_profile_repo,
            job_repo,
            application_repo,
        }
    }
}
