mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod logging;
pub mod graceful_shutdown;
pub mod background_task;
pub mod shared_repos;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{auth, db};

use auth::{denylist::TokenDenylist, jwt::JwtService};
use db::memory::MemStore;
use repositories::mem_repo::{
    MemApplicationRepo, MemEmployerProfileRepo, MemJobRepo, MemSeekerProfileRepo, MemUserRepo,
};
use shared_repos::SharedRepositories;
use use_cases::{
    admin::AdminHandler, applications::ApplicationHandler, auth::AuthHandler, jobs::JobHandler,
    profiles::ProfileHandler,
};

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub job_handler: AppJobHandler,
    pub application_handler: AppApplicationHandler,
    pub profile_handler: AppProfileHandler,
    pub admin_handler: AppAdminHandler,
}

pub type AppAuthHandler = AuthHandler<MemUserRepo, JwtService>;
pub type AppJobHandler = JobHandler<MemJobRepo, MemEmployerProfileRepo>;
pub type AppApplicationHandler =
    ApplicationHandler<MemApplicationRepo, MemJobRepo, MemUserRepo, MemSeekerProfileRepo>;
pub type AppProfileHandler = ProfileHandler<MemSeekerProfileRepo, MemEmployerProfileRepo>;
pub type AppAdminHandler = AdminHandler<MemUserRepo, MemJobRepo, MemApplicationRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, store: MemStore) -> Self {
        let repos = SharedRepositories::new(store);
        let jwt_service = JwtService::new(config);

        AppState {
            auth_handler: AuthHandler::new(repos.user_repo.clone(), jwt_service, TokenDenylist::new()),
            job_handler: JobHandler::new(repos.job_repo.clone(), repos.employer_profile_repo.clone()),
            application_handler: ApplicationHandler::new(
                repos.application_repo.clone(),
                repos.job_repo.clone(),
                repos.user_repo.clone(),
                repos.seeker_profile_repo.clone(),
            ),
            profile_handler: ProfileHandler::new(
                repos.seeker_profile_repo.clone(),
                repos.employer_profile_repo.clone(),
            ),
            admin_handler: AdminHandler::new(repos.user_repo, repos.job_repo, repos.application_repo),
        }
    }
}
