use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod auth;
mod jobs;
mod applications;
mod profiles;
mod admin;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .configure(auth::config_routes)
            .configure(jobs::config_routes)
            .configure(applications::config_routes)
            .configure(profiles::config_routes)
            .configure(admin::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
