use actix_web::web;

use crate::handlers::admin;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(
                web::resource("/users")
                    .route(web::get().to(admin::list_users))
            )
            .service(
                web::resource("/jobs")
                    .route(web::get().to(admin::list_all_jobs))
            )
            .service(
                web::resource("/jobs/{job_id}")
                    .route(web::delete().to(admin::deactivate_job))
            )
            .service(
                web::resource("/stats")
                    .route(web::get().to(admin::platform_stats))
            )
    );
}
