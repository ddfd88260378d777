use actix_web::web;

use crate::handlers::jobs;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/jobs")
            .service(
                web::resource("")
                    .route(web::get().to(jobs::list_jobs))
                    .route(web::post().to(jobs::create_job))
            )
            .service(
                web::resource("/{job_id}")
                    .route(web::get().to(jobs::get_job))
                    .route(web::put().to(jobs::update_job))
                    .route(web::delete().to(jobs::delete_job))
            )
            .service(
                web::resource("/{job_id}/employer")
                    .route(web::get().to(jobs::get_job_employer))
            )
    );
}
