use actix_web::web;

use crate::handlers::applications;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/applications")
            .service(
                web::resource("")
                    .route(web::post().to(applications::apply_to_job))
            )
            .service(
                web::resource("/seeker")
                    .route(web::get().to(applications::list_seeker_applications))
            )
            .service(
                web::resource("/job/{job_id}")
                    .route(web::get().to(applications::list_job_applications))
            )
            .service(
                web::resource("/{application_id}/status")
                    .route(web::put().to(applications::update_application_status))
            )
    );
}
