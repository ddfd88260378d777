use actix_web::web;

use crate::handlers::profiles;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profile")
            .service(
                web::resource("/seeker")
                    .route(web::get().to(profiles::get_seeker_profile))
                    .route(web::post().to(profiles::create_seeker_profile))
            )
            .service(
                web::resource("/seeker/{profile_id}")
                    .route(web::put().to(profiles::update_seeker_profile))
            )
            .service(
                web::resource("/employer")
                    .route(web::get().to(profiles::get_employer_profile))
                    .route(web::post().to(profiles::create_employer_profile))
            )
            .service(
                web::resource("/employer/{profile_id}")
                    .route(web::put().to(profiles::update_employer_profile))
            )
    );
}
