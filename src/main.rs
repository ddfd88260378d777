use actix_cors::Cors;
use actix_web::{http::header, middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use jobnexus::{
    background_task::start_purge_task,
    constants::{DENYLIST_PURGE_INTERVAL, START_TIME},
    db::memory::create_store,
    graceful_shutdown::stop_on_signal,
    logging::init_tracing,
    middlewares::auth::AuthMiddleware,
    routes::configure_routes,
    settings::AppConfig,
    AppState,
};

fn build_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        cors.allow_any_origin()
    } else {
        origins.iter().fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => {
            init_tracing(cfg.log_json);
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            init_tracing(false);
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    once_cell::sync::Lazy::force(&START_TIME);

    let app_state = web::Data::new(AppState::new(&config, create_store()));

    if let Some(admin) = config.admin_bootstrap() {
        if let Err(e) = app_state.auth_handler.bootstrap_admin(&admin).await {
            tracing::error!("Admin bootstrap failed: {}", e);
            std::process::exit(1);
        }
    }

    let server_addr = config.server_addr();
    let cors_origins = config.cors_origins();

    tracing::info!(
        "🚀 Starting JobNexus API v{} on {} ({} workers)",
        env!("CARGO_PKG_VERSION"),
        server_addr,
        config.worker_count
    );

    let state = app_state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(AuthMiddleware)
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&cors_origins))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::spawn(start_purge_task(app_state.auth_handler.denylist.clone(), DENYLIST_PURGE_INTERVAL));
    tokio::spawn(stop_on_signal(server.handle()));

    server.await
}
