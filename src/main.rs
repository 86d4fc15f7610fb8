use actix_web::{middleware::Logger, App, HttpServer};
use once_cell::sync::Lazy;

use health_service::{
    config::settings::Settings,
    middleware::safety_net::SafetyNet,
    routes::v1::v1_scope,
    services::health::status::PROCESS_START,
};

fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
        .init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    Lazy::force(&PROCESS_START);
    init_logging();

    let settings = Settings::new().unwrap_or_else(|e| {
        log::error!("Failed to load settings: {e}");
        std::process::exit(1);
    });

    let port = settings.port;
    log::info!("environment: {}", settings.environment);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(SafetyNet)
            .wrap(Logger::default())
            .service(v1_scope(&settings))
    })
        .bind(("0.0.0.0", port))?;

    log::info!("Service running on http://localhost:{port}");

    server.run().await
}
