use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};

use coliville_api::{
    config::AppConfig,
    routes,
    services::{
        catalog_service::Catalog,
        notification::{interface::Notifier, smtp::SmtpNotifier},
    },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("Application starting...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let catalog = Catalog::embedded().map_err(|e| {
        error!("Catalog failed to load: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;
    info!(
        "Catalog loaded: {} properties, {} rooms",
        catalog.properties().len(),
        catalog.all_rooms().len()
    );

    let notifier: Arc<dyn Notifier> = Arc::new(SmtpNotifier::new(&config.smtp));
    if !notifier.is_configured() {
        warn!("Form submissions will return 503 until SMTP is configured");
    }

    let host = config.host.clone();
    let port = config.port;
    let catalog = web::Data::new(catalog);
    let config = web::Data::new(config);
    let notifier = web::Data::from(notifier);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(catalog.clone())
            .app_data(config.clone())
            .app_data(notifier.clone())
            .configure(routes::config)
    })
    .bind((host, port))?
    .run()
    .await
}
