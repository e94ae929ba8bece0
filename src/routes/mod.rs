use actix_web::{error, web, HttpRequest};
use log::warn;

use crate::error::ApiError;

pub mod booking;
pub mod catalog;
pub mod health;
pub mod notifications;
pub mod pages;

/// Malformed bodies get the same `{success: false}` envelope as every other error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _: &HttpRequest| {
        warn!("Rejected JSON body: {}", err);
        ApiError::BadRequest(format!("Invalid request body: {}", err)).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: error::QueryPayloadError, _: &HttpRequest| {
        ApiError::BadRequest(format!("Invalid query string: {}", err)).into()
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/properties", web::get().to(catalog::get_properties))
                .route("/properties/{key}", web::get().to(catalog::get_property))
                .route("/rooms", web::get().to(catalog::get_rooms))
                .route("/sitemap", web::get().to(pages::sitemap))
                .route("/booking/transition", web::post().to(booking::transition))
                .route(
                    "/send-application",
                    web::post().to(notifications::send_application),
                )
                .route(
                    "/send-tour-request",
                    web::post().to(notifications::send_tour_request),
                ),
        )
        .route("/{locale}", web::get().to(pages::get_page))
        .route("/{locale}/{tail:.*}", web::get().to(pages::get_page));
}
