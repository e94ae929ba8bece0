use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::services::{catalog_service::Catalog, notification::interface::Notifier};

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

/*
    /health
*/
pub async fn health_check(
    catalog: web::Data<Catalog>,
    notifier: web::Data<dyn Notifier>,
) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let catalog_result = check_catalog(&catalog);
    health
        .services
        .insert("catalog".to_string(), catalog_result.clone());

    let smtp_result = check_smtp(notifier.get_ref());
    health.services.insert("smtp".to_string(), smtp_result.clone());

    // Form submissions fail with 503 until SMTP is configured.
    if catalog_result.status != "ok" || smtp_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_catalog(catalog: &Catalog) -> ServiceStatus {
    let properties = catalog.properties().len();
    let rooms: usize = catalog.properties().iter().map(|p| p.rooms.len()).sum();

    ServiceStatus {
        status: if properties > 0 { "ok" } else { "error" }.to_string(),
        details: Some(format!("{} properties, {} rooms", properties, rooms)),
    }
}

fn check_smtp(notifier: &dyn Notifier) -> ServiceStatus {
    if notifier.is_configured() {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some("SMTP relay configured".to_string()),
        }
    } else {
        ServiceStatus {
            status: "error".to_string(),
            details: Some("SMTP settings missing or placeholder".to_string()),
        }
    }
}
