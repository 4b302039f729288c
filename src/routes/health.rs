use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::services::travel_service::TravelService;

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

pub async fn health_check(service: web::Data<TravelService>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let backend = check_backend(&service).await;
    health
        .services
        .insert("backend".to_string(), backend.clone());

    // Pages still render from fallback data while the backend is down.
    if backend.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

async fn check_backend(service: &TravelService) -> ServiceStatus {
    let base = service.api().base_url().to_string();
    if service.check_health().await {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Reachable at {}", base)),
        }
    } else {
        ServiceStatus {
            status: "error".to_string(),
            details: Some(format!("Unreachable at {}, serving fallback data", base)),
        }
    }
}
