use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use travel_planner_web::config::AppConfig;
use travel_planner_web::routes;
use travel_planner_web::services::api_client::ApiClient;
use travel_planner_web::services::session::SessionStore;
use travel_planner_web::services::travel_service::TravelService;
use travel_planner_web::views::Renderer;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let config = AppConfig::from_env();
    println!("Attempting to bind to {}:{}", config.host, config.port);
    println!("Travel backend at {}", config.backend_base_url);

    let api = ApiClient::new(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let service = web::Data::new(TravelService::new(api));
    let renderer = web::Data::new(
        Renderer::new().map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );
    let sessions = web::Data::new(SessionStore::new());

    if !service.check_health().await {
        log::warn!("Travel backend is not reachable, pages will use fallback data");
    }

    println!("Starting HTTP server...");

    let allowed_origin = config.allowed_origin.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allowed_origin(&allowed_origin)
                    .allow_any_method()
                    .allow_any_header()
                    .supports_credentials()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(service.clone())
            .app_data(renderer.clone())
            .app_data(sessions.clone())
            .configure(routes::configure)
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await
}
