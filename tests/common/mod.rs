#![allow(dead_code)]

use std::time::Duration;

use actix_web::{dev::ServerHandle, web, App, HttpResponse, HttpServer};
use serde_json::{json, Value};

use travel_planner_web::config::AppConfig;
use travel_planner_web::routes;
use travel_planner_web::services::api_client::ApiClient;
use travel_planner_web::services::session::SessionStore;
use travel_planner_web::services::travel_service::TravelService;
use travel_planner_web::views::Renderer;

/// Nothing listens on the discard port, so every backend call fails fast.
pub const OFFLINE_BACKEND: &str = "http://127.0.0.1:9/api";

pub struct TestApp {
    pub service: web::Data<TravelService>,
    pub renderer: web::Data<Renderer>,
    pub sessions: web::Data<SessionStore>,
}

impl TestApp {
    pub fn offline() -> Self {
        Self::with_backend(OFFLINE_BACKEND)
    }

    pub fn with_backend(base_url: &str) -> Self {
        let mut config = AppConfig::with_backend(base_url).expect("valid backend url");
        config.backend_timeout = Duration::from_secs(5);
        let api = ApiClient::new(&config).expect("http client");

        Self {
            service: web::Data::new(TravelService::new(api)),
            renderer: web::Data::new(Renderer::new().expect("templates compile")),
            sessions: web::Data::new(SessionStore::new()),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.service.clone())
            .app_data(self.renderer.clone())
            .app_data(self.sessions.clone())
            .configure(routes::configure)
    }
}

/// A canned travel backend on an ephemeral port.
pub struct StubBackend {
    pub base_url: String,
    handle: ServerHandle,
}

impl StubBackend {
    pub async fn start() -> Self {
        let server = HttpServer::new(|| {
            App::new().service(
                web::scope("/api")
                    .route("/health", web::get().to(stub_health))
                    .route("/destinations", web::get().to(stub_destinations))
                    .route("/search-flights", web::post().to(stub_search_flights))
                    .route("/search-hotels", web::post().to(stub_search_hotels))
                    .route("/search-bookings", web::post().to(stub_search_bookings))
                    .route("/book", web::post().to(stub_book))
                    .route(
                        "/generate-personalized-recommendations",
                        web::post().to(stub_recommendations),
                    )
                    .route(
                        "/generate-detailed-itinerary",
                        web::post().to(stub_detailed_itinerary),
                    ),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind stub backend");

        let addr = server.addrs()[0];
        let running = server.run();
        let handle = running.handle();
        actix_rt::spawn(running);

        Self {
            base_url: format!("http://{}/api", addr),
            handle,
        }
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn stub_health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "healthy" }))
}

async fn stub_destinations() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "source": "stub",
        "data": [
            { "id": "kyoto", "name": "Kyoto", "country": "Japan", "continent": "Asia", "rating": 4.8 },
            { "id": "lisbon", "name": "Lisbon", "country": "Portugal", "continent": "Europe" }
        ]
    }))
}

/// One live offer to Tokyo; any other destination answers 503.
async fn stub_search_flights(body: web::Json<Value>) -> HttpResponse {
    if body["destination"] != "HND" {
        return HttpResponse::ServiceUnavailable().json(json!({ "detail": "Flight provider down" }));
    }
    HttpResponse::Ok().json(json!({
        "success": true,
        "provider": "Amadeus Test",
        "flights": [{
            "id": "offer-1",
            "price": { "total": "1204.00", "currency": "USD" },
            "itineraries": [{ "segments": [{
                "departure": { "iataCode": "CDG", "at": "2030-06-01T13:40:00" },
                "arrival": { "iataCode": "HND", "at": "2030-06-02T08:55:00" },
                "carrierCode": "AF",
                "number": "276",
                "aircraft": { "code": "77W" }
            }]}],
            "travelerPricings": [{ "fareDetailsBySegment": [{ "cabin": "PREMIUM_ECONOMY" }] }]
        }]
    }))
}

/// Lisbon has one live offer and no provider name; every other city fails.
async fn stub_search_hotels(body: web::Json<Value>) -> HttpResponse {
    if body["city_code"] != "LIS" {
        return HttpResponse::InternalServerError()
            .json(json!({ "detail": "Hotel inventory unavailable" }));
    }
    HttpResponse::Ok().json(json!({
        "success": true,
        "hotels": [{
            "id": "lis-1",
            "name": "Casa do Tejo",
            "rating": "4.3",
            "price": { "total": "180.00", "currency": "EUR" }
        }]
    }))
}

async fn stub_search_bookings(body: web::Json<Value>) -> HttpResponse {
    if body["search_type"] == "activities" {
        HttpResponse::Ok().json(json!({
            "results": [
                { "id": "a9", "name": "Harbour Kayak Tour", "price": 60, "rating": "4.7", "duration": "3 hours" }
            ],
            "provider": "Stub Provider"
        }))
    } else {
        HttpResponse::Ok().json(json!({ "results": [], "provider": "Stub Provider" }))
    }
}

async fn stub_book(body: web::Json<Value>) -> HttpResponse {
    if body["item_id"] == "sold-out" {
        return HttpResponse::BadRequest().json(json!({ "detail": "Item no longer available" }));
    }
    HttpResponse::Ok().json(json!({
        "success": true,
        "booking_id": "BK-STUB-1",
        "message": "Booking confirmed successfully!",
        "booking": { "customer_email": body["customer_email"] },
        "next_steps": ["Check your email for confirmation"]
    }))
}

async fn stub_recommendations() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "destinations": [
                { "id": "kyoto", "name": "Kyoto", "country": "Japan", "rating": 4.5 }
            ],
            "itinerary": [
                { "title": "Temples", "activities": ["Fushimi Inari at dawn"] }
            ]
        }
    }))
}

async fn stub_detailed_itinerary() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "detail": "Generator offline" }))
}
