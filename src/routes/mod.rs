pub mod booking;
pub mod destinations;
pub mod health;
pub mod planner;
pub mod recommendations;
pub mod search;
pub mod upload;

use actix_web::{http::StatusCode, web, HttpResponse};

pub fn html(body: String) -> HttpResponse {
    html_with_status(StatusCode::OK, body)
}

pub fn html_with_status(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Registers every page route. Shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/destinations", web::get().to(destinations::list_destinations))
        .route("/continents", web::get().to(destinations::continent_options))
        .service(
            web::scope("/planner")
                .route("/destinations", web::get().to(planner::destinations))
                .route("/continents/{name}", web::post().to(planner::select_continent))
                .route("/countries/{name}", web::post().to(planner::select_country))
                .route("/cities/{name}", web::post().to(planner::select_city))
                .route("/areas/{name}", web::post().to(planner::select_area))
                .route("/reset", web::post().to(planner::reset))
                .route("/preferences", web::post().to(planner::submit_preferences))
                .route("/select", web::post().to(planner::select_recommendation))
                .route("/steps/{step}", web::post().to(planner::go_to_step))
                .route("/itinerary/{destination_id}", web::post().to(planner::itinerary))
                .route("/image/{destination_id}", web::post().to(planner::destination_image)),
        )
        .service(
            web::scope("/recommendations")
                .route("", web::post().to(recommendations::recommend))
                .route("/itinerary", web::post().to(recommendations::detailed_itinerary)),
        )
        .route("/search/{kind}", web::post().to(search::search))
        .service(
            web::resource("/book/{kind}/{item_id}")
                .route(web::get().to(booking::booking_form))
                .route(web::post().to(booking::book)),
        )
        .service(
            web::resource("/upload")
                .route(web::post().to(upload::upload_photo))
                .route(web::delete().to(upload::clear_upload)),
        )
        .route("/upload/recent", web::get().to(upload::recent_upload))
        .service(
            web::scope("/generate")
                .route("/photo-app", web::post().to(upload::photo_app))
                .route("/text-to-image", web::post().to(upload::text_to_image))
                .route("/lightx", web::post().to(upload::lightx)),
        );
}
