use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::routes::html;
use crate::services::fallback;
use crate::services::travel_service::{Sourced, TravelService};
use crate::views::pages::{ContinentOptions, DestinationsView};
use crate::views::{self, Renderer};

#[derive(Debug, Deserialize, Default)]
pub struct DestinationQuery {
    pub continent: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ContinentQuery {
    pub selected: Option<String>,
}

pub async fn list_destinations(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    query: web::Query<DestinationQuery>,
) -> Result<HttpResponse, AppError> {
    let loaded = if service.check_health().await {
        service.destinations().await
    } else {
        log::info!("Backend offline, listing mock destinations");
        Sourced::fallback(fallback::mock_destinations())
    };

    let continent = query.continent.as_deref().unwrap_or("all");
    let search = query.search.as_deref().unwrap_or_default();
    let offline = loaded.is_fallback();
    let total = loaded.data.len();
    let shown: Vec<_> = loaded
        .data
        .into_iter()
        .filter(|d| d.in_continent(continent) && d.matches_search(search))
        .collect();

    let view = DestinationsView::new(&shown, total, offline);
    Ok(html(renderer.render(views::DESTINATIONS, &view)?))
}

pub async fn continent_options(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    query: web::Query<ContinentQuery>,
) -> Result<HttpResponse, AppError> {
    let continents = service.continent_filters().await.data;
    let view = ContinentOptions {
        selected: query.selected.clone().unwrap_or_else(|| "all".to_string()),
        continents,
    };
    Ok(html(renderer.render(views::CONTINENT_OPTIONS, &view)?))
}
