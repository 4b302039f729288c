use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::middleware::session::CurrentSession;
use crate::models::notice::Notice;
use crate::models::preferences::{DetailedItineraryRequest, PreferencesForm};
use crate::routes::planner::DestinationChoice;
use crate::services::travel_service::TravelService;
use crate::services::validation::{validate_preferences, ValidationError};
use crate::views::booking::TripSearchView;
use crate::views::itinerary::DetailedItineraryView;
use crate::views::planner::RecommendationsView;
use crate::views::{self, Renderer};

const SELECT_ACTION: &str = "/recommendations/itinerary";

pub async fn recommend(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    current: CurrentSession,
    form: web::Form<PreferencesForm>,
) -> Result<HttpResponse, AppError> {
    let preferences = form.into_inner().into_preferences();
    validate_preferences(&preferences, true)?;

    let mut session = current.handle.lock().await;
    match service.personalized_recommendations(&preferences).await {
        Ok(recommendations) => {
            let view = RecommendationsView::new(&recommendations, SELECT_ACTION);
            session.store_recommendations(preferences, recommendations);
            Ok(current.ok(renderer.render(views::RECOMMENDATIONS, &view)?))
        }
        Err(err) => {
            let notice = Notice::error(err.user_message());
            Ok(current.ok(views::notice_fragment(&notice)))
        }
    }
}

/// Full day-by-day plan for one recommended destination. When the backend
/// cannot produce one, the visitor is offered hotel and flight searches for
/// the destination instead.
pub async fn detailed_itinerary(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    current: CurrentSession,
    form: web::Form<DestinationChoice>,
) -> Result<HttpResponse, AppError> {
    let session = current.handle.lock().await;
    let preferences = session
        .preferences
        .as_ref()
        .ok_or(ValidationError::RecommendationsRequired)?;
    let name = session
        .recommended(&form.destination)
        .map(|d| d.name.clone())
        .unwrap_or_else(|| form.destination.clone());

    let request = DetailedItineraryRequest::new(&name, preferences);
    match service.detailed_itinerary(&request).await {
        Ok(itinerary) => {
            let view = DetailedItineraryView::new(&name, &itinerary);
            Ok(current.ok(renderer.render(views::DETAILED_ITINERARY, &view)?))
        }
        Err(err) => {
            log::warn!("Detailed itinerary for {} failed: {}", name, err);
            let notice = Notice::error(format!(
                "Could not build an itinerary for {}: {}",
                name,
                err.user_message()
            ));
            let view = TripSearchView::new(&name, request.travelers);
            let body = renderer.render_with_notice(views::TRIP_SEARCH, &view, Some(&notice))?;
            Ok(current.ok(body))
        }
    }
}
