//! The three-step trip planner: browse the destination hierarchy, state
//! preferences, then book.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::middleware::session::{CurrentSession, KnownSession};
use crate::models::notice::Notice;
use crate::models::preferences::PreferencesForm;
use crate::routes::html;
use crate::services::drill_down::Level;
use crate::services::session::PlannerSession;
use crate::services::travel_service::TravelService;
use crate::services::validation::validate_preferences;
use crate::views::pages::GalleryView;
use crate::views::planner::{GridView, ItineraryView, RecommendationsView, StepView};
use crate::views::{self, Renderer};

const SELECT_ACTION: &str = "/planner/select";

#[derive(Debug, Deserialize)]
pub struct DestinationChoice {
    pub destination: String,
}

async fn render_grid(
    service: &TravelService,
    renderer: &Renderer,
    session: &PlannerSession,
    notice: Option<&Notice>,
) -> Result<String, AppError> {
    let continents = if session.drill_down.level() == Level::Continent {
        service.continents().await.data
    } else {
        Vec::new()
    };
    let view = GridView::for_drill_down(&session.drill_down, &continents);
    Ok(renderer.render_with_notice(views::GRID, &view, notice)?)
}

pub async fn destinations(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    known: KnownSession,
) -> Result<HttpResponse, AppError> {
    let body = match known.0 {
        Some(handle) => {
            let session = handle.lock().await;
            render_grid(&service, &renderer, &session, None).await?
        }
        None => render_grid(&service, &renderer, &PlannerSession::default(), None).await?,
    };
    Ok(html(body))
}

pub async fn select_continent(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    current: CurrentSession,
    name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let mut session = current.handle.lock().await;
    session
        .drill_down
        .select_continent(service.get_ref(), &name)
        .await?;
    let body = render_grid(&service, &renderer, &session, None).await?;
    Ok(current.ok(body))
}

pub async fn select_country(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    current: CurrentSession,
    name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let mut session = current.handle.lock().await;
    session
        .drill_down
        .select_country(service.get_ref(), &name)
        .await?;
    let body = render_grid(&service, &renderer, &session, None).await?;
    Ok(current.ok(body))
}

pub async fn select_city(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    current: CurrentSession,
    name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let mut session = current.handle.lock().await;
    session
        .drill_down
        .select_city(service.get_ref(), &name)
        .await?;
    let body = render_grid(&service, &renderer, &session, None).await?;
    Ok(current.ok(body))
}

/// Picking an area ends the drill-down and records the destination.
pub async fn select_area(
    renderer: web::Data<Renderer>,
    current: CurrentSession,
    name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let mut session = current.handle.lock().await;
    let selected = session.drill_down.select_area(&name)?;
    log::info!("Session {} selected {}", current.id, selected.id);
    let notice = Notice::success(format!("Viewing {}", selected.name));
    session.selected_destination = Some(selected);

    let view = StepView::from(&*session);
    let body = renderer.render_with_notice(views::STEP, &view, Some(&notice))?;
    Ok(current.ok(body))
}

pub async fn reset(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    current: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let mut session = current.handle.lock().await;
    session.drill_down.reset();
    let body = render_grid(&service, &renderer, &session, None).await?;
    Ok(current.ok(body))
}

pub async fn submit_preferences(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    current: CurrentSession,
    form: web::Form<PreferencesForm>,
) -> Result<HttpResponse, AppError> {
    let preferences = form.into_inner().into_preferences();
    validate_preferences(&preferences, false)?;

    let mut session = current.handle.lock().await;
    match service.personalized_recommendations(&preferences).await {
        Ok(recommendations) => {
            let view = RecommendationsView::new(&recommendations, SELECT_ACTION);
            let notice = Notice::success(format!(
                "Found {} destinations for you!",
                recommendations.destinations.len()
            ));
            session.store_recommendations(preferences, recommendations);
            session.go_to_step(2)?;
            let body = renderer.render_with_notice(views::RECOMMENDATIONS, &view, Some(&notice))?;
            Ok(current.ok(body))
        }
        Err(err) => {
            log::warn!("Recommendations failed: {}", err);
            let notice = Notice::error(format!(
                "Failed to generate recommendations: {}",
                err.user_message()
            ));
            Ok(current.ok(views::notice_fragment(&notice)))
        }
    }
}

pub async fn select_recommendation(
    renderer: web::Data<Renderer>,
    current: CurrentSession,
    form: web::Form<DestinationChoice>,
) -> Result<HttpResponse, AppError> {
    let mut session = current.handle.lock().await;
    let name = session.select_recommended(&form.destination)?.name.clone();
    session.go_to_step(3)?;

    let view = StepView::from(&*session);
    let notice = Notice::success(format!("Viewing {}", name));
    let body = renderer.render_with_notice(views::STEP, &view, Some(&notice))?;
    Ok(current.ok(body))
}

pub async fn go_to_step(
    renderer: web::Data<Renderer>,
    current: CurrentSession,
    step: web::Path<u8>,
) -> Result<HttpResponse, AppError> {
    let mut session = current.handle.lock().await;
    session.go_to_step(step.into_inner())?;
    let view = StepView::from(&*session);
    Ok(current.ok(renderer.render(views::STEP, &view)?))
}

pub async fn itinerary(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    current: CurrentSession,
    destination_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session = current.handle.lock().await;
    let preferences = session.preferences.clone().unwrap_or_default();

    match service.generate_itinerary(&destination_id, &preferences).await {
        Ok(itinerary) => {
            let view = ItineraryView::from(&itinerary);
            Ok(current.ok(renderer.render(views::ITINERARY, &view)?))
        }
        Err(err) => {
            let notice = Notice::error(err.user_message());
            Ok(current.ok(views::notice_fragment(&notice)))
        }
    }
}

/// Places the visitor's photo at a destination. Falls back to a stock
/// destination photo when the backend cannot produce a visualization.
pub async fn destination_image(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    current: CurrentSession,
    destination_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session = current.handle.lock().await;
    let photo_url = session.require_photo()?;

    let generated = service
        .generate_visualization(photo_url, Some(destination_id.as_str()))
        .await
        .map_err(|err| log::warn!("Visualization for {} failed: {}", destination_id, err))
        .ok()
        .and_then(|response| response.visualization_url);

    let (view, notice) = match generated {
        Some(url) => (
            GalleryView::from_urls(
                "Your Visualization",
                &[service.api().absolute_url(&url)],
                &destination_id,
            ),
            Notice::success("Visualization generated successfully!"),
        ),
        None => (
            GalleryView::from_destination(&service.generate_destination_image(&destination_id)),
            Notice::success("Demo: Visualization generated successfully!"),
        ),
    };

    let body = renderer.render_with_notice(views::GALLERY, &view, Some(&notice))?;
    Ok(current.ok(body))
}
