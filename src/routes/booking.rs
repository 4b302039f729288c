use actix_web::{http::StatusCode, web, HttpResponse};
use chrono::Utc;

use crate::error::{ApiError, AppError};
use crate::middleware::session::KnownSession;
use crate::models::booking::BookingForm;
use crate::models::notice::Notice;
use crate::models::search::SearchKind;
use crate::routes::{html, html_with_status};
use crate::services::travel_service::TravelService;
use crate::services::validation::validate_booking;
use crate::views::booking::{BookingFormView, ConfirmationView};
use crate::views::{self, Renderer};

const BOOKING_FAILED: &str = "Booking failed. Please try again.";

fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { detail, .. } if !detail.is_empty() => detail.clone(),
        ApiError::Rejected(message) if !message.is_empty() => message.clone(),
        _ => BOOKING_FAILED.to_string(),
    }
}

pub async fn booking_form(
    renderer: web::Data<Renderer>,
    known: KnownSession,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (kind, item_id) = path.into_inner();
    let kind: SearchKind = kind.parse()?;

    let mut view = BookingFormView::new(kind, &item_id);
    if let Some(handle) = known.0 {
        if let Some(defaults) = handle.lock().await.booking_defaults() {
            view = view.with_defaults(&defaults);
        }
    }
    Ok(html(renderer.render(views::BOOKING_FORM, &view)?))
}

/// Validates locally, then books. Any failure re-renders the filled form
/// with the reason on top.
pub async fn book(
    service: web::Data<TravelService>,
    renderer: web::Data<Renderer>,
    path: web::Path<(String, String)>,
    form: web::Form<BookingForm>,
) -> Result<HttpResponse, AppError> {
    let (kind, item_id) = path.into_inner();
    let kind: SearchKind = kind.parse()?;
    let form = form.into_inner();
    let view = BookingFormView::new(kind, &item_id).with_form(&form);

    let request = match validate_booking(kind, &item_id, &form, Utc::now().date_naive()) {
        Ok(request) => request,
        Err(err) => {
            log::info!("Booking form for {} {} rejected: {}", kind, item_id, err);
            let notice = Notice::error(err.to_string());
            let body = renderer.render_with_notice(views::BOOKING_FORM, &view, Some(&notice))?;
            return Ok(html_with_status(StatusCode::UNPROCESSABLE_ENTITY, body));
        }
    };

    match service.book(&request).await {
        Ok(confirmation) => {
            let view = ConfirmationView::new(&confirmation, &request.customer_email);
            Ok(html(renderer.render(views::BOOKING_CONFIRMATION, &view)?))
        }
        Err(err) => {
            log::warn!("Booking {} {} failed: {}", kind, item_id, err);
            let notice = Notice::error(failure_message(&err));
            let body = renderer.render_with_notice(views::BOOKING_FORM, &view, Some(&notice))?;
            Ok(html(body))
        }
    }
}
