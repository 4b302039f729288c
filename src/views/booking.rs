use serde::Serialize;

use crate::models::booking::{item_price, BookingConfirmation, BookingForm};
use crate::models::search::SearchKind;
use crate::services::currency::{display_price, DisplayPrice};
use crate::services::session::BookingDefaults;
use crate::views::planner::path_segment;

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct BookingFields {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub travel_date: String,
    pub return_date: String,
    pub passengers: String,
    pub special_requests: String,
}

impl From<&BookingForm> for BookingFields {
    fn from(form: &BookingForm) -> Self {
        Self {
            customer_name: form.customer_name.clone(),
            customer_email: form.customer_email.clone(),
            customer_phone: form.customer_phone.clone().unwrap_or_default(),
            travel_date: form.travel_date.clone(),
            return_date: form.return_date.clone().unwrap_or_default(),
            passengers: form.passengers.clone().unwrap_or_default(),
            special_requests: form.special_requests.clone().unwrap_or_default(),
        }
    }
}

/// The booking form for one item, blank or refilled after a failed attempt.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BookingFormView {
    pub kind: SearchKind,
    pub heading: String,
    pub item_id: String,
    pub action: String,
    pub price: DisplayPrice,
    pub fields: BookingFields,
    pub destination: Option<String>,
}

impl BookingFormView {
    pub fn new(kind: SearchKind, item_id: &str) -> Self {
        Self {
            kind,
            heading: format!("Book {}", kind.title()),
            item_id: item_id.to_string(),
            action: format!("/book/{}/{}", kind, path_segment(item_id)),
            price: display_price(item_price(kind, item_id), "USD", Some(2)),
            fields: BookingFields {
                passengers: "1".to_string(),
                ..Default::default()
            },
            destination: None,
        }
    }

    pub fn with_form(mut self, form: &BookingForm) -> Self {
        self.fields = form.into();
        self
    }

    /// Pre-fills from the planner's booking step.
    pub fn with_defaults(mut self, defaults: &BookingDefaults) -> Self {
        self.destination = Some(defaults.destination.clone());
        if let Some(passengers) = defaults.passengers {
            self.fields.passengers = passengers.to_string();
        }
        self
    }
}

/// Hotel and flight search forms aimed at one destination. Offered when a
/// detailed itinerary cannot be produced.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TripSearchView {
    pub destination: String,
    pub passengers: String,
}

impl TripSearchView {
    pub fn new(destination: &str, travelers: u32) -> Self {
        Self {
            destination: destination.to_string(),
            passengers: travelers.clamp(1, 10).to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ConfirmationView {
    pub booking_id: String,
    pub email: String,
    pub message: String,
    pub next_steps: Vec<String>,
}

impl ConfirmationView {
    pub fn new(confirmation: &BookingConfirmation, fallback_email: &str) -> Self {
        Self {
            booking_id: confirmation.booking_id.clone(),
            email: confirmation
                .booking
                .customer_email
                .clone()
                .unwrap_or_else(|| fallback_email.to_string()),
            message: confirmation
                .message
                .clone()
                .unwrap_or_else(|| "Booking confirmed successfully!".to_string()),
            next_steps: confirmation.next_steps.clone(),
        }
    }
}
