use serde::{Deserialize, Serialize};

use super::search::SearchKind;

/// The booking form as posted by the page.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BookingForm {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub travel_date: String,
    pub return_date: Option<String>,
    pub passengers: Option<String>,
    pub special_requests: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BookingRequest {
    pub booking_type: SearchKind,
    pub item_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub travel_date: String,
    pub return_date: Option<String>,
    pub passengers: u32,
    pub special_requests: Option<String>,
    pub total_price: f64,
    pub currency: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BookedItem {
    #[serde(default)]
    pub customer_email: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BookingConfirmation {
    #[serde(default)]
    pub success: bool,
    pub booking_id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub booking: BookedItem,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

const DEFAULT_ITEM_PRICE: f64 = 100.0;

/// Listed price for an item the page knows about.
pub fn item_price(kind: SearchKind, item_id: &str) -> f64 {
    let table: &[(&str, f64)] = match kind {
        SearchKind::Flights => &[("f1", 899.0), ("f2", 745.0), ("f3", 650.0)],
        SearchKind::Hotels => &[("h1", 350.0), ("h2", 850.0), ("h3", 200.0)],
        SearchKind::Activities => &[("a1", 89.0), ("a2", 125.0), ("a3", 75.0)],
        SearchKind::Packages => &[("p1", 1299.0), ("p2", 899.0), ("p3", 1500.0)],
        SearchKind::Agents => &[("ag1", 50.0), ("ag2", 75.0), ("ag3", 60.0)],
    };

    table
        .iter()
        .find(|(id, _)| *id == item_id)
        .map(|(_, price)| *price)
        .unwrap_or(DEFAULT_ITEM_PRICE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_prices() {
        assert_eq!(item_price(SearchKind::Flights, "f1"), 899.0);
        assert_eq!(item_price(SearchKind::Packages, "p3"), 1500.0);
        assert_eq!(item_price(SearchKind::Agents, "ag2"), 75.0);
        assert_eq!(item_price(SearchKind::Hotels, "f1"), DEFAULT_ITEM_PRICE);
        assert_eq!(item_price(SearchKind::Activities, "unknown"), DEFAULT_ITEM_PRICE);
    }

    #[test]
    fn test_confirmation_defaults() {
        let confirmation: BookingConfirmation =
            serde_json::from_str(r#"{"booking_id":"BK1A2B3C4D"}"#).unwrap();
        assert!(!confirmation.success);
        assert!(confirmation.next_steps.is_empty());
        assert_eq!(confirmation.booking.customer_email, None);
    }
}
