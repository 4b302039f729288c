//! Card view models for search results. Every field a template reads is
//! filled here, so missing backend values never reach the markup.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::flight::{ExternalFlight, FlightOffer, MockFlight};
use crate::models::hotel::{Amenity, ExternalHotel, HotelOffer, MockHotel};
use crate::models::listing::{Activity, Agent, Package};
use crate::models::search::{SearchKind, SearchResults};
use crate::models::{generated_id, PriceValue};
use crate::services::currency::{display_price, DisplayPrice};
use crate::views::planner::path_segment;

const HOTEL_PLACEHOLDER: &str = "https://via.placeholder.com/200x150/f3f4f6/6b7280?text=Hotel";
const ACTIVITY_PLACEHOLDER: &str =
    "https://via.placeholder.com/200x150/f3f4f6/6b7280?text=Activity";
const PACKAGE_PLACEHOLDER: &str =
    "https://via.placeholder.com/250x180/f3f4f6/6b7280?text=Package";
const AGENT_PLACEHOLDER: &str = "https://via.placeholder.com/120x120/f3f4f6/6b7280?text=Agent";

const AMENITY_ICONS: [(&str, &str); 10] = [
    ("WiFi", "wifi"),
    ("Pool", "swimming-pool"),
    ("Spa", "spa"),
    ("Gym", "dumbbell"),
    ("Restaurant", "utensils"),
    ("Bar", "glass-martini-alt"),
    ("Parking", "car"),
    ("Room Service", "concierge-bell"),
    ("Air Conditioning", "snowflake"),
    ("Free Breakfast", "coffee"),
];

pub fn amenity_icon(name: &str) -> &'static str {
    AMENITY_ICONS
        .iter()
        .find(|(amenity, _)| *amenity == name)
        .map(|(_, icon)| *icon)
        .unwrap_or("check")
}

/// `★★★★☆` for 4.x ratings.
pub fn star_bar(rating: f32) -> String {
    let full = (rating.floor().max(0.0) as usize).min(5);
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}

fn text(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

fn amount(price: Option<&PriceValue>, default: f64) -> f64 {
    price.and_then(PriceValue::amount).unwrap_or(default)
}

/// Link to the booking form for one result, with the id as a single path segment.
fn book_href(kind: SearchKind, id: &str) -> String {
    format!("/book/{}/{}", kind.as_str(), path_segment(id))
}

fn stop_label(stops: usize) -> String {
    if stops == 1 {
        "1 stop".to_string()
    } else {
        format!("{} stops", stops)
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FlightCard {
    pub id: String,
    pub book_href: String,
    pub from: String,
    pub to: String,
    pub airline: String,
    pub flight_number: String,
    pub aircraft: String,
    pub departure_time: String,
    pub departure_date: String,
    pub duration: String,
    pub stops: String,
    pub cabin: String,
    pub price: DisplayPrice,
}

fn parse_timestamp(at: Option<&str>) -> Option<NaiveDateTime> {
    let at = at?;
    NaiveDateTime::parse_from_str(at, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(at, "%Y-%m-%dT%H:%M"))
        .ok()
}

impl FlightCard {
    fn from_external(flight: &ExternalFlight) -> Self {
        let segment = flight.first_segment();
        let departure = segment.and_then(|s| parse_timestamp(s.departure.at.as_deref()));
        let arrival = segment.and_then(|s| parse_timestamp(s.arrival.at.as_deref()));

        let duration = match (departure, arrival) {
            (Some(dep), Some(arr)) if arr >= dep => {
                let minutes = (arr - dep).num_minutes();
                format!("{}h {}m", minutes / 60, minutes % 60)
            }
            _ => "3h 30m".to_string(),
        };

        let flight_number = segment
            .and_then(|s| match (&s.carrier_code, &s.number) {
                (Some(carrier), Some(number)) => Some(format!("{}{}", carrier, number)),
                _ => None,
            })
            .unwrap_or_else(|| "XX1234".to_string());

        let total = flight
            .price
            .as_ref()
            .and_then(|p| p.total)
            .unwrap_or(299.0);
        let currency = flight
            .price
            .as_ref()
            .and_then(|p| p.currency.as_deref())
            .unwrap_or("USD");

        let id = flight.id.clone().unwrap_or_else(|| generated_id("flight"));
        Self {
            book_href: book_href(SearchKind::Flights, &id),
            id,
            from: text(segment.and_then(|s| s.departure.iata_code.as_deref()), "Unknown"),
            to: text(segment.and_then(|s| s.arrival.iata_code.as_deref()), "Unknown"),
            airline: text(segment.and_then(|s| s.carrier_code.as_deref()), "Unknown Airline"),
            flight_number,
            aircraft: text(
                segment
                    .and_then(|s| s.aircraft.as_ref())
                    .and_then(|a| a.code.as_deref()),
                "Boeing 737",
            ),
            departure_time: departure
                .map(|d| d.format("%-I:%M %p").to_string())
                .unwrap_or_else(|| "12:00 PM".to_string()),
            departure_date: departure
                .map(|d| d.format("%b %-d, %Y").to_string())
                .unwrap_or_else(|| "2024-06-15".to_string()),
            duration,
            stops: stop_label(flight.stops()),
            cabin: text(flight.cabin(), "Economy").to_uppercase(),
            price: display_price(total, currency, Some(2)),
        }
    }

    fn from_mock(flight: &MockFlight) -> Self {
        let id = flight.id.clone().unwrap_or_else(|| generated_id("flight"));
        Self {
            book_href: book_href(SearchKind::Flights, &id),
            id,
            from: text(flight.origin(), "Unknown"),
            to: text(flight.target(), "Unknown"),
            airline: text(flight.airline.as_deref(), "Unknown Airline"),
            flight_number: text(flight.flight_code(), "XX1234"),
            aircraft: text(flight.aircraft.as_deref(), "Boeing 737"),
            departure_time: text(flight.time_label(), "12:00 PM"),
            departure_date: text(flight.date_label(), "2024-06-15"),
            duration: text(flight.duration.as_deref(), "3h 30m"),
            stops: stop_label(flight.stops.unwrap_or(0) as usize),
            cabin: text(flight.cabin(), "Economy").to_uppercase(),
            price: display_price(amount(flight.price.as_ref(), 299.0), "USD", None),
        }
    }
}

impl From<&FlightOffer> for FlightCard {
    fn from(offer: &FlightOffer) -> Self {
        match offer {
            FlightOffer::External(flight) => Self::from_external(flight),
            FlightOffer::Mock(flight) => Self::from_mock(flight),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AmenityTag {
    pub name: String,
    pub icon: String,
}

impl AmenityTag {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: amenity_icon(name).to_string(),
        }
    }
}

impl From<&Amenity> for AmenityTag {
    fn from(amenity: &Amenity) -> Self {
        match amenity.icon() {
            Some(icon) => Self {
                name: amenity.name().to_string(),
                icon: icon.to_string(),
            },
            None => Self::named(amenity.name()),
        }
    }
}

fn default_amenities() -> Vec<AmenityTag> {
    vec![AmenityTag::named("WiFi"), AmenityTag::named("Pool")]
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct HotelCard {
    pub id: String,
    pub book_href: String,
    pub name: String,
    pub location: String,
    pub image: String,
    pub stars: String,
    pub rating: String,
    pub amenities: Vec<AmenityTag>,
    pub description: String,
    pub distance: String,
    pub price: DisplayPrice,
}

impl HotelCard {
    fn from_external(hotel: &ExternalHotel) -> Self {
        let rating = hotel.rating.unwrap_or(4.0);
        let amenities = match &hotel.amenities {
            Some(list) if !list.is_empty() => list.iter().map(|a| AmenityTag::named(a)).collect(),
            _ => default_amenities(),
        };
        let id = hotel.id.clone().unwrap_or_else(|| generated_id("hotel"));
        Self {
            book_href: book_href(SearchKind::Hotels, &id),
            id,
            name: text(hotel.name.as_deref(), "Hotel"),
            location: text(hotel.city(), "Unknown Location"),
            image: text(hotel.image_url.as_deref(), HOTEL_PLACEHOLDER),
            stars: star_bar(rating),
            rating: format!("{:.1}", rating),
            amenities,
            description: text(
                hotel.room.as_ref().and_then(|r| r.description.as_deref()),
                "Comfortable accommodation",
            ),
            distance: "City center".to_string(),
            price: display_price(
                hotel.price.total.unwrap_or(150.0),
                hotel.price.currency.as_deref().unwrap_or("USD"),
                None,
            ),
        }
    }

    fn from_mock(hotel: &MockHotel) -> Self {
        let rating = hotel.rating.unwrap_or(4.0);
        let amenities = match &hotel.amenities {
            Some(list) if !list.is_empty() => list.iter().map(AmenityTag::from).collect(),
            _ => default_amenities(),
        };
        let id = hotel.id.clone().unwrap_or_else(|| generated_id("hotel"));
        Self {
            book_href: book_href(SearchKind::Hotels, &id),
            id,
            name: text(hotel.name.as_deref(), "Hotel"),
            location: text(hotel.location.as_deref(), "Unknown Location"),
            image: text(hotel.image.as_deref(), HOTEL_PLACEHOLDER),
            stars: star_bar(rating),
            rating: format!("{:.1}", rating),
            amenities,
            description: text(hotel.description.as_deref(), "Comfortable accommodation"),
            distance: text(hotel.distance.as_deref(), "0.5 km from center"),
            price: display_price(amount(hotel.price.as_ref(), 150.0), "USD", None),
        }
    }
}

impl From<&HotelOffer> for HotelCard {
    fn from(offer: &HotelOffer) -> Self {
        match offer {
            HotelOffer::External(hotel) => Self::from_external(hotel),
            HotelOffer::Mock(hotel) => Self::from_mock(hotel),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ActivityCard {
    pub id: String,
    pub book_href: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub duration: String,
    pub rating: String,
    pub location: String,
    pub image: String,
    pub price: DisplayPrice,
}

impl From<&Activity> for ActivityCard {
    fn from(activity: &Activity) -> Self {
        let id = activity.id.clone().unwrap_or_else(|| generated_id("activity"));
        Self {
            book_href: book_href(SearchKind::Activities, &id),
            id,
            name: text(activity.name.as_deref(), "Activity"),
            category: text(activity.category.as_deref(), "Adventure"),
            description: text(activity.description.as_deref(), "Exciting activity"),
            duration: text(activity.duration.as_deref(), "3 hours"),
            rating: format!("{:.1}", activity.rating.unwrap_or(4.0)),
            location: text(activity.location.as_deref(), "Unknown Location"),
            image: text(activity.image.as_deref(), ACTIVITY_PLACEHOLDER),
            price: display_price(amount(activity.price.as_ref(), 50.0), "USD", None),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PackageCard {
    pub id: String,
    pub book_href: String,
    pub name: String,
    pub from: String,
    pub to: String,
    pub duration: String,
    pub description: String,
    pub inclusions: Vec<String>,
    pub image: String,
    pub price: DisplayPrice,
}

impl From<&Package> for PackageCard {
    fn from(package: &Package) -> Self {
        let inclusions = match package.covered() {
            Some(list) if !list.is_empty() => list.to_vec(),
            _ => vec![
                "Flight".to_string(),
                "Hotel".to_string(),
                "Transfers".to_string(),
            ],
        };
        let id = package.id.clone().unwrap_or_else(|| generated_id("package"));
        Self {
            book_href: book_href(SearchKind::Packages, &id),
            id,
            name: text(package.name.as_deref(), "Travel Package"),
            from: text(package.from.as_deref(), "Unknown"),
            to: text(package.to.as_deref(), "Unknown"),
            duration: text(package.duration.as_deref(), "7 days"),
            description: text(package.description.as_deref(), "Complete travel experience"),
            inclusions,
            image: text(package.image.as_deref(), PACKAGE_PLACEHOLDER),
            price: display_price(amount(package.price.as_ref(), 800.0), "USD", None),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AgentCard {
    pub id: String,
    pub book_href: String,
    pub name: String,
    pub specialty: String,
    pub description: String,
    pub avatar: String,
    pub rating: String,
    pub clients: String,
    pub experience: String,
}

impl From<&Agent> for AgentCard {
    fn from(agent: &Agent) -> Self {
        let id = agent.id.clone().unwrap_or_else(|| generated_id("agent"));
        Self {
            book_href: book_href(SearchKind::Agents, &id),
            id,
            name: text(agent.name.as_deref(), "Travel Agent"),
            specialty: text(agent.specialty.as_deref(), "General Travel"),
            description: text(agent.description.as_deref(), "Experienced travel professional"),
            avatar: text(agent.avatar.as_deref(), AGENT_PLACEHOLDER),
            rating: format!("{:.1}", agent.rating.unwrap_or(4.5)),
            clients: format!("{} clients", agent.clients.unwrap_or(0)),
            experience: format!("{} years", agent.experience.unwrap_or(0)),
        }
    }
}

/// Everything the results template needs for one tab.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ResultsView {
    pub kind: SearchKind,
    pub title: String,
    pub empty: bool,
    pub flights: Vec<FlightCard>,
    pub hotels: Vec<HotelCard>,
    pub activities: Vec<ActivityCard>,
    pub packages: Vec<PackageCard>,
    pub agents: Vec<AgentCard>,
}

impl From<&SearchResults> for ResultsView {
    fn from(results: &SearchResults) -> Self {
        let kind = results.kind();
        let mut view = Self {
            kind,
            title: kind.title(),
            empty: results.is_empty(),
            flights: Vec::new(),
            hotels: Vec::new(),
            activities: Vec::new(),
            packages: Vec::new(),
            agents: Vec::new(),
        };
        match results {
            SearchResults::Flights(items) => view.flights = items.iter().map(Into::into).collect(),
            SearchResults::Hotels(items) => view.hotels = items.iter().map(Into::into).collect(),
            SearchResults::Activities(items) => {
                view.activities = items.iter().map(Into::into).collect()
            }
            SearchResults::Packages(items) => {
                view.packages = items.iter().map(Into::into).collect()
            }
            SearchResults::Agents(items) => view.agents = items.iter().map(Into::into).collect(),
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fallback;
    use serde_json::json;

    #[test]
    fn test_external_flight_card() {
        let offer: FlightOffer = serde_json::from_value(json!({
            "id": "7",
            "price": {"total": "412.50", "currency": "EUR"},
            "itineraries": [{"segments": [
                {
                    "departure": {"iataCode": "CDG", "at": "2025-03-01T14:05:00"},
                    "arrival": {"iataCode": "FRA", "at": "2025-03-01T15:20:00"},
                    "carrierCode": "AF", "number": "1018", "aircraft": {"code": "320"}
                },
                {
                    "departure": {"iataCode": "FRA", "at": "2025-03-01T17:00:00"},
                    "arrival": {"iataCode": "JFK", "at": "2025-03-01T20:00:00"},
                    "carrierCode": "LH", "number": "400"
                }
            ]}],
            "travelerPricings": [{"fareDetailsBySegment": [{"cabin": "BUSINESS"}]}]
        }))
        .unwrap();

        let card = FlightCard::from(&offer);
        assert_eq!(card.from, "CDG");
        assert_eq!(card.to, "FRA");
        assert_eq!(card.flight_number, "AF1018");
        assert_eq!(card.aircraft, "320");
        assert_eq!(card.departure_time, "2:05 PM");
        assert_eq!(card.departure_date, "Mar 1, 2025");
        assert_eq!(card.duration, "1h 15m");
        assert_eq!(card.stops, "1 stop");
        assert_eq!(card.cabin, "BUSINESS");
        assert_eq!(card.price.primary, "€412.50");
        assert_eq!(card.price.secondary, vec!["$413", "₹413"]);
    }

    #[test]
    fn test_mock_flight_defaults() {
        let card = FlightCard::from(&FlightOffer::Mock(MockFlight::default()));
        assert_eq!(card.airline, "Unknown Airline");
        assert_eq!(card.flight_number, "XX1234");
        assert_eq!(card.duration, "3h 30m");
        assert_eq!(card.cabin, "ECONOMY");
        assert_eq!(card.price.primary, "$299");
        assert!(card.id.starts_with("flight_"));
    }

    #[test]
    fn test_hotel_cards() {
        let cards: Vec<HotelCard> = fallback::mock_hotels().iter().map(Into::into).collect();
        assert_eq!(cards[0].stars, "★★★★☆");
        assert_eq!(cards[0].rating, "4.8");
        assert_eq!(cards[0].distance, "0.5 km from center");
        assert_eq!(cards[1].amenities[3].icon, "glass-martini");

        let external: HotelOffer = serde_json::from_value(json!({
            "name": "Hotel Lutetia",
            "price": {"total": "230", "currency": "USD"},
            "amenities": ["Parking", "Sauna"]
        }))
        .unwrap();
        let card = HotelCard::from(&external);
        assert_eq!(card.location, "Unknown Location");
        assert_eq!(card.image, HOTEL_PLACEHOLDER);
        assert_eq!(card.amenities[0].icon, "car");
        assert_eq!(card.amenities[1].icon, "check");
        assert_eq!(card.distance, "City center");
        assert_eq!(card.price.primary, "$230");
    }

    #[test]
    fn test_listing_defaults() {
        let activity = ActivityCard::from(&Activity::default());
        assert_eq!(activity.category, "Adventure");
        assert_eq!(activity.price.primary, "$50");

        let package = PackageCard::from(&Package::default());
        assert_eq!(package.inclusions, vec!["Flight", "Hotel", "Transfers"]);
        assert_eq!(package.duration, "7 days");

        let agent = AgentCard::from(&fallback::mock_agents()[0]);
        assert_eq!(agent.clients, "250 clients");
        assert_eq!(agent.experience, "15 years");
    }

    #[test]
    fn test_booking_links_encode_ids() {
        let activity = ActivityCard::from(&Activity {
            id: Some("tour/42?day=1#top".to_string()),
            ..Default::default()
        });
        assert_eq!(activity.book_href, "/book/activities/tour%2F42%3Fday%3D1%23top");

        let flights: Vec<FlightCard> = fallback::mock_flights().iter().map(Into::into).collect();
        assert_eq!(flights[0].book_href, "/book/flights/f1");
    }

    #[test]
    fn test_star_bar_bounds() {
        assert_eq!(star_bar(0.0), "☆☆☆☆☆");
        assert_eq!(star_bar(5.0), "★★★★★");
        assert_eq!(star_bar(7.2), "★★★★★");
    }

    #[test]
    fn test_results_view_fills_one_list() {
        let view = ResultsView::from(&fallback::mock_results(SearchKind::Packages));
        assert_eq!(view.title, "Packages");
        assert_eq!(view.packages.len(), 2);
        assert!(view.flights.is_empty());
        assert!(!view.empty);
    }
}
