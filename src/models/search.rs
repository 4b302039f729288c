use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::flight::FlightOffer;
use super::hotel::HotelOffer;
use super::listing::{Activity, Agent, Package};
use crate::services::airport;
use crate::services::validation::ValidationError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Flights,
    Hotels,
    Activities,
    Packages,
    Agents,
}

impl SearchKind {
    pub const ALL: [SearchKind; 5] = [
        SearchKind::Flights,
        SearchKind::Hotels,
        SearchKind::Activities,
        SearchKind::Packages,
        SearchKind::Agents,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Flights => "flights",
            SearchKind::Hotels => "hotels",
            SearchKind::Activities => "activities",
            SearchKind::Packages => "packages",
            SearchKind::Agents => "agents",
        }
    }

    /// Capitalised form for headings, e.g. "Book Flights".
    pub fn title(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownSearchKind(s.to_string()))
    }
}

/// Fields posted by the search tabs. Each kind reads the subset it needs.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SearchForm {
    pub from: Option<String>,
    pub to: Option<String>,
    pub depart_date: Option<String>,
    pub return_date: Option<String>,
    pub passengers: Option<String>,
    pub travel_class: Option<String>,
    pub destination: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub rooms: Option<String>,
}

/// Blank form values count as absent.
pub fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Integer form fields default to 1 when blank or unparseable.
pub fn count_or_one(value: &Option<String>) -> u32 {
    non_empty(value)
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FlightSearchRequest {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: Option<String>,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub travel_class: String,
    pub currency_code: String,
}

impl FlightSearchRequest {
    pub fn from_form(form: &SearchForm) -> Self {
        let origin = airport::extract_code(form.from.as_deref().unwrap_or_default());
        let destination = airport::destination_code(form.to.as_deref().unwrap_or_default());

        Self {
            origin,
            destination,
            departure_date: non_empty(&form.depart_date).unwrap_or_default(),
            return_date: non_empty(&form.return_date),
            adults: count_or_one(&form.passengers),
            children: 0,
            infants: 0,
            travel_class: airport::travel_class(form.travel_class.as_deref().unwrap_or_default()),
            currency_code: "USD".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct HotelSearchRequest {
    pub city_code: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub adults: u32,
    pub children: u32,
    pub room_quantity: u32,
    pub currency_code: String,
}

impl HotelSearchRequest {
    /// City, check-in and check-out are required before the backend is asked.
    pub fn from_form(form: &SearchForm) -> Result<Self, ValidationError> {
        let city_code = non_empty(&form.destination)
            .map(|raw| airport::city_code(&raw))
            .filter(|code| !code.is_empty());
        let check_in = non_empty(&form.check_in);
        let check_out = non_empty(&form.check_out);

        match (city_code, check_in, check_out) {
            (Some(city_code), Some(check_in_date), Some(check_out_date)) => Ok(Self {
                city_code,
                check_in_date,
                check_out_date,
                adults: count_or_one(&form.passengers),
                children: 0,
                room_quantity: count_or_one(&form.rooms),
                currency_code: "USD".to_string(),
            }),
            _ => Err(ValidationError::MissingHotelFields),
        }
    }
}

/// Generic search used for activities, packages and agents.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BookingSearchRequest {
    pub search_type: SearchKind,
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub passengers: u32,
    pub class_type: String,
}

impl BookingSearchRequest {
    pub fn from_form(kind: SearchKind, form: &SearchForm) -> Self {
        let mut request = Self {
            search_type: kind,
            from_location: None,
            to_location: None,
            departure_date: None,
            return_date: None,
            passengers: 1,
            class_type: "economy".to_string(),
        };

        match kind {
            SearchKind::Flights => {
                request.from_location = non_empty(&form.from);
                request.to_location = non_empty(&form.to);
                request.departure_date = non_empty(&form.depart_date);
                request.return_date = non_empty(&form.return_date);
                request.passengers = count_or_one(&form.passengers);
                if let Some(class) = non_empty(&form.travel_class) {
                    request.class_type = class;
                }
            }
            SearchKind::Hotels => {
                request.to_location = non_empty(&form.destination);
                request.departure_date = non_empty(&form.check_in);
                request.return_date = non_empty(&form.check_out);
                request.passengers = count_or_one(&form.passengers);
            }
            SearchKind::Activities => {
                request.to_location = non_empty(&form.destination);
                request.departure_date = non_empty(&form.depart_date);
                request.passengers = count_or_one(&form.passengers);
            }
            SearchKind::Packages => {
                request.from_location = non_empty(&form.from);
                request.to_location = non_empty(&form.to);
                request.departure_date = non_empty(&form.depart_date);
                request.return_date = non_empty(&form.return_date);
                request.passengers = count_or_one(&form.passengers);
            }
            SearchKind::Agents => {}
        }

        request
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FlightSearchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub flights: Vec<FlightOffer>,
    #[serde(default)]
    pub provider: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HotelSearchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub hotels: Vec<HotelOffer>,
    #[serde(default)]
    pub provider: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingSearchResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    #[serde(default)]
    pub provider: Option<String>,
}

/// A typed result list for one search tab.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum SearchResults {
    Flights(Vec<FlightOffer>),
    Hotels(Vec<HotelOffer>),
    Activities(Vec<Activity>),
    Packages(Vec<Package>),
    Agents(Vec<Agent>),
}

impl SearchResults {
    pub fn kind(&self) -> SearchKind {
        match self {
            SearchResults::Flights(_) => SearchKind::Flights,
            SearchResults::Hotels(_) => SearchKind::Hotels,
            SearchResults::Activities(_) => SearchKind::Activities,
            SearchResults::Packages(_) => SearchKind::Packages,
            SearchResults::Agents(_) => SearchKind::Agents,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SearchResults::Flights(items) => items.len(),
            SearchResults::Hotels(items) => items.len(),
            SearchResults::Activities(items) => items.len(),
            SearchResults::Packages(items) => items.len(),
            SearchResults::Agents(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decodes the loosely typed `/search-bookings` results for a kind.
    pub fn from_values(
        kind: SearchKind,
        values: Vec<serde_json::Value>,
    ) -> Result<Self, serde_json::Error> {
        let list = serde_json::Value::Array(values);
        Ok(match kind {
            SearchKind::Flights => SearchResults::Flights(serde_json::from_value(list)?),
            SearchKind::Hotels => SearchResults::Hotels(serde_json::from_value(list)?),
            SearchKind::Activities => SearchResults::Activities(serde_json::from_value(list)?),
            SearchKind::Packages => SearchResults::Packages(serde_json::from_value(list)?),
            SearchKind::Agents => SearchResults::Agents(serde_json::from_value(list)?),
        })
    }
}
