use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use super::PriceValue;

/// A flight result as rendered on a card. Live offers carry `itineraries`; mock rows are flat.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum FlightOffer {
    External(ExternalFlight),
    Mock(MockFlight),
}

impl<'de> Deserialize<'de> for FlightOffer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let has_itineraries = value
            .get("itineraries")
            .and_then(|v| v.as_array())
            .is_some_and(|list| !list.is_empty());

        if has_itineraries {
            serde_json::from_value(value)
                .map(FlightOffer::External)
                .map_err(D::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(FlightOffer::Mock)
                .map_err(D::Error::custom)
        }
    }
}

#[serde_as]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OfferPrice {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub total: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExternalFlight {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub price: Option<OfferPrice>,
    pub itineraries: Vec<FlightItinerary>,
    #[serde(default, rename = "travelerPricings")]
    pub traveler_pricings: Vec<TravelerPricing>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FlightItinerary {
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub segments: Vec<FlightSegment>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FlightSegment {
    pub departure: SegmentEndpoint,
    pub arrival: SegmentEndpoint,
    #[serde(default, rename = "carrierCode")]
    pub carrier_code: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub aircraft: Option<Aircraft>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SegmentEndpoint {
    #[serde(default, rename = "iataCode")]
    pub iata_code: Option<String>,
    #[serde(default)]
    pub at: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Aircraft {
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TravelerPricing {
    #[serde(default, rename = "fareDetailsBySegment")]
    pub fare_details_by_segment: Vec<FareDetail>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FareDetail {
    #[serde(default)]
    pub cabin: Option<String>,
}

impl ExternalFlight {
    pub fn first_segment(&self) -> Option<&FlightSegment> {
        self.itineraries.first()?.segments.first()
    }

    pub fn stops(&self) -> usize {
        self.itineraries
            .first()
            .map(|it| it.segments.len().saturating_sub(1))
            .unwrap_or(0)
    }

    pub fn cabin(&self) -> Option<&str> {
        self.traveler_pricings
            .first()?
            .fare_details_by_segment
            .first()?
            .cabin
            .as_deref()
    }
}

/// Flat rows from the fallback tables; several fields have two spellings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct MockFlight {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub departure: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub airline: Option<String>,
    #[serde(default, rename = "flightNumber")]
    pub flight_number: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub aircraft: Option<String>,
    #[serde(default, rename = "departureTime")]
    pub departure_time: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default, rename = "departureDate")]
    pub departure_date: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub price: Option<PriceValue>,
    #[serde(default)]
    pub stops: Option<u32>,
    #[serde(default, rename = "class")]
    pub class: Option<String>,
    #[serde(default)]
    pub class_type: Option<String>,
}

impl MockFlight {
    pub fn origin(&self) -> Option<&str> {
        self.from.as_deref().or(self.departure.as_deref())
    }

    pub fn target(&self) -> Option<&str> {
        self.to.as_deref().or(self.destination.as_deref())
    }

    pub fn flight_code(&self) -> Option<&str> {
        self.flight_number.as_deref().or(self.number.as_deref())
    }

    pub fn time_label(&self) -> Option<&str> {
        self.departure_time.as_deref().or(self.time.as_deref())
    }

    pub fn date_label(&self) -> Option<&str> {
        self.departure_date.as_deref().or(self.date.as_deref())
    }

    pub fn cabin(&self) -> Option<&str> {
        self.class.as_deref().or(self.class_type.as_deref())
    }
}
