use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use super::flight::OfferPrice;
use super::PriceValue;

/// Live hotel offers carry `price.total`; anything else is a mock row.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum HotelOffer {
    External(ExternalHotel),
    Mock(MockHotel),
}

impl<'de> Deserialize<'de> for HotelOffer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let has_total = value
            .get("price")
            .and_then(|price| price.get("total"))
            .is_some_and(|total| !total.is_null());

        if has_total {
            serde_json::from_value(value)
                .map(HotelOffer::External)
                .map_err(D::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(HotelOffer::Mock)
                .map_err(D::Error::custom)
        }
    }
}

#[serde_as]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExternalHotel {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<HotelLocation>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub rating: Option<f32>,
    pub price: OfferPrice,
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub room: Option<HotelRoom>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HotelLocation {
    #[serde(default)]
    pub address: Option<HotelAddress>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HotelAddress {
    #[serde(default, rename = "cityName")]
    pub city_name: Option<String>,
    #[serde(default, rename = "countryCode")]
    pub country_code: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HotelRoom {
    #[serde(default)]
    pub description: Option<String>,
}

impl ExternalHotel {
    pub fn city(&self) -> Option<&str> {
        let address = self.location.as_ref()?.address.as_ref()?;
        address
            .city_name
            .as_deref()
            .or(address.country_code.as_deref())
    }
}

/// Mock amenities are either plain names or `{name, icon}` pairs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Amenity {
    Named(String),
    Detailed { name: String, icon: Option<String> },
}

impl Amenity {
    pub fn name(&self) -> &str {
        match self {
            Amenity::Named(name) => name,
            Amenity::Detailed { name, .. } => name,
        }
    }

    pub fn icon(&self) -> Option<&str> {
        match self {
            Amenity::Named(_) => None,
            Amenity::Detailed { icon, .. } => icon.as_deref(),
        }
    }
}

#[serde_as]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct MockHotel {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub rating: Option<f32>,
    #[serde(default)]
    pub price: Option<PriceValue>,
    #[serde(default)]
    pub amenities: Option<Vec<Amenity>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub distance: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_total_selects_external() {
        let offer: HotelOffer = serde_json::from_value(json!({
            "id": "HLPAR123",
            "name": "Hotel Lutetia",
            "rating": "5",
            "price": {"total": "412.00", "currency": "EUR"},
            "location": {"address": {"countryCode": "FR"}}
        }))
        .unwrap();

        match offer {
            HotelOffer::External(hotel) => {
                assert_eq!(hotel.rating, Some(5.0));
                assert_eq!(hotel.city(), Some("FR"));
                assert_eq!(hotel.price.total, Some(412.0));
            }
            other => panic!("expected external hotel, got {:?}", other),
        }
    }

    #[test]
    fn test_mock_amenity_shapes() {
        let offer: HotelOffer = serde_json::from_value(json!({
            "id": "h1",
            "name": "Le Grand Hotel Paris",
            "price": 350,
            "amenities": ["WiFi", {"name": "Spa", "icon": "spa"}]
        }))
        .unwrap();

        match offer {
            HotelOffer::Mock(hotel) => {
                let amenities = hotel.amenities.unwrap();
                assert_eq!(amenities[0].name(), "WiFi");
                assert_eq!(amenities[0].icon(), None);
                assert_eq!(amenities[1].icon(), Some("spa"));
            }
            other => panic!("expected mock hotel, got {:?}", other),
        }
    }
}
