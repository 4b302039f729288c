use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Destination {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default, rename = "bestTime", alias = "best_time")]
    pub best_time: Option<String>,
    #[serde(default)]
    pub highlights: Option<Vec<String>>,
    #[serde(default)]
    pub image_url: Option<String>,
}

const DEFAULT_RATING: f32 = 4.5;

impl Destination {
    /// Fills the fields the backend tends to leave out, derived from rating and continent.
    pub fn enriched(mut self) -> Self {
        let rating = self.rating.unwrap_or(DEFAULT_RATING);
        self.rating = Some(rating);
        if self.price.is_none() {
            self.price = Some(price_from_rating(rating).to_string());
        }
        if self.best_time.is_none() {
            self.best_time = Some(best_time_for(self.continent.as_deref()).to_string());
        }
        if self.highlights.is_none() {
            self.highlights = Some(
                highlights_for(self.continent.as_deref())
                    .iter()
                    .map(|h| h.to_string())
                    .collect(),
            );
        }
        self
    }

    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [
            Some(self.name.as_str()),
            self.country.as_deref(),
            self.description.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
    }

    pub fn in_continent(&self, continent: &str) -> bool {
        continent.is_empty()
            || continent.eq_ignore_ascii_case("all")
            || self.continent.as_deref() == Some(continent)
    }
}

pub fn price_from_rating(rating: f32) -> &'static str {
    if rating >= 4.7 {
        "$$$"
    } else if rating >= 4.3 {
        "$$"
    } else {
        "$"
    }
}

pub fn best_time_for(continent: Option<&str>) -> &'static str {
    match continent {
        Some("Europe") => "May-September",
        Some("Asia") => "March-May, October-November",
        Some("North America") => "June-September",
        Some("Africa") => "March-May, September-November",
        Some("Oceania") => "December-February",
        _ => "Year-round",
    }
}

pub fn highlights_for(continent: Option<&str>) -> [&'static str; 4] {
    match continent {
        Some("Europe") => [
            "Cultural Sites",
            "Historic Architecture",
            "Local Cuisine",
            "Scenic Views",
        ],
        Some("Asia") => [
            "Temples",
            "Traditional Culture",
            "Natural Beauty",
            "Local Markets",
        ],
        Some("North America") => [
            "Outdoor Activities",
            "Wildlife",
            "Scenic Landscapes",
            "Adventure Sports",
        ],
        Some("Africa") => [
            "Wildlife Safaris",
            "Cultural Experiences",
            "Desert Landscapes",
            "Local Markets",
        ],
        Some("Oceania") => [
            "Adventure Sports",
            "Natural Beauty",
            "Indigenous Culture",
            "Beach Activities",
        ],
        _ => [
            "Local Attractions",
            "Cultural Sites",
            "Natural Beauty",
            "Local Cuisine",
        ],
    }
}

/// Backend may answer `/destinations` with a bare list or a `{success, data, source}` envelope.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum DestinationsPayload {
    Envelope {
        #[serde(default)]
        success: Option<bool>,
        data: Vec<Destination>,
        #[serde(default)]
        source: Option<String>,
    },
    List(Vec<Destination>),
}

impl DestinationsPayload {
    pub fn into_parts(self) -> (Vec<Destination>, Option<String>) {
        match self {
            DestinationsPayload::Envelope { data, source, .. } => (data, source),
            DestinationsPayload::List(data) => (data, None),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Continent {
    pub name: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub visual_theme: Option<String>,
}

/// `/continents` answers either a list or `{data: [...]}`.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum ContinentsPayload {
    Envelope { data: Vec<Continent> },
    List(Vec<Continent>),
}

impl From<ContinentsPayload> for Vec<Continent> {
    fn from(payload: ContinentsPayload) -> Self {
        match payload {
            ContinentsPayload::Envelope { data } => data,
            ContinentsPayload::List(data) => data,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Country {
    pub name: String,
    pub description: String,
    pub cities: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct City {
    pub id: String,
    pub name: String,
    pub description: String,
    pub areas: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Area {
    pub id: String,
    pub name: String,
    pub description: String,
    pub activities: Vec<String>,
}

/// The leaf chosen at the end of the drill-down.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SelectedArea {
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub continent: Option<String>,
}
