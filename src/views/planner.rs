use serde::Serialize;

use crate::models::destination::{Area, City, Continent, Country, Destination, SelectedArea};
use crate::models::preferences::{Itinerary, ItineraryDay, Recommendations};
use crate::services::drill_down::{DrillDown, Level};
use crate::services::session::{BookingDefaults, PlannerSession};

/// Percent-encodes a value for use as one path segment.
pub fn path_segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GridCard {
    pub title: String,
    pub count: String,
    pub description: String,
    pub select_path: String,
    /// Set on cities and areas, which offer itinerary and image shortcuts.
    pub destination_id: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GridView {
    pub level: Level,
    pub heading: String,
    pub trail: Vec<String>,
    pub cards: Vec<GridCard>,
}

impl GridView {
    pub fn continents(continents: &[Continent]) -> Self {
        Self {
            level: Level::Continent,
            heading: "Choose a continent".to_string(),
            trail: Vec::new(),
            cards: continents
                .iter()
                .map(|c| GridCard {
                    title: c.name.clone(),
                    count: format!("{} destinations", c.count),
                    description: or_default(
                        c.description.as_deref().unwrap_or_default(),
                        "Explore amazing destinations",
                    ),
                    select_path: format!("/planner/continents/{}", path_segment(&c.name)),
                    destination_id: None,
                })
                .collect(),
        }
    }

    fn countries(trail: Vec<String>, countries: &[Country]) -> Self {
        Self {
            level: Level::Country,
            heading: "Choose a country".to_string(),
            trail,
            cards: countries
                .iter()
                .map(|c| GridCard {
                    title: c.name.clone(),
                    count: format!("{} cities", c.cities.len()),
                    description: or_default(&c.description, "Discover amazing cities"),
                    select_path: format!("/planner/countries/{}", path_segment(&c.name)),
                    destination_id: None,
                })
                .collect(),
        }
    }

    fn cities(trail: Vec<String>, cities: &[City]) -> Self {
        Self {
            level: Level::City,
            heading: "Choose a city".to_string(),
            trail,
            cards: cities
                .iter()
                .map(|c| GridCard {
                    title: c.name.clone(),
                    count: format!("{} areas", c.areas.len()),
                    description: or_default(&c.description, "Explore local areas"),
                    select_path: format!("/planner/cities/{}", path_segment(&c.name)),
                    destination_id: Some(path_segment(&c.id)),
                })
                .collect(),
        }
    }

    fn areas(trail: Vec<String>, areas: &[Area]) -> Self {
        Self {
            level: Level::Area,
            heading: "Choose an area".to_string(),
            trail,
            cards: areas
                .iter()
                .map(|a| GridCard {
                    title: a.name.clone(),
                    count: format!("{} activities", a.activities.len()),
                    description: or_default(&a.description, "Discover local experiences"),
                    select_path: format!("/planner/areas/{}", path_segment(&a.name)),
                    destination_id: Some(path_segment(&a.id)),
                })
                .collect(),
        }
    }

    /// The grid for whichever level the drill-down is on. The continent
    /// level needs the continent list, which the drill-down does not hold.
    pub fn for_drill_down(drill: &DrillDown, continents: &[Continent]) -> Self {
        let trail: Vec<String> = [
            drill.selected_continent(),
            drill.selected_country(),
            drill.selected_city(),
        ]
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect();

        match drill.level() {
            Level::Continent => Self::continents(continents),
            Level::Country => Self::countries(trail, drill.countries()),
            Level::City => Self::cities(trail, drill.cities()),
            Level::Area => Self::areas(trail, drill.areas()),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RecommendationCard {
    pub id: String,
    pub name: String,
    pub country: String,
    pub description: String,
    pub rating: String,
    pub stars: Vec<&'static str>,
    pub price: String,
    pub best_time: Option<String>,
    pub highlights: String,
    pub image_url: Option<String>,
}

/// Icon classes for a rating: full stars, a half star from .5, empty up to five.
pub fn star_icons(rating: f32) -> Vec<&'static str> {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = rating - rating.floor() >= 0.5;
    let mut icons = vec!["fas fa-star"; full];
    if half {
        icons.push("fas fa-star-half-alt");
    }
    while icons.len() < 5 {
        icons.push("far fa-star");
    }
    icons
}

impl From<&Destination> for RecommendationCard {
    fn from(destination: &Destination) -> Self {
        let rating = destination.rating.unwrap_or(4.5);
        let highlights = destination
            .highlights
            .as_deref()
            .unwrap_or_default()
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(" • ");
        Self {
            id: destination.id.clone(),
            name: destination.name.clone(),
            country: or_default(
                destination.country.as_deref().unwrap_or_default(),
                "Unknown Country",
            ),
            description: or_default(
                destination.description.as_deref().unwrap_or_default(),
                "An amazing destination awaits!",
            ),
            rating: format!("{:.1}", rating),
            stars: star_icons(rating),
            price: or_default(destination.price.as_deref().unwrap_or_default(), "$$"),
            best_time: destination.best_time.clone(),
            highlights,
            image_url: destination.image_url.clone(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DayView {
    pub heading: String,
    pub activities: Vec<String>,
}

fn day_views(days: &[ItineraryDay]) -> Vec<DayView> {
    days.iter()
        .enumerate()
        .map(|(i, day)| DayView {
            heading: format!("Day {}: {}", i + 1, day.title),
            activities: day.activities.clone(),
        })
        .collect()
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RecommendationsView {
    pub destinations: Vec<RecommendationCard>,
    pub itinerary: Vec<DayView>,
    /// Where the "Select" buttons post the chosen destination id.
    pub select_action: String,
}

impl RecommendationsView {
    pub fn new(recommendations: &Recommendations, select_action: &str) -> Self {
        Self {
            destinations: recommendations.destinations.iter().map(Into::into).collect(),
            itinerary: day_views(&recommendations.itinerary),
            select_action: select_action.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ItineraryView {
    pub title: &'static str,
    pub days: Vec<DayView>,
}

impl From<&Itinerary> for ItineraryView {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            title: "Your Custom AI-Generated Itinerary",
            days: day_views(&itinerary.days),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StepView {
    pub step: u8,
    pub progress: String,
    pub selected: Option<SelectedArea>,
    pub booking: Option<BookingDefaults>,
}

impl From<&PlannerSession> for StepView {
    fn from(session: &PlannerSession) -> Self {
        Self {
            step: session.step(),
            progress: format!("{:.0}", session.progress()),
            selected: session.selected_destination.clone(),
            booking: if session.step() == 3 {
                session.booking_defaults()
            } else {
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fallback;

    #[test]
    fn test_star_icons() {
        assert_eq!(
            star_icons(3.5),
            vec![
                "fas fa-star",
                "fas fa-star",
                "fas fa-star",
                "fas fa-star-half-alt",
                "far fa-star"
            ]
        );
        assert_eq!(star_icons(4.2).iter().filter(|s| **s == "fas fa-star").count(), 4);
        assert_eq!(star_icons(5.0).len(), 5);
    }

    #[test]
    fn test_recommendation_defaults() {
        let card = RecommendationCard::from(&fallback::mock_destinations()[0]);
        assert_eq!(card.rating, "4.5");
        assert_eq!(card.price, "$$");
        assert_eq!(card.highlights, "");

        let enriched = fallback::mock_destinations()[1].clone().enriched();
        let card = RecommendationCard::from(&enriched);
        assert_eq!(card.highlights.split(" • ").count(), 3);
    }

    #[test]
    fn test_continent_grid_paths() {
        let grid = GridView::continents(&fallback::continents());
        assert_eq!(grid.cards[2].select_path, "/planner/continents/North%20America");
        assert_eq!(grid.cards[0].count, "48 destinations");
    }

    #[test]
    fn test_path_segment_keeps_plus_literal() {
        assert_eq!(path_segment("São Paulo"), "S%C3%A3o%20Paulo");
        assert_eq!(path_segment("a+b"), "a%2Bb");
    }

    #[test]
    fn test_itinerary_headings() {
        let view = ItineraryView::from(&Itinerary {
            days: vec![ItineraryDay {
                title: "Arrival".to_string(),
                activities: vec!["Check in".to_string()],
            }],
        });
        assert_eq!(view.days[0].heading, "Day 1: Arrival");
    }

    #[test]
    fn test_step_progress() {
        let session = PlannerSession::default();
        let view = StepView::from(&session);
        assert_eq!(view.progress, "33");
        assert!(view.booking.is_none());
    }
}
