use serde::{Deserialize, Serialize};

use super::destination::Destination;
use super::search::non_empty;

/// Preference form fields. Interests arrive comma separated.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PreferencesForm {
    pub age_group: Option<String>,
    pub group_size: Option<String>,
    pub country: Option<String>,
    pub budget_range: Option<String>,
    pub trip_duration: Option<String>,
    pub interests: Option<String>,
    pub additional_notes: Option<String>,
}

impl PreferencesForm {
    pub fn into_preferences(self) -> TravelPreferences {
        let interests = self
            .interests
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .collect();

        TravelPreferences {
            age_group: non_empty(&self.age_group).unwrap_or_default(),
            group_size: non_empty(&self.group_size).unwrap_or_default(),
            country: non_empty(&self.country),
            budget_range: non_empty(&self.budget_range).and_then(|b| b.parse().ok()),
            trip_duration: non_empty(&self.trip_duration).unwrap_or_default(),
            interests,
            additional_notes: non_empty(&self.additional_notes),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TravelPreferences {
    pub age_group: String,
    pub group_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub budget_range: Option<u32>,
    pub trip_duration: String,
    pub interests: Vec<String>,
    pub additional_notes: Option<String>,
}

impl TravelPreferences {
    /// Numeric group sizes are used as-is, named ones count as two travellers.
    pub fn travelers(&self) -> u32 {
        self.group_size.trim().parse().unwrap_or(2)
    }

    /// Passenger count pre-filled on the booking step.
    pub fn party_size(&self) -> Option<u32> {
        match self.group_size.as_str() {
            "solo" => Some(1),
            "couple" => Some(2),
            "family" | "friends" => Some(4),
            "large-group" => Some(5),
            _ => None,
        }
    }
}

/// A missing budget sorts into the top tier.
pub fn budget_level(budget: Option<u32>) -> &'static str {
    match budget {
        Some(amount) if amount <= 1000 => "budget",
        Some(amount) if amount <= 3000 => "mid-range",
        _ => "luxury",
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ItineraryDay {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub activities: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Recommendations {
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Recommendations>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Itinerary {
    #[serde(default)]
    pub days: Vec<ItineraryDay>,
}

#[derive(Debug, Serialize)]
pub struct ItineraryRequest<'a> {
    #[serde(rename = "destinationId")]
    pub destination_id: &'a str,
    pub preferences: &'a TravelPreferences,
    pub prompt: &'a str,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ItineraryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub itinerary: Option<Itinerary>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DetailedItineraryRequest {
    pub destination: String,
    pub duration: String,
    pub budget_level: String,
    pub travelers: u32,
}

impl DetailedItineraryRequest {
    pub fn new(destination: &str, preferences: &TravelPreferences) -> Self {
        Self {
            destination: destination.to_string(),
            duration: preferences.trip_duration.clone(),
            budget_level: budget_level(preferences.budget_range).to_string(),
            travelers: preferences.travelers(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DetailedItineraryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<DetailedItinerary>,
}

/// Generated trip plan. Loose scalar fields stay as JSON values since the
/// generator mixes numbers and strings for them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DetailedItinerary {
    #[serde(default)]
    pub trip_overview: Option<TripOverview>,
    #[serde(default)]
    pub daily_itinerary: Option<Vec<DailyPlan>>,
    #[serde(default)]
    pub budget_breakdown: Option<BudgetBreakdown>,
    #[serde(default)]
    pub travel_tips: Option<Vec<TipCategory>>,
    #[serde(default)]
    pub accommodations: Option<Vec<Accommodation>>,
    #[serde(default)]
    pub restaurants: Option<Vec<Restaurant>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TripOverview {
    pub title: Option<String>,
    pub destination: Option<String>,
    pub duration: Option<String>,
    pub travelers: Option<serde_json::Value>,
    pub best_time: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct DailyPlan {
    #[serde(default)]
    pub day: Option<serde_json::Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub morning: Option<Vec<String>>,
    #[serde(default)]
    pub afternoon: Option<Vec<String>>,
    #[serde(default)]
    pub evening: Option<Vec<String>>,
    #[serde(default)]
    pub accommodation: Option<String>,
    #[serde(default)]
    pub meals: Option<Vec<String>>,
    #[serde(default)]
    pub transportation: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BudgetLine {
    #[serde(default)]
    pub total: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBreakdown {
    pub accommodation: Option<BudgetLine>,
    pub meals: Option<BudgetLine>,
    pub activities: Option<BudgetLine>,
    pub transportation: Option<BudgetLine>,
    pub miscellaneous: Option<BudgetLine>,
    pub total_trip_cost: Option<serde_json::Value>,
    pub cost_per_person: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct TipCategory {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Accommodation {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub price: Option<serde_json::Value>,
    #[serde(default)]
    pub rating: Option<serde_json::Value>,
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub pros: Option<Vec<String>>,
    #[serde(default)]
    pub cons: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(default)]
    pub name: String,
    pub cuisine: Option<String>,
    pub price_range: Option<String>,
    pub rating: Option<serde_json::Value>,
    pub location: Option<String>,
    pub best_dishes: Option<Vec<String>>,
    pub specialty: Option<String>,
    pub reservation_required: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_levels() {
        assert_eq!(budget_level(Some(800)), "budget");
        assert_eq!(budget_level(Some(1000)), "budget");
        assert_eq!(budget_level(Some(3000)), "mid-range");
        assert_eq!(budget_level(Some(3001)), "luxury");
        assert_eq!(budget_level(None), "luxury");
    }

    #[test]
    fn test_form_into_preferences() {
        let form = PreferencesForm {
            age_group: Some("25-34".to_string()),
            group_size: Some("couple".to_string()),
            budget_range: Some("2500".to_string()),
            trip_duration: Some("7".to_string()),
            interests: Some("culture, food,,".to_string()),
            additional_notes: Some("  ".to_string()),
            ..Default::default()
        };
        let prefs = form.into_preferences();
        assert_eq!(prefs.interests, vec!["culture", "food"]);
        assert_eq!(prefs.budget_range, Some(2500));
        assert_eq!(prefs.additional_notes, None);
        assert_eq!(prefs.travelers(), 2);
        assert_eq!(prefs.party_size(), Some(2));

        let body = serde_json::to_value(&prefs).unwrap();
        assert_eq!(body["ageGroup"], "25-34");
        assert!(body.get("country").is_none());
    }

    #[test]
    fn test_detailed_request_from_preferences() {
        let prefs = TravelPreferences {
            group_size: "3".to_string(),
            trip_duration: "5".to_string(),
            budget_range: Some(1200),
            ..Default::default()
        };
        let request = DetailedItineraryRequest::new("Lisbon", &prefs);
        assert_eq!(request.travelers, 3);
        assert_eq!(request.budget_level, "mid-range");
    }

    #[test]
    fn test_detailed_itinerary_sections() {
        let plan: DetailedItinerary = serde_json::from_str(
            r#"{
                "tripOverview": {"title": "Kyoto Escape", "travelers": 2},
                "dailyItinerary": [{"day": 1, "title": "Arrival", "morning": ["Check in"]}],
                "budgetBreakdown": {"meals": {"total": 300}, "totalTripCost": "2400"},
                "restaurants": [{"name": "Gion Karyo", "reservationRequired": true}]
            }"#,
        )
        .unwrap();
        assert_eq!(plan.daily_itinerary.unwrap()[0].morning.as_ref().unwrap()[0], "Check in");
        assert_eq!(plan.restaurants.unwrap()[0].reservation_required, Some(true));
        assert!(plan.travel_tips.is_none());
    }
}
