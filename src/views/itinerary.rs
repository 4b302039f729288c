use serde::Serialize;
use serde_json::Value;

use crate::models::preferences::{
    Accommodation, BudgetBreakdown, BudgetLine, DailyPlan, DetailedItinerary, Restaurant,
    TipCategory,
};

/// Renders a loose JSON scalar; anything else falls back to `default`.
fn scalar(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default.to_string(),
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PlanDay {
    pub heading: String,
    pub morning: Vec<String>,
    pub afternoon: Vec<String>,
    pub evening: Vec<String>,
    pub accommodation: String,
    pub meals: String,
    pub transportation: String,
}

impl PlanDay {
    fn new(index: usize, plan: &DailyPlan) -> Self {
        let day = scalar(plan.day.as_ref(), &(index + 1).to_string());
        let meals = match &plan.meals {
            Some(meals) if !meals.is_empty() => meals.join(", "),
            _ => "Meals included".to_string(),
        };
        Self {
            heading: format!("Day {}: {}", day, plan.title.as_deref().unwrap_or_default()),
            morning: plan.morning.clone().unwrap_or_default(),
            afternoon: plan.afternoon.clone().unwrap_or_default(),
            evening: plan.evening.clone().unwrap_or_default(),
            accommodation: plan
                .accommodation
                .clone()
                .unwrap_or_else(|| "Hotel".to_string()),
            meals,
            transportation: plan
                .transportation
                .clone()
                .unwrap_or_else(|| "Transport provided".to_string()),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BudgetRow {
    pub label: &'static str,
    pub amount: String,
}

fn budget_rows(budget: &BudgetBreakdown) -> Vec<BudgetRow> {
    let line = |label: &'static str, line: &Option<BudgetLine>| BudgetRow {
        label,
        amount: format!(
            "${}",
            scalar(line.as_ref().and_then(|l| l.total.as_ref()), "0")
        ),
    };
    vec![
        line("Accommodation", &budget.accommodation),
        line("Meals", &budget.meals),
        line("Activities", &budget.activities),
        line("Transportation", &budget.transportation),
        line("Miscellaneous", &budget.miscellaneous),
        BudgetRow {
            label: "Total Trip Cost",
            amount: format!("${}", scalar(budget.total_trip_cost.as_ref(), "0")),
        },
        BudgetRow {
            label: "Cost Per Person",
            amount: format!("${}", scalar(budget.cost_per_person.as_ref(), "0")),
        },
    ]
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StayView {
    pub name: String,
    pub kind: String,
    pub location: String,
    pub price: String,
    pub rating: String,
    pub amenities: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl From<&Accommodation> for StayView {
    fn from(stay: &Accommodation) -> Self {
        Self {
            name: stay.name.clone(),
            kind: stay.kind.clone().unwrap_or_default(),
            location: stay.location.clone().unwrap_or_default(),
            price: scalar(stay.price.as_ref(), ""),
            rating: scalar(stay.rating.as_ref(), ""),
            amenities: stay.amenities.clone().unwrap_or_default(),
            pros: stay.pros.clone().unwrap_or_default(),
            cons: stay.cons.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RestaurantView {
    pub name: String,
    pub cuisine: String,
    pub price_range: String,
    pub rating: String,
    pub location: String,
    pub best_dishes: String,
    pub specialty: String,
    pub reservation: &'static str,
}

impl From<&Restaurant> for RestaurantView {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            name: restaurant.name.clone(),
            cuisine: restaurant.cuisine.clone().unwrap_or_default(),
            price_range: restaurant.price_range.clone().unwrap_or_default(),
            rating: scalar(restaurant.rating.as_ref(), ""),
            location: restaurant.location.clone().unwrap_or_default(),
            best_dishes: restaurant
                .best_dishes
                .as_deref()
                .unwrap_or_default()
                .join(", "),
            specialty: restaurant.specialty.clone().unwrap_or_default(),
            reservation: if restaurant.reservation_required.unwrap_or(false) {
                "📞 Reservation Required"
            } else {
                "✅ Walk-ins Welcome"
            },
        }
    }
}

/// A generated trip plan with every section ready to print. Empty sections
/// render their "not available" text.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DetailedItineraryView {
    pub title: String,
    pub destination: String,
    pub duration: String,
    pub travelers: String,
    pub best_time: String,
    pub summary: String,
    pub days: Vec<PlanDay>,
    pub budget: Vec<BudgetRow>,
    pub tips: Vec<TipCategory>,
    pub stays: Vec<StayView>,
    pub restaurants: Vec<RestaurantView>,
}

impl DetailedItineraryView {
    pub fn new(destination: &str, plan: &DetailedItinerary) -> Self {
        let overview = plan.trip_overview.clone().unwrap_or_default();
        Self {
            title: overview
                .title
                .unwrap_or_else(|| format!("{} Adventure", destination)),
            destination: overview
                .destination
                .unwrap_or_else(|| destination.to_string()),
            duration: overview.duration.unwrap_or_else(|| "7 days".to_string()),
            travelers: scalar(overview.travelers.as_ref(), "2"),
            best_time: overview.best_time.unwrap_or_else(|| "Year-round".to_string()),
            summary: overview
                .summary
                .unwrap_or_else(|| "An amazing adventure awaits!".to_string()),
            days: plan
                .daily_itinerary
                .as_deref()
                .unwrap_or_default()
                .iter()
                .enumerate()
                .map(|(i, day)| PlanDay::new(i, day))
                .collect(),
            budget: plan.budget_breakdown.as_ref().map(budget_rows).unwrap_or_default(),
            tips: plan.travel_tips.clone().unwrap_or_default(),
            stays: plan
                .accommodations
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(Into::into)
                .collect(),
            restaurants: plan
                .restaurants
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(Into::into)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_defaults() {
        let view = DetailedItineraryView::new("Lisbon", &DetailedItinerary::default());
        assert_eq!(view.title, "Lisbon Adventure");
        assert_eq!(view.duration, "7 days");
        assert_eq!(view.travelers, "2");
        assert_eq!(view.best_time, "Year-round");
        assert!(view.days.is_empty());
        assert!(view.budget.is_empty());
    }

    #[test]
    fn test_sections() {
        let plan: DetailedItinerary = serde_json::from_str(
            r#"{
                "tripOverview": {"title": "Kyoto Escape", "travelers": 3},
                "dailyItinerary": [{"title": "Temples", "meals": ["Kaiseki dinner"]}],
                "budgetBreakdown": {"meals": {"total": 300}, "totalTripCost": "2400"},
                "restaurants": [{"name": "Gion Karyo", "reservationRequired": true}, {"name": "Ippudo"}]
            }"#,
        )
        .unwrap();
        let view = DetailedItineraryView::new("Kyoto", &plan);
        assert_eq!(view.title, "Kyoto Escape");
        assert_eq!(view.travelers, "3");
        assert_eq!(view.days[0].heading, "Day 1: Temples");
        assert_eq!(view.days[0].meals, "Kaiseki dinner");
        assert_eq!(view.days[0].accommodation, "Hotel");
        assert_eq!(view.budget[0].amount, "$0");
        assert_eq!(view.budget[1].amount, "$300");
        assert_eq!(view.budget[5].amount, "$2400");
        assert_eq!(view.restaurants[0].reservation, "📞 Reservation Required");
        assert_eq!(view.restaurants[1].reservation, "✅ Walk-ins Welcome");
    }
}
