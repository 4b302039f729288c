//! Static content shown when the backend is unavailable or answers with nothing.
//! Every getter builds the same values on each call.

use crate::models::destination::{Area, City, Continent, Country, Destination};
use crate::models::flight::{FlightOffer, MockFlight};
use crate::models::hotel::{Amenity, HotelOffer, MockHotel};
use crate::models::listing::{Activity, Agent, Package};
use crate::models::search::{SearchKind, SearchResults};
use crate::models::PriceValue;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn mock_destinations() -> Vec<Destination> {
    [
        ("tokyo", "Tokyo", "Japan", "Modern metropolis with ancient traditions."),
        ("paris", "Paris", "France", "City of light and romance."),
        ("new-york", "New York", "USA", "The city that never sleeps."),
    ]
    .into_iter()
    .map(|(id, name, country, description)| Destination {
        id: id.to_string(),
        name: name.to_string(),
        country: Some(country.to_string()),
        continent: None,
        description: Some(description.to_string()),
        rating: None,
        price: None,
        best_time: None,
        highlights: None,
        image_url: None,
    })
    .collect()
}

pub fn continents() -> Vec<Continent> {
    [
        (
            "Asia",
            48,
            "Largest continent with diverse cultures, ancient civilizations, and modern cities",
            "diverse landscapes and cultures",
        ),
        (
            "Europe",
            44,
            "Historic continent with rich culture, art, and architecture",
            "historic cities and cultural heritage",
        ),
        (
            "North America",
            23,
            "Vast continent with diverse landscapes from Arctic to tropical",
            "natural wonders and modern cities",
        ),
        (
            "Africa",
            54,
            "Continent of incredible wildlife, ancient history, and diverse cultures",
            "wildlife and natural beauty",
        ),
        (
            "Oceania",
            14,
            "Island continent with stunning beaches and unique wildlife",
            "island paradise and marine life",
        ),
        (
            "South America",
            12,
            "Continent of Amazon rainforest, Andes mountains, and vibrant cultures",
            "rainforest and mountain landscapes",
        ),
        (
            "Antarctica",
            0,
            "Frozen continent of pristine wilderness and scientific research",
            "ice and snow landscapes",
        ),
    ]
    .into_iter()
    .map(|(name, count, description, theme)| Continent {
        name: name.to_string(),
        count,
        description: Some(description.to_string()),
        visual_theme: Some(theme.to_string()),
    })
    .collect()
}

/// Filter options on the destinations page when the backend is down.
pub fn continent_filters() -> Vec<Continent> {
    [
        ("Europe", 2),
        ("Asia", 1),
        ("North America", 1),
        ("Africa", 1),
        ("Oceania", 1),
    ]
    .into_iter()
    .map(|(name, count)| Continent {
        name: name.to_string(),
        count,
        description: None,
        visual_theme: None,
    })
    .collect()
}

pub fn countries_by_continent(continent: &str) -> Vec<Country> {
    let rows: &[(&str, &str, [&str; 3])] = match continent {
        "Asia" => &[
            (
                "Japan",
                "Land of the rising sun with ancient traditions and modern technology",
                ["Tokyo", "Kyoto", "Osaka"],
            ),
            (
                "Thailand",
                "Land of smiles with beautiful beaches and rich culture",
                ["Bangkok", "Phuket", "Chiang Mai"],
            ),
            (
                "India",
                "Incredible diversity with ancient history and vibrant culture",
                ["Mumbai", "Delhi", "Jaipur"],
            ),
            (
                "Vietnam",
                "Stunning landscapes and delicious cuisine",
                ["Ho Chi Minh City", "Hanoi", "Da Nang"],
            ),
            (
                "South Korea",
                "Modern cities and traditional culture",
                ["Seoul", "Busan", "Jeju"],
            ),
        ],
        "Europe" => &[
            ("France", "Art, culture, and culinary excellence", ["Paris", "Lyon", "Nice"]),
            ("Italy", "Ancient history, art, and delicious food", ["Rome", "Florence", "Venice"]),
            ("Spain", "Vibrant culture, beaches, and architecture", ["Madrid", "Barcelona", "Seville"]),
            ("Germany", "Efficient cities and beautiful countryside", ["Berlin", "Munich", "Hamburg"]),
            (
                "Netherlands",
                "Windmills, tulips, and cycling culture",
                ["Amsterdam", "Rotterdam", "The Hague"],
            ),
        ],
        "North America" => &[
            (
                "United States",
                "Land of opportunity with diverse landscapes",
                ["New York", "Los Angeles", "Chicago"],
            ),
            ("Canada", "Vast wilderness and friendly cities", ["Toronto", "Vancouver", "Montreal"]),
            ("Mexico", "Rich culture and beautiful beaches", ["Mexico City", "Cancun", "Guadalajara"]),
        ],
        "Africa" => &[
            (
                "South Africa",
                "Diverse wildlife and stunning landscapes",
                ["Cape Town", "Johannesburg", "Durban"],
            ),
            ("Egypt", "Ancient pyramids and rich history", ["Cairo", "Luxor", "Alexandria"]),
            ("Morocco", "Exotic markets and desert adventures", ["Marrakech", "Casablanca", "Fez"]),
        ],
        "Oceania" => &[
            ("Australia", "Unique wildlife and stunning coastlines", ["Sydney", "Melbourne", "Brisbane"]),
            (
                "New Zealand",
                "Adventure paradise with natural beauty",
                ["Auckland", "Wellington", "Christchurch"],
            ),
        ],
        "South America" => &[
            ("Brazil", "Carnival spirit and Amazon rainforest", ["Rio de Janeiro", "São Paulo", "Salvador"]),
            (
                "Argentina",
                "Tango culture and Patagonian wilderness",
                ["Buenos Aires", "Córdoba", "Mendoza"],
            ),
            ("Peru", "Ancient Incan ruins and diverse landscapes", ["Lima", "Cusco", "Arequipa"]),
        ],
        _ => &[],
    };

    rows.iter()
        .map(|(name, description, cities)| Country {
            name: name.to_string(),
            description: description.to_string(),
            cities: strings(cities),
        })
        .collect()
}

pub fn cities_by_country(country: &str) -> Vec<City> {
    let rows: &[(&str, &str, &str, [&str; 3])] = match country {
        "Japan" => &[
            ("tokyo", "Tokyo", "Modern metropolis with ancient traditions", ["Shibuya", "Shinjuku", "Harajuku"]),
            ("kyoto", "Kyoto", "Ancient capital with temples and gardens", ["Gion", "Arashiyama", "Higashiyama"]),
            ("osaka", "Osaka", "Food capital with vibrant nightlife", ["Dotonbori", "Namba", "Umeda"]),
        ],
        "France" => &[
            ("paris", "Paris", "City of light with art and romance", ["Eiffel Tower", "Louvre", "Montmartre"]),
            ("lyon", "Lyon", "Gastronomic capital of France", ["Vieux Lyon", "Presqu'île", "Croix-Rousse"]),
            (
                "nice",
                "Nice",
                "Beautiful coastal city on the French Riviera",
                ["Promenade des Anglais", "Old Town", "Cimiez"],
            ),
        ],
        "United States" => &[
            ("new-york", "New York", "The city that never sleeps", ["Manhattan", "Brooklyn", "Queens"]),
            (
                "los-angeles",
                "Los Angeles",
                "Entertainment capital of the world",
                ["Hollywood", "Venice Beach", "Downtown"],
            ),
            (
                "chicago",
                "Chicago",
                "Windy city with amazing architecture",
                ["Loop", "Magnificent Mile", "Wicker Park"],
            ),
        ],
        "Australia" => &[
            ("sydney", "Sydney", "Harbor city with iconic opera house", ["CBD", "Bondi Beach", "The Rocks"]),
            ("melbourne", "Melbourne", "Cultural capital with great coffee", ["CBD", "St Kilda", "Fitzroy"]),
        ],
        _ => &[],
    };

    rows.iter()
        .map(|(id, name, description, areas)| City {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            areas: strings(areas),
        })
        .collect()
}

pub fn areas_by_city(city: &str) -> Vec<Area> {
    let rows: &[(&str, &str, &str, [&str; 3])] = match city {
        "Tokyo" => &[
            ("shibuya", "Shibuya", "Fashion and youth culture district", ["Shopping", "People watching", "Nightlife"]),
            (
                "shinjuku",
                "Shinjuku",
                "Business and entertainment district",
                ["Skyscrapers", "Golden Gai", "Shinjuku Gyoen"],
            ),
            (
                "harajuku",
                "Harajuku",
                "Fashion and street culture",
                ["Takeshita Street", "Meiji Shrine", "Yoyogi Park"],
            ),
        ],
        "Paris" => &[
            (
                "eiffel",
                "Eiffel Tower Area",
                "Iconic landmark and surrounding gardens",
                ["Eiffel Tower", "Champ de Mars", "Trocadéro"],
            ),
            (
                "louvre",
                "Louvre District",
                "Art and culture center",
                ["Louvre Museum", "Tuileries Garden", "Palais Royal"],
            ),
            (
                "montmartre",
                "Montmartre",
                "Artistic hilltop neighborhood",
                ["Sacré-Cœur", "Place du Tertre", "Moulin Rouge"],
            ),
        ],
        "New York" => &[
            (
                "manhattan",
                "Manhattan",
                "Heart of NYC with iconic landmarks",
                ["Times Square", "Central Park", "Broadway"],
            ),
            (
                "brooklyn",
                "Brooklyn",
                "Trendy borough with great food",
                ["Brooklyn Bridge", "Williamsburg", "DUMBO"],
            ),
        ],
        _ => &[],
    };

    rows.iter()
        .map(|(id, name, description, activities)| Area {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            activities: strings(activities),
        })
        .collect()
}

pub fn mock_flights() -> Vec<FlightOffer> {
    [
        ("f1", "Air France", "AF123", "Boeing 777", "10:30 AM", "7h 45m", 899.0),
        ("f2", "Delta Airlines", "DL456", "Airbus A350", "2:15 PM", "8h 20m", 745.0),
    ]
    .into_iter()
    .map(|(id, airline, number, aircraft, time, duration, price)| {
        FlightOffer::Mock(MockFlight {
            id: Some(id.to_string()),
            from: Some("New York".to_string()),
            to: Some("Paris".to_string()),
            airline: Some(airline.to_string()),
            flight_number: Some(number.to_string()),
            aircraft: Some(aircraft.to_string()),
            departure_time: Some(time.to_string()),
            departure_date: Some("Dec 15, 2024".to_string()),
            duration: Some(duration.to_string()),
            price: Some(PriceValue::Amount(price)),
            ..Default::default()
        })
    })
    .collect()
}

fn detailed(amenities: &[(&str, &str)]) -> Vec<Amenity> {
    amenities
        .iter()
        .map(|(name, icon)| Amenity::Detailed {
            name: name.to_string(),
            icon: Some(icon.to_string()),
        })
        .collect()
}

pub fn mock_hotels() -> Vec<HotelOffer> {
    vec![
        HotelOffer::Mock(MockHotel {
            id: Some("h1".to_string()),
            name: Some("Le Grand Hotel Paris".to_string()),
            location: Some("Champs-Élysées, Paris".to_string()),
            image: Some(
                "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=400".to_string(),
            ),
            price: Some(PriceValue::Amount(350.0)),
            rating: Some(4.8),
            amenities: Some(detailed(&[
                ("WiFi", "wifi"),
                ("Pool", "swimming-pool"),
                ("Spa", "spa"),
                ("Restaurant", "utensils"),
            ])),
            ..Default::default()
        }),
        HotelOffer::Mock(MockHotel {
            id: Some("h2".to_string()),
            name: Some("Hotel Ritz Paris".to_string()),
            location: Some("Place Vendôme, Paris".to_string()),
            image: Some(
                "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?w=400".to_string(),
            ),
            price: Some(PriceValue::Amount(850.0)),
            rating: Some(4.9),
            amenities: Some(detailed(&[
                ("WiFi", "wifi"),
                ("Gym", "dumbbell"),
                ("Spa", "spa"),
                ("Bar", "glass-martini"),
            ])),
            ..Default::default()
        }),
    ]
}

pub fn mock_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: Some("a1".to_string()),
            name: Some("Eiffel Tower Skip-the-Line Tour".to_string()),
            category: Some("Culture".to_string()),
            description: Some(
                "Skip the long lines and enjoy priority access to the iconic Eiffel Tower."
                    .to_string(),
            ),
            image: Some(
                "https://images.unsplash.com/photo-1511739001486-6bfe10ce785f?w=400".to_string(),
            ),
            price: Some(PriceValue::Amount(89.0)),
            duration: Some("2 hours".to_string()),
            rating: Some(4.6),
            location: None,
        },
        Activity {
            id: Some("a2".to_string()),
            name: Some("Seine River Dinner Cruise".to_string()),
            category: Some("Food".to_string()),
            description: Some(
                "Enjoy a romantic dinner cruise along the Seine River with stunning views."
                    .to_string(),
            ),
            image: Some(
                "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=400".to_string(),
            ),
            price: Some(PriceValue::Amount(125.0)),
            duration: Some("3 hours".to_string()),
            rating: Some(4.8),
            location: None,
        },
    ]
}

pub fn mock_packages() -> Vec<Package> {
    vec![
        Package {
            id: Some("p1".to_string()),
            name: Some("Paris Romantic Getaway".to_string()),
            description: Some(
                "Perfect for couples, this package includes luxury hotel and romantic dinner."
                    .to_string(),
            ),
            image: Some(
                "https://images.unsplash.com/photo-1502602898534-47d22c0d8064?w=400".to_string(),
            ),
            price: Some(PriceValue::Amount(1299.0)),
            duration: Some("5 days, 4 nights".to_string()),
            includes: Some(strings(&[
                "Luxury Hotel",
                "Airport Transfer",
                "Romantic Dinner",
                "Private Tours",
            ])),
            ..Default::default()
        },
        Package {
            id: Some("p2".to_string()),
            name: Some("Paris Family Adventure".to_string()),
            description: Some("Family-friendly package with activities for all ages.".to_string()),
            image: Some(
                "https://images.unsplash.com/photo-1523050854058-8df90110c9e1?w=400".to_string(),
            ),
            price: Some(PriceValue::Amount(899.0)),
            duration: Some("6 days, 5 nights".to_string()),
            includes: Some(strings(&[
                "Family Hotel",
                "Airport Transfer",
                "Family Tours",
                "Museum Passes",
            ])),
            ..Default::default()
        },
    ]
}

pub fn mock_agents() -> Vec<Agent> {
    vec![
        Agent {
            id: Some("ag1".to_string()),
            name: Some("Marie Dubois".to_string()),
            specialty: Some("Luxury Travel".to_string()),
            description: Some(
                "Specializing in luxury European travel with over 15 years of experience."
                    .to_string(),
            ),
            avatar: Some(
                "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=120".to_string(),
            ),
            rating: Some(4.9),
            clients: Some(250),
            experience: Some(15),
        },
        Agent {
            id: Some("ag2".to_string()),
            name: Some("Jean-Pierre Martin".to_string()),
            specialty: Some("Adventure Travel".to_string()),
            description: Some(
                "Expert in adventure and outdoor travel experiences across Europe.".to_string(),
            ),
            avatar: Some(
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=120".to_string(),
            ),
            rating: Some(4.7),
            clients: Some(180),
            experience: Some(12),
        },
    ]
}

/// The designated mock list for a search tab.
pub fn mock_results(kind: SearchKind) -> SearchResults {
    match kind {
        SearchKind::Flights => SearchResults::Flights(mock_flights()),
        SearchKind::Hotels => SearchResults::Hotels(mock_hotels()),
        SearchKind::Activities => SearchResults::Activities(mock_activities()),
        SearchKind::Packages => SearchResults::Packages(mock_packages()),
        SearchKind::Agents => SearchResults::Agents(mock_agents()),
    }
}
