//! Coercion of free-text airport and city inputs into IATA codes.

const KNOWN_AIRPORTS: [&str; 40] = [
    "JFK", "LAX", "ORD", "DFW", "ATL", "DEN", "SFO", "LAS", "MCO", "CLT", //
    "BOM", "DEL", "BLR", "MAA", "HYD", "CCU", "COK", "GOI", "PNQ", "VGA", //
    "CDG", "LHR", "FRA", "AMS", "MAD", "BCN", "MUC", "ZRH", "VIE", "CPH", //
    "NRT", "HND", "ICN", "PEK", "PVG", "SIN", "BKK", "KUL", "CGK", "MNL",
];

const AIRPORT_ALIASES: [(&str, &str); 16] = [
    ("DOR", "CDG"),
    ("PAR", "CDG"),
    ("LON", "LHR"),
    ("NYC", "JFK"),
    ("LA", "LAX"),
    ("CHI", "ORD"),
    ("MUM", "BOM"),
    ("DEL", "DEL"),
    ("BAN", "BLR"),
    ("CHE", "MAA"),
    ("HYD", "HYD"),
    ("CAL", "CCU"),
    ("KER", "COK"),
    ("GOA", "GOI"),
    ("PUN", "PNQ"),
    ("VIZ", "VGA"),
];

const FALLBACK_AIRPORT: &str = "CDG";

/// Text before a `" - "` label, upper-cased.
pub fn city_code(input: &str) -> String {
    let upper = input.to_uppercase();
    match upper.split_once(" - ") {
        Some((code, _)) => code.trim().to_string(),
        None => upper,
    }
}

/// `"JFK - New York"` becomes `"JFK"`; anything longer is cut to three characters.
pub fn extract_code(input: &str) -> String {
    city_code(input).chars().take(3).collect()
}

/// Like [`extract_code`], but unknown codes are mapped to a nearby major airport.
pub fn destination_code(input: &str) -> String {
    let code = extract_code(input);
    if KNOWN_AIRPORTS.contains(&code.as_str()) {
        return code;
    }

    let mapped = AIRPORT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == code)
        .map(|(_, airport)| *airport)
        .unwrap_or(FALLBACK_AIRPORT);
    log::debug!("Mapped destination {:?} to airport {}", input, mapped);
    mapped.to_string()
}

pub fn travel_class(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return "ECONOMY".to_string();
    }

    match trimmed.to_lowercase().as_str() {
        "economy" => "ECONOMY".to_string(),
        "premium" => "PREMIUM_ECONOMY".to_string(),
        "business" => "BUSINESS".to_string(),
        "first" => "FIRST".to_string(),
        _ => trimmed.to_uppercase(),
    }
}
