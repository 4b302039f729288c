pub mod booking;
pub mod destination;
pub mod flight;
pub mod hotel;
pub mod listing;
pub mod notice;
pub mod preferences;
pub mod search;
pub mod upload;

use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

/// A price as the backend or mock tables send it: a bare number or a display label like `"$150/night"`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum PriceValue {
    Amount(f64),
    Label(String),
}

impl PriceValue {
    pub fn amount(&self) -> Option<f64> {
        match self {
            PriceValue::Amount(value) => Some(*value),
            PriceValue::Label(label) => parse_price_label(label),
        }
    }
}

/// Pulls the first decimal number out of labels such as `"$299"` or `"$150/night"`.
pub fn parse_price_label(label: &str) -> Option<f64> {
    let start = label.find(|c: char| c.is_ascii_digit())?;
    let digits: String = label[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .filter(|c| *c != ',')
        .collect();
    digits.parse().ok()
}

/// Id for records that arrive without one, e.g. `flight_1718000000000_k3j9x0a2b`.
pub fn generated_id(prefix: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|c| (c as char).to_ascii_lowercase())
        .collect();
    format!("{}_{}_{}", prefix, chrono::Utc::now().timestamp_millis(), suffix)
}
