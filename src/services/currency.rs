use serde::Serialize;

const SYMBOLS: [(&str, &str); 47] = [
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("CAD", "C$"),
    ("AUD", "A$"),
    ("CHF", "CHF"),
    ("CNY", "¥"),
    ("KRW", "₩"),
    ("SGD", "S$"),
    ("HKD", "HK$"),
    ("AED", "AED"),
    ("SAR", "SAR"),
    ("THB", "฿"),
    ("MYR", "RM"),
    ("IDR", "Rp"),
    ("PHP", "₱"),
    ("VND", "₫"),
    ("BRL", "R$"),
    ("MXN", "MX$"),
    ("ARS", "AR$"),
    ("CLP", "CL$"),
    ("PEN", "S/"),
    ("COP", "CO$"),
    ("UYU", "UY$"),
    ("PYG", "₲"),
    ("BOB", "Bs"),
    ("EGP", "E£"),
    ("ZAR", "R"),
    ("NGN", "₦"),
    ("KES", "KSh"),
    ("GHS", "GH₵"),
    ("MAD", "MAD"),
    ("TND", "TND"),
    ("RUB", "₽"),
    ("TRY", "₺"),
    ("PLN", "zł"),
    ("CZK", "Kč"),
    ("HUF", "Ft"),
    ("RON", "lei"),
    ("BGN", "лв"),
    ("HRK", "kn"),
    ("SEK", "kr"),
    ("NOK", "kr"),
    ("DKK", "kr"),
    ("ISK", "kr"),
];

// 1 USD = x
const FROM_USD: [(&str, f64); 46] = [
    ("INR", 83.5),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("JPY", 150.5),
    ("CAD", 1.35),
    ("AUD", 1.52),
    ("CHF", 0.87),
    ("CNY", 7.23),
    ("KRW", 1330.0),
    ("SGD", 1.34),
    ("HKD", 7.82),
    ("AED", 3.67),
    ("SAR", 3.75),
    ("THB", 35.8),
    ("MYR", 4.72),
    ("IDR", 15750.0),
    ("PHP", 56.2),
    ("VND", 24500.0),
    ("BRL", 4.95),
    ("MXN", 17.2),
    ("ARS", 850.0),
    ("CLP", 950.0),
    ("PEN", 3.72),
    ("COP", 3950.0),
    ("UYU", 39.5),
    ("PYG", 7300.0),
    ("BOB", 6.92),
    ("EGP", 31.2),
    ("ZAR", 18.8),
    ("NGN", 1600.0),
    ("KES", 160.0),
    ("GHS", 12.5),
    ("MAD", 10.2),
    ("TND", 3.12),
    ("RUB", 92.5),
    ("TRY", 31.2),
    ("PLN", 3.95),
    ("CZK", 22.8),
    ("HUF", 350.0),
    ("RON", 4.58),
    ("BGN", 1.79),
    ("HRK", 6.95),
    ("SEK", 10.4),
    ("NOK", 10.6),
    ("DKK", 6.88),
    ("ISK", 138.0),
];

// 1 INR = x
const FROM_INR: [(&str, f64); 46] = [
    ("USD", 0.012),
    ("EUR", 0.011),
    ("GBP", 0.0095),
    ("JPY", 1.8),
    ("CAD", 0.016),
    ("AUD", 0.018),
    ("CHF", 0.0104),
    ("CNY", 0.087),
    ("KRW", 15.9),
    ("SGD", 0.016),
    ("HKD", 0.094),
    ("AED", 0.044),
    ("SAR", 0.045),
    ("THB", 0.43),
    ("MYR", 0.057),
    ("IDR", 189.0),
    ("PHP", 0.67),
    ("VND", 293.0),
    ("BRL", 0.059),
    ("MXN", 0.206),
    ("ARS", 10.2),
    ("CLP", 11.4),
    ("PEN", 0.045),
    ("COP", 47.3),
    ("UYU", 0.473),
    ("PYG", 87.4),
    ("BOB", 0.083),
    ("EGP", 0.374),
    ("ZAR", 0.225),
    ("NGN", 19.2),
    ("KES", 1.92),
    ("GHS", 0.15),
    ("MAD", 0.122),
    ("TND", 0.037),
    ("RUB", 1.11),
    ("TRY", 0.374),
    ("PLN", 0.047),
    ("CZK", 0.273),
    ("HUF", 4.19),
    ("RON", 0.055),
    ("BGN", 0.021),
    ("HRK", 0.083),
    ("SEK", 0.125),
    ("NOK", 0.127),
    ("DKK", 0.082),
    ("ISK", 1.65),
];

fn lookup(table: &[(&str, f64)], code: &str) -> Option<f64> {
    table.iter().find(|(c, _)| *c == code).map(|(_, rate)| *rate)
}

fn anchor_row(code: &str) -> Option<&'static [(&'static str, f64)]> {
    match code {
        "USD" => Some(&FROM_USD),
        "INR" => Some(&FROM_INR),
        _ => None,
    }
}

/// Display symbol for a currency code; unknown codes are shown as-is.
pub fn symbol(code: &str) -> &str {
    SYMBOLS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, s)| *s)
        .unwrap_or(code)
}

/// Approximate rate from `from` to `to`. Only USD and INR carry rate rows,
/// so pairs with neither side anchored fall back to 1.
pub fn exchange_rate(from: &str, to: &str) -> f64 {
    anchor_row(from)
        .and_then(|row| lookup(row, to))
        .unwrap_or(1.0)
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DisplayPrice {
    pub primary: String,
    pub secondary: Vec<String>,
}

/// Formats an amount with its symbol and adds rounded USD and INR lines for
/// other currencies. `decimals` fixes the precision of the primary line;
/// `None` prints the amount as it is.
pub fn display_price(amount: f64, currency: &str, decimals: Option<usize>) -> DisplayPrice {
    let mut secondary = Vec::new();
    if currency != "USD" {
        secondary.push(format!("${}", (amount * exchange_rate(currency, "USD")).round()));
    }
    if currency != "INR" {
        secondary.push(format!("₹{}", (amount * exchange_rate(currency, "INR")).round()));
    }

    let primary = match decimals {
        Some(places) => format!("{}{:.*}", symbol(currency), places, amount),
        None => format!("{}{}", symbol(currency), amount),
    };

    DisplayPrice { primary, secondary }
}
