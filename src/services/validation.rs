use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::models::booking::{item_price, BookingForm, BookingRequest};
use crate::models::preferences::TravelPreferences;
use crate::models::search::{non_empty, SearchKind};
use crate::models::upload::UploadedFile;

pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];
pub const IMAGE_STYLES: [&str; 5] = ["artistic", "cartoon", "photographic", "painting", "sketch"];
const MIN_DESCRIPTION_CHARS: usize = 10;
const MAX_DESCRIPTION_CHARS: usize = 500;
const MIN_ENHANCEMENT_CHARS: usize = 5;
const MAX_PASSENGERS: u32 = 10;

/// Form problems, worded for the person filling in the form.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter dates as YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Travel date must be in the future")]
    TravelDateInPast,
    #[error("Return date must be after travel date")]
    ReturnBeforeTravel,
    #[error("Passengers must be between 1 and 10")]
    PassengerCount,
    #[error("Please fill in all required hotel search fields")]
    MissingHotelFields,
    #[error("Unknown search type: {0}")]
    UnknownSearchKind(String),
    #[error("{0}")]
    MissingPreference(&'static str),
    #[error("Please select at least one interest")]
    NoInterests,
    #[error("Please select an image first")]
    NoFile,
    #[error("Please select a valid image file (JPEG, PNG, or WebP)")]
    UnsupportedFileType,
    #[error("File size must be less than 10MB")]
    FileTooLarge,
    #[error("Please enter a description for your image")]
    EmptyPrompt,
    #[error("Please provide a more detailed description (at least 10 characters)")]
    DescriptionTooShort,
    #[error("Please keep the description under 500 characters")]
    DescriptionTooLong,
    #[error("Please provide a more detailed enhancement prompt (at least 5 characters)")]
    EnhancementTooShort,
    #[error("Please upload a selfie.")]
    SelfieRequired,
    #[error("Please enter a prompt (at least 10 characters).")]
    PhotoPromptTooShort,
    #[error("Unsupported image style: {0}")]
    UnsupportedStyle(String),
    #[error("Please upload a photo first")]
    PhotoRequired,
    #[error("Please generate recommendations first")]
    RecommendationsRequired,
    #[error("Please select at least one destination")]
    DestinationRequired,
    #[error("Unknown planner step {0}")]
    UnknownStep(u8),
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

/// Checks a booking form and builds the request sent to the backend.
/// Nothing here touches the network.
pub fn validate_booking(
    kind: SearchKind,
    item_id: &str,
    form: &BookingForm,
    today: NaiveDate,
) -> Result<BookingRequest, ValidationError> {
    let customer_name = form.customer_name.trim();
    let customer_email = form.customer_email.trim();
    let travel_date = form.travel_date.trim();

    if customer_name.is_empty() || customer_email.is_empty() || travel_date.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    if !is_valid_email(customer_email) {
        return Err(ValidationError::InvalidEmail);
    }

    let departure = parse_date(travel_date)?;
    if departure < today {
        return Err(ValidationError::TravelDateInPast);
    }

    let return_date = non_empty(&form.return_date);
    if let Some(raw) = &return_date {
        if parse_date(raw)? <= departure {
            return Err(ValidationError::ReturnBeforeTravel);
        }
    }

    let passengers = match non_empty(&form.passengers) {
        Some(raw) => raw.parse::<u32>().map_err(|_| ValidationError::PassengerCount)?,
        None => 1,
    };
    if !(1..=MAX_PASSENGERS).contains(&passengers) {
        return Err(ValidationError::PassengerCount);
    }

    Ok(BookingRequest {
        booking_type: kind,
        item_id: item_id.to_string(),
        customer_name: customer_name.to_string(),
        customer_email: customer_email.to_string(),
        customer_phone: non_empty(&form.customer_phone),
        travel_date: travel_date.to_string(),
        return_date,
        passengers,
        special_requests: non_empty(&form.special_requests),
        total_price: item_price(kind, item_id),
        currency: "USD".to_string(),
    })
}

/// `require_country` is set on the standalone recommendations page.
pub fn validate_preferences(
    prefs: &TravelPreferences,
    require_country: bool,
) -> Result<(), ValidationError> {
    if prefs.age_group.is_empty() {
        return Err(ValidationError::MissingPreference("Please select your age group"));
    }
    if prefs.group_size.is_empty() {
        return Err(ValidationError::MissingPreference("Please select your group size"));
    }
    if require_country && prefs.country.is_none() {
        return Err(ValidationError::MissingPreference("Please select your country"));
    }
    if prefs.trip_duration.is_empty() {
        return Err(ValidationError::MissingPreference("Please select your trip duration"));
    }
    if prefs.interests.is_empty() {
        return Err(ValidationError::NoInterests);
    }
    Ok(())
}

pub fn validate_image(file: &UploadedFile) -> Result<(), ValidationError> {
    if file.bytes.is_empty() {
        return Err(ValidationError::NoFile);
    }
    if !ALLOWED_IMAGE_TYPES.contains(&file.content_type.as_str()) {
        return Err(ValidationError::UnsupportedFileType);
    }
    if file.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge);
    }
    Ok(())
}

/// Returns the trimmed prompt and the style to send, if any.
pub fn validate_text_prompt(
    prompt: &str,
    style: Option<&str>,
) -> Result<(String, Option<String>), ValidationError> {
    let prompt = prompt.trim();
    let length = prompt.chars().count();
    if length == 0 {
        return Err(ValidationError::EmptyPrompt);
    }
    if length < MIN_DESCRIPTION_CHARS {
        return Err(ValidationError::DescriptionTooShort);
    }
    if length > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::DescriptionTooLong);
    }

    let style = match style.map(str::trim).filter(|s| !s.is_empty()) {
        Some(style) if IMAGE_STYLES.contains(&style) => Some(style.to_string()),
        Some(style) => return Err(ValidationError::UnsupportedStyle(style.to_string())),
        None => None,
    };

    Ok((prompt.to_string(), style))
}

pub fn validate_enhancement_prompt(prompt: &str) -> Result<String, ValidationError> {
    let prompt = prompt.trim();
    if prompt.chars().count() < MIN_ENHANCEMENT_CHARS {
        return Err(ValidationError::EnhancementTooShort);
    }
    Ok(prompt.to_string())
}

/// Selfie restyling needs a picture and a prompt of at least ten characters.
pub fn validate_photo_app(
    selfie: Option<&UploadedFile>,
    prompt: &str,
) -> Result<String, ValidationError> {
    let selfie = selfie.ok_or(ValidationError::SelfieRequired)?;
    if selfie.bytes.is_empty() {
        return Err(ValidationError::SelfieRequired);
    }
    let prompt = prompt.trim();
    if prompt.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(ValidationError::PhotoPromptTooShort);
    }
    Ok(prompt.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 1).unwrap()
    }

    fn form() -> BookingForm {
        BookingForm {
            customer_name: "Ada Lovelace".to_string(),
            customer_email: "ada@example.com".to_string(),
            travel_date: "2030-06-15".to_string(),
            passengers: Some("2".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_booking_builds_request() {
        let request = validate_booking(SearchKind::Hotels, "h2", &form(), today()).unwrap();
        assert_eq!(request.total_price, 850.0);
        assert_eq!(request.passengers, 2);
        assert_eq!(request.currency, "USD");
        assert_eq!(request.customer_phone, None);
    }

    #[test]
    fn test_email_without_at_sign() {
        let mut form = form();
        form.customer_email = "no-at-sign".to_string();
        assert_eq!(
            validate_booking(SearchKind::Flights, "f1", &form, today()),
            Err(ValidationError::InvalidEmail)
        );
        assert!(!is_valid_email("a b@c.d"));
        assert!(is_valid_email("a@b.co"));
    }

    #[test]
    fn test_required_fields_checked_first() {
        let mut form = form();
        form.customer_name = "   ".to_string();
        form.customer_email = "broken".to_string();
        assert_eq!(
            validate_booking(SearchKind::Flights, "f1", &form, today()),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_booking_dates() {
        let mut past = form();
        past.travel_date = "2030-05-31".to_string();
        assert_eq!(
            validate_booking(SearchKind::Flights, "f1", &past, today()),
            Err(ValidationError::TravelDateInPast)
        );

        let mut same_day = form();
        same_day.travel_date = "2030-06-01".to_string();
        assert!(validate_booking(SearchKind::Flights, "f1", &same_day, today()).is_ok());

        let mut early_return = form();
        early_return.return_date = Some("2030-06-15".to_string());
        assert_eq!(
            validate_booking(SearchKind::Flights, "f1", &early_return, today()),
            Err(ValidationError::ReturnBeforeTravel)
        );

        let mut garbled = form();
        garbled.travel_date = "15/06/2030".to_string();
        assert!(matches!(
            validate_booking(SearchKind::Flights, "f1", &garbled, today()),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_passenger_bounds() {
        for raw in ["0", "11", "many"] {
            let mut form = form();
            form.passengers = Some(raw.to_string());
            assert_eq!(
                validate_booking(SearchKind::Packages, "p1", &form, today()),
                Err(ValidationError::PassengerCount)
            );
        }

        let mut blank = form();
        blank.passengers = None;
        assert_eq!(
            validate_booking(SearchKind::Packages, "p1", &blank, today())
                .unwrap()
                .passengers,
            1
        );
    }

    #[test]
    fn test_preferences_order() {
        let mut prefs = TravelPreferences {
            age_group: "25-34".to_string(),
            group_size: "solo".to_string(),
            trip_duration: "7".to_string(),
            ..Default::default()
        };
        assert_eq!(validate_preferences(&prefs, false), Err(ValidationError::NoInterests));
        assert_eq!(
            validate_preferences(&prefs, true),
            Err(ValidationError::MissingPreference("Please select your country"))
        );

        prefs.interests.push("food".to_string());
        assert!(validate_preferences(&prefs, false).is_ok());
    }

    #[test]
    fn test_image_checks() {
        let mut file = UploadedFile {
            file_name: "me.gif".to_string(),
            content_type: "image/gif".to_string(),
            bytes: vec![1, 2, 3],
        };
        assert_eq!(validate_image(&file), Err(ValidationError::UnsupportedFileType));

        file.content_type = "image/png".to_string();
        assert!(validate_image(&file).is_ok());

        file.bytes = vec![0; MAX_UPLOAD_BYTES + 1];
        assert_eq!(validate_image(&file), Err(ValidationError::FileTooLarge));
    }

    #[test]
    fn test_prompts() {
        assert_eq!(validate_text_prompt("   ", None), Err(ValidationError::EmptyPrompt));
        assert_eq!(
            validate_text_prompt(" beach ", None),
            Err(ValidationError::DescriptionTooShort)
        );
        let (prompt, style) =
            validate_text_prompt("  sunset over Santorini  ", Some("painting")).unwrap();
        assert_eq!(prompt, "sunset over Santorini");
        assert_eq!(style.as_deref(), Some("painting"));
        assert!(validate_text_prompt("sunset over Santorini", Some("neon")).is_err());

        assert_eq!(
            validate_enhancement_prompt("tan"),
            Err(ValidationError::EnhancementTooShort)
        );
        assert_eq!(validate_enhancement_prompt(" make it sunny ").unwrap(), "make it sunny");
    }

    #[test]
    fn test_photo_app_inputs() {
        assert_eq!(
            validate_photo_app(None, "a long enough prompt"),
            Err(ValidationError::SelfieRequired)
        );
        let selfie = UploadedFile {
            file_name: "selfie.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![1],
        };
        assert_eq!(
            validate_photo_app(Some(&selfie), "  too short "),
            Err(ValidationError::PhotoPromptTooShort)
        );
        assert_eq!(
            validate_photo_app(Some(&selfie), " me on a beach in Bali ").unwrap(),
            "me on a beach in Bali"
        );
    }
}
