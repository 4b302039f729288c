use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Serialize;

use crate::error::ApiError;
use crate::models::booking::{BookingConfirmation, BookingRequest};
use crate::models::destination::{Area, City, Continent, Country, Destination};
use crate::models::notice::Notice;
use crate::models::preferences::{
    DetailedItinerary, DetailedItineraryRequest, Itinerary, Recommendations, TravelPreferences,
};
use crate::models::search::{
    BookingSearchRequest, FlightSearchRequest, HotelSearchRequest, SearchForm, SearchKind,
    SearchResults,
};
use crate::models::upload::{
    DestinationImage, GeneratedImage, LightXRequest, TextToImageRequest, TextToImageResponse,
    UploadedFile, VisualizationRequest, VisualizationResponse,
};
use crate::services::api_client::ApiClient;
use crate::services::drill_down::HierarchySource;
use crate::services::fallback;
use crate::services::validation::ValidationError;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Backend,
    Fallback,
}

/// A payload and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    pub fn backend(data: T) -> Self {
        Self {
            data,
            source: DataSource::Backend,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            data,
            source: DataSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }
}

/// Replaces a failed backend result with static content of the same shape.
pub fn or_fallback<T>(
    what: &str,
    result: Result<T, ApiError>,
    fallback: impl FnOnce() -> T,
) -> Sourced<T> {
    match result {
        Ok(data) => Sourced::backend(data),
        Err(err) => {
            log::warn!("{} unavailable, using fallback data: {}", what, err);
            Sourced::fallback(fallback())
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub results: SearchResults,
    pub notice: Notice,
    pub source: DataSource,
}

impl SearchOutcome {
    fn found(results: SearchResults, provider: &str) -> Self {
        let notice = Notice::success(format!(
            "Found {} {} options! ({})",
            results.len(),
            noun(results.kind()),
            provider
        ));
        Self {
            results,
            notice,
            source: DataSource::Backend,
        }
    }

    fn mock_after_empty(kind: SearchKind) -> Self {
        let results = fallback::mock_results(kind);
        let notice = Notice::info(format!(
            "Found {} {} options! (mock data)",
            results.len(),
            noun(kind)
        ));
        Self {
            results,
            notice,
            source: DataSource::Fallback,
        }
    }

    fn mock_after_failure(kind: SearchKind, err: &ApiError) -> Self {
        log::warn!("{} search failed, using mock data: {}", kind, err);
        Self {
            results: fallback::mock_results(kind),
            notice: Notice::warning("Search failed. Using mock data..."),
            source: DataSource::Fallback,
        }
    }
}

fn noun(kind: SearchKind) -> &'static str {
    match kind {
        SearchKind::Flights => "flight",
        SearchKind::Hotels => "hotel",
        other => other.as_str(),
    }
}

/// LightX failures that deserve a clearer explanation.
pub fn lightx_message(raw: &str) -> String {
    if raw.contains("No face detected") {
        "No face detected in the image. Please upload a clear photo with a visible human face."
            .to_string()
    } else if raw.contains("LightX AI couldn't process") {
        "LightX AI couldn't process this image. Please try with a clearer human portrait photo."
            .to_string()
    } else if raw.contains("LightX AI works best") {
        "LightX AI works best with human portraits. Please upload a photo with a clear face."
            .to_string()
    } else {
        raw.to_string()
    }
}

/// Browser-renderable copy of an upload, used when the backend is offline.
pub fn data_url(file: &UploadedFile) -> String {
    format!(
        "data:{};base64,{}",
        file.content_type,
        STANDARD.encode(&file.bytes)
    )
}

#[derive(Clone)]
pub struct TravelService {
    api: ApiClient,
}

impl TravelService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub async fn check_health(&self) -> bool {
        match self.api.health().await {
            Ok(()) => true,
            Err(err) => {
                log::info!("Backend health check failed: {}", err);
                false
            }
        }
    }

    pub async fn destinations(&self) -> Sourced<Vec<Destination>> {
        let result = self.api.destinations().await.map(|payload| {
            let (data, source) = payload.into_parts();
            if let Some(source) = source {
                log::info!("Loaded {} destinations from {}", data.len(), source);
            }
            data.into_iter().map(Destination::enriched).collect()
        });
        or_fallback("Destinations", result, fallback::mock_destinations)
    }

    pub async fn continents(&self) -> Sourced<Vec<Continent>> {
        or_fallback("Continents", self.api.continents().await, fallback::continents)
    }

    /// Options for the destinations page filter.
    pub async fn continent_filters(&self) -> Sourced<Vec<Continent>> {
        or_fallback(
            "Continent filters",
            self.api.continents().await,
            fallback::continent_filters,
        )
    }

    pub fn countries_by_continent(&self, continent: &str) -> Vec<Country> {
        fallback::countries_by_continent(continent)
    }

    pub fn cities_by_country(&self, country: &str) -> Vec<City> {
        fallback::cities_by_country(country)
    }

    pub fn areas_by_city(&self, city: &str) -> Vec<Area> {
        fallback::areas_by_city(city)
    }

    /// Criteria filtering is not offered by the backend.
    pub fn filter_destinations(&self, criteria: &serde_json::Value) -> Vec<Destination> {
        log::debug!("Destination filter requested with {}", criteria);
        Vec::new()
    }

    pub async fn generate_itinerary(
        &self,
        destination_id: &str,
        preferences: &TravelPreferences,
    ) -> Result<Itinerary, ApiError> {
        self.api
            .generate_itinerary(destination_id, preferences)
            .await
            .map_err(|err| {
                log::warn!("Itinerary for {} failed: {}", destination_id, err);
                err
            })
    }

    pub fn generate_destination_image(&self, destination_id: &str) -> DestinationImage {
        let query = format!("{} travel", destination_id);
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        DestinationImage {
            url: format!("https://source.unsplash.com/800x600/?{}", encoded),
            prompt: format!("Travel photo of {}", destination_id),
        }
    }

    pub async fn personalized_recommendations(
        &self,
        preferences: &TravelPreferences,
    ) -> Result<Recommendations, ApiError> {
        self.api.personalized_recommendations(preferences).await
    }

    pub async fn detailed_itinerary(
        &self,
        request: &DetailedItineraryRequest,
    ) -> Result<DetailedItinerary, ApiError> {
        self.api.detailed_itinerary(request).await
    }

    /// Runs one search tab. Only a hotel search with missing fields is refused;
    /// every backend problem turns into that tab's mock list.
    pub async fn search(
        &self,
        kind: SearchKind,
        form: &SearchForm,
    ) -> Result<SearchOutcome, ValidationError> {
        let outcome = match kind {
            SearchKind::Flights => {
                let request = FlightSearchRequest::from_form(form);
                log::info!(
                    "Searching flights {} -> {} on {}",
                    request.origin,
                    request.destination,
                    request.departure_date
                );
                match self.api.search_flights(&request).await {
                    Ok(response) if !response.flights.is_empty() => SearchOutcome::found(
                        SearchResults::Flights(response.flights),
                        response.provider.as_deref().unwrap_or("API"),
                    ),
                    Ok(_) => SearchOutcome::mock_after_empty(kind),
                    Err(err) => SearchOutcome::mock_after_failure(kind, &err),
                }
            }
            SearchKind::Hotels => {
                let request = HotelSearchRequest::from_form(form)?;
                match self.api.search_hotels(&request).await {
                    Ok(response) if !response.hotels.is_empty() => SearchOutcome::found(
                        SearchResults::Hotels(response.hotels),
                        response.provider.as_deref().unwrap_or("Amadeus API"),
                    ),
                    Ok(_) => SearchOutcome::mock_after_empty(kind),
                    Err(err) => SearchOutcome::mock_after_failure(kind, &err),
                }
            }
            _ => {
                let request = BookingSearchRequest::from_form(kind, form);
                let result = self
                    .api
                    .search_bookings(&request)
                    .await
                    .and_then(|response| {
                        let provider = response.provider.unwrap_or_else(|| "API".to_string());
                        SearchResults::from_values(kind, response.results)
                            .map(|results| (results, provider))
                            .map_err(|e| ApiError::Decode(e.to_string()))
                    });
                match result {
                    Ok((results, provider)) if !results.is_empty() => {
                        SearchOutcome::found(results, &provider)
                    }
                    Ok(_) => SearchOutcome::mock_after_empty(kind),
                    Err(err) => SearchOutcome::mock_after_failure(kind, &err),
                }
            }
        };
        Ok(outcome)
    }

    pub async fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation, ApiError> {
        let confirmation = self.api.book(request).await?;
        log::info!(
            "Booked {} {} as {}",
            request.booking_type,
            request.item_id,
            confirmation.booking_id
        );
        Ok(confirmation)
    }

    /// Uploads through the backend when it is up, otherwise keeps the photo
    /// locally as a data URL.
    pub async fn upload_photo(&self, file: &UploadedFile) -> Result<Sourced<String>, ApiError> {
        if !self.check_health().await {
            log::info!("Backend offline, keeping {} in demo mode", file.file_name);
            return Ok(Sourced::fallback(data_url(file)));
        }
        self.api.upload_photo(file).await.map(Sourced::backend)
    }

    pub async fn generate_photo_app_image(
        &self,
        selfie: &UploadedFile,
        prompt: &str,
    ) -> Result<Vec<String>, ApiError> {
        self.api.generate_photo_app_image(selfie, prompt).await
    }

    pub async fn generate_text_to_image(
        &self,
        request: &TextToImageRequest,
    ) -> Result<TextToImageResponse, ApiError> {
        self.api.generate_text_to_image(request).await
    }

    pub async fn generate_lightx_image(
        &self,
        prompt: &str,
        image: &UploadedFile,
    ) -> Result<Vec<GeneratedImage>, ApiError> {
        let request = LightXRequest {
            prompt: prompt.to_string(),
            image: STANDARD.encode(&image.bytes),
        };
        self.api
            .generate_lightx_image(&request)
            .await
            .map_err(|err| match err {
                ApiError::Rejected(message) => ApiError::Rejected(lightx_message(&message)),
                ApiError::Status { status, detail } => ApiError::Status {
                    status,
                    detail: lightx_message(&detail),
                },
                other => other,
            })
    }

    pub async fn generate_visualization(
        &self,
        photo_url: &str,
        destination_id: Option<&str>,
    ) -> Result<VisualizationResponse, ApiError> {
        let request = VisualizationRequest {
            user_photo_url: photo_url.to_string(),
            destination_id: destination_id.map(str::to_string),
            prompt: None,
        };
        self.api.generate_visualization(&request).await
    }
}

impl HierarchySource for TravelService {
    async fn countries(&self, continent: &str) -> Vec<Country> {
        self.countries_by_continent(continent)
    }

    async fn cities(&self, country: &str) -> Vec<City> {
        self.cities_by_country(country)
    }

    async fn areas(&self, city: &str) -> Vec<Area> {
        self.areas_by_city(city)
    }
}
