use reqwest::{multipart, Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::booking::{BookingConfirmation, BookingRequest};
use crate::models::destination::{Continent, ContinentsPayload, DestinationsPayload};
use crate::models::preferences::{
    DetailedItinerary, DetailedItineraryRequest, DetailedItineraryResponse, Itinerary,
    ItineraryRequest, ItineraryResponse, Recommendations, RecommendationsResponse,
    TravelPreferences,
};
use crate::models::search::{
    BookingSearchRequest, BookingSearchResponse, FlightSearchRequest, FlightSearchResponse,
    HotelSearchRequest, HotelSearchResponse,
};
use crate::models::upload::{
    GeneratedImage, LightXRequest, LightXResponse, PhotoAppResponse, TextToImageRequest,
    TextToImageResponse, UploadResponse, UploadedFile, VisualizationRequest,
    VisualizationResponse,
};

/// Typed access to the travel backend. Every call is a single attempt.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.backend_timeout).build()?;
        Ok(Self {
            client,
            base: config.backend_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    /// Resolves image paths the backend hands out relative to its own host.
    pub fn absolute_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("data:") {
            return url.to_string();
        }
        let path = format!("/{}", url.trim_start_matches('/'));
        match self.base.join(&path) {
            Ok(joined) => joined.to_string(),
            Err(_) => url.to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        log::debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        decode(response).await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        log::debug!("POST {} (multipart)", url);
        let response = self.client.post(url).multipart(form).send().await?;
        decode(response).await
    }

    pub async fn health(&self) -> Result<(), ApiError> {
        let response = self.client.get(self.endpoint("health")?).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                detail: String::new(),
            })
        }
    }

    pub async fn destinations(&self) -> Result<DestinationsPayload, ApiError> {
        self.get_json("destinations").await
    }

    pub async fn continents(&self) -> Result<Vec<Continent>, ApiError> {
        let payload: ContinentsPayload = self.get_json("continents").await?;
        Ok(payload.into())
    }

    pub async fn generate_itinerary(
        &self,
        destination_id: &str,
        preferences: &TravelPreferences,
    ) -> Result<Itinerary, ApiError> {
        let request = ItineraryRequest {
            destination_id,
            preferences,
            prompt: "",
        };
        let response: ItineraryResponse = self.post_json("generate-itinerary", &request).await?;
        match response.itinerary {
            Some(itinerary) if response.success => Ok(itinerary),
            _ => Err(ApiError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "No itinerary returned".to_string()),
            )),
        }
    }

    pub async fn personalized_recommendations(
        &self,
        preferences: &TravelPreferences,
    ) -> Result<Recommendations, ApiError> {
        let response: RecommendationsResponse = self
            .post_json("generate-personalized-recommendations", preferences)
            .await?;
        match response.data {
            Some(data) if response.success => Ok(data),
            _ => Err(ApiError::Rejected(response.message.unwrap_or_else(|| {
                "Failed to generate recommendations".to_string()
            }))),
        }
    }

    pub async fn detailed_itinerary(
        &self,
        request: &DetailedItineraryRequest,
    ) -> Result<DetailedItinerary, ApiError> {
        let response: DetailedItineraryResponse = self
            .post_json("generate-detailed-itinerary", request)
            .await?;
        match response.data {
            Some(data) if response.success => Ok(data),
            _ => Err(ApiError::Rejected(
                "Failed to generate detailed itinerary".to_string(),
            )),
        }
    }

    pub async fn search_flights(
        &self,
        request: &FlightSearchRequest,
    ) -> Result<FlightSearchResponse, ApiError> {
        let response: FlightSearchResponse = self.post_json("search-flights", request).await?;
        if !response.success {
            return Err(ApiError::Rejected("Flight search failed".to_string()));
        }
        Ok(response)
    }

    pub async fn search_hotels(
        &self,
        request: &HotelSearchRequest,
    ) -> Result<HotelSearchResponse, ApiError> {
        let response: HotelSearchResponse = self.post_json("search-hotels", request).await?;
        if !response.success {
            return Err(ApiError::Rejected("Hotel search failed".to_string()));
        }
        Ok(response)
    }

    pub async fn search_bookings(
        &self,
        request: &BookingSearchRequest,
    ) -> Result<BookingSearchResponse, ApiError> {
        self.post_json("search-bookings", request).await
    }

    pub async fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation, ApiError> {
        let confirmation: BookingConfirmation = self.post_json("book", request).await?;
        if !confirmation.success {
            return Err(ApiError::Rejected(confirmation.message.unwrap_or_else(
                || "Booking failed. Please try again.".to_string(),
            )));
        }
        Ok(confirmation)
    }

    pub async fn upload_photo(&self, file: &UploadedFile) -> Result<String, ApiError> {
        let form = multipart::Form::new().part("file", file_part(file)?);
        let response: UploadResponse = self.post_multipart("upload-photo", form).await?;
        match response.photo_url {
            Some(url) if response.success => {
                log::info!(
                    "Uploaded {} to {}",
                    file.file_name,
                    response.storage.as_deref().unwrap_or("backend storage")
                );
                Ok(url)
            }
            _ => Err(ApiError::Rejected("Upload failed".to_string())),
        }
    }

    /// Returns the generated image URLs, already made absolute.
    pub async fn generate_photo_app_image(
        &self,
        selfie: &UploadedFile,
        prompt: &str,
    ) -> Result<Vec<String>, ApiError> {
        let form = multipart::Form::new()
            .part("selfie", file_part(selfie)?)
            .text("prompt", prompt.to_string());
        let response: PhotoAppResponse =
            self.post_multipart("generate-photo-app-image", form).await?;
        if !response.success || response.image_urls.is_empty() {
            return Err(ApiError::Rejected(
                response.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }
        Ok(response
            .image_urls
            .iter()
            .map(|url| self.absolute_url(url))
            .collect())
    }

    pub async fn generate_text_to_image(
        &self,
        request: &TextToImageRequest,
    ) -> Result<TextToImageResponse, ApiError> {
        let response: TextToImageResponse =
            self.post_json("generate-text-to-image", request).await?;
        if !response.success || response.image_url.is_none() {
            return Err(ApiError::Rejected(response.message.unwrap_or_else(|| {
                "Failed to generate image".to_string()
            })));
        }
        Ok(response)
    }

    pub async fn generate_lightx_image(
        &self,
        request: &LightXRequest,
    ) -> Result<Vec<GeneratedImage>, ApiError> {
        let response: LightXResponse = self.post_json("generate-lightx-image", request).await?;
        if !response.success || response.images.is_empty() {
            return Err(ApiError::Rejected(response.message.unwrap_or_else(|| {
                "Failed to enhance image".to_string()
            })));
        }
        Ok(response.images)
    }

    pub async fn generate_visualization(
        &self,
        request: &VisualizationRequest,
    ) -> Result<VisualizationResponse, ApiError> {
        let response: VisualizationResponse =
            self.post_json("generate-visualization", request).await?;
        if !response.success || response.visualization_url.is_none() {
            return Err(ApiError::Rejected(
                "Failed to generate visualization".to_string(),
            ));
        }
        Ok(response)
    }
}

fn file_part(file: &UploadedFile) -> Result<multipart::Part, ApiError> {
    Ok(multipart::Part::bytes(file.bytes.clone())
        .file_name(file.file_name.clone())
        .mime_str(&file.content_type)?)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            detail: error_detail(&body),
        });
    }

    serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Error text from a failed response body: `detail`, then `message`, then `error`.
fn error_detail(body: &[u8]) -> String {
    let value: serde_json::Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) => return String::new(),
    };
    ["detail", "message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .unwrap_or_default()
        .to_string()
}
