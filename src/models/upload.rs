use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Last successful upload, offered again for a day.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UploadRecord {
    #[serde(rename = "photoUrl")]
    pub photo_url: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "fileName")]
    pub file_name: String,
}

impl UploadRecord {
    pub fn is_recent(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.timestamp) < Duration::hours(24)
    }
}

/// A file read out of a multipart body.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub storage: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TextToImageForm {
    pub prompt: Option<String>,
    pub style: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TextToImageRequest {
    pub prompt: String,
    pub style: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TextToImageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LightXForm {
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LightXRequest {
    pub prompt: String,
    pub image: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GeneratedImage {
    pub url: String,
    #[serde(default)]
    pub provider: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LightXResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub images: Vec<GeneratedImage>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PhotoAppResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct VisualizationRequest {
    pub user_photo_url: String,
    pub destination_id: Option<String>,
    pub prompt: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct VisualizationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub visualization_url: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DestinationImage {
    pub url: String,
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_window() {
        let now = Utc::now();
        let record = UploadRecord {
            photo_url: "https://cdn.example.com/me.jpg".to_string(),
            timestamp: now - Duration::hours(23),
            file_name: "me.jpg".to_string(),
        };
        assert!(record.is_recent(now));

        let stale = UploadRecord {
            timestamp: now - Duration::hours(24),
            ..record
        };
        assert!(!stale.is_recent(now));
    }

    #[test]
    fn test_record_wire_names() {
        let record: UploadRecord = serde_json::from_str(
            r#"{"photoUrl":"u","timestamp":"2024-06-15T10:00:00Z","fileName":"a.png"}"#,
        )
        .unwrap();
        assert_eq!(record.file_name, "a.png");
    }
}
