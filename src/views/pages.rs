use serde::Serialize;

use crate::models::destination::{Continent, Destination};
use crate::models::upload::{DestinationImage, GeneratedImage, UploadRecord};
use crate::views::planner::RecommendationCard;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DestinationsView {
    pub summary: String,
    pub offline: bool,
    pub destinations: Vec<RecommendationCard>,
}

impl DestinationsView {
    pub fn new(shown: &[Destination], total: usize, offline: bool) -> Self {
        Self {
            summary: format!("Showing {} of {} destinations", shown.len(), total),
            offline,
            destinations: shown.iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ContinentOptions {
    pub selected: String,
    pub continents: Vec<Continent>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct UploadView {
    pub photo_url: String,
    pub file_name: String,
    pub demo: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RecentUploadView {
    pub photo_url: String,
    pub file_name: String,
    pub uploaded_at: String,
}

impl From<&UploadRecord> for RecentUploadView {
    fn from(record: &UploadRecord) -> Self {
        Self {
            photo_url: record.photo_url.clone(),
            file_name: record.file_name.clone(),
            uploaded_at: record.timestamp.format("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ImageTile {
    pub url: String,
    pub caption: String,
}

/// A gallery of generated images.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GalleryView {
    pub title: String,
    pub images: Vec<ImageTile>,
}

impl GalleryView {
    pub fn from_urls(title: &str, urls: &[String], caption: &str) -> Self {
        Self {
            title: title.to_string(),
            images: urls
                .iter()
                .map(|url| ImageTile {
                    url: url.clone(),
                    caption: caption.to_string(),
                })
                .collect(),
        }
    }

    pub fn from_generated(title: &str, images: &[GeneratedImage]) -> Self {
        Self {
            title: title.to_string(),
            images: images
                .iter()
                .map(|image| ImageTile {
                    url: image.url.clone(),
                    caption: image
                        .provider
                        .clone()
                        .unwrap_or_else(|| "LightX AI".to_string()),
                })
                .collect(),
        }
    }

    pub fn from_destination(image: &DestinationImage) -> Self {
        Self {
            title: "Destination Preview".to_string(),
            images: vec![ImageTile {
                url: image.url.clone(),
                caption: image.prompt.clone(),
            }],
        }
    }
}
