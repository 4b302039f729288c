use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use super::PriceValue;

#[serde_as]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Activity {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub rating: Option<f32>,
    #[serde(default)]
    pub price: Option<PriceValue>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Packages list what they cover under either `inclusions` or `includes`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Package {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub price: Option<PriceValue>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub inclusions: Option<Vec<String>>,
    #[serde(default)]
    pub includes: Option<Vec<String>>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Package {
    pub fn covered(&self) -> Option<&[String]> {
        self.inclusions
            .as_deref()
            .or(self.includes.as_deref())
    }
}

#[serde_as]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Agent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub rating: Option<f32>,
    #[serde(default)]
    pub clients: Option<u32>,
    #[serde(default)]
    pub experience: Option<u32>,
}
