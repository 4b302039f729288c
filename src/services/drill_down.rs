//! Continent → country → city → area navigation for the planner.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::models::destination::{Area, City, Country, SelectedArea};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Continent,
    Country,
    City,
    Area,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Continent => "continent",
            Level::Country => "country",
            Level::City => "city",
            Level::Area => "area",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DrillDownError {
    #[error("Cannot choose a {requested} while browsing by {current}")]
    InvalidTransition { requested: Level, current: Level },
}

/// Where the next level's entries come from.
#[allow(async_fn_in_trait)]
pub trait HierarchySource {
    async fn countries(&self, continent: &str) -> Vec<Country>;
    async fn cities(&self, country: &str) -> Vec<City>;
    async fn areas(&self, city: &str) -> Vec<Area>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrillDown {
    level: Level,
    selected_continent: Option<String>,
    selected_country: Option<String>,
    selected_city: Option<String>,
    countries: Vec<Country>,
    cities: Vec<City>,
    areas: Vec<Area>,
}

impl Default for DrillDown {
    fn default() -> Self {
        Self {
            level: Level::Continent,
            selected_continent: None,
            selected_country: None,
            selected_city: None,
            countries: Vec::new(),
            cities: Vec::new(),
            areas: Vec::new(),
        }
    }
}

impl DrillDown {
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn selected_continent(&self) -> Option<&str> {
        self.selected_continent.as_deref()
    }

    pub fn selected_country(&self) -> Option<&str> {
        self.selected_country.as_deref()
    }

    pub fn selected_city(&self) -> Option<&str> {
        self.selected_city.as_deref()
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    fn expect_level(&self, expected: Level, requested: Level) -> Result<(), DrillDownError> {
        if self.level == expected {
            Ok(())
        } else {
            Err(DrillDownError::InvalidTransition {
                requested,
                current: self.level,
            })
        }
    }

    pub async fn select_continent<S: HierarchySource>(
        &mut self,
        source: &S,
        name: &str,
    ) -> Result<&[Country], DrillDownError> {
        self.expect_level(Level::Continent, Level::Continent)?;
        self.countries = source.countries(name).await;
        self.selected_continent = Some(name.to_string());
        self.level = Level::Country;
        log::debug!("Drill-down: {} has {} countries", name, self.countries.len());
        Ok(&self.countries)
    }

    pub async fn select_country<S: HierarchySource>(
        &mut self,
        source: &S,
        name: &str,
    ) -> Result<&[City], DrillDownError> {
        self.expect_level(Level::Country, Level::Country)?;
        self.cities = source.cities(name).await;
        self.selected_country = Some(name.to_string());
        self.level = Level::City;
        Ok(&self.cities)
    }

    pub async fn select_city<S: HierarchySource>(
        &mut self,
        source: &S,
        name: &str,
    ) -> Result<&[Area], DrillDownError> {
        self.expect_level(Level::City, Level::City)?;
        self.areas = source.areas(name).await;
        self.selected_city = Some(name.to_string());
        self.level = Level::Area;
        Ok(&self.areas)
    }

    /// Picks a leaf. Nothing is fetched and the level stays at `Area`.
    pub fn select_area(&self, name: &str) -> Result<SelectedArea, DrillDownError> {
        self.expect_level(Level::Area, Level::Area)?;
        Ok(SelectedArea {
            id: area_id(name),
            name: name.to_string(),
            city: self.selected_city.clone(),
            country: self.selected_country.clone(),
            continent: self.selected_continent.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// `"Eiffel Tower Area"` becomes `"eiffel-tower-area"`.
pub fn area_id(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
