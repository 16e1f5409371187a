//! View-state and settings models for the city map.
//! Nothing here is persisted; values live as long as the components holding them.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::error::ConfigError;

pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 24.0;

/// Basemap ids the engine ships with. Anything else is passed through with a warning.
pub const KNOWN_BASEMAPS: &[&str] = &[
    "streets",
    "satellite",
    "hybrid",
    "topo",
    "gray",
    "dark-gray",
    "oceans",
    "national-geographic",
    "terrain",
    "osm",
    "streets-vector",
    "topo-vector",
    "gray-vector",
    "dark-gray-vector",
    "streets-night-vector",
    "streets-navigation-vector",
    "streets-relief-vector",
];

/// Longitude/latitude pair, serialized as `[lon, lat]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

impl From<[f64; 2]> for LonLat {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<LonLat> for [f64; 2] {
    fn from(p: LonLat) -> Self {
        [p.lon, p.lat]
    }
}

/// Everything one map initialization needs to know.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    pub center: LonLat,
    pub zoom: f64,
    pub basemap: String,
    /// Include the cities layer in the layer list.
    pub show_city: bool,
    /// When set, a basemap toggle switching to this id is attached.
    pub next_basemap: Option<String>,
    /// Label city points with their names.
    pub label_cities: bool,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center: LonLat::new(0.1278, 51.5074),
            zoom: 2.0,
            basemap: "streets".to_string(),
            show_city: false,
            next_basemap: None,
            label_cities: false,
        }
    }
}

impl MapSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.zoom.is_finite() || !(MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom) {
            return Err(ConfigError::Zoom(self.zoom));
        }
        if !self.center.is_valid() {
            return Err(ConfigError::Center {
                lon: self.center.lon,
                lat: self.center.lat,
            });
        }
        if self.basemap.trim().is_empty() {
            return Err(ConfigError::EmptyBasemap);
        }
        if !KNOWN_BASEMAPS.contains(&self.basemap.as_str()) {
            log::warn!("basemap {:?} is not a known engine basemap", self.basemap);
        }
        Ok(())
    }
}

/// State owned by the root component.
#[derive(Clone, Debug, PartialEq)]
pub struct RootState {
    pub map_center: LonLat,
    pub basemap_type: String,
    pub map_zoom_level: f64,
    pub show_city: bool,
}

impl Default for RootState {
    fn default() -> Self {
        Self {
            map_center: LonLat::new(31.0, 31.0),
            basemap_type: "streets".to_string(),
            map_zoom_level: 3.0,
            show_city: false,
        }
    }
}

impl RootState {
    pub fn map_settings(&self) -> MapSettings {
        MapSettings {
            center: self.map_center,
            zoom: self.map_zoom_level,
            basemap: self.basemap_type.clone(),
            show_city: self.show_city,
            ..MapSettings::default()
        }
    }
}

pub enum RootAction {
    ToggleCity,
}

impl Reducible for RootState {
    type Action = RootAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            RootAction::ToggleCity => {
                new.show_city = !new.show_city;
                log::info!("show cities: {}", new.show_city);
            }
        }
        Rc::new(new)
    }
}
