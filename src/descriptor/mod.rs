//! Declarative description of a map: what the engine should build, not how.

pub mod layers;
pub mod renderer;

use serde::{Deserialize, Serialize};

use crate::model::{LonLat, MapSettings};
pub use layers::{LayerDescriptor, cities_layer, layer_list};

#[derive(Clone, Debug, PartialEq)]
pub struct MapDescriptor {
    pub basemap: String,
    /// Draw order, bottom first.
    pub layers: Vec<LayerDescriptor>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewDescriptor {
    pub center: LonLat,
    pub zoom: f64,
}

/// Corner of the view UI a widget is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiPosition {
    BottomLeft,
    BottomRight,
}

impl UiPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            UiPosition::BottomLeft => "bottom-left",
            UiPosition::BottomRight => "bottom-right",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayerInfo {
    /// The legend may describe a layer that is not on the map.
    pub layer: LayerDescriptor,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum WidgetDescriptor {
    Legend {
        layer_infos: Vec<LegendLayerInfo>,
        position: UiPosition,
    },
    BasemapToggle {
        next_basemap: String,
        position: UiPosition,
    },
}

impl WidgetDescriptor {
    pub fn position(&self) -> UiPosition {
        match self {
            WidgetDescriptor::Legend { position, .. }
            | WidgetDescriptor::BasemapToggle { position, .. } => *position,
        }
    }
}

/// Everything one initialization hands to the engine, in build order.
#[derive(Clone, Debug, PartialEq)]
pub struct MapPlan {
    pub map: MapDescriptor,
    pub view: ViewDescriptor,
    pub widgets: Vec<WidgetDescriptor>,
}

pub fn plan(settings: &MapSettings) -> MapPlan {
    let map = MapDescriptor {
        basemap: settings.basemap.clone(),
        layers: layer_list(settings.show_city, settings.label_cities),
    };
    let view = ViewDescriptor {
        center: settings.center,
        zoom: settings.zoom,
    };
    let mut widgets = vec![WidgetDescriptor::Legend {
        layer_infos: vec![LegendLayerInfo {
            layer: cities_layer(settings.label_cities),
            title: "Cities".to_string(),
        }],
        position: UiPosition::BottomRight,
    }];
    if let Some(next) = &settings.next_basemap {
        widgets.push(WidgetDescriptor::BasemapToggle {
            next_basemap: next.clone(),
            position: UiPosition::BottomLeft,
        });
    }
    MapPlan { map, view, widgets }
}
