//! The two feature layers the map knows about.

use serde::{Deserialize, Serialize};

use super::renderer::{
    ClassBreak, ClassBreaksRenderer, Color, FillSymbol, Font, LabelClass, LabelExpression,
    Length, MarkerStyle, MarkerSymbol, Outline, PopupTemplate, Renderer, SimpleRenderer, Symbol,
    TextSymbol,
};

pub const COUNTRIES_LAYER_ID: &str = "countries";
pub const CITIES_LAYER_ID: &str = "cities";

pub const COUNTRIES_URL: &str =
    "https://services.arcgis.com/V6ZHFr6zdgNZuVG0/ArcGIS/rest/services/World_borders/FeatureServer/0";
pub const CITIES_URL: &str =
    "https://services.arcgis.com/V6ZHFr6zdgNZuVG0/ArcGIS/rest/services/world_cities/FeatureServer/0";

/// Fields shown in the city popup, in display order.
pub const CITY_POPUP_FIELDS: [&str; 6] = [
    "CITY_NAME",
    "ADMIN_NAME",
    "CNTRY_NAME",
    "STATUS",
    "POP",
    "POP_CLASS",
];

/// Population at which a city moves into the large band.
pub const MILLION: f64 = 1_000_000.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerDescriptor {
    pub id: String,
    pub title: String,
    pub url: String,
    pub renderer: Renderer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popup_template: Option<PopupTemplate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_expression: Option<String>,
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labeling_info: Vec<LabelClass>,
}

/// World borders drawn as a translucent orange fill.
///
/// The definition expression matches no country and the layer starts hidden,
/// so nothing from it is drawn.
pub fn countries_layer() -> LayerDescriptor {
    LayerDescriptor {
        id: COUNTRIES_LAYER_ID.to_string(),
        title: "Countries".to_string(),
        url: COUNTRIES_URL.to_string(),
        renderer: Renderer::Simple(SimpleRenderer {
            symbol: Symbol::SimpleFill(FillSymbol {
                color: Color::Rgba([255.0, 128.0, 0.0, 0.2]),
                outline: Outline {
                    color: Color::named("red"),
                    width: Length::Points(1.0),
                },
            }),
        }),
        popup_template: None,
        definition_expression: Some("NAME = 'null'".to_string()),
        visible: false,
        labeling_info: Vec::new(),
    }
}

pub fn city_renderer() -> ClassBreaksRenderer {
    ClassBreaksRenderer {
        field: "pop".to_string(),
        class_break_infos: vec![
            ClassBreak {
                min_value: -1000.0,
                max_value: MILLION - 1.0,
                symbol: Symbol::SimpleMarker(MarkerSymbol {
                    color: Color::named("blue"),
                    size: 5.0,
                    style: None,
                    outline: Outline::hairline(),
                }),
                label: "Less than 1,000,000".to_string(),
            },
            ClassBreak {
                min_value: MILLION,
                max_value: 100_000_000.0,
                symbol: Symbol::SimpleMarker(MarkerSymbol {
                    color: Color::named("red"),
                    size: 8.0,
                    style: Some(MarkerStyle::Triangle),
                    outline: Outline::hairline(),
                }),
                label: "More than or equal 1,000,000".to_string(),
            },
        ],
    }
}

pub fn city_label_class() -> LabelClass {
    LabelClass {
        label_expression_info: LabelExpression {
            expression: "$feature.CITY_NAME".to_string(),
        },
        label_placement: "center-right".to_string(),
        symbol: Symbol::Text(TextSymbol {
            color: Color::named("black"),
            font: Font {
                size: 8.0,
                weight: "bold".to_string(),
            },
            halo_size: 1.0,
            halo_color: Color::named("white"),
        }),
    }
}

/// World cities as points, split into two population bands.
pub fn cities_layer(labelled: bool) -> LayerDescriptor {
    LayerDescriptor {
        id: CITIES_LAYER_ID.to_string(),
        title: "Cities".to_string(),
        url: CITIES_URL.to_string(),
        renderer: Renderer::ClassBreaks(city_renderer()),
        popup_template: Some(PopupTemplate::field_list(
            "{CITY_NAME} city.",
            &CITY_POPUP_FIELDS,
        )),
        definition_expression: None,
        visible: true,
        labeling_info: if labelled {
            vec![city_label_class()]
        } else {
            Vec::new()
        },
    }
}

/// Countries always come first; cities are appended only when shown.
pub fn layer_list(show_city: bool, labelled: bool) -> Vec<LayerDescriptor> {
    let mut layers = vec![countries_layer()];
    if show_city {
        layers.push(cities_layer(labelled));
    }
    layers
}
