//! Symbols and renderers, shaped like the engine's autocast JSON.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(String),
    Rgba([f64; 4]),
}

impl Color {
    pub fn named(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

/// Either a bare point size or a CSS length such as `"0.5px"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Length {
    Points(f64),
    Css(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub color: Color,
    pub width: Length,
}

impl Outline {
    /// Thin grey outline shared by the city markers.
    pub fn hairline() -> Self {
        Self {
            color: Color::Rgba([128.0, 128.0, 128.0, 0.5]),
            width: Length::Css("0.5px".to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerStyle {
    Triangle,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerSymbol {
    pub color: Color,
    pub size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<MarkerStyle>,
    pub outline: Outline,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillSymbol {
    pub color: Color,
    pub outline: Outline,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: f64,
    pub weight: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSymbol {
    pub color: Color,
    pub font: Font,
    pub halo_size: f64,
    pub halo_color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Symbol {
    SimpleMarker(MarkerSymbol),
    SimpleFill(FillSymbol),
    Text(TextSymbol),
}

/// One population band (or any numeric band) of a class-breaks renderer.
/// Both bounds are inclusive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassBreak {
    pub min_value: f64,
    pub max_value: f64,
    pub symbol: Symbol,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassBreaksRenderer {
    pub field: String,
    pub class_break_infos: Vec<ClassBreak>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimpleRenderer {
    pub symbol: Symbol,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Renderer {
    Simple(SimpleRenderer),
    ClassBreaks(ClassBreaksRenderer),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopupTemplate {
    pub title: String,
    pub content: String,
}

impl PopupTemplate {
    /// Popup listing each field as `NAME: {NAME}`.
    pub fn field_list(title: &str, fields: &[&str]) -> Self {
        let items: String = fields
            .iter()
            .map(|f| format!("<li>{f}: {{{f}}}</li>"))
            .collect();
        Self {
            title: title.to_string(),
            content: format!("<ul id=\"popup\">{items}</ul>"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelExpression {
    pub expression: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelClass {
    pub label_expression_info: LabelExpression,
    pub label_placement: String,
    pub symbol: Symbol,
}
