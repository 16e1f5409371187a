use thiserror::Error;

/// Rejected map settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("zoom level {0} is outside 0..=24")]
    Zoom(f64),
    #[error("center ({lon}, {lat}) is not a valid longitude/latitude pair")]
    Center { lon: f64, lat: f64 },
    #[error("basemap identifier is empty")]
    EmptyBasemap,
}

/// Failures reported by the mapping engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("failed to load engine modules: {0}")]
    ModuleLoad(String),
    #[error("failed to construct {what}: {message}")]
    Construct { what: &'static str, message: String },
    #[error("view never became ready: {0}")]
    Ready(String),
    #[error("map container element is not mounted")]
    MissingContainer,
}

impl EngineError {
    pub fn construct(what: &'static str, message: impl Into<String>) -> Self {
        EngineError::Construct {
            what,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InitError {
    #[error("invalid map settings: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}
