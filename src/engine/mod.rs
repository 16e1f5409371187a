//! The mapping engine as an injected capability.
//!
//! Initialization only sequences these calls and hands over descriptors; all
//! rendering, hit-testing and feature fetching stays on the engine's side.

pub mod arcgis;
#[cfg(test)]
pub mod fake;

use crate::descriptor::{MapDescriptor, ViewDescriptor, WidgetDescriptor};
use crate::error::EngineError;

pub use arcgis::ArcgisEngine;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineModule {
    Map,
    MapView,
    FeatureLayer,
    Request,
    Legend,
    BasemapToggle,
}

impl EngineModule {
    pub fn path(self) -> &'static str {
        match self {
            EngineModule::Map => "esri/Map",
            EngineModule::MapView => "esri/views/MapView",
            EngineModule::FeatureLayer => "esri/layers/FeatureLayer",
            EngineModule::Request => "esri/request",
            EngineModule::Legend => "esri/widgets/Legend",
            EngineModule::BasemapToggle => "esri/widgets/BasemapToggle",
        }
    }
}

/// Loaded together as one batch before anything is built.
pub const REQUIRED_MODULES: [EngineModule; 6] = [
    EngineModule::Map,
    EngineModule::MapView,
    EngineModule::FeatureLayer,
    EngineModule::Request,
    EngineModule::Legend,
    EngineModule::BasemapToggle,
];

// Futures from these traits are polled on the single UI thread, so no Send bound.
#[allow(async_fn_in_trait)]
pub trait MapEngine {
    /// Handles to the constructors returned by `load_modules`.
    type Modules;
    type Map;
    type View;
    /// Host element a view is bound to.
    type Container;

    async fn load_modules(&self, modules: &[EngineModule]) -> Result<Self::Modules, EngineError>;

    fn create_map(
        &self,
        modules: &Self::Modules,
        map: &MapDescriptor,
    ) -> Result<Self::Map, EngineError>;

    fn create_view(
        &self,
        modules: &Self::Modules,
        map: Self::Map,
        view: &ViewDescriptor,
        container: &Self::Container,
    ) -> Result<Self::View, EngineError>;

    fn add_widget(
        &self,
        modules: &Self::Modules,
        view: &Self::View,
        widget: &WidgetDescriptor,
    ) -> Result<(), EngineError>;

    /// Resolves once the view reports ready; yields the view's `ready` flag.
    async fn when_ready(&self, view: &Self::View) -> Result<bool, EngineError>;

    /// Clears the view's container binding.
    fn detach(&self, view: &Self::View);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_batch_is_loaded_in_fixed_order() {
        let paths: Vec<_> = REQUIRED_MODULES.iter().map(|m| m.path()).collect();
        assert_eq!(
            paths,
            vec![
                "esri/Map",
                "esri/views/MapView",
                "esri/layers/FeatureLayer",
                "esri/request",
                "esri/widgets/Legend",
                "esri/widgets/BasemapToggle",
            ]
        );
    }
}
