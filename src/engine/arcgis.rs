//! ArcGIS API for JavaScript, reached through the global `esriLoader`.

use js_sys::{Array, Function, Object, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlElement;

use super::{EngineModule, MapEngine};
use crate::descriptor::{LayerDescriptor, MapDescriptor, ViewDescriptor, WidgetDescriptor};
use crate::error::EngineError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = esriLoader, js_name = loadModules)]
    fn esri_load_modules(modules: &Array) -> Result<Promise, JsValue>;
}

pub struct ArcgisModules {
    ctors: Vec<(EngineModule, Function)>,
}

impl ArcgisModules {
    fn ctor(&self, module: EngineModule) -> Result<&Function, EngineError> {
        self.ctors
            .iter()
            .find(|(m, _)| *m == module)
            .map(|(_, f)| f)
            .ok_or_else(|| EngineError::ModuleLoad(format!("{} was not loaded", module.path())))
    }
}

pub struct ArcgisMap {
    map: JsValue,
    layers: Vec<(String, JsValue)>,
}

pub struct ArcgisView {
    view: JsValue,
    layers: Vec<(String, JsValue)>,
}

#[derive(Default)]
pub struct ArcgisEngine;

fn describe(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn to_js<T: Serialize>(value: &T, what: &'static str) -> Result<JsValue, EngineError> {
    let raw = serde_json::to_string(value).map_err(|e| EngineError::construct(what, e.to_string()))?;
    js_sys::JSON::parse(&raw).map_err(|e| EngineError::construct(what, describe(&e)))
}

fn set(target: &Object, key: &str, value: &JsValue, what: &'static str) -> Result<(), EngineError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| EngineError::construct(what, describe(&e)))
}

fn construct(ctor: &Function, props: &JsValue, what: &'static str) -> Result<JsValue, EngineError> {
    Reflect::construct(ctor, &Array::of1(props))
        .map_err(|e| EngineError::construct(what, describe(&e)))
}

impl ArcgisEngine {
    fn feature_layer(
        &self,
        modules: &ArcgisModules,
        layer: &LayerDescriptor,
    ) -> Result<JsValue, EngineError> {
        let props = to_js(layer, "feature layer")?;
        construct(modules.ctor(EngineModule::FeatureLayer)?, &props, "feature layer")
    }

    fn add_to_ui(&self, view: &ArcgisView, widget: &JsValue, position: &str) -> Result<(), EngineError> {
        let ui = Reflect::get(&view.view, &JsValue::from_str("ui"))
            .map_err(|e| EngineError::construct("view ui", describe(&e)))?;
        let add: Function = Reflect::get(&ui, &JsValue::from_str("add"))
            .ok()
            .and_then(|f| f.dyn_into().ok())
            .ok_or_else(|| EngineError::construct("view ui", "ui.add is not a function"))?;
        add.call2(&ui, widget, &JsValue::from_str(position))
            .map(|_| ())
            .map_err(|e| EngineError::construct("view ui", describe(&e)))
    }
}

impl MapEngine for ArcgisEngine {
    type Modules = ArcgisModules;
    type Map = ArcgisMap;
    type View = ArcgisView;
    type Container = HtmlElement;

    async fn load_modules(&self, modules: &[EngineModule]) -> Result<ArcgisModules, EngineError> {
        let names: Array = modules.iter().map(|m| JsValue::from_str(m.path())).collect();
        let promise = esri_load_modules(&names).map_err(|e| EngineError::ModuleLoad(describe(&e)))?;
        let loaded = JsFuture::from(promise)
            .await
            .map_err(|e| EngineError::ModuleLoad(describe(&e)))?;
        let loaded: Array = loaded
            .dyn_into()
            .map_err(|_| EngineError::ModuleLoad("loader did not return an array".into()))?;
        let mut ctors = Vec::with_capacity(modules.len());
        for (i, module) in modules.iter().enumerate() {
            let ctor: Function = loaded.get(i as u32).dyn_into().map_err(|_| {
                EngineError::ModuleLoad(format!("{} is not callable", module.path()))
            })?;
            ctors.push((*module, ctor));
        }
        Ok(ArcgisModules { ctors })
    }

    fn create_map(&self, modules: &ArcgisModules, map: &MapDescriptor) -> Result<ArcgisMap, EngineError> {
        let mut layers = Vec::with_capacity(map.layers.len());
        let list = Array::new();
        for layer in &map.layers {
            let js = self.feature_layer(modules, layer)?;
            list.push(&js);
            layers.push((layer.id.clone(), js));
        }
        let props = Object::new();
        set(&props, "basemap", &JsValue::from_str(&map.basemap), "map")?;
        set(&props, "layers", &list, "map")?;
        let js = construct(modules.ctor(EngineModule::Map)?, &props, "map")?;
        Ok(ArcgisMap { map: js, layers })
    }

    fn create_view(
        &self,
        modules: &ArcgisModules,
        map: ArcgisMap,
        view: &ViewDescriptor,
        container: &HtmlElement,
    ) -> Result<ArcgisView, EngineError> {
        let props = Object::new();
        set(&props, "container", container, "map view")?;
        set(&props, "center", &to_js(&view.center, "map view")?, "map view")?;
        set(&props, "zoom", &JsValue::from_f64(view.zoom), "map view")?;
        set(&props, "map", &map.map, "map view")?;
        let js = construct(modules.ctor(EngineModule::MapView)?, &props, "map view")?;
        Ok(ArcgisView {
            view: js,
            layers: map.layers,
        })
    }

    fn add_widget(
        &self,
        modules: &ArcgisModules,
        view: &ArcgisView,
        widget: &WidgetDescriptor,
    ) -> Result<(), EngineError> {
        let props = Object::new();
        set(&props, "view", &view.view, "widget")?;
        let js = match widget {
            WidgetDescriptor::Legend { layer_infos, .. } => {
                let infos = Array::new();
                for info in layer_infos {
                    // Reuse the instance on the map when there is one.
                    let layer = match view.layers.iter().find(|(id, _)| *id == info.layer.id) {
                        Some((_, js)) => js.clone(),
                        None => self.feature_layer(modules, &info.layer)?,
                    };
                    let entry = Object::new();
                    set(&entry, "layer", &layer, "legend")?;
                    set(&entry, "title", &JsValue::from_str(&info.title), "legend")?;
                    infos.push(&entry);
                }
                set(&props, "layerInfos", &infos, "legend")?;
                construct(modules.ctor(EngineModule::Legend)?, &props, "legend")?
            }
            WidgetDescriptor::BasemapToggle { next_basemap, .. } => {
                set(&props, "nextBasemap", &JsValue::from_str(next_basemap), "basemap toggle")?;
                construct(modules.ctor(EngineModule::BasemapToggle)?, &props, "basemap toggle")?
            }
        };
        self.add_to_ui(view, &js, widget.position().as_str())
    }

    async fn when_ready(&self, view: &ArcgisView) -> Result<bool, EngineError> {
        let when: Function = Reflect::get(&view.view, &JsValue::from_str("when"))
            .ok()
            .and_then(|f| f.dyn_into().ok())
            .ok_or_else(|| EngineError::Ready("view.when is not a function".into()))?;
        let thenable = when
            .call0(&view.view)
            .map_err(|e| EngineError::Ready(describe(&e)))?;
        JsFuture::from(Promise::resolve(&thenable))
            .await
            .map_err(|e| EngineError::Ready(describe(&e)))?;
        let ready = Reflect::get(&view.view, &JsValue::from_str("ready"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        Ok(ready)
    }

    fn detach(&self, view: &ArcgisView) {
        if let Err(e) = Reflect::set(&view.view, &JsValue::from_str("container"), &JsValue::NULL) {
            log::warn!("failed to detach map view: {}", describe(&e));
        }
    }
}
