use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::engine::ArcgisEngine;
use crate::error::EngineError;
use crate::model::{LonLat, MapSettings};
use crate::state::{MapSession, reconfigure};

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    #[prop_or(2.0)]
    pub zoom: f64,
    #[prop_or(LonLat::new(0.1278, 51.5074))]
    pub center: LonLat,
    #[prop_or(AttrValue::Static("streets"))]
    pub basemap: AttrValue,
    #[prop_or_default]
    pub show_city: bool,
    #[prop_or_default]
    pub next_basemap: Option<AttrValue>,
    #[prop_or_default]
    pub label_cities: bool,
    /// Fired once per completed initialization with the view's readiness.
    #[prop_or_default]
    pub on_loaded: Callback<bool>,
}

impl MapViewProps {
    fn settings(&self) -> MapSettings {
        MapSettings {
            center: self.center,
            zoom: self.zoom,
            basemap: self.basemap.to_string(),
            show_city: self.show_city,
            next_basemap: self.next_basemap.as_ref().map(|b| b.to_string()),
            label_cities: self.label_cities,
        }
    }
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let container_ref = use_node_ref();
    let session = use_mut_ref(|| MapSession::new(Rc::new(ArcgisEngine)));
    let loaded = use_state(|| false);

    // Unmount only: re-initializations replace the view themselves.
    {
        let session = session.clone();
        use_effect_with((), move |_| move || session.borrow_mut().destroy());
    }
    // Any input change rebuilds the whole map.
    {
        let session = session.clone();
        let container_ref = container_ref.clone();
        let loaded = loaded.clone();
        let on_loaded = props.on_loaded.clone();
        use_effect_with(props.settings(), move |settings| {
            match container_ref.cast::<HtmlElement>() {
                Some(container) => {
                    let settings = settings.clone();
                    spawn_local(async move {
                        match reconfigure(&session, &settings, &container).await {
                            Some(ready) => {
                                loaded.set(ready);
                                on_loaded.emit(ready);
                            }
                            None => {
                                let s = session.borrow();
                                loaded.set(s.view().is_some() && s.is_loaded());
                            }
                        }
                    });
                }
                None => log::error!("map initialization failed: {}", EngineError::MissingContainer),
            }
            || ()
        });
    }

    html! {
        <div style="position:relative; flex:1; min-height:0;">
            <div ref={container_ref} style="position:absolute; inset:0; padding:0; margin:0;"></div>
            if !*loaded {
                <div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); background:rgba(22,27,34,0.85); color:#c9d1d9; border:1px solid #30363d; border-radius:8px; padding:4px 10px; font-size:12px; pointer-events:none;">
                    {"Loading map…"}
                </div>
            }
        </div>
    }
}
