use super::{add_address::AddAddress, map_view::MapView};
use crate::model::{RootAction, RootState};
use yew::prelude::*;

fn log_map_loaded(status: bool) {
    log::info!("The map loaded: {status}");
}

#[function_component(App)]
pub fn app() -> Html {
    let root = use_reducer(RootState::default);

    let on_select_city = {
        let root = root.clone();
        Callback::from(move |_| root.dispatch(RootAction::ToggleCity))
    };
    let map_loaded = Callback::from(log_map_loaded);
    let settings = root.map_settings();

    html! {
        <div style="display:flex; flex-direction:column; height:100vh; background:#0d1117; color:#c9d1d9;">
            <div id="top-bar" style="display:flex; align-items:center; gap:12px; padding:8px 16px; background:#161b22; border-bottom:1px solid #30363d;">
                <span style="font-size:18px; font-weight:600; flex:1;">{"City Map"}</span>
                <button onclick={on_select_city}>
                    { if root.show_city { "Hide cities" } else { "Show cities" } }
                </button>
                <AddAddress />
            </div>
            <MapView
                center={settings.center}
                zoom={settings.zoom}
                basemap={settings.basemap}
                show_city={settings.show_city}
                on_loaded={map_loaded}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::log_map_loaded;
    use crate::log_capture;
    use log::Level;

    #[test]
    fn loaded_handler_logs_status() {
        log_capture::start();
        log_map_loaded(true);
        log_map_loaded(false);
        assert_eq!(
            log_capture::at(Level::Info),
            vec!["The map loaded: true", "The map loaded: false"]
        );
    }
}
