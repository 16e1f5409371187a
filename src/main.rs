mod components;
mod descriptor;
mod engine;
mod error;
#[cfg(test)]
mod log_capture;
mod model;
mod state;

use components::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("starting city map");
    yew::Renderer::<App>::new().render();
}
