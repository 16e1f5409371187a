pub mod add_address;
pub mod app;
pub mod map_view;

pub use app::App;
