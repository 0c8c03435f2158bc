mod app;
mod connectivity;
mod logging;
mod render;
mod settings;

pub use app::run_app;
