mod api;
mod app;
mod components;
mod hooks;
mod pages;
pub mod storage;
pub mod utils;

pub use app::App;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting portal v{}", VERSION);
    yew::Renderer::<App>::new().render();
}
