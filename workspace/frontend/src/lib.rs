use yew::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;
pub mod storage;

use common::toast::ToastProvider;
use components::layout::layout::Layout;
use components::weather::WeatherDashboard;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <Layout title="Weather App">
                <WeatherDashboard />
            </Layout>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Skycast Weather App Starting ===");
    log::debug!("Weather API base URL: {}", settings.api_base_url);
    log::debug!("API key configured: {}", settings.has_api_key());
    log::debug!("Request timeout: {} ms", settings.request_timeout_ms);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
