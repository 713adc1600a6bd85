use yew::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod geolocation;
pub mod settings;

use components::dashboard::Dashboard;
use components::layout::layout::Layout;

const PAGE_TITLE: &str = "उत्तर प्रदेश MGNREGA डैशबोर्ड";

#[function_component(App)]
pub fn app() -> Html {
    let settings = settings::get_settings();

    html! {
        <Layout title={PAGE_TITLE} api_base={settings.api_base}>
            <Dashboard />
        </Layout>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== MGNREGA Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
