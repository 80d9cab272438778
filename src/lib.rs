// ============================================================================
// CARE PORTAL - Health portal front-end (Rust + Yew, MVVM)
// ============================================================================
// - Views: Yew function components, no business logic
// - ViewModels: form lifecycle + navigation decisions
// - Services: REST calls and the redirection policy
// - Stores: session persistence
// - State: observable values the views subscribe to
// ============================================================================

pub mod app;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;
pub mod views;

use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

/// Mount the application on `<body>`
pub fn run() {
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 Care Portal starting ({}, api: {})",
        CONFIG.environment,
        CONFIG.api_base_url
    );

    yew::Renderer::<App>::new().render();
}
