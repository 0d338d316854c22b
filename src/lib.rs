use leptos::{SignalSet, mount_to_body, view};
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::AppConfig;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

pub mod macros;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;

/// Load configuration, install logging and mount the app
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::from_document() {
        Ok(Some(config)) => (config, None),
        Ok(None) => (AppConfig::default(), None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    domain::logging::init_logger(Box::new(ConsoleLogger::new(config.log_level)));
    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));

    if let Some(e) = config_error {
        get_logger().warn(
            LogComponent::Presentation("Initialize"),
            &format!("⚠️ {e}; using default configuration"),
        );
    }

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("🚀 Fund tracker starting, API at {}", config.api_base_url),
    );

    global_state::current_route().set(infrastructure::ui::location_route());
    infrastructure::ui::listen_for_history();

    mount_to_body(move || view! { <App config=config/> });
}
