use leptos::{mount_to_body, view};
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod components;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;

/// Wires the browser logger and time source, then mounts the app.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(console_logger));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider));

    get_logger().info(LogComponent::Presentation("Initialize"), "bot setup front-end starting");

    mount_to_body(|| view! { <App/> });
}
