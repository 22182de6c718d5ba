//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::api::{AssistantsApi, HttpAssistantsApi, HttpConfig};
use crate::storage::settings::{load_settings, AppSettings};
use crate::ui::Layout;
use dioxus::prelude::*;
use std::sync::Arc;

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn AssistantsApi>,
    pub settings: Signal<AppSettings>,
}

impl AppState {
    pub fn new() -> Self {
        let mut settings = load_settings();
        let mut config = HttpConfig::from_settings(&settings);
        if let Err(e) = config.check() {
            tracing::error!("{}, falling back to the default backend URL", e);
            settings.api_base_url = AppSettings::default().api_base_url;
            config = HttpConfig::from_settings(&settings);
        }
        tracing::info!("AppState initialized (backend: {})", settings.api_base_url);

        Self {
            api: Arc::new(HttpAssistantsApi::new(config)),
            settings: Signal::new(settings),
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        Layout {}
    }
}
