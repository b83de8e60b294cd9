//! Activity signup client - Yew WASM frontend
//!
//! Lists the school's extracurricular activities and lets students sign up
//! for or leave them through the activities REST API.

pub mod api;
mod app;
pub mod client;
mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod markup;
pub mod model;
mod page;
pub mod surface;

pub use app::{App, AppProps};

use config::ClientConfig;

/// Read the page config, install logging and mount [`App`] on `<body>`.
pub fn start() {
    let loaded = ClientConfig::from_page();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(&config.log_level);
    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "ignoring malformed client config");
    }

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
