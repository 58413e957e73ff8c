#![allow(warnings)]
//! Todo Board Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;

use std::sync::Arc;

use app::App;
use leptos::prelude::*;
use todo_board_core::{initial_load, BoardConfig, GraphQlGateway};

const CONFIG_JSON: &str = include_str!("../amplifyconfiguration.json");

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);

    let config = match BoardConfig::from_json(CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return;
        }
    };

    // The initial load must finish before anything is rendered.
    wasm_bindgen_futures::spawn_local(async move {
        let gateway = Arc::new(GraphQlGateway::for_request(&config, &browser::document_cookie()));
        let initial = initial_load(gateway.as_ref()).await;
        log::info!("Initial load: {} todos", initial.len());

        let poll_interval_ms = config.poll_interval_millis();
        mount_to_body(move || {
            view! { <App initial=initial gateway=gateway poll_interval_ms=poll_interval_ms /> }
        });
    });
}
