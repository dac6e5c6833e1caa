#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod config;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::prelude::*;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::config::AppConfig;
use crate::infra::albion::AlbionClient;
use crate::util::version::APP_NAME;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("albion_refining_calculator=info")),
        )
        .init();

    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    let config = AppConfig::from_env().unwrap_or_else(|err| {
        warn!("ignoring invalid configuration: {err}");
        AppConfig::default()
    });

    let client = match AlbionClient::new(&config) {
        Ok(client) => client,
        Err(err) => {
            error!("cannot create price client for {}: {err}", config.api_base_url);
            std::process::exit(1);
        }
    };

    let builder = LaunchBuilder::new().with_context(client);

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.launch(app::App);
}
