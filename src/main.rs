#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use glowquiz_core::DEFAULT_SERVICE_URL;

/// Global service base URL, set from command line
static SERVICE_URL: OnceLock<String> = OnceLock::new();

/// Get the recommendation service base URL (set from command line or default)
pub fn get_service_url() -> String {
    SERVICE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string())
}

/// Glowquiz - Personalized Makeup Quiz
#[derive(Parser, Debug)]
#[command(name = "glowquiz-desktop")]
#[command(about = "Glowquiz - personalized makeup recommendations from a selfie and a short quiz")]
struct Args {
    /// Base URL of the recommendation service
    #[arg(short, long)]
    service_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(url) = args.service_url {
        let _ = SERVICE_URL.set(url);
    }

    tracing::info!("Starting Glowquiz against {}", get_service_url());

    // Narrow, tall window: the quiz is a single column
    let window_width = 560.0;
    let window_height = 860.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Glowquiz")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
