mod app;
mod components;
mod dialog;
mod gates;
mod state;

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

const MIN_WIDTH: f64 = 480.0;
const MIN_HEIGHT: f64 = 400.0;

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qgate=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_logging();

    let window_builder = WindowBuilder::new()
        .with_title("Quality Gates")
        .with_inner_size(LogicalSize::new(560.0, 520.0))
        .with_min_inner_size(LogicalSize::new(MIN_WIDTH, MIN_HEIGHT));

    dioxus::LaunchBuilder::new()
        .with_cfg(
            Config::new()
                .with_menu(None)
                .with_window(window_builder),
        )
        .launch(app::App);
}
