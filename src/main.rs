mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use dioxus::logger::tracing::Level;

use crate::config::default_webview_data_dir;

fn main() {
    dioxus::logger::init(Level::INFO).expect("should initialise logger");

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title("Importador de Planilhas"),
                )
                .with_data_directory(webview_data_dir),
        )
        .launch(app::App);
}
