#![windows_subsystem = "windows"]

mod app;
mod config;
mod i18n;
mod navigation;
mod screen;
mod state;
mod storage;
mod task;
mod ui;

use iced::window;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Initialize i18n by accessing the lazy static
    std::sync::LazyLock::force(&i18n::LANGUAGE_LOADER);

    let config = config::Config::load();
    if let Some(language) = config.language {
        i18n::update_language(language);
    }

    iced::application(
        move || app::Tasks::new(config.clone()),
        app::Tasks::update,
        app::Tasks::view,
    )
    .subscription(app::Tasks::subscription)
    .title(app::Tasks::title)
    .window(window::Settings {
        size: (420.0, 760.0).into(),
        min_size: Some((360.0, 560.0).into()),
        // Closing goes through `Message::CloseRequested` so unsaved tasks get flushed.
        exit_on_close_request: false,
        ..window::Settings::default()
    })
    .run()
}
