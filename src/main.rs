#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use waypoint::core::settings::{Settings, Source};

const LOG_FILE_PATH: &str = "./runtime.log";

fn setup_logging(level: log::LevelFilter) {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_PATH)
        .expect("failed to open the file for logging app events");

    let time_format =
        simplelog::format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]");
    simplelog::WriteLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_time_format_custom(time_format)
            .set_time_offset_to_local()
            .unwrap()
            .build(),
        file,
    )
    .expect("Failed to configure the logger");
    log_panics::init();
}

fn main() {
    let settings = Settings::from_file(&Source::DefaultPath, true);
    setup_logging(settings.journal.app_events.level);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size((520., 360.)),
        ..Default::default()
    };
    eframe::run_native(
        "waypoint",
        native_options,
        Box::new(|cc| {
            Ok(Box::new(waypoint::gui::window::ApplicationWindow::new(
                cc, settings,
            )))
        }),
    )
    .expect("failed to set up the app window");
}
