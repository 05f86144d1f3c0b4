use eframe::egui;
use huddlebar::gui::{NextEventRunner, PrefsApp};
use huddlebar::logging;
use huddlebar::settings::{self, Settings};

/// Stands in for the status-bar component until it is wired in.
struct LogNextEventRunner;

impl NextEventRunner for LogNextEventRunner {
    fn run_script_for_next_event(&mut self) {
        tracing::info!("run-script-for-next-event requested; no event source attached");
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let settings_path = settings::default_settings_path();
    let settings = Settings::load(&settings_path)?;
    tracing::info!(path = %settings_path, "loaded settings");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 640.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "HuddleBar Preferences",
        native_options,
        Box::new(move |_cc| {
            let mut app = PrefsApp::new(settings, settings_path);
            app.state.runner = Box::new(LogNextEventRunner);
            Box::new(app)
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to start preferences window: {e}"))
}
