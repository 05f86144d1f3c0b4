use crate::advanced_pane::AdvancedPane;
use crate::settings::Settings;
use eframe::egui;

/// Seam to the status-bar component that knows the upcoming events. The pane
/// only triggers the action, it never sees event data.
pub trait NextEventRunner {
    fn run_script_for_next_event(&mut self);
}

/// Default runner used until the real event source is wired in.
pub struct NoopRunner;

impl NextEventRunner for NoopRunner {
    fn run_script_for_next_event(&mut self) {}
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub button: String,
}

/// Shared state the pane and its dialogs mutate.
pub struct PrefsState {
    pub settings: Settings,
    pub settings_path: String,
    pub error: Option<String>,
    pub alert: Option<Alert>,
    pub runner: Box<dyn NextEventRunner>,
}

impl PrefsState {
    pub fn new(settings: Settings, settings_path: String) -> Self {
        Self {
            settings,
            settings_path,
            error: None,
            alert: None,
            runner: Box::new(NoopRunner),
        }
    }

    /// Persist the settings file. Failures surface as the inline error label.
    pub fn save_settings(&mut self) {
        if let Err(e) = self.settings.save(&self.settings_path) {
            self.set_error(format!("Failed to save settings: {e}"));
        }
    }

    pub fn set_error(&mut self, msg: String) {
        tracing::warn!("{msg}");
        self.error = Some(msg);
    }

    pub fn show_alert(&mut self, title: &str, message: String, button: &str) {
        self.alert = Some(Alert {
            title: title.to_string(),
            message,
            button: button.to_string(),
        });
    }
}

pub struct PrefsApp {
    pub state: PrefsState,
    pane: AdvancedPane,
}

impl PrefsApp {
    pub fn new(settings: Settings, settings_path: String) -> Self {
        Self {
            state: PrefsState::new(settings, settings_path),
            pane: AdvancedPane::default(),
        }
    }

    fn alert_ui(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.state.alert.clone() else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(alert.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(&alert.message);
                if ui.button(&alert.button).clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.state.alert = None;
        }
    }
}

impl eframe::App for PrefsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.state.error {
                ui.colored_label(egui::Color32::RED, err);
            }
            self.pane.ui(ctx, ui, &mut self.state);
        });
        self.alert_ui(ctx);
    }
}
