use crate::gui::PrefsState;
use crate::i18n::tr;
use crate::scripts::{self, ScriptKind, ScriptSaveError};
use crate::settings::Settings;
use eframe::egui;
use std::path::Path;

/// Modal script editor for one binding. The buffer is independent of the
/// committed text until a save succeeds.
pub struct ScriptDialog {
    pub open: bool,
    pub buffer: String,
    kind: ScriptKind,
}

impl ScriptDialog {
    pub fn new(kind: ScriptKind) -> Self {
        Self {
            open: false,
            buffer: String::new(),
            kind,
        }
    }

    /// Open the editor seeded with the committed script text.
    pub fn open(&mut self, settings: &Settings) {
        self.buffer = self.kind.text(settings).to_string();
        self.open = true;
    }

    /// Save is a no-op while the buffer matches the committed text.
    pub fn save_allowed(&self, settings: &Settings) -> bool {
        self.buffer != self.kind.text(settings)
    }

    /// Finish the save flow with the directory the user picked.
    pub fn confirm_dir(&mut self, chosen: &Path, expected: &Path, state: &mut PrefsState) {
        if !self.save_allowed(&state.settings) {
            return;
        }
        match scripts::save_script(chosen, expected, self.kind, &self.buffer) {
            Ok(()) => {
                self.kind
                    .commit(&mut state.settings, self.buffer.clone(), chosen.to_path_buf());
                state.save_settings();
                self.open = false;
            }
            Err(ScriptSaveError::WrongLocation { .. }) => {
                state.show_alert(
                    tr("preferences_advanced_wrong_location_title"),
                    tr("preferences_advanced_wrong_location_message").to_string(),
                    tr("preferences_advanced_wrong_location_button"),
                );
            }
            Err(ScriptSaveError::Io(e)) => {
                state.set_error(format!("Failed to write {}: {e}", self.kind.file_name()));
            }
        }
    }

    pub fn cancel(&mut self) {
        self.open = false;
    }

    pub fn ui(&mut self, ctx: &egui::Context, state: &mut PrefsState) {
        if !self.open {
            return;
        }
        let mut keep_open = true;
        let mut do_cancel = false;
        let mut pick_dir = false;
        egui::Window::new("Edit script")
            .id(egui::Id::new(self.kind.file_name()))
            .open(&mut keep_open)
            .collapsible(false)
            .default_width(500.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut self.buffer)
                            .code_editor()
                            .desired_rows(18)
                            .desired_width(f32::INFINITY),
                    );
                });
                ui.horizontal(|ui| {
                    if ui.button(tr("general_cancel")).clicked() {
                        do_cancel = true;
                    }
                    let allowed = self.save_allowed(&state.settings);
                    if ui
                        .add_enabled(allowed, egui::Button::new(tr("general_save")))
                        .clicked()
                    {
                        pick_dir = true;
                    }
                });
            });
        if !keep_open || do_cancel {
            self.cancel();
            return;
        }
        if pick_dir {
            let expected = scripts::scripts_dir();
            if let Some(chosen) = rfd::FileDialog::new()
                .set_title(tr("preferences_advanced_save_script_button"))
                .set_directory(&expected)
                .pick_folder()
            {
                self.confirm_dir(&chosen, &expected, state);
            }
        }
    }
}
