use crate::gui::PrefsState;
use crate::i18n::tr;
use crate::regexes::{self, RegexListKind};
use eframe::egui;

/// Modal used to add a new pattern or edit an existing one. Shared by both
/// regex sections.
#[derive(Default)]
pub struct RegexDialog {
    pub open: bool,
    pub input: String,
    target: RegexListKind,
    original: String,
}

impl RegexDialog {
    pub fn open_add(&mut self, target: RegexListKind) {
        self.target = target;
        self.original.clear();
        self.input.clear();
        self.open = true;
    }

    /// The pattern leaves the list as soon as the editor opens; cancel puts
    /// it back.
    pub fn open_edit(&mut self, target: RegexListKind, pattern: &str, state: &mut PrefsState) {
        self.target = target;
        if regexes::remove_pattern(target.list_mut(&mut state.settings), pattern) {
            state.save_settings();
        }
        self.original = pattern.to_string();
        self.input = pattern.to_string();
        self.open = true;
    }

    /// Commit the entered pattern. Invalid patterns keep the dialog open and
    /// surface the engine's error text in an alert.
    pub fn confirm(&mut self, state: &mut PrefsState) {
        if self.input.is_empty() {
            return;
        }
        match regexes::add_pattern(self.target.list_mut(&mut state.settings), &self.input) {
            Ok(appended) => {
                if appended {
                    state.save_settings();
                }
                self.open = false;
            }
            Err(e) => {
                state.show_alert(
                    tr("preferences_advanced_regex_new_cant_save_title"),
                    e.to_string(),
                    tr("general_ok"),
                );
            }
        }
    }

    pub fn cancel(&mut self, state: &mut PrefsState) {
        if !self.original.is_empty() {
            if let Ok(true) =
                regexes::add_pattern(self.target.list_mut(&mut state.settings), &self.original)
            {
                state.save_settings();
            }
        }
        self.open = false;
    }

    pub fn ui(&mut self, ctx: &egui::Context, state: &mut PrefsState) {
        if !self.open {
            return;
        }
        let mut keep_open = true;
        let mut do_save = false;
        let mut do_cancel = false;
        egui::Window::new(tr("preferences_advanced_regex_new_title"))
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(false)
            .default_width(400.0)
            .show(ctx, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.input)
                        .hint_text(tr("preferences_advanced_regex_new_title"))
                        .desired_width(f32::INFINITY),
                );
                ui.horizontal(|ui| {
                    if ui.button(tr("general_cancel")).clicked() {
                        do_cancel = true;
                    }
                    if ui
                        .add_enabled(!self.input.is_empty(), egui::Button::new(tr("general_save")))
                        .clicked()
                    {
                        do_save = true;
                    }
                });
            });
        if !keep_open || do_cancel {
            self.cancel(state);
        } else if do_save {
            self.confirm(state);
        }
    }
}
