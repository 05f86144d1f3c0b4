use crate::gui::PrefsState;
use crate::i18n::tr;
use crate::regex_dialog::RegexDialog;
use crate::regexes::{self, RegexListKind};
use crate::script_dialog::ScriptDialog;
use crate::scripts::ScriptKind;
use crate::settings::ScriptTiming;
use eframe::egui;

/// The Advanced preferences tab: two script bindings, two regex lists and a
/// warning footer.
pub struct AdvancedPane {
    event_script_dialog: ScriptDialog,
    join_script_dialog: ScriptDialog,
    regex_dialog: RegexDialog,
}

impl Default for AdvancedPane {
    fn default() -> Self {
        Self {
            event_script_dialog: ScriptDialog::new(ScriptKind::EventStart),
            join_script_dialog: ScriptDialog::new(ScriptKind::JoinEvent),
            regex_dialog: RegexDialog::default(),
        }
    }
}

impl AdvancedPane {
    pub fn ui(&mut self, ctx: &egui::Context, ui: &mut egui::Ui, state: &mut PrefsState) {
        self.script_section(ui, state);
        ui.separator();
        self.regex_section(ui, state, RegexListKind::FilterEvents);
        ui.separator();
        self.regex_section(ui, state, RegexListKind::CustomMeeting);
        ui.separator();
        ui.vertical_centered(|ui| {
            ui.label(tr("preferences_advanced_setting_warning"));
        });

        self.event_script_dialog.ui(ctx, state);
        self.join_script_dialog.ui(ctx, state);
        self.regex_dialog.ui(ctx, state);
    }

    fn script_section(&mut self, ui: &mut egui::Ui, state: &mut PrefsState) {
        ui.horizontal(|ui| {
            if ui
                .checkbox(
                    &mut state.settings.run_event_start_script,
                    "Run AppleScript automatically",
                )
                .changed()
            {
                state.save_settings();
            }
            let enabled = state.settings.run_event_start_script;
            ui.add_enabled_ui(enabled, |ui| {
                let before = state.settings.event_start_script_time;
                egui::ComboBox::from_id_source("event_start_script_time")
                    .selected_text(tr(before.label_key()))
                    .show_ui(ui, |ui| {
                        for timing in ScriptTiming::ALL {
                            ui.selectable_value(
                                &mut state.settings.event_start_script_time,
                                timing,
                                tr(timing.label_key()),
                            );
                        }
                    });
                if state.settings.event_start_script_time != before {
                    state.save_settings();
                }
            });
            if enabled {
                if ui.button("Test on next event").clicked() {
                    state.runner.run_script_for_next_event();
                }
                if ui.button("Edit script").clicked() {
                    self.event_script_dialog.open(&state.settings);
                }
            }
        });
        ui.separator();
        ui.horizontal(|ui| {
            if ui
                .checkbox(
                    &mut state.settings.run_join_event_script,
                    tr("preferences_advanced_apple_script_checkmark"),
                )
                .changed()
            {
                state.save_settings();
            }
            if state.settings.run_join_event_script {
                if ui.button("Edit script").clicked() {
                    self.join_script_dialog.open(&state.settings);
                }
            }
        });
    }

    fn regex_section(&mut self, ui: &mut egui::Ui, state: &mut PrefsState, kind: RegexListKind) {
        ui.horizontal(|ui| {
            ui.label(tr(kind.title_key()));
            if ui
                .button(tr("preferences_advanced_regex_add_button"))
                .clicked()
            {
                self.regex_dialog.open_add(kind);
            }
        });
        let mut to_edit: Option<String> = None;
        let mut to_delete: Option<String> = None;
        egui::ScrollArea::vertical()
            .id_source(kind.title_key())
            .max_height(120.0)
            .show(ui, |ui| {
                for pattern in kind.list(&state.settings) {
                    ui.horizontal(|ui| {
                        ui.label(pattern);
                        if ui
                            .button(tr("preferences_advanced_regex_edit_button"))
                            .clicked()
                        {
                            to_edit = Some(pattern.clone());
                        }
                        if ui
                            .button(tr("preferences_advanced_regex_delete_button"))
                            .clicked()
                        {
                            to_delete = Some(pattern.clone());
                        }
                    });
                }
            });
        if let Some(pattern) = to_delete {
            if regexes::remove_pattern(kind.list_mut(&mut state.settings), &pattern) {
                state.save_settings();
            }
        }
        if let Some(pattern) = to_edit {
            self.regex_dialog.open_edit(kind, &pattern, state);
        }
    }
}
