use huddlebar::gui::PrefsState;
use huddlebar::regex_dialog::RegexDialog;
use huddlebar::regexes::RegexListKind;
use huddlebar::settings::Settings;
use std::path::Path;
use tempfile::tempdir;

fn state_in(dir: &Path) -> PrefsState {
    let mut settings = Settings::default();
    settings.filter_event_regexes = vec!["standup".to_string()];
    let path = dir.join("settings.json").to_string_lossy().to_string();
    PrefsState::new(settings, path)
}

#[test]
fn add_appends_and_persists() {
    let dir = tempdir().unwrap();
    let mut state = state_in(dir.path());
    let mut dialog = RegexDialog::default();

    dialog.open_add(RegexListKind::FilterEvents);
    dialog.input = "retro".to_string();
    dialog.confirm(&mut state);

    assert!(!dialog.open);
    assert_eq!(state.settings.filter_event_regexes, ["standup", "retro"]);
    let reloaded = Settings::load(&state.settings_path).unwrap();
    assert_eq!(reloaded.filter_event_regexes, ["standup", "retro"]);
}

#[test]
fn edit_confirm_replaces_pattern() {
    let dir = tempdir().unwrap();
    let mut state = state_in(dir.path());
    let mut dialog = RegexDialog::default();

    dialog.open_add(RegexListKind::FilterEvents);
    dialog.input = "retro".to_string();
    dialog.confirm(&mut state);

    dialog.open_edit(RegexListKind::FilterEvents, "standup", &mut state);
    assert!(dialog.open);
    assert_eq!(state.settings.filter_event_regexes, ["retro"]);

    dialog.input = "daily".to_string();
    dialog.confirm(&mut state);

    assert!(!dialog.open);
    assert_eq!(state.settings.filter_event_regexes, ["retro", "daily"]);
    let reloaded = Settings::load(&state.settings_path).unwrap();
    assert_eq!(reloaded.filter_event_regexes, ["retro", "daily"]);
}

#[test]
fn edit_cancel_restores_pattern() {
    let dir = tempdir().unwrap();
    let mut state = state_in(dir.path());
    let mut dialog = RegexDialog::default();

    dialog.open_add(RegexListKind::FilterEvents);
    dialog.input = "retro".to_string();
    dialog.confirm(&mut state);

    dialog.open_edit(RegexListKind::FilterEvents, "standup", &mut state);
    assert_eq!(state.settings.filter_event_regexes, ["retro"]);

    dialog.input = "daily".to_string();
    dialog.cancel(&mut state);

    assert!(!dialog.open);
    assert_eq!(state.settings.filter_event_regexes, ["retro", "standup"]);
    let reloaded = Settings::load(&state.settings_path).unwrap();
    assert_eq!(reloaded.filter_event_regexes, ["retro", "standup"]);
}

#[test]
fn invalid_pattern_keeps_dialog_open() {
    let dir = tempdir().unwrap();
    let mut state = state_in(dir.path());
    let mut dialog = RegexDialog::default();

    dialog.open_add(RegexListKind::FilterEvents);
    dialog.input = "[".to_string();
    dialog.confirm(&mut state);

    assert!(dialog.open);
    assert_eq!(state.settings.filter_event_regexes, ["standup"]);
    let alert = state.alert.expect("invalid pattern should raise an alert");
    assert!(!alert.message.is_empty());
}

#[test]
fn duplicate_confirm_closes_without_saving() {
    let dir = tempdir().unwrap();
    let mut state = state_in(dir.path());
    let mut dialog = RegexDialog::default();

    dialog.open_add(RegexListKind::FilterEvents);
    dialog.input = "standup".to_string();
    dialog.confirm(&mut state);

    assert!(!dialog.open);
    assert_eq!(state.settings.filter_event_regexes, ["standup"]);
    assert!(!Path::new(&state.settings_path).exists());
}

#[test]
fn empty_input_does_not_confirm() {
    let dir = tempdir().unwrap();
    let mut state = state_in(dir.path());
    let mut dialog = RegexDialog::default();

    dialog.open_add(RegexListKind::FilterEvents);
    dialog.confirm(&mut state);

    assert!(dialog.open);
    assert_eq!(state.settings.filter_event_regexes, ["standup"]);
}

#[test]
fn custom_list_is_independent() {
    let dir = tempdir().unwrap();
    let mut state = state_in(dir.path());
    let mut dialog = RegexDialog::default();

    dialog.open_add(RegexListKind::CustomMeeting);
    dialog.input = r"zoom\.us/j/\d+".to_string();
    dialog.confirm(&mut state);

    assert_eq!(state.settings.custom_regexes, [r"zoom\.us/j/\d+"]);
    assert_eq!(state.settings.filter_event_regexes, ["standup"]);
}
