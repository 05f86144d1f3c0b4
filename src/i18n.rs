use once_cell::sync::Lazy;
use std::collections::HashMap;

static STRINGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("general_cancel", "Cancel"),
        ("general_save", "Save"),
        ("general_ok", "OK"),
        ("general_when_event_starts", "when event starts"),
        ("general_one_minute_before", "1 minute before"),
        ("general_three_minute_before", "3 minutes before"),
        ("general_five_minute_before", "5 minutes before"),
        (
            "preferences_advanced_apple_script_checkmark",
            "Run AppleScript when joining a meeting",
        ),
        ("preferences_advanced_save_script_button", "Save script"),
        ("preferences_advanced_wrong_location_title", "Wrong location"),
        (
            "preferences_advanced_wrong_location_message",
            "Please save the script in the suggested directory",
        ),
        ("preferences_advanced_wrong_location_button", "Got it!"),
        (
            "preferences_advanced_event_regex_title",
            "Filter out events by regex",
        ),
        (
            "preferences_advanced_regex_title",
            "Custom regexes for meeting links",
        ),
        ("preferences_advanced_regex_add_button", "Add regex"),
        ("preferences_advanced_regex_edit_button", "Edit"),
        ("preferences_advanced_regex_delete_button", "Delete"),
        ("preferences_advanced_regex_new_title", "New regex"),
        (
            "preferences_advanced_regex_new_cant_save_title",
            "Can't save regex",
        ),
        (
            "preferences_advanced_setting_warning",
            "Only use these settings if you understand what they do",
        ),
    ])
});

/// Look up the display string for a localisation key. Unknown keys fall back
/// to the key itself.
pub fn tr(key: &'static str) -> &'static str {
    STRINGS.get(key).copied().unwrap_or(key)
}
