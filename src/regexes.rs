use crate::settings::Settings;
use regex::Regex;

/// Which of the two regex lists a section or dialog operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegexListKind {
    #[default]
    FilterEvents,
    CustomMeeting,
}

impl RegexListKind {
    pub fn title_key(self) -> &'static str {
        match self {
            RegexListKind::FilterEvents => "preferences_advanced_event_regex_title",
            RegexListKind::CustomMeeting => "preferences_advanced_regex_title",
        }
    }

    pub fn list(self, settings: &Settings) -> &[String] {
        match self {
            RegexListKind::FilterEvents => &settings.filter_event_regexes,
            RegexListKind::CustomMeeting => &settings.custom_regexes,
        }
    }

    pub fn list_mut(self, settings: &mut Settings) -> &mut Vec<String> {
        match self {
            RegexListKind::FilterEvents => &mut settings.filter_event_regexes,
            RegexListKind::CustomMeeting => &mut settings.custom_regexes,
        }
    }
}

/// Validate `pattern` and append it to `list` unless it is already present.
/// Returns `Ok(true)` when the list changed.
pub fn add_pattern(list: &mut Vec<String>, pattern: &str) -> Result<bool, regex::Error> {
    Regex::new(pattern)?;
    if list.iter().any(|p| p == pattern) {
        return Ok(false);
    }
    list.push(pattern.to_string());
    Ok(true)
}

/// Remove the first occurrence of `pattern`. Returns `true` when the list
/// changed.
pub fn remove_pattern(list: &mut Vec<String>, pattern: &str) -> bool {
    match list.iter().position(|p| p == pattern) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}
