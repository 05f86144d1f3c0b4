use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// When the event-start script fires relative to the event's start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScriptTiming {
    #[default]
    AtStart,
    OneMinuteBefore,
    ThreeMinutesBefore,
    FiveMinutesBefore,
}

impl ScriptTiming {
    pub const ALL: [ScriptTiming; 4] = [
        ScriptTiming::AtStart,
        ScriptTiming::OneMinuteBefore,
        ScriptTiming::ThreeMinutesBefore,
        ScriptTiming::FiveMinutesBefore,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            ScriptTiming::AtStart => "general_when_event_starts",
            ScriptTiming::OneMinuteBefore => "general_one_minute_before",
            ScriptTiming::ThreeMinutesBefore => "general_three_minute_before",
            ScriptTiming::FiveMinutesBefore => "general_five_minute_before",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub run_event_start_script: bool,
    /// Directory the event-start script was last saved to.
    #[serde(default)]
    pub event_start_script_location: Option<PathBuf>,
    /// AppleScript executed near an event's start time.
    #[serde(default = "default_event_start_script")]
    pub event_start_script: String,
    #[serde(default)]
    pub event_start_script_time: ScriptTiming,
    #[serde(default)]
    pub run_join_event_script: bool,
    /// Directory the join-event script was last saved to.
    #[serde(default)]
    pub join_event_script_location: Option<PathBuf>,
    /// AppleScript executed when joining a meeting.
    #[serde(default = "default_join_event_script")]
    pub join_event_script: String,
    /// Events matching any of these patterns are hidden from the menu.
    #[serde(default)]
    pub filter_event_regexes: Vec<String>,
    /// Extra patterns used to recognise meeting links in event text.
    #[serde(default)]
    pub custom_regexes: Vec<String>,
}

fn default_event_start_script() -> String {
    "-- runs before an event starts\ndisplay notification \"Your meeting is about to begin\" with title \"HuddleBar\"\n".to_string()
}

fn default_join_event_script() -> String {
    "-- runs when you join a meeting\ntell application \"Music\" to pause\n".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            run_event_start_script: false,
            event_start_script_location: None,
            event_start_script: default_event_start_script(),
            event_start_script_time: ScriptTiming::AtStart,
            run_join_event_script: false,
            join_event_script_location: None,
            join_event_script: default_join_event_script(),
            filter_event_regexes: Vec::new(),
            custom_regexes: Vec::new(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Default location of the settings file.
pub fn default_settings_path() -> String {
    dirs_next::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("huddlebar")
        .join("settings.json")
        .to_string_lossy()
        .to_string()
}
