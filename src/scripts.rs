use crate::settings::Settings;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Bundle identifier used for the sandboxed scripts directory on macOS.
pub const BUNDLE_ID: &str = "com.huddlebar.HuddleBar";

/// The two script bindings. Each one owns a fixed file name inside the
/// designated scripts directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    EventStart,
    JoinEvent,
}

impl ScriptKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ScriptKind::EventStart => "eventStartScript.scpt",
            ScriptKind::JoinEvent => "joinEventScript.scpt",
        }
    }

    /// The committed script text for this binding.
    pub fn text(self, settings: &Settings) -> &str {
        match self {
            ScriptKind::EventStart => &settings.event_start_script,
            ScriptKind::JoinEvent => &settings.join_event_script,
        }
    }

    /// Commit new script text and the directory it was written to.
    pub fn commit(self, settings: &mut Settings, text: String, location: PathBuf) {
        match self {
            ScriptKind::EventStart => {
                settings.event_start_script = text;
                settings.event_start_script_location = Some(location);
            }
            ScriptKind::JoinEvent => {
                settings.join_event_script = text;
                settings.join_event_script_location = Some(location);
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ScriptSaveError {
    #[error("scripts must be saved in {}, got {}", .expected.display(), .chosen.display())]
    WrongLocation { expected: PathBuf, chosen: PathBuf },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The directory the OS requires automation scripts to live in.
pub fn scripts_dir() -> PathBuf {
    if cfg!(target_os = "macos") {
        dirs_next::home_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("Library")
            .join("Application Scripts")
            .join(BUNDLE_ID)
    } else {
        dirs_next::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("huddlebar")
            .join("scripts")
    }
}

/// Write `text` to `<chosen>/<file name>` after checking that `chosen` is the
/// designated scripts directory.
pub fn save_script(
    chosen: &Path,
    expected: &Path,
    kind: ScriptKind,
    text: &str,
) -> Result<(), ScriptSaveError> {
    if chosen != expected {
        return Err(ScriptSaveError::WrongLocation {
            expected: expected.to_path_buf(),
            chosen: chosen.to_path_buf(),
        });
    }
    write_atomic(&chosen.join(kind.file_name()), text)
}

fn write_atomic(path: &Path, text: &str) -> Result<(), ScriptSaveError> {
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, text.as_bytes())?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
