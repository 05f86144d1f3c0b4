pub mod advanced_pane;
pub mod gui;
pub mod i18n;
pub mod logging;
pub mod regex_dialog;
pub mod regexes;
pub mod script_dialog;
pub mod scripts;
pub mod settings;
