use std::env;
use std::io::Write;

use serde::{Deserialize, Serialize};

const DEFAULT_FILE_NAME: &str = "settings.yaml";

#[derive(Clone, Debug, Default)]
pub enum Source {
    #[default]
    DefaultPath,
    CustomPath(String),
}

impl Source {
    pub fn expand(&self) -> String {
        match self {
            Source::DefaultPath => match env::current_dir() {
                Ok(p) => p.join(DEFAULT_FILE_NAME).display().to_string(),
                Err(e) => {
                    panic!(
                        "Failed to read current directory while looking for {}: {}",
                        DEFAULT_FILE_NAME, e
                    )
                }
            },
            Source::CustomPath(p) => p.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(skip)]
    settings_path: Source,

    pub ui: UI,
    pub journal: Journal,
    pub bookmarks: Bookmarks,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Journal {
    pub app_events: AppEvents,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppEvents {
    #[serde(with = "LevelFilterDef")]
    pub level: log::LevelFilter,
}

impl Default for AppEvents {
    fn default() -> Self {
        Self {
            level: log::LevelFilter::Warn,
        }
    }
}

// Unfortunate copypaste: https://serde.rs/remote-derive.html
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[serde(remote = "log::LevelFilter")]
enum LevelFilterDef {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UI {
    pub theme: ThemeMode,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Bookmarks {
    /// Base address bookmark links are appended to. The view goes into the
    /// query string.
    pub base_url: String,
}

impl Default for Bookmarks {
    fn default() -> Self {
        Self {
            base_url: "https://example.org/explorer".into(),
        }
    }
}

impl Settings {
    pub fn from_file(source: &Source, fallback: bool) -> Self {
        let path = source.expand();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_yaml::from_str::<Settings>(contents.as_str()) {
                Ok(mut obj) => {
                    obj.settings_path = source.to_owned();
                    obj
                }
                Err(e) => {
                    panic!("Error while loading the config: {}", e);
                }
            },
            Err(e) => {
                if fallback {
                    return Self::default();
                }
                panic!("Error reading file at {}: {}", path, e);
            }
        }
    }

    pub fn to_file(&self, path: &Source) {
        let p = path.expand();
        match serde_yaml::to_string(self) {
            Ok(s) => match std::fs::File::create(&p) {
                Ok(mut f) => {
                    if f.write(s.as_bytes()).is_err() {
                        panic!("Failed to save settings")
                    }
                }
                Err(e) => {
                    panic!("Failed to create the file at {}: {}", p, e);
                }
            },
            Err(e) => {
                panic!("Error saving config: {}", e);
            }
        }
    }

    pub fn save(&self) {
        self.to_file(&self.settings_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let s: Settings = serde_yaml::from_str("ui:\n  theme: light\n").unwrap();
        assert_eq!(s.ui.theme, ThemeMode::Light);
        assert_eq!(s.journal.app_events.level, log::LevelFilter::Warn);
        assert_eq!(s.bookmarks.base_url, "https://example.org/explorer");
    }

    #[test]
    fn level_names_are_lowercase() {
        let s: Settings =
            serde_yaml::from_str("journal:\n  app_events:\n    level: debug\n").unwrap();
        assert_eq!(s.journal.app_events.level, log::LevelFilter::Debug);
    }

    #[test]
    fn saved_settings_load_back_from_a_custom_path() {
        let path = std::env::temp_dir().join("waypoint-settings-roundtrip.yaml");
        let source = Source::CustomPath(path.display().to_string());

        let mut s = Settings::default();
        s.ui.theme = ThemeMode::Light;
        s.to_file(&source);

        // from_file remembers the source, so save() goes to the same place
        let mut restored = Settings::from_file(&source, false);
        assert_eq!(restored.ui.theme, ThemeMode::Light);

        restored.bookmarks.base_url = "https://viewer.internal/share".into();
        restored.save();

        let resaved = Settings::from_file(&source, false);
        assert_eq!(resaved.bookmarks.base_url, "https://viewer.internal/share");

        std::fs::remove_file(&path).ok();
    }
}
