use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::Result;
use super::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

/// The only persisted state: which theme the user last picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or fall back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save_to(path);
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Record an explicit toggle. A toggled theme is always a concrete
    /// preference, so SystemDefault is left behind at this point.
    pub fn remember_theme(&mut self, theme: Theme) {
        self.theme_mode = match theme {
            Theme::Light => ThemeMode::Light,
            Theme::Dark => ThemeMode::Dark,
        };
    }

    /// Get config file path (cross-platform)
    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("neonfolio");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme_mode, ThemeMode::SystemDefault);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            theme_mode: ThemeMode::Dark,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        // Simulate an old config with no recognized fields
        let json = r#"{}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::SystemDefault);
    }

    #[test]
    fn test_remember_theme() {
        let mut settings = AppSettings::default();
        settings.remember_theme(Theme::Dark);
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        settings.remember_theme(Theme::Light);
        assert_eq!(settings.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = AppSettings {
            theme_mode: ThemeMode::Light,
        };
        settings.save_to(&path).unwrap();

        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("settings.json");
        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, AppSettings::default());
    }
}
