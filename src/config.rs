use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::logging::log_warning;
use crate::paths::home_relative;

/// Runner invoked by generated desktop entries (Flatpak Steam)
pub const DEFAULT_LAUNCH_COMMAND: &str = "flatpak run com.valvesoftware.Steam";

// ============================================================================
// Main App Config
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding `libraryfolders.vdf`, used when the prompt is left empty
    pub default_library_root: PathBuf,
    /// hicolor icon theme that Steam populates with `steam_icon_<appid>.png`
    pub icon_theme_root: PathBuf,
    /// Where desktop entries are written
    pub output_directory: PathBuf,
    /// Command placed before `steam://rungameid/<appid>` in `Exec=`
    pub launch_command: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_library_root: home_relative(
                ".var/app/com.valvesoftware.Steam/.local/share/Steam/steamapps",
            ),
            icon_theme_root: home_relative(".var/app/com.valvesoftware.Steam/data/icons/hicolor"),
            output_directory: home_relative("Desktop"),
            launch_command: DEFAULT_LAUNCH_COMMAND.to_string(),
        }
    }
}

impl AppConfig {
    pub fn default_path() -> PathBuf {
        gamedesk_path!("config.json")
    }

    /// Load from the default location
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load from `path`, falling back to defaults if it is missing or unparsable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log_warning(&format!("Could not read config {}: {}", path.display(), e));
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                log_warning(&format!(
                    "Ignoring malformed config {}: {}",
                    path.display(),
                    e
                ));
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(&Self::default_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        // Ensure parent dir exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_flatpak_steam() {
        let config = AppConfig::default();
        assert!(config.default_library_root.ends_with("Steam/steamapps"));
        assert!(config.icon_theme_root.ends_with("data/icons/hicolor"));
        assert!(config.output_directory.ends_with("Desktop"));
        assert_eq!(config.launch_command, DEFAULT_LAUNCH_COMMAND);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.json");

        let config = AppConfig {
            default_library_root: PathBuf::from("/games/steamapps"),
            icon_theme_root: PathBuf::from("/icons/hicolor"),
            output_directory: PathBuf::from("/out"),
            launch_command: "steam".to_string(),
        };
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path), config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "output_directory": "/srv/shortcuts" }"#).unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.output_directory, PathBuf::from("/srv/shortcuts"));
        assert_eq!(config.launch_command, DEFAULT_LAUNCH_COMMAND);
    }

    #[test]
    fn test_malformed_or_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(AppConfig::load_from(&path), AppConfig::default());

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }
}
