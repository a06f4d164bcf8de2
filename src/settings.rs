use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::loader::DEFAULT_CONFIG;
use crate::theme::DEFAULT_THEME;

pub const SETTINGS_FILE: &str = "folio.toml";

/// Tool settings from `folio.toml`. Every key is optional; command-line
/// flags override whatever is set here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Configuration document: file path or http(s) URL.
    pub config: String,
    /// Custom page skeleton; the built-in one is used when unset.
    pub skeleton: Option<String>,
    pub output: String,
    pub database: String,
    pub static_dir: String,
    pub default_theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            config: DEFAULT_CONFIG.to_string(),
            skeleton: None,
            output: "website/index.html".to_string(),
            database: "website/db/folio.db".to_string(),
            static_dir: "website/static".to_string(),
            default_theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.config, "./config.json");
        assert_eq!(settings.default_theme, "github");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "config = \"https://example.com/config.json\"\ndefault_theme = \"dracula\"\n").unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.config, "https://example.com/config.json");
        assert_eq!(settings.default_theme, "dracula");
        assert_eq!(settings.output, "website/index.html");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "config = [").unwrap();
        assert!(matches!(
            Settings::load(&path),
            Err(crate::error::Error::Settings(_))
        ));
    }
}
