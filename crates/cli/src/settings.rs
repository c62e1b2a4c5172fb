use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use intro_scorer_core::shared::constants::{
    DEFAULT_DURATION_SEC, DEFAULT_GRAMMAR_ENDPOINT, DEFAULT_GRAMMAR_LANGUAGE,
    DEFAULT_WHISPER_MODEL,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_grammar_endpoint")]
    pub grammar_endpoint: String,
    #[serde(default = "default_grammar_language")]
    pub grammar_language: String,
    #[serde(default = "default_duration_sec")]
    pub default_duration_sec: f64,
    #[serde(default = "default_whisper_model")]
    pub whisper_model: String,
}

fn default_grammar_endpoint() -> String {
    DEFAULT_GRAMMAR_ENDPOINT.to_string()
}

fn default_grammar_language() -> String {
    DEFAULT_GRAMMAR_LANGUAGE.to_string()
}

fn default_duration_sec() -> f64 {
    DEFAULT_DURATION_SEC
}

fn default_whisper_model() -> String {
    DEFAULT_WHISPER_MODEL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grammar_endpoint: default_grammar_endpoint(),
            grammar_language: default_grammar_language(),
            default_duration_sec: default_duration_sec(),
            whisper_model: default_whisper_model(),
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("IntroScorer").join("settings.json"))
    }

    /// Loads the user's settings, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    /// Writes the settings to [`Settings::config_path`] and returns that path.
    pub fn save(&self) -> io::Result<PathBuf> {
        let path = Self::config_path().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no config directory on this platform")
        })?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
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
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.grammar_endpoint, "https://api.languagetool.org");
        assert_eq!(s.grammar_language, "en-US");
        assert_eq!(s.default_duration_sec, 60.0);
        assert_eq!(s.whisper_model, "base");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let s = Settings::load_from(&dir.path().join("absent.json"));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ nope").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"grammar_endpoint": "http://localhost:8081"}"#).unwrap();
        let s = Settings::load_from(&path);
        assert_eq!(s.grammar_endpoint, "http://localhost:8081");
        assert_eq!(s.grammar_language, "en-US");
        assert_eq!(s.default_duration_sec, 60.0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let s = Settings {
            grammar_endpoint: "http://lt.internal".to_string(),
            grammar_language: "en-GB".to_string(),
            default_duration_sec: 90.0,
            whisper_model: "small".to_string(),
        };
        s.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), s);
    }

    #[test]
    fn test_save_to_reports_write_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "file").unwrap();
        let result = Settings::default().save_to(&blocker.join("settings.json"));
        assert!(result.is_err());
    }
}
