use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

// Default configuration
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REPLY_TEXT: &str = "Hi!";
pub const DEFAULT_REPLY_DELAY_MS: u64 = 800;

fn default_reply_text() -> String {
    DEFAULT_REPLY_TEXT.to_string()
}

fn default_reply_delay_ms() -> u64 {
    DEFAULT_REPLY_DELAY_MS
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Settings {
    /// Base URL of the server exposing `/users`
    pub server: String,
    pub display_name: String,
    pub theme: String,
    /// Canned auto-reply text. A real backend echo could replace the
    /// timer without touching the UI, so this stays configurable.
    #[serde(default = "default_reply_text")]
    pub reply_text: String,
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    #[serde(default)]
    pub history: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            display_name: "operator".to_string(),
            theme: "dark".to_string(),
            reply_text: default_reply_text(),
            reply_delay_ms: default_reply_delay_ms(),
            history: Vec::new(),
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "parlor", "parlor-client") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings).unwrap();
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.server, DEFAULT_SERVER);
        assert_eq!(s.reply_text, "Hi!");
        assert_eq!(s.reply_delay_ms, 800);
        assert!(s.history.is_empty());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        // Settings written by an older build lack the reply fields
        let s: Settings = serde_json::from_str(
            r#"{"server":"http://localhost:9000","display_name":"op","theme":"light"}"#,
        )
        .unwrap();
        assert_eq!(s.server, "http://localhost:9000");
        assert_eq!(s.reply_text, DEFAULT_REPLY_TEXT);
        assert_eq!(s.reply_delay_ms, DEFAULT_REPLY_DELAY_MS);
    }

    #[test]
    fn test_settings_round_trip() {
        let mut s = Settings::default();
        s.reply_text = "pong".into();
        s.history = vec!["hello".into()];

        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.reply_text, "pong");
        assert_eq!(back.history, vec!["hello".to_string()]);
    }
}
