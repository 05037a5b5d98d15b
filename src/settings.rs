//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web. Scores are never stored here.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_INITIAL_SPEED, DEFAULT_PLAYER_COLOR};
use crate::sim::RunConfig;

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Starting obstacle speed (distance/tick)
    pub fn initial_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 6.0,
            Difficulty::Medium => 10.0,
            Difficulty::Hard => 12.0,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Chosen preset; `None` until the player picks one
    pub difficulty: Option<Difficulty>,
    /// Player square color, passed through to the renderer as-is
    pub player_color: String,

    // === Audio ===
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Music off entirely
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: None,
            player_color: DEFAULT_PLAYER_COLOR.to_string(),
            music_volume: 0.7,
            muted: false,
        }
    }
}

impl Settings {
    /// Initial speed for the next run (falls back when no preset was chosen)
    pub fn initial_speed(&self) -> f32 {
        self.difficulty
            .map(|d| d.initial_speed())
            .unwrap_or(DEFAULT_INITIAL_SPEED)
    }

    /// Configuration for the next run
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            initial_speed: self.initial_speed(),
            player_color: self.player_color.clone(),
        }
    }

    /// Set the preset by name; unknown names leave the setting unchanged
    pub fn select_difficulty(&mut self, name: &str) -> Option<Difficulty> {
        let difficulty = Difficulty::from_str(name)?;
        self.difficulty = Some(difficulty);
        Some(difficulty)
    }

    /// Set the player color; blank values are ignored
    pub fn set_player_color(&mut self, color: &str) {
        let color = color.trim();
        if !color.is_empty() {
            self.player_color = color.to_string();
        }
    }

    /// Effective music volume (respects mute)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.music_volume.clamp(0.0, 1.0)
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "square_dash_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_speeds() {
        assert_eq!(Difficulty::Easy.initial_speed(), 6.0);
        assert_eq!(Difficulty::Medium.initial_speed(), 10.0);
        assert_eq!(Difficulty::Hard.initial_speed(), 12.0);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Difficulty::from_str("EASY"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str(" med "), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_missing_preset_uses_default_speed() {
        let settings = Settings::default();
        assert_eq!(settings.difficulty, None);
        assert_eq!(settings.run_config().initial_speed, DEFAULT_INITIAL_SPEED);
    }

    #[test]
    fn test_select_difficulty() {
        let mut settings = Settings::default();
        assert_eq!(settings.select_difficulty("hard"), Some(Difficulty::Hard));
        assert_eq!(settings.select_difficulty("bogus"), None);
        assert_eq!(settings.difficulty, Some(Difficulty::Hard));
        assert_eq!(settings.run_config().initial_speed, 12.0);
    }

    #[test]
    fn test_player_color_passthrough() {
        let mut settings = Settings::default();
        settings.set_player_color("rebeccapurple");
        assert_eq!(settings.run_config().player_color, "rebeccapurple");
        settings.set_player_color("   ");
        assert_eq!(settings.player_color, "rebeccapurple");
    }

    #[test]
    fn test_muted_volume() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_music_volume(), 0.7);
        settings.muted = true;
        assert_eq!(settings.effective_music_volume(), 0.0);
    }

    #[test]
    fn test_json_round_trip_with_missing_fields() {
        let settings = Settings::from_json(r#"{ "difficulty": "Medium" }"#).unwrap();
        assert_eq!(settings.difficulty, Some(Difficulty::Medium));
        assert_eq!(settings.player_color, DEFAULT_PLAYER_COLOR);
    }

    #[test]
    fn test_default_run_config_matches_settings() {
        assert_eq!(Settings::default().run_config(), RunConfig::default());
    }
}
