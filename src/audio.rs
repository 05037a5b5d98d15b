//! Background music using an HTML audio element
//!
//! One looped track: restarted from the top when a run starts, paused when it
//! ends. Browsers reject `play()` until the page has seen a user gesture; the
//! start button is one, so failures here are only logged.

use web_sys::HtmlAudioElement;

use crate::game::GameEvent;
use crate::settings::Settings;

/// Default track shipped next to index.html
pub const MUSIC_SRC: &str = "audio/bensound-funkyelement.mp3";

/// Audio manager for the game
pub struct MusicPlayer {
    track: Option<HtmlAudioElement>,
    /// Effective volume (0.0 when muted)
    volume: f32,
}

impl Default for MusicPlayer {
    fn default() -> Self {
        Self::new(MUSIC_SRC)
    }
}

impl MusicPlayer {
    pub fn new(src: &str) -> Self {
        let track = HtmlAudioElement::new_with_src(src).ok();
        if let Some(track) = &track {
            track.set_loop(true);
        } else {
            log::warn!("Failed to create audio element - music disabled");
        }
        Self {
            track,
            volume: Settings::default().effective_music_volume(),
        }
    }

    /// Take volume and mute from the saved settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.volume = settings.effective_music_volume();
        self.apply_volume();
    }

    fn apply_volume(&self) {
        if let Some(track) = &self.track {
            track.set_volume(self.volume as f64);
        }
    }

    /// Start the track over from the beginning
    pub fn restart(&self) {
        let Some(track) = &self.track else { return };
        self.apply_volume();
        track.set_current_time(0.0);
        if let Err(e) = track.play() {
            log::warn!("Music playback failed: {:?}", e);
        }
    }

    pub fn pause(&self) {
        if let Some(track) = &self.track {
            let _ = track.pause();
        }
    }

    /// React to a run lifecycle event
    pub fn handle(&self, event: &GameEvent) {
        match event {
            GameEvent::RunStarted => self.restart(),
            GameEvent::RunEnded(_) => self.pause(),
        }
    }
}
