//! Pronunciation playback and the transient no-audio notice

use super::App;
use crate::constants::NO_AUDIO_NOTICE_SECS;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Visibility timer for the "no audio" notice. The window always counts from
/// the most recent click.
#[derive(Debug, Default)]
pub struct AudioNotice {
    shown_at: Option<Instant>,
}

impl AudioNotice {
    pub fn window() -> Duration {
        Duration::from_secs_f32(NO_AUDIO_NOTICE_SECS)
    }

    pub fn show(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    pub fn hide(&mut self) {
        self.shown_at = None;
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.remaining(now).is_some()
    }

    /// Time left before the notice hides itself
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let shown_at = self.shown_at?;
        Self::window()
            .checked_sub(now.saturating_duration_since(shown_at))
            .filter(|left| !left.is_zero())
    }
}

impl App {
    /// Audio control click: play when a URL exists, else raise the notice
    pub fn handle_audio_click(&mut self, audio_url: Option<&str>) {
        let now = Instant::now();
        match audio_url {
            Some(url) => {
                info!(url, "Playing pronunciation");
                if let Err(e) = open::that(url) {
                    warn!(url, error = %e, "Failed to launch audio player");
                    self.audio_notice.show(now);
                }
            }
            None => {
                debug!("No pronunciation audio available");
                self.audio_notice.show(now);
            }
        }
    }
}
