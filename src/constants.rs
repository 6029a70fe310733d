//! Application constants and configuration

pub const APP_NAME: &str = "Word Lookup";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default dictionary endpoint; the looked-up word is appended as a path segment
pub const DEFAULT_API_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

pub const NOT_FOUND_MESSAGE: &str =
    "Sorry pal, we couldn't find the definition of your searched term. You might have a typo";
pub const NO_AUDIO_MESSAGE: &str = "no audio for searched word";

/// How long the no-audio notice stays up after a click
pub const NO_AUDIO_NOTICE_SECS: f32 = 2.0;
