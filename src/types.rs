//! Common types and data structures

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One dictionary entry as returned by the entries endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(default)]
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    /// Empty string when the API has no recording
    #[serde(default)]
    pub audio: Option<String>,
}

/// Part-of-speech grouping of definitions
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

impl Entry {
    /// First non-empty audio URL among the phonetics
    pub fn audio_url(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .filter_map(|p| p.audio.as_deref())
            .find(|url| !url.trim().is_empty())
    }

    /// `phonetic` if present, else the first non-empty phonetics text
    pub fn phonetic_text(&self) -> Option<&str> {
        self.phonetic
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .or_else(|| {
                self.phonetics
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .find(|t| !t.trim().is_empty())
            })
    }
}

/// Font literal selectable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontChoice {
    Serif,
    SansSerif,
    Monospace,
    OpenSans,
}

impl FontChoice {
    pub const ALL: [FontChoice; 4] = [
        FontChoice::Serif,
        FontChoice::SansSerif,
        FontChoice::Monospace,
        FontChoice::OpenSans,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FontChoice::Serif => "serif",
            FontChoice::SansSerif => "sans serif",
            FontChoice::Monospace => "monospace",
            FontChoice::OpenSans => "open sans",
        }
    }

    pub fn family(self) -> egui::FontFamily {
        match self {
            FontChoice::Monospace => egui::FontFamily::Monospace,
            other => egui::FontFamily::Name(other.family_name().into()),
        }
    }

    /// Name of the registered egui font family (unused for monospace)
    pub fn family_name(self) -> &'static str {
        match self {
            FontChoice::Serif => "Serif",
            FontChoice::SansSerif => "SansSerif",
            FontChoice::Monospace => "Monospace",
            FontChoice::OpenSans => "OpenSans",
        }
    }
}

impl Default for FontChoice {
    fn default() -> Self {
        FontChoice::Serif
    }
}

/// Snapshot of what the content area shows this frame
#[derive(Debug, Clone, PartialEq)]
pub enum LookupView {
    Empty,
    Loading,
    Error(String),
    Entry(Arc<Entry>),
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[{
        "word": "hello",
        "phonetics": [
            {"audio": ""},
            {"text": "/həˈləʊ/", "audio": "https://example.com/hello-uk.mp3"}
        ],
        "meanings": [
            {
                "partOfSpeech": "noun",
                "definitions": [{"definition": "\"Hello!\" or an equivalent greeting.", "synonyms": [], "antonyms": []}],
                "synonyms": ["greeting"],
                "antonyms": []
            },
            {
                "partOfSpeech": "interjection",
                "definitions": [{"definition": "A greeting.", "example": "Hello, everyone."}],
                "synonyms": [],
                "antonyms": ["bye", "goodbye"]
            }
        ],
        "license": {"name": "CC BY-SA 3.0", "url": "https://creativecommons.org/licenses/by-sa/3.0"},
        "sourceUrls": ["https://en.wiktionary.org/wiki/hello"]
    }]"#;

    #[test]
    fn test_parse_api_payload() {
        let entries: Vec<Entry> = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.word, "hello");
        assert_eq!(entry.meanings.len(), 2);
        assert_eq!(entry.meanings[1].part_of_speech, "interjection");
        assert_eq!(
            entry.meanings[1].definitions[0].example.as_deref(),
            Some("Hello, everyone.")
        );
        assert_eq!(entry.source_urls, vec!["https://en.wiktionary.org/wiki/hello"]);
    }

    #[test]
    fn test_audio_url_skips_empty() {
        let entries: Vec<Entry> = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(
            entries[0].audio_url(),
            Some("https://example.com/hello-uk.mp3")
        );
    }

    #[test]
    fn test_audio_url_none_when_all_empty() {
        let entry: Entry = serde_json::from_str(
            r#"{"word": "qwerty", "phonetics": [{"audio": ""}, {"text": "/x/"}]}"#,
        )
        .unwrap();
        assert_eq!(entry.audio_url(), None);
        assert!(entry.meanings.is_empty());
        assert!(entry.source_urls.is_empty());
    }

    #[test]
    fn test_phonetic_text_fallback() {
        let entries: Vec<Entry> = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(entries[0].phonetic_text(), Some("/həˈləʊ/"));

        let entry: Entry =
            serde_json::from_str(r#"{"word": "cat", "phonetic": "/kæt/"}"#).unwrap();
        assert_eq!(entry.phonetic_text(), Some("/kæt/"));
    }

    #[test]
    fn test_font_choice_serde_names() {
        let json = serde_json::to_string(&FontChoice::SansSerif).unwrap();
        assert_eq!(json, "\"sans_serif\"");
        let back: FontChoice = serde_json::from_str("\"open_sans\"").unwrap();
        assert_eq!(back, FontChoice::OpenSans);
        assert_eq!(FontChoice::default().label(), "serif");
    }
}
