//! Result renderer and status views
//!
//! `EntryView` flattens an API entry into exactly what gets drawn, so the
//! rendering rules can be checked without a running UI.

use crate::constants::NO_AUDIO_MESSAGE;
use crate::theme::{self, Palette};
use crate::types::{Entry, FontChoice};
use crate::utils::join_words;
use eframe::egui;

#[derive(Debug, PartialEq)]
pub struct DefinitionLine<'a> {
    pub text: &'a str,
    pub example: Option<&'a str>,
}

#[derive(Debug, PartialEq)]
pub struct MeaningGroup<'a> {
    pub part_of_speech: &'a str,
    pub definitions: Vec<DefinitionLine<'a>>,
    /// `None` hides the line
    pub synonyms: Option<String>,
    pub antonyms: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct EntryView<'a> {
    pub word: &'a str,
    pub phonetic: Option<&'a str>,
    pub audio_url: Option<&'a str>,
    pub meanings: Vec<MeaningGroup<'a>>,
    pub sources: &'a [String],
}

impl<'a> EntryView<'a> {
    pub fn from_entry(entry: &'a Entry) -> Self {
        let meanings = entry
            .meanings
            .iter()
            .map(|meaning| MeaningGroup {
                part_of_speech: &meaning.part_of_speech,
                definitions: meaning
                    .definitions
                    .iter()
                    .map(|d| DefinitionLine {
                        text: &d.definition,
                        example: d.example.as_deref().filter(|e| !e.trim().is_empty()),
                    })
                    .collect(),
                synonyms: join_words(&meaning.synonyms),
                antonyms: join_words(&meaning.antonyms),
            })
            .collect();

        Self {
            word: &entry.word,
            phonetic: entry.phonetic_text(),
            audio_url: entry.audio_url(),
            meanings,
            sources: &entry.source_urls,
        }
    }
}

/// Draw the word header, meaning groups and sources. Returns true when the
/// audio control was clicked.
pub fn render_entry(
    ui: &mut egui::Ui,
    view: &EntryView<'_>,
    p: &Palette,
    font: FontChoice,
    show_no_audio: bool,
) -> bool {
    let mut audio_clicked = false;

    // Word header
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(view.word)
                    .font(theme::font_id(theme::FONT_WORD, font))
                    .strong()
                    .color(p.text_primary),
            );
            if let Some(phonetic) = view.phonetic {
                ui.label(
                    egui::RichText::new(phonetic)
                        .font(theme::font_id(theme::FONT_PHONETIC, font))
                        .color(p.accent),
                );
            }
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if theme::audio_button(ui, p).on_hover_text("Play pronunciation").clicked() {
                audio_clicked = true;
            }
            if show_no_audio {
                render_no_audio_notice(ui, p, font);
            }
        });
    });

    ui.add_space(theme::SPACING_XL);

    for group in &view.meanings {
        render_meaning(ui, group, p, font);
        ui.add_space(theme::SPACING_XL);
    }

    if !view.sources.is_empty() {
        theme::divider_line(ui, p);
        ui.add_space(theme::SPACING_LG);
        ui.horizontal_wrapped(|ui| {
            ui.label(
                egui::RichText::new("Sources")
                    .font(theme::font_id(theme::FONT_SMALL, font))
                    .color(p.text_dim),
            );
            ui.add_space(theme::SPACING_LG);
            ui.vertical(|ui| {
                for url in view.sources {
                    ui.hyperlink_to(
                        egui::RichText::new(format!("{} {}", url, egui_phosphor::regular::ARROW_SQUARE_OUT))
                            .font(theme::font_id(theme::FONT_SMALL, font))
                            .underline(),
                        url,
                    );
                }
            });
        });
    }

    audio_clicked
}

fn render_meaning(ui: &mut egui::Ui, group: &MeaningGroup<'_>, p: &Palette, font: FontChoice) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(group.part_of_speech)
                .font(theme::font_id(theme::FONT_PART_OF_SPEECH, font))
                .strong()
                .italics(),
        );
        ui.add_space(theme::SPACING_LG);
        ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
            theme::divider_line(ui, p);
        });
    });

    ui.add_space(theme::SPACING_LG);
    ui.label(
        egui::RichText::new("Meaning")
            .font(theme::font_id(theme::FONT_BODY, font))
            .color(p.text_dim),
    );
    ui.add_space(theme::SPACING_MD);

    ui.indent(("definitions", group.part_of_speech), |ui| {
        for line in &group.definitions {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new("•").color(p.accent));
                ui.label(
                    egui::RichText::new(line.text).font(theme::font_id(theme::FONT_BODY, font)),
                );
            });
            if let Some(example) = line.example {
                ui.indent(("example", line.text), |ui| {
                    ui.label(
                        egui::RichText::new(format!("\u{201c}{}\u{201d}", example))
                            .font(theme::font_id(theme::FONT_BODY, font))
                            .color(p.text_dim),
                    );
                });
            }
            ui.add_space(theme::SPACING_SM);
        }
    });

    if let Some(synonyms) = &group.synonyms {
        ui.add_space(theme::SPACING_LG);
        word_list_line(ui, "Synonyms", synonyms, p, font);
    }
    if let Some(antonyms) = &group.antonyms {
        ui.add_space(theme::SPACING_LG);
        word_list_line(ui, "Antonyms", antonyms, p, font);
    }
}

fn word_list_line(ui: &mut egui::Ui, label: &str, words: &str, p: &Palette, font: FontChoice) {
    ui.horizontal_wrapped(|ui| {
        ui.label(
            egui::RichText::new(label)
                .font(theme::font_id(theme::FONT_BODY, font))
                .color(p.text_dim),
        );
        ui.add_space(theme::SPACING_LG);
        ui.label(
            egui::RichText::new(words)
                .font(theme::font_id(theme::FONT_BODY, font))
                .strong()
                .color(p.accent),
        );
    });
}

pub fn render_loading(ui: &mut egui::Ui, p: &Palette, font: FontChoice) {
    ui.horizontal(|ui| {
        ui.add(egui::Spinner::new().color(p.accent));
        ui.label(
            egui::RichText::new("Loading...")
                .font(theme::font_id(theme::FONT_BODY, font))
                .color(p.text_dim),
        );
    });
}

pub fn render_error(ui: &mut egui::Ui, message: &str, p: &Palette, font: FontChoice) {
    ui.vertical_centered(|ui| {
        ui.add_space(theme::SPACING_XL);
        ui.label(
            egui::RichText::new(egui_phosphor::regular::SMILEY_SAD)
                .size(theme::FONT_WORD)
                .color(p.text_dim),
        );
        ui.add_space(theme::SPACING_LG);
        ui.label(
            egui::RichText::new(message)
                .font(theme::font_id(theme::FONT_BODY, font))
                .color(p.error),
        );
    });
}

fn render_no_audio_notice(ui: &mut egui::Ui, p: &Palette, font: FontChoice) {
    ui.label(
        egui::RichText::new(format!("{} {}", egui_phosphor::regular::SPEAKER_SLASH, NO_AUDIO_MESSAGE))
            .font(theme::font_id(theme::FONT_LABEL, font))
            .color(p.error),
    );
}
