//! App module - contains the main application state and logic

mod audio;
mod search;
mod views;

pub use audio::AudioNotice;

use crate::lookup::{Lookup, LookupClient};
use crate::settings::Settings;
use crate::theme;
use crate::types::FontChoice;
use eframe::egui;
use std::path::PathBuf;
use tracing::debug;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) lookup: Lookup,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Search control
    pub(crate) search_query: String,
    pub(crate) focus_search: bool,
    // Preferences
    pub(crate) dark_mode: bool,
    pub(crate) font: FontChoice,
    // Result renderer
    pub(crate) audio_notice: AudioNotice,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
        runtime: tokio::runtime::Runtime,
        client: LookupClient,
    ) -> Self {
        theme::install_fonts(&cc.egui_ctx, &settings);
        theme::apply_visuals(&cc.egui_ctx, settings.dark_mode);
        theme::apply_font(&cc.egui_ctx, settings.font);

        Self {
            lookup: Lookup::new(client),
            runtime,
            search_query: String::new(),
            focus_search: true,
            dark_mode: settings.dark_mode,
            font: settings.font,
            audio_notice: AudioNotice::default(),
            logo_texture: None,
            settings,
            data_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
        }
    }

    pub fn set_dark_mode(&mut self, ctx: &egui::Context, dark_mode: bool) {
        self.dark_mode = dark_mode;
        theme::apply_visuals(ctx, dark_mode);
        debug!(dark_mode, "Theme changed");
    }

    pub fn set_font(&mut self, ctx: &egui::Context, font: FontChoice) {
        self.font = font;
        theme::apply_font(ctx, font);
        debug!(font = font.label(), "Font changed");
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            dark_mode: self.dark_mode,
            font: self.font,
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}
