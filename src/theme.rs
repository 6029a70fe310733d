//! Centralized theme constants for Word Lookup
//! Colors come from a light or dark `Palette`; sizes are shared.

use crate::settings::Settings;
use crate::types::FontChoice;
use egui::Color32;
use std::path::Path;
use tracing::{debug, warn};

// =============================================================================
// COLORS - Palettes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg_base: Color32,
    pub bg_input: Color32,
    pub bg_popup: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_dim: Color32,
    pub accent: Color32,
    pub accent_soft: Color32,
    pub border: Color32,
    pub divider: Color32,
    pub error: Color32,
}

pub const LIGHT: Palette = Palette {
    bg_base: Color32::WHITE,
    bg_input: Color32::from_rgb(0xf4, 0xf4, 0xf4),
    bg_popup: Color32::WHITE,
    text_primary: Color32::from_rgb(0x2d, 0x2d, 0x2d),
    text_secondary: Color32::from_rgb(0x3a, 0x3a, 0x3a),
    text_dim: Color32::from_rgb(0x75, 0x75, 0x75),
    accent: Color32::from_rgb(0xa4, 0x45, 0xed), // purple
    accent_soft: Color32::from_rgb(0xe9, 0xd0, 0xfa),
    border: Color32::from_rgb(0xe9, 0xe9, 0xe9),
    divider: Color32::from_rgb(0xe9, 0xe9, 0xe9),
    error: Color32::from_rgb(0xff, 0x52, 0x52),
};

pub const DARK: Palette = Palette {
    bg_base: Color32::from_rgb(0x05, 0x05, 0x05),
    bg_input: Color32::from_rgb(0x1f, 0x1f, 0x1f),
    bg_popup: Color32::from_rgb(0x1f, 0x1f, 0x1f),
    text_primary: Color32::WHITE,
    text_secondary: Color32::from_rgb(0xe4, 0xe4, 0xe7),
    text_dim: Color32::from_rgb(0x75, 0x75, 0x75),
    accent: Color32::from_rgb(0xa4, 0x45, 0xed),
    accent_soft: Color32::from_rgb(0x3b, 0x1f, 0x52),
    border: Color32::from_rgb(0x2d, 0x2d, 0x2d),
    divider: Color32::from_rgb(0x3a, 0x3a, 0x3a),
    error: Color32::from_rgb(0xff, 0x52, 0x52),
};

pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_WORD: f32 = 44.0;
pub const FONT_PHONETIC: f32 = 22.0;
pub const FONT_PART_OF_SPEECH: f32 = 20.0;
pub const FONT_BODY: f32 = 16.0;
pub const FONT_LABEL: f32 = 14.0;
pub const FONT_SMALL: f32 = 12.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const CONTENT_MAX_WIDTH: f32 = 740.0;
pub const AUDIO_BUTTON_SIZE: f32 = 64.0;
pub const LOGO_WIDTH: f32 = 32.0;
pub const TOGGLE_SIZE: (f32, f32) = (40.0, 20.0);

pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 12.0;
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 16.0;
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, dark_mode: bool) {
    let p = palette(dark_mode);
    let base = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    let widget = |bg: Color32, fg: Color32, stroke: Color32| egui::style::WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: bg,
        bg_stroke: egui::Stroke::new(STROKE_DEFAULT, stroke),
        fg_stroke: egui::Stroke::new(STROKE_DEFAULT, fg),
        corner_radius: RADIUS_DEFAULT.into(),
        expansion: 0.0,
    };

    ctx.set_visuals(egui::Visuals {
        dark_mode,
        panel_fill: p.bg_base,
        window_fill: p.bg_popup,
        extreme_bg_color: p.bg_input,
        faint_bg_color: p.bg_input,
        hyperlink_color: p.text_dim,
        override_text_color: Some(p.text_primary),
        selection: egui::style::Selection {
            bg_fill: p.accent_soft,
            stroke: egui::Stroke::new(STROKE_DEFAULT, p.accent),
        },
        widgets: egui::style::Widgets {
            noninteractive: widget(p.bg_base, p.text_primary, p.divider),
            inactive: widget(p.bg_input, p.text_secondary, p.border),
            hovered: egui::style::WidgetVisuals {
                bg_stroke: egui::Stroke::new(STROKE_MEDIUM, p.accent),
                ..widget(p.bg_input, p.text_primary, p.accent)
            },
            active: egui::style::WidgetVisuals {
                expansion: -1.0,
                ..widget(p.accent_soft, p.text_primary, p.accent)
            },
            open: widget(p.bg_popup, p.text_primary, p.border),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        popup_shadow: egui::epaint::Shadow {
            offset: [0, 5],
            blur: 30,
            spread: 0,
            color: if dark_mode {
                p.accent.gamma_multiply(0.6)
            } else {
                Color32::from_black_alpha(40)
            },
        },
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border),
        window_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        menu_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        ..base
    });

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Fonts
// =============================================================================

/// Register Phosphor icons plus one named family per `FontChoice`. A font
/// file configured in settings takes priority; the bundled proportional
/// fonts are always the fallback chain so icons keep rendering.
pub fn install_fonts(ctx: &egui::Context, settings: &Settings) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    let proportional = fonts
        .families
        .get(&egui::FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();

    for choice in FontChoice::ALL {
        if choice == FontChoice::Monospace {
            continue;
        }
        let mut chain = Vec::new();
        if let Some(bytes) = settings.font_file(choice).and_then(|path| read_font_file(choice, path)) {
            let key = format!("user-{}", choice.family_name());
            fonts
                .font_data
                .insert(key.clone(), std::sync::Arc::new(egui::FontData::from_owned(bytes)));
            chain.push(key);
        }
        chain.extend(proportional.iter().cloned());
        fonts
            .families
            .insert(egui::FontFamily::Name(choice.family_name().into()), chain);
    }

    // Add all Proportional fallbacks to Monospace so icons (Phosphor) render
    if let Some(mono) = fonts.families.get_mut(&egui::FontFamily::Monospace) {
        for name in &proportional {
            if !mono.contains(name) {
                mono.push(name.clone());
            }
        }
    }

    ctx.set_fonts(fonts);
}

/// Read a user font file. Bytes that do not parse as TTF/OTF are rejected
/// here; egui would otherwise panic when it builds its font atlas.
fn read_font_file(choice: FontChoice, path: &Path) -> Option<Vec<u8>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(font = choice.label(), path = %path.display(), error = %e, "Failed to load font file");
            return None;
        }
    };
    if let Err(e) = ab_glyph::FontRef::try_from_slice(&bytes) {
        warn!(font = choice.label(), path = %path.display(), error = %e, "Font file is not a valid TTF/OTF font");
        return None;
    }
    debug!(font = choice.label(), path = %path.display(), "Loaded font file");
    Some(bytes)
}

/// Make `font` the family used by every text style
pub fn apply_font(ctx: &egui::Context, font: FontChoice) {
    let family = font.family();
    ctx.style_mut(|style| {
        for font_id in style.text_styles.values_mut() {
            font_id.family = family.clone();
        }
    });
}

pub fn font_id(size: f32, font: FontChoice) -> egui::FontId {
    egui::FontId::new(size, font.family())
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Rounded input frame used by the search box
pub fn input_frame(p: &Palette, focused: bool) -> egui::Frame {
    let stroke = if focused { p.accent } else { p.bg_input };
    egui::Frame::new()
        .fill(p.bg_input)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, stroke))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::symmetric(20, 12))
}

// =============================================================================
// HELPER - Widgets
// =============================================================================

/// Pill switch for the theme. Returns true if toggled.
pub fn theme_switch(ui: &mut egui::Ui, p: &Palette, on: &mut bool) -> bool {
    let (w, h) = TOGGLE_SIZE;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(w, h), egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let mut changed = false;
    if response.clicked() {
        *on = !*on;
        changed = true;
    }

    let t = ui.ctx().animate_bool(response.id, *on);
    let track = if *on || response.hovered() {
        p.accent
    } else {
        p.text_dim
    };
    let painter = ui.painter();
    painter.rect_filled(rect, h / 2.0, track);
    let knob_radius = h / 2.0 - 3.0;
    let knob_x = egui::lerp((rect.left() + h / 2.0)..=(rect.right() - h / 2.0), t);
    painter.circle_filled(egui::pos2(knob_x, rect.center().y), knob_radius, Color32::WHITE);

    changed
}

/// Round play button for pronunciation audio
pub fn audio_button(ui: &mut egui::Ui, p: &Palette) -> egui::Response {
    let size = AUDIO_BUTTON_SIZE;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let (fill, icon_color) = if response.hovered() {
        (p.accent, Color32::WHITE)
    } else {
        (p.accent_soft, p.accent)
    };
    let (fill, draw_rect) = button_visual(&response, fill, rect);
    let painter = ui.painter();
    painter.circle_filled(draw_rect.center(), draw_rect.width() / 2.0, fill);
    painter.text(
        draw_rect.center(),
        egui::Align2::CENTER_CENTER,
        egui_phosphor::regular::PLAY,
        egui::FontId::proportional(size * 0.4),
        icon_color,
    );
    response
}

/// Returns (fill, draw_rect) for a custom-painted button with a press effect
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else {
        (base_fill, rect)
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

/// Horizontal rule filling the remaining row width
pub fn divider_line(ui: &mut egui::Ui, p: &Palette) {
    let w = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(w, 1.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 0.0, p.divider);
}
