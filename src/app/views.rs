//! View rendering (navigation bar, search box, content area)

use super::App;
use crate::theme;
use crate::types::{FontChoice, LookupView};
use crate::ui::components::{self, EntryView};
use crate::utils;
use eframe::egui;
use std::time::Instant;

impl App {
    // ========================================================================
    // NAVIGATION BAR
    // ========================================================================

    pub fn render_nav(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let p = theme::palette(self.dark_mode);

        ui.horizontal(|ui| {
            if self.logo_texture.is_none() {
                if let Some((pixels, w, h)) = utils::rasterize_logo(theme::LOGO_WIDTH as u32 * 2) {
                    self.logo_texture = Some(ctx.load_texture(
                        "logo",
                        egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                        egui::TextureOptions::LINEAR,
                    ));
                }
            }
            if let Some(texture) = &self.logo_texture {
                let aspect = texture.size()[1] as f32 / texture.size()[0] as f32;
                let size = egui::vec2(theme::LOGO_WIDTH, theme::LOGO_WIDTH * aspect);
                ui.image(egui::load::SizedTexture::new(texture.id(), size));
            } else {
                ui.label(egui::RichText::new(egui_phosphor::regular::BOOK_OPEN).size(theme::LOGO_WIDTH));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::MOON)
                        .size(theme::FONT_PHONETIC)
                        .color(if self.dark_mode { p.accent } else { p.text_dim }),
                );

                let mut dark_mode = self.dark_mode;
                if theme::theme_switch(ui, p, &mut dark_mode) {
                    self.set_dark_mode(ctx, dark_mode);
                }

                ui.add_space(theme::SPACING_LG);
                ui.label(egui::RichText::new("|").color(p.divider));
                ui.add_space(theme::SPACING_LG);

                let mut font = self.font;
                egui::ComboBox::from_id_salt("font_select")
                    .selected_text(egui::RichText::new(font.label()).strong())
                    .width(120.0)
                    .show_ui(ui, |ui| {
                        for choice in FontChoice::ALL {
                            ui.selectable_value(
                                &mut font,
                                choice,
                                egui::RichText::new(choice.label()).family(choice.family()),
                            );
                        }
                    });
                if font != self.font {
                    self.set_font(ctx, font);
                }
            });
        });
    }

    // ========================================================================
    // SEARCH BOX
    // ========================================================================

    pub fn render_search(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let p = theme::palette(self.dark_mode);
        let font = self.font;
        let search_id = ui.make_persistent_id("search_box");
        let focused = ctx.memory(|m| m.has_focus(search_id));

        let mut submit = false;
        theme::input_frame(p, focused).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = theme::SPACING_MD;

                // Icon first so the text field takes the remaining width
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = ui.add(
                        egui::Label::new(
                            egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                                .size(theme::FONT_PART_OF_SPEECH)
                                .color(p.accent),
                        )
                        .sense(egui::Sense::click())
                        .selectable(false),
                    );
                    if icon.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }
                    if icon.on_hover_text("Search").clicked() {
                        submit = true;
                    }

                    if !self.search_query.is_empty() {
                        let clear = ui.add(
                            egui::Label::new(
                                egui::RichText::new(egui_phosphor::regular::X)
                                    .size(theme::FONT_LABEL)
                                    .color(p.text_dim),
                            )
                            .sense(egui::Sense::click())
                            .selectable(false),
                        );
                        if clear.clicked() {
                            self.search_query.clear();
                            self.focus_search = true;
                        }
                    }

                    ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut self.search_query)
                                .id(search_id)
                                .hint_text("Search for any word...")
                                .font(theme::font_id(theme::FONT_BODY, font))
                                .frame(false)
                                .desired_width(ui.available_width()),
                        );

                        if self.focus_search {
                            self.focus_search = false;
                            response.request_focus();
                            if let Some(mut state) = egui::TextEdit::load_state(ui.ctx(), search_id) {
                                let ccursor = egui::text::CCursor::new(self.search_query.chars().count());
                                state
                                    .cursor
                                    .set_char_range(Some(egui::text::CCursorRange::one(ccursor)));
                                state.store(ui.ctx(), search_id);
                            }
                        }

                        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            submit = true;
                            self.focus_search = true;
                        }
                    });
                });
            });
        });

        if submit {
            self.submit_search(ctx);
        }
    }

    // ========================================================================
    // CONTENT (status views + result renderer)
    // ========================================================================

    pub fn render_content(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let p = theme::palette(self.dark_mode);
        let view = self.lookup.state().view();

        match view {
            LookupView::Empty => {}
            LookupView::Loading => components::render_loading(ui, p, self.font),
            LookupView::Error(message) => components::render_error(ui, &message, p, self.font),
            LookupView::Entry(entry) => {
                let entry_view = EntryView::from_entry(&entry);
                let now = Instant::now();
                let show_notice = self.audio_notice.is_visible(now);

                if components::render_entry(ui, &entry_view, p, self.font, show_notice) {
                    self.handle_audio_click(entry_view.audio_url);
                }

                // Wake up again to hide the notice on time
                if let Some(left) = self.audio_notice.remaining(Instant::now()) {
                    ctx.request_repaint_after(left);
                }
            }
        }
    }
}
