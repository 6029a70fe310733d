//! Search control: submission and keyboard handling

use super::App;
use eframe::egui;

impl App {
    /// Submit the current query. Empty queries are ignored.
    pub fn submit_search(&mut self, ctx: &egui::Context) {
        let repaint_ctx = ctx.clone();
        let submitted = self.lookup.submit(
            &self.search_query,
            self.runtime.handle(),
            move || repaint_ctx.request_repaint(),
        );
        if submitted {
            self.audio_notice.hide();
        }
    }

    /// Global keyboard capture: typing anywhere goes to the search box and
    /// Enter submits, unless another widget owns the keyboard.
    pub fn handle_global_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let mut typed_text = String::new();
        let mut backspace = false;
        let mut enter = false;
        ctx.input(|i| {
            for event in &i.events {
                match event {
                    egui::Event::Text(text) => {
                        if !text.is_empty() && text.chars().all(|c| !c.is_control()) {
                            typed_text.push_str(text);
                        }
                    }
                    egui::Event::Key { key: egui::Key::Backspace, pressed: true, .. } => {
                        backspace = true;
                    }
                    egui::Event::Key { key: egui::Key::Enter, pressed: true, .. } => {
                        enter = true;
                    }
                    _ => {}
                }
            }
        });

        if !typed_text.is_empty() {
            self.search_query.push_str(&typed_text);
            self.focus_search = true;
        }
        if backspace && !self.search_query.is_empty() {
            self.search_query.pop();
            self.focus_search = true;
        }
        if enter {
            self.submit_search(ctx);
        }
    }
}
