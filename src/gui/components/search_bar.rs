// src/gui/components/search_bar.rs
//
// Title, tip line and the single query box. Enter commits the query.

use eframe::egui;
use crate::config::consts::{APP_TITLE, SEARCH_HINT, SEARCH_PLACEHOLDER};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading(APP_TITLE);
    ui.label(egui::RichText::new(SEARCH_HINT).small());
    ui.add_space(6.0);

    let mut submit = false;
    let mut refresh = false;

    ui.horizontal(|ui| {
        ui.label("請輸入學校或科系關鍵字：");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.query)
                .hint_text(SEARCH_PLACEHOLDER)
                .desired_width(ui.available_width() - 90.0),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
            resp.request_focus();
        }
        if ui.button("Search").clicked() { submit = true; }
        if ui.button("⟳").on_hover_text("Refresh data").clicked() { refresh = true; }
    });

    if refresh { app.refresh(); }
    if submit { app.submit(); }
}
