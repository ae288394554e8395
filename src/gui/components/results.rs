// src/gui/components/results.rs
//
// Draws the committed query's outcome: load failure, no-results notice,
// or one heading + table per program group.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::LOAD_FAILED_MSG;
use crate::gui::app::App;
use crate::matcher::{ProgramGroup, Search};
use crate::view::{self, DisplayColumn};

// Matched to the scraper palette: red for errors, yellow for warnings.
const ERROR_RED: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);
const WARN_YELLOW: Color32 = Color32::from_rgb(0xF0, 0xD2, 0x3C);
const OK_GREEN: Color32 = Color32::from_rgb(0x64, 0xC8, 0x64);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if let Some(err) = &app.load_error {
        ui.colored_label(ERROR_RED, LOAD_FAILED_MSG);
        ui.label(RichText::new(err).small().weak());
        return;
    }

    let query = app.state.gui.last_query.clone();
    let (Some(ds), Some(m)) = (app.dataset.clone(), app.matches.as_ref()) else {
        return; // idle
    };

    match m.resolve(&ds) {
        Search::Idle => {}
        Search::NoResults => {
            ui.colored_label(WARN_YELLOW, view::no_results_message(&query));
        }
        Search::Found { groups, .. } => {
            ui.colored_label(OK_GREEN, view::found_message(groups.len()));
            ui.add_space(4.0);

            let cols = view::display_columns(&ds.columns);
            egui::ScrollArea::vertical()
                .id_salt("results_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for (gi, g) in groups.iter().enumerate() {
                        group_block(ui, gi, g, &cols);
                        ui.separator();
                    }
                });
        }
    }
}

fn group_block(ui: &mut egui::Ui, gi: usize, g: &ProgramGroup, cols: &[DisplayColumn]) {
    ui.label(RichText::new(view::heading(g)).heading().strong());
    ui.label(RichText::new(view::caption(g)).small());

    let mut table = TableBuilder::new(ui)
        .id_salt(("group_table", gi, g.code))
        .striped(true)
        .vscroll(false);
    for c in cols {
        let w = match c {
            DisplayColumn::Year => 50.0,
            DisplayColumn::Program => 200.0,
            DisplayColumn::Quota => 60.0,
            DisplayColumn::Criteria(_) => 90.0,
        };
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(30.0));
    }

    table
        .header(22.0, |mut header| {
            for c in cols {
                header.col(|ui| {
                    ui.label(RichText::new(c.label()).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, g.records.len(), |mut row| {
                let r = g.records[row.index()];
                for c in cols {
                    let text = c.cell(r);
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if c.is_numeric() {
                            ui.centered_and_justified(|ui| { ui.label(text); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                        }
                    });
                }
            });
        });
}
