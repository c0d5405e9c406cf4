// src/gui/components/data_table.rs
//
// Read-only tables. Purely a view: callers hand in headers and rows.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

const ROW_H: f32 = 20.0;
const HEADER_H: f32 = 24.0;

/// Preview table; one column per header, long text clipped.
pub fn draw(ui: &mut egui::Ui, id: &str, headers: &[&str], rows: &[Vec<String>]) {
    if headers.is_empty() {
        return;
    }
    egui::ScrollArea::horizontal()
        .id_salt(("table_hscroll", id))
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .id_salt(("table_state", id, headers.len()))
                .striped(true)
                .vscroll(false)
                .cell_layout(Layout::left_to_right(Align::Center));
            for h in headers {
                table = table.column(Column::initial(initial_width(h)).at_least(40.0).resizable(true).clip(true));
            }

            table
                .header(HEADER_H, |mut header| {
                    for h in headers {
                        header.col(|ui| {
                            ui.label(RichText::new(*h).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, rows.len(), |mut row| {
                        let data = &rows[row.index()];
                        for ci in 0..headers.len() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                                if let Some(cell) = data.get(ci) {
                                    ui.label(cell).on_hover_text(cell);
                                }
                            });
                        }
                    });
                });
        });
}

/// Two-column table (Metric/Value, Term/Score, ...).
pub fn pairs(ui: &mut egui::Ui, id: &str, headers: [&str; 2], rows: &[(String, String)]) {
    TableBuilder::new(ui)
        .id_salt(("pairs", id))
        .striped(true)
        .vscroll(false)
        .column(Column::initial(220.0).at_least(80.0).resizable(true).clip(true))
        .column(Column::remainder().at_least(80.0))
        .header(HEADER_H, |mut header| {
            for h in headers {
                header.col(|ui| {
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, rows.len(), |mut row| {
                let (k, v) = &rows[row.index()];
                row.col(|ui| {
                    ui.label(k);
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.label(v).on_hover_text(v);
                });
            });
        });
}

fn initial_width(header: &str) -> f32 {
    match header {
        "comment" | "Comment" => 360.0,
        "Post URL" => 260.0,
        _ => 120.0,
    }
}
