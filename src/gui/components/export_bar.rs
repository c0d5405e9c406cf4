// src/gui/components/export_bar.rs
//
// Output folder field plus a page-supplied export button.

use std::path::PathBuf;

use eframe::egui;

use crate::{file, gui::app::App};

/// Draws the folder row. Returns true when `button` was clicked; the out
/// dir text has already been applied by then.
pub fn draw(ui: &mut egui::Ui, app: &mut App, button: &str, enabled: bool) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.label("Output folder:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.gui.out_dir_text)
                .desired_width(260.0)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.gui.out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", app.gui.out_dir_text);
        }

        if ui.button("Open folder").clicked() {
            app.apply_out_dir();
            open_folder(app.session.env.options.export.out_dir().to_path_buf());
        }

        if ui.add_enabled(enabled, egui::Button::new(button)).clicked() {
            app.apply_out_dir();
            clicked = true;
        }
    });
    clicked
}

fn open_folder(dir: PathBuf) {
    let target = file::find_nearest_existing_parent(&dir);
    logf!("UI: Open folder {}", target.display());
    if let Err(e) = open::that_detached(&target) {
        loge!("UI: Open folder failed: {}", e);
    }
}
