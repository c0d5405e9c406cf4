// src/gui/components/platform_picker.rs

use eframe::egui;

use crate::platform::{Platform, ALL_PLATFORMS};

pub const PLACEHOLDER: &str = "-- Choose --";

/// Drop-down with an explicit "nothing selected" entry. Returns true on change.
pub fn draw(ui: &mut egui::Ui, id: &str, selected: &mut Option<Platform>) -> bool {
    let before = *selected;
    ui.horizontal(|ui| {
        ui.label("Platform:");
        egui::ComboBox::from_id_salt(("platform", id))
            .selected_text(selected.map(Platform::label).unwrap_or(PLACEHOLDER))
            .show_ui(ui, |ui| {
                ui.selectable_value(selected, None, PLACEHOLDER);
                for p in ALL_PLATFORMS {
                    ui.selectable_value(selected, Some(p), p.label());
                }
            });
    });
    let changed = *selected != before;
    if changed {
        logf!("UI: {} platform → {:?}", id, selected);
    }
    changed
}

/// Radio row; no entry for "nothing selected". Returns true on change.
pub fn radio(ui: &mut egui::Ui, id: &str, selected: &mut Option<Platform>) -> bool {
    let before = *selected;
    ui.horizontal(|ui| {
        for p in ALL_PLATFORMS {
            ui.radio_value(selected, Some(p), p.label());
        }
    });
    let changed = *selected != before;
    if changed {
        logf!("UI: {} platform → {:?}", id, selected);
    }
    changed
}
