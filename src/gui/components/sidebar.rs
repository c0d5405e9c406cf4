// src/gui/components/sidebar.rs
//
// Header bar with the panel toggle, and the navigation panel itself.

use eframe::egui::{self, RichText};

use crate::gui::{app::{App, APP_TITLE}, router};

pub fn header(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let icon = if app.gui.sidebar_open { "✕" } else { "☰" };
        if ui.button(RichText::new(icon).size(18.0)).clicked() {
            app.gui.sidebar_open = !app.gui.sidebar_open;
            logd!("UI: sidebar_open → {}", app.gui.sidebar_open);
        }
        ui.heading(APP_TITLE);

        if app.session.any_busy() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.spinner();
            });
        }
    });
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(8.0);
    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 6.0;
        let cur = app.current_index();

        for (idx, page) in router::all_pages().iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, RichText::new(page.title()).size(15.0)).clicked() && !selected {
                app.navigate(page.kind());
            }
        }
    });
}
