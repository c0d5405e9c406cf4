// src/gui/pages/results.rs
use eframe::egui;

use crate::{
    config::options::PageKind::{ self, * },
    gui::{app::App, components::{data_table, platform_picker}},
};

use super::Page;

pub struct ResultsPage;
pub static PAGE: ResultsPage = ResultsPage;

impl Page for ResultsPage {
    fn kind(&self) -> PageKind { Results }
    fn title(&self) -> &'static str { "Data CSV" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Scraped CSV");
        ui.add_space(8.0);

        platform_picker::draw(ui, "results", &mut app.session.results.platform);

        let busy = app.session.results.is_busy();
        ui.horizontal(|ui| {
            let env = &app.session.env;
            let st = &mut app.session.results;
            if ui.add_enabled(!busy, egui::Button::new("Fetch")).clicked() {
                st.fetch(env);
            }
            if ui.button("Clear").clicked() {
                st.clear();
            }
            if ui.add_enabled(!busy, egui::Button::new("Delete")).clicked() {
                st.delete(env);
            }
            if busy {
                ui.spinner();
            }
        });
        ui.separator();

        let st = &app.session.results;
        if st.rows.is_empty() {
            ui.label("No data to display yet. Try fetching first!");
            return;
        }
        data_table::draw(ui, "preview", st.columns(), &st.table());
    }
}
