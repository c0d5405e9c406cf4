// src/gui/pages/extraction.rs
use eframe::egui;

use crate::{
    config::options::PageKind::{ self, * },
    gui::{app::App, components::platform_picker},
    platform::Platform,
};

use super::Page;

pub struct ExtractionPage;
pub static PAGE: ExtractionPage = ExtractionPage;

fn field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(320.0));
    ui.end_row();
}

impl Page for ExtractionPage {
    fn kind(&self) -> PageKind { Extraction }
    fn title(&self) -> &'static str { "Data Extraction" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Data Extraction");
        ui.add_space(8.0);

        let st = &mut app.session.extraction;
        platform_picker::radio(ui, "extraction", &mut st.platform);
        ui.add_space(8.0);

        if let Some(platform) = st.platform {
            egui::Grid::new("scrape_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| match platform {
                    Platform::Youtube => {
                        let f = &mut st.form.youtube;
                        field(ui, "Video IDs:", &mut f.video_ids, "e.g. gQc58vGHlvs,p4ldj_c8yIQ");
                        field(ui, "Query (optional):", &mut f.query, "Type your query here");
                        field(ui, "Comment Limit:", &mut f.comment_limit, "");
                        field(ui, "Search Limit:", &mut f.search_limit, "");
                    }
                    Platform::Reddit => {
                        let f = &mut st.form.reddit;
                        field(ui, "Search Query:", &mut f.query, "Type your query here");
                        field(ui, "Comment Limit:", &mut f.comment_limit, "");
                        field(ui, "Search Limit:", &mut f.search_limit, "");
                    }
                });
        } else {
            ui.weak("Pick a platform to fill in its search parameters.");
        }

        ui.add_space(8.0);
        let busy = st.is_busy();
        let label = if busy { "Scraping..." } else { "Scrape" };
        if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
            app.session.extraction.submit(&app.session.env);
        }
    }
}
