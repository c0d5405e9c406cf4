// src/gui/pages/home.rs
use eframe::egui::{self, Color32, RichText};

use crate::config::options::PageKind::{ self, * };
use crate::gui::app::App;

use super::Page;

const FEATURES: [&str; 3] = [
    "Scrape YouTube & Reddit data in one click",
    "Visualize insights with sentiment, topics & TF-IDF",
    "Interactive word cloud & network graphs",
];

pub struct HomePage;
pub static PAGE: HomePage = HomePage;

impl Page for HomePage {
    fn kind(&self) -> PageKind { Home }
    fn title(&self) -> &'static str { "Home" }

    fn draw(&self, ui: &mut egui::Ui, _app: &mut App) {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.heading("Welcome to the Social Media Analysis App");
            ui.add_space(16.0);
            for f in FEATURES {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("✓").color(Color32::from_rgb(0x2E, 0x9E, 0x5B)).strong());
                    ui.label(f);
                });
            }
        });
    }
}
