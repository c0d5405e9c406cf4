// src/gui/pages/analysis.rs
use eframe::egui;

use crate::{
    api::types::fmt_score,
    config::options::PageKind::{ self, * },
    gui::{app::App, components::{data_table, export_bar, platform_picker}},
};

use super::Page;

pub struct AnalysisPage;
pub static PAGE: AnalysisPage = AnalysisPage;

impl Page for AnalysisPage {
    fn kind(&self) -> PageKind { Analysis }
    fn title(&self) -> &'static str { "Data Analysis" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Data Analysis");
        ui.add_space(8.0);

        platform_picker::draw(ui, "analysis", &mut app.session.analysis.platform);
        let busy = app.session.analysis.is_busy();
        if ui.add_enabled(!busy, egui::Button::new("Analyze")).clicked() {
            app.session.analysis.run(&app.session.env);
        }
        ui.separator();

        if app.session.analysis.is_busy() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading analysis...");
            });
            return;
        }

        let st = &app.session.analysis;
        let b = &st.bundle;

        if !b.sentiments.is_empty() {
            section(ui, "Sentiment Summary");
            let mut rows = vec![(s!("Average Sentiment"), st.average_sentiment_text())];
            for (label, count) in b.sentiment_summary.entries() {
                rows.push((capitalize(label), count.to_string()));
            }
            data_table::pairs(ui, "sentiment", ["Metric", "Value"], &rows);
        }

        if !b.tfidf.is_empty() {
            section(ui, "Top TF-IDF Terms");
            let rows: Vec<_> = b.tfidf.iter().map(|(t, v)| (t.clone(), fmt_score(*v))).collect();
            data_table::pairs(ui, "tfidf", ["Term", "Score"], &rows);
        }

        if !b.topics.is_empty() {
            section(ui, "Topics Discovered");
            let rows: Vec<_> = b
                .topics
                .iter()
                .enumerate()
                .map(|(i, words)| (format!("Topic {}", i + 1), words.join(", ")))
                .collect();
            data_table::pairs(ui, "topics", ["Topic", "Words"], &rows);
        }

        if !b.centralities.is_empty() {
            section(ui, "Top Central Words");
            let rows: Vec<_> = b.centralities.iter().map(|(w, v)| (w.clone(), fmt_score(*v))).collect();
            data_table::pairs(ui, "centrality", ["Word", "Centrality"], &rows);
        }

        let can_export = st.can_export();
        if can_export {
            ui.add_space(16.0);
            if export_bar::draw(ui, app, "Download Analysis Report", can_export) {
                // outcome is reported through a notice
                let _ = app.session.analysis.export(&app.session.env);
            }
        }
    }
}

fn section(ui: &mut egui::Ui, title: &str) {
    ui.add_space(12.0);
    ui.heading(title);
    ui.add_space(4.0);
}

fn capitalize(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(f) => f.to_uppercase().chain(c).collect(),
        None => s!(),
    }
}
