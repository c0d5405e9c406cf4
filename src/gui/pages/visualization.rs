// src/gui/pages/visualization.rs
use eframe::egui;

use crate::{
    charts::{self, ChartRegion},
    config::consts::{TFIDF_BAR_COLOR, TOPIC_BAR_COLOR},
    config::options::PageKind::{ self, * },
    gui::{
        app::App,
        capture::CaptureTracker,
        components::{charts as chart_view, export_bar, graph_view, platform_picker, raster::{self, RasterKind}},
    },
};

use super::Page;

// simulation ticks per frame while the layout is still hot
const LAYOUT_TICKS: usize = 3;

pub struct VisualizationPage;
pub static PAGE: VisualizationPage = VisualizationPage;

impl Page for VisualizationPage {
    fn kind(&self) -> PageKind { Visualization }
    fn title(&self) -> &'static str { "Data Visualization" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Data Visualization");
        ui.add_space(8.0);

        platform_picker::draw(ui, "visualization", &mut app.session.visualization.platform);
        let busy = app.session.visualization.is_busy();
        if ui.add_enabled(!busy, egui::Button::new("Display")).clicked() {
            app.session.visualization.run(&app.session.env);
        }
        ui.separator();

        if busy {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading visualizations...");
            });
            return;
        }
        if app.session.visualization.bundle_platform.is_none() {
            return;
        }

        let rev = app.session.visualization.bundle_rev();
        app.rasters.ensure(ui.ctx(), rev, &app.session.visualization.bundle);
        app.session.visualization.graph.step_n(LAYOUT_TICKS);

        let st = &app.session.visualization;
        let b = &st.bundle;

        if ChartRegion::Sentiment.is_drawn_for(b) {
            heading(ui, "Sentiment Distribution");
            let rect = chart_view::pie(ui, &charts::sentiment_slices(&b.sentiment_summary));
            track(ui, &mut app.capture, rev, ChartRegion::Sentiment, rect);
        }

        if ChartRegion::Tfidf.is_drawn_for(b) {
            heading(ui, "Top TF-IDF Terms");
            let rect = chart_view::bars(ui, &charts::tfidf_bars(&b.tfidf), TFIDF_BAR_COLOR);
            track(ui, &mut app.capture, rev, ChartRegion::Tfidf, rect);
        }

        if ChartRegion::Topics.is_drawn_for(b) {
            heading(ui, "Topic Modeling");
            let rect = chart_view::bars(ui, &charts::topic_bars(&b.topics), TOPIC_BAR_COLOR);
            track(ui, &mut app.capture, rev, ChartRegion::Topics, rect);
        }

        if let Some(tex) = app.rasters.get(RasterKind::Cooccurrence) {
            heading(ui, "Word Co-occurrence Graph");
            raster::show(ui, tex);
        }

        if !st.graph.is_empty() {
            heading(ui, "Word Co-occurrence Network");
            graph_view::draw(ui, &st.graph);
        }
        let relayout = !st.graph.is_empty() && ui.button("Re-run layout").clicked();

        if let Some(tex) = app.rasters.get(RasterKind::WordCloud) {
            heading(ui, "Word Cloud");
            raster::show(ui, tex);
        }

        let can_export = st.can_export();
        if relayout {
            logd!("UI: graph reheated");
            app.session.visualization.graph.reheat();
        }

        if !can_export {
            return;
        }
        ui.add_space(16.0);
        if let Some((captured, total)) = app.capture.progress() {
            ui.weak(format!("Capturing charts… {captured}/{total}"));
        } else if app.session.visualization.is_ready() {
            ui.weak("Charts captured for the report.");
        }
        if export_bar::draw(ui, app, "Download Visualization Report", true) {
            // outcome is reported through a notice
            let _ = app.session.visualization.export(&app.session.env);
        }
    }
}

/// Report a painted chart to the capture tracker and follow its scroll requests.
fn track(ui: &mut egui::Ui, capture: &mut CaptureTracker, rev: u64, region: ChartRegion, rect: egui::Rect) {
    capture.record(rev, region, rect, ui.clip_rect());
    if let Some(target) = capture.scroll_target(region) {
        ui.scroll_to_rect_animation(target, Some(egui::Align::TOP), egui::style::ScrollAnimation::none());
    }
}

fn heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(12.0);
    ui.heading(title);
    ui.add_space(4.0);
}
