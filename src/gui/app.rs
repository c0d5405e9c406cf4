// src/gui/app.rs
use std::{
    error::Error,
    time::{Duration, Instant},
};

use eframe::egui;

use crate::{
    config::{
        options::{AppOptions, PageKind},
        state::GuiState,
    },
    session::{Env, Session},
};

use super::{
    capture::CaptureTracker,
    components::{self, raster::RasterCache},
    pages::Page,
    router,
};

pub const APP_TITLE: &str = "Social Media Dashboard";

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            let ctx = cc.egui_ctx.clone();
            let env = Env::http(AppOptions::default(), move || ctx.request_repaint())?;
            Ok(Box::new(App::new(env, GuiState::default())))
        }),
    )?;
    Ok(())
}

pub struct App {
    // UI thread only
    pub gui: GuiState,

    // all page state; lives as long as the shell
    pub session: Session,

    // decoded server rasters for the visualization page
    pub rasters: RasterCache,

    // chart regions awaiting a screenshot
    pub capture: CaptureTracker,
}

impl App {
    pub fn new(env: Env, gui: GuiState) -> Self {
        let mut gui = gui;
        gui.out_dir_text = env.options.export.out_dir().to_string_lossy().into_owned();
        logf!("Init: pages={}, default page={:?}", router::all_pages().len(), PageKind::Home);

        Self {
            gui,
            session: Session::new(env),
            rasters: RasterCache::default(),
            capture: CaptureTracker::default(),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages.get(self.current_index()).copied().unwrap_or(pages[0])
    }

    pub fn navigate(&mut self, kind: PageKind) {
        let prev = self.current_page_kind();
        if prev != kind {
            logf!("UI: Page switch {:?} → {:?}", prev, kind);
            self.set_current_index(router::index_of(kind));
        }
    }

    /// Push the export folder text into options if the user edited it.
    pub fn apply_out_dir(&mut self) {
        if self.gui.out_dir_dirty {
            self.session.env.options.export.set_dir(&self.gui.out_dir_text);
            logf!("Export: Out dir set → {}", self.session.env.options.export.out_dir().display());
            self.gui.out_dir_dirty = false;
        }
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        let on_vis = self.current_page_kind() == PageKind::Visualization;
        let animating = !self.session.visualization.graph.is_settled() || self.capture.is_active();
        if (on_vis && animating) || self.capture.is_pending() {
            ctx.request_repaint();
            return;
        }
        if self.session.any_busy() {
            // workers wake us on completion; this keeps the spinner alive
            ctx.request_repaint_after(Duration::from_millis(250));
        }
        if let Some(left) = self.session.next_notice_expiry(now) {
            ctx.request_repaint_after(left);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.session.poll();
        self.capture.collect(ctx, &mut self.session.visualization);

        let now = Instant::now();
        self.session.prune_notices(now);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::sidebar::header(ui, self);
        });

        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(180.0)
            .show_animated(ctx, self.gui.sidebar_open, |ui| {
                components::sidebar::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            egui::ScrollArea::vertical()
                .id_salt(("page", page.kind()))
                .auto_shrink([false, false])
                .show(ui, |ui| page.draw(ui, self));
        });

        components::notices::draw(ctx, &self.session.visible_notices(now));

        self.capture.request_if_ready(ctx, &self.session.visualization);
        self.schedule_repaint(ctx, now);
    }
}
