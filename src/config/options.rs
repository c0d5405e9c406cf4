// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub endpoints: Endpoints,
    pub export: ExportOptions,
    /// Rows requested from the preview endpoints.
    pub preview_limit: usize,
    pub notice_ttl: Duration,
    pub request_timeout: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            export: ExportOptions::default(),
            preview_limit: PREVIEW_LIMIT,
            notice_ttl: Duration::from_millis(NOTICE_TTL_MS),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    Extraction,
    Results,
    Analysis,
    Visualization,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub scrape_base: String,
    pub analysis_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            scrape_base: s!(SCRAPE_BASE),
            analysis_base: s!(ANALYSIS_BASE),
        }
    }
}

impl Endpoints {
    pub fn scrape_url(&self, path: &str) -> String {
        join!(self.scrape_base.trim_end_matches('/'), path)
    }

    pub fn analysis_url(&self, path: &str) -> String {
        join!(self.analysis_base.trim_end_matches('/'), path)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI text into a directory. Blank text falls back to the default.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(s)
        };
    }

    pub fn analysis_report_path(&self, platform: &str) -> PathBuf {
        self.out_dir.join(join!(platform, ANALYSIS_REPORT_SUFFIX))
    }

    pub fn visual_report_path(&self) -> PathBuf {
        self.out_dir.join(VISUAL_REPORT_FILE)
    }
}
