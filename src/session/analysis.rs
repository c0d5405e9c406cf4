// src/session/analysis.rs
use std::path::PathBuf;
use std::time::Duration;

use crate::{
    api::AnalysisBundle,
    config::options::PageKind,
    error::{ApiError, ExportError},
    file,
    notice::Notices,
    platform::Platform,
    task::{RequestKind, TaskSlot},
};

use super::{Env, NO_PLATFORM_MSG};

pub struct AnalysisState {
    pub platform: Option<Platform>,
    pub bundle: AnalysisBundle,
    /// Platform the displayed bundle belongs to
    pub bundle_platform: Option<Platform>,
    pub notices: Notices,
    analyze: TaskSlot<(Platform, Result<AnalysisBundle, ApiError>)>,
}

impl AnalysisState {
    pub fn new(ttl: Duration) -> Self {
        Self {
            platform: None,
            bundle: AnalysisBundle::default(),
            bundle_platform: None,
            notices: Notices::new(ttl),
            analyze: TaskSlot::new(PageKind::Analysis, RequestKind::Analyze),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.analyze.is_busy()
    }

    pub fn average_sentiment_text(&self) -> String {
        self.bundle.average_sentiment_text()
    }

    /// Report controls only make sense with something on screen.
    pub fn can_export(&self) -> bool {
        !self.is_busy() && self.bundle.has_any_section()
    }

    pub fn run(&mut self, env: &Env) {
        let Some(platform) = self.platform else {
            self.notices.failure(NO_PLATFORM_MSG);
            return;
        };
        logf!("Analyze: Begin page=Analysis platform={}", platform);

        let backend = env.backend.clone();
        self.analyze.run(env.spawner.as_ref(), move || (platform, backend.analyze(platform)));
        self.poll();
    }

    pub fn poll(&mut self) {
        let Some((platform, result)) = self.analyze.poll() else { return };
        match result {
            Ok(bundle) => {
                logf!("Analyze: OK page=Analysis platform={}", platform);
                self.bundle = bundle;
                self.bundle_platform = Some(platform);
            }
            Err(e) => {
                loge!("Analyze: Error page=Analysis platform={}: {}", platform, e);
                self.notices.failure(format!("Error fetching analysis: {e}"));
            }
        }
    }

    /// Write the CSV report for the displayed bundle. Result also lands in
    /// a notice.
    pub fn export(&mut self, env: &Env) -> Result<PathBuf, ExportError> {
        let platform = self.bundle_platform.or(self.platform);
        let res = match platform {
            Some(p) => file::write_analysis_report(&env.options.export, p, &self.bundle),
            None => Err(ExportError::Empty),
        };
        match &res {
            Ok(path) => {
                logf!("Export: OK analysis → {}", path.display());
                self.notices.success(format!("Saved report to {}", path.display()));
            }
            Err(e) => {
                loge!("Export: Error: {}", e);
                self.notices.failure(format!("Export error: {e}"));
            }
        }
        res
    }
}
