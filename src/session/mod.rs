// src/session/mod.rs
//
// Page state, lifted out of the widgets.
//
// The shell creates one `Session` when it mounts and keeps it until exit,
// so moving between pages no longer throws away fetched data. Each page
// state is a small state machine:
//
//   Idle → Submitting (control disabled) → Success | Failure → Idle
//
// Pages submit through `Env` (backend + spawner) and pick results up in
// `poll()`, once per frame. No egui in here; tests drive it directly.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::{
    api::{Backend, HttpBackend},
    config::options::AppOptions,
    error::ApiError,
    notice::Notice,
    task::{Spawner, ThreadSpawner},
};

pub mod analysis;
pub mod extraction;
pub mod results;
pub mod visualization;

pub use analysis::AnalysisState;
pub use extraction::ExtractionState;
pub use results::ResultsState;
pub use visualization::VisualizationState;

pub const NO_PLATFORM_MSG: &str = "Please select a platform first.";

/// What a page needs to issue requests.
#[derive(Clone)]
pub struct Env {
    pub backend: Arc<dyn Backend>,
    pub spawner: Arc<dyn Spawner>,
    pub options: AppOptions,
}

impl Env {
    pub fn new(backend: Arc<dyn Backend>, spawner: Arc<dyn Spawner>, options: AppOptions) -> Self {
        Self { backend, spawner, options }
    }

    /// HTTP backend on worker threads; `wake` runs after each request.
    pub fn http(options: AppOptions, wake: impl Fn() + Send + Sync + 'static) -> Result<Self, ApiError> {
        let backend = HttpBackend::new(&options)?;
        Ok(Self::new(
            Arc::new(backend),
            Arc::new(ThreadSpawner::with_waker(wake)),
            options,
        ))
    }
}

/// All page state for one app run.
pub struct Session {
    pub env: Env,
    pub extraction: ExtractionState,
    pub results: ResultsState,
    pub analysis: AnalysisState,
    pub visualization: VisualizationState,
}

impl Session {
    pub fn new(env: Env) -> Self {
        let ttl = env.options.notice_ttl;
        logf!("Session: mounted (scrape={}, analysis={})",
            env.options.endpoints.scrape_base,
            env.options.endpoints.analysis_base);
        Self {
            extraction: ExtractionState::new(ttl),
            results: ResultsState::new(ttl),
            analysis: AnalysisState::new(ttl),
            visualization: VisualizationState::new(ttl),
            env,
        }
    }

    /// Drain finished requests on every page.
    pub fn poll(&mut self) {
        self.extraction.poll();
        self.results.poll();
        self.analysis.poll();
        self.visualization.poll();
    }

    /// Visible notices from every page, oldest first.
    pub fn visible_notices(&self, now: Instant) -> Vec<&Notice> {
        let mut all: Vec<&Notice> = [
            &self.extraction.notices,
            &self.results.notices,
            &self.analysis.notices,
            &self.visualization.notices,
        ]
        .into_iter()
        .flat_map(|n| n.visible_at(now))
        .collect();
        all.sort_by_key(|n| n.shown_at);
        all
    }

    /// Soonest moment any visible notice hides.
    pub fn next_notice_expiry(&self, now: Instant) -> Option<Duration> {
        [
            self.extraction.notices.next_expiry(now),
            self.results.notices.next_expiry(now),
            self.analysis.notices.next_expiry(now),
            self.visualization.notices.next_expiry(now),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub fn prune_notices(&mut self, now: Instant) {
        self.extraction.notices.prune(now);
        self.results.notices.prune(now);
        self.analysis.notices.prune(now);
        self.visualization.notices.prune(now);
    }

    pub fn any_busy(&self) -> bool {
        self.extraction.is_busy()
            || self.results.is_busy()
            || self.analysis.is_busy()
            || self.visualization.is_busy()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        logf!("Session: unmounted");
    }
}
