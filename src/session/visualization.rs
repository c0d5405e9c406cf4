// src/session/visualization.rs
use std::path::PathBuf;
use std::time::Duration;

use crate::{
    api::AnalysisBundle,
    charts::{ChartRegion, ChartSnapshots, CHART_REGIONS},
    config::options::PageKind,
    error::{ApiError, ExportError},
    file,
    graph::ForceGraph,
    notice::Notices,
    platform::Platform,
    task::{RequestKind, TaskSlot},
};

use super::{Env, NO_PLATFORM_MSG};

pub struct VisualizationState {
    pub platform: Option<Platform>,
    pub bundle: AnalysisBundle,
    pub bundle_platform: Option<Platform>,
    pub graph: ForceGraph,
    pub notices: Notices,
    snapshots: ChartSnapshots,
    // bumped whenever a new bundle lands; captures for older ones are ignored
    bundle_rev: u64,
    analyze: TaskSlot<(Platform, Result<AnalysisBundle, ApiError>)>,
}

impl VisualizationState {
    pub fn new(ttl: Duration) -> Self {
        Self {
            platform: None,
            bundle: AnalysisBundle::default(),
            bundle_platform: None,
            graph: ForceGraph::default(),
            notices: Notices::new(ttl),
            snapshots: ChartSnapshots::default(),
            bundle_rev: 0,
            analyze: TaskSlot::new(PageKind::Visualization, RequestKind::Analyze),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.analyze.is_busy()
    }

    pub fn bundle_rev(&self) -> u64 {
        self.bundle_rev
    }

    pub fn snapshots(&self) -> &ChartSnapshots {
        &self.snapshots
    }

    /// Charts the current bundle will actually draw.
    pub fn expected_regions(&self) -> Vec<ChartRegion> {
        CHART_REGIONS
            .iter()
            .copied()
            .filter(|r| r.is_drawn_for(&self.bundle))
            .collect()
    }

    /// Every drawn chart has been captured for the current bundle.
    pub fn is_ready(&self) -> bool {
        self.bundle.has_any_section()
            && self.expected_regions().iter().all(|r| self.snapshots.get(*r).is_some())
    }

    /// Available after a successful run that returned something to report.
    /// Missing captures are left out.
    pub fn can_export(&self) -> bool {
        !self.is_busy() && self.bundle_platform.is_some() && self.bundle.has_any_section()
    }

    /// Store a capture taken after `rev` finished rendering. Captures for a
    /// superseded bundle are dropped.
    pub fn set_snapshot(&mut self, rev: u64, region: ChartRegion, data_url: String) -> bool {
        if rev != self.bundle_rev {
            logd!("Capture: dropped {:?} for stale rev {} (now {})", region, rev, self.bundle_rev);
            return false;
        }
        self.snapshots.set(region, data_url);
        true
    }

    pub fn run(&mut self, env: &Env) {
        let Some(platform) = self.platform else {
            self.notices.failure(NO_PLATFORM_MSG);
            return;
        };
        logf!("Analyze: Begin page=Visualization platform={}", platform);

        let backend = env.backend.clone();
        self.analyze.run(env.spawner.as_ref(), move || (platform, backend.analyze(platform)));
        self.poll();
    }

    pub fn poll(&mut self) {
        let Some((platform, result)) = self.analyze.poll() else { return };
        match result {
            Ok(bundle) => {
                logf!("Analyze: OK page=Visualization platform={} nodes={}",
                    platform, bundle.network.nodes.len());
                self.graph = ForceGraph::from_network(&bundle.network);
                self.bundle = bundle;
                self.bundle_platform = Some(platform);
                self.snapshots = ChartSnapshots::default();
                self.bundle_rev += 1;
            }
            Err(e) => {
                loge!("Analyze: Error page=Visualization platform={}: {}", platform, e);
                self.notices.failure(format!("Error fetching analysis: {e}"));
            }
        }
    }

    /// Write the HTML visual report with whatever has been captured.
    pub fn export(&mut self, env: &Env) -> Result<PathBuf, ExportError> {
        let res = match self.bundle_platform {
            Some(p) => file::write_visual_report(&env.options.export, p, &self.bundle, &self.snapshots),
            None => Err(ExportError::Empty),
        };
        match &res {
            Ok(path) => {
                logf!("Export: OK visual report ({} chart(s)) → {}", self.snapshots.count(), path.display());
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
