// src/session/results.rs
use std::time::Duration;

use crate::{
    api::{Ack, PreviewRow},
    config::options::PageKind,
    error::ApiError,
    notice::Notices,
    platform::{self, Platform},
    task::{RequestKind, TaskSlot},
};

use super::{Env, NO_PLATFORM_MSG};

pub struct ResultsState {
    pub platform: Option<Platform>,
    pub rows: Vec<PreviewRow>,
    pub notices: Notices,
    preview: TaskSlot<Result<Vec<PreviewRow>, ApiError>>,
    delete: TaskSlot<(Platform, Result<Ack, ApiError>)>,
}

impl ResultsState {
    pub fn new(ttl: Duration) -> Self {
        Self {
            platform: None,
            rows: Vec::new(),
            notices: Notices::new(ttl),
            preview: TaskSlot::new(PageKind::Results, RequestKind::Preview),
            delete: TaskSlot::new(PageKind::Results, RequestKind::Delete),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.preview.is_busy() || self.delete.is_busy()
    }

    /// Column set for the current selection, decided at render time.
    pub fn columns(&self) -> &'static [&'static str] {
        platform::preview_columns(self.platform)
    }

    /// Rows as display strings under the current column set.
    pub fn table(&self) -> Vec<Vec<String>> {
        let cols = self.columns();
        self.rows.iter().map(|r| r.cells(cols)).collect()
    }

    /// Fetch the first N rows of the platform's scraped CSV.
    pub fn fetch(&mut self, env: &Env) {
        let Some(platform) = self.platform else {
            self.notices.failure(NO_PLATFORM_MSG);
            return;
        };
        let limit = env.options.preview_limit;
        logf!("Preview: Begin platform={} limit={}", platform, limit);

        let backend = env.backend.clone();
        self.preview.run(env.spawner.as_ref(), move || {
            backend.preview(platform, limit).map(|mut rows| {
                if rows.len() > limit {
                    logd!("Preview: server sent {} rows, keeping {}", rows.len(), limit);
                    rows.truncate(limit);
                }
                rows
            })
        });
        self.poll();
    }

    /// Local only; the server file stays.
    pub fn clear(&mut self) {
        logd!("Preview: cleared {} row(s)", self.rows.len());
        self.rows.clear();
    }

    /// Delete the server-side CSV for the selected platform.
    pub fn delete(&mut self, env: &Env) {
        let Some(platform) = self.platform else {
            self.notices.failure(NO_PLATFORM_MSG);
            return;
        };
        logf!("Delete: Begin platform={}", platform);

        let backend = env.backend.clone();
        self.delete.run(env.spawner.as_ref(), move || {
            (platform, backend.delete_artifact(platform))
        });
        self.poll();
    }

    pub fn poll(&mut self) {
        if let Some(result) = self.preview.poll() {
            match result {
                Ok(rows) => {
                    logf!("Preview: OK rows={}", rows.len());
                    self.rows = rows;
                }
                Err(e) => {
                    loge!("Preview: Error: {}", e);
                    self.notices.failure(format!("Error fetching CSV head: {e}"));
                }
            }
        }

        if let Some((platform, result)) = self.delete.poll() {
            match result {
                Ok(_) => {
                    logf!("Delete: OK platform={}", platform);
                    self.rows.clear();
                    self.notices.success(format!("Deleted {platform} CSV file successfully!"));
                }
                Err(e) => {
                    loge!("Delete: Error platform={}: {}", platform, e);
                    self.notices.failure(format!("Error deleting file: {e}"));
                }
            }
        }
    }
}
