// src/session/extraction.rs
use std::time::Duration;

use crate::{
    api::{Ack, ScrapeForm},
    config::options::PageKind,
    error::ApiError,
    notice::Notices,
    platform::Platform,
    task::{RequestKind, TaskSlot},
};

use super::{Env, NO_PLATFORM_MSG};

pub struct ExtractionState {
    pub platform: Option<Platform>,
    pub form: ScrapeForm,
    pub notices: Notices,
    // platform the in-flight request was sent for
    sent_for: Option<Platform>,
    scrape: TaskSlot<Result<Ack, ApiError>>,
}

impl ExtractionState {
    pub fn new(ttl: Duration) -> Self {
        Self {
            platform: None,
            form: ScrapeForm::default(),
            notices: Notices::new(ttl),
            sent_for: None,
            scrape: TaskSlot::new(PageKind::Extraction, RequestKind::Scrape),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.scrape.is_busy()
    }

    /// Send one scrape request for the selected platform.
    pub fn submit(&mut self, env: &Env) {
        let Some(platform) = self.platform else {
            logd!("Scrape: rejected, no platform");
            self.notices.failure(NO_PLATFORM_MSG);
            return;
        };
        if self.is_busy() {
            logd!("Scrape: already in flight");
            return;
        }

        let req = self.form.request_for(platform);
        logf!("Scrape: Begin platform={}", platform);

        self.sent_for = Some(platform);
        let backend = env.backend.clone();
        self.scrape.run(env.spawner.as_ref(), move || backend.scrape(&req));
        self.poll();
    }

    pub fn poll(&mut self) {
        let Some(result) = self.scrape.poll() else { return };
        let platform = self.sent_for.take();
        let label = platform.map(Platform::label).unwrap_or("Scrape");

        match result {
            Ok(ack) => {
                logf!("Scrape: OK platform={:?} message={:?}", platform, ack.message);
                self.notices.success(format!("{label} scrape success: {}", ack.message));
            }
            Err(e) => {
                loge!("Scrape: Error platform={:?}: {}", platform, e);
                let name = platform.map(Platform::as_str).unwrap_or("platform");
                self.notices.failure(format!("Error scraping {name}: {e}"));
            }
        }
    }
}
