// tests/common/mod.rs
//
// Shared fixtures: a scripted backend that counts calls, and an Env that
// runs requests inline.

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use social_dash::{
    api::{Ack, AnalysisBundle, Backend, PreviewRow, ScrapeRequest},
    config::options::AppOptions,
    error::ApiError,
    platform::Platform,
    session::Env,
    task::{InlineSpawner, Spawner},
};

#[derive(Default)]
pub struct FakeBackend {
    pub calls: AtomicUsize,
    pub fail_with: Mutex<Option<u16>>,
    pub ack_message: Mutex<String>,
    pub rows: Mutex<Vec<PreviewRow>>,
    pub bundle: Mutex<AnalysisBundle>,
    pub last_scrape: Mutex<Option<ScrapeRequest>>,
    pub last_limit: Mutex<Option<usize>>,
}

impl FakeBackend {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn fail(&self, status: u16) {
        *self.fail_with.lock().unwrap() = Some(status);
    }

    pub fn succeed(&self) {
        *self.fail_with.lock().unwrap() = None;
    }

    fn outcome(&self) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match *self.fail_with.lock().unwrap() {
            Some(status) => Err(ApiError::Status { status, detail: None }),
            None => Ok(()),
        }
    }
}

impl Backend for FakeBackend {
    fn scrape(&self, req: &ScrapeRequest) -> Result<Ack, ApiError> {
        *self.last_scrape.lock().unwrap() = Some(req.clone());
        self.outcome()?;
        Ok(Ack { status: None, message: self.ack_message.lock().unwrap().clone() })
    }

    fn preview(&self, _platform: Platform, limit: usize) -> Result<Vec<PreviewRow>, ApiError> {
        *self.last_limit.lock().unwrap() = Some(limit);
        self.outcome()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    fn delete_artifact(&self, _platform: Platform) -> Result<Ack, ApiError> {
        self.outcome()?;
        Ok(Ack { status: Some("success".into()), message: "File deleted".into() })
    }

    fn analyze(&self, _platform: Platform) -> Result<AnalysisBundle, ApiError> {
        self.outcome()?;
        Ok(self.bundle.lock().unwrap().clone())
    }
}

pub fn env_with(backend: Arc<FakeBackend>) -> Env {
    Env::new(backend, Arc::new(InlineSpawner), AppOptions::default())
}

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Holds jobs until `release` is called, so requests stay in flight.
#[derive(Default)]
pub struct HeldSpawner {
    jobs: Mutex<Vec<Job>>,
}

impl HeldSpawner {
    pub fn pending(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }

    pub fn release(&self) {
        let jobs: Vec<Job> = std::mem::take(&mut *self.jobs.lock().unwrap());
        for job in jobs {
            job();
        }
    }
}

impl Spawner for HeldSpawner {
    fn spawn(&self, job: Job) {
        self.jobs.lock().unwrap().push(job);
    }
}

pub fn env_held(backend: Arc<FakeBackend>, spawner: Arc<HeldSpawner>) -> Env {
    Env::new(backend, spawner, AppOptions::default())
}

pub fn row(pairs: &[(&str, serde_json::Value)]) -> PreviewRow {
    let mut map = serde_json::Map::new();
    for (k, v) in pairs {
        map.insert((*k).to_string(), v.clone());
    }
    PreviewRow(map)
}

pub fn sample_bundle() -> AnalysisBundle {
    serde_json::from_value(serde_json::json!({
        "sentiments": [0.5, 0.25, -0.1],
        "sentiment_summary": { "positive": 2, "neutral": 0, "negative": 1 },
        "topics": [["rust", "cargo", "crate"], ["egui", "ui"]],
        "tfidf": [["rust", 0.8231], ["async", 0.5]],
        "centralities": [["rust", 0.91234]],
        "network": {
            "nodes": [{ "id": "rust" }, { "id": "cargo" }, { "id": "egui" }],
            "edges": [
                { "source": "rust", "target": "cargo", "weight": 3 },
                { "source": "rust", "target": "egui" }
            ]
        }
    }))
    .unwrap()
}
