// src/task.rs
//
// Background requests.
//
// A `TaskSlot` owns one kind of request for one page, e.g.
// (Results, Preview). Each `start()` bumps the slot's generation and hands
// out a `Ticket`. Workers complete the ticket; only the newest generation
// is ever delivered, so a slow old response can't overwrite a newer one.
// Nothing is aborted: stale work simply runs to completion and is dropped.

use std::fmt;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};
use std::thread;

use crate::config::options::PageKind;

/// Runs jobs somewhere. The GUI uses threads; tests run jobs inline.
pub trait Spawner: Send + Sync + 'static {
    fn spawn(&self, job: Box<dyn FnOnce() + Send + 'static>);
}

/// One OS thread per job, then wake the UI.
pub struct ThreadSpawner {
    waker: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl ThreadSpawner {
    pub fn new() -> Self {
        Self { waker: None }
    }

    /// `waker` runs after each job, e.g. to request a repaint.
    pub fn with_waker(waker: impl Fn() + Send + Sync + 'static) -> Self {
        Self { waker: Some(Arc::new(waker)) }
    }
}

impl Default for ThreadSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spawner for ThreadSpawner {
    fn spawn(&self, job: Box<dyn FnOnce() + Send + 'static>) {
        let waker = self.waker.clone();
        thread::spawn(move || {
            job();
            if let Some(w) = waker {
                w();
            }
        });
    }
}

/// Runs the job on the caller's thread before returning.
#[derive(Default)]
pub struct InlineSpawner;

impl Spawner for InlineSpawner {
    fn spawn(&self, job: Box<dyn FnOnce() + Send + 'static>) {
        job();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Scrape,
    Preview,
    Delete,
    Analyze,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskKey {
    pub page: PageKind,
    pub kind: RequestKind,
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.page, self.kind)
    }
}

type Mailbox<T> = Arc<Mutex<Option<(u64, T)>>>;

pub struct TaskSlot<T> {
    key: TaskKey,
    current: Arc<AtomicU64>,
    mailbox: Mailbox<T>,
    in_flight: bool,
}

impl<T: Send + 'static> TaskSlot<T> {
    pub fn new(page: PageKind, kind: RequestKind) -> Self {
        Self {
            key: TaskKey { page, kind },
            current: Arc::new(AtomicU64::new(0)),
            mailbox: Arc::new(Mutex::new(None)),
            in_flight: false,
        }
    }

    pub fn key(&self) -> TaskKey {
        self.key
    }

    pub fn generation(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Supersede whatever is in flight and issue a fresh ticket.
    pub fn start(&mut self) -> Ticket<T> {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        if self.in_flight {
            logd!("Task: {} superseded, now gen={}", self.key, generation);
        }
        self.in_flight = true;
        Ticket {
            key: self.key,
            generation,
            current: self.current.clone(),
            mailbox: self.mailbox.clone(),
        }
    }

    /// Convenience: start and run `work` on `spawner`.
    pub fn run<F>(&mut self, spawner: &dyn Spawner, work: F)
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let ticket = self.start();
        spawner.spawn(Box::new(move || ticket.complete(work())));
    }

    /// Take the newest result, if it has landed.
    pub fn poll(&mut self) -> Option<T> {
        let delivered = match self.mailbox.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        let (generation, value) = delivered?;

        if generation != self.generation() {
            logd!("Task: {} dropped stale gen={}", self.key, generation);
            return None;
        }
        self.in_flight = false;
        Some(value)
    }
}

/// Handed to the worker; delivers at most one value.
pub struct Ticket<T> {
    key: TaskKey,
    generation: u64,
    current: Arc<AtomicU64>,
    mailbox: Mailbox<T>,
}

impl<T> Ticket<T> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_stale(&self) -> bool {
        self.current.load(Ordering::SeqCst) != self.generation
    }

    pub fn complete(self, value: T) {
        let mut slot = match self.mailbox.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        // checked under the lock: a newer ticket's value may already be in the slot
        if self.is_stale() {
            logd!("Task: {} gen={} finished after being superseded", self.key, self.generation);
            return;
        }
        *slot = Some((self.generation, value));
    }
}
