// tests/task_slots.rs
//
// Keyed tasks: only the newest generation is delivered.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

use social_dash::{
    config::options::PageKind,
    task::{InlineSpawner, RequestKind, TaskSlot, ThreadSpawner},
};

fn slot() -> TaskSlot<&'static str> {
    TaskSlot::new(PageKind::Results, RequestKind::Preview)
}

#[test]
fn late_old_response_is_dropped() {
    let mut s = slot();
    let first = s.start();
    let second = s.start();
    assert!(first.is_stale());
    assert!(!second.is_stale());

    // newer finishes first, older straggles in afterwards
    second.complete("new");
    first.complete("old");

    assert_eq!(s.poll(), Some("new"));
    assert_eq!(s.poll(), None);
    assert!(!s.is_busy());
}

#[test]
fn old_response_before_new_is_still_dropped() {
    let mut s = slot();
    let first = s.start();
    let second = s.start();

    first.complete("old");
    assert_eq!(s.poll(), None);
    assert!(s.is_busy());

    second.complete("new");
    assert_eq!(s.poll(), Some("new"));
}

#[test]
fn generations_count_up() {
    let mut s = slot();
    assert_eq!(s.generation(), 0);
    let t = s.start();
    assert_eq!(t.generation(), 1);
    assert_eq!(s.generation(), 1);
    assert_eq!(s.key().to_string(), "Results/Preview");
}

#[test]
fn inline_spawner_delivers_immediately() {
    let mut s = slot();
    s.run(&InlineSpawner, || "done");
    assert_eq!(s.poll(), Some("done"));
}

#[test]
fn thread_spawner_wakes_after_job() {
    let woke = Arc::new(AtomicUsize::new(0));
    let w = woke.clone();
    let spawner = ThreadSpawner::with_waker(move || {
        w.fetch_add(1, Ordering::SeqCst);
    });

    let mut s = slot();
    s.run(&spawner, || "from thread");

    let deadline = Instant::now() + Duration::from_secs(5);
    let got = loop {
        if let Some(v) = s.poll() {
            break v;
        }
        assert!(Instant::now() < deadline, "worker never delivered");
        std::thread::sleep(Duration::from_millis(5));
    };
    assert_eq!(got, "from thread");

    while woke.load(Ordering::SeqCst) == 0 {
        assert!(Instant::now() < deadline, "waker never ran");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn racing_workers_never_bury_the_newest_result() {
    for _ in 0..20 {
        let mut s: TaskSlot<usize> = TaskSlot::new(PageKind::Analysis, RequestKind::Analyze);
        let mut workers = Vec::new();
        for i in 0..64 {
            let ticket = s.start();
            workers.push(std::thread::spawn(move || ticket.complete(i)));
        }
        for w in workers {
            w.join().unwrap();
        }
        assert_eq!(s.poll(), Some(63));
        assert!(!s.is_busy());
    }
}
