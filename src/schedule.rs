//! Scheduled Tasks
//!
//! Cancellable one-shot and repeating timers behind a scheduler seam. The
//! browser implementation wraps `gloo-timers`; tests drive a manual queue
//! deterministically, so nothing in the app reaches for ad hoc timers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Handle to a scheduled task. `cancel` guarantees the callback never runs
/// again; dropping the handle leaves the task running.
#[derive(Clone)]
pub struct TaskHandle {
    canceled: Arc<AtomicBool>,
}

impl TaskHandle {
    fn new() -> Self {
        Self {
            canceled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Relaxed);
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Relaxed)
    }

    fn flag(&self) -> Arc<AtomicBool> {
        self.canceled.clone()
    }
}

pub trait Scheduler: Send + Sync {
    /// Runs `f` once after `delay_ms`, unless cancelled first.
    fn after(&self, delay_ms: u32, f: Box<dyn FnOnce() + Send>) -> TaskHandle;

    /// Runs `f` every `period_ms` until cancelled.
    fn every(&self, period_ms: u32, f: Box<dyn FnMut() + Send>) -> TaskHandle;
}

pub type SharedScheduler = Arc<dyn Scheduler>;

/// Get the injected scheduler from context.
pub fn use_scheduler() -> SharedScheduler {
    expect_context::<SharedScheduler>()
}

/// Production implementation on top of the browser event loop.
pub struct BrowserScheduler;

// Repeats via a self-rescheduling timeout: once the handle is cancelled the
// chain ends on the next tick and the browser timer is released.
fn tick(period_ms: u32, canceled: Arc<AtomicBool>, mut f: Box<dyn FnMut() + Send>) {
    Timeout::new(period_ms, move || {
        if canceled.load(Ordering::Relaxed) {
            return;
        }
        f();
        tick(period_ms, canceled, f);
    })
    .forget();
}

impl Scheduler for BrowserScheduler {
    fn after(&self, delay_ms: u32, f: Box<dyn FnOnce() + Send>) -> TaskHandle {
        let handle = TaskHandle::new();
        let canceled = handle.flag();
        Timeout::new(delay_ms, move || {
            if !canceled.load(Ordering::Relaxed) {
                f();
            }
        })
        .forget();
        handle
    }

    fn every(&self, period_ms: u32, f: Box<dyn FnMut() + Send>) -> TaskHandle {
        let handle = TaskHandle::new();
        tick(period_ms, handle.flag(), f);
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    enum TaskKind {
        Once(Option<Box<dyn FnOnce() + Send>>),
        Every(Box<dyn FnMut() + Send>),
    }

    struct ManualTask {
        handle: TaskHandle,
        kind: TaskKind,
    }

    /// Test scheduler: tasks fire only when the test calls `tick`.
    #[derive(Default)]
    struct ManualScheduler {
        tasks: Mutex<Vec<ManualTask>>,
    }

    impl ManualScheduler {
        /// Runs every live task once; spent and cancelled tasks are dropped.
        fn tick(&self) {
            let mut tasks = self.tasks.lock().unwrap();
            for task in tasks.iter_mut() {
                if task.handle.is_canceled() {
                    continue;
                }
                match &mut task.kind {
                    TaskKind::Once(slot) => {
                        if let Some(f) = slot.take() {
                            f();
                        }
                    }
                    TaskKind::Every(f) => f(),
                }
            }
            tasks.retain(|task| {
                !task.handle.is_canceled() && !matches!(task.kind, TaskKind::Once(None))
            });
        }

        fn pending(&self) -> usize {
            self.tasks.lock().unwrap().len()
        }
    }

    impl Scheduler for ManualScheduler {
        fn after(&self, _delay_ms: u32, f: Box<dyn FnOnce() + Send>) -> TaskHandle {
            let handle = TaskHandle::new();
            self.tasks.lock().unwrap().push(ManualTask {
                handle: handle.clone(),
                kind: TaskKind::Once(Some(f)),
            });
            handle
        }

        fn every(&self, _period_ms: u32, f: Box<dyn FnMut() + Send>) -> TaskHandle {
            let handle = TaskHandle::new();
            self.tasks.lock().unwrap().push(ManualTask {
                handle: handle.clone(),
                kind: TaskKind::Every(f),
            });
            handle
        }
    }

    fn counter() -> (Arc<Mutex<u32>>, impl Fn() + Send + Clone) {
        let count = Arc::new(Mutex::new(0));
        let bump = {
            let count = count.clone();
            move || *count.lock().unwrap() += 1
        };
        (count, bump)
    }

    #[test]
    fn one_shot_fires_exactly_once() {
        let scheduler = ManualScheduler::default();
        let (count, bump) = counter();
        scheduler.after(2000, Box::new(bump));

        scheduler.tick();
        scheduler.tick();
        assert_eq!(*count.lock().unwrap(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn cancel_suppresses_a_pending_task() {
        let scheduler = ManualScheduler::default();
        let (count, bump) = counter();
        let handle = scheduler.after(2000, Box::new(bump));

        handle.cancel();
        scheduler.tick();
        assert_eq!(*count.lock().unwrap(), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn repeating_task_runs_until_cancelled() {
        let scheduler = ManualScheduler::default();
        let (count, bump) = counter();
        let handle = scheduler.every(10_000, Box::new(bump));

        scheduler.tick();
        scheduler.tick();
        scheduler.tick();
        assert_eq!(*count.lock().unwrap(), 3);

        handle.cancel();
        scheduler.tick();
        assert_eq!(*count.lock().unwrap(), 3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn dropping_the_handle_keeps_the_task_alive() {
        let scheduler = ManualScheduler::default();
        let (count, bump) = counter();
        drop(scheduler.after(2000, Box::new(bump)));

        scheduler.tick();
        assert_eq!(*count.lock().unwrap(), 1);
    }
}
