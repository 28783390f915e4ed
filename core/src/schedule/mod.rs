//! Deferred-task seam for scheduled purges.
//!
//! Arming a purge at issue time goes through [`PurgeScheduler`] so tests can
//! decide exactly when armed tasks fire. [`TokioScheduler`] is the production
//! implementation; [`ManualScheduler`] queues tasks until a test drains them.

use std::sync::Mutex;
use std::time::Duration;

/// A deferred action armed by the ledger
pub type ScheduledTask = Box<dyn FnOnce() + Send + 'static>;

/// Arms deferred tasks to run after a delay
pub trait PurgeScheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: ScheduledTask);
}

/// Scheduler that runs tasks on detached tokio timers.
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

impl PurgeScheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask) {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

/// Scheduler that records armed tasks so tests fire them on demand
#[derive(Default)]
pub struct ManualScheduler {
    pending: Mutex<Vec<(Duration, ScheduledTask)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks armed but not yet fired
    pub fn pending_count(&self) -> usize {
        self.pending.lock().expect("scheduler lock poisoned").len()
    }

    /// Fire the oldest armed task. Returns false when nothing is pending.
    pub fn fire_one(&self) -> bool {
        let task = {
            let mut pending = self.pending.lock().expect("scheduler lock poisoned");
            if pending.is_empty() {
                return false;
            }
            pending.remove(0).1
        };
        task();
        true
    }

    /// Fire every armed task in arming order, regardless of delay
    pub fn fire_all(&self) {
        while self.fire_one() {}
    }
}

impl PurgeScheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask) {
        self.pending
            .lock()
            .expect("scheduler lock poisoned")
            .push((delay, task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_manual_scheduler_holds_tasks() {
        let scheduler = ManualScheduler::new();
        let fired = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let fired = fired.clone();
            scheduler.schedule(
                Duration::from_secs(300),
                Box::new(move || {
                    fired.fetch_add(1, Ordering::SeqCst);
                }),
            );
        }

        assert_eq!(scheduler.pending_count(), 2);
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        assert!(scheduler.fire_one());
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        scheduler.fire_all();
        assert_eq!(fired.load(Ordering::SeqCst), 2);
        assert!(!scheduler.fire_one());
    }

    #[tokio::test]
    async fn test_tokio_scheduler_fires_after_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let handle = fired.clone();

        TokioScheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                handle.fetch_add(1, Ordering::SeqCst);
            }),
        );

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
