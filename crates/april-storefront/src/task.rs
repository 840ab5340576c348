//! Timers tied to the lifetime of their owner.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::info;

/// A spawned tokio task that is aborted when dropped.
///
/// Views hold one of these for every timer they start, so tearing the view
/// down stops the timer before it can touch state nobody is watching.
#[derive(Debug)]
pub struct ScopedTask {
    label: &'static str,
    handle: JoinHandle<()>,
}

impl ScopedTask {
    /// Spawn a future. Must be called from within a tokio runtime.
    pub fn spawn<F>(label: &'static str, future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!(task = label, "scoped task started");
        Self {
            label,
            handle: tokio::spawn(future),
        }
    }

    /// Run `f` once after `delay`.
    pub fn delay<F>(label: &'static str, delay: Duration, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::spawn(label, async move {
            time::sleep(delay).await;
            f();
        })
    }

    /// Run `f` every `period`, first after one full period.
    pub fn every<F>(label: &'static str, period: Duration, mut f: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self::spawn(label, async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                f();
            }
        })
    }

    /// Whether the task has run to completion (or been aborted).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Name given at spawn time.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Stop the task now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for ScopedTask {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            info!(task = self.label, "scoped task cancelled");
        }
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_delay_fires_once() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let task = ScopedTask::delay("once", Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        time::sleep(Duration::from_millis(50)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        time::sleep(Duration::from_millis(100)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_delay() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let task = ScopedTask::delay("dropped", Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        drop(task);
        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_repeats_until_cancelled() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let task = ScopedTask::every("tick", Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(task.label(), "tick");

        time::sleep(Duration::from_millis(350)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 3);

        task.cancel();
        time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }
}
