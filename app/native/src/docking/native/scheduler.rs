//! Cooldown scheduling for the docking guard.
//!
//! The guard's clear must run after a delay, never synchronously, so the
//! platform's re-entrant move callback lands while the guard is still
//! armed. The scheduler is a seam: production uses [`TokioScheduler`] on
//! the shell's runtime, tests use [`ManualScheduler`] and fire the pending
//! callbacks deterministically without real timers.

use std::time::Duration;

use parking_lot::Mutex;

/// A deferred, boxed callback.
pub type ScheduledCallback = Box<dyn FnOnce() + Send + 'static>;

/// Schedules callbacks to run after a delay.
pub trait CooldownScheduler: Send + Sync {
    /// Runs `callback` once, `delay` from now.
    fn schedule(&self, delay: Duration, callback: ScheduledCallback);
}

impl<S: CooldownScheduler + ?Sized> CooldownScheduler for std::sync::Arc<S> {
    fn schedule(&self, delay: Duration, callback: ScheduledCallback) {
        (**self).schedule(delay, callback);
    }
}

// ============================================================================
// Tokio Scheduler
// ============================================================================

/// Scheduler backed by the shell's tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: tokio::runtime::Handle,
}

impl TokioScheduler {
    /// Creates a scheduler that spawns onto the given runtime handle.
    #[must_use]
    pub const fn new(handle: tokio::runtime::Handle) -> Self { Self { handle } }

    /// Creates a scheduler on the current runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime context.
    #[must_use]
    pub fn current() -> Self { Self::new(tokio::runtime::Handle::current()) }
}

impl CooldownScheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, callback: ScheduledCallback) {
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
    }
}

// ============================================================================
// Manual Scheduler
// ============================================================================

/// Deterministic scheduler for tests.
///
/// Callbacks are queued instead of timed; [`ManualScheduler::fire_all`]
/// plays the cooldown expiring without waiting for a clock.
#[derive(Default)]
pub struct ManualScheduler {
    pending: Mutex<Vec<(Duration, ScheduledCallback)>>,
}

impl ManualScheduler {
    /// Creates an empty manual scheduler.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Returns the number of callbacks waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize { self.pending.lock().len() }

    /// Fires every pending callback in schedule order.
    ///
    /// Returns the number of callbacks fired.
    pub fn fire_all(&self) -> usize {
        let drained: Vec<_> = self.pending.lock().drain(..).collect();
        let count = drained.len();
        for (_, callback) in drained {
            callback();
        }
        count
    }

    /// Drops every pending callback without firing it.
    pub fn discard_all(&self) { self.pending.lock().clear(); }
}

impl CooldownScheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, callback: ScheduledCallback) {
        self.pending.lock().push((delay, callback));
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("pending", &self.pending_count())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_manual_scheduler_defers_callbacks() {
        let scheduler = ManualScheduler::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let fired_clone = Arc::clone(&fired);
        scheduler.schedule(
            Duration::from_millis(100),
            Box::new(move || {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            }),
        );

        // Nothing runs until fired explicitly
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert_eq!(scheduler.pending_count(), 1);

        assert_eq!(scheduler.fire_all(), 1);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_manual_scheduler_fires_in_order() {
        let scheduler = ManualScheduler::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let order = Arc::clone(&order);
            scheduler.schedule(
                Duration::from_millis(100),
                Box::new(move || order.lock().push(i)),
            );
        }

        scheduler.fire_all();
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_manual_scheduler_discard() {
        let scheduler = ManualScheduler::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let fired_clone = Arc::clone(&fired);
        scheduler.schedule(
            Duration::from_millis(100),
            Box::new(move || {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            }),
        );

        scheduler.discard_all();
        assert_eq!(scheduler.fire_all(), 0);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_tokio_scheduler_fires_after_delay() {
        let scheduler = TokioScheduler::current();
        let (tx, rx) = tokio::sync::oneshot::channel();

        scheduler.schedule(
            Duration::from_millis(1),
            Box::new(move || {
                let _ = tx.send(());
            }),
        );

        tokio::time::timeout(Duration::from_secs(1), rx)
            .await
            .expect("callback should fire within the timeout")
            .expect("callback should send");
    }
}
