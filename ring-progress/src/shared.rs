//! A lock-guarded handle for driving one indicator from several threads.
//!
//! ## Usage
//!
//! Hand clones to worker threads that report progress while the UI thread
//! keeps ticking and rendering.

use std::{sync::Arc, time::Instant};

use parking_lot::Mutex;
use ring_ui::{DrawSurface, PxSize};

use crate::{RingProgress, RingProgressError};

/// Shared, cloneable handle to a [`RingProgress`].
///
/// Every call takes the same lock, so `progress` and `total` are never seen
/// half-updated. The progress listener and the [`ring_ui::Invalidator`] fire
/// after the lock is released, so both may call back into the handle. Only
/// the closures passed to [`SharedRingProgress::with`] and
/// [`SharedRingProgress::with_mut`] run under the lock and must not.
#[derive(Clone)]
pub struct SharedRingProgress {
    inner: Arc<Mutex<RingProgress>>,
}

impl SharedRingProgress {
    /// Wraps an indicator.
    pub fn new(ring: RingProgress) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ring)),
        }
    }

    /// Runs `f` with shared access to the indicator.
    pub fn with<R>(&self, f: impl FnOnce(&RingProgress) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Runs `f` with exclusive access to the indicator.
    ///
    /// Notifications raised inside `f` are fired once the lock is released;
    /// the listener then sees only the last progress value `f` produced.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut RingProgress) -> R) -> R {
        let (result, notify) = self.inner.lock().held(f);
        notify.dispatch();
        result
    }

    /// See [`RingProgress::set_progress`].
    pub fn set_progress(&self, progress: i32) {
        self.with_mut(|ring| ring.set_progress(progress));
    }

    /// See [`RingProgress::progress`].
    pub fn progress(&self) -> i32 {
        self.inner.lock().progress()
    }

    /// See [`RingProgress::set_total`].
    pub fn set_total(&self, total: i32) -> Result<(), RingProgressError> {
        self.with_mut(|ring| ring.set_total(total))
    }

    /// See [`RingProgress::total`].
    pub fn total(&self) -> i32 {
        self.inner.lock().total()
    }

    /// Reads `(progress, total)` under one lock.
    pub fn snapshot(&self) -> (i32, i32) {
        let ring = self.inner.lock();
        (ring.progress(), ring.total())
    }

    /// See [`RingProgress::replay`].
    pub fn replay(&self) {
        self.with_mut(RingProgress::replay);
    }

    /// See [`RingProgress::tick`].
    pub fn tick(&self, now: Instant) -> bool {
        self.with_mut(|ring| ring.tick(now))
    }

    /// See [`RingProgress::is_animating`].
    pub fn is_animating(&self) -> bool {
        self.inner.lock().is_animating()
    }

    /// See [`RingProgress::render`].
    pub fn render(&self, surface: &mut dyn DrawSurface, bounds: PxSize) {
        self.inner.lock().render(surface, bounds);
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            mpsc,
        },
        thread,
        time::Duration,
    };

    use ring_ui::testing::RecordingSurface;

    use super::*;
    use crate::RingProgressArgs;

    #[test]
    fn test_concurrent_setters_keep_invariant() {
        let shared = SharedRingProgress::new(RingProgress::new(
            RingProgressArgs::default().animate(false),
        ));

        let writers: Vec<_> = (0..4)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for step in 0..200 {
                        if worker % 2 == 0 {
                            shared.set_progress(step * 3);
                        } else {
                            shared
                                .set_total(50 + (step % 100))
                                .expect("positive total");
                        }
                    }
                })
            })
            .collect();

        for _ in 0..500 {
            let (progress, total) = shared.snapshot();
            assert!(total > 0);
            assert!((0..=total).contains(&progress));
        }
        for writer in writers {
            writer.join().expect("writer thread panicked");
        }

        let (progress, total) = shared.snapshot();
        assert!(progress <= total);
    }

    #[test]
    fn test_callbacks_can_read_back_through_handle() {
        let slot: Arc<Mutex<Option<SharedRingProgress>>> = Arc::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let repaints = Arc::new(AtomicUsize::new(0));

        let listener_slot = Arc::clone(&slot);
        let sink = Arc::clone(&seen);
        let args = RingProgressArgs::default()
            .animate(false)
            .on_progress_changed(move |value| {
                let handle = listener_slot.lock().clone();
                if let Some(handle) = handle {
                    sink.lock().push((value, handle.total()));
                }
            });

        let repaint_slot = Arc::clone(&slot);
        let counter = Arc::clone(&repaints);
        let ring = RingProgress::new(args).with_invalidator(Arc::new(move || {
            let handle = repaint_slot.lock().clone();
            if let Some(handle) = handle {
                let mut surface = RecordingSurface::default();
                handle.render(&mut surface, PxSize::from([48, 48]));
                counter.fetch_add(1, Ordering::SeqCst);
            }
        }));

        let shared = SharedRingProgress::new(ring);
        *slot.lock() = Some(shared.clone());

        let (done_tx, done_rx) = mpsc::channel();
        let worker = {
            let shared = shared.clone();
            thread::spawn(move || {
                shared.set_progress(10);
                shared.set_total(20).expect("positive total");
                shared.replay();
                shared.tick(Instant::now());
                let _ = done_tx.send(());
            })
        };
        assert!(
            done_rx.recv_timeout(Duration::from_secs(3)).is_ok(),
            "callback re-entering the handle blocked"
        );
        worker.join().expect("worker thread panicked");

        assert_eq!(*seen.lock(), vec![(10, 100), (0, 20)]);
        assert_eq!(repaints.load(Ordering::SeqCst), 4);

        slot.lock().take();
    }

    #[test]
    fn test_with_mut_fires_last_value_after_unlock() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let shared = SharedRingProgress::new(RingProgress::new(
            RingProgressArgs::default()
                .animate(false)
                .on_progress_changed(move |value| sink.lock().push(value)),
        ));

        shared.with_mut(|ring| {
            ring.set_progress(30);
            ring.set_progress(45);
        });
        assert_eq!(*seen.lock(), vec![45]);
    }

    #[test]
    fn test_tick_and_render_through_handle() {
        let shared = SharedRingProgress::new(RingProgress::new(RingProgressArgs::default()));
        shared.set_progress(40);
        assert!(shared.is_animating());

        let start = Instant::now();
        shared.tick(start);
        shared.tick(start + std::time::Duration::from_secs(1));
        assert_eq!(shared.progress(), 40);
        assert!(!shared.is_animating());

        let mut surface = RecordingSurface::default();
        shared.render(&mut surface, PxSize::from([90, 90]));
        assert_eq!(surface.texts()[0].text, "40%");
        assert_eq!(shared.with(|ring| ring.sweep_angle_degrees()), 144);

        shared.with_mut(|ring| ring.replay());
        assert_eq!(shared.progress(), 0);
        shared.replay();
        assert_eq!(shared.with(|ring| ring.target_progress()), 0);
    }
}
