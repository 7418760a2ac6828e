//! Capabilities the host environment provides to components.
//!
//! ## Usage
//!
//! Implement [`ColorResolver`] over the host theme and [`Invalidator`] over
//! the host's "schedule a repaint" primitive. Closures implement both.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::Color;

/// Logical color roles a component may ask the host to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Track (background) ring of a progress indicator.
    RingTrack,
    /// Filled (foreground) arc of a progress indicator and its label.
    RingIndicator,
}

/// Resolves theme colors by logical role.
///
/// Whatever branching the host needs to find a color (API levels, light or
/// dark theme, resource tables) stays behind this trait.
pub trait ColorResolver {
    /// Returns the color for `role`.
    fn resolve(&self, role: ColorRole) -> Color;
}

impl<F> ColorResolver for F
where
    F: Fn(ColorRole) -> Color,
{
    fn resolve(&self, role: ColorRole) -> Color {
        self(role)
    }
}

/// Requests that the host repaint the component.
///
/// May be called from any thread; the host coalesces requests into its next
/// frame.
pub trait Invalidator: Send + Sync {
    /// Schedules a repaint.
    fn invalidate(&self);
}

impl<F> Invalidator for F
where
    F: Fn() + Send + Sync,
{
    fn invalidate(&self) {
        self()
    }
}

/// An [`Invalidator`] that only records that a repaint was requested.
///
/// Hosts driving their own frame loop poll it with [`RedrawFlag::take`].
#[derive(Debug, Default)]
pub struct RedrawFlag {
    requested: AtomicBool,
}

impl RedrawFlag {
    /// Creates a cleared flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a repaint was requested and clears the flag.
    pub fn take(&self) -> bool {
        self.requested.swap(false, Ordering::AcqRel)
    }

    /// Returns whether a repaint is pending without clearing it.
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}

impl Invalidator for RedrawFlag {
    fn invalidate(&self) {
        self.requested.store(true, Ordering::Release);
    }
}
