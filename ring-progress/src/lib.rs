//! A ring (circular) progress indicator.
//!
//! The indicator draws a full track ring, a progress arc whose sweep is
//! proportional to `progress / total`, and optionally a centered percentage
//! label. Progress changes can be animated linearly.
//!
//! # Host integration
//!
//! The component does not own a window or a frame loop. The host:
//!
//! - calls [`RingProgress::render`] with its [`ring_ui::DrawSurface`] and the
//!   resolved bounds whenever it repaints,
//! - calls [`RingProgress::tick`] (or [`RingProgress::on_tick`] with an
//!   elapsed fraction) every frame while [`RingProgress::is_animating`] is
//!   true,
//! - provides an [`ring_ui::Invalidator`] so the component can ask for
//!   repaints, and a [`ring_ui::ColorResolver`] for theme colors.
//!
//! ```
//! use std::{sync::Arc, time::{Duration, Instant}};
//!
//! use ring_progress::{RingProgress, RingProgressArgs};
//! use ring_ui::RedrawFlag;
//!
//! let redraw = Arc::new(RedrawFlag::new());
//! let mut ring = RingProgress::new(RingProgressArgs::default())
//!     .with_invalidator(redraw.clone());
//!
//! ring.set_progress(60);
//! let start = Instant::now();
//! ring.tick(start);
//! ring.tick(start + Duration::from_millis(500));
//! assert_eq!(ring.progress(), 30);
//! assert!(redraw.take());
//! ```
//!
//! # Threads
//!
//! [`SharedRingProgress`] puts one indicator behind a lock for hosts that
//! report progress from worker threads.
#![deny(missing_docs, clippy::unwrap_used)]

mod error;
pub mod ring_progress;
pub mod shared;
pub mod theme;

pub use crate::{
    error::RingProgressError,
    ring_progress::{
        RingProgress, RingProgressArgs, RingProgressAttrs, RingProgressDefaults, percent_label,
        sweep_angle_degrees,
    },
    shared::SharedRingProgress,
    theme::RingTheme,
};
