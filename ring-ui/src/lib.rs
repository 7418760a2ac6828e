//! Host seam for the ring progress indicator.
//!
//! The component crate never talks to a concrete toolkit. It draws through
//! [`DrawSurface`], asks for theme colors through [`ColorResolver`] and
//! requests repaints through [`Invalidator`]. A host implements those three
//! traits over its canvas, resource tables and frame scheduler.
//!
//! # Units
//!
//! Bounds and text measurements are physical pixels ([`Px`], [`PxSize`]).
//! Drawing math uses `f32`.
//!
//! # Logging
//!
//! Everything logs through `tracing`. Hosts without a subscriber of their own
//! can call [`logging::init_tracing`].
//!
//! # Testing
//!
//! The `testing` feature exposes [`testing::RecordingSurface`], a surface that
//! records draw calls and measures text with a fixed glyph metric.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod draw;
pub mod host;
pub mod logging;
pub mod prop;
pub mod px;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use crate::{
    color::Color,
    draw::{ArcCommand, DrawSurface, StrokeBrush, StrokeCap, TextBrush, TextCommand},
    host::{ColorResolver, ColorRole, Invalidator, RedrawFlag},
    prop::CallbackWith,
    px::{Px, PxSize},
};
