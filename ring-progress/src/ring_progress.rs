//! A ring-shaped progress indicator.
//!
//! ## Usage
//!
//! Show how far a task has come as a filled arc over a track ring, with an
//! optional percentage label in the middle.

mod animation;
mod attrs;

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use derive_setters::Setters;
use ring_ui::{
    ArcCommand, CallbackWith, Color, ColorResolver, ColorRole, DrawSurface, Invalidator, PxSize,
    StrokeBrush, StrokeCap, TextBrush, TextCommand,
};
use tracing::{debug, trace, warn};

use crate::{RingProgressError, theme::RingTheme};

use animation::ProgressAnimation;
pub use attrs::RingProgressAttrs;

/// Defaults for [`RingProgress`].
pub struct RingProgressDefaults;

impl RingProgressDefaults {
    /// Stroke width of both rings, in physical pixels.
    pub const STROKE_WIDTH_PX: f32 = 6.0;
    /// Value representing 100 %.
    pub const TOTAL: i32 = 100;
    /// Start of the progress arc; -90° is 12 o'clock.
    pub const START_ANGLE_DEGREES: i32 = -90;
    /// Label text size, in physical pixels.
    pub const LABEL_TEXT_SIZE_PX: f32 = 60.0;
    /// Length of a progress transition.
    pub const ANIMATION_DURATION: Duration = Duration::from_millis(1000);
}

/// Arguments for [`RingProgress`].
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct RingProgressArgs {
    /// Color of the track ring.
    pub background_color: Color,
    /// Color of the progress arc and the label.
    pub foreground_color: Color,
    /// Stroke width of both rings, in physical pixels.
    pub stroke_width_px: f32,
    /// Stroke cap of both rings.
    pub stroke_cap: StrokeCap,
    /// Value representing 100 %. Must be greater than zero.
    pub total: i32,
    /// Degrees where the progress arc begins, where 0° is 3 o'clock.
    pub start_angle_degrees: i32,
    /// Initial progress. Clamped into `[0, total]`.
    pub progress: i32,
    /// Whether the percentage label is drawn.
    pub show_label: bool,
    /// Label text size, in physical pixels.
    pub label_text_size_px: f32,
    /// Whether progress changes are animated.
    pub animate: bool,
    /// Length of a progress transition.
    pub animation_duration: Duration,
    /// Called whenever the displayed progress value changes.
    #[setters(skip)]
    pub on_progress_changed: Option<CallbackWith<i32>>,
}

impl Default for RingProgressArgs {
    fn default() -> Self {
        Self::themed(&RingTheme::default())
    }
}

impl RingProgressArgs {
    /// Default arguments with colors taken from `resolver`.
    pub fn themed(resolver: &dyn ColorResolver) -> Self {
        Self {
            background_color: resolver.resolve(ColorRole::RingTrack),
            foreground_color: resolver.resolve(ColorRole::RingIndicator),
            stroke_width_px: RingProgressDefaults::STROKE_WIDTH_PX,
            stroke_cap: StrokeCap::default(),
            total: RingProgressDefaults::TOTAL,
            start_angle_degrees: RingProgressDefaults::START_ANGLE_DEGREES,
            progress: 0,
            show_label: true,
            label_text_size_px: RingProgressDefaults::LABEL_TEXT_SIZE_PX,
            animate: true,
            animation_duration: RingProgressDefaults::ANIMATION_DURATION,
            on_progress_changed: None,
        }
    }

    /// Sets the listener called whenever the displayed progress changes.
    ///
    /// The listener runs after the change is complete. Behind a
    /// [`SharedRingProgress`](crate::SharedRingProgress) it runs with the lock
    /// released, so it may read the handle back.
    pub fn on_progress_changed<F>(mut self, handler: F) -> Self
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.on_progress_changed = Some(CallbackWith::new(handler));
        self
    }

    /// Checks the values that have no meaningful fallback at draw time.
    pub fn validate(&self) -> Result<(), RingProgressError> {
        Self::check_total(self.total)?;
        Self::check_stroke_width(self.stroke_width_px)?;
        Ok(())
    }
}

/// Sweep of the progress arc in whole degrees.
///
/// `progress` is clamped into `[0, total]` first. A full ring when
/// `progress == total`, otherwise `360 * progress / total` truncated toward
/// zero. A non-positive `total` draws nothing.
pub fn sweep_angle_degrees(progress: i32, total: i32) -> i32 {
    if total <= 0 {
        return 0;
    }
    let progress = clamp_progress(progress, total);
    if progress == total {
        return 360;
    }
    (360 * i64::from(progress) / i64::from(total)) as i32
}

/// Percentage label text, e.g. `"33%"` for 1 of 3. Truncates, never rounds.
///
/// `progress` is clamped into `[0, total]`, so the label stays within
/// `"0%"..="100%"`.
pub fn percent_label(progress: i32, total: i32) -> String {
    if total <= 0 {
        return "0%".to_string();
    }
    let progress = clamp_progress(progress, total);
    format!("{}%", 100 * i64::from(progress) / i64::from(total))
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct RingBrushes {
    track: StrokeBrush,
    indicator: StrokeBrush,
    label: Option<TextBrush>,
}

impl RingBrushes {
    fn new(args: &RingProgressArgs) -> Self {
        Self {
            track: StrokeBrush::new(args.background_color, args.stroke_width_px)
                .with_cap(args.stroke_cap),
            indicator: StrokeBrush::new(args.foreground_color, args.stroke_width_px)
                .with_cap(args.stroke_cap),
            label: args
                .show_label
                .then(|| TextBrush::centered(args.foreground_color, args.label_text_size_px)),
        }
    }
}

/// Host notifications raised by one state change, fired once the change is
/// complete.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct PendingNotify {
    progress: Option<i32>,
    redraw: bool,
}

/// Notifications taken out of a [`RingProgress`], ready to fire without any
/// borrow of it.
#[must_use]
pub(crate) struct Notify {
    progress: Option<(i32, CallbackWith<i32>)>,
    invalidator: Option<Arc<dyn Invalidator>>,
}

impl Notify {
    /// Calls the progress listener, then requests a repaint.
    pub(crate) fn dispatch(self) {
        if let Some((value, listener)) = self.progress {
            listener.call(value);
        }
        if let Some(invalidator) = self.invalidator {
            invalidator.invalidate();
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum AnimationPhase {
    Idle,
    Animating(ProgressAnimation),
}

/// A ring progress indicator.
///
/// Holds the progress state and styling, renders them onto a host
/// [`DrawSurface`], and animates transitions when the host feeds it ticks.
///
/// `0 <= progress <= total` and `total > 0` hold after every call.
///
/// # Examples
///
/// ```
/// use ring_progress::{RingProgress, RingProgressArgs};
///
/// let mut ring = RingProgress::new(RingProgressArgs::default().animate(false));
/// ring.set_progress(150);
/// assert_eq!(ring.progress(), 100);
/// assert_eq!(ring.sweep_angle_degrees(), 360);
/// assert_eq!(ring.label_text().as_deref(), Some("100%"));
/// ```
pub struct RingProgress {
    args: RingProgressArgs,
    brushes: RingBrushes,
    progress: i32,
    total: i32,
    phase: AnimationPhase,
    invalidator: Option<Arc<dyn Invalidator>>,
    pending: PendingNotify,
    hold_notifications: bool,
}

impl RingProgress {
    /// Creates the indicator.
    ///
    /// Invalid `total` or stroke width are logged and replaced by their
    /// defaults. The initial progress is clamped and shown immediately.
    pub fn new(args: RingProgressArgs) -> Self {
        let mut args = args;
        if let Err(err) = RingProgressArgs::check_total(args.total) {
            warn!("{err}; using {}", RingProgressDefaults::TOTAL);
            args.total = RingProgressDefaults::TOTAL;
        }
        if let Err(err) = RingProgressArgs::check_stroke_width(args.stroke_width_px) {
            warn!("{err}; using {}", RingProgressDefaults::STROKE_WIDTH_PX);
            args.stroke_width_px = RingProgressDefaults::STROKE_WIDTH_PX;
        }

        let total = args.total;
        let progress = clamp_progress(args.progress, total);
        Self {
            brushes: RingBrushes::new(&args),
            args,
            progress,
            total,
            phase: AnimationPhase::Idle,
            invalidator: None,
            pending: PendingNotify::default(),
            hold_notifications: false,
        }
    }

    /// Creates the indicator from host style attributes.
    pub fn from_attrs(attrs: &RingProgressAttrs, resolver: &dyn ColorResolver) -> Self {
        Self::new(attrs.resolve(resolver))
    }

    /// Attaches the host's repaint hook.
    pub fn with_invalidator(mut self, invalidator: Arc<dyn Invalidator>) -> Self {
        self.invalidator = Some(invalidator);
        self
    }

    /// Replaces the host's repaint hook.
    pub fn set_invalidator(&mut self, invalidator: Option<Arc<dyn Invalidator>>) {
        self.invalidator = invalidator;
    }

    /// The arguments the indicator was built with.
    ///
    /// `total` and `progress` here are the construction values; use
    /// [`RingProgress::total`] and [`RingProgress::progress`] for the live
    /// state.
    pub fn args(&self) -> &RingProgressArgs {
        &self.args
    }

    /// Currently displayed progress.
    pub fn progress(&self) -> i32 {
        self.progress
    }

    /// Value representing 100 %.
    pub fn total(&self) -> i32 {
        self.total
    }

    /// Whether a transition is in flight.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, AnimationPhase::Animating(_))
    }

    /// Progress the running transition ends at, or the current progress.
    pub fn target_progress(&self) -> i32 {
        match &self.phase {
            AnimationPhase::Animating(animation) => animation.target(),
            AnimationPhase::Idle => self.progress,
        }
    }

    /// Sweep of the progress arc for the current state, in degrees.
    pub fn sweep_angle_degrees(&self) -> i32 {
        sweep_angle_degrees(self.progress, self.total)
    }

    /// Label for the current state, or `None` when the label is disabled.
    pub fn label_text(&self) -> Option<String> {
        self.brushes
            .label
            .map(|_| percent_label(self.progress, self.total))
    }

    /// Sets the progress, clamped into `[0, total]`.
    ///
    /// With animation enabled this replaces any running transition with a
    /// new one from the currently displayed value; otherwise the value is
    /// shown at once.
    pub fn set_progress(&mut self, progress: i32) {
        let effective = clamp_progress(progress, self.total);
        if effective != progress {
            debug!(
                requested = progress,
                effective,
                total = self.total,
                "Clamped ring progress"
            );
        }

        if self.args.animate {
            self.start_animation(self.progress, effective - self.progress);
        } else {
            self.phase = AnimationPhase::Idle;
            self.apply_progress(effective);
            self.invalidate();
        }
        self.flush_notifications();
    }

    /// Sets the value representing 100 %.
    ///
    /// Rejects non-positive totals and leaves the state untouched. Otherwise
    /// the current progress and any running transition are clamped to the
    /// new total and a repaint is requested.
    pub fn set_total(&mut self, total: i32) -> Result<(), RingProgressError> {
        RingProgressArgs::check_total(total)?;
        debug!(from = self.total, to = total, "Ring total changed");
        self.total = total;
        if let AnimationPhase::Animating(animation) = &mut self.phase {
            animation.clamp_to(total);
        }
        self.apply_progress(clamp_progress(self.progress, total));
        self.invalidate();
        self.flush_notifications();
        Ok(())
    }

    /// Restarts the fill animation from zero up to the displayed progress.
    ///
    /// Replays even when `animate` is off; it is an explicit request for the
    /// transition. A running transition is dropped and its remaining
    /// trajectory discarded.
    pub fn replay(&mut self) {
        let target = self.progress;
        self.apply_progress(0);
        self.start_animation(0, target);
        self.flush_notifications();
    }

    /// Advances the running transition to `fraction` of its duration.
    ///
    /// Returns whether the transition is still running afterwards. Without a
    /// transition this is a no-op returning `false`. A NaN fraction finishes
    /// the transition at its target.
    pub fn on_tick(&mut self, fraction: f32) -> bool {
        let AnimationPhase::Animating(animation) = &self.phase else {
            return false;
        };
        let value = animation.value_at(fraction);
        let finished = fraction.is_nan() || fraction >= 1.0;
        trace!(fraction, value, "Ring animation tick");

        if finished {
            debug!(value, "Ring animation finished");
            self.phase = AnimationPhase::Idle;
        }
        self.apply_progress(value);
        self.invalidate();
        self.flush_notifications();
        !finished
    }

    /// Advances the running transition from the wall clock.
    ///
    /// The first tick after a transition starts fixes its start time.
    pub fn tick(&mut self, now: Instant) -> bool {
        let fraction = match &mut self.phase {
            AnimationPhase::Animating(animation) => animation.fraction_at(now),
            AnimationPhase::Idle => return false,
        };
        self.on_tick(fraction)
    }

    /// Draws the track ring, the progress arc and the optional label.
    ///
    /// `bounds` is the already-resolved size of the component. Nothing is
    /// drawn for empty bounds.
    pub fn render(&self, surface: &mut dyn DrawSurface, bounds: PxSize) {
        if bounds.is_empty() {
            trace!(?bounds, "Skipping ring render for empty bounds");
            return;
        }

        let half_stroke = self.args.stroke_width_px / 2.0;
        let [width, height] = bounds.to_f32_arr2();
        let center = [width / 2.0, height / 2.0];
        let radius = center[0] - half_stroke;

        surface.draw_arc(&ArcCommand {
            brush: self.brushes.track,
            center,
            radius,
            start_angle_degrees: 0.0,
            sweep_angle_degrees: 360.0,
        });

        surface.draw_arc(&ArcCommand {
            brush: self.brushes.indicator,
            center,
            radius,
            start_angle_degrees: self.args.start_angle_degrees as f32,
            sweep_angle_degrees: self.sweep_angle_degrees() as f32,
        });

        if let Some(label_brush) = self.brushes.label {
            let text = percent_label(self.progress, self.total);
            let text_bounds = surface.measure_text(&text, &label_brush);
            let baseline = center[1] + (text_bounds.height / 2).to_f32();
            surface.draw_text(&TextCommand {
                text,
                brush: label_brush,
                origin: [center[0], baseline],
            });
        }
    }

    fn start_animation(&mut self, base: i32, delta: i32) {
        if self.is_animating() {
            debug!(from = self.progress, "Replacing running ring animation");
        }
        debug!(base, delta, "Ring animation started");
        self.phase = AnimationPhase::Animating(ProgressAnimation::new(
            base,
            delta,
            self.args.animation_duration,
        ));
        self.invalidate();
    }

    fn apply_progress(&mut self, progress: i32) {
        if self.progress == progress {
            return;
        }
        self.progress = progress;
        self.pending.progress = Some(progress);
    }

    fn invalidate(&mut self) {
        self.pending.redraw = true;
    }

    fn flush_notifications(&mut self) {
        if !self.hold_notifications {
            self.take_notify().dispatch();
        }
    }

    /// Runs `f` with notifications held back and returns them instead of
    /// firing them, so the caller can dispatch after releasing its lock.
    pub(crate) fn held<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> (R, Notify) {
        self.hold_notifications = true;
        let result = f(self);
        self.hold_notifications = false;
        (result, self.take_notify())
    }

    fn take_notify(&mut self) -> Notify {
        let pending = std::mem::take(&mut self.pending);
        Notify {
            progress: pending.progress.and_then(|value| {
                self.args
                    .on_progress_changed
                    .clone()
                    .map(|listener| (value, listener))
            }),
            invalidator: pending
                .redraw
                .then(|| self.invalidator.clone())
                .flatten(),
        }
    }
}

fn clamp_progress(progress: i32, total: i32) -> i32 {
    progress.clamp(0, total)
}
