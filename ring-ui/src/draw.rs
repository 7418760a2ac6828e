//! Draw commands and the surface they are issued against.
//!
//! ## Usage
//!
//! Hosts implement [`DrawSurface`] on top of their canvas; components build
//! brushes once and emit [`ArcCommand`]s and [`TextCommand`]s during render.

use crate::{Color, PxSize};

/// Stroke cap used for arc ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat stroke ends.
    #[default]
    Butt,
    /// Rounded stroke ends.
    Round,
}

/// Stroke-style paint for arcs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeBrush {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in physical pixels.
    pub stroke_width_px: f32,
    /// Stroke cap applied to arc ends.
    pub cap: StrokeCap,
    /// Whether edges are anti-aliased.
    pub anti_alias: bool,
}

impl StrokeBrush {
    /// Creates an anti-aliased stroke brush with flat caps.
    pub fn new(color: Color, stroke_width_px: f32) -> Self {
        Self {
            color,
            stroke_width_px,
            cap: StrokeCap::Butt,
            anti_alias: true,
        }
    }

    /// Replaces the stroke cap.
    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }
}

/// Fill-style paint for text.
///
/// Text is always centered horizontally on its command origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBrush {
    /// Fill color.
    pub color: Color,
    /// Text size in physical pixels.
    pub text_size_px: f32,
    /// Whether glyph edges are anti-aliased.
    pub anti_alias: bool,
}

impl TextBrush {
    /// Creates an anti-aliased, center-aligned text brush.
    pub fn centered(color: Color, text_size_px: f32) -> Self {
        Self {
            color,
            text_size_px,
            anti_alias: true,
        }
    }
}

/// Draw command for a circular arc stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCommand {
    /// Paint used for the stroke.
    pub brush: StrokeBrush,
    /// Circle center `[x, y]` in physical pixels.
    pub center: [f32; 2],
    /// Circle radius measured to the middle of the stroke.
    pub radius: f32,
    /// Start angle in degrees, where 0° is at 3 o'clock.
    pub start_angle_degrees: f32,
    /// Sweep angle in degrees, in the clockwise direction.
    pub sweep_angle_degrees: f32,
}

impl ArcCommand {
    /// Bounding oval of the circle as `[left, top, right, bottom]`.
    pub fn oval(&self) -> [f32; 4] {
        let [cx, cy] = self.center;
        [
            cx - self.radius,
            cy - self.radius,
            cx + self.radius,
            cy + self.radius,
        ]
    }
}

/// Draw command for a single line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    /// Text to draw.
    pub text: String,
    /// Paint used for the glyphs.
    pub brush: TextBrush,
    /// Anchor `[center_x, baseline_y]`.
    pub origin: [f32; 2],
}

/// A drawing surface provided by the host toolkit.
///
/// Arcs and text are primitives of the host; components only decide what to
/// draw and where.
pub trait DrawSurface {
    /// Strokes an arc.
    fn draw_arc(&mut self, command: &ArcCommand);

    /// Measures the tight bounds of `text` drawn with `brush`.
    fn measure_text(&mut self, text: &str, brush: &TextBrush) -> PxSize;

    /// Draws a line of text.
    fn draw_text(&mut self, command: &TextCommand);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_oval_surrounds_center() {
        let arc = ArcCommand {
            brush: StrokeBrush::new(Color::BLACK, 6.0),
            center: [50.0, 40.0],
            radius: 47.0,
            start_angle_degrees: -90.0,
            sweep_angle_degrees: 180.0,
        };
        assert_eq!(arc.oval(), [3.0, -7.0, 97.0, 87.0]);
    }

    #[test]
    fn test_brush_defaults() {
        let stroke = StrokeBrush::new(Color::WHITE, 4.0).with_cap(StrokeCap::Round);
        assert!(stroke.anti_alias);
        assert_eq!(stroke.cap, StrokeCap::Round);

        let text = TextBrush::centered(Color::WHITE, 60.0);
        assert_eq!(text.text_size_px, 60.0);
        assert!(text.anti_alias);
    }
}
