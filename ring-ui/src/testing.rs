//! Recording surface for component tests.
//!
//! Enabled with the `testing` feature.

use crate::{
    PxSize,
    draw::{ArcCommand, DrawSurface, TextBrush, TextCommand},
    px::Px,
};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// An arc stroke.
    Arc(ArcCommand),
    /// A text draw.
    Text(TextCommand),
}

/// A [`DrawSurface`] that records every call.
///
/// Text is measured with a fixed metric: every glyph is
/// `glyph_width` wide and `glyph_height` tall.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    glyph_width: Px,
    glyph_height: Px,
    measure_calls: usize,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(Px(10), Px(20))
    }
}

impl RecordingSurface {
    /// Creates a surface with the given glyph metric.
    pub fn new(glyph_width: Px, glyph_height: Px) -> Self {
        Self {
            ops: Vec::new(),
            glyph_width,
            glyph_height,
            measure_calls: 0,
        }
    }

    /// All recorded operations in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Recorded arcs in call order.
    pub fn arcs(&self) -> Vec<&ArcCommand> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Arc(arc) => Some(arc),
                DrawOp::Text(_) => None,
            })
            .collect()
    }

    /// Recorded text draws in call order.
    pub fn texts(&self) -> Vec<&TextCommand> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(text) => Some(text),
                DrawOp::Arc(_) => None,
            })
            .collect()
    }

    /// Number of `measure_text` calls so far.
    pub fn measure_calls(&self) -> usize {
        self.measure_calls
    }

    /// Drops recorded operations.
    pub fn clear(&mut self) {
        self.ops.clear();
        self.measure_calls = 0;
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_arc(&mut self, command: &ArcCommand) {
        self.ops.push(DrawOp::Arc(*command));
    }

    fn measure_text(&mut self, text: &str, _brush: &TextBrush) -> PxSize {
        self.measure_calls += 1;
        let glyphs = text.chars().count() as i32;
        PxSize::new(self.glyph_width * glyphs, self.glyph_height)
    }

    fn draw_text(&mut self, command: &TextCommand) {
        self.ops.push(DrawOp::Text(command.clone()));
    }
}
