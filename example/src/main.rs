//! Headless walkthrough of the ring progress indicator.
//!
//! Drives the indicator with a simulated 60 fps clock and logs every draw
//! call. Run with `RUST_LOG=info,ring_progress=debug` for state transitions.

use std::{
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

use ring_progress::{RingProgress, RingProgressAttrs, RingTheme, SharedRingProgress};
use ring_ui::{
    ArcCommand, Color, DrawSurface, Px, PxSize, RedrawFlag, TextBrush, TextCommand,
    logging::init_tracing,
};
use tracing::{info, warn};

const FRAME: Duration = Duration::from_millis(16);
const BOUNDS: PxSize = PxSize::new(Px(240), Px(240));

/// Surface that logs draw calls instead of rasterizing them.
struct LogSurface {
    frame: u32,
}

impl DrawSurface for LogSurface {
    fn draw_arc(&mut self, command: &ArcCommand) {
        info!(
            frame = self.frame,
            start = command.start_angle_degrees,
            sweep = command.sweep_angle_degrees,
            radius = command.radius,
            color = %format!("#{:08X}", command.brush.color.to_argb_u32()),
            "arc"
        );
    }

    fn measure_text(&mut self, text: &str, brush: &TextBrush) -> PxSize {
        let glyph_width = brush.text_size_px * 0.55;
        PxSize::new(
            Px::saturating_from_f32(glyph_width * text.chars().count() as f32),
            Px::saturating_from_f32(brush.text_size_px * 0.7),
        )
    }

    fn draw_text(&mut self, command: &TextCommand) {
        info!(
            frame = self.frame,
            text = %command.text,
            x = command.origin[0],
            baseline = command.origin[1],
            "label"
        );
    }
}

/// Ticks and repaints until the running transition ends.
fn run_frames(ring: &SharedRingProgress, redraw: &RedrawFlag, surface: &mut LogSurface) {
    let start = Instant::now();
    let mut now = start;
    loop {
        let running = ring.tick(now);
        if redraw.take() && surface.frame % 8 == 0 {
            ring.render(surface, BOUNDS);
        }
        surface.frame += 1;
        if !running {
            break;
        }
        now += FRAME;
    }
    ring.render(surface, BOUNDS);
    info!(
        frames = surface.frame,
        progress = ring.progress(),
        elapsed_ms = (now - start).as_millis() as u64,
        "transition settled"
    );
}

fn main() {
    init_tracing();

    let theme = RingTheme::from_seed(Color::from_argb_u32(0xFF00_8577), false);
    let attrs = RingProgressAttrs {
        width: Some(12.0),
        total: Some(200),
        ..Default::default()
    };
    let redraw = Arc::new(RedrawFlag::new());
    let ring = SharedRingProgress::new(
        RingProgress::from_attrs(&attrs, &theme).with_invalidator(redraw.clone()),
    );
    let mut surface = LogSurface { frame: 0 };

    // A worker reports progress; the frame loop below picks it up.
    let worker = {
        let ring = ring.clone();
        thread::spawn(move || ring.set_progress(150))
    };
    if worker.join().is_err() {
        warn!("progress worker panicked");
        return;
    }
    run_frames(&ring, &redraw, &mut surface);

    info!("replaying fill animation");
    ring.replay();
    run_frames(&ring, &redraw, &mut surface);

    if let Err(err) = ring.set_total(0) {
        warn!("rejected total: {err}");
    }
    if ring.set_total(120).is_ok() {
        ring.render(&mut surface, BOUNDS);
    }
}
