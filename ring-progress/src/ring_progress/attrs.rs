//! Style attributes as handed over by a host layout system.

use ring_ui::{Color, ColorResolver};
use tracing::warn;

use super::{RingProgressArgs, RingProgressDefaults};
use crate::RingProgressError;

/// Raw style attributes for a ring progress indicator.
///
/// Every attribute is optional; [`RingProgressAttrs::resolve`] fills the gaps
/// from the host theme and [`RingProgressDefaults`]. Colors are packed
/// `0xAARRGGBB` integers.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RingProgressAttrs {
    /// Track ring color.
    pub bg_color: Option<u32>,
    /// Progress arc and label color.
    pub fg_color: Option<u32>,
    /// Stroke width of both rings, in physical pixels.
    pub width: Option<f32>,
    /// Value representing 100 %.
    pub total: Option<i32>,
    /// Degrees where the progress arc begins.
    pub start_angle: Option<i32>,
    /// Initial progress.
    pub progress: Option<i32>,
}

impl RingProgressAttrs {
    /// Resolves the attributes into component arguments.
    ///
    /// Unset colors are looked up through `resolver`. Invalid values are
    /// logged and replaced with their defaults; resolution never fails.
    pub fn resolve(&self, resolver: &dyn ColorResolver) -> RingProgressArgs {
        let mut args = RingProgressArgs::themed(resolver);

        if let Some(argb) = self.bg_color {
            args.background_color = Color::from_argb_u32(argb);
        }
        if let Some(argb) = self.fg_color {
            args.foreground_color = Color::from_argb_u32(argb);
        }

        if let Some(width) = self.width {
            match RingProgressArgs::check_stroke_width(width) {
                Ok(()) => args.stroke_width_px = width,
                Err(err) => warn!(
                    "Ignoring ring width attribute: {err}; using {}",
                    RingProgressDefaults::STROKE_WIDTH_PX
                ),
            }
        }
        if let Some(total) = self.total {
            match RingProgressArgs::check_total(total) {
                Ok(()) => args.total = total,
                Err(err) => warn!(
                    "Ignoring total attribute: {err}; using {}",
                    RingProgressDefaults::TOTAL
                ),
            }
        }
        if let Some(start_angle) = self.start_angle {
            args.start_angle_degrees = start_angle;
        }
        if let Some(progress) = self.progress {
            args.progress = progress;
        }
        args
    }
}

impl RingProgressArgs {
    pub(crate) fn check_total(total: i32) -> Result<(), RingProgressError> {
        if total > 0 {
            Ok(())
        } else {
            Err(RingProgressError::InvalidTotal(total))
        }
    }

    pub(crate) fn check_stroke_width(width: f32) -> Result<(), RingProgressError> {
        if width.is_finite() && width >= 0.0 {
            Ok(())
        } else {
            Err(RingProgressError::InvalidStrokeWidth(width))
        }
    }
}

#[cfg(test)]
mod tests {
    use ring_ui::ColorRole;

    use super::*;
    use crate::RingTheme;

    fn theme() -> RingTheme {
        RingTheme::new(
            Color::from_argb_u32(0xFF11_1111),
            Color::from_argb_u32(0xFF22_2222),
        )
    }

    #[test]
    fn test_empty_attrs_fall_back_to_defaults() {
        let args = RingProgressAttrs::default().resolve(&theme());

        assert_eq!(args.background_color.to_argb_u32(), 0xFF11_1111);
        assert_eq!(args.foreground_color.to_argb_u32(), 0xFF22_2222);
        assert_eq!(args.stroke_width_px, RingProgressDefaults::STROKE_WIDTH_PX);
        assert_eq!(args.total, RingProgressDefaults::TOTAL);
        assert_eq!(args.start_angle_degrees, RingProgressDefaults::START_ANGLE_DEGREES);
        assert_eq!(args.progress, 0);
    }

    #[test]
    fn test_set_attrs_override_defaults() {
        let attrs = RingProgressAttrs {
            bg_color: Some(0xFF00_00FF),
            fg_color: Some(0xFFFF_0000),
            width: Some(12.0),
            total: Some(250),
            start_angle: Some(0),
            progress: Some(40),
        };
        let args = attrs.resolve(&theme());

        assert_eq!(args.background_color.to_argb_u32(), 0xFF00_00FF);
        assert_eq!(args.foreground_color.to_argb_u32(), 0xFFFF_0000);
        assert_eq!(args.stroke_width_px, 12.0);
        assert_eq!(args.total, 250);
        assert_eq!(args.start_angle_degrees, 0);
        assert_eq!(args.progress, 40);
    }

    #[test]
    fn test_invalid_attrs_are_replaced() {
        let attrs = RingProgressAttrs {
            width: Some(f32::NAN),
            total: Some(0),
            ..Default::default()
        };
        let args = attrs.resolve(&theme());

        assert_eq!(args.stroke_width_px, RingProgressDefaults::STROKE_WIDTH_PX);
        assert_eq!(args.total, RingProgressDefaults::TOTAL);
    }

    #[test]
    fn test_closure_resolver() {
        let args = RingProgressAttrs::default().resolve(&|role: ColorRole| match role {
            ColorRole::RingTrack => Color::BLACK,
            ColorRole::RingIndicator => Color::WHITE,
        });
        assert_eq!(args.background_color, Color::BLACK);
        assert_eq!(args.foreground_color, Color::WHITE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_attrs() {
        let attrs: RingProgressAttrs =
            serde_json::from_str(r#"{ "fg_color": 4278224247, "total": 200 }"#)
                .expect("valid attributes");
        assert_eq!(attrs.fg_color, Some(0xFF00_8577));
        assert_eq!(attrs.total, Some(200));
        assert_eq!(attrs.bg_color, None);
    }
}
