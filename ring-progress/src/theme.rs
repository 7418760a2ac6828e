//! Default ring colors.
//!
//! ## Usage
//!
//! Pass a [`RingTheme`] wherever a [`ColorResolver`] is expected, or derive
//! one from a brand color with [`RingTheme::from_seed`].

use material_color_utilities::{
    dynamiccolor::{DynamicSchemeBuilder, MaterialDynamicColors, SpecVersion, Variant},
    hct::Hct,
};
use ring_ui::{Color, ColorResolver, ColorRole};

/// Material 3 baseline primary, `#6750A4`.
const BASELINE_PRIMARY: u32 = 0xFF67_50A4;
/// Material 3 baseline secondary container, `#E8DEF8`.
const BASELINE_SECONDARY_CONTAINER: u32 = 0xFFE8_DEF8;

/// Colors for the two rings of a progress indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingTheme {
    /// Color of the background track.
    pub track: Color,
    /// Color of the progress arc and label.
    pub indicator: Color,
}

impl Default for RingTheme {
    fn default() -> Self {
        Self {
            track: Color::from_argb_u32(BASELINE_SECONDARY_CONTAINER),
            indicator: Color::from_argb_u32(BASELINE_PRIMARY),
        }
    }
}

impl RingTheme {
    /// Creates a theme from explicit colors.
    pub fn new(track: Color, indicator: Color) -> Self {
        Self { track, indicator }
    }

    /// Derives ring colors from a seed color using a tonal-spot scheme.
    ///
    /// The indicator takes the scheme's primary color and the track its
    /// secondary container.
    pub fn from_seed(seed: Color, is_dark: bool) -> Self {
        let scheme = DynamicSchemeBuilder::default()
            .source_color_hct(Hct::from_int(seed.to_argb_u32()))
            .variant(Variant::TonalSpot)
            .spec_version(SpecVersion::Spec2025)
            .is_dark(is_dark)
            .build();
        let dynamic_colors = MaterialDynamicColors::new();

        Self {
            track: Color::from_argb_u32(dynamic_colors.secondary_container().get_argb(&scheme)),
            indicator: Color::from_argb_u32(dynamic_colors.primary().get_argb(&scheme)),
        }
    }
}

impl ColorResolver for RingTheme {
    fn resolve(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::RingTrack => self.track,
            ColorRole::RingIndicator => self.indicator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_uses_baseline_colors() {
        let theme = RingTheme::default();
        assert_eq!(
            theme.resolve(ColorRole::RingIndicator).to_argb_u32(),
            0xFF67_50A4
        );
        assert_eq!(theme.resolve(ColorRole::RingTrack).to_argb_u32(), 0xFFE8_DEF8);
    }

    #[test]
    fn test_seeded_theme_is_opaque_and_distinct() {
        let theme = RingTheme::from_seed(Color::from_argb_u32(0xFF00_8577), false);
        assert_eq!(theme.track.a, 1.0);
        assert_eq!(theme.indicator.a, 1.0);
        assert_ne!(theme.track, theme.indicator);
    }
}
