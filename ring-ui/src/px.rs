//! Physical pixel units.
//!
//! Hosts hand the widget its already-resolved bounds in physical pixels and
//! answer text measurements in the same unit.
//!
//! ```
//! use ring_ui::px::{Px, PxSize};
//!
//! let bounds = PxSize::new(Px::new(300), Px::new(200));
//! assert_eq!(bounds.to_f32_arr2(), [300.0, 200.0]);
//! assert_eq!(Px::new(7) / 2, Px::new(3));
//! ```

use std::ops::{Add, Div, Mul, Sub};

/// A physical pixel value.
///
/// Physical pixels map one-to-one onto screen pixels. Negative values are
/// allowed; text bounds above a baseline are reported as negative offsets by
/// most toolkits.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Px` value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Converts to `f32` for drawing math.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an `f32`, truncating toward zero and saturating at
    /// the `i32` bounds.
    pub fn saturating_from_f32(value: f32) -> Self {
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }
}

impl Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl Mul<i32> for Px {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

/// Integer division, truncating toward zero.
impl Div<i32> for Px {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

/// A width/height pair in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxSize {
    /// Width in physical pixels.
    pub width: Px,
    /// Height in physical pixels.
    pub height: Px,
}

impl PxSize {
    /// Zero size.
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Creates a new size.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Converts the size to `[width, height]` as `f32`.
    pub fn to_f32_arr2(self) -> [f32; 2] {
        [self.width.to_f32(), self.height.to_f32()]
    }

    /// Returns `true` when either dimension is zero or negative.
    pub fn is_empty(self) -> bool {
        self.width.0 <= 0 || self.height.0 <= 0
    }
}

impl From<[Px; 2]> for PxSize {
    fn from([width, height]: [Px; 2]) -> Self {
        Self { width, height }
    }
}

impl From<[i32; 2]> for PxSize {
    fn from([width, height]: [i32; 2]) -> Self {
        Self::new(Px(width), Px(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_arithmetic() {
        let a = Px(10);
        let b = Px(5);

        assert_eq!(a + b, Px(15));
        assert_eq!(a - b, Px(5));
        assert_eq!(a * 2, Px(20));
        assert_eq!(Px(-7) / 2, Px(-3));
    }

    #[test]
    fn test_saturating_from_f32() {
        assert_eq!(Px::saturating_from_f32(f32::MAX), Px(i32::MAX));
        assert_eq!(Px::saturating_from_f32(f32::MIN), Px(i32::MIN));
        assert_eq!(Px::saturating_from_f32(100.5), Px(100));
        assert_eq!(Px::saturating_from_f32(-100.5), Px(-100));
    }

    #[test]
    fn test_size_is_empty() {
        assert!(PxSize::ZERO.is_empty());
        assert!(PxSize::from([0, 20]).is_empty());
        assert!(!PxSize::from([20, 20]).is_empty());
    }
}
