use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// A length in image pixels. Pixel lengths are fractional while text is being
/// measured and are only rounded when glyphs are painted into a buffer.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0}px")]
pub struct Px(pub f32);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// The larger of two lengths
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// Round up to a whole number of pixels
    pub fn ceil(self) -> Px {
        Px(self.0.ceil())
    }

    /// Whether this length can describe a non-empty span
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl From<u32> for Px {
    fn from(value: u32) -> Self {
        Px(value as f32)
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl Mul<Px> for f32 {
    type Output = Px;

    fn mul(self, rhs: Px) -> Px {
        Px(self * rhs.0)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_stays_in_pixels() {
        let a = Px(10.0) + Px(2.5) - Px(0.5);
        assert_eq!(a, Px(12.0));
        assert_eq!(a * 2.0, Px(24.0));
        assert_eq!(0.5 * a, Px(6.0));
        assert_eq!(a / 4.0, Px(3.0));
    }

    #[test]
    fn sums_and_formats() {
        let total: Px = [Px(1.0), Px(2.0), Px(3.0)].into_iter().sum();
        assert_eq!(total, Px(6.0));
        assert_eq!(total.to_string(), "6px");
        assert!(Px(0.1).is_positive());
        assert!(!Px::ZERO.is_positive());
        assert_eq!(Px(1.2).ceil(), Px(2.0));
    }
}
