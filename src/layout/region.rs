use crate::{CardError, Px, Result};

/// A number between 0.0 and 1.0 inclusive, used to express lengths and positions
/// relative to the size of a card
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Fraction(f32);

impl Fraction {
    pub const ZERO: Fraction = Fraction(0.0);
    pub const ONE: Fraction = Fraction(1.0);

    /// Returns an error if `value` is not a finite number in `[0, 1]`
    pub fn new(value: f32) -> Result<Fraction> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Fraction(value))
        } else {
            Err(CardError::InvalidFraction(value))
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// Scale a whole-canvas length by this fraction
    pub fn of(self, length: u32) -> Px {
        Px(self.0 * length as f32)
    }
}

impl TryFrom<f32> for Fraction {
    type Error = CardError;

    fn try_from(value: f32) -> Result<Self> {
        Fraction::new(value)
    }
}

/// The pixel dimensions of a card's background, fixed when the card is created
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Canvas {
        Canvas { width, height }
    }

    /// Resolve a normalized region against this canvas
    pub fn resolve(&self, region: &Region) -> TextBox {
        TextBox {
            x: region.pos.0.of(self.width),
            y: region.pos.1.of(self.height),
            width: region.scale.0.of(self.width),
            height: region.scale.1.of(self.height),
        }
    }
}

/// A rectangle described relative to the size of the canvas: `scale` is the size of
/// the rectangle and `pos` is its top-left corner, both as fractions of the canvas
/// width and height respectively.
///
/// A corner at `1.0` would sit on the far edge of the canvas, so positions must be
/// strictly less than one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    pub scale: (Fraction, Fraction),
    pub pos: (Fraction, Fraction),
}

impl Region {
    /// Returns [CardError::InvalidFraction] if either component of `pos` is `1.0`
    pub fn new(scale: (Fraction, Fraction), pos: (Fraction, Fraction)) -> Result<Region> {
        for corner in [pos.0, pos.1] {
            if corner >= Fraction::ONE {
                return Err(CardError::InvalidFraction(corner.get()));
            }
        }
        Ok(Region { scale, pos })
    }

    /// Build a region from raw floats, validating every component
    pub fn from_f32(scale: (f32, f32), pos: (f32, f32)) -> Result<Region> {
        Region::new(
            (Fraction::new(scale.0)?, Fraction::new(scale.1)?),
            (Fraction::new(pos.0)?, Fraction::new(pos.1)?),
        )
    }
}

/// An absolute rectangle on the canvas, in pixels, with `(x, y)` at the top left
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TextBox {
    pub x: Px,
    pub y: Px,
    pub width: Px,
    pub height: Px,
}

impl TextBox {
    pub fn new(x: Px, y: Px, width: Px, height: Px) -> TextBox {
        TextBox {
            x,
            y,
            width,
            height,
        }
    }

    /// Boxes with no area cannot hold any text
    pub fn validate(&self) -> Result<()> {
        if self.width.is_positive() && self.height.is_positive() {
            Ok(())
        } else {
            Err(CardError::InvalidBox {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn origin(&self) -> (Px, Px) {
        (self.x, self.y)
    }
}
