use crate::CardError;
use std::str::FromStr;

/// A straight (non-premultiplied) sRGB colour with an alpha channel, each component
/// ranging from 0 to 255
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new, fully opaque colour. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::new_rgba(r, g, b, 1.0)
    }

    /// Create a new colour. r, g, b, and a range from 0.0 to 1.0
    pub fn new_rgba(r: f32, g: f32, b: f32, a: f32) -> Colour {
        fn byte(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Colour {
            r: byte(r),
            g: byte(g),
            b: byte(b),
            a: byte(a),
        }
    }

    /// Create a new, fully opaque colour. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 255 }
    }

    /// Create a new colour. r, g, b, and a range from 0 to 255
    pub fn new_rgba_bytes(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour { r, g, b, a }
    }

    /// Fully opaque colour from bytes, usable in constants
    const fn new_const(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 255 }
    }

    /// Create a new, fully opaque grey. g ranges from 0 to 255
    pub fn new_grey_bytes(g: u8) -> Colour {
        Colour::new_rgb_bytes(g, g, g)
    }

    /// The same colour with its alpha scaled by `coverage` (0.0 to 1.0), used when
    /// painting anti-aliased glyph edges
    pub fn with_coverage(self, coverage: f32) -> Colour {
        Colour {
            a: (self.a as f32 * coverage.clamp(0.0, 1.0)).round() as u8,
            ..self
        }
    }

    fn from_hex(hex: &str) -> Option<Colour> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Colour::new_rgb_bytes(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Some(Colour::new_rgba_bytes(
                nibble(0)?,
                nibble(1)?,
                nibble(2)?,
                nibble(3)?,
            )),
            6 => Some(Colour::new_rgb_bytes(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Colour::new_rgba_bytes(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }
}

impl Default for Colour {
    fn default() -> Self {
        colours::WHITE
    }
}

/// Parses `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, or one of the names in [colours]
impl FromStr for Colour {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.strip_prefix('#') {
            Some(hex) => Colour::from_hex(hex),
            None => colours::by_name(trimmed),
        };
        parsed.ok_or_else(|| CardError::InvalidColour(s.to_string()))
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb_bytes(c.0, c.1, c.2)
    }
}

impl From<[u8; 4]> for Colour {
    fn from(c: [u8; 4]) -> Self {
        let [r, g, b, a] = c;
        Colour { r, g, b, a }
    }
}

impl From<Colour> for image::Rgba<u8> {
    fn from(c: Colour) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_const(0, 0, 0);
    pub const WHITE: Colour = Colour::new_const(255, 255, 255);
    pub const GREY: Colour = Colour::new_const(128, 128, 128);
    pub const RED: Colour = Colour::new_const(255, 0, 0);
    pub const GREEN: Colour = Colour::new_const(0, 128, 0);
    pub const BLUE: Colour = Colour::new_const(0, 0, 255);
    pub const CYAN: Colour = Colour::new_const(0, 255, 255);
    pub const MAGENTA: Colour = Colour::new_const(255, 0, 255);
    pub const YELLOW: Colour = Colour::new_const(255, 255, 0);
    pub const ORANGE: Colour = Colour::new_const(255, 165, 0);
    pub const PURPLE: Colour = Colour::new_const(128, 0, 128);
    pub const TRANSPARENT: Colour = Colour {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Look up a colour by its (case-insensitive) CSS name
    pub fn by_name(name: &str) -> Option<Colour> {
        let colour = match name.to_ascii_lowercase().as_str() {
            "black" => BLACK,
            "white" => WHITE,
            "grey" | "gray" => GREY,
            "red" => RED,
            "green" => GREEN,
            "blue" => BLUE,
            "cyan" | "aqua" => CYAN,
            "magenta" | "fuchsia" => MAGENTA,
            "yellow" => YELLOW,
            "orange" => ORANGE,
            "purple" => PURPLE,
            "transparent" => TRANSPARENT,
            _ => return None,
        };
        Some(colour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#ffffff".parse::<Colour>().unwrap(), colours::WHITE);
        assert_eq!("#fff".parse::<Colour>().unwrap(), colours::WHITE);
        assert_eq!(
            "#12345678".parse::<Colour>().unwrap(),
            Colour::new_rgba_bytes(0x12, 0x34, 0x56, 0x78)
        );
        assert_eq!(
            "#f008".parse::<Colour>().unwrap(),
            Colour::new_rgba_bytes(255, 0, 0, 0x88)
        );
    }

    #[test]
    fn parses_names() {
        assert_eq!("Black".parse::<Colour>().unwrap(), colours::BLACK);
        assert_eq!(" gray ".parse::<Colour>().unwrap(), colours::GREY);
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#", "#ff", "#gggggg", "#fffff", "#+f+f+f", "chartreuse-ish", "#ééé"] {
            assert!(
                matches!(bad.parse::<Colour>(), Err(CardError::InvalidColour(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn coverage_scales_alpha_only() {
        let c = Colour::new_rgba_bytes(10, 20, 30, 200).with_coverage(0.5);
        assert_eq!(c, Colour::new_rgba_bytes(10, 20, 30, 100));
        assert_eq!(colours::RED.with_coverage(2.0), colours::RED);
    }

    #[test]
    fn named_constants_are_opaque() {
        for name in ["black", "white", "grey", "red", "green", "blue", "orange", "purple"] {
            let colour = colours::by_name(name).unwrap();
            assert_eq!(colour.a, 255, "{name}");
            assert_eq!(colour, Colour::new_rgb_bytes(colour.r, colour.g, colour.b));
        }
        assert_eq!(colours::ORANGE, Colour::new_rgb_bytes(255, 165, 0));
        assert_eq!(colours::TRANSPARENT.a, 0);
    }

    #[test]
    fn float_constructors_round() {
        assert_eq!(Colour::new_rgb(1.0, 0.5, 0.0), Colour::new_rgb_bytes(255, 128, 0));
    }
}
