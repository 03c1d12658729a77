//! The seams between the layout engine and whatever knows how big glyphs are.
//!
//! The layout engine only ever asks two questions of a font: how large is this block
//! of lines at this size ([TextMetrics]), and please draw these lines here
//! ([GlyphPainter]). [Font](crate::Font) answers both; tests answer them with stubs.

use crate::{Colour, Px};
use image::RgbaImage;

/// The size of a rendered block of text
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Extent {
    pub width: Px,
    pub height: Px,
}

impl Extent {
    pub fn new<W: Into<Px>, H: Into<Px>>(width: W, height: H) -> Extent {
        Extent {
            width: width.into(),
            height: height.into(),
        }
    }
}

/// Measures multi-line blocks of text.
///
/// `lines` is a single block: the width is that of the widest line and the height
/// covers every line including the spacing between them. Implementations must be
/// pure and must never shrink an extent when `size` grows.
pub trait TextMetrics {
    fn measure(&self, lines: &[String], size: u32) -> Extent;
}

/// Draws blocks of text into an RGBA buffer.
pub trait GlyphPainter: TextMetrics {
    /// Paint `lines` at `size` pixels per em with the top-left of the block at
    /// `origin`. Coverage is blended over whatever `target` already holds and
    /// anything falling outside of `target` is clipped.
    fn paint(
        &self,
        lines: &[String],
        size: u32,
        origin: (Px, Px),
        colour: Colour,
        target: &mut RgbaImage,
    );
}
