use crate::{Colour, Extent, GlyphPainter, Px, Result, TextMetrics};
use ab_glyph::{Font as _, FontVec, PxScale, ScaleFont as _};
use image::{Pixel, RgbaImage};
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use std::path::Path;

/// A parsed font object. Fonts can be TTF or OTF fonts.
///
/// The font is parsed twice: once by [owned_ttf_parser] for metrics and once by
/// [ab_glyph] for outline rasterization. Both parse the same bytes, so advances
/// and vertical metrics always agree between measuring and painting.
///
/// Sizes throughout are in pixels per em. A font is immutable once loaded and may be
/// shared between cards and threads.
pub struct Font {
    pub face: OwnedFace,
    outlines: FontVec,
    /// ab_glyph scales by the height of the line box rather than the em square; this
    /// converts pixels per em into that scale
    line_box_per_em: f32,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed or has no usable em size
    pub fn load(bytes: Vec<u8>) -> Result<Font> {
        let outlines = FontVec::try_from_vec(bytes.clone())?;
        let face = OwnedFace::from_vec(bytes, 0)?;

        let units_per_em = outlines
            .units_per_em()
            .filter(|units| *units > 0.0)
            .ok_or(ab_glyph::InvalidFont)?;
        let line_box_per_em = outlines.height_unscaled() / units_per_em;

        Ok(Font {
            face,
            outlines,
            line_box_per_em,
        })
    }

    /// Read and parse a font file from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Font> {
        let bytes = std::fs::read(path)?;
        Font::load(bytes)
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: u32) -> f32 {
        size as f32 / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: u32) -> Px {
        Px(self.scaling(size) * self.face.as_face_ref().ascender() as f32)
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: u32) -> Px {
        Px(self.scaling(size) * self.face.as_face_ref().descender() as f32)
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: u32) -> Px {
        Px(self.scaling(size) * self.face.as_face_ref().line_gap() as f32)
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text.
    pub fn line_height(&self, size: u32) -> Px {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }

    /// Calculate the width of a single line of text. Characters the font has no glyph
    /// for are measured as the missing glyph, which is also what gets painted for them.
    pub fn width_of_text(&self, text: &str, size: u32) -> Px {
        let face = self.face.as_face_ref();
        let scaling = self.scaling(size);
        text.chars()
            .filter(|ch| !ch.is_control())
            .map(|ch| {
                let gid = face.glyph_index(ch).unwrap_or(owned_ttf_parser::GlyphId(0));
                Px(scaling * face.glyph_hor_advance(gid).unwrap_or_default() as f32)
            })
            .sum()
    }
}

impl TextMetrics for Font {
    fn measure(&self, lines: &[String], size: u32) -> Extent {
        if lines.is_empty() {
            return Extent::default();
        }

        let width = lines
            .iter()
            .map(|line| self.width_of_text(line, size))
            .fold(Px::ZERO, Px::max);
        let line_box = self.ascent(size) - self.descent(size);
        let height = self.line_height(size) * (lines.len() - 1) as f32 + line_box;

        Extent { width, height }
    }
}

impl GlyphPainter for Font {
    fn paint(
        &self,
        lines: &[String],
        size: u32,
        origin: (Px, Px),
        colour: Colour,
        target: &mut RgbaImage,
    ) {
        let scale = PxScale::from(size as f32 * self.line_box_per_em);
        let scaled = self.outlines.as_scaled(scale);
        let ascent = self.ascent(size);
        let line_height = self.line_height(size);
        let (target_width, target_height) = target.dimensions();

        for (i, line) in lines.iter().enumerate() {
            let baseline = origin.1 + ascent + line_height * i as f32;
            let mut cursor = origin.0;

            for ch in line.chars().filter(|ch| !ch.is_control()) {
                let glyph_id = scaled.glyph_id(ch);
                let advance = scaled.h_advance(glyph_id);
                let glyph = glyph_id.with_scale_and_position(
                    scale,
                    ab_glyph::point(cursor.0, baseline.0),
                );

                if let Some(outline) = self.outlines.outline_glyph(glyph) {
                    let bounds = outline.px_bounds();
                    outline.draw(|x, y, coverage| {
                        let px = bounds.min.x as i64 + x as i64;
                        let py = bounds.min.y as i64 + y as i64;
                        if px < 0 || py < 0 || px >= target_width as i64 || py >= target_height as i64
                        {
                            return;
                        }
                        let ink: image::Rgba<u8> = colour.with_coverage(coverage).into();
                        target.get_pixel_mut(px as u32, py as u32).blend(&ink);
                    });
                }

                cursor += Px(advance);
            }
        }
    }
}
