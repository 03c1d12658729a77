use crate::layout::{solve, Canvas, FitResult, Region};
use crate::{Colour, GlyphPainter, Result};
use image::{imageops, DynamicImage, Rgba, RgbaImage};
use std::path::Path;

/// Where a card is in its lifecycle. Drawing is allowed in either state; rendering
/// simply reflects whatever has been drawn so far.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CardState {
    /// No render has happened yet
    Open,
    /// At least one render has happened
    Rendered,
}

/// A background image with text drawn over it.
///
/// Text is never drawn onto the background directly. Every [ImageCard::draw_text]
/// call paints into a transparent overlay the size of the background, and
/// [ImageCard::render] composites that overlay over a copy of the background. Neither
/// the background nor the overlay are changed by rendering, so a card can be rendered
/// any number of times and drawn on between renders.
pub struct ImageCard {
    background: DynamicImage,
    canvas: Canvas,
    overlay: RgbaImage,
    state: CardState,
}

impl ImageCard {
    /// Create a card over an already decoded background
    pub fn new(background: DynamicImage) -> ImageCard {
        let canvas = Canvas::new(background.width(), background.height());
        let overlay = RgbaImage::from_pixel(canvas.width, canvas.height, Rgba([0, 0, 0, 0]));

        ImageCard {
            background,
            canvas,
            overlay,
            state: CardState::Open,
        }
    }

    /// Load a background image from disk, guessing the format from its contents
    pub fn open<P: AsRef<Path>>(path: P) -> Result<ImageCard> {
        let path = path.as_ref();
        let background = image::open(path)?;
        log::debug!(
            "opened background {} ({} x {})",
            path.display(),
            background.width(),
            background.height()
        );
        Ok(ImageCard::new(background))
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    /// Everything drawn so far, on a transparent background
    pub fn overlay(&self) -> &RgbaImage {
        &self.overlay
    }

    /// Draws `text` into `region` at the largest size that fills it.
    ///
    /// The region is resolved against the card's canvas, the font size is chosen with
    /// [solve], and the wrapped lines are painted with the top left of the text block
    /// at the top left of the region. Returns the layout that was drawn.
    ///
    /// Nothing is drawn if an error is returned; text from earlier calls is kept
    /// either way.
    pub fn draw_text<F: GlyphPainter + ?Sized>(
        &mut self,
        text: &str,
        region: &Region,
        colour: Colour,
        font: &F,
    ) -> Result<FitResult> {
        let text_box = self.canvas.resolve(region);
        log::info!(
            "drawing [{text}] into a {} x {} box at ({}, {})",
            text_box.width,
            text_box.height,
            text_box.x,
            text_box.y
        );

        let fit = solve(text, &text_box, font)?;
        font.paint(
            &fit.lines,
            fit.size,
            text_box.origin(),
            colour,
            &mut self.overlay,
        );

        Ok(fit)
    }

    /// Composite the overlay over the background and return the result.
    ///
    /// The result has the same colour type family as the background: backgrounds
    /// without an alpha channel produce an RGB image, everything else RGBA.
    pub fn render(&mut self) -> DynamicImage {
        self.state = CardState::Rendered;

        let mut composed = self.background.to_rgba8();
        imageops::overlay(&mut composed, &self.overlay, 0, 0);

        if self.background.color().has_alpha() {
            DynamicImage::ImageRgba8(composed)
        } else {
            DynamicImage::ImageRgba8(composed).to_rgb8().into()
        }
    }

    /// Render the card and write it to `path`, with the image format chosen from the
    /// file extension
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.render().save(path)?;
        log::info!("saved card to {}", path.display());
        Ok(())
    }
}
