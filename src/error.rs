use crate::Px;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum CardError {
    #[error("there are no words to lay out")]
    /// The text handed to the wrapper contained nothing but whitespace
    EmptyInput,

    #[error("text box must have a positive size, got {width} x {height}")]
    /// A region resolved to a box with no area
    InvalidBox { width: Px, height: Px },

    #[error("no font size up to {ceiling} reached the box height; font metrics are not monotonic")]
    /// The font size search ran past its ceiling without overflowing the box
    FitSearchExhausted { ceiling: u32 },

    #[error("{0} is not a fraction between 0 and 1")]
    /// A normalized coordinate was outside of `[0, 1]`
    InvalidFraction(f32),

    #[error("`{0}` is not a recognised colour")]
    /// A colour string could not be parsed
    InvalidColour(String),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [ab_glyph] failed to parse the font for rasterization
    InvalidFont(#[from] ab_glyph::InvalidFont),

    #[error(transparent)]
    /// [image] failed to decode or encode an image
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// A card template could not be read
    Template(#[from] serde_json::Error),
}

pub type Result<T, E = CardError> = std::result::Result<T, E>;
