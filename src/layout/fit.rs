use super::{wrap, TextBox};
use crate::{CardError, Extent, Result, TextMetrics};
use std::ops::RangeInclusive;

/// The outcome of fitting text into a box
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    /// The chosen font size, in pixels per em. Always at least 1.
    pub size: u32,
    /// The text wrapped to the box width at [FitResult::size]
    pub lines: Vec<String>,
    /// The measured size of [FitResult::lines] at [FitResult::size]
    pub extent: Extent,
}

/// The largest font size [solve] will try for a box before deciding the metrics
/// provider is never going to fill it
pub fn default_ceiling(text_box: &TextBox) -> u32 {
    let height = text_box.height.ceil().0.max(0.0) as u32;
    height.saturating_mul(4).saturating_add(16)
}

/// Finds the font size at which `text`, wrapped to the width of `text_box`, fills the
/// height of `text_box`.
///
/// Sizes are scanned upwards from 1. At each size the text is re-wrapped with
/// [wrap] and the block is measured; the scan stops at the _first_ size whose block is
/// at least as tall as the box, and that size is the result. The chosen layout can
/// therefore be up to one size step taller than the box. Widths always respect the
/// box, apart from single words that are wider than it.
///
/// Returns [CardError::InvalidBox] for boxes with no area and
/// [CardError::FitSearchExhausted] if no size up to [default_ceiling] fills the box.
pub fn solve<M: TextMetrics + ?Sized>(
    text: &str,
    text_box: &TextBox,
    metrics: &M,
) -> Result<FitResult> {
    solve_with_ceiling(text, text_box, metrics, default_ceiling(text_box))
}

/// [solve], giving up once the font size would exceed `ceiling`
pub fn solve_with_ceiling<M: TextMetrics + ?Sized>(
    text: &str,
    text_box: &TextBox,
    metrics: &M,
    ceiling: u32,
) -> Result<FitResult> {
    text_box.validate()?;
    scan(text, text_box, metrics, 1..=ceiling)
}

fn scan<M: TextMetrics + ?Sized>(
    text: &str,
    text_box: &TextBox,
    metrics: &M,
    sizes: RangeInclusive<u32>,
) -> Result<FitResult> {
    let ceiling = *sizes.end();
    for size in sizes {
        let lines = wrap(text, size, text_box.width, metrics)?;
        let extent = metrics.measure(&lines, size);

        if extent.height >= text_box.height {
            log::debug!(
                "fit {} lines at size {size} ({} x {}) into {} x {}",
                lines.len(),
                extent.width,
                extent.height,
                text_box.width,
                text_box.height
            );
            return Ok(FitResult {
                size,
                lines,
                extent,
            });
        }
    }

    Err(CardError::FitSearchExhausted { ceiling })
}
