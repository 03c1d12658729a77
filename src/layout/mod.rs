//! Text layout utilities for fitting captions into boxes on a card.
//!
//! Layout happens in three steps:
//!
//! - A [`Region`](crate::layout::Region), expressed as fractions of the card, is
//!   resolved against the [`Canvas`](crate::layout::Canvas) into an absolute
//!   [`TextBox`](crate::layout::TextBox)
//! - [`solve`](crate::layout::solve) scans font sizes upwards, re-wrapping the text
//!   at each one, until the wrapped block fills the height of the box
//! - [`wrap`](crate::layout::wrap) does the greedy word wrapping for each size tried
//!
//! None of these steps draw anything; they only need something that implements
//! [`TextMetrics`](crate::TextMetrics).
//!
//! # Example
//!
//! ```
//! use image_card::layout::{solve, Canvas, Region};
//! use image_card::{Extent, Px, TextMetrics};
//!
//! /// Every character is one em wide, every line is one em tall
//! struct Blocky;
//!
//! impl TextMetrics for Blocky {
//!     fn measure(&self, lines: &[String], size: u32) -> Extent {
//!         let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
//!         Extent::new(
//!             Px((widest as u32 * size) as f32),
//!             Px((lines.len() as u32 * size) as f32),
//!         )
//!     }
//! }
//!
//! let canvas = Canvas::new(200, 100);
//! let region = Region::from_f32((0.5, 0.5), (0.25, 0.25)).unwrap();
//! let text_box = canvas.resolve(&region);
//!
//! let fit = solve("fit me in", &text_box, &Blocky).unwrap();
//! assert_eq!(fit.size, 21);
//! assert_eq!(fit.lines, vec!["fit", "me", "in"]);
//! ```

mod fit;
mod region;
mod wrap;

pub use fit::*;
pub use region::*;
pub use wrap::*;
