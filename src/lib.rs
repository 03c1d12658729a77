mod card;
pub use card::*;

mod colour;
pub use colour::*;

mod font;
pub use font::*;

/// Utility functions and structures to fit text into boxes on a card
pub mod layout;

mod metrics;
pub use metrics::*;

mod template;
pub use template::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export of the image crate, for building backgrounds in memory and handling renders
pub use image;
