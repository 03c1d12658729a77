use crate::layout::Region;
use crate::{Colour, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where and how one piece of text is drawn on a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSlot {
    /// Width and height of the slot as fractions of the card's width and height
    pub scale: [f32; 2],
    /// Top left corner of the slot as fractions of the card's width and height
    pub pos: [f32; 2],
    /// Overrides the card-wide text colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
    /// Overrides the card-wide font
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,
}

impl TextSlot {
    pub fn new(scale: [f32; 2], pos: [f32; 2]) -> TextSlot {
        TextSlot {
            scale,
            pos,
            colour: None,
            font: None,
        }
    }

    pub fn region(&self) -> Result<Region> {
        Region::from_f32((self.scale[0], self.scale[1]), (self.pos[0], self.pos[1]))
    }

    /// The slot's own colour if it has one, otherwise `fallback`
    pub fn colour_or(&self, fallback: Colour) -> Result<Colour> {
        self.colour
            .as_deref()
            .map_or(Ok(fallback), |colour| colour.parse())
    }

    /// The slot's own font if it has one, otherwise `fallback`
    pub fn font_or<'a>(&'a self, fallback: &'a Path) -> &'a Path {
        self.font.as_deref().unwrap_or(fallback)
    }
}

/// The layout of a daily campaign card: a small day number in the top left, the body
/// text filling most of the card, and the campaign tagline along the bottom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardTemplate {
    pub index: TextSlot,
    pub body: TextSlot,
    pub campaign: TextSlot,
}

impl Default for CardTemplate {
    fn default() -> Self {
        CardTemplate {
            index: TextSlot::new([0.05, 0.05], [0.05, 0.1]),
            body: TextSlot::new([0.9, 0.6], [0.1, 0.12]),
            campaign: TextSlot::new([0.1, 0.05], [0.3, 0.9]),
        }
    }
}

impl CardTemplate {
    /// Parse a template from JSON. Slots missing from the JSON keep their defaults.
    pub fn from_json(json: &str) -> Result<CardTemplate> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<CardTemplate> {
        let json = std::fs::read_to_string(path)?;
        CardTemplate::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every slot in drawing order, with its name
    pub fn slots(&self) -> [(&'static str, &TextSlot); 3] {
        [
            ("index", &self.index),
            ("body", &self.body),
            ("campaign", &self.campaign),
        ]
    }
}
