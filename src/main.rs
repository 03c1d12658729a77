use anyhow::{Context, Result};
use clap::Parser;
use image_card::{CardTemplate, Colour, Font, ImageCard};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Put a day number, a caption, and a campaign tagline on an image
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Background image to draw on
    #[arg(long)]
    image: PathBuf,

    /// Where to save the output image
    #[arg(long, default_value = "test.png")]
    out_path: PathBuf,

    /// Text to put on the image
    #[arg(long, default_value = "This is a test")]
    text: String,

    /// Day number of the card
    #[arg(long, default_value = "1")]
    index: String,

    /// Tagline for the bottom of the card
    #[arg(long, default_value = "#31DaysofNeurodivergence")]
    campaign: String,

    /// Font used for any slot that does not name its own
    #[arg(long, default_value = "assets/Lato-BoldItalic.ttf")]
    font: PathBuf,

    /// Text colour used for any slot that does not name its own
    #[arg(long, default_value = "#ffffff")]
    colour: String,

    /// JSON file overriding where each piece of text goes
    #[arg(long)]
    layout: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = create_card(&args) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn create_card(args: &Args) -> Result<()> {
    let template = match &args.layout {
        Some(path) => CardTemplate::from_json_file(path)
            .with_context(|| format!("failed to read layout {}", path.display()))?,
        None => CardTemplate::default(),
    };
    let colour: Colour = args.colour.parse()?;

    let mut card = ImageCard::open(&args.image)
        .with_context(|| format!("failed to open background {}", args.image.display()))?;

    let index = format!("#{}", args.index);
    let texts = [index.as_str(), args.text.as_str(), args.campaign.as_str()];

    let mut fonts: HashMap<&Path, Font> = HashMap::new();
    for ((name, slot), text) in template.slots().into_iter().zip(texts) {
        let font_path = slot.font_or(&args.font);
        if !fonts.contains_key(font_path) {
            let font = Font::open(font_path)
                .with_context(|| format!("failed to load font {}", font_path.display()))?;
            fonts.insert(font_path, font);
        }
        let font = &fonts[font_path];

        let region = slot
            .region()
            .with_context(|| format!("invalid {name} slot"))?;
        let colour = slot.colour_or(colour)?;
        let fit = card
            .draw_text(text, &region, colour, font)
            .with_context(|| format!("failed to draw the {name} text"))?;
        log::debug!("{name}: size {} over {} lines", fit.size, fit.lines.len());
    }

    card.save(&args.out_path)
        .with_context(|| format!("failed to save {}", args.out_path.display()))?;
    Ok(())
}
