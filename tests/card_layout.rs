use image_card::image::{Rgba, RgbaImage};
use image_card::layout::{solve, wrap, Canvas, Region};
use image_card::{
    colours, CardError, CardTemplate, Colour, Extent, Font, GlyphPainter, ImageCard, Px,
    TextMetrics,
};

/// Characters are `size` pixels wide, lines are `1.2 * size` pixels tall. Painting
/// marks the top left pixel of every line.
struct Stub;

impl TextMetrics for Stub {
    fn measure(&self, lines: &[String], size: u32) -> Extent {
        let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        Extent::new(
            Px(size as f32 * widest as f32),
            Px(size as f32 * lines.len() as f32 * 1.2),
        )
    }
}

impl GlyphPainter for Stub {
    fn paint(
        &self,
        lines: &[String],
        size: u32,
        origin: (Px, Px),
        colour: Colour,
        target: &mut RgbaImage,
    ) {
        for i in 0..lines.len() {
            let x = origin.0 .0 as u32;
            let y = (origin.1 .0 + i as f32 * size as f32 * 1.2) as u32;
            if x < target.width() && y < target.height() {
                target.put_pixel(x, y, colour.into());
            }
        }
    }
}

fn blank_card(width: u32, height: u32) -> ImageCard {
    ImageCard::new(RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255])).into())
}

#[test]
fn hello_world_fills_the_middle_of_a_square_card() {
    let canvas = Canvas::new(1000, 1000);
    let region = Region::from_f32((0.5, 0.5), (0.25, 0.25)).unwrap();
    let text_box = canvas.resolve(&region);
    assert_eq!(
        (text_box.x, text_box.y, text_box.width, text_box.height),
        (Px(250.0), Px(250.0), Px(500.0), Px(500.0))
    );

    assert_eq!(wrap("HELLO WORLD", 1, text_box.width, &Stub).unwrap(), vec!["HELLO WORLD"]);

    let fit = solve("HELLO WORLD", &text_box, &Stub).unwrap();
    let first_overflow = (1..)
        .find(|&size| {
            let lines = wrap("HELLO WORLD", size, text_box.width, &Stub).unwrap();
            Stub.measure(&lines, size).height >= text_box.height
        })
        .unwrap();
    assert_eq!(fit.size, first_overflow);
    assert_eq!(fit.lines.len(), 2);
}

#[test]
fn unsplittable_words_overflow_without_error() {
    let lines = wrap("asuperlongwordthatcannotbesplit", 5, Px(10.0), &Stub).unwrap();
    assert_eq!(lines, vec!["asuperlongwordthatcannotbesplit"]);
}

#[test]
fn empty_text_cannot_be_wrapped() {
    assert!(matches!(
        wrap("", 1, Px(10.0), &Stub),
        Err(CardError::EmptyInput)
    ));
}

#[test]
fn default_template_draws_three_captions() {
    let mut card = blank_card(400, 300);
    let template = CardTemplate::default();
    let texts = ["#1", "This is a test", "#31DaysofNeurodivergence"];

    let mut fits = Vec::new();
    for ((_, slot), text) in template.slots().into_iter().zip(texts) {
        let region = slot.region().unwrap();
        let colour = slot.colour_or(colours::WHITE).unwrap();
        fits.push(card.draw_text(text, &region, colour, &Stub).unwrap());
    }

    // the body slot is by far the largest, so its text ends up the largest
    assert!(fits[1].size > fits[0].size);
    assert!(fits[1].size > fits[2].size);

    let overlay = card.overlay();
    assert_eq!(*overlay.get_pixel(20, 30), Rgba([255, 255, 255, 255]));
    assert_eq!(*overlay.get_pixel(40, 36), Rgba([255, 255, 255, 255]));
    assert_eq!(*overlay.get_pixel(120, 270), Rgba([255, 255, 255, 255]));

    let first = card.render();
    let second = card.render();
    assert_eq!(first, second);
    assert_eq!(first.as_rgba8().unwrap().get_pixel(40, 36), &Rgba([255, 255, 255, 255]));
    assert_eq!(first.as_rgba8().unwrap().get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
}

#[test]
fn real_glyphs_stay_inside_the_box_width() {
    let font = Font::load(include_bytes!("../assets/DejaVuSansMono.ttf").to_vec()).unwrap();
    let mut card = ImageCard::new(RgbaImage::from_pixel(400, 200, Rgba([0, 0, 0, 0])).into());
    let region = Region::from_f32((0.5, 0.5), (0.25, 0.25)).unwrap();
    let text_box = card.canvas().resolve(&region);

    let fit = card
        .draw_text("the quick brown fox", &region, colours::WHITE, &font)
        .unwrap();
    assert!(fit.lines.len() > 1);
    assert!(fit.extent.width <= text_box.width);

    let ink: Vec<(u32, u32)> = card
        .overlay()
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0[3] > 0)
        .map(|(x, y, _)| (x, y))
        .collect();
    assert!(!ink.is_empty());
    let (left, right) = (text_box.x.0, (text_box.x + text_box.width).0);
    for &(x, y) in &ink {
        assert!(x as f32 >= left && (x as f32) < right, "ink at column {x} is outside the box");
        assert!(y as f32 >= text_box.y.0, "ink at row {y} is above the box");
    }
}
