use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};

const BACKGROUND: Rgb<u8> = Rgb([245, 245, 245]);
const CARD: Rgb<u8> = Rgb([255, 255, 255]);
const TITLE: Rgb<u8> = Rgb([134, 76, 191]);
const BODY: Rgb<u8> = Rgb([40, 40, 40]);

const CARD_MARGIN: u32 = 40;
const TEXT_LEFT: u32 = 60;
const TITLE_TOP: u32 = 120;
const TITLE_SCALE: u32 = 4;
const BODY_TOP: u32 = 200;
const BODY_LINE_STEP: u32 = 60;
const BODY_SCALE: u32 = 2;
const GLYPH_SIZE: u32 = 8;

/// Greedy word wrap: words are appended until the joined line exceeds
/// `width` characters, and the word that crossed the limit stays on that
/// line. Words are never split.
pub fn wrap_caption(caption: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in caption.split_whitespace() {
        current.push(word);
        let joined = current.join(" ");
        if joined.chars().count() > width {
            lines.push(joined);
            current.clear();
        }
    }

    if !current.is_empty() {
        lines.push(current.join(" "));
    }

    lines
}

/// One slide: grey backdrop, white card, title, then the wrapped caption.
pub fn paint_slide(width: u32, height: u32, title: &str, lines: &[String]) -> RgbImage {
    let mut frame = RgbImage::from_pixel(width, height, BACKGROUND);

    if width > 2 * CARD_MARGIN && height > 2 * CARD_MARGIN {
        for y in CARD_MARGIN..height - CARD_MARGIN {
            for x in CARD_MARGIN..width - CARD_MARGIN {
                frame.put_pixel(x, y, CARD);
            }
        }
    }

    draw_text(&mut frame, title, TEXT_LEFT, TITLE_TOP, TITLE_SCALE, TITLE);

    for (i, line) in lines.iter().enumerate() {
        let y = BODY_TOP + i as u32 * BODY_LINE_STEP;
        draw_text(&mut frame, line, TEXT_LEFT, y, BODY_SCALE, BODY);
    }

    frame
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Pixels falling outside the frame are clipped.
fn draw_text(frame: &mut RgbImage, text: &str, left: u32, top: u32, scale: u32, color: Rgb<u8>) {
    let advance = GLYPH_SIZE * scale;

    for (index, c) in text.chars().enumerate() {
        let origin_x = left + index as u32 * advance;
        if origin_x >= frame.width() {
            break;
        }

        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                // bit 0 is the leftmost pixel
                if bits & (1 << col) == 0 {
                    continue;
                }
                let x0 = origin_x + col * scale;
                let y0 = top + row as u32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        let (x, y) = (x0 + dx, y0 + dy);
                        if x < frame.width() && y < frame.height() {
                            frame.put_pixel(x, y, color);
                        }
                    }
                }
            }
        }
    }
}
