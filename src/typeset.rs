//! Font loading, text measurement, and the table-wide font size search.
//!
//! Geometry and the size search only see the [`TextShaper`] trait, so the
//! whole layout pipeline can run against a fake shaper in tests. The real
//! implementation, [`GlyphShaper`], measures and rasterizes through
//! ab_glyph.

use std::path::Path;

use ab_glyph::{Font, FontArc, ScaleFont, point};

use crate::error::TableroError;
use crate::layout::{CELL_OFFSET, ROW_HEIGHT, SCORE_WIDTH, TOPIC_WIDTH};
use crate::render::{Canvas, TEXT_COLOR};
use crate::table::Table;

/// Hard lower bound for the font size search. Below this the text is
/// allowed to overflow its cell rather than shrink further; overflow is
/// accepted silently, never an error.
pub const MIN_FONT_SIZE: u32 = 10;

/// Candidate font locations, tried in order when no explicit path is given.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:/Windows/Fonts/arial.ttf",
];

/// Measures and paints text runs at integer pixel sizes.
pub trait TextShaper {
    /// Tight pixel bounding box (width, height) of `text` at `px_size`.
    fn measure(&self, text: &str, px_size: u32) -> (u32, u32);

    /// Paint `text` onto `canvas` with its box's top-left corner at
    /// `(x, y)`.
    fn paint(&self, canvas: &mut Canvas, text: &str, px_size: u32, x: i32, y: i32);
}

/// Load the table font: an explicit path if given, otherwise the first
/// readable candidate from the known font locations.
pub fn load_font(explicit: Option<&Path>) -> Result<FontArc, TableroError> {
    if let Some(path) = explicit {
        let data = std::fs::read(path).map_err(|e| {
            TableroError::Font(format!("can't read font {}: {}", path.display(), e))
        })?;
        return FontArc::try_from_vec(data).map_err(|e| {
            TableroError::Font(format!("invalid font data in {}: {}", path.display(), e))
        });
    }

    for candidate in FONT_CANDIDATES {
        if let Ok(data) = std::fs::read(candidate) {
            return FontArc::try_from_vec(data).map_err(|e| {
                TableroError::Font(format!("invalid font data in {candidate}: {e}"))
            });
        }
    }

    Err(TableroError::Font(
        "no usable font found; pass an explicit TTF/OTF path with --font".to_string(),
    ))
}

/// [`TextShaper`] backed by an ab_glyph font.
pub struct GlyphShaper {
    font: FontArc,
}

impl GlyphShaper {
    pub fn new(font: FontArc) -> Self {
        Self { font }
    }
}

impl TextShaper for GlyphShaper {
    fn measure(&self, text: &str, px_size: u32) -> (u32, u32) {
        let scaled = self.font.as_scaled(px_size as f32);

        let mut width = 0.0f32;
        for ch in text.chars() {
            width += scaled.h_advance(self.font.glyph_id(ch));
        }
        let height = scaled.ascent() - scaled.descent();

        (width.ceil() as u32, height.ceil() as u32)
    }

    fn paint(&self, canvas: &mut Canvas, text: &str, px_size: u32, x: i32, y: i32) {
        let scaled = self.font.as_scaled(px_size as f32);
        let baseline = y as f32 + scaled.ascent();
        let mut caret = x as f32;

        for ch in text.chars() {
            let glyph_id = self.font.glyph_id(ch);
            let glyph =
                glyph_id.with_scale_and_position(px_size as f32, point(caret, baseline));
            caret += scaled.h_advance(glyph_id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    let px = gx as i32 + bounds.min.x as i32;
                    let py = gy as i32 + bounds.min.y as i32;
                    canvas.blend_pixel(px, py, TEXT_COLOR, coverage);
                });
            }
        }
    }
}

/// Largest integer size, starting at `start` and decrementing, at which
/// `text` fits a `max_w` x `max_h` box.
///
/// Stops at [`MIN_FONT_SIZE`] and returns it even when the text still
/// overflows. Ties prefer the larger size: the first fitting size on the
/// way down wins.
pub fn fit_size(
    shaper: &impl TextShaper,
    text: &str,
    max_w: u32,
    max_h: u32,
    start: u32,
) -> u32 {
    let mut size = start;
    let (mut w, mut h) = shaper.measure(text, size);
    while size > MIN_FONT_SIZE && (w > max_w || h > max_h) {
        size -= 1;
        (w, h) = shaper.measure(text, size);
    }
    size
}

/// Table-wide font size: the minimum over every topic name and score
/// label of its maximal fitting size, each fitted against its column's
/// interior width and the row height.
pub fn table_font_size(shaper: &impl TextShaper, table: &Table, canvas_height: u32) -> u32 {
    let mut size = canvas_height;
    for topic in &table.topics {
        size = size.min(fit_size(
            shaper,
            topic,
            TOPIC_WIDTH - 2 * CELL_OFFSET,
            ROW_HEIGHT,
            ROW_HEIGHT,
        ));
    }
    for score in &table.scores {
        size = size.min(fit_size(
            shaper,
            score,
            SCORE_WIDTH - 2 * CELL_OFFSET,
            ROW_HEIGHT,
            ROW_HEIGHT,
        ));
    }
    size
}
