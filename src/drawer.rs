//! End-to-end table drawing pipeline.
//!
//! `TableDrawer` threads one immutable stage result into the next:
//! validated table → geometry → font size → text placement → painting →
//! PNG. Nothing is written to disk until every earlier stage has
//! succeeded.

use std::path::Path;

use crate::error::TableroError;
use crate::layout::{CELL_OFFSET, Layout};
use crate::render::Canvas;
use crate::schema::RawTable;
use crate::table::Table;
use crate::typeset::{GlyphShaper, TextShaper, load_font, table_font_size};

/// A cell text with its resolved top-left pixel position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedText<'a> {
    pub x: i32,
    pub y: i32,
    pub text: &'a str,
}

/// Resolve the position of every non-empty cell text.
///
/// The topic column is left-aligned at the fixed cell padding; score
/// columns center their label horizontally. All cells center vertically
/// within their row.
pub fn place_texts<'a>(
    shaper: &impl TextShaper,
    table: &'a Table,
    layout: &Layout,
    px_size: u32,
) -> Vec<PlacedText<'a>> {
    let mut placed = Vec::new();

    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            let (w, h) = shaper.measure(cell, px_size);

            let x = if col_idx == 0 {
                CELL_OFFSET as i32
            } else {
                let left = layout.xs[col_idx] as i32;
                let right = layout.xs[col_idx + 1] as i32;
                left + (right - left - w as i32) / 2
            };

            let top = layout.ys[row_idx] as i32;
            let bottom = layout.ys[row_idx + 1] as i32;
            let y = top + (bottom - top - h as i32) / 2;

            placed.push(PlacedText { x, y, text: cell });
        }
    }

    placed
}

/// Draws a score table as a PNG image.
///
/// One drawer holds one shaper (one loaded font); each `draw` call is an
/// independent computation over fresh state.
pub struct TableDrawer<S: TextShaper> {
    shaper: S,
}

impl TableDrawer<GlyphShaper> {
    /// Drawer over a real font: an explicit TTF/OTF path, or the first
    /// available system font.
    pub fn from_font_path(font: Option<&Path>) -> Result<Self, TableroError> {
        Ok(Self::new(GlyphShaper::new(load_font(font)?)))
    }
}

impl<S: TextShaper> TableDrawer<S> {
    pub fn new(shaper: S) -> Self {
        Self { shaper }
    }

    /// Render a validated table onto a fresh canvas.
    pub fn render(&self, table: &Table) -> Canvas {
        let layout = Layout::for_counts(table.topics.len(), table.scores.len());
        let px_size = table_font_size(&self.shaper, table, layout.height);
        let placed = place_texts(&self.shaper, table, &layout, px_size);

        let mut canvas = Canvas::new(layout.width, layout.height);
        for &x in &layout.xs {
            canvas.draw_vline(x);
        }
        for &y in &layout.ys {
            canvas.draw_hline(y);
        }
        for text in &placed {
            self.shaper
                .paint(&mut canvas, text.text, px_size, text.x, text.y);
        }

        canvas
    }

    /// Validate, render, and save as PNG.
    ///
    /// Parse and validation failures abort before any drawing, so no
    /// partial output file is ever left behind.
    pub fn draw(&self, raw: &RawTable, output: &Path) -> Result<(), TableroError> {
        let table = Table::from_raw(raw)?;
        let canvas = self.render(&table);
        canvas.save_png(output)
    }
}
