//! # Tablero - Quiz Score Table Renderer
//!
//! Tablero renders a grid-based quiz score table as a PNG image from a
//! JSON description of topics (rows) and valid score values (columns).
//!
//! ## Quick Start
//!
//! ```no_run
//! use tablero::{RawTable, TableDrawer};
//! use std::path::Path;
//!
//! let json = std::fs::read_to_string("score_table.json")?;
//! let raw: RawTable = serde_json::from_str(&json)?;
//!
//! // Uses the first available system font.
//! let drawer = TableDrawer::from_font_path(None)?;
//! drawer.draw(&raw, Path::new("score_table.png"))?;
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`schema`] | JSON input types and value coercion |
//! | [`table`] | Validated row/column model |
//! | [`layout`] | Fixed metrics and grid geometry |
//! | [`typeset`] | Font loading, measurement, size search |
//! | [`render`] | RGB canvas and PNG encoding |
//! | [`drawer`] | The end-to-end pipeline |
//! | [`error`] | Error types |
//!
//! The pipeline is strictly sequential: parse → validate → geometry →
//! font size → coordinates → grid → text → save. Validation failures
//! abort before anything is drawn or written.

pub mod drawer;
pub mod error;
pub mod layout;
pub mod render;
pub mod schema;
pub mod table;
pub mod typeset;

// Re-exports for convenience
pub use drawer::TableDrawer;
pub use error::TableroError;
pub use schema::RawTable;
pub use table::Table;
