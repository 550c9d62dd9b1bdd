//! # Tablero CLI
//!
//! Draws a quiz score table JSON file as a PNG image.
//!
//! ## Usage
//!
//! ```bash
//! # Render a score table
//! tablero score_table.json score_table.png
//!
//! # Render with an explicit font
//! tablero --font /usr/share/fonts/TTF/DejaVuSans.ttf table.json out.png
//! ```

use clap::Parser;
use std::path::PathBuf;

use tablero::{RawTable, TableDrawer, TableroError};

/// Tablero - score table PNG renderer
#[derive(Parser, Debug)]
#[command(name = "tablero")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with the score table
    data: PathBuf,

    /// Where to put the result image
    output: PathBuf,

    /// Explicit TTF/OTF font file (default: search system font locations)
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TableroError> {
    let cli = Cli::parse();

    let json = std::fs::read_to_string(&cli.data)?;
    let raw: RawTable = serde_json::from_str(&json)?;

    println!(
        "Rendering {} topics x {} scores...",
        raw.data.len(),
        raw.scores.len()
    );

    let drawer = TableDrawer::from_font_path(cli.font.as_deref())?;
    drawer.draw(&raw, &cli.output)?;

    println!("Saved to {}", cli.output.display());
    Ok(())
}
