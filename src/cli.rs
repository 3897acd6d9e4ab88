//! Command-line definitions. `main.rs` only dispatches on these.

use clap::{Parser, Subcommand};
use pixel_canvas::palette::SchemeMode;
use pixel_canvas::types::Color;
use std::path::PathBuf;

/// Pixel-art canvas with a fetched palette
#[derive(Parser, Debug)]
#[command(name = "pixel-canvas")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Log at info level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log at debug level
    #[arg(long, global = true)]
    pub debug: bool,

    /// Defaults to `draw`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Open the canvas window
    Draw(DrawArgs),

    /// Build a UPI payment link and save its QR code as PNG
    Upi {
        /// Payee UPI id, e.g. merchant@bank
        payee: String,

        /// Amount in INR
        amount: String,

        /// Payee name shown in the payment app
        #[arg(short, long, default_value = "")]
        name: String,

        /// QR side length in pixels
        #[arg(long, default_value_t = pixel_canvas::upi::DEFAULT_QR_SIZE)]
        size: u32,

        /// Where to write the PNG
        #[arg(short, long, default_value = "upi-qr.png")]
        out: PathBuf,
    },

    /// Search songs by title or artist
    Search {
        /// Search words
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },
}

#[derive(clap::Args, Debug, Default)]
pub(crate) struct DrawArgs {
    /// Initial grid size (clamped to 5..=50)
    #[arg(short, long)]
    pub size: Option<String>,

    /// Starting color, e.g. "#ff8800" or "f80"
    #[arg(short, long)]
    pub color: Option<Color>,

    /// Side of the drawing area in window pixels
    #[arg(long)]
    pub canvas_px: Option<usize>,

    /// Base URL of the color service
    #[arg(long)]
    pub color_api: Option<String>,

    /// Scheme mode for scheme fetches
    #[arg(long)]
    pub scheme_mode: Option<SchemeMode>,

    /// Swatches per scheme fetch (1..=8)
    #[arg(long)]
    pub scheme_count: Option<usize>,
}
