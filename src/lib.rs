//! Pixel-art canvas: a square grid you paint with the mouse, a palette that
//! can pull random colors and schemes from a color service, plus two small
//! command-line companions (UPI payment QR codes and song search).

pub mod app;
pub mod color_api;
pub mod config;
pub mod draw;
pub mod engine;
pub mod error;
pub mod fetcher;
pub mod grid;
pub mod input;
pub mod layout;
pub mod palette;
pub mod render;
pub mod tracks;
pub mod types;
pub mod ui;
pub mod upi;

pub use error::{Error, Result};
