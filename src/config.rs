//! Runtime settings: defaults, then environment, then command-line flags.

use crate::color_api::DEFAULT_COLOR_API;
use crate::grid::GridSize;
use crate::palette::{MAX_SWATCHES, SchemeMode};
use crate::tracks::DEFAULT_TRACK_API;
use crate::types::Color;
use crate::upi::DEFAULT_QR_API;
use std::env;
use std::str::FromStr;
use tracing::warn;

pub const ENV_SIZE: &str = "PIXEL_CANVAS_SIZE";
pub const ENV_COLOR_API: &str = "PIXEL_CANVAS_COLOR_API";
pub const ENV_QR_API: &str = "PIXEL_CANVAS_QR_API";
pub const ENV_TRACK_API: &str = "PIXEL_CANVAS_TRACK_API";
pub const ENV_SCHEME_MODE: &str = "PIXEL_CANVAS_SCHEME_MODE";
pub const ENV_SCHEME_COUNT: &str = "PIXEL_CANVAS_SCHEME_COUNT";
pub const ENV_CANVAS_PX: &str = "PIXEL_CANVAS_CANVAS_PX";
pub const ENV_COLOR: &str = "PIXEL_CANVAS_COLOR";

const DEFAULT_SCHEME_COUNT: usize = 5;
const DEFAULT_CANVAS_PX: usize = 600;
const MIN_CANVAS_PX: usize = 320; // narrowest window the toolbar still fits in
const MAX_CANVAS_PX: usize = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Grid side length used at startup.
    pub initial_size: GridSize,
    /// Active color at startup.
    pub initial_color: Color,
    pub color_api: String,
    pub qr_api: String,
    pub track_api: String,
    pub scheme_mode: SchemeMode,
    /// Swatches requested per scheme fetch, 1..=MAX_SWATCHES.
    pub scheme_count: usize,
    /// Side of the square drawing area in window pixels.
    pub canvas_px: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_size: GridSize::default(),
            initial_color: Color::BLACK,
            color_api: DEFAULT_COLOR_API.to_string(),
            qr_api: DEFAULT_QR_API.to_string(),
            track_api: DEFAULT_TRACK_API.to_string(),
            scheme_mode: SchemeMode::default(),
            scheme_count: DEFAULT_SCHEME_COUNT,
            canvas_px: DEFAULT_CANVAS_PX,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their default, unparsable
    /// values keep their default and log a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(v) = lookup(ENV_SIZE) {
            cfg.initial_size = GridSize::parse(&v);
        }
        if let Some(color) = parsed(&lookup, ENV_COLOR) {
            cfg.initial_color = color;
        }
        if let Some(v) = lookup(ENV_COLOR_API) {
            cfg.color_api = v;
        }
        if let Some(v) = lookup(ENV_QR_API) {
            cfg.qr_api = v;
        }
        if let Some(v) = lookup(ENV_TRACK_API) {
            cfg.track_api = v;
        }
        if let Some(mode) = parsed(&lookup, ENV_SCHEME_MODE) {
            cfg.scheme_mode = mode;
        }
        if let Some(count) = parsed::<usize>(&lookup, ENV_SCHEME_COUNT) {
            cfg.scheme_count = count;
        }
        if let Some(px) = parsed::<usize>(&lookup, ENV_CANVAS_PX) {
            cfg.canvas_px = px;
        }
        cfg.normalise()
    }

    /// Pull numeric settings back into range.
    pub fn normalise(mut self) -> Self {
        self.scheme_count = self.scheme_count.clamp(1, MAX_SWATCHES);
        self.canvas_px = self.canvas_px.clamp(MIN_CANVAS_PX, MAX_CANVAS_PX);
        self
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "ignoring invalid setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(from_pairs(&[]), Config::default());
    }

    #[test]
    fn values_are_read_and_normalised() {
        let cfg = from_pairs(&[
            (ENV_SIZE, "3"),
            (ENV_SCHEME_MODE, "Triad"),
            (ENV_SCHEME_COUNT, "40"),
            (ENV_CANVAS_PX, "10"),
            (ENV_COLOR_API, "http://localhost:8080"),
            (ENV_COLOR, "#0af"),
        ]);
        assert_eq!(cfg.initial_color, Color::rgb(0x00, 0xAA, 0xFF));
        assert_eq!(cfg.initial_size.get(), 5);
        assert_eq!(cfg.scheme_mode, SchemeMode::Triad);
        assert_eq!(cfg.scheme_count, MAX_SWATCHES);
        assert_eq!(cfg.canvas_px, MIN_CANVAS_PX);
        assert_eq!(cfg.color_api, "http://localhost:8080");
    }

    #[test]
    fn garbage_keeps_defaults() {
        let cfg = from_pairs(&[(ENV_SCHEME_MODE, "plaid"), (ENV_SCHEME_COUNT, "many"), (ENV_COLOR, "teal")]);
        assert_eq!(cfg.initial_color, Color::BLACK);
        assert_eq!(cfg.scheme_mode, SchemeMode::default());
        assert_eq!(cfg.scheme_count, DEFAULT_SCHEME_COUNT);
    }
}
