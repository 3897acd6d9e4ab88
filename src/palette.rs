// The active paint color plus the swatches fetched from the color API.
// Visual: the chip in the toolbar shows `active`; the row under the canvas
// shows `scheme`, and clicking a swatch makes it active.

use crate::types::Color;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

pub const RANDOM_FAILED: &str = "Couldn't fetch a random color. Try again!";
pub const SCHEME_FAILED: &str = "Couldn't fetch a color scheme. Try again!";
pub const MAX_SWATCHES: usize = 8;

/// Fixed colors the user can pick with one click (the "color picker").
pub const PICKER: [Color; 12] = [
    Color::rgb(0, 0, 0),
    Color::rgb(255, 255, 255),
    Color::rgb(128, 128, 128),
    Color::rgb(255, 0, 0),
    Color::rgb(255, 128, 0),
    Color::rgb(255, 221, 0),
    Color::rgb(0, 170, 68),
    Color::rgb(0, 170, 255),
    Color::rgb(0, 68, 255),
    Color::rgb(136, 0, 255),
    Color::rgb(255, 0, 170),
    Color::rgb(120, 72, 40),
];

/// Harmony rules the scheme endpoint understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SchemeMode {
    #[default]
    Monochrome,
    MonochromeDark,
    MonochromeLight,
    Analogic,
    Complement,
    AnalogicComplement,
    Triad,
    Quad,
}

impl SchemeMode {
    pub const ALL: [SchemeMode; 8] = [
        SchemeMode::Monochrome,
        SchemeMode::MonochromeDark,
        SchemeMode::MonochromeLight,
        SchemeMode::Analogic,
        SchemeMode::Complement,
        SchemeMode::AnalogicComplement,
        SchemeMode::Triad,
        SchemeMode::Quad,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SchemeMode::Monochrome => "monochrome",
            SchemeMode::MonochromeDark => "monochrome-dark",
            SchemeMode::MonochromeLight => "monochrome-light",
            SchemeMode::Analogic => "analogic",
            SchemeMode::Complement => "complement",
            SchemeMode::AnalogicComplement => "analogic-complement",
            SchemeMode::Triad => "triad",
            SchemeMode::Quad => "quad",
        }
    }
}

impl fmt::Display for SchemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        SchemeMode::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| format!("unknown scheme mode: {s:?}"))
    }
}

/// What a finished fetch delivered. Errors are already flattened to text
/// because all the window does with them is log and show an alert.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    Random(Result<Color, String>),
    Scheme(Result<Vec<Color>, String>),
}

pub struct Palette {
    active: Color,
    scheme: Vec<Color>,
}

impl Palette {
    pub fn new(active: Color) -> Self {
        Self { active, scheme: Vec::new() }
    }

    pub fn active(&self) -> Color {
        self.active
    }

    pub fn scheme(&self) -> &[Color] {
        &self.scheme
    }

    /// Direct user selection. Cannot fail.
    pub fn select(&mut self, color: Color) {
        self.active = color;
    }

    /// Make swatch `i` active. Out-of-range clicks are ignored.
    pub fn select_swatch(&mut self, i: usize) -> bool {
        match self.scheme.get(i) {
            Some(&c) => {
                self.active = c;
                true
            }
            None => false,
        }
    }

    /// Apply a finished fetch. On failure the palette is untouched and the
    /// alert text for the user comes back.
    pub fn apply(&mut self, outcome: FetchOutcome) -> Option<&'static str> {
        match outcome {
            FetchOutcome::Random(Ok(color)) => {
                info!(%color, "random color applied");
                self.active = color;
                None
            }
            FetchOutcome::Random(Err(e)) => {
                warn!(error = %e, "random color fetch failed");
                Some(RANDOM_FAILED)
            }
            FetchOutcome::Scheme(Ok(colors)) if !colors.is_empty() => {
                info!(count = colors.len(), "color scheme applied");
                self.scheme = colors.into_iter().take(MAX_SWATCHES).collect();
                None
            }
            FetchOutcome::Scheme(Ok(_)) => {
                warn!("color scheme fetch returned no colors");
                Some(SCHEME_FAILED)
            }
            FetchOutcome::Scheme(Err(e)) => {
                warn!(error = %e, "color scheme fetch failed");
                Some(SCHEME_FAILED)
            }
        }
    }
}
