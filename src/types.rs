// Core value types shared by the grid, the palette and the renderer.

use std::fmt;
use std::str::FromStr;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the window is (pixels)
    pub height: usize,     // how tall the window is (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A buffer filled with one color.
    pub fn new(width: usize, height: usize, fill: u32) -> Self {
        Self { width, height, pixels: vec![fill; width * height] }
    }

    /// Visual: wipes the whole window to `color` before a frame is drawn.
    pub fn clear(&mut self, color: u32) {
        for p in &mut self.pixels {
            *p = color;
        }
    }
}

/// A 24-bit RGB color. Text form is `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub fn r(self) -> u8 { (self.0 >> 16) as u8 }
    pub fn g(self) -> u8 { (self.0 >> 8) as u8 }
    pub fn b(self) -> u8 { self.0 as u8 }

    /// Packed 0x00RRGGBB, ready for the framebuffer.
    pub fn to_pixel(self) -> u32 {
        self.0
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb` (any case).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => u32::from_str_radix(hex, 16).ok().map(Color),
            3 => {
                let v = u32::from_str_radix(hex, 16).ok()?;
                let (r, g, b) = ((v >> 8) & 0xF, (v >> 4) & 0xF, v & 0xF);
                Some(Color((r * 0x11) << 16 | (g * 0x11) << 8 | b * 0x11))
            }
            _ => None,
        }
    }

    /// The six hex digits without the leading `#` (what the scheme endpoint wants).
    pub fn hex_digits(self) -> String {
        format!("{:06x}", self.0)
    }

    /// Perceived brightness, used to pick black or white text on top of a color.
    pub fn is_light(self) -> bool {
        let luma = 299 * self.r() as u32 + 587 * self.g() as u32 + 114 * self.b() as u32;
        luma > 128_000
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s).ok_or_else(|| format!("not a hex color: {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::from_hex("00ff7f"), Some(Color::rgb(0, 255, 127)));
        assert_eq!(Color::from_hex("#abc"), Some(Color::rgb(0xAA, 0xBB, 0xCC)));
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("+12345"), None);
    }

    #[test]
    fn displays_lowercase_with_hash() {
        let c: Color = "#A1B2C3".parse().unwrap();
        assert_eq!(c.to_string(), "#a1b2c3");
        assert_eq!(c.hex_digits(), "a1b2c3");
    }

    #[test]
    fn lightness_split() {
        assert!(Color::WHITE.is_light());
        assert!(!Color::BLACK.is_light());
    }
}
