// Toolbar, picker/swatch rows and the two text fields: hit-testing and editing.
// Nothing in here draws; `render` paints what these structs describe.

use crate::draw::text_width;
use crate::grid::GridSize;
use crate::layout::{Rect, WindowLayout};
use crate::palette::{MAX_SWATCHES, PICKER};
use crate::types::Color;
use minifb::Key;

const PAD: usize = 6;
const GAP: usize = 8;
const FIELD_MAX_CHARS: usize = 6;

/// What a click landed on outside the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiTarget {
    SizeField,
    HexField,
    Reset,
    ToggleErase,
    Random,
    Scheme,
    Picker(usize),
    Swatch(usize),
}

pub struct Toolbar {
    pub scale: usize,
    pub size_label: (usize, usize),
    pub size_field: Rect,
    pub reset: Rect,
    pub erase: Rect,
    pub random: Rect,
    pub scheme: Rect,
    pub chip: Rect,
    /// Picker slots; the row minus the hex field on its right.
    pub picker: Rect,
    pub hex_field: Rect,
}

impl Toolbar {
    /// Lay the toolbar out left to right; the active-color chip hugs the right edge.
    pub fn new(window: &WindowLayout) -> Self {
        // big text only when there is room for it
        let scale = if window.width >= 600 { 2 } else { 1 };
        let h = 7 * scale + 2 * PAD;
        let y = window.toolbar.y + window.toolbar.h.saturating_sub(h) / 2;
        let mut x = window.canvas.x;

        let mut next = |label_width: usize| {
            let r = Rect::new(x, y, label_width + 2 * PAD, h);
            x += r.w + GAP;
            r
        };
        let label_w = text_width("Size", scale);
        let size_label_rect = next(label_w);
        let size_field = next(text_width(&"0".repeat(FIELD_MAX_CHARS), scale));
        let reset = next(text_width("Reset", scale));
        let erase = next(text_width("Erase", scale));
        let random = next(text_width("Random", scale));
        let scheme = next(text_width("Scheme", scale));
        let chip = Rect::new(window.canvas.x + window.canvas.w - h, y, h, h);

        // hex field: "#rrggbb" plus caret at scale 1, right end of the picker row
        let row = window.picker_row;
        let hex_w = text_width("#000000_", 1) + 2 * PAD;
        let hex_field = Rect::new(row.x + row.w - hex_w, row.y, hex_w, row.h);
        let picker = Rect::new(row.x, row.y, row.w - hex_w - GAP, row.h);

        Self {
            scale,
            size_label: (size_label_rect.x, y + PAD),
            size_field,
            reset,
            erase,
            random,
            scheme,
            chip,
            picker,
            hex_field,
        }
    }

    /// Text origin inside a button, centered.
    pub fn label_origin(&self, r: Rect, label: &str) -> (usize, usize) {
        let tw = text_width(label, self.scale);
        (r.x + r.w.saturating_sub(tw) / 2, r.y + PAD)
    }
}

/// Slot rectangle `i` of `slots` equal slots across a row.
pub fn slot_rect(row: Rect, slots: usize, i: usize) -> Rect {
    let w = row.w / slots.max(1);
    Rect::new(row.x + i * w, row.y, w.saturating_sub(2), row.h)
}

/// Resolve a click to a UI element. Swatch slots past `swatches` are empty.
pub fn hit(toolbar: &Toolbar, window: &WindowLayout, swatches: usize, x: usize, y: usize) -> Option<UiTarget> {
    let buttons = [
        (toolbar.size_field, UiTarget::SizeField),
        (toolbar.hex_field, UiTarget::HexField),
        (toolbar.chip, UiTarget::HexField),
        (toolbar.reset, UiTarget::Reset),
        (toolbar.erase, UiTarget::ToggleErase),
        (toolbar.random, UiTarget::Random),
        (toolbar.scheme, UiTarget::Scheme),
    ];
    if let Some((_, target)) = buttons.iter().find(|(r, _)| r.contains(x, y)) {
        return Some(*target);
    }
    if let Some(i) = (0..PICKER.len()).find(|&i| slot_rect(toolbar.picker, PICKER.len(), i).contains(x, y)) {
        return Some(UiTarget::Picker(i));
    }
    (0..swatches.min(MAX_SWATCHES))
        .find(|&i| slot_rect(window.swatch_row, MAX_SWATCHES, i).contains(x, y))
        .map(UiTarget::Swatch)
}

/// Character a key types into a text field, if any.
pub fn key_char(key: Key) -> Option<char> {
    let c = match key {
        Key::Key0 | Key::NumPad0 => '0',
        Key::Key1 | Key::NumPad1 => '1',
        Key::Key2 | Key::NumPad2 => '2',
        Key::Key3 | Key::NumPad3 => '3',
        Key::Key4 | Key::NumPad4 => '4',
        Key::Key5 | Key::NumPad5 => '5',
        Key::Key6 | Key::NumPad6 => '6',
        Key::Key7 | Key::NumPad7 => '7',
        Key::Key8 | Key::NumPad8 => '8',
        Key::Key9 | Key::NumPad9 => '9',
        Key::Period | Key::NumPadDot => '.',
        Key::Minus | Key::NumPadMinus => '-',
        Key::A => 'a', Key::B => 'b', Key::C => 'c', Key::D => 'd', Key::E => 'e',
        Key::F => 'f', Key::G => 'g', Key::H => 'h', Key::I => 'i', Key::J => 'j',
        Key::K => 'k', Key::L => 'l', Key::M => 'm', Key::N => 'n', Key::O => 'o',
        Key::P => 'p', Key::Q => 'q', Key::R => 'r', Key::S => 's', Key::T => 't',
        Key::U => 'u', Key::V => 'v', Key::W => 'w', Key::X => 'x', Key::Y => 'y',
        Key::Z => 'z',
        _ => return None,
    };
    Some(c)
}

/// A value a toolbar text field can edit.
pub trait FieldValue: Copy {
    const MAX_CHARS: usize;
    /// Whether a typed character goes into the scratch text.
    fn accepts(c: char) -> bool;
    /// `None` when the text does not name a value; the field then keeps its old one.
    fn from_text(text: &str) -> Option<Self>;
    fn to_text(self) -> String;
}

impl FieldValue for GridSize {
    const MAX_CHARS: usize = FIELD_MAX_CHARS;

    fn accepts(_: char) -> bool {
        true
    }

    fn from_text(text: &str) -> Option<Self> {
        Some(GridSize::parse(text))
    }

    fn to_text(self) -> String {
        self.get().to_string()
    }
}

impl FieldValue for Color {
    const MAX_CHARS: usize = 6;

    fn accepts(c: char) -> bool {
        c.is_ascii_hexdigit()
    }

    fn from_text(text: &str) -> Option<Self> {
        Color::from_hex(text)
    }

    fn to_text(self) -> String {
        self.to_string()
    }
}

/// A one-line input. Editing happens on a scratch string; only a commit
/// (Enter, or clicking away after an edit) produces a new value.
pub struct TextField<V> {
    committed: V,
    text: String,
    focused: bool,
    dirty: bool,
}

/// The grid-size input.
pub type SizeField = TextField<GridSize>;
/// The active-color hex input next to the picker.
pub type HexField = TextField<Color>;

impl<V: FieldValue> TextField<V> {
    pub fn new(value: V) -> Self {
        Self { committed: value, text: String::new(), focused: false, dirty: false }
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    /// What the field shows: the scratch text with a caret while editing,
    /// otherwise the committed (normalised) value.
    pub fn display(&self) -> String {
        if self.focused {
            format!("{}_", self.text)
        } else {
            self.committed.to_text()
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.text.clear();
        self.dirty = false;
    }

    /// Show a value that was set from elsewhere (e.g. after a rebuild).
    pub fn set_committed(&mut self, value: V) {
        self.committed = value;
    }

    /// Leave the field; an edited value commits, an untouched one does not.
    pub fn blur(&mut self) -> Option<V> {
        if !self.focused {
            return None;
        }
        if self.dirty { self.commit() } else { self.focused = false; None }
    }

    /// Feed one key. Returns the new value when Enter commits.
    pub fn key(&mut self, key: Key) -> Option<V> {
        match key {
            Key::Enter | Key::NumPadEnter => self.commit(),
            Key::Escape => {
                self.focused = false;
                None
            }
            Key::Backspace => {
                self.text.pop();
                self.dirty = true;
                None
            }
            other => {
                if let Some(c) = key_char(other).filter(|&c| V::accepts(c)) {
                    if self.text.chars().count() < V::MAX_CHARS {
                        self.text.push(c);
                        self.dirty = true;
                    }
                }
                None
            }
        }
    }

    fn commit(&mut self) -> Option<V> {
        self.focused = false;
        self.dirty = false;
        let value = V::from_text(&self.text)?;
        self.committed = value;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(field: &mut SizeField, keys: &[Key]) -> Option<GridSize> {
        keys.iter().fold(None, |_, &k| field.key(k))
    }

    #[test]
    fn typed_size_commits_normalised() {
        let mut f = SizeField::new(GridSize::default());
        f.focus();
        assert_eq!(type_text(&mut f, &[Key::Key2, Key::Enter]), Some(GridSize::clamped(5)));
        assert_eq!(f.display(), "5");
        f.focus();
        assert_eq!(type_text(&mut f, &[Key::A, Key::B, Key::C, Key::Enter]), Some(GridSize::clamped(30)));
        f.focus();
        assert_eq!(type_text(&mut f, &[Key::Key1, Key::Key2, Key::Enter]).map(GridSize::get), Some(12));
    }

    #[test]
    fn escape_cancels_and_untouched_blur_is_a_no_op() {
        let mut f = SizeField::new(GridSize::clamped(20));
        f.focus();
        type_text(&mut f, &[Key::Key9, Key::Escape]);
        assert!(!f.focused());
        assert_eq!(f.display(), "20");
        f.focus();
        assert_eq!(f.blur(), None);
        f.focus();
        f.key(Key::Key7);
        assert_eq!(f.blur(), Some(GridSize::clamped(7)));
    }

    #[test]
    fn field_length_is_capped() {
        let mut f = SizeField::new(GridSize::default());
        f.focus();
        for _ in 0..20 {
            f.key(Key::Key1);
        }
        assert_eq!(f.display(), "111111_");
        f.key(Key::Backspace);
        assert_eq!(f.display(), "11111_");
    }

    #[test]
    fn clicks_resolve_to_targets() {
        let window = WindowLayout::new(600);
        let bar = Toolbar::new(&window);
        let c = |r: Rect| (r.x + 1, r.y + 1);
        let (x, y) = c(bar.reset);
        assert_eq!(hit(&bar, &window, 0, x, y), Some(UiTarget::Reset));
        let (x, y) = c(bar.erase);
        assert_eq!(hit(&bar, &window, 0, x, y), Some(UiTarget::ToggleErase));
        let (x, y) = c(slot_rect(bar.picker, PICKER.len(), 3));
        assert_eq!(hit(&bar, &window, 0, x, y), Some(UiTarget::Picker(3)));
        let (x, y) = c(slot_rect(window.swatch_row, MAX_SWATCHES, 1));
        assert_eq!(hit(&bar, &window, 0, x, y), None);
        assert_eq!(hit(&bar, &window, 2, x, y), Some(UiTarget::Swatch(1)));
        assert_eq!(hit(&bar, &window, 0, window.canvas.x + 5, window.canvas.y + 5), None);
        let (x, y) = c(bar.hex_field);
        assert_eq!(hit(&bar, &window, 0, x, y), Some(UiTarget::HexField));
        let (x, y) = c(bar.chip);
        assert_eq!(hit(&bar, &window, 0, x, y), Some(UiTarget::HexField));
    }

    #[test]
    fn toolbar_fits_in_the_window() {
        for px in [320, 600, 2000] {
            let window = WindowLayout::new(px);
            let bar = Toolbar::new(&window);
            assert!(bar.scheme.x + bar.scheme.w <= bar.chip.x, "canvas {px}");
            assert!(bar.chip.x + bar.chip.w <= window.width, "canvas {px}");
        }
    }

    #[test]
    fn hex_field_sits_beside_the_picker_slots() {
        for px in [320, 600, 2000] {
            let window = WindowLayout::new(px);
            let bar = Toolbar::new(&window);
            let last = slot_rect(bar.picker, PICKER.len(), PICKER.len() - 1);
            assert!(last.x + last.w < bar.hex_field.x, "canvas {px}");
            assert!(bar.hex_field.x + bar.hex_field.w <= window.picker_row.x + window.picker_row.w);
            // widest text the field ever shows still fits inside it
            assert!(text_width("#000000_", 1) < bar.hex_field.w);
            assert!(slot_rect(bar.picker, PICKER.len(), 0).w >= 10, "canvas {px}");
        }
    }

    #[test]
    fn hex_field_takes_hex_digits_only() {
        let mut f = HexField::new(Color::BLACK);
        assert_eq!(f.display(), "#000000");
        f.focus();
        let keys = [Key::F, Key::G, Key::F, Key::Key8, Key::Key8, Key::Key0, Key::Key0];
        assert_eq!(keys.iter().fold(None, |_, &k| f.key(k)), None);
        assert_eq!(f.display(), "ff8800_");
        assert_eq!(f.key(Key::Enter), Some(Color::rgb(0xFF, 0x88, 0x00)));
        assert_eq!(f.display(), "#ff8800");
    }

    #[test]
    fn unparsable_hex_keeps_the_old_color() {
        let mut f = HexField::new(Color::WHITE);
        f.focus();
        f.key(Key::A);
        f.key(Key::B);
        assert_eq!(f.key(Key::Enter), None);
        assert!(!f.focused());
        assert_eq!(f.display(), "#ffffff");
    }
}
