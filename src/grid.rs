// The drawing grid: N×N cells, each with an optional color.
// Visual: this is the artwork you see; an unpainted cell shows the checkerboard.

use crate::types::Color;
use tracing::info;

pub const MIN_SIZE: usize = 5;
pub const MAX_SIZE: usize = 50;
pub const DEFAULT_SIZE: usize = 30;

/// A grid side length that is always inside [MIN_SIZE, MAX_SIZE].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize(usize);

impl GridSize {
    /// Clamp any integer into range. Zero counts as "missing" and gives the default.
    pub fn clamped(n: i64) -> Self {
        if n == 0 {
            return Self(DEFAULT_SIZE);
        }
        Self(n.clamp(MIN_SIZE as i64, MAX_SIZE as i64) as usize)
    }

    /// Normalise raw size-field text. Never fails:
    /// non-numeric or empty → 30, exact zero → 30, anything else clamps
    /// first and then truncates (so "0.5" is below the minimum, not zero).
    /// `0x`/`0o`/`0b` prefixes read as hex, octal and binary.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if let Ok(n) = text.parse::<i64>() {
            return Self::clamped(n);
        }
        if let Some(n) = parse_radix(text) {
            return Self::clamped(n);
        }
        match text.parse::<f64>() {
            Ok(f) if f == 0.0 => Self(DEFAULT_SIZE),
            // NaN is "not a number"; infinities clamp like any other value
            Ok(f) if !f.is_nan() => Self(f.clamp(MIN_SIZE as f64, MAX_SIZE as f64) as usize),
            _ => Self(DEFAULT_SIZE),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// Unsigned integer literal with a radix prefix; overflow saturates.
fn parse_radix(text: &str) -> Option<i64> {
    let lower = text.to_ascii_lowercase();
    let (digits, radix) = if let Some(d) = lower.strip_prefix("0x") {
        (d, 16)
    } else if let Some(d) = lower.strip_prefix("0o") {
        (d, 8)
    } else if let Some(d) = lower.strip_prefix("0b") {
        (d, 2)
    } else {
        return None;
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    Some(i64::from_str_radix(digits, radix).unwrap_or(i64::MAX))
}

impl Default for GridSize {
    fn default() -> Self {
        Self(DEFAULT_SIZE)
    }
}

/// Bumped on every build so references into a discarded grid can be detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Generation(u64);

/// A cell address that is only valid for the grid generation it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRef {
    pub generation: Generation,
    pub index: usize,
}

pub struct Grid {
    size: GridSize,
    cells: Vec<Option<Color>>, // row-major, len = size * size
    generation: Generation,
}

impl Grid {
    pub fn new(size: GridSize) -> Self {
        let mut grid = Self { size, cells: Vec::new(), generation: Generation::default() };
        grid.build(size);
        grid
    }

    /// Throw away every cell and allocate a fresh, uncolored grid.
    /// Returns the new generation; callers rebuild their hit-test layout from it.
    pub fn build(&mut self, size: GridSize) -> Generation {
        let n = size.get();
        self.size = size;
        self.cells = vec![None; n * n];
        self.generation = Generation(self.generation.0 + 1);
        info!(size = n, generation = self.generation.0, "grid built");
        self.generation
    }

    /// Same size, all colors cleared.
    pub fn reset(&mut self) -> Generation {
        self.build(self.size)
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Address of the cell at (row, col) in the current generation.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<CellRef> {
        let n = self.size.get();
        if row >= n || col >= n {
            return None;
        }
        Some(CellRef { generation: self.generation, index: row * n + col })
    }

    /// Address of the cell at a row-major index in the current generation.
    pub fn cell(&self, index: usize) -> Option<CellRef> {
        (index < self.cells.len()).then_some(CellRef { generation: self.generation, index })
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.cells.get(index).copied().flatten()
    }

    /// Set or clear a cell. Stale references (older generation) are ignored.
    /// Returns true when the visible state changed.
    pub fn set(&mut self, cell: CellRef, color: Option<Color>) -> bool {
        if cell.generation != self.generation {
            return false;
        }
        match self.cells.get_mut(cell.index) {
            Some(slot) if *slot != color => {
                *slot = color;
                true
            }
            _ => false,
        }
    }

    pub fn paint(&mut self, cell: CellRef, color: Color) -> bool {
        self.set(cell, Some(color))
    }

    pub fn erase(&mut self, cell: CellRef) -> bool {
        self.set(cell, None)
    }

    /// (row, col, color) for every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Option<Color>)> + '_ {
        let n = self.size.get();
        self.cells.iter().enumerate().map(move |(i, c)| (i / n, i % n, *c))
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
