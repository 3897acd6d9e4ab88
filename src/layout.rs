// Where everything sits in the window, and which cell a pixel belongs to.
// Visual: toolbar across the top, the square canvas under it, then the picker
// row and the scheme swatch row at the bottom.

use crate::grid::{CellRef, Generation, Grid};

pub const MARGIN: usize = 12;
pub const TOOLBAR_H: usize = 40;
pub const ROW_GAP: usize = 8;
pub const SWATCH_H: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, px: usize, py: usize) -> bool {
        px >= self.x && py >= self.y && px < self.x + self.w && py < self.y + self.h
    }
}

/// Fixed window regions for a given canvas side length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowLayout {
    pub width: usize,
    pub height: usize,
    pub toolbar: Rect,
    pub canvas: Rect,
    pub picker_row: Rect,
    pub swatch_row: Rect,
}

impl WindowLayout {
    pub fn new(canvas_px: usize) -> Self {
        let width = canvas_px + 2 * MARGIN;
        let canvas = Rect::new(MARGIN, TOOLBAR_H, canvas_px, canvas_px);
        let picker_row = Rect::new(MARGIN, canvas.y + canvas.h + ROW_GAP, canvas_px, SWATCH_H);
        let swatch_row = Rect::new(MARGIN, picker_row.y + SWATCH_H + ROW_GAP, canvas_px, SWATCH_H);
        let height = swatch_row.y + SWATCH_H + MARGIN;
        Self {
            width,
            height,
            toolbar: Rect::new(0, 0, width, TOOLBAR_H),
            canvas,
            picker_row,
            swatch_row,
        }
    }
}

/// Pixel → cell mapping for one grid generation. Rebuilt whenever the grid is,
/// so hits always name cells that exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellLayout {
    origin_x: usize,
    origin_y: usize,
    cell_px: usize,
    n: usize,
    generation: Generation,
}

impl CellLayout {
    /// Square cells of whole pixels, centered inside `area`.
    pub fn new(grid: &Grid, area: Rect) -> Self {
        let n = grid.size().get();
        let cell_px = (area.w.min(area.h) / n).max(1);
        let used = cell_px * n;
        Self {
            origin_x: area.x + area.w.saturating_sub(used) / 2,
            origin_y: area.y + area.h.saturating_sub(used) / 2,
            cell_px,
            n,
            generation: grid.generation(),
        }
    }

    pub fn cell_px(&self) -> usize {
        self.cell_px
    }

    pub fn side(&self) -> usize {
        self.n
    }

    /// The whole drawn grid.
    pub fn bounds(&self) -> Rect {
        let side = self.cell_px * self.n;
        Rect::new(self.origin_x, self.origin_y, side, side)
    }

    /// (row, col) under a window pixel, if any.
    pub fn row_col(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        Some(((y - self.origin_y) / self.cell_px, (x - self.origin_x) / self.cell_px))
    }

    pub fn cell_ref(&self, row: usize, col: usize) -> Option<CellRef> {
        (row < self.n && col < self.n)
            .then_some(CellRef { generation: self.generation, index: row * self.n + col })
    }

    pub fn hit(&self, x: usize, y: usize) -> Option<CellRef> {
        let (row, col) = self.row_col(x, y)?;
        self.cell_ref(row, col)
    }

    /// Screen rectangle of one cell.
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            self.origin_x + col * self.cell_px,
            self.origin_y + row * self.cell_px,
            self.cell_px,
            self.cell_px,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSize;

    #[test]
    fn cells_tile_the_canvas_centered() {
        let grid = Grid::new(GridSize::clamped(7));
        let layout = CellLayout::new(&grid, Rect::new(10, 40, 100, 100));
        // 100 / 7 = 14 px per cell, 98 used, 1 px slack each side
        assert_eq!(layout.cell_px(), 14);
        assert_eq!(layout.bounds(), Rect::new(11, 41, 98, 98));
        assert_eq!(layout.hit(11, 41).map(|c| c.index), Some(0));
        assert_eq!(layout.hit(11 + 14, 41).map(|c| c.index), Some(1));
        assert_eq!(layout.hit(11 + 97, 41 + 97).map(|c| c.index), Some(48));
        assert_eq!(layout.hit(10, 41), None);
        assert_eq!(layout.hit(11 + 98, 41), None);
    }

    #[test]
    fn hits_carry_the_layout_generation() {
        let mut grid = Grid::new(GridSize::clamped(5));
        let old = CellLayout::new(&grid, Rect::new(0, 0, 50, 50));
        grid.build(GridSize::clamped(10));
        let new = CellLayout::new(&grid, Rect::new(0, 0, 50, 50));
        assert_ne!(old.hit(0, 0).unwrap().generation, grid.generation());
        assert_eq!(new.hit(0, 0).unwrap().generation, grid.generation());
        assert_eq!(new.cell_px(), 5);
    }

    #[test]
    fn window_regions_stack_vertically() {
        let w = WindowLayout::new(600);
        assert_eq!(w.width, 624);
        assert!(w.toolbar.y + w.toolbar.h <= w.canvas.y);
        assert!(w.canvas.y + w.canvas.h < w.picker_row.y);
        assert!(w.picker_row.y + w.picker_row.h < w.swatch_row.y);
        assert!(w.swatch_row.y + w.swatch_row.h < w.height);
    }
}
