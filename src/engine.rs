// Paint state machine: turns pointer events over cells into grid mutations.
// Visual: press on a cell and it takes the active color; keep holding and
// every cell you slide over follows; release anywhere and the stroke ends.

use crate::grid::{CellRef, Grid};
use crate::types::Color;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Painting,
    Erasing,
}

/// One pointer event, already resolved to a cell by the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed; `None` when the press landed outside the grid.
    Down(Option<CellRef>),
    /// Pointer moved onto a cell.
    Enter(CellRef),
    /// Button released, wherever that happened.
    Up,
}

pub struct PaintEngine {
    mode: Mode,
    erase_enabled: bool,
}

impl PaintEngine {
    pub fn new() -> Self {
        Self { mode: Mode::Idle, erase_enabled: false }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn erase_enabled(&self) -> bool {
        self.erase_enabled
    }

    /// Text for the toggle button: the action it switches to.
    pub fn toggle_label(&self) -> &'static str {
        if self.erase_enabled { "Draw" } else { "Erase" }
    }

    /// Press on a cell: apply immediately and start a stroke.
    /// A press outside the grid (cell = None) starts nothing.
    pub fn pointer_down(&mut self, grid: &mut Grid, cell: Option<CellRef>, active: Color) {
        if self.mode != Mode::Idle {
            return;
        }
        // a cell from a discarded grid counts as a press outside the grid
        let Some(cell) = cell.filter(|c| c.generation == grid.generation()) else { return };
        self.mode = if self.erase_enabled { Mode::Erasing } else { Mode::Painting };
        debug!(mode = ?self.mode, index = cell.index, "stroke start");
        self.apply(grid, cell, active);
    }

    /// Slide onto a cell while a stroke is active.
    pub fn pointer_enter(&mut self, grid: &mut Grid, cell: CellRef, active: Color) {
        if self.mode == Mode::Idle {
            return;
        }
        self.apply(grid, cell, active);
    }

    /// Release ends any stroke, inside or outside the grid.
    pub fn pointer_up(&mut self) {
        if self.mode != Mode::Idle {
            debug!(mode = ?self.mode, "stroke end");
        }
        self.mode = Mode::Idle;
    }

    /// Flip between drawing and erasing. A stroke in progress is left as is;
    /// the flag is read again on the next cell it touches.
    pub fn toggle_erase(&mut self) {
        self.erase_enabled = !self.erase_enabled;
        debug!(erase = self.erase_enabled, "erase toggled");
    }

    /// Feed one event through the matching transition.
    pub fn handle(&mut self, grid: &mut Grid, event: PointerEvent, active: Color) {
        match event {
            PointerEvent::Down(cell) => self.pointer_down(grid, cell, active),
            PointerEvent::Enter(cell) => self.pointer_enter(grid, cell, active),
            PointerEvent::Up => self.pointer_up(),
        }
    }

    fn apply(&self, grid: &mut Grid, cell: CellRef, active: Color) {
        if self.erase_enabled {
            grid.erase(cell);
        } else {
            grid.paint(cell, active);
        }
    }
}

impl Default for PaintEngine {
    fn default() -> Self {
        Self::new()
    }
}
