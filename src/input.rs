// Turns per-frame mouse samples into ordered pointer events.
// Visual: a fast drag still leaves a continuous stroke, because every cell the
// pointer skipped between two frames gets its own Enter.

use crate::engine::PointerEvent;
use crate::layout::CellLayout;

/// All cells on the straight line from `from` to `to` (Bresenham, inclusive).
pub fn line_cells(from: (usize, usize), to: (usize, usize)) -> Vec<(usize, usize)> {
    let (mut x0, mut y0) = (from.1 as i64, from.0 as i64);
    let (x1, y1) = (to.1 as i64, to.0 as i64);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut out = Vec::new();
    loop {
        out.push((y0 as usize, x0 as usize));
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
    out
}

#[derive(Default)]
pub struct PointerTracker {
    held: bool,
    last: Option<(usize, usize)>, // (row, col) under the pointer last frame while held
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the last cell; called after the grid (and layout) is rebuilt.
    pub fn rebind(&mut self) {
        self.last = None;
    }

    /// One frame's worth of mouse state → events, in the order they happened.
    pub fn sample(
        &mut self,
        layout: &CellLayout,
        pos: Option<(usize, usize)>,
        button_down: bool,
    ) -> Vec<PointerEvent> {
        let here = pos.and_then(|(x, y)| layout.row_col(x, y));
        let mut events = Vec::new();

        match (self.held, button_down) {
            (false, true) => {
                self.held = true;
                events.push(PointerEvent::Down(here.and_then(|(r, c)| layout.cell_ref(r, c))));
            }
            (true, true) => {
                if let Some(cur) = here.filter(|&cur| Some(cur) != self.last) {
                    let path: Vec<(usize, usize)> = match self.last {
                        Some(prev) => line_cells(prev, cur).into_iter().skip(1).collect(),
                        None => vec![cur],
                    };
                    events.extend(
                        path.into_iter()
                            .filter_map(|(r, c)| layout.cell_ref(r, c))
                            .map(PointerEvent::Enter),
                    );
                }
            }
            (true, false) => {
                self.held = false;
                events.push(PointerEvent::Up);
            }
            (false, false) => {}
        }

        self.last = if self.held { here } else { None };
        events
    }
}
