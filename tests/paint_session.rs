// Whole-session behaviour through the public API, without a window.

use pixel_canvas::app::{App, FrameInput};
use pixel_canvas::engine::{Mode, PaintEngine, PointerEvent};
use pixel_canvas::grid::{Grid, GridSize};
use pixel_canvas::input::PointerTracker;
use pixel_canvas::layout::{CellLayout, Rect};
use pixel_canvas::types::Color;
use pretty_assertions::assert_eq;

fn red() -> Color {
    Color::from_hex("#ff0000").unwrap()
}

#[test]
fn build_clamps_and_clears_for_every_size() {
    let mut grid = Grid::new(GridSize::default());
    for s in [-7, 1, 4, 5, 6, 29, 30, 50, 51, 1_000] {
        grid.build(GridSize::clamped(s));
        let n = s.clamp(5, 50) as usize;
        assert_eq!(grid.size().get(), n);
        assert_eq!(grid.len(), n * n);
        assert_eq!(grid.painted_count(), 0);
    }
}

#[test]
fn rebuilding_same_size_drops_colors() {
    let mut grid = Grid::new(GridSize::clamped(12));
    let c = grid.cell(7).unwrap();
    grid.paint(c, red());
    grid.build(GridSize::clamped(12));
    assert_eq!(grid.len(), 144);
    assert_eq!(grid.painted_count(), 0);
    // the old handle no longer reaches the new grid
    assert!(!grid.paint(c, red()));
    assert_eq!(grid.get(7), None);
}

#[test]
fn paint_then_erase_and_repeat_paint() {
    let mut grid = Grid::new(GridSize::clamped(5));
    let c = grid.cell(3).unwrap();
    grid.paint(c, red());
    grid.erase(c);
    assert_eq!(grid.get(3), None);

    grid.paint(c, red());
    grid.paint(c, red());
    assert_eq!(grid.get(3), Some(red()));
}

#[test]
fn press_and_release_outside_returns_to_idle() {
    let mut grid = Grid::new(GridSize::default());
    let mut engine = PaintEngine::new();
    engine.handle(&mut grid, PointerEvent::Down(None), red());
    engine.handle(&mut grid, PointerEvent::Up, red());
    assert_eq!(engine.mode(), Mode::Idle);
    assert_eq!(grid.painted_count(), 0);
}

#[test]
fn double_toggle_restores_mode_and_label() {
    let mut engine = PaintEngine::new();
    let before = (engine.erase_enabled(), engine.toggle_label());
    engine.toggle_erase();
    assert_eq!(engine.toggle_label(), "Draw");
    engine.toggle_erase();
    assert_eq!((engine.erase_enabled(), engine.toggle_label()), before);
}

#[test]
fn paint_drag_release_then_erase() {
    let mut grid = Grid::new(GridSize::default());
    grid.build(GridSize::clamped(30));
    let mut engine = PaintEngine::new();
    let (c0, c1) = (grid.cell(0).unwrap(), grid.cell(1).unwrap());

    engine.pointer_down(&mut grid, Some(c0), red());
    assert_eq!(grid.get(0).map(|c| c.to_string()).as_deref(), Some("#ff0000"));
    engine.pointer_enter(&mut grid, c1, red());
    assert_eq!(grid.get(1), Some(red()));
    engine.pointer_up();
    assert_eq!(engine.mode(), Mode::Idle);

    engine.toggle_erase();
    engine.pointer_down(&mut grid, Some(c0), red());
    assert_eq!(engine.mode(), Mode::Erasing);
    assert_eq!(grid.get(0), None);
    assert_eq!(grid.get(1), Some(red()));
}

#[test]
fn size_text_resolves_like_the_field() {
    assert_eq!(GridSize::parse("abc").get(), 30);
    assert_eq!(GridSize::parse("2").get(), 5);
    assert_eq!(GridSize::parse("").get(), 30);
    assert_eq!(GridSize::parse("99").get(), 50);
    assert_eq!(GridSize::parse("12.9").get(), 12);
    assert_eq!(GridSize::parse("0.5").get(), 5);
}

#[test]
fn mouse_samples_drive_a_stroke_across_cells() {
    let grid_size = GridSize::clamped(10);
    let mut grid = Grid::new(grid_size);
    let layout = CellLayout::new(&grid, Rect::new(0, 0, 100, 100));
    let mut tracker = PointerTracker::new();
    let mut engine = PaintEngine::new();

    let at = |row: usize, col: usize| {
        let r = layout.cell_rect(row, col);
        Some((r.x + r.w / 2, r.y + r.h / 2))
    };
    // press on (0,0), jump straight to (0,4) in one frame, release
    for (pos, down) in [(at(0, 0), true), (at(0, 4), true), (at(0, 4), false)] {
        for event in tracker.sample(&layout, pos, down) {
            engine.handle(&mut grid, event, red());
        }
    }
    assert_eq!(engine.mode(), Mode::Idle);
    for col in 0..5 {
        assert_eq!(grid.get(col), Some(red()), "col {col}");
    }
    assert_eq!(grid.painted_count(), 5);
}

#[test]
fn app_paints_with_picked_color_and_reset_clears() {
    let mut app = App::new(600, GridSize::clamped(8));
    let r = app.cells.cell_rect(2, 3);
    let pos = Some((r.x + 1, r.y + 1));
    app.frame(&FrameInput { mouse: pos, left_down: true, keys: vec![] });
    app.frame(&FrameInput { mouse: pos, left_down: false, keys: vec![] });
    assert_eq!(app.grid.get(2 * 8 + 3), Some(Color::BLACK));

    app.frame(&FrameInput { mouse: None, left_down: false, keys: vec![minifb::Key::R] });
    assert_eq!(app.grid.painted_count(), 0);
    assert_eq!(app.grid.size().get(), 8);
}
