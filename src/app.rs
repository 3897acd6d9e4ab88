// Everything the window shows, and how one frame of input changes it.
// The window itself lives in main.rs; this part runs the same way in tests,
// fed with synthetic mouse samples and key presses.

use crate::engine::{PaintEngine, PointerEvent};
use crate::grid::{Grid, GridSize};
use crate::input::PointerTracker;
use crate::layout::{CellLayout, WindowLayout};
use crate::palette::{FetchOutcome, PICKER, Palette};
use crate::types::Color;
use crate::ui::{self, HexField, SizeField, Toolbar, UiTarget};
use minifb::Key;
use tracing::info;

/// Raw input for one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    pub mouse: Option<(usize, usize)>,
    pub left_down: bool,
    pub keys: Vec<Key>,
}

/// Work the app wants done outside itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    FetchRandom,
    FetchScheme { seed: Color },
    Quit,
}

pub struct App {
    pub window: WindowLayout,
    pub toolbar: Toolbar,
    pub grid: Grid,
    pub cells: CellLayout,
    pub engine: PaintEngine,
    pub palette: Palette,
    pub size_field: SizeField,
    pub hex_field: HexField,
    /// Message of the blocking alert, if one is up.
    pub alert: Option<String>,
    tracker: PointerTracker,
    was_down: bool,
}

impl App {
    pub fn new(canvas_px: usize, size: GridSize) -> Self {
        let window = WindowLayout::new(canvas_px);
        let grid = Grid::new(size);
        Self {
            toolbar: Toolbar::new(&window),
            cells: CellLayout::new(&grid, window.canvas),
            grid,
            window,
            engine: PaintEngine::new(),
            palette: Palette::new(Color::BLACK),
            size_field: SizeField::new(size),
            hex_field: HexField::new(Color::BLACK),
            alert: None,
            tracker: PointerTracker::new(),
            was_down: false,
        }
    }

    /// Start with `color` active instead of black.
    pub fn with_color(mut self, color: Color) -> Self {
        self.select(color);
        self
    }

    fn select(&mut self, color: Color) {
        self.palette.select(color);
        self.hex_field.set_committed(color);
    }

    /// Replace the grid and rebind the hit-test layout to the new cells.
    pub fn rebuild(&mut self, size: GridSize) {
        self.grid.build(size);
        self.rebind();
    }

    /// Same size, every cell cleared.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.rebind();
    }

    fn rebind(&mut self) {
        self.cells = CellLayout::new(&self.grid, self.window.canvas);
        self.tracker.rebind();
        self.size_field.set_committed(self.grid.size());
    }

    /// Put up the blocking alert.
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    /// Apply a finished background fetch; failures raise the alert.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) {
        if let Some(message) = self.palette.apply(outcome) {
            self.alert(message);
        }
        self.hex_field.set_committed(self.palette.active());
    }

    /// Process one frame of input, in order: keys, clicks on UI, pointer
    /// events for the canvas.
    pub fn frame(&mut self, input: &FrameInput) -> Vec<Command> {
        let mut commands = Vec::new();
        let pressed = input.left_down && !self.was_down;
        self.was_down = input.left_down;

        if self.alert.is_some() {
            if pressed || input.keys.iter().any(|k| matches!(k, Key::Enter | Key::NumPadEnter | Key::Escape)) {
                info!("alert dismissed");
                self.alert = None;
            }
            // canvas input is swallowed, but a release still ends a stroke
            for event in self.tracker.sample(&self.cells, input.mouse, input.left_down) {
                if event == PointerEvent::Up {
                    self.engine.pointer_up();
                }
            }
            return commands;
        }

        for &key in &input.keys {
            self.key(key, &mut commands);
        }

        if pressed {
            if let Some((x, y)) = input.mouse {
                self.click(x, y, &mut commands);
            }
        }

        let active = self.palette.active();
        for event in self.tracker.sample(&self.cells, input.mouse, input.left_down) {
            self.engine.handle(&mut self.grid, event, active);
        }
        commands
    }

    fn key(&mut self, key: Key, commands: &mut Vec<Command>) {
        if self.size_field.focused() {
            if let Some(size) = self.size_field.key(key) {
                self.rebuild(size);
            }
            return;
        }
        if self.hex_field.focused() {
            if let Some(color) = self.hex_field.key(key) {
                self.select(color);
            }
            return;
        }
        match key {
            Key::R => self.reset(),
            Key::E => self.engine.toggle_erase(),
            Key::N => commands.push(Command::FetchRandom),
            Key::S => commands.push(Command::FetchScheme { seed: self.palette.active() }),
            Key::Escape => commands.push(Command::Quit),
            _ => {}
        }
    }

    fn click(&mut self, x: usize, y: usize, commands: &mut Vec<Command>) {
        let target = ui::hit(&self.toolbar, &self.window, self.palette.scheme().len(), x, y);
        if target != Some(UiTarget::SizeField) {
            if let Some(size) = self.size_field.blur() {
                self.rebuild(size);
            }
        }
        if target != Some(UiTarget::HexField) {
            if let Some(color) = self.hex_field.blur() {
                self.select(color);
            }
        }
        match target {
            Some(UiTarget::SizeField) => self.size_field.focus(),
            Some(UiTarget::HexField) => self.hex_field.focus(),
            Some(UiTarget::Reset) => self.reset(),
            Some(UiTarget::ToggleErase) => self.engine.toggle_erase(),
            Some(UiTarget::Random) => commands.push(Command::FetchRandom),
            Some(UiTarget::Scheme) => commands.push(Command::FetchScheme { seed: self.palette.active() }),
            Some(UiTarget::Picker(i)) => self.select(PICKER[i]),
            Some(UiTarget::Swatch(i)) => {
                if self.palette.select_swatch(i) {
                    self.hex_field.set_committed(self.palette.active());
                }
            }
            None => {}
        }
    }
}
