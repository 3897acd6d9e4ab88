// Paints one full frame of the app into the framebuffer.
// Visual, top to bottom: toolbar, canvas (checkerboard where unpainted,
// thin grid lines, hovered cell outlined), picker row with the hex field,
// scheme swatches, and the alert box on top of everything when one is up.

use crate::app::App;
use crate::draw::{checker_rect, dim_rect, draw_text_5x7, fill_rect, stroke_rect, text_width};
use crate::layout::Rect;
use crate::palette::{MAX_SWATCHES, PICKER};
use crate::types::{Color, FrameBuffer};
use crate::ui::slot_rect;

const BACKGROUND: u32 = 0x00_2B_2D_31;
const TOOLBAR_BG: u32 = 0x00_1E_1F_22;
const BUTTON: u32 = 0x00_3A_3D_44;
const BUTTON_ACTIVE: u32 = 0x00_5B_6E_9A;
const FIELD: u32 = 0x00_F2_F2_F2;
const BORDER: u32 = 0x00_00_00_00;
const TEXT: u32 = 0x00_EE_EE_EE;
const TEXT_DARK: u32 = 0x00_11_11_11;
const CHECK_A: u32 = 0x00_FF_FF_FF;
const CHECK_B: u32 = 0x00_E4_E4_E4;
const GRID_LINE: u32 = 0x00_CC_CC_CC;
const HOVER: u32 = 0x00_FF_CC_33;
const EMPTY_SLOT: u32 = 0x00_36_38_3D;

/// Which background fetches are still running (their buttons show "...").
#[derive(Clone, Copy, Debug, Default)]
pub struct Pending {
    pub random: bool,
    pub scheme: bool,
}

pub fn draw_frame(fb: &mut FrameBuffer, app: &App, pending: Pending, mouse: Option<(usize, usize)>) {
    fb.clear(BACKGROUND);
    draw_toolbar(fb, app, pending);
    draw_canvas(fb, app, mouse);
    draw_rows(fb, app);
    if let Some(message) = &app.alert {
        draw_alert(fb, app, message);
    }
}

fn button(fb: &mut FrameBuffer, app: &App, r: Rect, label: &str, active: bool) {
    fill_rect(fb, r.x, r.y, r.w, r.h, if active { BUTTON_ACTIVE } else { BUTTON });
    stroke_rect(fb, r.x, r.y, r.w, r.h, BORDER);
    let (tx, ty) = app.toolbar.label_origin(r, label);
    draw_text_5x7(fb, tx, ty, label, TEXT, app.toolbar.scale);
}

fn draw_toolbar(fb: &mut FrameBuffer, app: &App, pending: Pending) {
    let bar = &app.toolbar;
    let area = app.window.toolbar;
    fill_rect(fb, area.x, area.y, area.w, area.h, TOOLBAR_BG);

    let (lx, ly) = bar.size_label;
    draw_text_5x7(fb, lx, ly, "Size", TEXT, bar.scale);

    let (tx, ty) = bar.label_origin(bar.size_field, "000000");
    text_field(fb, bar.size_field, app.size_field.focused());
    draw_text_5x7(fb, tx, ty, &app.size_field.display(), TEXT_DARK, bar.scale);

    button(fb, app, bar.reset, "Reset", false);
    button(fb, app, bar.erase, app.engine.toggle_label(), app.engine.erase_enabled());
    button(fb, app, bar.random, if pending.random { "..." } else { "Random" }, pending.random);
    button(fb, app, bar.scheme, if pending.scheme { "..." } else { "Scheme" }, pending.scheme);

    // active color chip; its hex lives in the field under the canvas
    let c = bar.chip;
    fill_rect(fb, c.x, c.y, c.w, c.h, app.palette.active().to_pixel());
    stroke_rect(fb, c.x, c.y, c.w, c.h, TEXT);
}

/// Light box with a dark outline, highlighted while focused.
fn text_field(fb: &mut FrameBuffer, r: Rect, focused: bool) {
    fill_rect(fb, r.x, r.y, r.w, r.h, FIELD);
    stroke_rect(fb, r.x, r.y, r.w, r.h, if focused { HOVER } else { BORDER });
}

fn draw_canvas(fb: &mut FrameBuffer, app: &App, mouse: Option<(usize, usize)>) {
    let layout = &app.cells;
    let px = layout.cell_px();
    let tile = (px / 2).max(1);

    for (row, col, color) in app.grid.cells() {
        let r = layout.cell_rect(row, col);
        match color {
            Some(c) => fill_rect(fb, r.x, r.y, r.w, r.h, c.to_pixel()),
            None => checker_rect(fb, r.x, r.y, r.w, r.h, tile, CHECK_A, CHECK_B),
        }
    }

    // grid lines only when cells are big enough to keep some color visible
    if px >= 6 {
        let b = layout.bounds();
        for i in 0..=layout.side() {
            let off = (i * px).min(b.w - 1);
            fill_rect(fb, b.x + off, b.y, 1, b.h, GRID_LINE);
            fill_rect(fb, b.x, b.y + off, b.w, 1, GRID_LINE);
        }
    }

    if app.alert.is_none() {
        if let Some((row, col)) = mouse.and_then(|(x, y)| layout.row_col(x, y)) {
            let r = layout.cell_rect(row, col);
            stroke_rect(fb, r.x, r.y, r.w, r.h, HOVER);
        }
    }
}

fn draw_rows(fb: &mut FrameBuffer, app: &App) {
    let active = app.palette.active();
    let swatch = |fb: &mut FrameBuffer, r: Rect, color: Color| {
        fill_rect(fb, r.x, r.y, r.w, r.h, color.to_pixel());
        let edge = if color == active { HOVER } else { BORDER };
        stroke_rect(fb, r.x, r.y, r.w, r.h, edge);
    };

    for (i, &color) in PICKER.iter().enumerate() {
        swatch(fb, slot_rect(app.toolbar.picker, PICKER.len(), i), color);
    }

    let f = app.toolbar.hex_field;
    text_field(fb, f, app.hex_field.focused());
    draw_text_5x7(fb, f.x + 6, f.y + f.h.saturating_sub(7) / 2, &app.hex_field.display(), TEXT_DARK, 1);

    let scheme = app.palette.scheme();
    for i in 0..MAX_SWATCHES {
        let r = slot_rect(app.window.swatch_row, MAX_SWATCHES, i);
        match scheme.get(i) {
            Some(&color) => {
                swatch(fb, r, color);
                let ink = if color.is_light() { TEXT_DARK } else { TEXT };
                draw_text_5x7(fb, r.x + 3, r.y + r.h.saturating_sub(7) / 2, &color.to_string(), ink, 1);
            }
            None => fill_rect(fb, r.x, r.y, r.w, r.h, EMPTY_SLOT),
        }
    }
}

/// Word-wrap to at most `max_chars` per line.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn draw_alert(fb: &mut FrameBuffer, app: &App, message: &str) {
    let scale = app.toolbar.scale;
    let (fw, fh) = (fb.width, fb.height);
    dim_rect(fb, 0, 0, fw, fh);

    let w = app.window.width * 3 / 4;
    let max_chars = (w.saturating_sub(24) / (6 * scale)).max(8);
    let mut lines = wrap(message, max_chars);
    lines.push(String::new());
    lines.push("OK (Enter)".to_string());

    let line_h = 10 * scale;
    let h = lines.len() * line_h + 24;
    let x = (app.window.width - w) / 2;
    let y = app.window.height.saturating_sub(h) / 2;
    fill_rect(fb, x, y, w, h, FIELD);
    stroke_rect(fb, x, y, w, h, BORDER);
    for (i, line) in lines.iter().enumerate() {
        let tx = x + w.saturating_sub(text_width(line, scale)) / 2;
        draw_text_5x7(fb, tx, y + 12 + i * line_h, line, TEXT_DARK, scale);
    }
}
