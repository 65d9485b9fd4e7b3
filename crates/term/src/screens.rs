//! Menu, history and settings screens.
//!
//! Same contract as [`crate::GameView`]: pure functions from state to
//! framebuffer.

use crate::core::{History, SettingsForm};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{player_rgb, Viewport, BORDER, ERROR, HINT, TEXT, TITLE};
use crate::types::{MatchResult, MenuItem, SettingsField, MAX_COLS, MAX_ROWS};

const SELECTED: CellStyle = CellStyle {
    fg: Rgb::new(0, 0, 0),
    bg: Rgb::new(240, 220, 80),
    bold: true,
    dim: false,
};

fn prepare(fb: &mut FrameBuffer, viewport: Viewport) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::default().into_cell(' '));
}

/// Main menu with `selected` highlighted.
pub fn render_menu_into(selected: usize, viewport: Viewport, fb: &mut FrameBuffer) {
    prepare(fb, viewport);

    let items = MenuItem::ALL;
    let w: u16 = 24;
    let h = items.len() as u16 * 2 + 5;
    let x = viewport.width.saturating_sub(w) / 2;
    let y = viewport.height.saturating_sub(h) / 2;

    fb.draw_border(x, y, w, h, BORDER);
    fb.put_str_centered(x, w, y + 1, "CONNECT FOUR", TITLE);
    for (i, item) in items.iter().enumerate() {
        let row = y + 3 + (i as u16) * 2;
        if i == selected {
            let label = format!("> {} <", item.label());
            fb.put_str_centered(x, w, row, &label, SELECTED);
        } else {
            fb.put_str_centered(x, w, row, item.label(), TEXT);
        }
    }
    fb.put_str_centered(0, viewport.width, y + h, "↑/↓ choose  Enter select", HINT);
}

/// Finished games, oldest first, with running totals.
pub fn render_history_into(history: &History, viewport: Viewport, fb: &mut FrameBuffer) {
    prepare(fb, viewport);

    let w: u16 = 30;
    let x = viewport.width.saturating_sub(w) / 2;
    let mut y = 1;
    fb.put_str_centered(x, w, y, "GAME HISTORY", TITLE);
    y += 2;

    if history.is_empty() {
        fb.put_str_centered(x, w, y, "No games played yet", HINT);
        y += 2;
    } else {
        let tally = history.tally();
        let totals = format!(
            "Blue {}  Red {}  Draws {}",
            tally.a_wins, tally.b_wins, tally.draws
        );
        fb.put_str_centered(x, w, y, &totals, TEXT);
        y += 2;

        // Most recent entries that fit above the hint line.
        let room = viewport.height.saturating_sub(y + 2) as usize;
        let entries = history.entries();
        let skip = entries.len().saturating_sub(room);
        for (i, entry) in entries.iter().enumerate().skip(skip) {
            let style = match entry.result {
                MatchResult::Winner(p) => CellStyle::fg(player_rgb(p)),
                MatchResult::Draw => TEXT,
            };
            fb.put_u32(x, y, i as u32 + 1, HINT);
            fb.put_str(x + 5, y, &entry.label(), style);
            y += 1;
        }
        y += 1;
    }
    fb.put_str_centered(x, w, y, "c clear  Esc back", HINT);
}

/// Settings form with the focused field highlighted.
pub fn render_settings_into(form: &SettingsForm, viewport: Viewport, fb: &mut FrameBuffer) {
    prepare(fb, viewport);

    let w: u16 = 54;
    let h: u16 = 12;
    let x = viewport.width.saturating_sub(w) / 2;
    let y = viewport.height.saturating_sub(h) / 2;
    fb.draw_border(x, y, w, h, BORDER);
    fb.put_str_centered(x, w, y + 1, "SETTINGS", TITLE);

    let fields = [
        (SettingsField::Rows, "Rows", form.rows_text().to_string()),
        (SettingsField::Cols, "Columns", form.cols_text().to_string()),
        (
            SettingsField::Music,
            "Music",
            if form.music_enabled() { "ON" } else { "OFF" }.to_string(),
        ),
    ];
    for (i, (field, label, value)) in fields.iter().enumerate() {
        let row = y + 3 + i as u16;
        fb.put_str(x + 4, row, label, TEXT);
        let style = if form.focus() == *field { SELECTED } else { TEXT };
        fb.fill_rect(x + 14, row, 4, 1, ' ', style);
        fb.put_str(x + 15, row, value, style);
    }

    let limits = format!("rows 1-{MAX_ROWS}, columns 1-{MAX_COLS}");
    fb.put_str(x + 22, y + 3, &limits, HINT);

    if let Some(err) = form.error() {
        fb.put_str_centered(x, w, y + 7, &err.to_string(), ERROR);
    }
    fb.put_str_centered(x, w, y + 9, "Tab next  Space music  Enter save", HINT);
    fb.put_str_centered(x, w, y + 10, "Ctrl+R defaults  Esc back", HINT);
}
