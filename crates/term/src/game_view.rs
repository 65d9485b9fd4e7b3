//! GameView: maps a classic `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, GameStatus, Player};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen-local state drawn around the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassicHud {
    /// Column the drop cursor is over.
    pub cursor: usize,
    pub show_rules: bool,
    /// Short-lived message, e.g. a rejected move.
    pub notice: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

pub(crate) const BOARD_BG: Rgb = Rgb::new(20, 40, 110);
pub(crate) const BLUE: Rgb = Rgb::new(70, 140, 255);
pub(crate) const RED: Rgb = Rgb::new(235, 70, 70);
pub(crate) const HIGHLIGHT_BG: Rgb = Rgb::new(240, 220, 80);

pub(crate) const TITLE: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
pub(crate) const TEXT: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
pub(crate) const HINT: CellStyle = CellStyle::fg(Rgb::new(140, 140, 150)).dim();
pub(crate) const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
pub(crate) const ERROR: CellStyle = CellStyle::fg(RED).bold();

const RULES: [&str; 5] = [
    "HOW TO PLAY",
    "Drop discs into a column; they fall",
    "to the lowest free cell.",
    "Connect four in a row in any",
    "direction to win.",
];

pub(crate) fn player_rgb(p: Player) -> Rgb {
    match p {
        Player::A => BLUE,
        Player::B => RED,
    }
}

/// Turn or end-of-game line, split so it can be drawn without allocating.
fn status_parts(status: GameStatus, current: Player) -> [&'static str; 2] {
    match status {
        GameStatus::InProgress => [current.color_name(), "'s turn"],
        GameStatus::Win(p) => [p.color_name(), " wins!"],
        GameStatus::Draw => ["It's a Draw!", ""],
    }
}

/// Turn or end-of-game line.
pub fn status_text(status: GameStatus, current: Player) -> String {
    status_parts(status, current).concat()
}

pub(crate) fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Screen offset of cell `index` inside a frame starting at `start`.
pub(crate) fn cell_offset(start: u16, index: usize, size: u16) -> u16 {
    start
        .saturating_add(1)
        .saturating_add(clamp_u16(index).saturating_mul(size))
}

fn parts_len(parts: &[&str]) -> u16 {
    parts.iter().map(|p| p.chars().count() as u16).sum()
}

fn put_parts(fb: &mut FrameBuffer, x: u16, y: u16, parts: &[&str], style: CellStyle) {
    let mut cx = x;
    for part in parts {
        fb.put_str(cx, y, part, style);
        cx = cx.saturating_add(part.chars().count() as u16);
    }
}

/// A lightweight terminal renderer for the classic board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Top-left of the board frame for a given board shape.
    fn frame_origin(&self, rows: usize, cols: usize, viewport: Viewport) -> (u16, u16, u16, u16) {
        let frame_w = clamp_u16(cols).saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = clamp_u16(rows).saturating_mul(self.cell_h).saturating_add(2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        // Two lines above the frame: cursor marker and status.
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h.saturating_add(4)) / 2 + 2,
            AnchorY::Top => 2,
        };
        (start_x, start_y, frame_w, frame_h)
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// and a snapshot across frames.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &ClassicHud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (start_x, start_y, frame_w, frame_h) =
            self.frame_origin(snap.rows, snap.cols, viewport);

        let bg = CellStyle {
            fg: Rgb::new(90, 110, 170),
            bg: BOARD_BG,
            bold: false,
            dim: false,
        };
        fb.fill_rect(
            start_x.saturating_add(1),
            start_y.saturating_add(1),
            frame_w - 2,
            frame_h - 2,
            ' ',
            bg,
        );
        fb.draw_border(start_x, start_y, frame_w, frame_h, BORDER);

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let cell = snap.cell(row, col).unwrap_or_default();
                self.draw_board_cell(fb, start_x, start_y, row, col, cell, snap);
            }
        }

        // Column numbers under the frame.
        let label_y = start_y.saturating_add(frame_h);
        for col in 0..snap.cols.min(9) {
            let x = cell_offset(start_x, col, self.cell_w);
            fb.put_u32(x, label_y, col as u32 + 1, HINT);
        }

        // Cursor marker above the frame, in the colour of the player to move.
        if snap.playable() && hud.cursor < snap.cols {
            let x = cell_offset(start_x, hud.cursor, self.cell_w);
            let style = CellStyle::fg(player_rgb(snap.current_player)).bold();
            fb.put_char(x, start_y.saturating_sub(1), '▼', style);
        }

        let status = status_parts(snap.status, snap.current_player);
        let status_style = match snap.status {
            GameStatus::InProgress => CellStyle::fg(player_rgb(snap.current_player)).bold(),
            GameStatus::Win(p) => CellStyle::fg(player_rgb(p)).bold(),
            GameStatus::Draw => TITLE,
        };
        let status_x = viewport.width.saturating_sub(parts_len(&status)) / 2;
        put_parts(fb, status_x, start_y.saturating_sub(2), &status, status_style);

        let mut y = label_y.saturating_add(1);
        if let Some(notice) = hud.notice {
            fb.put_str_centered(0, viewport.width, y, notice, ERROR);
            y = y.saturating_add(1);
        }
        let hint = if snap.playable() {
            "←/→ move  Enter drop  1-9 column  r restart  Esc menu"
        } else {
            "r / Enter play again  Esc menu"
        };
        fb.put_str_centered(0, viewport.width, y, hint, HINT);

        if snap.status.is_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, &status);
        }

        if hud.show_rules {
            draw_box(fb, viewport, &RULES, "press any key");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &ClassicHud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
        cell: Cell,
        snap: &GameSnapshot,
    ) {
        let highlight = snap.is_winning_cell(row, col);
        let bg = if highlight { HIGHLIGHT_BG } else { BOARD_BG };
        let (ch, style) = match cell.owner() {
            Some(p) => (
                '●',
                CellStyle {
                    fg: player_rgb(p),
                    bg,
                    bold: true,
                    dim: false,
                },
            ),
            None => (
                '·',
                CellStyle {
                    fg: Rgb::new(90, 110, 170),
                    bg,
                    bold: false,
                    dim: true,
                },
            ),
        };
        let px = cell_offset(start_x, col, self.cell_w);
        let py = cell_offset(start_y, row, self.cell_h);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, ch, style);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        parts: &[&str],
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = parts_len(parts) + 2;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.fill_rect(x, mid_y, text_w, 1, ' ', style);
        put_parts(fb, x + 1, mid_y, parts, style);
    }
}

/// Centered bordered box; the first line is a title.
pub(crate) fn draw_box(fb: &mut FrameBuffer, viewport: Viewport, lines: &[&str], hint: &str) {
    let widest = lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(hint.chars().count()))
        .max()
        .unwrap_or(0) as u16;
    let w = widest + 4;
    let h = lines.len() as u16 + 4;
    let x = viewport.width.saturating_sub(w) / 2;
    let y = viewport.height.saturating_sub(h) / 2;
    fb.fill_rect(x, y, w, h, ' ', CellStyle::default());
    fb.draw_border(x, y, w, h, BORDER);
    for (i, line) in lines.iter().enumerate() {
        let style = if i == 0 { TITLE } else { TEXT };
        fb.put_str_centered(x, w, y + 1 + i as u16, line, style);
    }
    fb.put_str_centered(x, w, y + h - 2, hint, HINT);
}
