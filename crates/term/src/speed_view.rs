//! SpeedView: draws a speed round, its clock and score.

use crate::core::{SpeedPhase, SpeedRound};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{
    cell_offset, clamp_u16, draw_box, Viewport, BOARD_BG, BORDER, HINT, RED, TITLE,
};

const RULES: [&str; 4] = [
    "SPEED MODE",
    "Balls pop up on the board.",
    "Move onto one and press Space",
    "before it disappears.",
];

pub struct SpeedView {
    cell_w: u16,
}

impl Default for SpeedView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl SpeedView {
    pub fn render_into(
        &self,
        round: &SpeedRound,
        cursor: (usize, usize),
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame_w = clamp_u16(round.cols())
            .saturating_mul(self.cell_w)
            .saturating_add(2);
        let frame_h = clamp_u16(round.rows()).saturating_add(2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h.saturating_add(3)) / 2 + 2;

        // Header: time left and score.
        let header = format!("TIME {:>2}   SCORE {}", round.remaining_secs(), round.score());
        fb.put_str_centered(0, viewport.width, start_y.saturating_sub(2), &header, TITLE);

        fb.draw_border(start_x, start_y, frame_w, frame_h, BORDER);
        for row in 0..round.rows() {
            for col in 0..round.cols() {
                let selected = round.phase() == SpeedPhase::Running && (row, col) == cursor;
                let bg = if selected {
                    Rgb::new(90, 90, 120)
                } else {
                    BOARD_BG
                };
                let (ch, fg) = if round.has_ball(row, col) {
                    ('●', RED)
                } else {
                    ('·', Rgb::new(90, 110, 170))
                };
                let style = CellStyle {
                    fg,
                    bg,
                    bold: true,
                    dim: false,
                };
                let px = cell_offset(start_x, col, self.cell_w);
                let py = cell_offset(start_y, row, 1);
                fb.fill_rect(px, py, self.cell_w, 1, ' ', style);
                fb.put_char(px, py, ch, style);
            }
        }

        let hint_y = start_y.saturating_add(frame_h);
        match round.phase() {
            SpeedPhase::Ready => {
                draw_box(fb, viewport, &RULES, "Enter to start  Esc menu");
            }
            SpeedPhase::Running => {
                fb.put_str_centered(0, viewport.width, hint_y, "arrows move  Space tap  Esc menu", HINT);
            }
            SpeedPhase::Finished => {
                let score = format!("Your Score: {}", round.score());
                draw_box(fb, viewport, &["Game Over", score.as_str()], "r play again  Esc menu");
            }
        }
    }

    pub fn render(&self, round: &SpeedRound, cursor: (usize, usize), viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(round, cursor, viewport, &mut fb);
        fb
    }
}
