use connect_four::core::{BoardEngine, GameSnapshot};
use connect_four::term::{AnchorY, ClassicHud, GameView, Viewport};
use connect_four::types::{Cell, GameStatus, Player};

fn find(fb: &connect_four::term::FrameBuffer, ch: char) -> Vec<(u16, u16)> {
    let mut out = Vec::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            if fb.get(x, y).map(|c| c.ch) == Some(ch) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn term_view_renders_border_corners() {
    let engine = BoardEngine::new(6, 7, Player::A).unwrap();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    // With cell_w=2 and cell_h=1: 7*2 by 6*1 plus border => 16x8, starting at y=2.
    let vp = Viewport::new(16, 14);
    let fb = view.render(&engine.snapshot(), &ClassicHud::default(), vp);

    assert_eq!(fb.get(0, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(15, 2).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
    assert_eq!(fb.get(15, 9).unwrap().ch, '┘');
}

#[test]
fn term_view_places_piece_at_landing_cell() {
    let mut engine = BoardEngine::new(6, 7, Player::A).unwrap();
    engine.apply_move(0).unwrap();
    engine.apply_move(6).unwrap();

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&engine.snapshot(), &ClassicHud::default(), Viewport::new(16, 14));

    // Inside border: (1, 3) origin. Each cell is 2 chars wide.
    let pieces = find(&fb, '●');
    assert_eq!(pieces, vec![(1, 8), (13, 8)]);
    assert_ne!(fb.get(1, 8).unwrap().style.fg, fb.get(13, 8).unwrap().style.fg);
}

#[test]
fn term_view_shows_turn_and_cursor() {
    let engine = BoardEngine::new(6, 7, Player::B).unwrap();
    let hud = ClassicHud {
        cursor: 2,
        ..ClassicHud::default()
    };
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&engine.snapshot(), &hud, Viewport::new(60, 16));
    let text = fb.to_text();

    assert!(text.contains("Red's turn"));
    let frame_x = (60 - 16) / 2;
    assert_eq!(find(&fb, '▼'), vec![(frame_x + 1 + 2 * 2, 1)]);
}

#[test]
fn term_view_banners() {
    let mut snap = GameSnapshot {
        rows: 6,
        cols: 7,
        board: vec![Cell::Empty; 42],
        ..GameSnapshot::default()
    };
    let view = GameView::default();
    let vp = Viewport::new(60, 20);

    snap.status = GameStatus::Win(Player::A);
    assert!(view.render(&snap, &ClassicHud::default(), vp).to_text().contains("Blue wins!"));

    snap.status = GameStatus::Draw;
    let text = view.render(&snap, &ClassicHud::default(), vp).to_text();
    assert!(text.contains("It's a Draw!"));
    assert!(text.contains("play again"));
    // No cursor once the game is over.
    assert!(!text.contains('▼'));
}

#[test]
fn term_view_highlights_winning_cells() {
    let mut engine = BoardEngine::new(6, 7, Player::A).unwrap();
    for c in [0, 0, 1, 1, 2, 2, 3] {
        engine.apply_move(c).unwrap();
    }
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&engine.snapshot(), &ClassicHud::default(), Viewport::new(16, 14));

    let winning = fb.get(1, 8).unwrap().style.bg;
    let loser = fb.get(1, 7).unwrap().style.bg;
    assert_ne!(winning, loser);
    assert_eq!(fb.get(7, 8).unwrap().style.bg, winning);
}

#[test]
fn term_view_rules_overlay_and_notice() {
    let engine = BoardEngine::new(6, 7, Player::A).unwrap();
    let view = GameView::default();
    let hud = ClassicHud {
        cursor: 0,
        show_rules: true,
        notice: Some("That column is full"),
    };
    let text = view
        .render(&engine.snapshot(), &hud, Viewport::new(70, 24))
        .to_text();
    assert!(text.contains("HOW TO PLAY"));
    assert!(text.contains("That column is full"));
}
