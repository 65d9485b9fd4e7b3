//! App flow tests - key events through the screen router

use connect_four::core::{AppConfig, Settings, SpeedPhase};
use connect_four::term::Viewport;
use connect_four::types::{GameStatus, MatchResult, Player, SPAWN_INTERVAL_MS};
use connect_four::{App, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn app() -> App {
    App::new(&AppConfig {
        seed: Some(1),
        ..AppConfig::default()
    })
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::from(code));
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn menu_to_classic_and_back() {
    let mut app = app();
    assert_eq!(app.screen(), Screen::Menu);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen(), Screen::Classic);
    assert!(app.classic_hud().unwrap().show_rules);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen(), Screen::Menu);
}

#[test]
fn vertical_four_records_one_history_entry() {
    let mut app = app();
    press(&mut app, KeyCode::Char('n'));
    // First key only dismisses the rules.
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.engine().unwrap().move_count(), 0);

    type_str(&mut app, "1212121");
    assert_eq!(app.engine().unwrap().status(), GameStatus::Win(Player::A));
    assert_eq!(app.session().history().len(), 1);
    assert_eq!(
        app.session().history().entries()[0].result,
        MatchResult::Winner(Player::A)
    );

    // Further drops are ignored and do not record again.
    type_str(&mut app, "3");
    assert_eq!(app.session().history().len(), 1);

    let text = app.render(Viewport::new(60, 20)).to_text();
    assert!(text.contains("Blue wins!"));
}

#[test]
fn play_again_rotates_starter() {
    let mut app = app();
    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "1212121");
    assert!(app.engine().unwrap().is_over());

    press(&mut app, KeyCode::Enter);
    let engine = app.engine().unwrap();
    assert!(!engine.is_over());
    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.current_player(), Player::B);
}

#[test]
fn cursor_drop_and_full_column_notice() {
    let mut app = app();
    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Enter);
    // Cursor starts in the middle column.
    assert_eq!(app.classic_hud().unwrap().cursor, 3);
    for _ in 0..10 {
        press(&mut app, KeyCode::Left);
    }
    assert_eq!(app.classic_hud().unwrap().cursor, 0);

    for _ in 0..6 {
        press(&mut app, KeyCode::Enter);
    }
    assert!(app.classic_hud().unwrap().notice.is_none());
    press(&mut app, KeyCode::Enter);
    assert!(app.classic_hud().unwrap().notice.is_some());
    assert_eq!(app.engine().unwrap().move_count(), 6);
    assert!(!app.engine().unwrap().is_over());
}

#[test]
fn invalid_settings_keep_previous_configuration() {
    let mut app = app();
    press(&mut app, KeyCode::Char('o'));
    assert_eq!(app.screen(), Screen::Settings);

    press(&mut app, KeyCode::Backspace);
    type_str(&mut app, "12");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen(), Screen::Settings);
    assert!(app.settings_form().unwrap().error().is_some());
    let text = app.render(Viewport::new(70, 20)).to_text();
    assert!(text.contains("The maximum limit for rows is 10 and columns is 7."));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen(), Screen::Menu);
    assert_eq!(*app.session().settings(), Settings::default());
}

#[test]
fn saved_settings_shape_the_next_game() {
    let mut app = app();
    press(&mut app, KeyCode::Char('o'));
    press(&mut app, KeyCode::Backspace);
    type_str(&mut app, "4");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Backspace);
    type_str(&mut app, "5");
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.screen(), Screen::Menu);
    assert_eq!(
        *app.session().settings(),
        Settings {
            rows: 4,
            cols: 5,
            music_enabled: false
        }
    );

    press(&mut app, KeyCode::Char('n'));
    let engine = app.engine().unwrap();
    assert_eq!((engine.rows(), engine.cols()), (4, 5));
}

#[test]
fn history_screen_lists_and_clears() {
    let mut app = app();
    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "1212121");
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.screen(), Screen::History);
    assert!(app
        .render(Viewport::new(60, 20))
        .to_text()
        .contains("Winner: Blue"));

    press(&mut app, KeyCode::Char('c'));
    assert!(app.session().history().is_empty());
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen(), Screen::Menu);
}

#[test]
fn speed_mode_runs_on_ticks() {
    let mut app = app();
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.screen(), Screen::Speed);
    assert_eq!(app.speed_round().unwrap().phase(), SpeedPhase::Ready);
    assert!(!app.is_animating());

    press(&mut app, KeyCode::Enter);
    assert!(app.is_animating());
    app.tick(SPAWN_INTERVAL_MS);
    assert_eq!(app.speed_round().unwrap().ball_count(), 1);

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.speed_cursor(), Some((1, 1)));

    for _ in 0..60 {
        app.tick(1_000);
    }
    assert_eq!(app.speed_round().unwrap().phase(), SpeedPhase::Finished);
    assert!(app
        .render(Viewport::new(60, 20))
        .to_text()
        .contains("Your Score"));

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.speed_round().unwrap().phase(), SpeedPhase::Running);
}

#[test]
fn ctrl_c_quits_from_anywhere() {
    let mut app = app();
    press(&mut app, KeyCode::Char('m'));
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn menu_quit_item() {
    let mut app = app();
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert!(app.should_quit());
}
