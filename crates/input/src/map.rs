//! Key mapping from terminal events to screen actions.

use crate::types::{
    ClassicAction, Direction, HistoryAction, MenuAction, MenuItem, SettingsAction, SpeedAction,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Check if key should quit the program from any screen.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Main menu keys.
pub fn map_menu_key(key: KeyEvent) -> Option<MenuAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(MenuAction::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(MenuAction::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuAction::Select),

        // Hotkeys
        KeyCode::Char('n') | KeyCode::Char('N') => Some(MenuAction::Open(MenuItem::NormalGame)),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(MenuAction::Open(MenuItem::SpeedMode)),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(MenuAction::Open(MenuItem::History)),
        KeyCode::Char('o') | KeyCode::Char('O') => Some(MenuAction::Open(MenuItem::Settings)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            Some(MenuAction::Open(MenuItem::Quit))
        }
        _ => None,
    }
}

/// Classic game keys.
///
/// `show_rules` is true while the rules overlay is up; any key dismisses it.
pub fn map_classic_key(key: KeyEvent, show_rules: bool) -> Option<ClassicAction> {
    if show_rules {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(ClassicAction::Back),
            _ => Some(ClassicAction::Dismiss),
        };
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(ClassicAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
            Some(ClassicAction::CursorRight)
        }

        // Drop
        KeyCode::Down | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('j') => {
            Some(ClassicAction::Drop)
        }
        KeyCode::Char(c @ '1'..='9') => Some(ClassicAction::DropAt((c as u8 - b'1') as usize)),

        // Restart / back
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ClassicAction::Restart),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(ClassicAction::Back),

        _ => None,
    }
}

/// Speed mode keys.
pub fn map_speed_key(key: KeyEvent) -> Option<SpeedAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
            Some(SpeedAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
            Some(SpeedAction::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => {
            Some(SpeedAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
            Some(SpeedAction::Move(Direction::Down))
        }
        KeyCode::Char(' ') => Some(SpeedAction::Tap),
        KeyCode::Enter => Some(SpeedAction::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SpeedAction::Restart),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(SpeedAction::Back),
        _ => None,
    }
}

/// Settings screen keys.
pub fn map_settings_key(key: KeyEvent) -> Option<SettingsAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('r') => Some(SettingsAction::ResetDefaults),
            KeyCode::Char('s') => Some(SettingsAction::Save),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(SettingsAction::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(SettingsAction::PrevField),
        KeyCode::Char(' ') => Some(SettingsAction::ToggleMusic),
        KeyCode::Char(c) => Some(SettingsAction::Input(c)),
        KeyCode::Backspace | KeyCode::Delete => Some(SettingsAction::Backspace),
        KeyCode::Enter => Some(SettingsAction::Save),
        KeyCode::Esc => Some(SettingsAction::Back),
        _ => None,
    }
}

/// History screen keys.
pub fn map_history_key(key: KeyEvent) -> Option<HistoryAction> {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => Some(HistoryAction::Clear),
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(HistoryAction::Back)
        }
        _ => None,
    }
}
