//! Screen router: owns the session and whichever screen is active.
//!
//! Keys come in as `crossterm` events, are mapped by `connect_four_input` and
//! applied here. Rendering is a pure dispatch to the `term` views.

use crossterm::event::KeyEvent;
use tracing::{debug, error, info, warn};

use crate::core::{
    AppConfig, BoardEngine, EngineError, FormOutcome, GameSnapshot, SessionStore, SettingsForm,
    SpeedPhase, SpeedRound,
};
use crate::input::{
    map_classic_key, map_history_key, map_menu_key, map_settings_key, map_speed_key, should_quit,
};
use crate::term::{
    render_history_into, render_menu_into, render_settings_into, ClassicHud, FrameBuffer,
    GameView, SpeedView, Viewport,
};
use crate::types::{
    ClassicAction, Direction, HistoryAction, MenuAction, MenuItem, SettingsAction, SpeedAction,
};

/// How long a rejected-move notice stays up.
pub const NOTICE_MS: u32 = 1500;

const COLUMN_FULL_NOTICE: &str = "That column is full, pick another one";

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Classic,
    Speed,
    History,
    Settings,
}

struct ClassicScreen {
    engine: BoardEngine,
    /// Render copy of `engine`, refreshed whenever the engine changes.
    snap: GameSnapshot,
    hud: ClassicHud,
    notice_ms: u32,
}

struct SpeedScreen {
    round: SpeedRound,
    cursor: (usize, usize),
}

enum Mode {
    Menu,
    Classic(ClassicScreen),
    Speed(SpeedScreen),
    History,
    Settings(SettingsForm),
}

pub struct App {
    session: SessionStore,
    mode: Mode,
    menu_selected: usize,
    seed: u32,
    quit: bool,
    game_view: GameView,
    speed_view: SpeedView,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            session: SessionStore::new(config.settings),
            mode: Mode::Menu,
            menu_selected: 0,
            seed: config.speed_seed(),
            quit: false,
            game_view: GameView::default(),
            speed_view: SpeedView::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        match self.mode {
            Mode::Menu => Screen::Menu,
            Mode::Classic(_) => Screen::Classic,
            Mode::Speed(_) => Screen::Speed,
            Mode::History => Screen::History,
            Mode::Settings(_) => Screen::Settings,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn menu_selected(&self) -> usize {
        self.menu_selected
    }

    /// Engine of the running classic game, if that screen is up.
    pub fn engine(&self) -> Option<&BoardEngine> {
        match &self.mode {
            Mode::Classic(c) => Some(&c.engine),
            _ => None,
        }
    }

    pub fn classic_hud(&self) -> Option<&ClassicHud> {
        match &self.mode {
            Mode::Classic(c) => Some(&c.hud),
            _ => None,
        }
    }

    pub fn speed_round(&self) -> Option<&SpeedRound> {
        match &self.mode {
            Mode::Speed(s) => Some(&s.round),
            _ => None,
        }
    }

    pub fn speed_cursor(&self) -> Option<(usize, usize)> {
        match &self.mode {
            Mode::Speed(s) => Some(s.cursor),
            _ => None,
        }
    }

    pub fn settings_form(&self) -> Option<&SettingsForm> {
        match &self.mode {
            Mode::Settings(f) => Some(f),
            _ => None,
        }
    }

    /// True while frames change without input (a running speed round).
    pub fn is_animating(&self) -> bool {
        matches!(&self.mode, Mode::Speed(s) if s.round.phase() == SpeedPhase::Running)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if should_quit(key) {
            self.quit = true;
            return;
        }
        match &self.mode {
            Mode::Menu => {
                if let Some(action) = map_menu_key(key) {
                    self.apply_menu(action);
                }
            }
            Mode::Classic(c) => {
                if let Some(action) = map_classic_key(key, c.hud.show_rules) {
                    self.apply_classic(action);
                }
            }
            Mode::Speed(_) => {
                if let Some(action) = map_speed_key(key) {
                    self.apply_speed(action);
                }
            }
            Mode::History => {
                if let Some(action) = map_history_key(key) {
                    self.apply_history(action);
                }
            }
            Mode::Settings(_) => {
                if let Some(action) = map_settings_key(key) {
                    self.apply_settings(action);
                }
            }
        }
    }

    pub fn apply_menu(&mut self, action: MenuAction) {
        let len = MenuItem::ALL.len();
        match action {
            MenuAction::Up => self.menu_selected = (self.menu_selected + len - 1) % len,
            MenuAction::Down => self.menu_selected = (self.menu_selected + 1) % len,
            MenuAction::Select => {
                if let Some(&item) = MenuItem::ALL.get(self.menu_selected) {
                    self.open(item);
                }
            }
            MenuAction::Open(item) => self.open(item),
        }
    }

    fn open(&mut self, item: MenuItem) {
        debug!(?item, "menu");
        match item {
            MenuItem::NormalGame => match self.session.new_engine() {
                Ok(engine) => {
                    info!(
                        rows = engine.rows(),
                        cols = engine.cols(),
                        starting = engine.current_player().as_str(),
                        "classic game started"
                    );
                    let hud = ClassicHud {
                        cursor: engine.cols() / 2,
                        show_rules: true,
                        notice: None,
                    };
                    self.mode = Mode::Classic(ClassicScreen::new(engine, hud));
                }
                Err(e) => error!(error = %e, "cannot start classic game"),
            },
            MenuItem::SpeedMode => {
                let settings = *self.session.settings();
                let seed = self.next_seed();
                match SpeedRound::new(settings.rows, settings.cols, seed) {
                    Ok(round) => {
                        self.mode = Mode::Speed(SpeedScreen {
                            round,
                            cursor: (0, 0),
                        })
                    }
                    Err(e) => error!(error = %e, "cannot start speed round"),
                }
            }
            MenuItem::History => self.mode = Mode::History,
            MenuItem::Settings => {
                self.mode = Mode::Settings(SettingsForm::open(*self.session.settings()))
            }
            MenuItem::Quit => self.quit = true,
        }
    }

    fn next_seed(&mut self) -> u32 {
        let seed = self.seed;
        self.seed = self.seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seed
    }

    pub fn apply_classic(&mut self, action: ClassicAction) {
        let Mode::Classic(c) = &mut self.mode else {
            return;
        };
        if action == ClassicAction::Back {
            self.mode = Mode::Menu;
            return;
        }
        if c.hud.show_rules {
            c.hud.show_rules = false;
            return;
        }

        let cols = c.engine.cols();
        match action {
            ClassicAction::CursorLeft => c.hud.cursor = c.hud.cursor.saturating_sub(1),
            ClassicAction::CursorRight => c.hud.cursor = (c.hud.cursor + 1).min(cols - 1),
            ClassicAction::Drop if c.engine.is_over() => c.restart(&mut self.session),
            ClassicAction::Drop => {
                let column = c.hud.cursor;
                c.drop_into(column, &mut self.session);
            }
            ClassicAction::DropAt(column) => {
                if column < cols && !c.engine.is_over() {
                    c.hud.cursor = column;
                    c.drop_into(column, &mut self.session);
                }
            }
            ClassicAction::Restart => {
                c.restart(&mut self.session);
                info!(
                    starting = c.engine.current_player().as_str(),
                    "classic game restarted"
                );
            }
            ClassicAction::Dismiss | ClassicAction::Back => {}
        }
    }

    pub fn apply_speed(&mut self, action: SpeedAction) {
        let Mode::Speed(s) = &mut self.mode else {
            return;
        };
        let (rows, cols) = (s.round.rows(), s.round.cols());
        match action {
            SpeedAction::Move(dir) => {
                let (r, c) = s.cursor;
                s.cursor = match dir {
                    Direction::Up => (r.saturating_sub(1), c),
                    Direction::Down => ((r + 1).min(rows - 1), c),
                    Direction::Left => (r, c.saturating_sub(1)),
                    Direction::Right => (r, (c + 1).min(cols - 1)),
                };
            }
            SpeedAction::Tap => {
                let (r, c) = s.cursor;
                if s.round.tap(r, c) {
                    debug!(row = r, col = c, score = s.round.score(), "ball tapped");
                }
            }
            SpeedAction::Start => match s.round.phase() {
                SpeedPhase::Ready => s.round.start(),
                SpeedPhase::Finished => {
                    s.round.reset();
                    s.round.start();
                }
                SpeedPhase::Running => {}
            },
            SpeedAction::Restart => {
                if s.round.phase() == SpeedPhase::Finished {
                    s.round.reset();
                    s.round.start();
                }
            }
            SpeedAction::Back => self.mode = Mode::Menu,
        }
    }

    pub fn apply_history(&mut self, action: HistoryAction) {
        match action {
            HistoryAction::Clear => self.session.clear_history(),
            HistoryAction::Back => self.mode = Mode::Menu,
        }
    }

    pub fn apply_settings(&mut self, action: SettingsAction) {
        let Mode::Settings(form) = &mut self.mode else {
            return;
        };
        match form.apply(action) {
            FormOutcome::Stay => {
                if let Some(e) = form.error() {
                    warn!(error = %e, "settings rejected");
                }
            }
            FormOutcome::Saved(settings) => {
                self.session.set_settings(settings);
                self.mode = Mode::Menu;
            }
            FormOutcome::Cancelled(_) => self.mode = Mode::Menu,
        }
    }

    /// Advance timers by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        match &mut self.mode {
            Mode::Speed(s) => {
                s.round.tick(elapsed_ms);
            }
            Mode::Classic(c) if c.notice_ms > 0 => {
                c.notice_ms = c.notice_ms.saturating_sub(elapsed_ms);
                if c.notice_ms == 0 {
                    c.hud.notice = None;
                }
            }
            _ => {}
        }
    }

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        match &self.mode {
            Mode::Menu => render_menu_into(self.menu_selected, viewport, fb),
            Mode::Classic(c) => {
                self.game_view.render_into(&c.snap, &c.hud, viewport, fb)
            }
            Mode::Speed(s) => self.speed_view.render_into(&s.round, s.cursor, viewport, fb),
            Mode::History => render_history_into(self.session.history(), viewport, fb),
            Mode::Settings(form) => render_settings_into(form, viewport, fb),
        }
    }

    pub fn render(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(viewport, &mut fb);
        fb
    }
}

impl ClassicScreen {
    fn new(engine: BoardEngine, hud: ClassicHud) -> Self {
        let mut snap = GameSnapshot::default();
        engine.snapshot_into(&mut snap);
        Self {
            engine,
            snap,
            hud,
            notice_ms: 0,
        }
    }

    fn restart(&mut self, session: &mut SessionStore) {
        session.restart(&mut self.engine);
        self.engine.snapshot_into(&mut self.snap);
        self.clear_notice();
    }

    fn drop_into(&mut self, column: usize, session: &mut SessionStore) {
        match self.engine.apply_move(column) {
            Ok(outcome) => {
                self.engine.snapshot_into(&mut self.snap);
                self.clear_notice();
                if let Some(result) = outcome.status.result() {
                    session.record_result(result);
                }
            }
            Err(EngineError::ColumnFull { .. }) => {
                self.hud.notice = Some(COLUMN_FULL_NOTICE);
                self.notice_ms = NOTICE_MS;
            }
            Err(e) => debug!(error = %e, "move ignored"),
        }
    }

    fn clear_notice(&mut self) {
        self.hud.notice = None;
        self.notice_ms = 0;
    }
}
