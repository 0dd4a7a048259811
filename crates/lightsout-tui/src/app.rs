use crate::animations::WinScreen;
use crate::config::{Config, SUPPORTED_SIZES};
use crate::game::Game;
use crate::layout::GridLayout;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use lightsout_core::{Position, SolvedState};
use std::time::Duration;
use tracing::{info, warn};

/// Result of handling an input event
#[derive(Debug, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// Current screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Normal gameplay
    Playing,
    /// Win celebration screen
    Win,
    /// About dialog over the board
    About,
}

/// The main application state
pub struct App {
    /// Current game
    pub game: Game,
    /// Cell selected with the keyboard
    pub cursor: Position,
    /// Color theme
    pub theme: Theme,
    /// Cell suggested by the last hint request
    pub hint: Option<Position>,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
    /// Current screen state
    pub screen_state: ScreenState,
    /// Win screen animation
    pub win_screen: WinScreen,
    /// Board placement from the last render, for mapping clicks
    pub layout: GridLayout,
}

impl App {
    pub fn new(config: &Config) -> lightsout_core::Result<Self> {
        let game = Game::new(config.size, config.seed, config.solvable_only)?;
        let size = game.size();
        Ok(Self {
            game,
            cursor: Self::center(size),
            theme: Theme::default(),
            hint: None,
            message: None,
            message_timer: 0,
            screen_state: ScreenState::Playing,
            win_screen: WinScreen::new(),
            layout: GridLayout::centered(size, 80, 24),
        })
    }

    fn center(size: usize) -> Position {
        Position::new(size / 2, size / 2)
    }

    /// Get the tick rate based on current screen
    pub fn get_tick_rate(&self) -> Duration {
        match self.screen_state {
            ScreenState::Win => Duration::from_millis(33), // 30 FPS for animations
            ScreenState::Playing | ScreenState::About => Duration::from_millis(100),
        }
    }

    /// Update animations and timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        if self.screen_state == ScreenState::Win {
            self.win_screen.update();
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30; // ~3 seconds at 100ms poll
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match self.screen_state {
            ScreenState::Playing => self.handle_game_key(key),
            ScreenState::Win => self.handle_win_key(key),
            ScreenState::About => self.handle_about_key(key),
        }
    }

    /// Handle a mouse event; a left click on a cell presses it
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> AppAction {
        if self.screen_state != ScreenState::Playing {
            return AppAction::Continue;
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            // Clicks off the board never reach the engine
            if let Some(pos) = self.layout.cell_at(mouse.column, mouse.row) {
                self.cursor = pos;
                self.press(pos);
            }
        }
        AppAction::Continue
    }

    fn handle_game_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),

            KeyCode::Char(' ') | KeyCode::Enter => self.press(self.cursor),

            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('r') => self.change_size(self.game.size()),
            KeyCode::Char(c @ '3'..='5') => {
                if let Some(size) = c.to_digit(10) {
                    self.change_size(size as usize);
                }
            }

            KeyCode::Char('?') => self.request_hint(),

            KeyCode::Char('a') => self.screen_state = ScreenState::About,

            _ => {}
        }
        AppAction::Continue
    }

    fn handle_win_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Char('n') | KeyCode::Enter | KeyCode::Char(' ') => {
                self.screen_state = ScreenState::Playing;
                self.new_game();
            }
            KeyCode::Esc => {
                // Back to the (solved) board; it still accepts presses
                self.screen_state = ScreenState::Playing;
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_about_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('a') => {
                self.screen_state = ScreenState::Playing;
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Press a cell and react to a win
    fn press(&mut self, pos: Position) {
        self.hint = None;
        match self.game.press(pos) {
            Ok(SolvedState::Solved) => {
                info!("puzzle solved");
                self.screen_state = ScreenState::Win;
                self.win_screen.reset();
            }
            Ok(SolvedState::InProgress) => {}
            Err(e) => warn!(%pos, "ignored press: {}", e),
        }
    }

    fn new_game(&mut self) {
        self.game.new_game();
        self.hint = None;
        if !self.game.is_solvable() {
            self.show_message("New game - this board cannot be solved!");
        } else {
            self.show_message("New game");
        }
    }

    fn change_size(&mut self, size: usize) {
        if !SUPPORTED_SIZES.contains(&size) {
            return;
        }
        match self.game.reset(size) {
            Ok(()) => {
                self.hint = None;
                self.cursor = Self::center(size);
                self.show_message(&format!("{}x{} board", size, size));
            }
            Err(e) => warn!(size, "ignored resize: {}", e),
        }
    }

    fn request_hint(&mut self) {
        if self.game.is_solved() {
            self.show_message("Already solved");
            return;
        }
        match self.game.hint() {
            Some(pos) => {
                self.hint = Some(pos);
                self.cursor = pos;
                self.show_message(&format!("Try row {}, column {}", pos.row + 1, pos.col + 1));
            }
            None => self.show_message("This board cannot be solved - press n"),
        }
    }

    fn move_cursor(&mut self, row_delta: i32, col_delta: i32) {
        let max = self.game.size() as i32 - 1;
        let new_row = (self.cursor.row as i32 + row_delta).clamp(0, max) as usize;
        let new_col = (self.cursor.col as i32 + col_delta).clamp(0, max) as usize;
        self.cursor = Position::new(new_row, new_col);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn app(size: usize) -> App {
        let config = Config {
            size,
            seed: Some(42),
            ..Config::default()
        };
        App::new(&config).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_starts_all_lit_at_center() {
        let app = app(3);
        assert_eq!(app.cursor, Position::new(1, 1));
        assert_eq!(app.game.grid().lit_count(), 9);
        assert_eq!(app.screen_state, ScreenState::Playing);
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let mut app = app(3);
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Up));
            app.handle_key(key(KeyCode::Char('h')));
        }
        assert_eq!(app.cursor, Position::new(0, 0));
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Down));
            app.handle_key(key(KeyCode::Char('l')));
        }
        assert_eq!(app.cursor, Position::new(2, 2));
    }

    #[test]
    fn test_space_presses_cursor() {
        let mut app = app(3);
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.game.grid().to_string_compact(), "#.#/.../#.#");
    }

    #[test]
    fn test_click_maps_to_cell() {
        let mut app = app(3);
        app.layout = GridLayout { x: 10, y: 2, size: 3 };
        app.handle_mouse(click(11, 3));
        assert_eq!(app.cursor, Position::new(0, 0));
        assert_eq!(app.game.grid().to_string_compact(), "..#/.##/###");
    }

    #[test]
    fn test_click_off_board_ignored() {
        let mut app = app(3);
        app.layout = GridLayout { x: 10, y: 2, size: 3 };
        app.handle_mouse(click(2, 2));
        app.handle_mouse(click(40, 5));
        assert_eq!(app.game.grid().lit_count(), 9);
    }

    #[test]
    fn test_size_keys() {
        let mut app = app(3);
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.game.size(), 5);
        assert_eq!(app.cursor, Position::new(2, 2));
        assert_eq!(app.game.grid().lit_count(), 25);

        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.game.size(), 4);
    }

    #[test]
    fn test_reset_key_relights_board() {
        let mut app = app(4);
        app.handle_key(key(KeyCode::Char('n')));
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.game.size(), 4);
        assert_eq!(app.game.grid().lit_count(), 16);
    }

    #[test]
    fn test_win_then_keep_playing() {
        let mut app = app(3);
        app.handle_key(key(KeyCode::Char('?')));
        let mut guard = 0;
        while app.screen_state == ScreenState::Playing {
            let pos = app.hint.expect("hint while unsolved");
            app.cursor = pos;
            app.handle_key(key(KeyCode::Enter));
            app.handle_key(key(KeyCode::Char('?')));
            guard += 1;
            assert!(guard <= 9);
        }
        assert_eq!(app.screen_state, ScreenState::Win);
        assert!(app.game.is_solved());

        // Esc goes back to the solved board, which still takes presses
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen_state, ScreenState::Playing);
        app.handle_key(key(KeyCode::Char(' ')));
        assert!(!app.game.is_solved());
    }

    #[test]
    fn test_new_game_from_win_screen() {
        let mut app = app(3);
        app.screen_state = ScreenState::Win;
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.screen_state, ScreenState::Playing);
        assert!(!app.game.is_solved());
        assert!(app.message.is_some());
    }

    #[test]
    fn test_about_dialog() {
        let mut app = app(3);
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.screen_state, ScreenState::About);
        // Board input is blocked while the dialog is open
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.game.grid().lit_count(), 9);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen_state, ScreenState::Playing);
    }

    #[test]
    fn test_quit() {
        let mut app = app(3);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), AppAction::Quit);
    }

    #[test]
    fn test_message_expires() {
        let mut app = app(3);
        app.show_message("hello");
        for _ in 0..30 {
            app.tick();
        }
        assert!(app.message.is_none());
    }
}
