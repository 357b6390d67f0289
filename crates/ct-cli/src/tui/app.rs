use crossterm::event::{KeyCode, KeyEvent};

use ct_mechanics::Attribute;
use ct_session::{Command, GameTable, ReshuffleTarget};

/// Panels per row on the board.
pub const COLUMNS: usize = 3;

/// A line of feedback shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

pub struct App {
    pub table: GameTable,
    pub selected: Attribute,
    pub message: Option<Message>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(table: GameTable) -> Self {
        Self {
            table,
            selected: Attribute::Strength,
            message: None,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-(COLUMNS as isize)),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(COLUMNS as isize),
            KeyCode::Char(c @ '1'..='6') => {
                if let Some(idx) = c.to_digit(10) {
                    self.selected = Attribute::ALL[idx as usize - 1];
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('d') => {
                self.run(Command::Draw(self.selected));
            }
            KeyCode::Char('x') | KeyCode::Esc => self.toggle_reveal(),
            KeyCode::Char('r') => {
                self.run(Command::Reshuffle(ReshuffleTarget::One(self.selected)));
            }
            KeyCode::Char('R') => self.run(Command::Reshuffle(ReshuffleTarget::All)),
            KeyCode::Char('+') | KeyCode::Char('a') => self.run(Command::Allocate(self.selected)),
            KeyCode::Char('L') | KeyCode::Char('u') => self.run(Command::LevelUp),
            _ => {}
        }
    }

    /// Clicking the shown result hides it; with nothing shown, show it again.
    fn toggle_reveal(&mut self) {
        if self.table.session().is_revealed(self.selected) {
            self.run(Command::Hide(self.selected));
        } else {
            self.run(Command::Reveal(self.selected));
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = Attribute::ALL.len() as isize;
        let idx = (self.selected.index() as isize + delta).rem_euclid(len);
        self.selected = Attribute::ALL[idx as usize];
    }

    fn run(&mut self, command: Command) {
        self.message = Some(match self.table.apply(command) {
            Ok(text) => Message {
                text,
                is_error: false,
            },
            Err(e) => Message {
                text: e.to_string(),
                is_error: true,
            },
        });
    }
}
