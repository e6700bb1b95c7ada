use crate::game::{is_legal, Coord, GameOutcome, GameState};
use crate::save;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::path::PathBuf;

pub struct App {
    state: GameState,
    cursor: Coord,
    selected: Option<Coord>,
    message: Option<String>,
    save_path: PathBuf,
    should_quit: bool,
}

impl App {
    pub fn new(state: GameState, save_path: PathBuf) -> Self {
        let cursor = state.roster().fox();
        App {
            state,
            cursor,
            selected: None,
            message: None,
            save_path,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        let dim = self.state.dim();
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.selected = None;
            }
            KeyCode::Left => {
                if self.cursor.col > 0 {
                    self.cursor.col -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor.col < dim - 1 {
                    self.cursor.col += 1;
                }
            }
            KeyCode::Up => {
                if self.cursor.row > 1 {
                    self.cursor.row -= 1;
                }
            }
            KeyCode::Down => {
                if self.cursor.row < dim {
                    self.cursor.row += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.pick_square();
            }
            KeyCode::Char('s') => {
                self.save();
            }
            KeyCode::Char('l') => {
                self.load();
            }
            KeyCode::Char('r') => {
                self.reset();
            }
            _ => {}
        }
    }

    /// Select a piece, or move the selected piece to the cursor square.
    fn pick_square(&mut self) {
        if self.state.is_terminal() {
            self.message = Some("Game over! Press 'r' for a new game.".to_string());
            return;
        }

        match self.selected {
            None => {
                if self.state.roster().occupied(self.cursor) {
                    self.selected = Some(self.cursor);
                } else {
                    self.message = Some("No piece on that square.".to_string());
                }
            }
            Some(origin) => {
                self.selected = None;
                self.try_move(origin, self.cursor);
            }
        }
    }

    /// Validate-then-apply for one move; on failure the player is simply
    /// re-prompted by the event loop.
    fn try_move(&mut self, origin: Coord, dest: Coord) {
        let side = self.state.turn();
        if !is_legal(self.state.dim(), self.state.roster(), side, origin, dest) {
            self.message = Some(format!("Illegal move {origin} -> {dest}. Try again!"));
            return;
        }

        if let Err(err) = self.state.apply_move(origin, dest) {
            self.message = Some(err.to_string());
            return;
        }

        match self.state.outcome() {
            Some(GameOutcome::FoxWin) => {
                self.message = Some("The Fox wins!".to_string());
            }
            Some(GameOutcome::HoundWin) => {
                self.message = Some("The Hounds win!".to_string());
            }
            None => {
                self.message = Some(format!("{} to move.", self.state.turn().name()));
            }
        }
    }

    fn save(&mut self) {
        if let Some(dir) = self.save_path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        self.message = Some(match save::save_game(&self.save_path, &self.state) {
            Ok(()) => format!("Game saved to {}.", self.save_path.display()),
            Err(err) => format!("ERROR: saving failed: {err}"),
        });
    }

    fn load(&mut self) {
        match save::load_game(&self.save_path, self.state.dim()) {
            Ok((roster, side)) => {
                self.state.restore(roster, side);
                self.selected = None;
                self.message = Some(format!("Game loaded, {} to move.", side.name()));
            }
            // The running game is untouched on failure.
            Err(err) => self.message = Some(format!("ERROR: loading failed: {err}")),
        }
    }

    fn reset(&mut self) {
        let dim = self.state.dim();
        match GameState::initial(dim) {
            Ok(state) => {
                self.state = state;
                self.cursor = self.state.roster().fox();
                self.selected = None;
                self.message = Some("New game started!".to_string());
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.state, self.cursor, self.selected, &self.message);
    }
}
