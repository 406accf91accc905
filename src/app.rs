use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Command;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::game::{Phase, Snapshot};
use crate::runner::Runner;

/// What a key press means to the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Send(Command),
    TogglePause,
    /// Enter: start from the title screen, try again after a finished run.
    Confirm,
}

/// Fixed key bindings.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Send(Command::Quit));
    }
    let action = match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Action::Send(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Action::Send(Command::MoveRight),
        KeyCode::Char(' ') | KeyCode::Up => Action::Send(Command::Fire),
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Action::Confirm,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Send(Command::ResetGame),
        KeyCode::Char('p') | KeyCode::Char('P') => Action::TogglePause,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Send(Command::Quit),
        _ => return None,
    };
    Some(action)
}

/// Commands a confirm press turns into, given the phase on screen.
pub fn confirm_commands(phase: Phase) -> &'static [Command] {
    match phase {
        Phase::Ready => &[Command::StartGame],
        Phase::GameOver | Phase::Won => &[Command::ResetGame, Command::StartGame],
        Phase::Playing | Phase::WaveCleared { .. } => &[],
    }
}

pub struct App {
    pub should_quit: bool,
    pub paused: bool,
    /// Last snapshot picked up by `on_frame`; what the UI draws.
    pub view: Option<Snapshot>,
    latest: Arc<Mutex<Option<Snapshot>>>,
    runner: Runner,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let latest = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&latest);
        let runner = Runner::spawn(config, move |snapshot: &Snapshot| {
            let mut guard = match slot.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            *guard = Some(snapshot.clone());
        })?;

        Ok(Self {
            should_quit: false,
            paused: false,
            view: None,
            latest,
            runner,
        })
    }

    pub fn on_frame(&mut self) {
        let guard = match self.latest.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(snapshot) = guard.as_ref() {
            self.view = Some(snapshot.clone());
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(action) = action_for(key) else {
            return Ok(());
        };
        match action {
            Action::Send(Command::Quit) => self.quit(),
            Action::Send(command) => {
                if command == Command::ResetGame {
                    self.paused = false;
                }
                self.runner.send(command)
            }
            Action::TogglePause => {
                self.paused = !self.paused;
                if self.paused {
                    self.runner.pause()
                } else {
                    self.runner.resume()
                }
            }
            Action::Confirm => {
                let phase = self.view.as_ref().map_or(Phase::Ready, |s| s.phase);
                for &command in confirm_commands(phase) {
                    self.runner.send(command)?;
                }
                if phase.is_terminal() {
                    self.paused = false;
                }
                Ok(())
            }
        }
    }

    fn quit(&mut self) -> Result<()> {
        self.should_quit = true;
        match self.runner.send(Command::Quit) {
            Ok(()) | Err(Error::RunnerStopped) => {}
            Err(e) => return Err(e),
        }
        self.runner.stop();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrow_keys_move_the_ship() {
        assert_eq!(action_for(key(KeyCode::Left)), Some(Action::Send(Command::MoveLeft)));
        assert_eq!(action_for(key(KeyCode::Right)), Some(Action::Send(Command::MoveRight)));
        assert_eq!(action_for(key(KeyCode::Char('a'))), Some(Action::Send(Command::MoveLeft)));
        assert_eq!(action_for(key(KeyCode::Char(' '))), Some(Action::Send(Command::Fire)));
    }

    #[test]
    fn quit_bindings() {
        assert_eq!(action_for(key(KeyCode::Char('q'))), Some(Action::Send(Command::Quit)));
        assert_eq!(action_for(key(KeyCode::Esc)), Some(Action::Send(Command::Quit)));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c), Some(Action::Send(Command::Quit)));
        assert_eq!(action_for(key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn confirm_depends_on_phase() {
        assert_eq!(confirm_commands(Phase::Ready), &[Command::StartGame]);
        assert_eq!(confirm_commands(Phase::GameOver), &[Command::ResetGame, Command::StartGame]);
        assert_eq!(confirm_commands(Phase::Won), &[Command::ResetGame, Command::StartGame]);
        assert!(confirm_commands(Phase::Playing).is_empty());
        assert!(confirm_commands(Phase::WaveCleared { remaining_ticks: 4 }).is_empty());
    }

    #[test]
    fn quit_stops_the_simulation() {
        let mut app = App::new(&Config { tick_ms: 1, ..Config::default() }).unwrap();
        app.on_key(key(KeyCode::Enter)).unwrap();
        app.on_key(key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
        assert!(!app.runner.is_running());
    }
}
