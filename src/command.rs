/// Discrete inputs the simulation accepts from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Fire,
    StartGame,
    ResetGame,
    Quit,
}

impl Command {
    /// Ship controls are the only commands that care about timing within a
    /// run; they are dropped while the loop is paused.
    pub fn is_ship_control(self) -> bool {
        matches!(self, Command::MoveLeft | Command::MoveRight | Command::Fire)
    }
}
