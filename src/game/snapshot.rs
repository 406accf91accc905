use super::entities::{Position, Rgb};

/// Where the current run is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a start command.
    Ready,
    Playing,
    /// Next wave is already laid out; ticks count down before play resumes.
    WaveCleared { remaining_ticks: u32 },
    GameOver,
    Won,
}

impl Phase {
    /// Game over and won both end the run until a reset.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver | Phase::Won)
    }

    /// Text shown over the board, if any.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            Phase::Ready | Phase::Playing => None,
            Phase::WaveCleared { .. } => Some("Wave Cleared!"),
            Phase::GameOver => Some("Game Over"),
            Phase::Won => Some("You won!"),
        }
    }
}

/// Something worth telling the outside world about, produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    InvaderDestroyed { at: Position, score: u32 },
    WaveCleared { wave: u32, score: u32 },
    GameOver,
    Won { score: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvaderView {
    pub pos: Position,
    pub color: Rgb,
}

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub phase: Phase,
    pub ship: Position,
    pub ship_cells: Vec<Position>,
    pub ship_visible: bool,
    pub ship_color: Rgb,
    pub missiles: Vec<Position>,
    pub missile_color: Rgb,
    pub invaders: Vec<InvaderView>,
    pub score: u32,
    pub wave: u32,
    pub tick: u64,
}

impl Snapshot {
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }
}
