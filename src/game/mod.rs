//! The simulation core. Pure state and rules: no terminal, no threads, no
//! clocks. Everything advances one `tick()` at a time.

pub mod consts;
pub mod entities;
pub mod snapshot;


use crate::command::Command;

use consts::*;
pub use entities::{create_invaders, invader_count, Direction, Invader, Missile, Position, Rgb, Ship};
use entities::{MISSILE_COLOR, SHIP_COLOR};
pub use snapshot::{GameEvent, InvaderView, Phase, Snapshot};

pub struct GameState {
    ship: Ship,
    missiles: Vec<Missile>,
    invaders: Vec<Invader>,
    score: u32,
    wave: u32,
    phase: Phase,
    wave_pause_ticks: u32,
    tick: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::with_wave_pause((DEFAULT_WAVE_PAUSE_MS / DEFAULT_TICK_MS) as u32)
    }

    /// `wave_pause_ticks` is how many ticks the "Wave Cleared!" phase lasts.
    pub fn with_wave_pause(wave_pause_ticks: u32) -> Self {
        GameState {
            ship: Ship::spawn(),
            missiles: Vec::new(),
            invaders: create_invaders(1),
            score: 0,
            wave: 1,
            phase: Phase::Ready,
            wave_pause_ticks,
            tick: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn missiles(&self) -> &[Missile] {
        &self.missiles
    }

    pub fn invaders(&self) -> &[Invader] {
        &self.invaders
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// READY -> PLAYING. Any other phase ignores it.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        self.ship = Ship::spawn();
        self.phase = Phase::Playing;
        true
    }

    /// Back to READY from anywhere with a fresh first wave.
    pub fn reset(&mut self) {
        self.ship = Ship::spawn();
        self.missiles.clear();
        self.invaders = create_invaders(1);
        self.score = 0;
        self.wave = 1;
        self.phase = Phase::Ready;
        self.tick = 0;
    }

    /// Returns false, leaving the ship where it was, if the step would take it
    /// off the grid or the ship is not in play.
    pub fn move_ship(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let new_x = self.ship.pos.x + direction.dx();
        if !(SHIP_MIN_X..=SHIP_MAX_X).contains(&new_x) {
            return false;
        }
        self.ship.pos.x = new_x;
        true
    }

    /// Only one missile may be in flight at a time.
    pub fn fire_missile(&mut self) -> bool {
        if self.phase != Phase::Playing || !self.missiles.is_empty() {
            return false;
        }
        self.missiles.push(Missile::new(self.ship.pos.x, self.ship.pos.y));
        true
    }

    /// Apply one input command. `Quit` is not a state change and is ignored.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_ship(Direction::Left),
            Command::MoveRight => self.move_ship(Direction::Right),
            Command::Fire => self.fire_missile(),
            Command::StartGame => self.start(),
            Command::ResetGame => {
                self.reset();
                true
            }
            Command::Quit => false,
        }
    }

    /// Advance the simulation by one fixed step.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        self.tick += 1;
        let mut events = Vec::new();

        match self.phase {
            Phase::Playing => {}
            Phase::WaveCleared { remaining_ticks } => {
                self.phase = match remaining_ticks.saturating_sub(1) {
                    0 => Phase::Playing,
                    left => Phase::WaveCleared { remaining_ticks: left },
                };
                return events;
            }
            Phase::Ready | Phase::GameOver | Phase::Won => return events,
        }

        for missile in &mut self.missiles {
            missile.advance();
        }
        self.missiles.retain(|m| !m.is_spent());

        self.resolve_hits(&mut events);
        if self.invaders.is_empty() && self.is_final_wave() {
            self.phase = Phase::Won;
            events.push(GameEvent::Won { score: self.score });
            return events;
        }

        for invader in &mut self.invaders {
            invader.advance();
        }

        if self.invaders.iter().any(Invader::has_landed) {
            self.phase = Phase::GameOver;
            self.score = 0;
            events.push(GameEvent::GameOver);
            return events;
        }

        if self.invaders.is_empty() {
            self.next_wave(&mut events);
        }
        events
    }

    // Each missile takes out at most one invader: the earliest created one in range.
    fn resolve_hits(&mut self, events: &mut Vec<GameEvent>) {
        let invaders = &mut self.invaders;
        let score = &mut self.score;
        self.missiles.retain(|missile| {
            let Some(idx) = invaders.iter().position(|inv| inv.is_hit_by(missile)) else {
                return true;
            };
            let dead = invaders.remove(idx);
            *score += KILL_SCORE;
            events.push(GameEvent::InvaderDestroyed { at: dead.pos, score: *score });
            false
        });
    }

    /// The last formation is the first one whose size hits the layout cap.
    fn is_final_wave(&self) -> bool {
        invader_count(self.wave) >= MAX_INVADERS
    }

    fn next_wave(&mut self, events: &mut Vec<GameEvent>) {
        self.score += WAVE_CLEAR_SCORE;
        self.missiles.clear();
        // Wave index rides on the score.
        self.wave = self.score / WAVE_CLEAR_SCORE + 1;
        self.invaders = create_invaders(self.wave);
        self.ship = Ship::spawn();
        self.phase = match self.wave_pause_ticks {
            0 => Phase::Playing,
            n => Phase::WaveCleared { remaining_ticks: n },
        };
        events.push(GameEvent::WaveCleared { wave: self.wave, score: self.score });
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            ship: self.ship.pos,
            ship_cells: self.ship.cells().collect(),
            ship_visible: self.phase == Phase::Playing,
            ship_color: SHIP_COLOR,
            missiles: self.missiles.iter().map(|m| m.pos).collect(),
            missile_color: MISSILE_COLOR,
            invaders: self
                .invaders
                .iter()
                .map(|inv| InvaderView { pos: inv.pos, color: inv.color })
                .collect(),
            score: self.score,
            wave: self.wave,
            tick: self.tick,
        }
    }
}
