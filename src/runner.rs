//! Simulation thread. Owns the `GameState`, ticks it at a fixed cadence and
//! hands a snapshot to the render sink after every step.
//!
//! Input reaches the state only through the control queue, which is drained
//! at the top of each tick, so nothing touches the ship or missiles while a
//! tick is in progress.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::command::Command;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::game::{GameEvent, GameState, Snapshot};

enum Control {
    Command(Command),
    Pause(bool),
}

pub struct Runner {
    tx: mpsc::Sender<Control>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Runner {
    /// Start ticking a fresh game. `sink` runs on the simulation thread once
    /// at start-up and then after every tick.
    pub fn spawn<F>(config: &Config, sink: F) -> Result<Self>
    where
        F: FnMut(&Snapshot) + Send + 'static,
    {
        config.validate()?;
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let state = GameState::with_wave_pause(config.wave_pause_ticks());
        let tick = config.tick_delay();

        let flag = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("invaders-sim".into())
            .spawn(move || run_loop(state, tick, rx, &flag, sink))?;

        log::info!(
            "simulation started: tick {}ms, wave pause {} ticks",
            config.tick_ms,
            config.wave_pause_ticks()
        );
        Ok(Runner { tx, stop, handle: Some(handle) })
    }

    pub fn send(&self, command: Command) -> Result<()> {
        self.control(Control::Command(command))
    }

    /// Freeze the board. Start and reset still go through.
    pub fn pause(&self) -> Result<()> {
        self.control(Control::Pause(true))
    }

    pub fn resume(&self) -> Result<()> {
        self.control(Control::Pause(false))
    }

    pub fn is_running(&self) -> bool {
        !self.stop.load(Ordering::Acquire)
            && self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Ask the loop to finish and wait for it.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("simulation thread panicked");
            }
        }
    }

    fn control(&self, control: Control) -> Result<()> {
        if self.stop.load(Ordering::Acquire) {
            return Err(Error::RunnerStopped);
        }
        self.tx.send(control).map_err(|_| Error::RunnerStopped)
    }
}

impl Drop for Runner {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop<F>(
    mut state: GameState,
    tick: Duration,
    rx: mpsc::Receiver<Control>,
    stop: &AtomicBool,
    mut sink: F,
) where
    F: FnMut(&Snapshot),
{
    let mut paused = false;
    let mut next_tick = Instant::now();
    sink(&state.snapshot());

    while !stop.load(Ordering::Acquire) {
        loop {
            match rx.try_recv() {
                Ok(Control::Command(Command::Quit)) => {
                    log::info!("quit requested");
                    stop.store(true, Ordering::Release);
                    return;
                }
                Ok(Control::Command(cmd)) => {
                    if paused && cmd.is_ship_control() {
                        continue;
                    }
                    if cmd == Command::ResetGame {
                        paused = false;
                    }
                    let accepted = state.apply(cmd);
                    log::trace!("{cmd:?} accepted={accepted}");
                }
                Ok(Control::Pause(p)) => {
                    if p != paused {
                        log::debug!("{}", if p { "paused" } else { "resumed" });
                    }
                    paused = p;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    stop.store(true, Ordering::Release);
                    return;
                }
            }
        }

        if !paused {
            for event in state.tick() {
                log_event(&event);
            }
        }
        sink(&state.snapshot());

        // Sleep to the next deadline; if we fell far behind, start over
        // from now instead of bursting through the backlog.
        next_tick += tick;
        let now = Instant::now();
        if next_tick > now {
            thread::sleep(next_tick - now);
        } else if now - next_tick > tick * 2 {
            next_tick = now;
        }
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::InvaderDestroyed { at, score } => {
            log::debug!("invader down at ({}, {}), score {score}", at.x, at.y)
        }
        GameEvent::WaveCleared { wave, score } => log::info!("wave cleared, next wave {wave}, score {score}"),
        GameEvent::GameOver => log::info!("game over"),
        GameEvent::Won { score } => log::info!("all waves destroyed, final score {score}"),
    }
}
