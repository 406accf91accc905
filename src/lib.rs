//! Terminal Space Invaders.
//!
//! `game` is the simulation and knows nothing about terminals; `runner`
//! drives it on its own thread; `app`, `event` and `ui` are the ratatui
//! front-end that feeds it commands and draws its snapshots.

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod game;
pub mod runner;
pub mod ui;

pub use command::Command;
pub use config::Config;
pub use error::{Error, Result};
pub use game::{GameEvent, GameState, Phase, Snapshot};
pub use runner::Runner;
