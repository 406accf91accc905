use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("cannot read config {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },
    #[error("invalid config {}: {source}", path.display())]
    ConfigParse { path: PathBuf, source: toml::de::Error },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("simulation loop has stopped")]
    RunnerStopped,
    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
