use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use invaders::app::App;
use invaders::event::{Event, EventHandler};
use invaders::{ui, Config, Error};

#[derive(Debug, Parser)]
#[command(name = "invaders", version, about = "Space Invaders in the terminal")]
struct Cli {
    /// Config file (default: ./invaders.toml if it exists)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Milliseconds between simulation ticks
    #[arg(long)]
    tick_ms: Option<u64>,
    /// Milliseconds the "Wave Cleared!" pause lasts
    #[arg(long)]
    wave_pause_ms: Option<u64>,
    /// Write logs here (filter with RUST_LOG); logging is off otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: Option<&Path>) -> Result<(), Error> {
    let Some(path) = path else { return Ok(()) };
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(ms) = cli.tick_ms {
        config.tick_ms = ms;
    }
    if let Some(ms) = cli.wave_pause_ms {
        config.wave_pause_ms = ms;
    }
    config.validate()?;
    log::info!("config: {config:?}");

    let mut app = App::new(&config)?;
    let events = EventHandler::new(config.frame_ms)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, &mut app, &events);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> Result<(), Error> {
    loop {
        app.on_frame();
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            Event::Frame => {}
            Event::Key(key) => app.on_key(key)?,
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
