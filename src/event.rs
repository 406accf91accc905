use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};

/// What the front-end loop wakes up for. Simulation ticks are not in here;
/// they run on their own thread.
pub enum Event {
    Key(KeyEvent),
    /// Time to redraw.
    Frame,
}

pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(frame_ms: u64) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let frame_rate = Duration::from_millis(frame_ms);

        thread::Builder::new()
            .name("invaders-input".into())
            .spawn(move || loop {
                match event::poll(frame_rate) {
                    Ok(true) => {
                        if let Ok(crossterm::event::Event::Key(key)) = event::read() {
                            if key.kind == KeyEventKind::Press && tx.send(Event::Key(key)).is_err() {
                                return;
                            }
                        }
                    }
                    Ok(false) => {
                        if tx.send(Event::Frame).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        log::warn!("input poll failed: {e}");
                        thread::sleep(frame_rate);
                        if tx.send(Event::Frame).is_err() {
                            return;
                        }
                    }
                }
            })?;

        Ok(Self { rx })
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}
