use std::io;
use std::sync::mpsc::{self, Receiver, RecvError};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

/// Upper bound on a single blocking poll.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

pub enum AppEvent {
    Key(KeyEvent),
    /// The terminal changed size; the next draw picks up the new area.
    Resize,
}

/// Polls the terminal on a background thread and forwards events.
///
/// The thread never touches application state; it exits on the first
/// send after the receiving side is dropped.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new() -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("terminal-events".to_string())
            .spawn(move || loop {
                let forwarded = match event::poll(POLL_INTERVAL) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                        Ok(Event::Resize(..)) => Some(AppEvent::Resize),
                        Ok(_) => None,
                        Err(err) => {
                            tracing::error!(%err, "failed to read terminal event");
                            break;
                        }
                    },
                    Ok(false) => None,
                    Err(err) => {
                        tracing::error!(%err, "failed to poll terminal");
                        break;
                    }
                };
                if let Some(event) = forwarded {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            })?;

        Ok(Self { rx })
    }

    /// Block until the next event. Fails once the poller has stopped.
    pub fn next(&self) -> Result<AppEvent, RecvError> {
        self.rx.recv()
    }
}
