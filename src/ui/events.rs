use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;

pub enum AppEvent {
    Key(KeyEvent),
    /// Terminal was resized; only a redraw is needed.
    Redraw,
    /// Reading input failed. The reader has stopped.
    Error(io::Error),
}

/// Reads terminal input on a background thread and forwards it to the UI
/// thread.
///
/// The reader stops after forwarding a read error, or once the receiving
/// side has been dropped.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    /// Forward events from the terminal.
    pub fn new() -> io::Result<Self> {
        Self::from_source(event::read)
    }

    /// Forward events produced by `read`, one call per event.
    pub fn from_source<F>(mut read: F) -> io::Result<Self>
    where
        F: FnMut() -> io::Result<Event> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("input-reader".to_string())
            .spawn(move || loop {
                let event = match read() {
                    Ok(Event::Key(key)) => AppEvent::Key(key),
                    Ok(Event::Resize(..)) => AppEvent::Redraw,
                    Ok(_) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to read terminal event");
                        let _ = tx.send(AppEvent::Error(err));
                        break;
                    }
                };
                if tx.send(event).is_err() {
                    break;
                }
            })?;

        Ok(Self { rx })
    }

    /// Block until the next event.
    ///
    /// A reader that went away without reporting an error (it panicked)
    /// is reported as an error too.
    pub fn next(&self) -> io::Result<AppEvent> {
        self.rx
            .recv()
            .map_err(|_| io::Error::other("terminal input reader stopped"))
    }
}
