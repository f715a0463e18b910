//! Background input reader.
//!
//! One thread blocks on the terminal's event source and queues converted
//! events; the main loop takes them one at a time.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crossterm::event;

use crate::error::{Error, Result};
use crate::event::Event;

pub struct InputReader {
    events: Receiver<Event>,
}

impl InputReader {
    /// Start the reader thread. It exits when the receiving side is dropped
    /// or the terminal stops producing events.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || loop {
            let raw = match event::read() {
                Ok(raw) => raw,
                Err(e) => {
                    log::error!("input reader stopped: {e}");
                    return;
                }
            };
            let Some(event) = Event::from_crossterm(raw) else {
                continue;
            };
            if tx.send(event).is_err() {
                return;
            }
        });
        Self { events: rx }
    }

    /// Wrap an existing queue, e.g. one fed by a test or a script.
    pub fn from_receiver(events: Receiver<Event>) -> Self {
        Self { events }
    }

    /// Block until the next event.
    pub fn next(&self) -> Result<Event> {
        self.events.recv().map_err(|_| Error::InputClosed)
    }

    /// Next queued event without blocking.
    pub fn try_next(&self) -> Result<Option<Event>> {
        match self.events.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(Error::InputClosed),
        }
    }
}
