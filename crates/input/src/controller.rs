//! Input controller - forwards recognized keys to the command queue
//!
//! Runs on the event-delivery side. It never touches game state; it only
//! enqueues commands for the game loop to drain.

use std::io;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::{debug, trace};

use crate::core::CommandQueue;
use crate::map::{handle_key_event, handle_key_symbol};
use crate::types::Command;

/// How often the event thread re-checks for quit while idle
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct InputController {
    queue: CommandQueue,
}

impl InputController {
    pub fn new(queue: CommandQueue) -> Self {
        Self { queue }
    }

    pub fn queue(&self) -> &CommandQueue {
        &self.queue
    }

    /// Enqueue the command for a key event, if any. Key releases are ignored.
    pub fn handle_key(&self, key: KeyEvent) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let command = handle_key_event(key)?;
        self.forward(command);
        Some(command)
    }

    /// Enqueue the command for an abstract key symbol, if any.
    pub fn handle_symbol(&self, symbol: &str) -> Option<Command> {
        let command = handle_key_symbol(symbol)?;
        self.forward(command);
        Some(command)
    }

    fn forward(&self, command: Command) {
        trace!(command = command.as_str(), "enqueued");
        self.queue.push(command);
    }

    /// Read terminal events on a background thread until quit is requested.
    ///
    /// The terminal must already be in raw mode.
    pub fn spawn_event_thread(self) -> io::Result<JoinHandle<io::Result<()>>> {
        thread::Builder::new()
            .name("input".into())
            .spawn(move || {
                let result = self.pump_events();
                if result.is_err() {
                    // Without input the session could never end.
                    self.queue.push(Command::Quit);
                }
                result
            })
    }

    fn pump_events(&self) -> io::Result<()> {
        while !self.queue.quit_requested() {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        debug!("input thread stopped");
        Ok(())
    }
}
