//! Command queue between the input layer and the game loop
//!
//! Producers only enqueue. The game loop is the single consumer and drains the
//! queue at one point per tick, so player moves never race gravity.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::types::Command;

#[derive(Debug, Default)]
struct Inbox {
    pending: VecDeque<Command>,
    quit: bool,
    /// Only `Quit` is accepted once closed
    closed: bool,
}

#[derive(Debug, Default)]
struct Shared {
    inbox: Mutex<Inbox>,
    quit_signal: Condvar,
}

/// Cloneable handle to a FIFO of player commands
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    shared: Arc<Shared>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inbox> {
        // The inbox is a plain queue; a panicking producer cannot corrupt it.
        self.shared
            .inbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Enqueue a command. `Quit` also wakes anyone blocked in a wait.
    ///
    /// Moves pushed after [`close`](Self::close) are dropped.
    pub fn push(&self, command: Command) {
        let mut inbox = self.lock();
        if inbox.closed && command != Command::Quit {
            return;
        }
        inbox.pending.push_back(command);
        if command == Command::Quit {
            inbox.quit = true;
            self.shared.quit_signal.notify_all();
        }
    }

    /// Stop accepting moves and discard the pending ones.
    ///
    /// Used once the game is over and only `Quit` still matters.
    pub fn close(&self) {
        let mut inbox = self.lock();
        inbox.closed = true;
        inbox.pending.retain(|&command| command == Command::Quit);
    }

    /// Take every pending command, oldest first
    pub fn drain(&self) -> Vec<Command> {
        self.lock().pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().pending.is_empty()
    }

    /// Whether `Quit` has ever been pushed
    pub fn quit_requested(&self) -> bool {
        self.lock().quit
    }

    /// Block for up to `timeout`, returning early once `Quit` is pushed.
    ///
    /// Returns whether quit was requested.
    pub fn wait_for_quit(&self, timeout: Duration) -> bool {
        let inbox = self.lock();
        let (inbox, _) = self
            .shared
            .quit_signal
            .wait_timeout_while(inbox, timeout, |inbox| !inbox.quit)
            .unwrap_or_else(PoisonError::into_inner);
        inbox.quit
    }

    /// Block until `Quit` is pushed
    pub fn wait_until_quit(&self) {
        let inbox = self.lock();
        let _inbox = self
            .shared
            .quit_signal
            .wait_while(inbox, |inbox| !inbox.quit)
            .unwrap_or_else(PoisonError::into_inner);
    }
}
