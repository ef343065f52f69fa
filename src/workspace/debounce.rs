//! Single-slot cancellable timer
//!
//! A [`Debouncer`] owns at most one scheduled message. Scheduling again aborts
//! the previous timer, so only the last request within a quiet period is ever
//! delivered. Every schedule gets a fresh [`Ticket`]; a message that slipped
//! into the channel before its timer was cancelled is recognised as stale by
//! [`Debouncer::fire`] and must be dropped by the receiver.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Identifies one scheduled firing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Debouncer<M> {
    quiet: Duration,
    sender: UnboundedSender<M>,
    generation: u64,
    pending: Option<(Ticket, JoinHandle<()>)>,
}

impl<M: Send + 'static> Debouncer<M> {
    pub fn new(quiet: Duration, sender: UnboundedSender<M>) -> Self {
        Self {
            quiet,
            sender,
            generation: 0,
            pending: None,
        }
    }

    /// Supersede any pending timer and deliver `make(ticket)` after the
    /// quiet period.
    pub fn schedule<F>(&mut self, make: F) -> Ticket
    where
        F: FnOnce(Ticket) -> M,
    {
        self.cancel();

        self.generation += 1;
        let ticket = Ticket(self.generation);
        let message = make(ticket);
        let sender = self.sender.clone();
        let quiet = self.quiet;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            // Receiver gone means the workspace shut down
            let _ = sender.send(message);
        });

        self.pending = Some((ticket, handle));
        ticket
    }

    /// Drop the pending timer. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some((_, handle)) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Claim a delivered ticket. `true` only for the current, uncancelled
    /// timer; the slot is empty afterwards.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        match &self.pending {
            Some((current, _)) if *current == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }
}

impl<M> Drop for Debouncer<M> {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.pending.take() {
            handle.abort();
        }
    }
}
