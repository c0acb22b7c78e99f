//! Cancellable idle timer.
//!
//! The timer does not run on its own thread. It records a deadline, and the owner
//! asks whether it is due ([`IdleTimer::fire_if_due`]) or forwards an external
//! timeout together with the [`Ticket`] it was scheduled under ([`IdleTimer::fire`]).
//! Rescheduling or cancelling invalidates every earlier ticket, so a late firing
//! can never act on a walk it was not scheduled against.

use std::time::{Duration, Instant};

/// Identifies one scheduling of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy)]
struct Pending {
    ticket: Ticket,
    // `None` when the timeout reaches past what `Instant` can represent.
    deadline: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct IdleTimer {
    timeout: Duration,
    pending: Option<Pending>,
    issued: u64,
}

impl IdleTimer {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            pending: None,
            issued: 0,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// (Re)arm the timer to fire `timeout` after `now`, replacing any pending firing.
    /// A timeout too large to add to `now` never comes due by polling, though
    /// [`IdleTimer::fire`] still honours its ticket.
    pub fn schedule(&mut self, now: Instant) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some(Pending {
            ticket,
            deadline: now.checked_add(self.timeout),
        });
        ticket
    }

    /// Drop the pending firing. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.and_then(|p| p.deadline)
    }

    pub fn ticket(&self) -> Option<Ticket> {
        self.pending.map(|p| p.ticket)
    }

    /// Consume the pending firing if its deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> Option<Ticket> {
        match self.pending {
            Some(Pending {
                ticket,
                deadline: Some(deadline),
            }) if now >= deadline => {
                self.pending = None;
                Some(ticket)
            }
            _ => None,
        }
    }

    /// Consume the pending firing if `ticket` is current. Stale tickets are ignored.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        match self.pending {
            Some(p) if p.ticket == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
