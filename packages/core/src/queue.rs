//! FIFO ticket queue with monotonic number assignment.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EmptyQueue;
use crate::ticket::{Ticket, TicketNumber, TicketStatus};

/// Counters describing a queue's current state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStats {
    /// Tickets issued since the queue was created.
    pub issued: u64,
    /// Tickets handed off by `process_next`.
    pub processed: u64,
    /// Tickets still waiting.
    pub pending: u64,
}

impl QueueStats {
    /// Fraction of issued tickets already processed, as a percentage.
    pub fn completion_rate(&self) -> Option<f64> {
        if self.issued == 0 {
            None
        } else {
            Some((self.processed as f64 / self.issued as f64) * 100.0)
        }
    }
}

/// Issues numbered tickets and hands them back in arrival order.
///
/// Both mutating operations take `&mut self`, so callers sharing a queue have
/// to serialize access themselves.
#[derive(Debug, Clone)]
pub struct TicketQueue {
    next_number: TicketNumber,
    pending: VecDeque<Ticket>,
    processed: u64,
}

impl TicketQueue {
    /// Create an empty queue whose first ticket will be #1.
    pub fn new() -> Self {
        Self {
            next_number: TicketNumber::FIRST,
            pending: VecDeque::new(),
            processed: 0,
        }
    }

    /// Issue a new ticket stamped with the current time and append it to the queue.
    pub fn issue(&mut self) -> Ticket {
        self.issue_at(Utc::now())
    }

    /// Issue a new ticket stamped with `issued_at` (truncated to whole seconds).
    pub fn issue_at(&mut self, issued_at: DateTime<Utc>) -> Ticket {
        let ticket = Ticket::new(self.next_number, issued_at);
        self.next_number = self.next_number.next();
        self.pending.push_back(ticket.clone());

        tracing::debug!(number = %ticket.number, pending = self.pending.len(), "ticket issued");
        ticket
    }

    /// Remove and return the oldest pending ticket.
    ///
    /// An empty queue is an ordinary outcome and leaves the queue untouched.
    pub fn process_next(&mut self) -> Result<Ticket, EmptyQueue> {
        let ticket = self.pending.pop_front().ok_or(EmptyQueue)?;
        self.processed += 1;

        tracing::debug!(number = %ticket.number, pending = self.pending.len(), "ticket processed");
        Ok(ticket)
    }

    /// The ticket `process_next` would return, if any.
    pub fn peek(&self) -> Option<&Ticket> {
        self.pending.front()
    }

    /// Number of pending tickets.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if no tickets are waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending tickets, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &Ticket> {
        self.pending.iter()
    }

    /// The number the next call to `issue` will assign.
    pub fn next_number(&self) -> TicketNumber {
        self.next_number
    }

    /// Tickets issued since the queue was created.
    pub fn issued_count(&self) -> u64 {
        self.next_number.get() - TicketNumber::FIRST.get()
    }

    /// Tickets handed off by `process_next` so far.
    pub fn processed_count(&self) -> u64 {
        self.processed
    }

    /// Lifecycle state of the ticket with `number`, or `None` if it was never issued.
    pub fn status_of(&self, number: TicketNumber) -> Option<TicketStatus> {
        if number < TicketNumber::FIRST || number >= self.next_number {
            return None;
        }
        // Numbers are contiguous and leave in order, so everything from the
        // head onwards is still waiting.
        match self.pending.front() {
            Some(head) if number >= head.number => Some(TicketStatus::Pending),
            _ => Some(TicketStatus::Processed),
        }
    }

    /// Snapshot of the queue counters.
    pub fn stats(&self) -> QueueStats {
        QueueStats {
            issued: self.issued_count(),
            processed: self.processed,
            pending: self.pending.len() as u64,
        }
    }
}

impl Default for TicketQueue {
    fn default() -> Self {
        Self::new()
    }
}
