//! Core domain types for the ticket queue.
//!
//! This crate contains the queue itself and the types it hands out:
//! - Ticket and TicketNumber for issued service requests
//! - TicketQueue for FIFO issuance and processing
//! - Events for callers that log the ticket lifecycle
//!
//! The crate performs no I/O and never sleeps; timing and presentation
//! belong to whoever drives the queue.

mod error;
mod events;
mod queue;
mod ticket;

pub use error::EmptyQueue;
pub use events::TicketEvent;
pub use queue::{QueueStats, TicketQueue};
pub use ticket::{Ticket, TicketNumber, TicketStatus};
