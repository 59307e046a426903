//! Event types describing the ticket lifecycle, for callers that log or broadcast it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Ticket, TicketNumber};

/// Events a caller can emit around queue operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TicketEvent {
    /// A ticket was issued and appended to the queue.
    Issued {
        ticket: Ticket,
        timestamp: DateTime<Utc>,
    },
    /// A ticket left the queue for processing.
    Processed {
        ticket: Ticket,
        timestamp: DateTime<Utc>,
    },
    /// `process_next` found nothing to hand off.
    QueueEmpty { timestamp: DateTime<Utc> },
}

impl TicketEvent {
    /// Event for a freshly issued ticket, stamped now.
    pub fn issued(ticket: Ticket) -> Self {
        TicketEvent::Issued {
            ticket,
            timestamp: Utc::now(),
        }
    }

    /// Event for a ticket leaving the queue, stamped now.
    pub fn processed(ticket: Ticket) -> Self {
        TicketEvent::Processed {
            ticket,
            timestamp: Utc::now(),
        }
    }

    /// Event for a `process_next` call that found nothing, stamped now.
    pub fn queue_empty() -> Self {
        TicketEvent::QueueEmpty {
            timestamp: Utc::now(),
        }
    }

    /// Get the timestamp of the event.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            TicketEvent::Issued { timestamp, .. } => *timestamp,
            TicketEvent::Processed { timestamp, .. } => *timestamp,
            TicketEvent::QueueEmpty { timestamp } => *timestamp,
        }
    }

    /// Get the ticket number associated with this event, if any.
    pub fn ticket_number(&self) -> Option<TicketNumber> {
        match self {
            TicketEvent::Issued { ticket, .. } | TicketEvent::Processed { ticket, .. } => {
                Some(ticket.number)
            }
            TicketEvent::QueueEmpty { .. } => None,
        }
    }

    /// Get a short description of this event for logging.
    pub fn description(&self) -> String {
        match self {
            TicketEvent::Issued { ticket, .. } => format!("Generated: {}", ticket),
            TicketEvent::Processed { ticket, .. } => format!("Processing: {}", ticket),
            TicketEvent::QueueEmpty { .. } => "No tickets to process.".to_string(),
        }
    }
}
