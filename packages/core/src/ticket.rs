//! Ticket domain types for service requests waiting in the queue.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Sequential ticket number, assigned from 1 in issuance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketNumber(pub u64);

impl TicketNumber {
    /// The number handed to the first ticket of a fresh queue.
    pub const FIRST: TicketNumber = TicketNumber(1);

    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }

    /// The number that follows this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for TicketNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a ticket is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Ticket is waiting in the queue.
    Pending,
    /// Ticket was handed off by `process_next` and will never be seen again.
    Processed,
}

impl TicketStatus {
    /// Check if the ticket is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TicketStatus::Processed)
    }

    /// Get a simple status string for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "pending",
            TicketStatus::Processed => "processed",
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ticket represents one service request, identified by its number.
///
/// Tickets are immutable once issued. [`crate::TicketQueue`] assigns numbers
/// and timestamps; values built elsewhere (or deserialized) carry no queue
/// guarantees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique, strictly increasing number.
    pub number: TicketNumber,
    /// When the ticket was issued, with whole-second precision.
    pub issued_at: DateTime<Utc>,
}

impl Ticket {
    pub(crate) fn new(number: TicketNumber, issued_at: DateTime<Utc>) -> Self {
        Self {
            number,
            issued_at: issued_at.trunc_subsecs(0),
        }
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ticket {} - Issued at {}",
            self.number,
            self.issued_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn issued_at_drops_subsecond_precision() {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 30, 15)
            .single()
            .expect("valid timestamp")
            + chrono::Duration::milliseconds(750);
        let ticket = Ticket::new(TicketNumber(3), at);
        assert_eq!(ticket.issued_at.nanosecond(), 0);
        assert_eq!(ticket.issued_at.second(), 15);
    }

    #[test]
    fn display_matches_ticket_board_format() {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 30, 15)
            .single()
            .expect("valid timestamp");
        let ticket = Ticket::new(TicketNumber(12), at);
        assert_eq!(ticket.to_string(), "Ticket #12 - Issued at 2024-03-01 09:30:15");
    }

    #[test]
    fn status_strings() {
        assert_eq!(TicketStatus::Pending.as_str(), "pending");
        assert!(!TicketStatus::Pending.is_terminal());
        assert!(TicketStatus::Processed.is_terminal());
    }

    #[test]
    fn ticket_number_serializes_as_plain_integer() {
        let json = serde_json::to_string(&TicketNumber(7)).expect("serialize");
        assert_eq!(json, "7");
    }
}
