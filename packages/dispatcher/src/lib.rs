//! Demo driver for the ticket queue.
//!
//! Issues a batch of tickets with simulated arrival gaps, then processes
//! them one by one with simulated work time. All timing and output lives
//! here; `ticket_core` stays free of I/O.

mod config;
mod dispatch;

pub use config::{DelayRange, DispatchConfig, DispatchError};
pub use dispatch::{DispatchSummary, Dispatcher};
