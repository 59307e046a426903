//! Error types for queue operations.

use thiserror::Error;

/// Returned by `process_next` when no tickets are waiting.
///
/// This is routine control flow for callers draining the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no tickets to process")]
pub struct EmptyQueue;
