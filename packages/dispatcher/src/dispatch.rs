//! Demo run loop: issue a batch of tickets, then work through them in order.

use serde::Serialize;
use ticket_core::{Ticket, TicketEvent, TicketNumber, TicketQueue};

use crate::config::{DelayRange, DispatchConfig};

/// What a finished run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchSummary {
    pub issued: u64,
    /// Ticket numbers in the order they were processed.
    pub processed: Vec<TicketNumber>,
}

/// Owns a ticket queue and drives it the way a service counter would.
pub struct Dispatcher {
    config: DispatchConfig,
    queue: TicketQueue,
}

impl Dispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            config,
            queue: TicketQueue::new(),
        }
    }

    pub fn queue(&self) -> &TicketQueue {
        &self.queue
    }

    /// Issue `config.tickets` tickets, waiting `issue_delay` between them.
    pub async fn issue_tickets(&mut self) -> Vec<Ticket> {
        let mut issued = Vec::new();
        for i in 0..self.config.tickets {
            if i > 0 {
                pause(self.config.issue_delay).await;
            }
            let ticket = self.queue.issue();
            self.emit(TicketEvent::issued(ticket.clone()));
            issued.push(ticket);
        }
        issued
    }

    /// Process tickets until the queue reports it is empty.
    pub async fn drain(&mut self) -> Vec<TicketNumber> {
        let mut processed = Vec::new();
        while let Ok(ticket) = self.queue.process_next() {
            processed.push(ticket.number);
            self.emit(TicketEvent::processed(ticket));
            pause(self.config.process_delay).await;
        }
        self.emit(TicketEvent::queue_empty());
        processed
    }

    /// Full run: issue the batch, then drain it.
    pub async fn run(&mut self) -> DispatchSummary {
        tracing::info!(tickets = self.config.tickets, "Starting dispatch run");

        let issued = self.issue_tickets().await.len() as u64;
        tracing::info!("Processing tickets");
        let processed = self.drain().await;

        let stats = self.queue.stats();
        tracing::info!(
            issued = stats.issued,
            processed = stats.processed,
            pending = stats.pending,
            "Dispatch run finished"
        );

        DispatchSummary { issued, processed }
    }

    fn emit(&self, event: TicketEvent) {
        tracing::info!("{}", event.description());

        if self.config.events_json {
            match serde_json::to_string(&event) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::warn!("Failed to serialize event: {}", e),
            }
        }
    }
}

async fn pause(delay: DelayRange) {
    if delay.is_zero() {
        return;
    }
    tokio::time::sleep(delay.sample()).await;
}
