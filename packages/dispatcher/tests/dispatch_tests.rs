#![allow(clippy::disallowed_methods)]

use std::error::Error;
use std::time::Duration;

use dispatcher::{DelayRange, DispatchConfig, Dispatcher};
use ticket_core::{TicketNumber, TicketStatus};

#[tokio::test]
async fn test_run_processes_every_ticket_in_order() {
    let mut dispatcher = Dispatcher::new(DispatchConfig::instant().with_tickets(5));
    let summary = dispatcher.run().await;

    assert_eq!(summary.issued, 5);
    assert_eq!(summary.processed, (1..=5).map(TicketNumber).collect::<Vec<_>>());
    assert!(dispatcher.queue().is_empty());
    assert_eq!(dispatcher.queue().processed_count(), 5);
}

#[tokio::test]
async fn test_run_with_no_tickets_reports_empty() {
    let mut dispatcher = Dispatcher::new(DispatchConfig::instant().with_tickets(0));
    let summary = dispatcher.run().await;

    assert_eq!(summary.issued, 0);
    assert!(summary.processed.is_empty());
}

#[tokio::test]
async fn test_issue_then_drain_in_steps() {
    let mut dispatcher = Dispatcher::new(DispatchConfig::instant().with_tickets(3));

    let issued = dispatcher.issue_tickets().await;
    assert_eq!(issued.len(), 3);
    assert_eq!(dispatcher.queue().len(), 3);
    assert_eq!(
        dispatcher.queue().status_of(TicketNumber(3)),
        Some(TicketStatus::Pending)
    );

    let processed = dispatcher.drain().await;
    assert_eq!(processed, vec![TicketNumber(1), TicketNumber(2), TicketNumber(3)]);
    assert_eq!(
        dispatcher.queue().status_of(TicketNumber(3)),
        Some(TicketStatus::Processed)
    );

    // A second drain finds nothing left.
    assert!(dispatcher.drain().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_delays_are_applied_outside_the_queue() -> Result<(), Box<dyn Error>> {
    let config = DispatchConfig::instant()
        .with_tickets(3)
        .with_issue_delay(DelayRange::parse("100")?)
        .with_process_delay(DelayRange::parse("250")?);
    let mut dispatcher = Dispatcher::new(config);

    let start = tokio::time::Instant::now();
    dispatcher.run().await;
    let elapsed = start.elapsed();

    // Two gaps between three issues, then three processing pauses.
    assert!(elapsed >= Duration::from_millis(2 * 100 + 3 * 250));
    Ok(())
}

#[tokio::test]
async fn test_summary_serializes_ticket_numbers() -> Result<(), Box<dyn Error>> {
    let mut dispatcher = Dispatcher::new(DispatchConfig::instant().with_tickets(2));
    let summary = dispatcher.run().await;

    let value = serde_json::to_value(&summary)?;
    assert_eq!(value["issued"], 2);
    assert_eq!(value["processed"], serde_json::json!([1, 2]));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_inverted_delay_is_rejected_and_ranges_never_panic() -> Result<(), Box<dyn Error>> {
    assert!(DelayRange::new(10, 5).is_err());
    assert!(DelayRange::parse("10-5").is_err());

    let config = DispatchConfig::instant()
        .with_tickets(2)
        .with_issue_delay(DelayRange::new(5, 10)?)
        .with_process_delay(DelayRange::new(5, 10)?);
    let summary = Dispatcher::new(config).run().await;

    assert_eq!(summary.processed, vec![TicketNumber(1), TicketNumber(2)]);
    Ok(())
}
