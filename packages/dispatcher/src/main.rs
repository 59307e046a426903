use dispatcher::{DispatchConfig, Dispatcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DispatchConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    let events_json = config.events_json;
    let summary = Dispatcher::new(config).run().await;

    if events_json {
        println!("{}", serde_json::to_string(&summary)?);
    }

    Ok(())
}
