//! Placeholder handler used while wiring up the Lambda deployment

const GREETING_DELAY: std::time::Duration = std::time::Duration::from_secs(1);

/// Demo handler: logs the event, waits a moment, greets back.
pub async fn greeting_handler(event: &serde_json::Value) -> String {
    log::info!("event: {}", event);

    tokio::time::sleep(GREETING_DELAY).await;

    let name = event
        .get("name")
        .and_then(|name| name.as_str())
        .unwrap_or("World");

    format!("Hello {}!", name)
}
