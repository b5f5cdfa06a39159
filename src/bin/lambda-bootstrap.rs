// One bootstrap binary serves both Lambda functions, the HANDLER
// environment variable picks which one.
const HANDLER_ENV: &str = "HANDLER";

/// main() for AWS Lambda
#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    use lambda_runtime::{run, service_fn};

    self_signed_cert_lambda::init_logging();

    match std::env::var(HANDLER_ENV).as_deref() {
        Ok("greeting") => run(service_fn(greeting_handler)).await?,
        _ => run(service_fn(certificate_handler)).await?,
    }
    Ok(())
}

/// Lambda handler for the certificate custom resource
async fn certificate_handler(
    event: lambda_runtime::LambdaEvent<serde_json::Value>,
) -> Result<serde_json::Value, lambda_runtime::Error> {
    log::info!("request id: {}", event.context.request_id);
    Ok(self_signed_cert_lambda::handle(&event.payload))
}

/// Lambda handler for the placeholder function
async fn greeting_handler(
    event: lambda_runtime::LambdaEvent<serde_json::Value>,
) -> Result<serde_json::Value, lambda_runtime::Error> {
    log::info!("request id: {}", event.context.request_id);
    let greeting = self_signed_cert_lambda::greeting_handler(&event.payload).await;
    Ok(serde_json::Value::String(greeting))
}
