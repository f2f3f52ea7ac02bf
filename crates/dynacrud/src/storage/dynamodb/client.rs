//! AWS SDK client setup.

use aws_sdk_dynamodb::Client;

use crate::config::Config;

/// Creates a DynamoDB client with the given configuration.
///
/// Credentials come from the default provider chain. Build the client once at
/// startup and share it; `Client` is cheap to clone.
pub async fn create_client(config: &Config) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;

    tracing::debug!(endpoint = %config.target_display(), "DynamoDB client configured");

    Client::new(&sdk_config)
}
