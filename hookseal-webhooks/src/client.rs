//! Dispatcher for sending signed webhooks

use crate::{DeliveryResult, DispatcherConfig, Result, WebhookError};
use hookseal_jwt::Token;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use std::error::Error as _;
use tracing::{debug, info, warn};

/// Sends one POST per payload with a bearer token.
///
/// A single connection-pooled HTTP client is shared by all sends; it is
/// read-only after construction.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: DispatcherConfig,
    http_client: Client,
}

impl Dispatcher {
    /// Create a dispatcher with the given configuration
    pub fn new(config: DispatcherConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(|e| WebhookError::HttpClient(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create a dispatcher with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(DispatcherConfig::default())
    }

    /// POST `payload` to `endpoint` with `Authorization: Bearer <token>`.
    ///
    /// Any HTTP answer is a [`DeliveryResult::Success`], whatever its status.
    /// Network failures and timeouts become [`DeliveryResult::TransportError`].
    /// Only a payload that cannot be serialized is an `Err`.
    pub async fn send<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &T,
        token: &Token,
    ) -> Result<DeliveryResult> {
        let body = serde_json::to_vec(payload)?;

        debug!(endpoint, bytes = body.len(), "Sending webhook");

        let request = self
            .http_client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, token.bearer())
            .body(body);

        // The response, and with it the connection, is released when it
        // goes out of scope on every path below.
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let message = self.describe(&e);
                warn!(endpoint, "Webhook delivery error: {}", message);
                return Ok(DeliveryResult::TransportError(message));
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                let message = self.describe(&e);
                warn!(endpoint, status = status.as_u16(), "Failed to read response body: {}", message);
                return Ok(DeliveryResult::TransportError(message));
            }
        };

        if status.is_success() {
            info!(endpoint, status = status.as_u16(), "Webhook delivered");
        } else {
            warn!(
                endpoint,
                status = status.as_u16(),
                "Webhook answered with non-success status"
            );
        }

        Ok(DeliveryResult::success(status.as_u16(), &body))
    }

    /// Error text including the underlying causes.
    fn describe(&self, err: &reqwest::Error) -> String {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        if err.is_timeout() {
            format!(
                "request timed out after {:?}: {}",
                self.config.timeout, message
            )
        } else {
            message
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_dispatcher_creation() {
        let dispatcher = Dispatcher::with_defaults().unwrap();
        assert_eq!(dispatcher.config().timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_dispatcher_with_config() {
        let config = DispatcherConfig::builder().timeout_secs(60).build();

        let dispatcher = Dispatcher::new(config).unwrap();
        assert_eq!(dispatcher.config().timeout, Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_invalid_url_is_transport_error() {
        let dispatcher = Dispatcher::with_defaults().unwrap();
        let token: Token = "a.b.c".parse().unwrap();

        let result = dispatcher
            .send("not a url", &serde_json::json!({"x": 1}), &token)
            .await
            .unwrap();

        assert!(matches!(result, DeliveryResult::TransportError(_)));
    }
}
