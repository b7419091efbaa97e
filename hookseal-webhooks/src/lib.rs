//! Signed webhooks for client lifecycle events
//!
//! When a client is created, updated or deleted, the host hands the event
//! record to an [`EventRouter`]. The router builds a canonical payload, signs
//! it into a compact HS256 token and POSTs it to the endpoint configured for
//! that event, then writes one activity entry describing what happened.
//!
//! # Features
//!
//! - **Canonical payloads**: fixed key order per event kind
//! - **Signed delivery**: `Authorization: Bearer <token>` over the payload
//! - **Bounded sends**: one attempt, 10 second default timeout, no retries
//! - **Contained failures**: nothing propagates to the host
//!
//! # Example
//!
//! ```rust,no_run
//! use hookseal_config::{EndpointSettings, HookSettings};
//! use hookseal_webhooks::{EventKind, EventRouter, TracingActivityLog};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = HookSettings::new("a-long-random-shared-secret").with_endpoints(EndpointSettings {
//!         client_add: Some("https://n8n.example.com/webhook/client-add".to_string()),
//!         ..Default::default()
//!     });
//!     let router = EventRouter::from_settings(&settings, Arc::new(TracingActivityLog))?;
//!
//!     let record = serde_json::json!({
//!         "client_id": 42,
//!         "firstname": "Jane",
//!         "lastname": "Doe",
//!         "email": "jane@x.com"
//!     });
//!     router
//!         .dispatch(EventKind::Created, record.as_object().unwrap())
//!         .await;
//!     Ok(())
//! }
//! ```

mod activity;
mod client;
mod config;
mod delivery;
mod error;
mod event;
mod payload;
mod registry;
mod router;

pub use activity::{ActivityEntry, ActivityLog, MemoryActivityLog, SubjectId, TracingActivityLog};
pub use client::Dispatcher;
pub use config::{DispatcherConfig, DispatcherConfigBuilder};
pub use delivery::{BODY_SNIPPET_CHARS, DeliveryResult, snippet};
pub use error::WebhookError;
pub use event::{EventKind, ParseEventKindError, Record};
pub use payload::{
    ClientCreated, ClientDeleted, ClientUpdated, PayloadBuilder, ValidationError, WebhookPayload,
};
pub use registry::{ClientWebhook, EventHandler, HandlerRegistry};
pub use router::{DispatchOutcome, EventRouter, describe, endpoint_for};

/// Result type for webhook operations
pub type Result<T> = std::result::Result<T, WebhookError>;
