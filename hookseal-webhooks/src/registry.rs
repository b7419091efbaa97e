//! Event handler registry

use crate::{DeliveryResult, Dispatcher, EventKind, PayloadBuilder, Record, Result};
use async_trait::async_trait;
use hookseal_jwt::TokenSigner;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

/// Handles the records of one event kind
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// The event kind this handler serves
    fn kind(&self) -> EventKind;

    /// Process one record.
    ///
    /// Missing ids and network failures are reported in the
    /// [`DeliveryResult`]; `Err` means something unexpected went wrong.
    async fn handle(&self, record: &Record) -> Result<DeliveryResult>;
}

/// Builds, signs and sends the webhook for one event kind
#[derive(Debug, Clone)]
pub struct ClientWebhook {
    kind: EventKind,
    endpoint: Url,
    signer: TokenSigner,
    dispatcher: Arc<Dispatcher>,
}

impl ClientWebhook {
    pub fn new(
        kind: EventKind,
        endpoint: &str,
        signer: TokenSigner,
        dispatcher: Arc<Dispatcher>,
    ) -> Result<Self> {
        Ok(Self {
            kind,
            endpoint: Url::parse(endpoint)?,
            signer,
            dispatcher,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EventHandler for ClientWebhook {
    fn kind(&self) -> EventKind {
        self.kind
    }

    async fn handle(&self, record: &Record) -> Result<DeliveryResult> {
        let payload = match PayloadBuilder::build(self.kind, record) {
            Ok(payload) => payload,
            Err(e) => return Ok(DeliveryResult::ValidationError(e)),
        };

        let token = self.signer.sign(&payload)?;

        self.dispatcher
            .send(self.endpoint.as_str(), &payload, &token)
            .await
    }
}

/// Maps each event kind to its handler.
///
/// Built once at startup; lookups afterwards are read-only.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<EventKind, Arc<dyn EventHandler>>,
}

impl HandlerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its kind, returning any handler it replaces
    pub fn register(&mut self, handler: Arc<dyn EventHandler>) -> Option<Arc<dyn EventHandler>> {
        self.handlers.insert(handler.kind(), handler)
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, handler: impl EventHandler + 'static) -> Self {
        self.register(Arc::new(handler));
        self
    }

    /// Get the handler for a kind
    pub fn get(&self, kind: EventKind) -> Option<&Arc<dyn EventHandler>> {
        self.handlers.get(&kind)
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Registered kinds, in `EventKind::ALL` order
    pub fn kinds(&self) -> Vec<EventKind> {
        EventKind::ALL
            .into_iter()
            .filter(|kind| self.contains(*kind))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
