//! Event router: one dispatch, one activity entry

use crate::{
    ActivityLog, ClientWebhook, DeliveryResult, Dispatcher, DispatcherConfig, EventKind,
    HandlerRegistry, Record, Result, SubjectId,
};
use futures::FutureExt;
use hookseal_config::{HookSettings, Validate};
use hookseal_jwt::TokenSigner;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{Instrument, debug, error, info_span};
use uuid::Uuid;

/// What happened to one dispatched event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The handler ran to completion
    Completed(DeliveryResult),
    /// No handler is registered for the event kind
    Unhandled,
    /// The handler failed unexpectedly or panicked
    Faulted(String),
}

impl DispatchOutcome {
    pub fn delivery(&self) -> Option<&DeliveryResult> {
        match self {
            Self::Completed(result) => Some(result),
            _ => None,
        }
    }
}

/// Routes host events to their handlers and records the outcome.
///
/// Nothing escapes [`dispatch`](Self::dispatch): every failure ends as an
/// activity entry.
#[derive(Clone)]
pub struct EventRouter {
    registry: HandlerRegistry,
    log: Arc<dyn ActivityLog>,
}

impl EventRouter {
    pub fn new(registry: HandlerRegistry, log: Arc<dyn ActivityLog>) -> Self {
        Self { registry, log }
    }

    /// Wire signer, dispatcher and one handler per configured endpoint
    pub fn from_settings(settings: &HookSettings, log: Arc<dyn ActivityLog>) -> Result<Self> {
        settings.validate()?;

        let signer = TokenSigner::new(settings.signing_secret()?);
        let dispatcher = Arc::new(Dispatcher::new(DispatcherConfig::from_settings(settings))?);

        let mut registry = HandlerRegistry::new();
        for kind in EventKind::ALL {
            if let Some(endpoint) = endpoint_for(settings, kind) {
                registry.register(Arc::new(ClientWebhook::new(
                    kind,
                    endpoint,
                    signer.clone(),
                    Arc::clone(&dispatcher),
                )?));
            }
        }

        debug!(kinds = ?registry.kinds(), "Webhook router ready");

        Ok(Self::new(registry, log))
    }

    /// Handle one event. Blocks (asynchronously) until the entry is logged.
    pub async fn dispatch(&self, kind: EventKind, record: &Record) -> DispatchOutcome {
        let span = info_span!(
            "webhook_dispatch",
            event = kind.hook_name(),
            dispatch_id = %Uuid::new_v4()
        );

        async move {
            let outcome = match self.registry.get(kind) {
                None => DispatchOutcome::Unhandled,
                Some(handler) => match AssertUnwindSafe(handler.handle(record))
                    .catch_unwind()
                    .await
                {
                    Ok(Ok(result)) => DispatchOutcome::Completed(result),
                    Ok(Err(e)) => DispatchOutcome::Faulted(e.to_string()),
                    Err(panic) => DispatchOutcome::Faulted(panic_message(panic)),
                },
            };

            if let DispatchOutcome::Faulted(message) = &outcome {
                error!("Webhook dispatch fault: {}", message);
            }

            let (message, subject) = describe(kind, record, &outcome);
            self.log.log(&message, &subject);

            outcome
        }
        .instrument(span)
        .await
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }
}

impl std::fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRouter")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Configured endpoint for an event kind
pub fn endpoint_for(settings: &HookSettings, kind: EventKind) -> Option<&str> {
    match kind {
        EventKind::Created => settings.endpoints.client_add.as_deref(),
        EventKind::Updated => settings.endpoints.client_edit.as_deref(),
        EventKind::Deleted => settings.endpoints.client_delete.as_deref(),
    }
}

/// Activity message and subject for an outcome
pub fn describe(kind: EventKind, record: &Record, outcome: &DispatchOutcome) -> (String, SubjectId) {
    let subject = kind.subject_of(record);

    match outcome {
        DispatchOutcome::Completed(DeliveryResult::Success { status, body }) => {
            let message = match kind {
                EventKind::Created => format!(
                    "Webhook sent for new client ID {}. Response Status: {}, Body: {}",
                    subject, status, body
                ),
                EventKind::Updated => format!(
                    "Webhook sent for client update, ID {}. Response Status: {}, Body: {}",
                    subject, status, body
                ),
                EventKind::Deleted => format!(
                    "Webhook sent for client deletion, ID {}. Response Status: {}, Body: {}",
                    subject, status, body
                ),
            };
            (message, subject)
        }
        DispatchOutcome::Completed(DeliveryResult::TransportError(error)) => {
            (format!("Webhook transport error: {}", error), subject)
        }
        DispatchOutcome::Completed(DeliveryResult::ValidationError(e)) => {
            (e.to_string(), SubjectId::none())
        }
        DispatchOutcome::Unhandled => (
            format!(
                "{} hook skipped: no webhook endpoint configured.",
                kind.hook_name()
            ),
            SubjectId::none(),
        ),
        DispatchOutcome::Faulted(message) => (format!("Webhook Exception: {}", message), subject),
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    }
}
