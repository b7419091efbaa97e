// hookseal - signed webhook notifications for client lifecycle events
//
// When a client is created, updated or deleted, a canonical JSON payload is
// signed into a compact HS256 token and POSTed to the endpoint configured for
// that event. Every dispatch leaves exactly one activity entry.

#[cfg(feature = "jwt")]
pub use hookseal_jwt;

#[cfg(feature = "config")]
pub use hookseal_config;

#[cfg(feature = "log")]
pub use hookseal_log;

#[cfg(feature = "webhooks")]
pub use hookseal_webhooks;

// Prelude for common imports
#[cfg(feature = "webhooks")]
pub mod prelude {
    pub use hookseal_config::{EndpointSettings, HookSettings, SettingsLoader};
    pub use hookseal_jwt::{SigningSecret, Token, TokenSigner};
    pub use hookseal_webhooks::{
        ActivityLog, DeliveryResult, DispatchOutcome, Dispatcher, DispatcherConfig, EventKind,
        EventRouter, MemoryActivityLog, PayloadBuilder, Record, SubjectId, TracingActivityLog,
        ValidationError, WebhookPayload,
    };
}
