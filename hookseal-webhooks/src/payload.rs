//! Webhook payload types
//!
//! Field order in these structs is the serialized key order, and so part of
//! the signed bytes. Do not reorder fields.

use crate::event::field;
use crate::{EventKind, Record};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Payload for [`EventKind::Created`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientCreated {
    pub firstname: Value,
    pub lastname: Value,
    pub email: Value,
    #[serde(rename = "clientId")]
    pub client_id: Value,
}

/// Payload for [`EventKind::Updated`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientUpdated {
    #[serde(rename = "clientId")]
    pub client_id: Value,
    pub firstname: Value,
    pub lastname: Value,
    pub email: Value,
    pub action: &'static str,
}

/// Payload for [`EventKind::Deleted`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientDeleted {
    #[serde(rename = "clientId")]
    pub client_id: Value,
    pub action: &'static str,
}

/// Canonical payload for one event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WebhookPayload {
    Created(ClientCreated),
    Updated(ClientUpdated),
    Deleted(ClientDeleted),
}

impl WebhookPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Created(_) => EventKind::Created,
            Self::Updated(_) => EventKind::Updated,
            Self::Deleted(_) => EventKind::Deleted,
        }
    }

    pub fn client_id(&self) -> &Value {
        match self {
            Self::Created(p) => &p.client_id,
            Self::Updated(p) => &p.client_id,
            Self::Deleted(p) => &p.client_id,
        }
    }

    /// Convert to JSON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The record lacked its client id; nothing is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} hook failed: Missing client ID in variables.", kind.hook_name())]
pub struct ValidationError {
    pub kind: EventKind,
    pub field: &'static str,
}

/// Maps raw event records to canonical payloads
pub struct PayloadBuilder;

impl PayloadBuilder {
    /// Build the payload for `kind` from `record`.
    ///
    /// Optional fields default to `""`. The kind's id field is required.
    pub fn build(kind: EventKind, record: &Record) -> Result<WebhookPayload, ValidationError> {
        let client_id = field(record, kind.required_field())
            .cloned()
            .ok_or(ValidationError {
                kind,
                field: kind.required_field(),
            })?;

        let text = |name: &str| {
            field(record, name)
                .cloned()
                .unwrap_or_else(|| Value::String(String::new()))
        };

        Ok(match kind {
            EventKind::Created => WebhookPayload::Created(ClientCreated {
                firstname: text("firstname"),
                lastname: text("lastname"),
                email: text("email"),
                client_id,
            }),
            EventKind::Updated => WebhookPayload::Updated(ClientUpdated {
                client_id,
                firstname: text("firstname"),
                lastname: text("lastname"),
                email: text("email"),
                action: "updated",
            }),
            EventKind::Deleted => WebhookPayload::Deleted(ClientDeleted {
                client_id,
                action: "deleted",
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_created_shape() {
        let payload = PayloadBuilder::build(
            EventKind::Created,
            &record(json!({
                "firstname": "Jane",
                "lastname": "Doe",
                "email": "jane@x.com",
                "client_id": 42
            })),
        )
        .unwrap();

        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"firstname":"Jane","lastname":"Doe","email":"jane@x.com","clientId":42}"#
        );
    }

    #[test]
    fn test_updated_shape_and_defaults() {
        let payload = PayloadBuilder::build(
            EventKind::Updated,
            &record(json!({"userid": 9, "email": "a@b.c", "lastname": null})),
        )
        .unwrap();

        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"clientId":9,"firstname":"","lastname":"","email":"a@b.c","action":"updated"}"#
        );
    }

    #[test]
    fn test_deleted_shape() {
        let payload =
            PayloadBuilder::build(EventKind::Deleted, &record(json!({"userid": 7}))).unwrap();

        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"clientId":7,"action":"deleted"}"#
        );
        assert_eq!(payload.kind(), EventKind::Deleted);
        assert_eq!(payload.client_id(), &json!(7));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let payload = PayloadBuilder::build(
            EventKind::Deleted,
            &record(json!({"userid": "7", "firstname": "Jane", "password": "x"})),
        )
        .unwrap();

        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"clientId":"7","action":"deleted"}"#
        );
    }

    #[test]
    fn test_missing_id() {
        let err =
            PayloadBuilder::build(EventKind::Updated, &record(json!({"firstname": "Jane"})))
                .unwrap_err();

        assert_eq!(err.field, "userid");
        assert_eq!(
            err.to_string(),
            "ClientEdit hook failed: Missing client ID in variables."
        );
    }

    #[test]
    fn test_null_id_is_missing() {
        let result = PayloadBuilder::build(EventKind::Created, &record(json!({"client_id": null})));
        assert!(result.is_err());
    }

    #[test]
    fn test_created_reads_client_id_only() {
        let result = PayloadBuilder::build(EventKind::Created, &record(json!({"userid": 1})));
        assert_eq!(
            result.unwrap_err().to_string(),
            "ClientAdd hook failed: Missing client ID in variables."
        );
    }
}
