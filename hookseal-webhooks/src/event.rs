//! Client lifecycle events

use crate::SubjectId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raw event variables handed over by the host, keyed by field name.
pub type Record = serde_json::Map<String, Value>;

/// The client events that produce a webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A client was added
    Created,
    /// A client's details changed
    Updated,
    /// A client was removed
    Deleted,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [EventKind::Created, EventKind::Updated, EventKind::Deleted];

    /// Host hook point name
    pub fn hook_name(&self) -> &'static str {
        match self {
            Self::Created => "ClientAdd",
            Self::Updated => "ClientEdit",
            Self::Deleted => "ClientDelete",
        }
    }

    /// Record field carrying the client id
    pub fn required_field(&self) -> &'static str {
        match self {
            Self::Created => "client_id",
            Self::Updated | Self::Deleted => "userid",
        }
    }

    /// The client id of `record`, or `0` when it has none
    pub fn subject_of(&self, record: &Record) -> SubjectId {
        field(record, self.required_field())
            .map(SubjectId::from_value)
            .unwrap_or_else(SubjectId::none)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.hook_name())
    }
}

/// Error returned when parsing an unknown event name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event kind: {0} (expected ClientAdd, ClientEdit or ClientDelete)")]
pub struct ParseEventKindError(String);

impl FromStr for EventKind {
    type Err = ParseEventKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clientadd" | "client-add" | "created" | "create" => Ok(Self::Created),
            "clientedit" | "client-edit" | "updated" | "update" => Ok(Self::Updated),
            "clientdelete" | "client-delete" | "deleted" | "delete" => Ok(Self::Deleted),
            _ => Err(ParseEventKindError(s.to_string())),
        }
    }
}

/// Look up a field; `null` counts as absent.
pub(crate) fn field<'a>(record: &'a Record, name: &str) -> Option<&'a Value> {
    record.get(name).filter(|value| !value.is_null())
}
