//! Activity log sink
//!
//! Every dispatch writes exactly one entry: a free-text message and the
//! client id it concerns.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Client id an activity entry refers to; `0` when unknown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubjectId(Value);

impl SubjectId {
    /// The placeholder id `0`
    pub fn none() -> Self {
        Self(Value::from(0))
    }

    pub fn from_value(value: &Value) -> Self {
        Self(value.clone())
    }

    pub fn is_none(&self) -> bool {
        *self == Self::none()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<u64> for SubjectId {
    fn from(id: u64) -> Self {
        Self(Value::from(id))
    }
}

impl From<i64> for SubjectId {
    fn from(id: i64) -> Self {
        Self(Value::from(id))
    }
}

impl From<i32> for SubjectId {
    fn from(id: i32) -> Self {
        Self(Value::from(id))
    }
}

impl From<&str> for SubjectId {
    fn from(id: &str) -> Self {
        Self(Value::from(id))
    }
}

/// Destination for activity entries
pub trait ActivityLog: Send + Sync {
    fn log(&self, message: &str, subject: &SubjectId);
}

/// Writes activity entries as `tracing` events on `hookseal::activity`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingActivityLog;

impl ActivityLog for TracingActivityLog {
    fn log(&self, message: &str, subject: &SubjectId) {
        tracing::info!(target: "hookseal::activity", subject_id = %subject, "{}", message);
    }
}

/// A recorded activity entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub message: String,
    pub subject: SubjectId,
    pub logged_at: DateTime<Utc>,
}

/// Keeps activity entries in memory
#[derive(Debug, Default)]
pub struct MemoryActivityLog {
    entries: Mutex<Vec<ActivityEntry>>,
}

impl MemoryActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries, oldest first
    pub fn entries(&self) -> Vec<ActivityEntry> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<ActivityEntry> {
        self.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ActivityEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ActivityLog for MemoryActivityLog {
    fn log(&self, message: &str, subject: &SubjectId) {
        self.lock().push(ActivityEntry {
            message: message.to_string(),
            subject: subject.clone(),
            logged_at: Utc::now(),
        });
    }
}
