//! Core log data model
//!
//! The immutable record created at a manager when a raw submission passes
//! its mask, the flat snapshot exported to embedding callers, and the
//! message union accepted by managers.

use std::rc::Rc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single logged event.
///
/// Created exactly once, by the manager that accepted the raw submission,
/// then shared by reference down the topology. Never mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct LogRecord {
    id: String,
    message: String,
    time: DateTime<Utc>,
    extra_data: Option<Value>,
}

impl LogRecord {
    /// Build a record stamped with the current time.
    ///
    /// `id` identifies the originating manager. `extra_data` is an arbitrary
    /// auxiliary payload, attached only when supplied.
    pub fn new(
        id: impl Into<String>,
        message: impl Into<String>,
        extra_data: Option<Value>,
    ) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            time: Utc::now(),
            extra_data,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn extra_data(&self) -> Option<&Value> {
        self.extra_data.as_ref()
    }

    /// Flat snapshot of this record, suitable for serialization by an
    /// embedding caller. `extraData` is omitted entirely when absent.
    pub fn content(&self) -> PlainRecord {
        PlainRecord {
            id: self.id.clone(),
            time: self.time.to_rfc3339_opts(SecondsFormat::Millis, true),
            message: self.message.clone(),
            extra_data: self.extra_data.clone(),
        }
    }
}

/// Plain exported form of a [`LogRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainRecord {
    pub id: String,
    pub time: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<Value>,
}

/// What a manager can be asked to log: raw text subject to level filtering,
/// or a record built upstream that passes through unfiltered.
#[derive(Debug, Clone)]
pub enum LogMessage {
    Raw(String),
    Prebuilt(Rc<LogRecord>),
}

impl From<&str> for LogMessage {
    fn from(message: &str) -> Self {
        LogMessage::Raw(message.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(message: String) -> Self {
        LogMessage::Raw(message)
    }
}

impl From<Rc<LogRecord>> for LogMessage {
    fn from(record: Rc<LogRecord>) -> Self {
        LogMessage::Prebuilt(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_carries_id_and_message() {
        let record = LogRecord::new("node-1", "disk almost full", None);
        assert_eq!(record.id(), "node-1");
        assert_eq!(record.message(), "disk almost full");
        assert_eq!(record.extra_data(), None);

        let content = record.content();
        assert_eq!(content.id, "node-1");
        assert_eq!(content.message, "disk almost full");
        assert!(!content.time.is_empty());
    }

    #[test]
    fn test_snapshot_omits_absent_extra_data() {
        let record = LogRecord::new("node-1", "plain", None);
        let json = serde_json::to_string(&record.content()).unwrap();
        assert!(!json.contains("extraData"));
    }

    #[test]
    fn test_snapshot_includes_extra_data_verbatim() {
        let payload = json!({"code": 7, "retryable": false});
        let record = LogRecord::new("node-1", "sync failed", Some(payload.clone()));
        let content = record.content();
        assert_eq!(content.extra_data, Some(payload));
        let json = serde_json::to_string(&content).unwrap();
        assert!(json.contains("\"extraData\""));
        assert!(json.contains("\"code\":7"));
    }

    #[test]
    fn test_snapshot_time_is_rfc3339() {
        let record = LogRecord::new("node-1", "tick", None);
        let content = record.content();
        let parsed = DateTime::parse_from_rfc3339(&content.time).unwrap();
        assert_eq!(parsed.timestamp_millis(), record.time().timestamp_millis());
    }

    #[test]
    fn test_message_union_conversions() {
        assert!(matches!(LogMessage::from("raw"), LogMessage::Raw(_)));
        assert!(matches!(
            LogMessage::from(String::from("owned")),
            LogMessage::Raw(_)
        ));
        let record = Rc::new(LogRecord::new("node-1", "built", None));
        assert!(matches!(
            LogMessage::from(Rc::clone(&record)),
            LogMessage::Prebuilt(_)
        ));
    }
}
