use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::domain::{LogLevel, LogMessage, LogRecord};
use crate::error::LogTreeError;
use crate::port::{LogTarget, SharedTarget};

/// Filtering fan-out node.
///
/// A manager holds a fixed severity mask and an append-only list of
/// downstream targets. Raw submissions are tested against the mask and,
/// when accepted, wrapped into a [`LogRecord`] carrying this manager's id.
/// Records built upstream pass through unfiltered, in registration order.
pub struct LogManager {
    id: String,
    current_level: LogLevel,
    children: Vec<SharedTarget>,
}

impl LogManager {
    pub fn new(id: impl Into<String>, current_level: LogLevel) -> Self {
        Self {
            id: id.into(),
            current_level,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn current_level(&self) -> LogLevel {
        self.current_level
    }

    /// Register a downstream target.
    ///
    /// Requires exclusive access: outputs can only be wired while the
    /// manager has not been shared yet, so every edge points at a fully
    /// built target and no cycle can form.
    pub fn add_output_to(&mut self, target: SharedTarget) {
        self.children.push(target);
    }

    /// Freeze this manager for use as a downstream target of managers built
    /// after it. The returned handle still accepts `log` calls.
    pub fn into_shared(self) -> Rc<LogManager> {
        Rc::new(self)
    }

    /// Submit a message at `requested` severity.
    ///
    /// Raw text is dropped silently when the mask rejects the request.
    /// Prebuilt records ignore `requested` and fan out unconditionally,
    /// since filtering already happened at their origin.
    pub fn log(
        &self,
        message: impl Into<LogMessage>,
        requested: LogLevel,
    ) -> Result<(), LogTreeError> {
        match message.into() {
            LogMessage::Prebuilt(record) => self.forward(&record),
            LogMessage::Raw(text) => self.log_raw(text, requested, None),
        }
    }

    /// Submit raw text together with an auxiliary payload.
    ///
    /// The payload is encoded to a JSON value up front; an unencodable
    /// payload fails synchronously and nothing is forwarded.
    pub fn log_with<T: Serialize>(
        &self,
        message: impl Into<String>,
        requested: LogLevel,
        extra_data: &T,
    ) -> Result<(), LogTreeError> {
        let value = serde_json::to_value(extra_data)?;
        self.log_raw(message.into(), requested, Some(value))
    }

    fn log_raw(
        &self,
        text: String,
        requested: LogLevel,
        extra_data: Option<Value>,
    ) -> Result<(), LogTreeError> {
        if !self.current_level.accepts(requested) {
            debug!(
                manager = %self.id,
                requested = %requested,
                "message below configured mask, dropped"
            );
            return Ok(());
        }
        let record = Rc::new(LogRecord::new(self.id.clone(), text, extra_data));
        self.forward(&record)
    }

    // Fail-fast: the first child error propagates and later children are
    // not attempted.
    fn forward(&self, record: &Rc<LogRecord>) -> Result<(), LogTreeError> {
        trace!(manager = %self.id, children = self.children.len(), "forwarding record");
        for child in &self.children {
            child.accept(record)?;
        }
        Ok(())
    }
}

impl LogTarget for LogManager {
    fn accept(&self, record: &Rc<LogRecord>) -> Result<(), LogTreeError> {
        self.forward(record)
    }
}
