use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{LogRecord, PlainRecord};
use crate::error::LogTreeError;
use crate::port::LogTarget;

/// Terminal accumulator: stores every record it receives, in arrival order,
/// without filtering or forwarding.
///
/// Growth is unbounded; the sink is meant for short-lived diagnostic
/// capture, read back through [`MemorySink::content`].
#[derive(Debug, Default)]
pub struct MemorySink {
    content: RefCell<Vec<Rc<LogRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle ready to be registered as a downstream target.
    pub fn shared() -> Rc<MemorySink> {
        Rc::new(Self::new())
    }

    /// Snapshot of every stored record, preserving arrival order.
    pub fn content(&self) -> Vec<PlainRecord> {
        self.content
            .borrow()
            .iter()
            .map(|record| record.content())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.content.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.borrow().is_empty()
    }
}

impl LogTarget for MemorySink {
    fn accept(&self, record: &Rc<LogRecord>) -> Result<(), LogTreeError> {
        self.content.borrow_mut().push(Rc::clone(record));
        Ok(())
    }
}
