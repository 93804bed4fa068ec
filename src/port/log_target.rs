use std::rc::Rc;

use crate::domain::LogRecord;
use crate::error::LogTreeError;

/// Downstream log target: anything that can receive a record.
///
/// Managers and sinks both implement this trait, so a downstream list is
/// polymorphic over the two. Filtering is not part of the contract; it
/// happens exactly once, where a raw submission enters the topology.
pub trait LogTarget {
    fn accept(&self, record: &Rc<LogRecord>) -> Result<(), LogTreeError>;
}

/// Shared handle under which targets are registered downstream.
///
/// Targets carry no interior mutability over their wiring, so once a target
/// is behind this handle no further edges can originate from it. Combined
/// with `add_output_to` requiring exclusive access, edges always point at
/// fully built nodes and the topology stays acyclic by construction.
pub type SharedTarget = Rc<dyn LogTarget>;
