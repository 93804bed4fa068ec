#![warn(rust_2018_idioms)]

pub mod config;
pub mod domain;
pub mod error;
pub mod manager;
pub mod port;
pub mod sink;
pub mod topology;

pub use config::{NodeSettings, TopologySettings};
pub use domain::{LogLevel, LogMessage, LogRecord, PlainRecord};
pub use error::LogTreeError;
pub use manager::LogManager;
pub use port::{LogTarget, SharedTarget};
pub use sink::MemorySink;
pub use topology::Topology;
