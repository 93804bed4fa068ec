pub mod log_target;

pub use log_target::{LogTarget, SharedTarget};
