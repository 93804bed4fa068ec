use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogTreeError {
    #[error("Invalid topology configuration: {0}")]
    Config(String),

    #[error("Unknown log level '{0}'")]
    UnknownLevel(String),

    #[error("Failed to encode extra data: {0}")]
    ExtraData(#[from] serde_json::Error),

    #[error("Target rejected record: {0}")]
    Target(String),
}
