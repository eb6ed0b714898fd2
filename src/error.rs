use thiserror::Error;

/// Error types
#[derive(Debug, Error)]
pub enum Error {
    /// A control parameter is missing, malformed or out of range
    #[error("invalid parameter `{field}`: {reason}")]
    Config { field: &'static str, reason: String },

    /// The requested system does not fit in the configured capacity
    #[error("system of {requested} atoms exceeds the maximum of {max}")]
    Capacity { requested: usize, max: usize },

    /// A position, velocity or energy became NaN or infinite
    #[error("non-finite {quantity} detected after step {step}")]
    NumericInstability { step: usize, quantity: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Error::Config {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
