use std::error::Error;
use std::fmt;

/// Validation failures raised by path generation and sampling.
/// None of these are retryable: the caller has to supply corrected input.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    InvalidSeed(String),
    InvalidConfig(String),
    OutOfRange(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathError::InvalidSeed(msg) => write!(f, "Invalid seed: {}", msg),
            PathError::InvalidConfig(msg) => write!(f, "Invalid path config: {}", msg),
            PathError::OutOfRange(msg) => write!(f, "Out of range: {}", msg),
        }
    }
}

impl Error for PathError {}

pub type PathResult<T> = Result<T, PathError>;
