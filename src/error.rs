//! Error types and handling

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A selection that requires candidates was handed an empty set
    EmptyCandidates,
    /// A target dimension was zero
    InvalidTarget { width: u32, height: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidates => write!(f, "candidate set is empty"),
            Self::InvalidTarget { width, height } => {
                write!(f, "invalid target dimensions: {width}x{height}")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T, E = Error> = std::result::Result<T, E>;
