use std::{error::Error, fmt};

/// Recoverable failures raised by the engine and the controller.
/// None of these are fatal; the controller logs them and carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// A (row, col) pair outside the grid
    OutOfBounds { row: i32, col: i32 },
    /// A template name missing from the registry
    UnknownTemplate(String),
    /// A theme row that does not exist
    InvalidThemeIndex(usize),
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeError::OutOfBounds { row, col } => {
                write!(f, "cell ({row}, {col}) is outside the grid")
            }
            LifeError::UnknownTemplate(name) => write!(f, "no template named {name:?}"),
            LifeError::InvalidThemeIndex(index) => write!(f, "no theme at index {index}"),
        }
    }
}

impl Error for LifeError {}

pub type Result<T> = std::result::Result<T, LifeError>;
