use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistError {
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    EmptyGrid,
}

impl fmt::Display for DistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, actual } => write!(
                f,
                "grid shape mismatch: declared {}x{}, actual {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
        }
    }
}

impl std::error::Error for DistError {}

pub type Result<T> = std::result::Result<T, DistError>;
