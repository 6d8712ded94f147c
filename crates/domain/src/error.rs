use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    InvalidGridColumns(usize),
    InvalidGridCapacity(usize),
    InvalidCellSize(f32),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGridColumns(value) => {
                write!(f, "grid must have at least one column, got {value}")
            }
            Self::InvalidGridCapacity(value) => {
                write!(f, "grid capacity must be positive, got {value}")
            }
            Self::InvalidCellSize(value) => {
                write!(f, "grid cell size must be positive and finite, got {value}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
