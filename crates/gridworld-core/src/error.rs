//! Error types for the gridworld environment.
//!
//! A single enum covers the entity collection, the placement allocator,
//! the entity factory, and the engine's episode lifecycle. Out-of-bounds
//! movement has no variant: it is a silent no-op.

use std::error::Error;
use std::fmt;

use crate::entity::Category;

/// Errors raised by the gridworld core and engine.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// An entity failed well-formedness checks on insert or replace.
    InvalidElement {
        /// Which check failed.
        reason: String,
    },
    /// Removal by value found no equal entity in the collection.
    NotFound,
    /// An index-based access fell outside the collection.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Collection length at the time of the access.
        len: usize,
    },
    /// The placement allocator has no unoccupied cell left.
    GridFull {
        /// Side length of the exhausted grid.
        size: u32,
    },
    /// A category tag from an untyped boundary matched no known category.
    UnknownCategory {
        /// The rejected tag, as received.
        tag: String,
    },
    /// A consumed entity carried a reward that does not match its category.
    UnknownReward {
        /// Category of the consumed entity.
        category: Category,
        /// The reward it carried.
        reward: Option<f32>,
    },
    /// A raw action index does not name a movement direction.
    InvalidAction {
        /// The rejected action index.
        value: u8,
    },
    /// An explicit layout violates the engine's placement invariants.
    InvalidLayout {
        /// Which invariant was violated.
        reason: String,
    },
    /// The engine was used before the first `reset()`.
    NotReset,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidElement { reason } => write!(f, "invalid element: {reason}"),
            Self::NotFound => write!(f, "element not found in collection"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for collection of length {len}")
            }
            Self::GridFull { size } => {
                write!(f, "no unoccupied cell left on {size}x{size} grid")
            }
            Self::UnknownCategory { tag } => write!(f, "unknown category tag '{tag}'"),
            Self::UnknownReward { category, reward } => match reward {
                Some(r) => write!(f, "unexpected reward {r} for {category}"),
                None => write!(f, "missing reward for {category}"),
            },
            Self::InvalidAction { value } => {
                write!(f, "action {value} is not a movement direction")
            }
            Self::InvalidLayout { reason } => write!(f, "invalid layout: {reason}"),
            Self::NotReset => write!(f, "engine used before reset"),
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GridError::GridFull { size: 1 }.to_string(),
            "no unoccupied cell left on 1x1 grid"
        );
        assert_eq!(
            GridError::IndexOutOfBounds { index: 7, len: 3 }.to_string(),
            "index 7 out of bounds for collection of length 3"
        );
        assert_eq!(
            GridError::UnknownCategory {
                tag: "wall".into()
            }
            .to_string(),
            "unknown category tag 'wall'"
        );
    }

    #[test]
    fn unknown_reward_reports_missing_value() {
        let err = GridError::UnknownReward {
            category: Category::HazardObject,
            reward: None,
        };
        assert_eq!(err.to_string(), "missing reward for hazard");
    }
}
