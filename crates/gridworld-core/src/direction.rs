//! Discrete movement actions.

use std::fmt;

use crate::error::GridError;

/// Cardinal direction for agent movement.
///
/// The discriminants are the raw action indices exposed through the
/// action space: `Up = 0`, `Down = 1`, `Left = 2`, `Right = 3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Move one cell up (row - 1).
    Up = 0,
    /// Move one cell down (row + 1).
    Down = 1,
    /// Move one cell left (column - 1).
    Left = 2,
    /// Move one cell right (column + 1).
    Right = 3,
}

impl Direction {
    /// All directions, ordered by action index.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Number of discrete actions.
    pub const COUNT: usize = Self::ALL.len();

    /// Raw action index.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the `(dx, dy)` offset for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(GridError::InvalidAction { value })
    }
}

impl From<Direction> for u8 {
    fn from(d: Direction) -> Self {
        d.index()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
