//! Grid positions, entity categories, and the [`Entity`] record.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

/// Number of colour channels an entity can paint into.
pub const CHANNEL_COUNT: usize = 3;

/// A grid cell coordinate. `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column index, `0 <= x < size`.
    pub x: u32,
    /// Row index, `0 <= y < size`.
    pub y: u32,
}

impl Position {
    /// Create a position from column and row.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Position {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The kind of object an [`Entity`] represents.
///
/// Raw tags arriving from an untyped boundary are converted with
/// [`TryFrom<u8>`] or [`FromStr`]; anything else is
/// [`GridError::UnknownCategory`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    /// The single controllable entity.
    Agent = 0,
    /// Grants a positive reward and respawns when reached.
    RewardObject = 1,
    /// Grants a negative reward and respawns when reached.
    HazardObject = 2,
}

impl Category {
    /// Stable lowercase name, used for display and parsing.
    pub fn name(self) -> &'static str {
        match self {
            Category::Agent => "agent",
            Category::RewardObject => "reward",
            Category::HazardObject => "hazard",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Category {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Category::Agent),
            1 => Ok(Category::RewardObject),
            2 => Ok(Category::HazardObject),
            other => Err(GridError::UnknownCategory {
                tag: other.to_string(),
            }),
        }
    }
}

impl FromStr for Category {
    type Err = GridError;

    /// Accepts `agent`/`hero`, `reward`/`goal`, and `hazard`/`fire`,
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "agent" | "hero" => Ok(Category::Agent),
            "reward" | "goal" => Ok(Category::RewardObject),
            "hazard" | "fire" => Ok(Category::HazardObject),
            _ => Err(GridError::UnknownCategory { tag: s.to_string() }),
        }
    }
}

/// One object on the grid.
///
/// Fields are public so layouts can be built by hand; the
/// [`EntityCollection`](crate::EntityCollection) runs [`validate()`](Entity::validate)
/// on every insert and replace, so a malformed entity never reaches the
/// engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    /// Top-left cell of the footprint.
    pub position: Position,
    /// Footprint side length in cells.
    pub size: u32,
    /// Value written into the rendered channel.
    pub intensity: f32,
    /// Colour channel this entity paints, `< CHANNEL_COUNT`.
    pub channel: u8,
    /// Payout when reached by the agent. `None` for the agent itself.
    pub reward: Option<f32>,
    /// What kind of object this is.
    pub category: Category,
}

impl Entity {
    /// Check the well-formedness contract.
    ///
    /// Returns a human-readable reason on failure; the collection wraps
    /// it into [`GridError::InvalidElement`].
    pub fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err("footprint size must be at least 1".into());
        }
        if usize::from(self.channel) >= CHANNEL_COUNT {
            return Err(format!(
                "channel {} out of range (must be < {CHANNEL_COUNT})",
                self.channel
            ));
        }
        if !self.intensity.is_finite() {
            return Err(format!("intensity must be finite, got {}", self.intensity));
        }
        match (self.category, self.reward) {
            (Category::Agent, Some(r)) => Err(format!("agent must carry no reward, got {r}")),
            (Category::Agent, None) => Ok(()),
            (category, None) => Err(format!("{category} object must carry a reward")),
            (_, Some(r)) if !r.is_finite() => Err(format!("reward must be finite, got {r}")),
            (_, Some(_)) => Ok(()),
        }
    }

    /// Whether this entity is the agent.
    pub fn is_agent(&self) -> bool {
        self.category == Category::Agent
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.category, self.position)?;
        if let Some(r) = self.reward {
            write!(f, "[{r:+}]")?;
        }
        Ok(())
    }
}
