//! Engine configuration, validation, and error types.
//!
//! [`GridConfig`] is the builder-input for [`GridEngine`](crate::GridEngine).
//! [`validate()`](GridConfig::validate) checks structural invariants at
//! construction time; nothing is re-checked per step.

use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GridConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid side length is zero.
    EmptyGrid,
    /// Grid side length exceeds [`GridConfig::MAX_SIZE`].
    GridTooLarge {
        /// The configured size.
        size: u32,
        /// The largest accepted size.
        max: u32,
    },
    /// `max_episode_steps` is `Some(0)`.
    ZeroStepLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid size must be at least 1"),
            Self::GridTooLarge { size, max } => {
                write!(f, "grid size {size} exceeds maximum of {max}")
            }
            Self::ZeroStepLimit => write!(f, "max_episode_steps must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── GridConfig ─────────────────────────────────────────────────────

/// Complete configuration for constructing a [`GridEngine`](crate::GridEngine).
///
/// Grids too small to hold the seven spawned entities pass validation;
/// `reset()` reports [`GridFull`](gridworld_core::GridError::GridFull)
/// for them instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Grid side length in cells. Default: 9.
    pub size: u32,
    /// Render a 3×3 egocentric window instead of the full grid. Default: false.
    pub partial: bool,
    /// RNG seed for deterministic placement. Default: 0.
    pub seed: u64,
    /// Report `terminal` once this many steps have elapsed since reset.
    /// `None` disables the limit. Default: `None`.
    pub max_episode_steps: Option<u64>,
}

impl GridConfig {
    /// Largest accepted grid side length.
    pub const MAX_SIZE: u32 = 1024;

    /// Configuration for a `size × size` grid with all other fields
    /// at their defaults.
    pub fn with_size(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.size > Self::MAX_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.size,
                max: Self::MAX_SIZE,
            });
        }
        if self.max_episode_steps == Some(0) {
            return Err(ConfigError::ZeroStepLimit);
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 9,
            partial: false,
            seed: 0,
            max_episode_steps: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.size, 9);
        assert!(!cfg.partial);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_size_rejected() {
        assert_eq!(
            GridConfig::with_size(0).validate(),
            Err(ConfigError::EmptyGrid)
        );
    }

    #[test]
    fn oversized_grid_rejected() {
        let err = GridConfig::with_size(GridConfig::MAX_SIZE + 1)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::GridTooLarge {
                size: 1025,
                max: 1024
            }
        );
        assert_eq!(err.to_string(), "grid size 1025 exceeds maximum of 1024");
    }

    #[test]
    fn small_grid_passes_validation() {
        assert!(GridConfig::with_size(1).validate().is_ok());
    }

    #[test]
    fn zero_step_limit_rejected() {
        let cfg = GridConfig {
            max_episode_steps: Some(0),
            ..GridConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroStepLimit));
    }
}
