//! Gridworld: a single-agent reinforcement learning environment on an N×N grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the gridworld sub-crates. Adding `gridworld` as a single dependency is
//! enough for training loops.
//!
//! # Quick start
//!
//! ```rust
//! use gridworld::prelude::*;
//!
//! let config = GridConfig {
//!     size: 9,
//!     partial: false,
//!     seed: 42,
//!     max_episode_steps: Some(50),
//! };
//! let mut env = GridEngine::new(config).unwrap();
//! let obs = env.reset().unwrap();
//! assert_eq!(obs.shape(), [84, 84, 3]);
//!
//! let mut total = 0.0;
//! loop {
//!     let outcome = env.step(Direction::Right).unwrap();
//!     total += outcome.reward;
//!     if outcome.terminal {
//!         break;
//!     }
//! }
//! assert_eq!(env.steps(), 50);
//! assert_eq!(f64::from(total), env.metrics().episode_return);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridworld-core` | Positions, entities, categories, directions, errors |
//! | [`engine`] | `gridworld-engine` | The environment, placement, factory, rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`gridworld-core`).
///
/// [`types::Entity`], [`types::EntityCollection`], [`types::Category`],
/// [`types::Direction`], and the shared [`types::GridError`].
pub use gridworld_core as types;

/// Environment, placement, and rendering (`gridworld-engine`).
///
/// [`engine::GridEngine`] drives episodes; [`engine::render`] exposes the
/// rasterizer and resampler on their own.
pub use gridworld_engine as engine;

/// Common imports for typical gridworld usage.
///
/// ```rust
/// use gridworld::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridworld_core::{
        Category, Direction, Entity, EntityCollection, GridError, Position,
    };

    // Engine
    pub use gridworld_engine::{
        ConfigError, EpisodeMetrics, GridConfig, GridEngine, Observation, StepOutcome,
    };
}
