//! Grid simulation and rendering engine.
//!
//! Provides [`GridEngine`], a single-agent environment on an N×N grid
//! holding reward and hazard objects. Each step moves the agent, resolves
//! collisions (consumed objects respawn on a free cell), and renders an
//! 84×84×3 image observation.
//!
//! # Step order
//!
//! 1. [`GridEngine::move_agent`]: clamped single-cell move.
//! 2. [`GridEngine::resolve_collisions`]: consume and respawn at most one object.
//! 3. [`GridEngine::render`]: rasterize, optionally crop, resample.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocator;
pub mod config;
pub mod engine;
pub mod factory;
pub mod metrics;
pub mod render;

pub use allocator::new_position;
pub use config::{ConfigError, GridConfig};
pub use engine::{GridEngine, StepOutcome, SPAWN_ORDER};
pub use factory::{
    generate_entity, generate_entity_from_tag, HAZARD_OBJECT_PAYOUT, REWARD_OBJECT_PAYOUT,
};
pub use metrics::EpisodeMetrics;
pub use render::{Canvas, Observation, OBS_CHANNELS, OBS_HEIGHT, OBS_WIDTH};
