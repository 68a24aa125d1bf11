//! Benchmark profiles and utilities for the gridworld environment.
//!
//! Provides pre-built [`GridConfig`] profiles for benchmarks and examples:
//!
//! - [`demo_profile`]: 9×9 grid, full view, 50-step episodes
//! - [`partial_profile`]: 9×9 grid with the 3×3 egocentric view
//! - [`large_profile`]: 256×256 grid for stress testing render cost
//! - [`action_sequence`]: deterministic action stream via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridworld_core::Direction;
use gridworld_engine::GridConfig;

/// Step limit used by the demo profiles.
pub const DEMO_EPISODE_STEPS: u64 = 50;

/// Build the demo profile: 9×9 grid, full observation, 50-step episodes.
pub fn demo_profile(seed: u64) -> GridConfig {
    GridConfig {
        size: 9,
        partial: false,
        seed,
        max_episode_steps: Some(DEMO_EPISODE_STEPS),
    }
}

/// Same as [`demo_profile`] but rendering the 3×3 window around the agent.
pub fn partial_profile(seed: u64) -> GridConfig {
    GridConfig {
        partial: true,
        ..demo_profile(seed)
    }
}

/// Build a large profile: 256×256 grid, full observation, no step limit.
///
/// Rasterization dominates here; the resample still outputs 84×84.
pub fn large_profile(seed: u64) -> GridConfig {
    GridConfig {
        size: 256,
        partial: false,
        seed,
        max_episode_steps: None,
    }
}

/// Generate a deterministic sequence of `len` actions from `seed`.
pub fn action_sequence(len: usize, seed: u64) -> Vec<Direction> {
    (0..len as u64)
        .map(|i| {
            let mixed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            Direction::ALL[((mixed >> 33) % Direction::COUNT as u64) as usize]
        })
        .collect()
}
