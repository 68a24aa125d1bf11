//! Per-episode bookkeeping for the grid engine.
//!
//! [`EpisodeMetrics`] accumulates counters from the most recent
//! `reset()` onward. The engine updates it on every step; consumers
//! (training loops, logging) read it between steps.

use gridworld_core::Category;

/// Counters collected since the last reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpisodeMetrics {
    /// Steps taken since reset.
    pub steps: u64,
    /// Sum of rewards since reset.
    pub episode_return: f64,
    /// Reward objects consumed since reset.
    pub rewards_collected: u32,
    /// Hazard objects consumed since reset.
    pub hazards_hit: u32,
    /// Steps where the requested move was blocked by the grid edge.
    pub blocked_moves: u64,
}

impl EpisodeMetrics {
    /// Record a consumed object of `category`.
    pub(crate) fn record_consumption(&mut self, category: Category) {
        match category {
            Category::RewardObject => self.rewards_collected += 1,
            Category::HazardObject => self.hazards_hit += 1,
            Category::Agent => {}
        }
    }

    /// Record one completed step and its reward.
    pub(crate) fn record_step(&mut self, reward: f32) {
        self.steps += 1;
        self.episode_return += f64::from(reward);
    }

    /// Total objects consumed since reset.
    pub fn objects_consumed(&self) -> u32 {
        self.rewards_collected + self.hazards_hit
    }
}
